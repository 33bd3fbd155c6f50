//! Configuration for a scoreboard instance.

use serde::{Deserialize, Serialize};

use crate::{Result, ScoreboardError, Side, constants};

/// Limits applied by a scoreboard.
///
/// Missing fields fall back to the defaults in [`constants`] when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Maximum number of simultaneously active matches.
    pub max_active_matches: usize,
    /// Maximum team name length, in characters after trimming.
    pub max_team_name_len: usize,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            max_active_matches: constants::DEFAULT_MAX_ACTIVE_MATCHES,
            max_team_name_len: constants::DEFAULT_MAX_TEAM_NAME_LEN,
        }
    }
}

impl ScoreboardConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject limits that would make every start fail.
    pub fn validate(&self) -> Result<()> {
        if self.max_active_matches == 0 {
            return Err(ScoreboardError::Configuration(
                "max_active_matches must be > 0".to_string(),
            ));
        }
        if self.max_team_name_len == 0 {
            return Err(ScoreboardError::Configuration(
                "max_team_name_len must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a team name against `max_team_name_len`.
    pub fn check_team_name_len(&self, name: &str, side: Side) -> Result<()> {
        let len = name.trim().chars().count();
        if len > self.max_team_name_len {
            return Err(ScoreboardError::TeamNameTooLong {
                side,
                len,
                max: self.max_team_name_len,
            });
        }
        Ok(())
    }
}
