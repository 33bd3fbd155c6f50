//! Identifiers used throughout the scoreboard.
//!
//! A match is identified by its ordered `(home, away)` pair ([`MatchKey`]).
//! [`MatchId`] is an opaque UUIDv7 handle assigned at start time for callers
//! that want something shorter than two team names; it never takes part in
//! equality.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, ScoreboardError};

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which side of a fixture a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Away => write!(f, "Away"),
        }
    }
}

// ---------------------------------------------------------------------------
// MatchId
// ---------------------------------------------------------------------------

/// Opaque match handle. Uses UUIDv7 so handles sort by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// MatchKey
// ---------------------------------------------------------------------------

/// The ordered `(home, away)` pair identifying an active match.
///
/// "A vs B" and "B vs A" are different keys. Names are kept exactly as
/// given (no trimming, no case folding); only blank names are rejected.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawMatchKey")]
pub struct MatchKey {
    pub(crate) home: String,
    pub(crate) away: String,
}

impl MatchKey {
    /// Build a key, rejecting blank names. The home side is checked first.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Result<Self> {
        let home = home.into();
        let away = away.into();
        validate_team_name(&home, Side::Home)?;
        validate_team_name(&away, Side::Away)?;
        Ok(Self { home, away })
    }

    #[must_use]
    pub fn home(&self) -> &str {
        &self.home
    }

    #[must_use]
    pub fn away(&self) -> &str {
        &self.away
    }

    /// Team name on the given side.
    #[must_use]
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

/// Unvalidated wire form of a [`MatchKey`].
#[derive(Deserialize)]
struct RawMatchKey {
    home: String,
    away: String,
}

impl TryFrom<RawMatchKey> for MatchKey {
    type Error = ScoreboardError;

    fn try_from(raw: RawMatchKey) -> Result<Self> {
        Self::new(raw.home, raw.away)
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Reject names that are empty once surrounding whitespace is trimmed.
pub fn validate_team_name(name: &str, side: Side) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ScoreboardError::EmptyTeamName { side });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_id_uniqueness() {
        let a = MatchId::new();
        let b = MatchId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn match_id_ordering() {
        let a = MatchId::new();
        let b = MatchId::new();
        assert!(a < b);
    }

    #[test]
    fn key_is_ordered_pair() {
        let ab = MatchKey::new("A", "B").unwrap();
        let ba = MatchKey::new("B", "A").unwrap();
        assert_ne!(ab, ba);
        assert_eq!(ab, MatchKey::new("A", "B").unwrap());
    }

    #[test]
    fn key_does_not_collide_on_separator_text() {
        // A concatenated "home vs away" string would make these equal.
        let a = MatchKey::new("A vs B", "C").unwrap();
        let b = MatchKey::new("A", "B vs C").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn key_keeps_names_verbatim() {
        let key = MatchKey::new(" Brazil ", "Argentina").unwrap();
        assert_eq!(key.home(), " Brazil ");
        assert_ne!(key, MatchKey::new("Brazil", "Argentina").unwrap());
    }

    #[test]
    fn blank_home_rejected_first() {
        let err = MatchKey::new("  ", "").unwrap_err();
        assert_eq!(err, ScoreboardError::EmptyTeamName { side: Side::Home });
    }

    #[test]
    fn blank_away_rejected() {
        let err = MatchKey::new("Brazil", "\t\n").unwrap_err();
        assert_eq!(err, ScoreboardError::EmptyTeamName { side: Side::Away });
    }

    #[test]
    fn team_by_side() {
        let key = MatchKey::new("Spain", "France").unwrap();
        assert_eq!(key.team(Side::Home), "Spain");
        assert_eq!(key.team(Side::Away), "France");
    }

    #[test]
    fn serde_roundtrips() {
        let id = MatchId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: MatchId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let key = MatchKey::new("Uruguay", "Italy").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let back: MatchKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }

    #[test]
    fn deserialize_rejects_blank_names() {
        let err = serde_json::from_str::<MatchKey>(r#"{"home":"  ","away":"Italy"}"#).unwrap_err();
        assert!(err.to_string().contains("SB_ERR_100"), "Got: {err}");

        let err = serde_json::from_str::<MatchKey>(r#"{"home":"Uruguay","away":""}"#).unwrap_err();
        assert!(err.to_string().contains("Away"), "Got: {err}");
    }
}
