//! The match entity: one fixture between two named sides with a live score.
//!
//! Identity is the ordered `(home, away)` pair. Scores, timestamps and the
//! start sequence are excluded from equality and hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchId, MatchKey, Result, ScoreboardError};

/// A single ongoing match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    key: MatchKey,
    home_score: u32,
    away_score: u32,
    /// Start order on the owning board. Strictly increasing per board.
    sequence: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Match {
    /// Create a 0-0 match stamped with the current time.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Result<Self> {
        Ok(Self::from_key(MatchKey::new(home, away)?, 0, Utc::now()))
    }

    /// Create a 0-0 match for an already validated key.
    #[must_use]
    pub fn from_key(key: MatchKey, sequence: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MatchId::new(),
            key,
            home_score: 0,
            away_score: 0,
            sequence,
            created_at,
            updated_at: created_at,
        }
    }

    /// Replace both scores. Either both change or neither does.
    ///
    /// # Errors
    /// - `NegativeScore` if either score is below zero
    /// - `ScoreOutOfRange` if either score exceeds `u32::MAX`
    pub fn set_score(&mut self, home: i64, away: i64) -> Result<()> {
        if home < 0 || away < 0 {
            return Err(ScoreboardError::NegativeScore { home, away });
        }
        let (Ok(h), Ok(a)) = (u32::try_from(home), u32::try_from(away)) else {
            return Err(ScoreboardError::ScoreOutOfRange { home, away });
        };
        self.home_score = h;
        self.away_score = a;
        self.updated_at = Utc::now();
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub fn key(&self) -> &MatchKey {
        &self.key
    }

    #[must_use]
    pub fn home(&self) -> &str {
        self.key.home()
    }

    #[must_use]
    pub fn away(&self) -> &str {
        self.key.away()
    }

    #[must_use]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[must_use]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    /// Sum of both scores. Widened so it cannot overflow.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last score change, or `created_at` if never scored.
    /// Informational only; ranking ignores it.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Match {}

impl Hash for Match {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.key.home, self.home_score, self.key.away, self.away_score
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Match {
    /// Build a match with explicit scores, sequence and start time.
    /// Names are not validated.
    pub fn dummy_at(
        home: &str,
        away: &str,
        home_score: u32,
        away_score: u32,
        sequence: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MatchId::new(),
            key: MatchKey {
                home: home.to_string(),
                away: away.to_string(),
            },
            home_score,
            away_score,
            sequence,
            created_at,
            updated_at: created_at,
        }
    }
}
