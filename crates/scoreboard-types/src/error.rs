//! Error types for the scoreboard.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Argument errors (team names, scores)
//! - 2xx: Registry state errors
//! - 3xx: Resource limits
//! - 9xx: Configuration / serialization

use thiserror::Error;

use crate::{MatchKey, Side};

/// Coarse classification of a [`ScoreboardError`].
///
/// Every kind is caller misuse, never a transient condition: retrying the
/// same call against the same board fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    AlreadyExists,
    NotFound,
    CapacityExceeded,
    Configuration,
}

/// Central error enum for all scoreboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    // =================================================================
    // Argument Errors (1xx)
    // =================================================================
    /// A team name was empty after trimming whitespace.
    #[error("SB_ERR_100: Team names cannot be empty: {side} team is blank")]
    EmptyTeamName { side: Side },

    /// A team name exceeded the configured length limit.
    #[error("SB_ERR_101: Team name too long: {side} team has {len} characters, max {max}")]
    TeamNameTooLong { side: Side, len: usize, max: usize },

    /// At least one score was below zero.
    #[error("SB_ERR_102: Scores cannot be negative: got {home}-{away}")]
    NegativeScore { home: i64, away: i64 },

    /// At least one score does not fit the stored score width.
    #[error("SB_ERR_103: Score out of range: got {home}-{away}")]
    ScoreOutOfRange { home: i64, away: i64 },

    // =================================================================
    // Registry State Errors (2xx)
    // =================================================================
    /// A match with this exact (home, away) pair is already active.
    #[error("SB_ERR_200: Match between {home} and {away} already exists")]
    MatchAlreadyExists { home: String, away: String },

    /// No active match with this exact (home, away) pair.
    #[error("SB_ERR_201: Match between {home} and {away} not found")]
    MatchNotFound { home: String, away: String },

    // =================================================================
    // Resource Limits (3xx)
    // =================================================================
    /// The board already holds its configured maximum of active matches.
    #[error("SB_ERR_300: Scoreboard full: {capacity} active matches")]
    CapacityExceeded { capacity: usize },

    // =================================================================
    // Configuration / Serialization (9xx)
    // =================================================================
    /// Invalid configuration values.
    #[error("SB_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("SB_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

impl ScoreboardError {
    #[must_use]
    pub fn already_exists(key: &MatchKey) -> Self {
        Self::MatchAlreadyExists {
            home: key.home().to_string(),
            away: key.away().to_string(),
        }
    }

    #[must_use]
    pub fn not_found(key: &MatchKey) -> Self {
        Self::MatchNotFound {
            home: key.home().to_string(),
            away: key.away().to_string(),
        }
    }

    /// The kind of misuse this error reports.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTeamName { .. }
            | Self::TeamNameTooLong { .. }
            | Self::NegativeScore { .. }
            | Self::ScoreOutOfRange { .. } => ErrorKind::InvalidArgument,
            Self::MatchAlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::MatchNotFound { .. } => ErrorKind::NotFound,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::Configuration(_) | Self::Serialization(_) => ErrorKind::Configuration,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ScoreboardError>;

impl From<serde_json::Error> for ScoreboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
