//! # scoreboard-types
//!
//! Shared types, errors, and configuration for the live **scoreboard**.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`MatchKey`], [`MatchId`], [`Side`]
//! - **Match model**: [`Match`]
//! - **Configuration**: [`ScoreboardConfig`]
//! - **Errors**: [`ScoreboardError`] with `SB_ERR_` prefix codes, [`ErrorKind`]
//! - **Constants**: limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod fixture;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use scoreboard_types::{Match, MatchKey, ScoreboardError, ...};

pub use config::*;
pub use error::*;
pub use fixture::*;
pub use ids::*;

// Constants are accessed via `scoreboard_types::constants::FOO`.
