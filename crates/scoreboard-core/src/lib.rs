//! # scoreboard-core
//!
//! **In-memory live scoreboard.**
//!
//! Tracks ongoing matches and ranks them on demand:
//!
//! - **Start / update / finish**: keyed by the ordered (home, away) pair,
//!   each call all-or-nothing
//! - **Summary**: total score descending, most recently started first on
//!   ties, with a start sequence making the order total
//! - **Digest**: SHA-256 fingerprint of a ranked summary
//! - **Sharing**: [`SharedScoreboard`] guards a board behind one lock

pub mod digest;
pub mod ranking;
pub mod scoreboard;
pub mod shared;
pub mod summary;

pub use digest::{compute_summary_digest, verify_summary_digest};
pub use ranking::{rank_matches, summary_order};
pub use scoreboard::Scoreboard;
pub use shared::SharedScoreboard;
pub use summary::Summary;
