//! Summary ordering.
//!
//! Matches are ranked by:
//! 1. total score, highest first
//! 2. start time, most recent first
//! 3. start sequence, highest first
//!
//! The sequence is strictly increasing per board and unique among active
//! matches, so the order is total even when two matches share a total and
//! a timestamp.

use std::cmp::Ordering;

use scoreboard_types::Match;

/// Comparator for summary order. `Ordering::Less` means `a` ranks above `b`.
#[must_use]
pub fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.created_at().cmp(&a.created_at()))
        .then_with(|| b.sequence().cmp(&a.sequence()))
}

/// Sort matches in place into summary order.
pub fn rank_matches(matches: &mut [Match]) {
    matches.sort_by(summary_order);
}
