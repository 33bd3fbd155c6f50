//! Point-in-time ranked snapshot of a board.

use chrono::{DateTime, Utc};
use scoreboard_types::Match;

use crate::digest::{compute_summary_digest, verify_summary_digest};

/// Ranked copy of every active match plus when it was taken.
///
/// Owns its matches: nothing done to a `Summary` reaches the board it came
/// from.
#[derive(Debug, Clone)]
pub struct Summary {
    matches: Vec<Match>,
    generated_at: DateTime<Utc>,
    digest: [u8; 32],
}

impl Summary {
    /// Wrap matches that are already in summary order.
    #[must_use]
    pub fn from_ranked(matches: Vec<Match>) -> Self {
        let digest = compute_summary_digest(&matches);
        Self {
            matches,
            generated_at: Utc::now(),
            digest,
        }
    }

    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    #[must_use]
    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }

    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    #[must_use]
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }

    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// `true` if the stored digest still matches the stored matches.
    #[must_use]
    pub fn verify(&self) -> bool {
        verify_summary_digest(&self.matches, &self.digest)
    }

    /// Display lines, one per match, in rank order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.matches.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
