//! Summary digests.
//!
//! A digest is a SHA-256 over the ranked summary: team names and scores in
//! summary order. Timestamps, ids and sequences are left out, so two boards
//! showing the same table produce the same digest. A transport layer can
//! compare digests instead of full payloads to tell whether anything moved.

use scoreboard_types::{Match, constants};
use sha2::{Digest, Sha256};

/// Compute the digest of an already ranked summary.
///
/// Names are length-prefixed so `("AB", "C")` and `("A", "BC")` hash
/// differently.
#[must_use]
pub fn compute_summary_digest(matches: &[Match]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::SUMMARY_DIGEST_DOMAIN);
    hasher.update((matches.len() as u64).to_le_bytes());

    for m in matches {
        hasher.update((m.home().len() as u64).to_le_bytes());
        hasher.update(m.home().as_bytes());
        hasher.update((m.away().len() as u64).to_le_bytes());
        hasher.update(m.away().as_bytes());
        hasher.update(m.home_score().to_le_bytes());
        hasher.update(m.away_score().to_le_bytes());
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare it with `expected`.
#[must_use]
pub fn verify_summary_digest(matches: &[Match], expected: &[u8; 32]) -> bool {
    compute_summary_digest(matches) == *expected
}
