//! System-wide constants for the scoreboard.

/// Default maximum number of simultaneously active matches on one board.
pub const DEFAULT_MAX_ACTIVE_MATCHES: usize = 1024;

/// Default maximum team name length, in characters after trimming.
pub const DEFAULT_MAX_TEAM_NAME_LEN: usize = 64;

/// Domain separation tag for summary digests.
pub const SUMMARY_DIGEST_DOMAIN: &[u8] = b"scoreboard:summary:v1:";

