//! Thread-safe handle to a [`Scoreboard`].
//!
//! Each operation holds the lock for its whole validate-lookup-mutate
//! sequence, so concurrent callers observe every call as atomic. Mutations
//! take the write lock; summaries and queries take the read lock.

use std::sync::Arc;

use parking_lot::RwLock;
use scoreboard_types::{Match, MatchId, Result, ScoreboardConfig};

use crate::scoreboard::Scoreboard;
use crate::summary::Summary;

/// Cloneable, `Send + Sync` scoreboard handle. Clones share one board.
#[derive(Debug, Clone, Default)]
pub struct SharedScoreboard {
    inner: Arc<RwLock<Scoreboard>>,
}

impl SharedScoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Scoreboard::new())
    }

    pub fn with_config(config: ScoreboardConfig) -> Result<Self> {
        Ok(Self::from_board(Scoreboard::with_config(config)?))
    }

    #[must_use]
    pub fn from_board(board: Scoreboard) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    pub fn start_match(&self, home: &str, away: &str) -> Result<MatchId> {
        self.inner.write().start_match(home, away)
    }

    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        self.inner
            .write()
            .update_score(home, away, home_score, away_score)
    }

    pub fn finish_match(&self, home: &str, away: &str) -> Result<Match> {
        self.inner.write().finish_match(home, away)
    }

    #[must_use]
    pub fn summary(&self) -> Vec<Match> {
        self.inner.read().summary()
    }

    #[must_use]
    pub fn snapshot(&self) -> Summary {
        self.inner.read().snapshot()
    }

    /// Copy of one active match.
    #[must_use]
    pub fn get(&self, home: &str, away: &str) -> Option<Match> {
        self.inner.read().get(home, away).cloned()
    }

    /// Copy of the active match started under `id`.
    #[must_use]
    pub fn get_by_id(&self, id: MatchId) -> Option<Match> {
        self.inner.read().get_by_id(id).cloned()
    }

    #[must_use]
    pub fn contains(&self, home: &str, away: &str) -> bool {
        self.inner.read().contains(home, away)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run several reads under one read lock.
    pub fn with_board<R>(&self, f: impl FnOnce(&Scoreboard) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run several mutations under one write lock.
    pub fn with_board_mut<R>(&self, f: impl FnOnce(&mut Scoreboard) -> R) -> R {
        f(&mut *self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use scoreboard_types::ErrorKind;

    use super::*;

    #[test]
    fn clones_share_state() {
        let a = SharedScoreboard::new();
        let b = a.clone();
        a.start_match("Brazil", "Argentina").unwrap();
        b.update_score("Brazil", "Argentina", 1, 1).unwrap();
        assert_eq!(a.get("Brazil", "Argentina").unwrap().total_score(), 2);
    }

    #[test]
    fn get_by_id_returns_copy() {
        let board = SharedScoreboard::new();
        let id = board.start_match("Brazil", "Argentina").unwrap();
        let copy = board.get_by_id(id).unwrap();
        board.update_score("Brazil", "Argentina", 4, 0).unwrap();
        assert_eq!(copy.total_score(), 0);
        assert_eq!(board.get_by_id(id).unwrap().total_score(), 4);
    }

    #[test]
    fn concurrent_duplicate_start_has_one_winner() {
        let board = SharedScoreboard::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let board = board.clone();
                thread::spawn(move || board.start_match("Spain", "Brazil"))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);
        for err in results.into_iter().filter_map(std::result::Result::err) {
            assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        }
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn concurrent_distinct_starts_all_land() {
        let board = SharedScoreboard::new();
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let board = board.clone();
                thread::spawn(move || {
                    let home = format!("home{i}");
                    board.start_match(&home, "away").unwrap();
                    board.update_score(&home, "away", i, 0).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let summary = board.summary();
        assert_eq!(summary.len(), 16);
        assert_eq!(summary[0].home(), "home15");
        assert_eq!(summary[15].home(), "home0");
    }

    #[test]
    fn with_board_mut_batches_under_one_lock() {
        let board = SharedScoreboard::new();
        board
            .with_board_mut(|b| -> Result<()> {
                b.start_match("A", "B")?;
                b.update_score("A", "B", 2, 0)?;
                Ok(())
            })
            .unwrap();
        assert_eq!(board.with_board(Scoreboard::len), 1);
        assert!(board.contains("A", "B"));
    }
}
