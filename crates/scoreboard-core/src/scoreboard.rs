//! The registry of active matches.
//!
//! Storage mirrors an order book:
//! - **Matches**: `BTreeMap<u64, Match>` keyed by start sequence, so iteration
//!   is insertion order
//! - **Index**: `HashMap<MatchKey, u64>` for O(1) lookup by team pair
//!
//! Every operation validates both team names before touching state and is
//! all-or-nothing: a failed call leaves the board exactly as it was.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use scoreboard_types::*;

use crate::ranking::rank_matches;
use crate::summary::Summary;

/// In-memory scoreboard of ongoing matches.
///
/// Single writer: mutations take `&mut self`. Wrap in
/// [`SharedScoreboard`](crate::SharedScoreboard) to share across threads.
#[derive(Debug)]
pub struct Scoreboard {
    config: ScoreboardConfig,
    /// Active matches by start sequence.
    matches: BTreeMap<u64, Match>,
    /// `MatchKey -> sequence`.
    index: HashMap<MatchKey, u64>,
    next_sequence: u64,
    /// Latest `created_at` handed out; start times never go backwards.
    last_started_at: Option<DateTime<Utc>>,
}

impl Scoreboard {
    /// Create an empty board with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::build(ScoreboardConfig::default())
    }

    /// Create an empty board with custom limits.
    ///
    /// # Errors
    /// Returns `Configuration` if the config fails validation.
    pub fn with_config(config: ScoreboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ScoreboardConfig) -> Self {
        Self {
            config,
            matches: BTreeMap::new(),
            index: HashMap::new(),
            next_sequence: 0,
            last_started_at: None,
        }
    }

    // =================================================================
    // Mutations
    // =================================================================

    /// Start a 0-0 match between `home` and `away`.
    ///
    /// # Errors
    /// - `EmptyTeamName` / `TeamNameTooLong` for bad names
    /// - `MatchAlreadyExists` if this exact pair is already active
    /// - `CapacityExceeded` if the board is full
    pub fn start_match(&mut self, home: &str, away: &str) -> Result<MatchId> {
        let key = self.validate_key(home, away)?;

        if self.index.contains_key(&key) {
            tracing::warn!(home = %key.home(), away = %key.away(), "Duplicate start rejected");
            return Err(ScoreboardError::already_exists(&key));
        }
        if self.index.len() >= self.config.max_active_matches {
            tracing::warn!(
                home = %key.home(),
                away = %key.away(),
                capacity = self.config.max_active_matches,
                "Start rejected: scoreboard full"
            );
            return Err(ScoreboardError::CapacityExceeded {
                capacity: self.config.max_active_matches,
            });
        }

        let created_at = self.next_start_time();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let game = Match::from_key(key.clone(), sequence, created_at);
        let id = game.id();
        self.index.insert(key, sequence);
        self.matches.insert(sequence, game);

        tracing::info!(
            match_id = %id,
            home = %home,
            away = %away,
            sequence,
            active = self.index.len(),
            "Match started"
        );
        Ok(id)
    }

    /// Replace the score of an active match.
    ///
    /// # Errors
    /// - `EmptyTeamName` / `TeamNameTooLong` for bad names
    /// - `MatchNotFound` if the pair is not active
    /// - `NegativeScore` / `ScoreOutOfRange`; the previous score is kept
    pub fn update_score(
        &mut self,
        home: &str,
        away: &str,
        home_score: i64,
        away_score: i64,
    ) -> Result<()> {
        let key = self.validate_key(home, away)?;
        let game = self
            .index
            .get(&key)
            .and_then(|seq| self.matches.get_mut(seq))
            .ok_or_else(|| {
                tracing::warn!(home = %key.home(), away = %key.away(), "Score update for unknown match");
                ScoreboardError::not_found(&key)
            })?;

        game.set_score(home_score, away_score)?;

        tracing::debug!(
            match_id = %game.id(),
            home = %home,
            away = %away,
            home_score,
            away_score,
            "Score updated"
        );
        Ok(())
    }

    /// Finish an active match, removing it from the board. Returns the match
    /// as it stood at the final whistle.
    ///
    /// # Errors
    /// - `EmptyTeamName` / `TeamNameTooLong` for bad names
    /// - `MatchNotFound` if the pair is not active
    pub fn finish_match(&mut self, home: &str, away: &str) -> Result<Match> {
        let key = self.validate_key(home, away)?;
        let sequence = self.index.remove(&key).ok_or_else(|| {
            tracing::warn!(home = %key.home(), away = %key.away(), "Finish for unknown match");
            ScoreboardError::not_found(&key)
        })?;
        let game = self
            .matches
            .remove(&sequence)
            .ok_or_else(|| ScoreboardError::not_found(&key))?;

        tracing::info!(
            match_id = %game.id(),
            final_score = %game,
            active = self.index.len(),
            "Match finished"
        );
        Ok(game)
    }

    /// Remove every match. Returns them in start order.
    pub fn clear(&mut self) -> Vec<Match> {
        self.index.clear();
        let drained: Vec<Match> = std::mem::take(&mut self.matches).into_values().collect();
        tracing::info!(removed = drained.len(), "Scoreboard cleared");
        drained
    }

    // =================================================================
    // Summary
    // =================================================================

    /// Ranked copy of all active matches: total score descending, most
    /// recently started first on ties.
    #[must_use]
    pub fn summary(&self) -> Vec<Match> {
        let mut ranked: Vec<Match> = self.matches.values().cloned().collect();
        rank_matches(&mut ranked);
        tracing::debug!(entries = ranked.len(), "Summary generated");
        ranked
    }

    /// [`summary`](Self::summary) wrapped with a timestamp and digest.
    #[must_use]
    pub fn snapshot(&self) -> Summary {
        Summary::from_ranked(self.summary())
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Look up an active match. Returns `None` for blank names.
    #[must_use]
    pub fn get(&self, home: &str, away: &str) -> Option<&Match> {
        let key = MatchKey::new(home, away).ok()?;
        self.index.get(&key).and_then(|seq| self.matches.get(seq))
    }

    #[must_use]
    pub fn contains(&self, home: &str, away: &str) -> bool {
        self.get(home, away).is_some()
    }

    /// Look up an active match by the handle `start_match` returned.
    /// Linear in the number of active matches.
    #[must_use]
    pub fn get_by_id(&self, id: MatchId) -> Option<&Match> {
        self.matches.values().find(|m| m.id() == id)
    }

    /// Keys of active matches in start order.
    pub fn keys(&self) -> impl Iterator<Item = &MatchKey> {
        self.matches.values().map(Match::key)
    }

    /// Number of active matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    // =================================================================
    // Internals
    // =================================================================

    fn validate_key(&self, home: &str, away: &str) -> Result<MatchKey> {
        let key = MatchKey::new(home, away)?;
        self.config.check_team_name_len(home, Side::Home)?;
        self.config.check_team_name_len(away, Side::Away)?;
        Ok(key)
    }

    /// Wall-clock now, clamped to never precede the previous start.
    fn next_start_time(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let at = match self.last_started_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_started_at = Some(at);
        at
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
