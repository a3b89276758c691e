//! Win statistics per difficulty matchup.

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, PlayerMap};

use super::difficulties::Difficulties;
use super::events::GameObserver;

/// Wins per player for one matchup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerScores {
    scores: PlayerMap<u32>,
}

impl PlayerScores {
    /// Create empty scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `score` to a player's total.
    pub fn add_score(&mut self, player: PlayerId, score: u32) {
        self.scores[player] += score;
    }

    /// A player's total.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Sum over both players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.scores.iter().map(|(_, &s)| s).sum()
    }
}

impl std::fmt::Display for PlayerScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P1 = {}, P2 = {}",
            self.score(PlayerId::PLAYER1),
            self.score(PlayerId::PLAYER2)
        )
    }
}

/// Win counts keyed by difficulty matchup.
///
/// Register it as a [`GameObserver`] and it records every game over event.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    by_matchup: FxHashMap<Difficulties, PlayerScores>,
}

impl Statistics {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win.
    pub fn record_win(&mut self, winner: PlayerId, difficulties: Difficulties) {
        self.by_matchup
            .entry(difficulties)
            .or_default()
            .add_score(winner, 1);
    }

    /// Wins for `player` in a matchup. Unseen matchups score 0.
    #[must_use]
    pub fn score(&self, player: PlayerId, difficulties: Difficulties) -> u32 {
        self.by_matchup
            .get(&difficulties)
            .map_or(0, |scores| scores.score(player))
    }

    /// Scores for a matchup, if any game was played.
    #[must_use]
    pub fn scores(&self, difficulties: Difficulties) -> Option<&PlayerScores> {
        self.by_matchup.get(&difficulties)
    }

    /// Games recorded across all matchups.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.by_matchup.values().map(PlayerScores::total).sum()
    }
}

impl GameObserver for Statistics {
    fn on_game_over(&mut self, winner: PlayerId, difficulties: Difficulties) {
        self.record_win(winner, difficulties);
    }
}
