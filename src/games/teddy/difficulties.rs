//! Difficulty pairings for the two seats.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::minimax::Difficulty;

/// Difficulty of each player in a game. Equal when both seats match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulties {
    pub player1: Difficulty,
    pub player2: Difficulty,
}

impl Difficulties {
    /// The matchups a full run plays, in order.
    pub const MATCHUPS: [Difficulties; 6] = [
        Difficulties::new(Difficulty::Easy, Difficulty::Easy),
        Difficulties::new(Difficulty::Medium, Difficulty::Medium),
        Difficulties::new(Difficulty::Hard, Difficulty::Hard),
        Difficulties::new(Difficulty::Easy, Difficulty::Medium),
        Difficulties::new(Difficulty::Easy, Difficulty::Hard),
        Difficulties::new(Difficulty::Medium, Difficulty::Hard),
    ];

    /// Create a pairing.
    #[must_use]
    pub const fn new(player1: Difficulty, player2: Difficulty) -> Self {
        Self { player1, player2 }
    }

    /// Difficulty of one seat.
    #[must_use]
    pub fn for_player(&self, player: PlayerId) -> Difficulty {
        if player == PlayerId::PLAYER1 {
            self.player1
        } else {
            self.player2
        }
    }
}

impl std::fmt::Display for Difficulties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.player1, self.player2)
    }
}
