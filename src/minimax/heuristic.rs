//! Leaf scoring.
//!
//! Leaves come in two kinds. Terminal leaves have an empty board: the
//! previous mover took the last bear and lost. Cutoff leaves still hold
//! bears but sit at the search horizon, so their value is estimated.

use crate::core::Configuration;

use super::node::Score;

/// Score for a maximizing-side win.
pub const WIN: Score = 1.0;

/// Score for a maximizing-side loss.
pub const LOSS: Score = 0.0;

/// Score for a position whose outcome is unknown.
pub const NEUTRAL: Score = 0.5;

/// Score a leaf node.
///
/// `maximizing` is the evaluation flag at the leaf's depth. An empty board
/// scores [`WIN`] when maximizing and [`LOSS`] otherwise. A cutoff leaf with
/// exactly two bears left favors the side about to gain the advantage in the
/// same way; every other cutoff leaf is [`NEUTRAL`].
#[must_use]
pub fn score_leaf(config: &Configuration, maximizing: bool) -> Score {
    if config.is_empty() {
        return end_of_game_score(maximizing);
    }

    if config.total_count() == 2 {
        if maximizing {
            WIN
        } else {
            LOSS
        }
    } else {
        NEUTRAL
    }
}

/// Score for an empty board.
///
/// When maximizing the opponent took the last bear; when minimizing the
/// searching player did.
#[inline]
#[must_use]
pub fn end_of_game_score(maximizing: bool) -> Score {
    if maximizing {
        WIN
    } else {
        LOSS
    }
}
