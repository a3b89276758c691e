//! Game event observers.
//!
//! The match runner reports progress through [`GameObserver`] instead of
//! global event wiring. Pass any number of observers into
//! [`TeddyGame`](super::TeddyGame) calls; each sees every event in order:
//!
//! 1. `on_game_starting()` before every game except the first of a run
//! 2. `on_turn_taken(player, configuration)` after each move
//! 3. `on_game_over(winner, difficulties)` once the board is empty

use tracing::info;

use crate::core::{Configuration, PlayerId};

use super::difficulties::Difficulties;

/// Observer for game events. All hooks default to no-ops.
pub trait GameObserver {
    /// A new game is about to start.
    fn on_game_starting(&mut self) {}

    /// `player` finished a turn, leaving `configuration` on the board.
    fn on_turn_taken(&mut self, _player: PlayerId, _configuration: &Configuration) {}

    /// The game ended. `winner` is the player who did not take the last bear.
    fn on_game_over(&mut self, _winner: PlayerId, _difficulties: Difficulties) {}
}

/// Observer that reports every event through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_game_starting(&mut self) {
        info!("game starting");
    }

    fn on_turn_taken(&mut self, player: PlayerId, configuration: &Configuration) {
        info!(%player, %configuration, "turn taken");
    }

    fn on_game_over(&mut self, winner: PlayerId, difficulties: Difficulties) {
        info!(%winner, %difficulties, "game over");
    }
}
