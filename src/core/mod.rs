//! Core types: board configurations, players, RNG.
//!
//! Nothing in here knows about search. The minimax engine and the game
//! layer both build on these.

pub mod configuration;
pub mod player;
pub mod rng;

pub use configuration::{enumerate_configuration, BinCounts, Configuration};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
