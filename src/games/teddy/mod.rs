//! "Don't Take the Last Teddy": two AI players take turns removing bears
//! from one bin at a time until the board is empty.
//!
//! - Boards start with a random number of bins, each holding at least one bear
//! - Whoever takes the last bear loses
//! - Players search with minimax at their own difficulty
//!
//! The runner plays series of games across difficulty matchups and reports
//! through [`GameObserver`]s such as [`Statistics`].

mod board;
mod config;
mod difficulties;
mod events;
mod game;
mod statistics;

pub use board::Board;
pub use config::TeddyConfig;
pub use difficulties::Difficulties;
pub use events::{GameObserver, TracingObserver};
pub use game::{AiPlayer, GameOutcome, TeddyGame};
pub use statistics::{PlayerScores, Statistics};
