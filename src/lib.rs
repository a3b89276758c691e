//! # teddy-minimax
//!
//! Game-tree search for "Don't Take the Last Teddy", a misère Nim variant:
//! bins hold bears, each turn a player takes one or more bears from a single
//! bin, and whoever takes the last bear loses.
//!
//! ## Design Principles
//!
//! 1. **Value-Typed Boards**: A `Configuration` is never mutated. Every
//!    move produces a new one.
//!
//! 2. **Deterministic Search**: Full-width minimax, no randomness, ties
//!    broken by move-generation order.
//!
//! 3. **Fresh Tree Per Turn**: The arena-backed tree is built, scored and
//!    dropped within a single call.
//!
//! ## Modules
//!
//! - `core`: Configurations, players, RNG
//! - `minimax`: Move generation, tree building, evaluation, difficulty
//! - `games`: Board setup, AI players, match runner, statistics
//!
//! ## Example
//!
//! ```
//! use teddy_minimax::{choose_move, enumerate_configuration, Difficulty};
//!
//! let board = enumerate_configuration(&[1, 1]).unwrap();
//! let next = choose_move(&board, Difficulty::Medium).unwrap();
//! assert_eq!(next.bear_counts(), &[0, 1]);
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod minimax;

// Re-export commonly used types
pub use crate::core::{enumerate_configuration, Configuration, GameRng, PlayerId, PlayerMap};

pub use crate::error::{Error, Result};

pub use crate::minimax::{
    choose_move, Difficulty, DifficultyDepths, MinimaxSearch, MinimaxTree, NodeId, Score,
    SearchStats, TreeStats,
};

pub use crate::games::teddy::{
    AiPlayer, Board, Difficulties, GameObserver, GameOutcome, Statistics, TeddyConfig, TeddyGame,
};
