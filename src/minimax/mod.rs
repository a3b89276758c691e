//! Minimax game-tree search for teddy-minimax.
//!
//! ## Overview
//!
//! Each AI turn builds a fresh tree from the current board, scores it with
//! full-width minimax, and returns the root child with the best score:
//!
//! - **Move generation**: every way to take bears from a single bin
//! - **Tree building**: breadth-first, bounded by the difficulty's depth
//! - **Evaluation**: max/min alternating by ply, heuristic at the horizon
//! - **Selection**: highest-scoring root child, first one wins ties
//!
//! The search is deterministic. The same board and difficulty always give
//! the same move.
//!
//! ## Usage
//!
//! ```rust
//! use teddy_minimax::core::Configuration;
//! use teddy_minimax::minimax::{Difficulty, DifficultyDepths, MinimaxSearch};
//!
//! let mut search = MinimaxSearch::new(DifficultyDepths::default());
//! let board = Configuration::new([3, 1, 2]);
//!
//! let next = search.choose_move(&board, Difficulty::Hard).unwrap();
//! assert!(next.total_count() < board.total_count());
//! println!("searched {} nodes", search.stats().tree.node_count);
//! ```

pub mod difficulty;
pub mod heuristic;
pub mod moves;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use difficulty::{Difficulty, DifficultyDepths};
pub use heuristic::score_leaf;
pub use moves::generate_moves;
pub use node::{MinimaxNode, NodeId, Score};
pub use search::{choose_move, evaluate, select_best_child, MinimaxSearch};
pub use stats::SearchStats;
pub use tree::{MinimaxTree, TreeStats};
