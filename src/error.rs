//! Error types for teddy-minimax.

use thiserror::Error;

use crate::minimax::NodeId;

/// Errors raised by the search engine and the game layer.
///
/// All of these are local validation failures. None of them are transient,
/// so callers should fix their input rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input: a negative bin count, or a move requested on a
    /// configuration that has no bears left.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The search tree root ended up without children.
    #[error("no moves available from the root configuration")]
    NoMoves,

    /// A root child had no score when the best move was selected.
    #[error("{0} has not been evaluated")]
    Unevaluated(NodeId),

    /// A game configuration whose bounds cannot produce a board.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
