//! Minimax evaluation and move selection.
//!
//! Full-width minimax over a tree built by [`MinimaxTree::build`]. The
//! searching player is the maximizing side at the root; the flag flips on
//! every ply. Leaves are scored by [`score_leaf`].

use std::time::Instant;

use tracing::debug;

use crate::core::Configuration;
use crate::error::{Error, Result};

use super::difficulty::{Difficulty, DifficultyDepths};
use super::heuristic::score_leaf;
use super::node::{NodeId, Score};
use super::stats::SearchStats;
use super::tree::MinimaxTree;

/// Score `node` and every node below it, storing each score in the tree.
///
/// Interior nodes take the maximum (when `maximizing`) or minimum of their
/// children, each evaluated with the flag flipped. Leaves are scored by the
/// heuristic at their own flag.
pub fn evaluate(tree: &mut MinimaxTree, node: NodeId, maximizing: bool) -> Score {
    let children = tree.get(node).children.clone();

    let score = if children.is_empty() {
        score_leaf(&tree.get(node).configuration, maximizing)
    } else {
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for child in children {
            let child_score = evaluate(tree, child, !maximizing);
            if (maximizing && child_score > best) || (!maximizing && child_score < best) {
                best = child_score;
            }
        }
        best
    };

    tree.get_mut(node).score = Some(score);
    score
}

/// Pick the root child with the highest score.
///
/// Children are scanned in move-generation order and a later child only
/// replaces the current best if its score is strictly greater, so the first
/// of several equal moves wins. Fails with [`Error::Unevaluated`] if any
/// root child has no score yet.
pub fn select_best_child(tree: &MinimaxTree) -> Result<NodeId> {
    let children = tree.children(tree.root());
    let (&first, rest) = children.split_first().ok_or(Error::NoMoves)?;

    let score_of = |id: NodeId| tree.get(id).score.ok_or(Error::Unevaluated(id));

    let mut best = first;
    let mut best_score = score_of(first)?;
    for &child in rest {
        let child_score = score_of(child)?;
        if child_score > best_score {
            best = child;
            best_score = child_score;
        }
    }

    Ok(best)
}

/// Minimax search context.
///
/// Holds the difficulty-to-depth table and the statistics of the most
/// recent search. No tree survives between calls.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    /// Depth bound for each difficulty level.
    depths: DifficultyDepths,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search context with a custom depth table.
    pub fn new(depths: DifficultyDepths) -> Self {
        Self {
            depths,
            stats: SearchStats::default(),
        }
    }

    /// Choose the next configuration for a player at `difficulty`.
    pub fn choose_move(
        &mut self,
        config: &Configuration,
        difficulty: Difficulty,
    ) -> Result<Configuration> {
        self.search(config, self.depths.depth(difficulty))
    }

    /// Choose the next configuration using an explicit depth bound.
    ///
    /// Fails with [`Error::InvalidInput`] if `config` has no bears left.
    pub fn search(&mut self, config: &Configuration, max_depth: u16) -> Result<Configuration> {
        if config.is_empty() {
            return Err(Error::InvalidInput(format!(
                "cannot choose a move from finished game {config}"
            )));
        }

        let start = Instant::now();
        self.stats.reset();

        let mut tree = MinimaxTree::build(config.clone(), max_depth);
        let root = tree.root();
        let root_score = evaluate(&mut tree, root, true);
        let best = select_best_child(&tree)?;

        self.stats.search_depth = max_depth;
        self.stats.tree = tree.stats();
        self.stats.root_score = root_score;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let chosen = tree.get(best).configuration.clone();
        debug!(
            from = %config,
            to = %chosen,
            depth = max_depth,
            nodes = self.stats.tree.node_count,
            score = root_score,
            time_us = self.stats.time_us,
            "minimax move chosen"
        );

        Ok(chosen)
    }

    /// Get the depth table.
    #[must_use]
    pub fn depths(&self) -> &DifficultyDepths {
        &self.depths
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Choose the AI's next configuration using the default depth table.
///
/// ```
/// use teddy_minimax::core::Configuration;
/// use teddy_minimax::minimax::{choose_move, Difficulty};
///
/// // Leave the opponent the last bear
/// let next = choose_move(&Configuration::new([2]), Difficulty::Easy).unwrap();
/// assert_eq!(next, Configuration::new([1]));
/// ```
pub fn choose_move(config: &Configuration, difficulty: Difficulty) -> Result<Configuration> {
    MinimaxSearch::default().choose_move(config, difficulty)
}
