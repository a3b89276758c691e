//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use super::tree::TreeStats;

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Depth bound the tree was built with.
    pub search_depth: u16,

    /// Shape of the tree that was searched.
    pub tree: TreeStats,

    /// Score of the root after evaluation.
    pub root_score: f32,

    /// Total time spent building and evaluating (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes searched per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.tree.node_count as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
