//! Minimax tree nodes.
//!
//! Uses arena-based allocation with index references (NodeId) so that the
//! parent back-link never forms an ownership cycle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Configuration;

/// Minimax score. Higher is better for the maximizing side.
pub type Score = f32;

/// Index into the MinimaxTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the minimax tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinimaxNode {
    /// Board state this node represents.
    pub configuration: Configuration,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Children in move-generation order.
    pub children: SmallVec<[NodeId; 8]>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Minimax score, unset until the evaluator reaches this node.
    pub score: Option<Score>,
}

impl MinimaxNode {
    /// Create a new node.
    pub fn new(configuration: Configuration, parent: NodeId, depth: u16) -> Self {
        Self {
            configuration,
            parent,
            children: SmallVec::new(),
            depth,
            score: None,
        }
    }

    /// Create a root node.
    pub fn root(configuration: Configuration) -> Self {
        Self::new(configuration, NodeId::NONE, 0)
    }

    /// A node with no children, either terminal or cut off by depth.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node whose board has no bears left.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.configuration.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.index(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = MinimaxNode::root(Configuration::new([2, 1]));

        assert!(node.parent.is_none());
        assert_eq!(node.depth, 0);
        assert!(node.is_leaf());
        assert!(!node.is_terminal());
        assert!(node.score.is_none());
    }

    #[test]
    fn test_terminal_node() {
        let node = MinimaxNode::new(Configuration::new([0, 0]), NodeId::new(0), 3);

        assert!(node.is_terminal());
        assert!(node.is_leaf());
        assert_eq!(node.parent, NodeId::new(0));
    }
}
