//! Arena-based minimax tree.
//!
//! Uses a flat `Vec<MinimaxNode>` with index-based references. The tree is
//! built breadth-first from the current board and thrown away once a move
//! has been chosen.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::moves::generate_moves;
use super::node::{MinimaxNode, NodeId};
use crate::core::Configuration;

/// Arena-based minimax tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinimaxTree {
    /// All nodes in the tree, in breadth-first order.
    nodes: Vec<MinimaxNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl MinimaxTree {
    /// Create a tree holding only the root.
    pub fn new(root: Configuration) -> Self {
        Self {
            nodes: vec![MinimaxNode::root(root)],
            root: NodeId::new(0),
        }
    }

    /// Build the search tree for `root` breadth-first.
    ///
    /// A node at depth `d` is expanded whenever `d <= max_depth`, so
    /// non-terminal leaves end up at depth `max_depth + 1`. Difficulty
    /// levels are tuned against this bound. Empty boards never get children.
    pub fn build(root: Configuration, max_depth: u16) -> Self {
        let mut tree = Self::new(root);
        let mut queue = VecDeque::from([tree.root]);

        while let Some(current) = queue.pop_front() {
            let depth = tree.get(current).depth;
            if depth > max_depth {
                continue;
            }

            let moves = generate_moves(&tree.get(current).configuration);
            trace!(node = %current, depth, children = moves.len(), "expanding node");

            for configuration in moves {
                let child = tree.alloc(MinimaxNode::new(configuration, current, depth + 1));
                tree.get_mut(current).children.push(child);
                queue.push_back(child);
            }
        }

        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MinimaxNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MinimaxNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MinimaxNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MinimaxNode {
        self.get(self.root)
    }

    /// Children of a node, in move-generation order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MinimaxNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();

        TreeStats {
            node_count: self.nodes.len(),
            leaf_count,
            terminal_count,
            max_depth,
        }
    }
}

/// Statistics about the minimax tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Nodes without children (terminal or cut off).
    pub leaf_count: usize,

    /// Nodes whose board is empty.
    pub terminal_count: usize,

    /// Deepest node.
    pub max_depth: u16,
}

impl TreeStats {
    /// Leaves scored by the horizon heuristic rather than the end-of-game rule.
    #[must_use]
    pub fn cutoff_count(&self) -> usize {
        self.leaf_count - self.terminal_count
    }
}
