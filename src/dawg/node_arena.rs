//! An index-addressed arena for word graph nodes.
//!
//! Nodes are never freed individually: a duplicate that minimization discards
//! stays in its slot, unreachable, until the whole arena is dropped. Edges refer
//! to nodes by [`NodeId`], so shared subtrees need no reference counting.

use std::ops::{Index, IndexMut};

use super::node::{Node, NodeId};

/// Append-only storage for [`Node`]s.
#[derive(Clone, Debug)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Creates an arena holding only a non-terminal root node.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![Node::new(false)],
        }
    }

    /// Allocates a node and returns its identity.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given identity.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Returns the number of slots allocated, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root occupies the first slot.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Releases spare capacity once no more nodes will be allocated.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
