use std::fmt;

/// Identity of a node: its index in the [`NodeArena`](super::node_arena::NodeArena).
///
/// Identities are handed out in creation order, starting with the root at 0.
/// They are used for signatures and diagnostic output, never for ordering words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every graph.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A compact representation of the outgoing edges of a [`Node`] that doesn't allocate
/// until there are at least three edges.
///
/// Edges are always kept sorted by ascending label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Children {
    /// No edges.
    #[default]
    None,
    /// Exactly one edge (label, target).
    One((u8, NodeId)),
    /// Exactly two edges (label1, target1, label2, target2), label1 < label2.
    Two((u8, NodeId, u8, NodeId)),
    /// Three or more edges stored in a vector.
    Many(Vec<(u8, NodeId)>),
}

impl Children {
    /// Gets the edge at the specified position.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(u8, NodeId)> {
        match self {
            Children::None => None,
            Children::One(edge) => match index {
                0 => Some(*edge),
                _ => None,
            },
            Children::Two((b1, n1, b2, n2)) => match index {
                0 => Some((*b1, *n1)),
                1 => Some((*b2, *n2)),
                _ => None,
            },
            Children::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Returns the target of the edge labeled `label`.
    #[inline]
    pub fn find(&self, label: u8) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((b, node)) => (*b == label).then_some(*node),
            Children::Two((b1, n1, b2, n2)) => {
                if label == *b1 {
                    Some(*n1)
                } else if label == *b2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(edges) => {
                // Unrolling by 2 lets two loads issue per iteration; it beats binary
                // search for the fan-outs a word graph actually has.
                let chunks = edges.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == label {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == label {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(b, _)| b == label)
                    .map(|&(_, node)| node)
            }
        }
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(edges) => edges.len(),
        }
    }

    /// Returns true if there are no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Adds an edge in sorted position.
    ///
    /// The label must not already be present.
    pub(crate) fn insert(&mut self, label: u8, target: NodeId) {
        debug_assert!(self.find(label).is_none(), "insert: label already exists");
        let edge = (label, target);
        *self = match std::mem::take(self) {
            Children::None => Children::One(edge),
            Children::One((b1, n1)) => {
                if label < b1 {
                    Children::Two((label, target, b1, n1))
                } else {
                    Children::Two((b1, n1, label, target))
                }
            }
            Children::Two((b1, n1, b2, n2)) => {
                let mut edges = vec![(b1, n1), (b2, n2), edge];
                edges.sort_unstable_by_key(|&(b, _)| b);
                Children::Many(edges)
            }
            Children::Many(mut edges) => {
                let pos = edges.partition_point(|&(b, _)| b < label);
                edges.insert(pos, edge);
                Children::Many(edges)
            }
        };
    }

    /// Points the edge labeled `label` at `target`.
    ///
    /// Returns false if there is no such edge.
    pub(crate) fn replace(&mut self, label: u8, target: NodeId) -> bool {
        let slot = match self {
            Children::None => None,
            Children::One((b, n)) => (*b == label).then_some(n),
            Children::Two((b1, n1, b2, n2)) => {
                if *b1 == label {
                    Some(n1)
                } else if *b2 == label {
                    Some(n2)
                } else {
                    None
                }
            }
            Children::Many(edges) => edges
                .iter_mut()
                .find(|(b, _)| *b == label)
                .map(|(_, n)| n),
        };
        match slot {
            Some(n) => {
                *n = target;
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over the edges in ascending label order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            children: self,
            index: 0,
        }
    }
}

/// An iterator over the outgoing edges of a node, in ascending label order.
#[derive(Clone)]
pub struct ChildIter<'a> {
    children: &'a Children,
    index: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (u8, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.children.get(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self.index.saturating_add(n);
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

/// A node in the word graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    children: Children,
    terminal: bool,
}

impl Node {
    /// Creates a new node without edges.
    ///
    /// # Arguments
    ///
    /// * `terminal` - Whether some word ends at this node
    pub fn new(terminal: bool) -> Self {
        Node {
            children: Children::None,
            terminal,
        }
    }

    /// Returns the node that `label`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, label: u8) -> Option<NodeId> {
        self.children.find(label)
    }

    /// True if some word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns an iterator over all outgoing edges of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this node has no outgoing edges.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    pub(crate) fn insert(&mut self, label: u8, target: NodeId) {
        self.children.insert(label, target);
    }

    pub(crate) fn replace(&mut self, label: u8, target: NodeId) -> bool {
        self.children.replace(label, target)
    }
}
