use super::node::{Node, NodeId};
use super::node_arena::NodeArena;

/// Read-only queries over a word graph rooted at [`NodeId::ROOT`].
///
/// Implemented both by the finished [`Dawg`](super::owned::Dawg) and by an
/// in-progress [`Builder`](super::builder::Builder). All queries are total: a
/// missing edge simply means the word is not in the graph.
pub trait WordGraph {
    /// Returns the arena holding this graph's nodes.
    fn arena(&self) -> &NodeArena;

    /// Returns the root node.
    #[inline]
    fn root(&self) -> &Node {
        self.arena().root()
    }

    /// Returns the node with the given identity.
    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.arena()[id]
    }

    /// Follows `path` from the root and returns the node it ends at, if every edge exists.
    fn walk(&self, path: impl AsRef<[u8]>) -> Option<NodeId> {
        path.as_ref()
            .iter()
            .try_fold(NodeId::ROOT, |id, &b| self.node(id).get(b))
    }

    /// Returns true iff `word` is in the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgraph::dawg::builder::build_dawg;
    /// use wordgraph::dawg::WordGraph;
    ///
    /// let dawg = build_dawg(["a", "are", "as", "at"]).unwrap();
    /// assert!(dawg.lookup("are"));
    /// assert!(!dawg.lookup("ar"));
    /// ```
    fn lookup(&self, word: impl AsRef<[u8]>) -> bool {
        self.walk(word)
            .is_some_and(|id| self.node(id).is_terminal())
    }

    /// Returns true if any word in the graph starts with `prefix`.
    fn has_prefix(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.walk(prefix).is_some_and(|id| {
            let node = self.node(id);
            node.is_terminal() || !node.is_leaf()
        })
    }

    /// Completes `prefix` to a word in the graph.
    ///
    /// From the node reached by `prefix`, the edge with the lowest label is followed
    /// until a terminal node is reached, so the result is the smallest word starting
    /// with `prefix`. Returns the whole word, prefix included, or `None` if no word
    /// starts with `prefix`.
    ///
    /// ```
    /// use wordgraph::dawg::builder::build_dawg;
    /// use wordgraph::dawg::WordGraph;
    ///
    /// let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
    /// assert_eq!(dawg.lookup_prefix("c"), Some(b"cat".to_vec()));
    /// assert_eq!(dawg.lookup_prefix("e"), None);
    /// ```
    fn lookup_prefix(&self, prefix: impl AsRef<[u8]>) -> Option<Vec<u8>> {
        let prefix = prefix.as_ref();
        let mut id = self.walk(prefix)?;
        let mut word = prefix.to_vec();
        while !self.node(id).is_terminal() {
            // Only the root of an empty graph is a non-terminal leaf.
            let (label, next) = self.node(id).children().next()?;
            word.push(label);
            id = next;
        }
        Some(word)
    }

    /// Returns an iterator over all words in ascending byte order.
    fn words(&self) -> Words<'_, Self>
    where
        Self: Sized,
    {
        Words {
            graph: self,
            stack: vec![(NodeId::ROOT, 0)],
            word: Vec::new(),
        }
    }
}

/// Depth-first iterator over the words of a [`WordGraph`], created by
/// [`WordGraph::words`].
pub struct Words<'g, G> {
    graph: &'g G,
    // (node, position of the next edge to follow)
    stack: Vec<(NodeId, usize)>,
    word: Vec<u8>,
}

impl<G: WordGraph> Iterator for Words<'_, G> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        loop {
            let top = self.stack.last_mut()?;
            let (id, position) = *top;
            match self.graph.node(id).children().nth(position) {
                Some((label, child)) => {
                    top.1 += 1;
                    self.word.push(label);
                    self.stack.push((child, 0));
                    if self.graph.node(child).is_terminal() {
                        return Some(self.word.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.word.pop();
                }
            }
        }
    }
}
