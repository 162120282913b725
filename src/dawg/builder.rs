use log::{debug, trace};
use thiserror::Error;

use super::node::{Node, NodeId};
use super::node_arena::NodeArena;
use super::owned::Dawg;
use super::query::WordGraph;
use super::registry::Registry;

/// Errors that can occur when inserting words into a [`Builder`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// Words were not provided in strictly increasing byte order.
    ///
    /// Contains the two words that were out of order (previous word, current word).
    #[error(
        "OrderError - {:?} came before {:?}",
        String::from_utf8_lossy(.previous),
        String::from_utf8_lossy(.word)
    )]
    Order {
        /// The most recently inserted word.
        previous: Vec<u8>,
        /// The rejected word.
        word: Vec<u8>,
    },
}

/// An edge of the chain from the root to the last inserted word whose target
/// has not been minimized yet.
#[derive(Clone, Copy, Debug)]
struct Unchecked {
    parent: NodeId,
    child: NodeId,
    label: u8,
}

/// A builder for constructing minimal word graphs incrementally.
///
/// Words must be added in strictly increasing byte order. Every time a word is
/// added, the part of the previous word's path that the new word does not share
/// can no longer change, so it is folded into the [`Registry`], merging subtrees
/// that are structurally identical to ones seen before. Once [`finish`](Builder::finish)
/// has run, no two reachable nodes are equivalent.
///
/// The builder can be queried through [`WordGraph`] while words are still being added.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    arena: NodeArena,
    registry: Registry,
    unchecked: Vec<Unchecked>,
    word_count: usize,
}

impl Builder {
    /// Creates a builder for an empty graph.
    pub fn new() -> Self {
        Builder::default()
    }

    /// Adds a word to the graph being constructed.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Order`] if the word is not strictly greater than the
    /// previously added word. The empty word is never strictly greater than anything,
    /// so it is always rejected.
    ///
    /// An ordering error is not fatal: the builder is left unchanged, and words that
    /// sort after the previously added word can still be inserted. Callers that want
    /// to abort construction on the first bad word can simply propagate the error, as
    /// [`build_dawg`] does.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) -> Result<(), BuilderError> {
        let word = word.as_ref();
        let prefix_len = self.prefix_length(word)?;
        self.minimize(prefix_len);

        let mut current = self.unchecked.last().map_or(NodeId::ROOT, |u| u.child);
        for &label in &word[prefix_len..] {
            let next = self.arena.alloc(Node::new(false));
            self.arena[current].insert(label, next);
            self.unchecked.push(Unchecked {
                parent: current,
                child: next,
                label,
            });
            current = next;
        }
        self.arena[current].set_terminal();
        self.word_count += 1;
        Ok(())
    }

    /// Returns the length of the prefix `word` shares with the previous word,
    /// checking that `word` sorts strictly after it.
    ///
    /// The unchecked chain always spells out the previous word.
    fn prefix_length(&self, word: &[u8]) -> Result<usize, BuilderError> {
        let common = self
            .unchecked
            .iter()
            .zip(word)
            .take_while(|(u, b)| u.label == **b)
            .count();
        match (self.unchecked.get(common), word.get(common)) {
            (None, Some(_)) => Ok(common),
            (Some(prev), Some(&b)) if b > prev.label => Ok(common),
            _ => Err(BuilderError::Order {
                previous: self.previous_word(),
                word: word.to_vec(),
            }),
        }
    }

    fn previous_word(&self) -> Vec<u8> {
        self.unchecked.iter().map(|u| u.label).collect()
    }

    /// Folds every unchecked node deeper than `depth` into the registry, deepest
    /// first, so a parent's signature is only taken once its children are canonical.
    fn minimize(&mut self, depth: usize) {
        for i in (depth..self.unchecked.len()).rev() {
            let Unchecked {
                parent,
                child,
                label,
            } = self.unchecked[i];
            let canonical = self.registry.register(&self.arena, child);
            if canonical != child {
                trace!("merging node {child} into {canonical}");
                let rewired = self.arena[parent].replace(label, canonical);
                debug_assert!(rewired, "parent {parent} has no edge {label:#04x}");
            }
        }
        self.unchecked.truncate(depth);
    }

    /// Returns the number of words added so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Finalizes construction and returns the minimal graph.
    ///
    /// This consumes the builder, so no word can be added afterwards.
    pub fn finish(mut self) -> Dawg {
        self.minimize(0);
        self.arena.shrink_to_fit();
        let dawg = Dawg::new(self.arena, self.registry, self.word_count);
        debug!(
            "finished word graph: {} words, {} nodes, {} edges",
            dawg.word_count(),
            dawg.node_count(),
            dawg.edge_count()
        );
        dawg
    }
}

impl WordGraph for Builder {
    fn arena(&self) -> &NodeArena {
        &self.arena
    }
}

/// Builds a minimal word graph from an iterator of words.
///
/// Words **must** be provided in strictly increasing byte order, or this function
/// returns an error. This requirement allows the builder to construct a minimal
/// graph in a single pass.
///
/// # Examples
///
/// ```
/// use wordgraph::dawg::builder::build_dawg;
/// use wordgraph::dawg::WordGraph;
///
/// let dawg = build_dawg(["APPLE", "BANANA", "CHERRY"]).unwrap();
/// assert!(dawg.lookup("BANANA"));
/// assert!(!dawg.lookup("APRICOT"));
/// ```
pub fn build_dawg<W: AsRef<[u8]>>(
    words: impl IntoIterator<Item = W>,
) -> Result<Dawg, BuilderError> {
    let mut builder = Builder::new();
    for word in words {
        builder.insert(word)?;
    }
    Ok(builder.finish())
}
