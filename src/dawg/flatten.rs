//! Flattened, index-addressed representation of a word graph.
//!
//! Each edge becomes one fixed-size [`ArrayEntry`]. The edges leaving a node are
//! stored contiguously in ascending label order, the last one flagged with
//! `end_of_list`, and an entry points at its target's edges by index. Nodes are laid
//! out breadth-first from the root, so entry 0 is the root's first edge and the
//! array has exactly [`Dawg::edge_count`] entries.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::owned::Dawg;
use super::query::WordGraph;

/// One edge of a flattened word graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrayEntry {
    /// The byte this edge consumes.
    pub label: u8,
    /// True if a word ends at the edge's target.
    pub terminal: bool,
    /// True for the last edge of its source node.
    pub end_of_list: bool,
    /// Index of the target's first edge, or `None` if the target is a leaf.
    pub child_index: Option<usize>,
}

impl Dawg {
    /// Flattens the graph into an array of edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgraph::dawg::builder::build_dawg;
    /// use wordgraph::dawg::flatten::flat_lookup;
    ///
    /// let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
    /// let entries = dawg.flatten();
    /// assert_eq!(entries.len(), dawg.edge_count());
    /// assert!(flat_lookup(&entries, "cats"));
    /// assert!(!flat_lookup(&entries, "do"));
    /// ```
    pub fn flatten(&self) -> Vec<ArrayEntry> {
        let arena = self.arena();
        let mut entries = Vec::with_capacity(self.edge_count());
        let mut targets = Vec::with_capacity(self.edge_count());
        // Indexed by arena slot; only reachable nodes get a value.
        let mut first_edge: Vec<Option<usize>> = vec![None; arena.len()];
        let mut seen = vec![false; arena.len()];

        let mut queue = VecDeque::from([NodeId::ROOT]);
        seen[NodeId::ROOT.index()] = true;
        while let Some(id) = queue.pop_front() {
            let node = &arena[id];
            first_edge[id.index()] = Some(entries.len());
            let last = node.child_count().saturating_sub(1);
            for (i, (label, child)) in node.children().enumerate() {
                if !seen[child.index()] {
                    seen[child.index()] = true;
                    queue.push_back(child);
                }
                targets.push(child);
                entries.push(ArrayEntry {
                    label,
                    terminal: arena[child].is_terminal(),
                    end_of_list: i == last,
                    child_index: None,
                });
            }
        }

        for (entry, target) in entries.iter_mut().zip(targets) {
            if !arena[target].is_leaf() {
                entry.child_index = first_edge[target.index()];
            }
        }
        entries
    }
}

/// Returns true iff `word` is in the flattened graph `entries`.
///
/// Mirrors [`WordGraph::lookup`] using only the array: scan a node's edges from its
/// first index until the label matches or the list ends, then jump to that entry's
/// child index.
pub fn flat_lookup(entries: &[ArrayEntry], word: impl AsRef<[u8]>) -> bool {
    let mut start = Some(0);
    let mut terminal = false;
    for &b in word.as_ref() {
        let Some(mut i) = start else {
            return false;
        };
        let entry = loop {
            let Some(entry) = entries.get(i) else {
                return false;
            };
            if entry.label == b {
                break entry;
            }
            if entry.end_of_list {
                return false;
            }
            i += 1;
        };
        terminal = entry.terminal;
        start = entry.child_index;
    }
    terminal
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dawg::builder::build_dawg;

    fn entry(
        label: u8,
        terminal: bool,
        end_of_list: bool,
        child_index: Option<usize>,
    ) -> ArrayEntry {
        ArrayEntry {
            label,
            terminal,
            end_of_list,
            child_index,
        }
    }

    #[test]
    fn cat_cats_dog_layout() {
        let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
        let entries = dawg.flatten();
        let expected = vec![
            entry(b'c', false, false, Some(2)), // root
            entry(b'd', false, true, Some(3)),
            entry(b'a', false, true, Some(4)), // "c"
            entry(b'o', false, true, Some(5)), // "d"
            entry(b't', true, true, Some(6)),  // "ca"
            entry(b'g', true, true, None),     // "do"
            entry(b's', true, true, None),     // "cat"
        ];
        assert_eq!(entries, expected);
    }

    #[test]
    fn flat_lookup_agrees_with_lookup() {
        let words = ["a", "are", "as", "at", "bee", "been", "beer", "zoo"];
        let dawg = build_dawg(words).unwrap();
        let entries = dawg.flatten();
        assert_eq!(entries.len(), dawg.edge_count());
        for word in words {
            assert!(flat_lookup(&entries, word), "{word}");
        }
        for word in ["", "ar", "b", "be", "beers", "z", "zo", "zoos", "x"] {
            assert_eq!(flat_lookup(&entries, word), dawg.lookup(word), "{word}");
        }
    }

    #[test]
    fn end_of_list_marks_each_node_once() {
        let dawg = build_dawg(["ab", "ac", "ad", "b", "cab"]).unwrap();
        let entries = dawg.flatten();
        let lists = entries.iter().filter(|e| e.end_of_list).count();
        // one list per node with edges: root, "a", "c", "ca"
        assert_eq!(lists, 4);
        assert!(entries.last().is_some_and(|e| e.end_of_list));
    }

    #[test]
    fn empty_graph_flattens_to_nothing() {
        let dawg = build_dawg(Vec::<String>::new()).unwrap();
        let entries = dawg.flatten();
        assert!(entries.is_empty());
        assert!(!flat_lookup(&entries, "a"));
        assert!(!flat_lookup(&entries, ""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn entries_serialize() {
        let json = serde_json::to_string(&entry(b'a', true, false, Some(3))).unwrap();
        assert_eq!(
            json,
            r#"{"label":97,"terminal":true,"end_of_list":false,"child_index":3}"#
        );
    }
}
