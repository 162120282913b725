//! Property tests: the built graph accepts exactly the input words, is minimal, and its
//! flattened form answers lookups the same way.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use wordgraph::dawg::registry::Signature;
use wordgraph::dawg::{build_dawg, flat_lookup, Builder, BuilderError, Dawg, NodeId, WordGraph};

fn word_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-d]{1,6}", 0..40)
}

fn sample_strings() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,7}", 0..40)
}

fn reachable(dawg: &Dawg) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![NodeId::ROOT];
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            order.push(id);
            stack.extend(dawg.node(id).children().map(|(_, child)| child));
        }
    }
    order
}

/// Node and edge counts of the minimal automaton for `words`, found by grouping the
/// nodes of the plain trie by the set of suffixes they accept.
fn reference_counts(words: &BTreeSet<String>) -> (usize, usize) {
    let mut prefixes: BTreeSet<&[u8]> = BTreeSet::from([&b""[..]]);
    for w in words {
        let w = w.as_bytes();
        for len in 0..=w.len() {
            prefixes.insert(&w[..len]);
        }
    }
    let mut languages: BTreeSet<BTreeSet<&[u8]>> = BTreeSet::new();
    for prefix in prefixes {
        let language = words
            .iter()
            .map(|w| w.as_bytes())
            .filter(|w| w.starts_with(prefix))
            .map(|w| &w[prefix.len()..])
            .collect();
        languages.insert(language);
    }
    let edges = languages
        .iter()
        .map(|language| {
            language
                .iter()
                .filter_map(|suffix| suffix.first())
                .collect::<BTreeSet<_>>()
                .len()
        })
        .sum();
    (languages.len(), edges)
}

proptest! {
    #[test]
    fn lookup_matches_input_set(words in word_set(), samples in sample_strings()) {
        let dawg = build_dawg(&words).unwrap();
        prop_assert_eq!(dawg.word_count(), words.len());
        for w in &words {
            prop_assert!(dawg.lookup(w), "missing {}", w);
        }
        for p in &samples {
            prop_assert_eq!(dawg.lookup(p), words.contains(p), "sample {}", p);
        }
    }

    #[test]
    fn no_two_reachable_nodes_share_a_signature(words in word_set()) {
        let dawg = build_dawg(&words).unwrap();
        let nodes = reachable(&dawg);
        let signatures: HashSet<Signature> =
            nodes.iter().map(|&id| Signature::of(dawg.node(id))).collect();
        prop_assert_eq!(signatures.len(), nodes.len());
        prop_assert_eq!(nodes.len(), dawg.node_count());
        prop_assert_eq!(dawg.registry().len() + 1, dawg.node_count());
    }

    #[test]
    fn counts_match_reference_minimal_automaton(words in word_set()) {
        let dawg = build_dawg(&words).unwrap();
        let (nodes, edges) = reference_counts(&words);
        prop_assert_eq!(dawg.node_count(), nodes);
        prop_assert_eq!(dawg.edge_count(), edges);
    }

    #[test]
    fn flattened_lookup_matches_graph(words in word_set(), samples in sample_strings()) {
        let dawg = build_dawg(&words).unwrap();
        let entries = dawg.flatten();
        prop_assert_eq!(entries.len(), dawg.edge_count());
        for w in words.iter().chain(&samples) {
            prop_assert_eq!(flat_lookup(&entries, w), dawg.lookup(w), "word {}", w);
        }
    }

    #[test]
    fn words_lists_input_in_order(words in word_set()) {
        let dawg = build_dawg(&words).unwrap();
        let listed: Vec<Vec<u8>> = dawg.words().collect();
        let expected: Vec<Vec<u8>> = words.iter().map(|w| w.as_bytes().to_vec()).collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn lookup_prefix_returns_smallest_completion(words in word_set(), samples in sample_strings()) {
        let dawg = build_dawg(&words).unwrap();
        for p in &samples {
            let expected = words
                .range(p.clone()..)
                .next()
                .filter(|w| w.starts_with(p.as_str()))
                .map(|w| w.as_bytes().to_vec());
            prop_assert_eq!(dawg.lookup_prefix(p), expected, "prefix {}", p);
        }
    }

    #[test]
    fn in_progress_graph_holds_words_so_far(words in word_set(), samples in sample_strings()) {
        let mut builder = Builder::new();
        let mut inserted = BTreeSet::new();
        for w in &words {
            builder.insert(w).unwrap();
            inserted.insert(w.clone());
            for p in &samples {
                prop_assert_eq!(builder.lookup(p), inserted.contains(p), "sample {}", p);
            }
        }
    }

    #[test]
    fn reversed_input_is_rejected(words in prop::collection::btree_set("[a-d]{1,6}", 2..20)) {
        let err = build_dawg(words.iter().rev()).unwrap_err();
        let mut it = words.iter().rev();
        let (first, second) = (it.next().unwrap(), it.next().unwrap());
        prop_assert_eq!(
            err,
            BuilderError::Order {
                previous: first.as_bytes().to_vec(),
                word: second.as_bytes().to_vec(),
            }
        );
    }

    #[test]
    fn repeated_word_is_rejected(words in prop::collection::btree_set("[a-d]{1,6}", 1..20)) {
        let mut builder = Builder::new();
        for w in &words {
            builder.insert(w).unwrap();
            let again = builder.insert(w);
            let is_order_error = matches!(again, Err(BuilderError::Order { .. }));
            prop_assert!(is_order_error);
        }
    }
}

#[test]
fn a_are_as_at() {
    let dawg = build_dawg(["a", "are", "as", "at"]).unwrap();
    assert!(dawg.lookup("a"));
    assert!(!dawg.lookup("ar"));
    assert!(dawg.lookup("are"));
    assert_eq!(dawg.lookup_prefix("a"), Some(b"a".to_vec()));
    // root, "a", "ar", and one shared leaf for "are", "as", "at"
    assert_eq!(dawg.node_count(), 4);
    assert_eq!(dawg.edge_count(), 5);
}

#[test]
fn cat_cats_dog_against_reference() {
    let words: BTreeSet<String> = ["cat", "cats", "dog"].iter().map(|s| s.to_string()).collect();
    let dawg = build_dawg(&words).unwrap();
    assert_eq!((dawg.node_count(), dawg.edge_count()), reference_counts(&words));
    assert_eq!(dawg.walk("cats"), dawg.walk("dog"));
}
