//! # wordgraph
//!
//! Minimal acyclic word graphs ([DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)s)
//! over byte strings.
//!
//! A DAWG is a trie whose equivalent subtrees have been merged, so common suffixes are
//! stored once. This crate builds one in a single forward pass over sorted input with the
//! incremental algorithm of [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1):
//! whenever a new word is added, the part of the previous word that it doesn't share can
//! no longer change and is merged into a registry of canonical nodes right away.
//!
//! ## Features
//!
//! - **Byte-labeled**: words are any `AsRef<[u8]>`, so `&str`, `String`, `&[u8]` and
//!   `Vec<u8>` all work
//! - **Arena-backed**: nodes live in one vector and refer to each other by index
//! - **Flat export**: [`Dawg::flatten`](dawg::Dawg::flatten) produces a pointer-free array
//!   of fixed-size edge records for embedding, and [`flat_lookup`](dawg::flat_lookup)
//!   queries it directly
//! - **Thread-safe**: a finished [`Dawg`](dawg::Dawg) is immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use wordgraph::dawg::{build_dawg, WordGraph};
//!
//! let dawg = build_dawg(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//! assert!(dawg.lookup("CAKE"));
//! assert!(!dawg.lookup("AKE"));
//! assert_eq!(dawg.lookup_prefix("F"), Some(b"FAKE".to_vec()));
//! ```
//!
//! Words must arrive in strictly increasing byte order. To build from an unsorted list,
//! read it with [`Dawg::from_reader`](dawg::Dawg::from_reader):
//!
//! ```
//! use wordgraph::dawg::{Dawg, WordGraph};
//!
//! let dawg = Dawg::from_reader("pear\napple\nplum\n".as_bytes()).unwrap();
//! assert!(dawg.lookup("plum"));
//! ```
//!
//! ## Incremental Use
//!
//! ```
//! use wordgraph::dawg::{Builder, BuilderError, WordGraph};
//!
//! let mut builder = Builder::new();
//! builder.insert("cat").unwrap();
//! builder.insert("cats").unwrap();
//! assert!(builder.lookup("cat"));
//! assert!(matches!(builder.insert("ant"), Err(BuilderError::Order { .. })));
//!
//! let dawg = builder.finish();
//! assert_eq!(dawg.word_count(), 2);
//! ```

#![warn(missing_docs)]

/// Core word graph data structure: nodes, registry, builder, queries and exports.
pub mod dawg;
