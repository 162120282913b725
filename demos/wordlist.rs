//! Example: building a word graph and looking at it.
//!
//! Builds a graph from a small word list, runs some lookups, then prints its
//! statistics, the flattened array and the DOT export.
//!
//! Run with: RUST_LOG=debug cargo run --example wordlist

use std::error::Error;
use std::io;

use wordgraph::dawg::{flat_lookup, Dawg, WordGraph};

const WORDS: &str = "\
CAKE
BAKED
LAKE
BAKE
FAKE
# bakers bake
BAKER
CAKED
";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dawg = Dawg::from_commented_reader(WORDS.as_bytes())?;

    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if dawg.lookup(word) { "yes" } else { "no" });
    }

    println!("\nPrefix completion:");
    for prefix in ["BA", "CAK", "MA", "F"] {
        match dawg.lookup_prefix(prefix) {
            Some(word) => println!("  {prefix}*: {}", String::from_utf8_lossy(&word)),
            None => println!("  {prefix}*: -"),
        }
    }

    let words: Vec<String> = dawg
        .words()
        .map(|w| String::from_utf8_lossy(&w).into_owned())
        .collect();
    println!("\nAll words: {words:?}");
    println!(
        "{} words, {} nodes, {} edges",
        dawg.word_count(),
        dawg.node_count(),
        dawg.edge_count()
    );

    let entries = dawg.flatten();
    println!("\nFlattened:");
    for (i, e) in entries.iter().enumerate() {
        println!(
            "  {i:3}: {} terminal={} eol={} child={:?}",
            char::from(e.label),
            e.terminal,
            e.end_of_list,
            e.child_index
        );
    }
    assert!(words.iter().all(|w| flat_lookup(&entries, w)));

    println!();
    dawg.write_dot(io::stdout().lock())?;
    Ok(())
}
