use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::builder::{build_dawg, BuilderError};
use super::node_arena::NodeArena;
use super::query::WordGraph;
use super::registry::Registry;

/// Errors that can occur when building a graph from a word list.
#[derive(Debug, Error)]
pub enum DawgError {
    /// The word list contained a duplicate word.
    ///
    /// Lines are sorted before insertion, so this is the only ordering error a
    /// word list can produce.
    #[error(transparent)]
    Order(#[from] BuilderError),
    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// A finished, minimal word graph.
///
/// A `Dawg` owns the arena its nodes live in, so it can be freely moved, stored and
/// shared between threads. It is immutable: construct a new one with a
/// [`Builder`](super::builder::Builder) to change the word set.
///
/// # Examples
///
/// ```
/// use wordgraph::dawg::builder::build_dawg;
/// use wordgraph::dawg::WordGraph;
///
/// let dawg = build_dawg(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
/// assert!(dawg.lookup("CAKE"));
/// assert!(!dawg.lookup("AKE"));
/// // root, then one shared node each for "AKE", "KE", "E" and the final leaf
/// assert_eq!(dawg.node_count(), 5);
/// ```
#[derive(Clone)]
pub struct Dawg {
    arena: NodeArena,
    registry: Registry,
    word_count: usize,
}

impl Dawg {
    pub(crate) fn new(arena: NodeArena, registry: Registry, word_count: usize) -> Self {
        Dawg {
            arena,
            registry,
            word_count,
        }
    }

    /// Builds a graph from newline-separated words read from `reader`.
    ///
    /// The words don't need to be sorted. Only the line terminator (`\n` or `\r\n`)
    /// is stripped, so other trailing whitespace is part of the word. Blank lines are
    /// skipped. The list is not deduplicated: a word that occurs twice is reported as
    /// an ordering error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgraph::dawg::owned::Dawg;
    /// use wordgraph::dawg::WordGraph;
    ///
    /// let dawg = Dawg::from_reader("dog\ncat\n#pets\ncats\n".as_bytes()).unwrap();
    /// assert!(dawg.lookup("cats"));
    /// assert!(dawg.lookup("#pets"));
    /// assert_eq!(dawg.word_count(), 4);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Dawg, DawgError> {
        build_sorted(read_lines(reader, |_| true)?)
    }

    /// Like [`from_reader`](Dawg::from_reader), but also skips comment lines, whose
    /// first non-blank byte is `#`.
    ///
    /// ```
    /// use wordgraph::dawg::owned::Dawg;
    /// use wordgraph::dawg::WordGraph;
    ///
    /// let dawg = Dawg::from_commented_reader("dog\n# pets\ncat\n".as_bytes()).unwrap();
    /// assert!(!dawg.lookup("# pets"));
    /// assert_eq!(dawg.word_count(), 2);
    /// ```
    pub fn from_commented_reader<R: BufRead>(reader: R) -> Result<Dawg, DawgError> {
        build_sorted(read_lines(reader, |line| !is_comment(line))?)
    }

    /// Builds a graph from a word list file, one word per line.
    ///
    /// See [`from_reader`](Dawg::from_reader) for the accepted format.
    ///
    /// ```no_run
    /// use wordgraph::dawg::owned::Dawg;
    ///
    /// let dawg = Dawg::from_file("dictionary.txt").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Dawg, DawgError> {
        let path = path.as_ref();
        debug!("reading word list from {}", path.display());
        let file = File::open(path)?;
        Dawg::from_reader(BufReader::new(file))
    }

    /// Returns the number of distinct nodes, root included.
    pub fn node_count(&self) -> usize {
        self.registry.len() + 1
    }

    /// Returns the number of edges between distinct nodes.
    pub fn edge_count(&self) -> usize {
        self.registry
            .ids()
            .map(|id| self.arena[id].child_count())
            .sum::<usize>()
            + self.arena.root().child_count()
    }

    /// Returns the number of words in the graph.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the registry of canonical nodes.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl WordGraph for Dawg {
    fn arena(&self) -> &NodeArena {
        &self.arena
    }
}

impl std::fmt::Debug for Dawg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dawg")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

/// Reads the non-blank lines of `reader` that `keep` accepts, line terminators
/// stripped.
fn read_lines<R: BufRead>(
    mut reader: R,
    keep: impl Fn(&[u8]) -> bool,
) -> io::Result<Vec<Vec<u8>>> {
    let mut words = Vec::new();
    // Reuse one line buffer instead of allocating a new one for every line.
    let mut buf = Vec::with_capacity(80);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_terminator(&buf);
        if !line.is_empty() && keep(line) {
            words.push(line.to_vec());
        }
    }
    Ok(words)
}

fn build_sorted(mut words: Vec<Vec<u8>>) -> Result<Dawg, DawgError> {
    words.sort_unstable();
    debug!("read {} words", words.len());
    Ok(build_dawg(words)?)
}

/// Strips a trailing `\n` and then at most one `\r`.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &[u8]) -> bool {
    line.trim_ascii_start().starts_with(b"#")
}
