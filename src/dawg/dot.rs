//! Graphviz DOT export, for looking at a graph rather than storing it.

use std::collections::VecDeque;
use std::io::{self, Write};

use super::node::NodeId;
use super::owned::Dawg;
use super::query::WordGraph;

const ROOT_STYLE: &str = r##" style=filled fillcolor="#80ff80""##;
const TERMINAL_STYLE: &str = r##" style=filled fillcolor="#ff8080""##;

/// Writes `graph` to `w` as a DOT `digraph`.
///
/// Every node reachable from the root is written once, named `N<id>`, in
/// breadth-first order, followed by its outgoing edges in ascending label order.
/// The root is filled green and terminal nodes red. Printable ASCII labels are
/// written as-is, other bytes as two hex digits.
pub fn write_dot<G: WordGraph, W: Write>(graph: &G, mut w: W) -> io::Result<()> {
    writeln!(w, "digraph g {{")?;
    writeln!(w, "  node [shape=circle];")?;

    let mut seen = vec![false; graph.arena().len()];
    let mut queue = VecDeque::from([NodeId::ROOT]);
    seen[NodeId::ROOT.index()] = true;
    while let Some(id) = queue.pop_front() {
        let node = graph.node(id);
        let style = if node.is_terminal() {
            TERMINAL_STYLE
        } else if id == NodeId::ROOT {
            ROOT_STYLE
        } else {
            ""
        };
        writeln!(w, "  N{id} [label={id}{style}];")?;
        for (label, child) in node.children() {
            writeln!(w, "  N{id} -> N{child} [label=\"{}\"];", escape_label(label))?;
            if !seen[child.index()] {
                seen[child.index()] = true;
                queue.push_back(child);
            }
        }
    }
    writeln!(w, "}}")?;
    w.flush()
}

fn escape_label(b: u8) -> String {
    match b {
        b'"' => "\\\"".to_string(),
        b'\\' => "\\\\".to_string(),
        0x20..=0x7e => char::from(b).to_string(),
        _ => format!("{b:02X}"),
    }
}

impl Dawg {
    /// Writes the graph to `w` in DOT format. See [`write_dot`].
    pub fn write_dot<W: Write>(&self, w: W) -> io::Result<()> {
        write_dot(self, w)
    }
}
