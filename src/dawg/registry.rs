use hashbrown::HashMap;
use smallvec::SmallVec;

use super::node::{Node, NodeId};
use super::node_arena::NodeArena;

/// Structural key of a node whose children are already canonical.
///
/// Because children are canonicalized before their parents, comparing child
/// identities one level down is enough: two nodes have equal signatures iff the
/// automata rooted at them accept the same language.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    terminal: bool,
    edges: SmallVec<[(u8, NodeId); 4]>,
}

impl Signature {
    /// Computes the signature of `node` from its terminal flag and sorted edges.
    pub fn of(node: &Node) -> Self {
        Signature {
            terminal: node.is_terminal(),
            edges: node.children().collect(),
        }
    }
}

/// Maps signatures to the canonical node carrying them.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    classes: HashMap<Signature, NodeId>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Returns the canonical node equivalent to `id`.
    ///
    /// If no equivalent node has been registered yet, `id` becomes the canonical
    /// representative of its signature and is returned unchanged.
    pub fn register(&mut self, arena: &NodeArena, id: NodeId) -> NodeId {
        let node = &arena[id];
        debug_assert!(
            node.children().all(|(_, child)| self.is_canonical(arena, child)),
            "Cannot register a node unless all its children are canonical"
        );
        *self.classes.entry(Signature::of(node)).or_insert(id)
    }

    /// Returns true if `id` is the registered representative of its signature.
    pub fn is_canonical(&self, arena: &NodeArena, id: NodeId) -> bool {
        self.classes.get(&Signature::of(&arena[id])) == Some(&id)
    }

    /// Returns the number of canonical nodes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns an iterator over the canonical nodes, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.classes.values().copied()
    }
}
