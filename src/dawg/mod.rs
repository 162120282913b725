/// Incremental construction of minimal word graphs from sorted words.
pub mod builder;
/// Graphviz DOT export.
pub mod dot;
/// Flattened array representation and array-only lookups.
pub mod flatten;
/// Node identities, nodes and their compact edge lists.
pub mod node;
/// Index-addressed node storage.
pub mod node_arena;
/// A finished word graph that owns its nodes.
pub mod owned;
/// Membership and prefix queries.
pub mod query;
/// Signature-keyed registry of canonical nodes.
pub mod registry;

pub use builder::{build_dawg, Builder, BuilderError};
pub use flatten::{flat_lookup, ArrayEntry};
pub use node::{Node, NodeId};
pub use owned::{Dawg, DawgError};
pub use query::WordGraph;
