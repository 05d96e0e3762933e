//! Trellis Graph Engine
//!
//! A single-process, in-memory property graph query engine: validated
//! graph snapshots, motif pattern matching, predicate-driven BFS, and a
//! set of classic whole-graph algorithms (connected components, label
//! propagation, PageRank, landmark shortest paths, triangle counting).
//!
//! # Quick start
//!
//! ```
//! use trellis::graph::{Edge, GraphStore, Vertex, VertexId};
//! use trellis::algo::connected_components;
//!
//! let store = GraphStore::new(
//!     vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
//!     vec![Edge::new("a", "b")],
//! )?;
//! let components = connected_components(&store);
//! assert_ne!(
//!     components[&VertexId::new("c")],
//!     components[&VertexId::new("a")],
//! );
//! # Ok::<(), trellis::graph::GraphError>(())
//! ```

pub mod algo;
pub mod graph;
pub mod motif;

pub use graph::{
    Edge, EdgeId, GraphError, GraphResult, GraphStore, PropertyMap, PropertyValue,
    TraversalIndex, Vertex, VertexId,
};
pub use motif::{find_motif, Motif, PathBinding};

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
