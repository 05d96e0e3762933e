//! Graph algorithms.
//!
//! Each algorithm is a stateless function (or builder, for BFS) over a
//! [`GraphStore`](crate::graph::GraphStore) snapshot and its
//! [`TraversalIndex`](crate::graph::TraversalIndex). Inputs are never
//! mutated; results are fresh tables keyed by vertex id.

pub mod bfs;
pub mod components;
pub mod labelprop;
pub mod pagerank;
pub mod shortest_paths;
pub mod topology;

pub use bfs::{Bfs, Path};
pub use components::connected_components;
pub use labelprop::{label_propagation, LabelPropagationConfig};
pub use pagerank::{page_rank, PageRankConfig, PageRankResult};
pub use shortest_paths::shortest_paths;
pub use topology::triangle_count;
