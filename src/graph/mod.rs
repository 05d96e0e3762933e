//! Property graph data model and storage
//!
//! This module implements the snapshot-oriented graph core:
//! - Vertices identified by string ids, with free-form attributes
//! - Directed edges with attributes; parallel edges allowed
//! - [`GraphStore`]: validated, immutable snapshots with filtered views
//! - [`TraversalIndex`]: derived adjacency used by every algorithm

pub mod edge;
pub mod index;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

pub use edge::Edge;
pub use index::TraversalIndex;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{EdgeId, VertexId};
pub use vertex::Vertex;
