//! Core identifier types for the graph engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex.
///
/// Vertex identity is a caller-supplied string; two vertices with the same
/// id are the same entity. Ordered so canonical tie-breaks (component ids,
/// label propagation) are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        VertexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        VertexId(id)
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        VertexId(id.to_string())
    }
}

/// Identifier for an edge: its position in the store's edge sequence.
///
/// Edges carry no natural key (the graph is a multigraph), so the position
/// within the owning snapshot is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        EdgeId(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new("101");
        assert_eq!(id.as_str(), "101");
        assert_eq!(format!("{}", id), "101");

        let id2: VertexId = "201".into();
        assert_eq!(id2.as_str(), "201");
    }

    #[test]
    fn test_vertex_id_ordering() {
        let a = VertexId::new("101");
        let b = VertexId::new("201");
        assert!(a < b);
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(3);
        assert_eq!(id.as_usize(), 3);
        assert_eq!(format!("{}", id), "EdgeId(3)");
    }
}
