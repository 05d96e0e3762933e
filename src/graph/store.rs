//! In-memory graph snapshot storage

use super::edge::Edge;
use super::index::TraversalIndex;
use super::types::{EdgeId, VertexId};
use super::vertex::Vertex;
use indexmap::IndexMap;
use thiserror::Error;

/// Errors raised by graph construction and the algorithm components
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("duplicate vertex id {0}")]
    DuplicateVertex(VertexId),

    #[error("edge {src} -> {dst} references unknown vertex {missing}")]
    DanglingEdge {
        src: VertexId,
        dst: VertexId,
        missing: VertexId,
    },

    #[error("landmark {0} is not present in the graph")]
    UnknownLandmark(VertexId),

    #[error("landmark set must not be empty")]
    EmptyLandmarks,

    #[error("invalid motif pattern: {0}")]
    InvalidMotif(String),

    #[error("pagerank did not converge within {0} iterations")]
    Convergence(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An immutable property graph snapshot.
///
/// Holds an ordered sequence of vertices (unique ids enforced) and an
/// ordered sequence of directed edges. Invariant: every edge endpoint
/// references a vertex present in the snapshot; violations are rejected at
/// construction. Narrowing operations ([`filter_vertices`](Self::filter_vertices),
/// [`filter_edges`](Self::filter_edges), [`subgraph`](Self::subgraph))
/// produce independent snapshots sharing no mutable state with the parent.
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Vertex storage: insertion-ordered, indexed by id
    vertices: IndexMap<VertexId, Vertex>,

    /// Edge storage: insertion-ordered; `EdgeId` is the position here
    edges: Vec<Edge>,
}

impl GraphStore {
    /// Create a snapshot from vertex and edge collections.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if two vertices share an
    /// id, or [`GraphError::DanglingEdge`] if an edge endpoint is unknown.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut map = IndexMap::with_capacity(vertices.len());
        for vertex in vertices {
            let id = vertex.id.clone();
            if map.insert(id.clone(), vertex).is_some() {
                return Err(GraphError::DuplicateVertex(id));
            }
        }

        for edge in &edges {
            for endpoint in [&edge.src, &edge.dst] {
                if !map.contains_key(endpoint) {
                    return Err(GraphError::DanglingEdge {
                        src: edge.src.clone(),
                        dst: edge.dst.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(GraphStore {
            vertices: map,
            edges,
        })
    }

    /// Construct a snapshot from already-filtered collections.
    ///
    /// Unique vertex ids are still enforced; edges left dangling by the
    /// vertex selection are dropped rather than rejected.
    pub fn subgraph(vertices: Vec<Vertex>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut map = IndexMap::with_capacity(vertices.len());
        for vertex in vertices {
            let id = vertex.id.clone();
            if map.insert(id.clone(), vertex).is_some() {
                return Err(GraphError::DuplicateVertex(id));
            }
        }

        let edges = edges
            .into_iter()
            .filter(|e| map.contains_key(&e.src) && map.contains_key(&e.dst))
            .collect();

        Ok(GraphStore {
            vertices: map,
            edges,
        })
    }

    /// Derive a new snapshot keeping only vertices satisfying `predicate`.
    ///
    /// Edges whose endpoints were removed are dropped from the derived
    /// graph.
    pub fn filter_vertices<F>(&self, predicate: F) -> GraphStore
    where
        F: Fn(&Vertex) -> bool,
    {
        let vertices: IndexMap<VertexId, Vertex> = self
            .vertices
            .iter()
            .filter(|(_, v)| predicate(v))
            .map(|(id, v)| (id.clone(), v.clone()))
            .collect();

        let edges = self
            .edges
            .iter()
            .filter(|e| vertices.contains_key(&e.src) && vertices.contains_key(&e.dst))
            .cloned()
            .collect();

        GraphStore { vertices, edges }
    }

    /// Derive a new snapshot keeping all vertices and only edges satisfying
    /// `predicate`.
    pub fn filter_edges<F>(&self, predicate: F) -> GraphStore
    where
        F: Fn(&Edge) -> bool,
    {
        GraphStore {
            vertices: self.vertices.clone(),
            edges: self.edges.iter().filter(|e| predicate(e)).cloned().collect(),
        }
    }

    /// Build the adjacency index for this snapshot
    pub fn traversal_index(&self) -> TraversalIndex {
        TraversalIndex::build(self)
    }

    /// Get a vertex by id
    pub fn vertex(&self, id: &VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Check if a vertex exists
    pub fn contains_vertex(&self, id: &VertexId) -> bool {
        self.vertices.contains_key(id)
    }

    /// Get an edge by id
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.as_usize())
    }

    /// Iterate vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Position of a vertex within the snapshot's ordered sequence
    pub fn position_of(&self, id: &VertexId) -> Option<usize> {
        self.vertices.get_index_of(id)
    }

    /// Vertex at a given position; panics if out of bounds
    pub fn vertex_at(&self, position: usize) -> &Vertex {
        &self.vertices[position]
    }

    /// Vertex id at a given position; panics if out of bounds
    pub fn id_at(&self, position: usize) -> &VertexId {
        &self.vertices[position].id
    }

    /// Total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Vertex> {
        vec![
            Vertex::new("101").with_property("name", "Trina").with_property("age", 27i64),
            Vertex::new("201").with_property("name", "Raman").with_property("age", 45i64),
            Vertex::new("301").with_property("name", "Ajay").with_property("age", 32i64),
        ]
    }

    #[test]
    fn test_create_and_lookup() {
        let store = GraphStore::new(
            people(),
            vec![Edge::new("101", "301").with_property("relationship", "Colleague")],
        )
        .unwrap();

        assert_eq!(store.vertex_count(), 3);
        assert_eq!(store.edge_count(), 1);

        let trina = store.vertex(&VertexId::new("101")).unwrap();
        assert_eq!(trina.get_property("name").unwrap().as_string(), Some("Trina"));

        assert!(store.contains_vertex(&VertexId::new("301")));
        assert!(!store.contains_vertex(&VertexId::new("999")));
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let result = GraphStore::new(
            vec![Vertex::new("101"), Vertex::new("101")],
            vec![],
        );
        assert_eq!(result.unwrap_err(), GraphError::DuplicateVertex(VertexId::new("101")));
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let result = GraphStore::new(
            vec![Vertex::new("101")],
            vec![Edge::new("101", "999")],
        );
        assert_eq!(
            result.unwrap_err(),
            GraphError::DanglingEdge {
                src: VertexId::new("101"),
                dst: VertexId::new("999"),
                missing: VertexId::new("999"),
            }
        );
    }

    #[test]
    fn test_filter_vertices_drops_dangling_edges() {
        let store = GraphStore::new(
            people(),
            vec![
                Edge::new("101", "301"),
                Edge::new("101", "201"),
                Edge::new("301", "201"),
            ],
        )
        .unwrap();

        // Keep only vertices older than 30; edges touching Trina vanish
        let narrowed = store.filter_vertices(|v| {
            v.get_property("age").and_then(|a| a.as_integer()).is_some_and(|a| a > 30)
        });

        assert_eq!(narrowed.vertex_count(), 2);
        assert_eq!(narrowed.edge_count(), 1);
        assert_eq!(narrowed.edges()[0].src, VertexId::new("301"));

        // Parent untouched
        assert_eq!(store.vertex_count(), 3);
        assert_eq!(store.edge_count(), 3);
    }

    #[test]
    fn test_filter_edges_keeps_vertices() {
        let store = GraphStore::new(
            people(),
            vec![
                Edge::new("101", "301").with_property("relationship", "Colleague"),
                Edge::new("301", "201").with_property("relationship", "Reports"),
            ],
        )
        .unwrap();

        let reports = store.filter_edges(|e| {
            e.get_property("relationship").and_then(|r| r.as_string()) == Some("Reports")
        });

        assert_eq!(reports.vertex_count(), 3);
        assert_eq!(reports.edge_count(), 1);
    }

    #[test]
    fn test_subgraph_drops_dangling_silently() {
        let store = GraphStore::subgraph(
            vec![Vertex::new("201"), Vertex::new("301")],
            vec![Edge::new("301", "201"), Edge::new("101", "301")],
        )
        .unwrap();

        assert_eq!(store.vertex_count(), 2);
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_positional_access() {
        let store = GraphStore::new(people(), vec![]).unwrap();
        assert_eq!(store.position_of(&VertexId::new("201")), Some(1));
        assert_eq!(store.id_at(1), &VertexId::new("201"));
        assert_eq!(store.vertex_at(0).id, VertexId::new("101"));
    }

    #[test]
    fn test_multigraph_edges() {
        let store = GraphStore::new(
            people(),
            vec![Edge::new("101", "201"), Edge::new("101", "201")],
        )
        .unwrap();
        assert_eq!(store.edge_count(), 2);
        assert!(store.edge(EdgeId::new(1)).is_some());
        assert!(store.edge(EdgeId::new(2)).is_none());
    }
}
