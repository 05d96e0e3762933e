//! Adjacency index derived from a graph snapshot

use super::store::GraphStore;
use super::types::{EdgeId, VertexId};
use rustc_hash::FxHashSet;
use std::collections::HashMap;

/// A read-only adjacency view of a [`GraphStore`] snapshot.
///
/// Maps each vertex position (the vertex's index in the store's ordered
/// sequence) to its outgoing and incoming edge ids. Owned by the snapshot
/// that produced it: it is never mutated in place, and a store derived via
/// filtering needs its own index.
#[derive(Debug, Clone)]
pub struct TraversalIndex {
    /// Outgoing edge ids per vertex position
    outgoing: Vec<Vec<EdgeId>>,

    /// Incoming edge ids per vertex position
    incoming: Vec<Vec<EdgeId>>,
}

impl TraversalIndex {
    /// Build the index from a snapshot.
    ///
    /// Endpoint resolution cannot fail here: the store validated every edge
    /// at construction.
    pub fn build(store: &GraphStore) -> Self {
        let n = store.vertex_count();
        let mut outgoing = vec![Vec::new(); n];
        let mut incoming = vec![Vec::new(); n];

        for (i, edge) in store.edges().iter().enumerate() {
            let edge_id = EdgeId::new(i);
            if let (Some(src), Some(dst)) =
                (store.position_of(&edge.src), store.position_of(&edge.dst))
            {
                outgoing[src].push(edge_id);
                incoming[dst].push(edge_id);
            }
        }

        TraversalIndex { outgoing, incoming }
    }

    /// Outgoing edge ids of the vertex at `position`
    pub fn out_edges(&self, position: usize) -> &[EdgeId] {
        &self.outgoing[position]
    }

    /// Incoming edge ids of the vertex at `position`
    pub fn in_edges(&self, position: usize) -> &[EdgeId] {
        &self.incoming[position]
    }

    /// Out-degree of the vertex at `position`
    pub fn out_degree(&self, position: usize) -> usize {
        self.outgoing[position].len()
    }

    /// In-degree of the vertex at `position`
    pub fn in_degree(&self, position: usize) -> usize {
        self.incoming[position].len()
    }

    /// Number of indexed vertices
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// In-degree per vertex id
    pub fn in_degree_table(&self, store: &GraphStore) -> HashMap<VertexId, usize> {
        (0..self.vertex_count())
            .map(|pos| (store.id_at(pos).clone(), self.in_degree(pos)))
            .collect()
    }

    /// Out-degree per vertex id
    pub fn out_degree_table(&self, store: &GraphStore) -> HashMap<VertexId, usize> {
        (0..self.vertex_count())
            .map(|pos| (store.id_at(pos).clone(), self.out_degree(pos)))
            .collect()
    }

    /// Undirected neighbor positions of the vertex at `position`, with
    /// parallel and bidirectional edges deduplicated and self-loops
    /// excluded.
    pub fn undirected_neighbors(&self, store: &GraphStore, position: usize) -> FxHashSet<usize> {
        let mut neighbors = FxHashSet::default();
        for &edge_id in self.outgoing[position].iter().chain(&self.incoming[position]) {
            if let Some(edge) = store.edge(edge_id) {
                for endpoint in [&edge.src, &edge.dst] {
                    if let Some(pos) = store.position_of(endpoint) {
                        if pos != position {
                            neighbors.insert(pos);
                        }
                    }
                }
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Vertex};

    fn demo_store() -> GraphStore {
        GraphStore::new(
            vec![
                Vertex::new("101"),
                Vertex::new("201"),
                Vertex::new("301"),
                Vertex::new("401"),
            ],
            vec![
                Edge::new("101", "301"),
                Edge::new("101", "401"),
                Edge::new("401", "201"),
                Edge::new("301", "201"),
                Edge::new("201", "101"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_degrees() {
        let store = demo_store();
        let index = store.traversal_index();

        let p101 = store.position_of(&VertexId::new("101")).unwrap();
        let p201 = store.position_of(&VertexId::new("201")).unwrap();

        assert_eq!(index.out_degree(p101), 2);
        assert_eq!(index.in_degree(p101), 1);
        assert_eq!(index.in_degree(p201), 2);
        assert_eq!(index.out_degree(p201), 1);
    }

    #[test]
    fn test_in_degree_table() {
        let store = demo_store();
        let index = store.traversal_index();
        let table = index.in_degree_table(&store);

        assert_eq!(table[&VertexId::new("101")], 1);
        assert_eq!(table[&VertexId::new("201")], 2);
        assert_eq!(table[&VertexId::new("301")], 1);
        assert_eq!(table[&VertexId::new("401")], 1);
    }

    #[test]
    fn test_undirected_neighbors_dedup() {
        // Bidirectional pair plus a parallel edge still count one neighbor
        let store = GraphStore::new(
            vec![Vertex::new("a"), Vertex::new("b")],
            vec![
                Edge::new("a", "b"),
                Edge::new("b", "a"),
                Edge::new("a", "b"),
            ],
        )
        .unwrap();
        let index = store.traversal_index();

        let pa = store.position_of(&VertexId::new("a")).unwrap();
        assert_eq!(index.undirected_neighbors(&store, pa).len(), 1);
    }

    #[test]
    fn test_self_loop_excluded_from_neighbors() {
        let store = GraphStore::new(
            vec![Vertex::new("a")],
            vec![Edge::new("a", "a")],
        )
        .unwrap();
        let index = store.traversal_index();
        assert!(index.undirected_neighbors(&store, 0).is_empty());
        // Degree counts still see the loop
        assert_eq!(index.out_degree(0), 1);
        assert_eq!(index.in_degree(0), 1);
    }
}
