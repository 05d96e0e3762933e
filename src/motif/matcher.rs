//! Motif binding enumeration

use super::parser::Motif;
use crate::graph::{Edge, EdgeId, GraphStore, TraversalIndex, Vertex, VertexId};
use rustc_hash::FxHashMap;

/// A graph entity bound to a motif variable
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Vertex(VertexId),
    Edge(EdgeId),
}

/// One satisfying assignment of graph entities to a motif's variables.
///
/// Anonymous pattern elements are matched but not recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBinding {
    bindings: FxHashMap<String, Bound>,
}

impl PathBinding {
    /// Raw binding for a variable
    pub fn get(&self, var: &str) -> Option<&Bound> {
        self.bindings.get(var)
    }

    /// Resolve a vertex variable against the store it was matched in
    pub fn vertex<'a>(&self, var: &str, store: &'a GraphStore) -> Option<&'a Vertex> {
        match self.bindings.get(var)? {
            Bound::Vertex(id) => store.vertex(id),
            Bound::Edge(_) => None,
        }
    }

    /// Resolve an edge variable against the store it was matched in
    pub fn edge<'a>(&self, var: &str, store: &'a GraphStore) -> Option<&'a Edge> {
        match self.bindings.get(var)? {
            Bound::Edge(id) => store.edge(*id),
            Bound::Vertex(_) => None,
        }
    }

    /// Number of named variables bound
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn bind(&mut self, var: Option<&str>, value: Bound) -> BindOutcome {
        let Some(var) = var else {
            return BindOutcome::NoVar;
        };
        match self.bindings.get(var) {
            Some(existing) if *existing == value => BindOutcome::Matched,
            Some(_) => BindOutcome::Conflict,
            None => {
                self.bindings.insert(var.to_string(), value);
                BindOutcome::Inserted
            }
        }
    }

    fn unbind(&mut self, var: Option<&str>, outcome: BindOutcome) {
        if let (Some(var), BindOutcome::Inserted) = (var, outcome) {
            self.bindings.remove(var);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BindOutcome {
    /// Element is anonymous
    NoVar,
    /// Variable newly bound
    Inserted,
    /// Variable already bound to the same entity
    Matched,
    /// Variable already bound to a different entity
    Conflict,
}

/// Enumerate every [`PathBinding`] satisfying `motif` against the graph.
///
/// Matching walks the chain hop by hop through the index's outgoing edge
/// lists, so cost is O(edges) per hop rather than a cross-product over
/// vertices. A variable repeated in the chain constrains the binding to the
/// same entity. Post-filters over bound attributes are ordinary closures
/// applied by the caller to the returned bindings.
pub fn find_motif(store: &GraphStore, index: &TraversalIndex, motif: &Motif) -> Vec<PathBinding> {
    let mut results = Vec::new();

    for start in 0..store.vertex_count() {
        let mut binding = PathBinding::default();
        let start_var = motif.start.as_deref();
        let outcome = binding.bind(start_var, Bound::Vertex(store.id_at(start).clone()));
        if outcome != BindOutcome::Conflict {
            walk(store, index, motif, 0, start, &mut binding, &mut results);
        }
        binding.unbind(start_var, outcome);
    }

    results
}

fn walk(
    store: &GraphStore,
    index: &TraversalIndex,
    motif: &Motif,
    hop_idx: usize,
    current: usize,
    binding: &mut PathBinding,
    results: &mut Vec<PathBinding>,
) {
    if hop_idx == motif.hops.len() {
        results.push(binding.clone());
        return;
    }

    let hop = &motif.hops[hop_idx];
    for &edge_id in index.out_edges(current) {
        let Some(edge) = store.edge(edge_id) else {
            continue;
        };

        let edge_var = hop.edge.as_deref();
        let edge_outcome = binding.bind(edge_var, Bound::Edge(edge_id));
        if edge_outcome == BindOutcome::Conflict {
            continue;
        }

        let vertex_var = hop.vertex.as_deref();
        let vertex_outcome = binding.bind(vertex_var, Bound::Vertex(edge.dst.clone()));
        if vertex_outcome != BindOutcome::Conflict {
            if let Some(dst) = store.position_of(&edge.dst) {
                walk(store, index, motif, hop_idx + 1, dst, binding, results);
            }
        }

        binding.unbind(vertex_var, vertex_outcome);
        binding.unbind(edge_var, edge_outcome);
    }
}
