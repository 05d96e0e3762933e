//! Weakly-connected components

use crate::graph::{GraphStore, VertexId};
use std::collections::HashMap;

/// Union-Find over vertex positions
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Compute weakly-connected components, ignoring edge direction.
///
/// Returns vertex id -> component id, where the component id is the
/// minimum vertex id in that component — deterministic under any
/// reordering of input vertices or edges. Disconnected singletons map to
/// themselves.
pub fn connected_components(store: &GraphStore) -> HashMap<VertexId, VertexId> {
    let n = store.vertex_count();
    let mut uf = UnionFind::new(n);

    for edge in store.edges() {
        if let (Some(src), Some(dst)) =
            (store.position_of(&edge.src), store.position_of(&edge.dst))
        {
            uf.union(src, dst);
        }
    }

    // Canonical representative: smallest vertex id per root
    let mut canonical: HashMap<usize, VertexId> = HashMap::new();
    for pos in 0..n {
        let root = uf.find(pos);
        let id = store.id_at(pos);
        canonical
            .entry(root)
            .and_modify(|min| {
                if id < min {
                    *min = id.clone();
                }
            })
            .or_insert_with(|| id.clone());
    }

    (0..n)
        .map(|pos| {
            let root = uf.find(pos);
            (store.id_at(pos).clone(), canonical[&root].clone())
        })
        .collect()
}
