//! Triangle counting

use crate::graph::{GraphStore, TraversalIndex, VertexId};
use std::collections::HashMap;

/// Number of triangles each vertex participates in.
///
/// The graph is treated as undirected and simple: edge direction,
/// parallel edges and self-loops are ignored. A triangle is a set of
/// three mutually adjacent vertices, and each member's count includes it
/// exactly once.
pub fn triangle_count(
    store: &GraphStore,
    index: &TraversalIndex,
) -> HashMap<VertexId, usize> {
    let n = store.vertex_count();
    let neighbors: Vec<_> = (0..n)
        .map(|pos| index.undirected_neighbors(store, pos))
        .collect();

    (0..n)
        .map(|v| {
            // Ordered pairs of neighbors halve to unordered triangles
            let adjacent_pairs: usize = neighbors[v]
                .iter()
                .map(|&u| neighbors[v].intersection(&neighbors[u]).count())
                .sum();
            (store.id_at(v).clone(), adjacent_pairs / 2)
        })
        .collect()
}
