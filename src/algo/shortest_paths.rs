//! Landmark shortest-distance computation

use crate::graph::{GraphError, GraphResult, GraphStore, TraversalIndex, VertexId};
use std::collections::{HashMap, VecDeque};

/// Shortest hop-distances from every vertex to each landmark.
///
/// Distances follow edge direction (outgoing traversal only). Fails with
/// [`GraphError::EmptyLandmarks`] on an empty landmark set and
/// [`GraphError::UnknownLandmark`] if a landmark id is absent. Every
/// vertex appears in the result; a landmark unreachable from a vertex is
/// omitted from that vertex's distance map. A landmark's distance to
/// itself is 0.
///
/// Runs one BFS per landmark backward over incoming edges, so cost is
/// O(landmarks × edges) rather than one search per source vertex.
pub fn shortest_paths(
    store: &GraphStore,
    index: &TraversalIndex,
    landmarks: &[VertexId],
) -> GraphResult<HashMap<VertexId, HashMap<VertexId, usize>>> {
    if landmarks.is_empty() {
        return Err(GraphError::EmptyLandmarks);
    }

    let mut landmark_positions = Vec::with_capacity(landmarks.len());
    for landmark in landmarks {
        let position = store
            .position_of(landmark)
            .ok_or_else(|| GraphError::UnknownLandmark(landmark.clone()))?;
        landmark_positions.push((landmark, position));
    }

    let n = store.vertex_count();
    let mut result: HashMap<VertexId, HashMap<VertexId, usize>> = (0..n)
        .map(|pos| (store.id_at(pos).clone(), HashMap::new()))
        .collect();

    for (landmark, start) in landmark_positions {
        let mut dist = vec![usize::MAX; n];
        let mut queue = VecDeque::new();
        dist[start] = 0;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &edge_id in index.in_edges(current) {
                let Some(edge) = store.edge(edge_id) else {
                    continue;
                };
                let Some(predecessor) = store.position_of(&edge.src) else {
                    continue;
                };
                if dist[predecessor] == usize::MAX {
                    dist[predecessor] = dist[current] + 1;
                    queue.push_back(predecessor);
                }
            }
        }

        for (pos, &d) in dist.iter().enumerate() {
            if d != usize::MAX {
                if let Some(distances) = result.get_mut(store.id_at(pos)) {
                    distances.insert(landmark.clone(), d);
                }
            }
        }
    }

    Ok(result)
}
