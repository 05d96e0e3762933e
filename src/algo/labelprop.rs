//! Community detection via label propagation

use crate::graph::{GraphStore, TraversalIndex, VertexId};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use tracing::debug;

/// Label propagation configuration
#[derive(Debug, Clone)]
pub struct LabelPropagationConfig {
    /// Number of voting iterations to run
    pub max_iter: usize,
}

impl Default for LabelPropagationConfig {
    fn default() -> Self {
        Self { max_iter: 5 }
    }
}

/// Iterative majority-label community detection.
///
/// Every vertex starts labeled with its own id. Each iteration recomputes
/// every vertex's label as the most frequent label among its neighbors in
/// both directions, from a frozen snapshot of the previous iteration
/// (synchronous update), breaking ties by smallest label value. Stops
/// after `max_iter` iterations, or earlier if no label changed.
pub fn label_propagation(
    store: &GraphStore,
    index: &TraversalIndex,
    config: LabelPropagationConfig,
) -> HashMap<VertexId, VertexId> {
    let n = store.vertex_count();

    // Labels are vertex positions; the reported value is that vertex's id.
    let mut labels: Vec<usize> = (0..n).collect();
    let mut next_labels = labels.clone();

    for iteration in 0..config.max_iter {
        let mut changed = false;

        for v in 0..n {
            let mut tally: FxHashMap<usize, usize> = FxHashMap::default();
            for &edge_id in index.out_edges(v) {
                if let Some(edge) = store.edge(edge_id) {
                    if let Some(neighbor) = store.position_of(&edge.dst) {
                        *tally.entry(labels[neighbor]).or_insert(0) += 1;
                    }
                }
            }
            for &edge_id in index.in_edges(v) {
                if let Some(edge) = store.edge(edge_id) {
                    if let Some(neighbor) = store.position_of(&edge.src) {
                        *tally.entry(labels[neighbor]).or_insert(0) += 1;
                    }
                }
            }

            // Isolated vertices keep their label
            let Some(winner) = majority_label(store, &tally) else {
                next_labels[v] = labels[v];
                continue;
            };
            next_labels[v] = winner;
            if winner != labels[v] {
                changed = true;
            }
        }

        labels.copy_from_slice(&next_labels);

        if !changed {
            debug!(iteration, "label propagation stable, stopping early");
            break;
        }
    }

    (0..n)
        .map(|v| (store.id_at(v).clone(), store.id_at(labels[v]).clone()))
        .collect()
}

/// Most frequent label; ties break to the smallest label value
fn majority_label(store: &GraphStore, tally: &FxHashMap<usize, usize>) -> Option<usize> {
    tally
        .iter()
        .min_by(|(label_a, count_a), (label_b, count_b)| {
            count_b
                .cmp(count_a)
                .then_with(|| store.id_at(**label_a).cmp(store.id_at(**label_b)))
        })
        .map(|(&label, _)| label)
}
