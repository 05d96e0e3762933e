//! PageRank with damping and L1 convergence

use crate::graph::{GraphError, GraphResult, GraphStore, TraversalIndex, VertexId};
use std::collections::HashMap;
use tracing::debug;

/// PageRank configuration
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Probability mass redistributed uniformly each iteration (damping
    /// complement, e.g. 0.15)
    pub reset_probability: f64,
    /// L1 convergence tolerance over per-vertex rank changes
    pub tol: f64,
    /// Safety cap: exceeding it without converging is an error
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            reset_probability: 0.15,
            tol: 0.01,
            max_iterations: 100,
        }
    }
}

/// PageRank output: the rank table plus per-edge weights.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Final stationary rank per vertex; ranks sum to 1
    pub ranks: HashMap<VertexId, f64>,
    /// Share of source rank attributed to each edge (`1/out_degree(src)`),
    /// aligned with the store's edge order
    pub edge_weights: Vec<f64>,
}

/// Iterative PageRank.
///
/// Ranks start uniform at 1/N. Each iteration every vertex receives
/// `reset/N` plus the damped sum of `rank(src)/out_degree(src)` over its
/// incoming edges; rank held by zero-out-degree vertices is spread
/// uniformly over all vertices so total mass stays 1. Iteration stops when
/// the L1 delta drops below `tol`; exceeding `max_iterations` first fails
/// with [`GraphError::Convergence`].
pub fn page_rank(
    store: &GraphStore,
    index: &TraversalIndex,
    config: PageRankConfig,
) -> GraphResult<PageRankResult> {
    let n = store.vertex_count();
    if n == 0 {
        return Ok(PageRankResult {
            ranks: HashMap::new(),
            edge_weights: Vec::new(),
        });
    }

    let uniform = 1.0 / n as f64;
    let damping = 1.0 - config.reset_probability;

    let mut ranks = vec![uniform; n];
    let mut next_ranks = vec![0.0; n];
    let mut converged = false;

    for iteration in 0..config.max_iterations {
        // Mass held by vertices with no outgoing edges is spread uniformly
        let dangling: f64 = (0..n)
            .filter(|&v| index.out_degree(v) == 0)
            .map(|v| ranks[v])
            .sum();
        let base = config.reset_probability * uniform + damping * dangling * uniform;

        let mut total_diff = 0.0;
        for v in 0..n {
            let mut incoming = 0.0;
            for &edge_id in index.in_edges(v) {
                if let Some(edge) = store.edge(edge_id) {
                    if let Some(src) = store.position_of(&edge.src) {
                        incoming += ranks[src] / index.out_degree(src) as f64;
                    }
                }
            }
            next_ranks[v] = base + damping * incoming;
            total_diff += (next_ranks[v] - ranks[v]).abs();
        }

        ranks.copy_from_slice(&next_ranks);
        debug!(iteration, total_diff, "pagerank iteration");

        if total_diff < config.tol {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(GraphError::Convergence(config.max_iterations));
    }

    let edge_weights = store
        .edges()
        .iter()
        .map(|edge| match store.position_of(&edge.src) {
            Some(src) => 1.0 / index.out_degree(src) as f64,
            None => 0.0,
        })
        .collect();

    let ranks = ranks
        .into_iter()
        .enumerate()
        .map(|(pos, rank)| (store.id_at(pos).clone(), rank))
        .collect();

    Ok(PageRankResult {
        ranks,
        edge_weights,
    })
}
