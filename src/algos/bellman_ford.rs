//! Bellman-Ford single-source shortest paths

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node, Weight};
use crate::paths::ShortestPaths;

/// Bellman-Ford shortest paths from `source`; signed weights allowed.
///
/// Relaxes the full edge set `order - 1` times, then runs one more
/// pass: if any edge still relaxes, a negative cycle is reachable from
/// `source` and the call fails with `NegativeCycle`, discarding every
/// distance computed so far. The returned maps have the same filtered
/// shape as [`dijkstra`](crate::algos::dijkstra).
///
/// Fails with `NodeNotFound` if `source` is absent.
#[tracing::instrument(skip(graph), fields(order = graph.order(), size = graph.size()))]
pub fn bellman_ford<N: Node>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    if !graph.contains(source) {
        return Err(GraphError::node_not_found(source));
    }

    let mut distance: HashMap<N, Weight> = HashMap::new();
    let mut predecessor: HashMap<N, N> = HashMap::new();
    distance.insert(source.clone(), 0.0);

    let rounds = graph.order().saturating_sub(1);
    for _ in 0..rounds {
        for (u, v, weight) in graph.weighted_edges() {
            let Some(&through) = distance.get(u) else {
                continue;
            };
            let candidate = through + weight;
            if distance.get(v).is_none_or(|&best| candidate < best) {
                distance.insert(v.clone(), candidate);
                predecessor.insert(v.clone(), u.clone());
            }
        }
    }

    for (u, v, weight) in graph.weighted_edges() {
        let Some(&through) = distance.get(u) else {
            continue;
        };
        if distance.get(v).is_none_or(|&best| through + weight < best) {
            tracing::debug!(edge = ?(u, v), weight, "edge still relaxes after fixpoint rounds");
            return Err(GraphError::negative_cycle(source));
        }
    }

    Ok(ShortestPaths::from_single_source(
        source,
        distance,
        predecessor,
    ))
}
