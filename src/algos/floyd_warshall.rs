//! Floyd-Warshall all-pairs shortest paths

use std::collections::HashMap;

use crate::graph::{Graph, Node, Weight};
use crate::paths::ShortestPaths;

/// Floyd-Warshall shortest paths between every ordered node pair.
///
/// Seeds a distance table from the direct edge weights plus a zero
/// diagonal, then relaxes through every intermediary. Relaxation is
/// strict (no update on tie), so the first-found path is kept, and the
/// predecessor is propagated from the relaxing sub-path's target side.
/// The identity diagonal is stripped from both output maps.
///
/// Negative cycles are not detected; feeding a graph that contains one
/// yields meaningless distances along the affected pairs.
#[tracing::instrument(skip(graph), fields(order = graph.order(), size = graph.size()))]
pub fn floyd_warshall<N: Node>(graph: &Graph<N>) -> ShortestPaths<N> {
    let nodes: Vec<N> = graph.nodes().cloned().collect();
    let n = nodes.len();
    let index: HashMap<&N, usize> = nodes.iter().enumerate().map(|(i, node)| (node, i)).collect();

    // flat n*n tables; None = no known path
    let mut distance: Vec<Option<Weight>> = vec![None; n * n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n * n];

    for (u, v, weight) in graph.weighted_edges() {
        let (ui, vi) = (index[u], index[v]);
        distance[ui * n + vi] = Some(weight);
        predecessor[ui * n + vi] = Some(ui);
    }
    for i in 0..n {
        distance[i * n + i] = Some(0.0);
        predecessor[i * n + i] = Some(i);
    }

    for k in 0..n {
        for i in 0..n {
            let Some(head) = distance[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(tail) = distance[k * n + j] else {
                    continue;
                };
                let through = head + tail;
                if distance[i * n + j].is_none_or(|direct| through < direct) {
                    distance[i * n + j] = Some(through);
                    predecessor[i * n + j] = predecessor[k * n + j];
                }
            }
        }
    }

    let mut distances = HashMap::new();
    let mut predecessors = HashMap::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if let Some(d) = distance[i * n + j] {
                distances.insert((nodes[i].clone(), nodes[j].clone()), d);
            }
            if let Some(p) = predecessor[i * n + j] {
                predecessors.insert((nodes[i].clone(), nodes[j].clone()), nodes[p].clone());
            }
        }
    }
    ShortestPaths::from_parts(distances, predecessors)
}

#[cfg(test)]
mod tests;
