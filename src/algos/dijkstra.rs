//! Dijkstra single-source shortest paths

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node, Weight, WeightPolicy};
use crate::paths::ShortestPaths;

/// Wrapper for `BinaryHeap` to use as a min-heap ordered by
/// accumulated distance
#[derive(Debug, Clone)]
struct HeapEntry<N> {
    node: N,
    distance: Weight,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Dijkstra's label-setting shortest paths from `source`.
///
/// Requires strictly positive edge weights. Graphs built with the
/// default [`WeightPolicy::Positive`] are validated at insertion and
/// skip the check; a signed-policy graph is scanned up front and
/// rejected with `InvalidWeight` if any edge is non-positive, rather
/// than silently miscomputing.
///
/// Ties between equal-distance candidates are broken arbitrarily.
/// The returned maps cover `(source, target)` pairs with a finite
/// distance and a non-source target.
///
/// Fails with `NodeNotFound` if `source` is absent.
#[tracing::instrument(skip(graph), fields(order = graph.order(), size = graph.size()))]
pub fn dijkstra<N: Node>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    if !graph.contains(source) {
        return Err(GraphError::node_not_found(source));
    }
    if graph.weight_policy() == WeightPolicy::Signed {
        if let Some((_, _, weight)) = graph.weighted_edges().find(|(_, _, w)| *w <= 0.0) {
            return Err(GraphError::invalid_weight(weight));
        }
    }

    // absence from `distance` stands for "unreachable so far"
    let mut distance: HashMap<N, Weight> = HashMap::new();
    let mut predecessor: HashMap<N, N> = HashMap::new();
    let mut visited: HashSet<N> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<N>>> = BinaryHeap::new();

    distance.insert(source.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        node: source.clone(),
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry {
        node: current,
        distance: accumulated,
    })) = heap.pop()
    {
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(neighbors) = graph.neighbors(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let weight = graph.get_edge_weight(&current, neighbor)?;
            let candidate = accumulated + weight;
            if distance.get(neighbor).is_none_or(|&best| candidate < best) {
                distance.insert(neighbor.clone(), candidate);
                predecessor.insert(neighbor.clone(), current.clone());
                heap.push(Reverse(HeapEntry {
                    node: neighbor.clone(),
                    distance: candidate,
                }));
            }
        }
    }

    Ok(ShortestPaths::from_single_source(
        source,
        distance,
        predecessor,
    ))
}
