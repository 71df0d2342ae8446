//! Shortest-path result maps and path reconstruction
//!
//! Every shortest-path engine returns a [`ShortestPaths`] value: a
//! distance map and a predecessor map keyed by `(source, target)`
//! pairs. Reconstruction walks a predecessor chain backward and
//! behaves identically whichever engine produced the maps.

use std::collections::HashMap;

use serde::Serialize;

use crate::algos::{dijkstra, floyd_warshall};
use crate::error::Result;
use crate::graph::{Graph, Node, Weight};

/// A materialized shortest path: the node sequence from source to
/// target (inclusive at both ends) and its total edge-weight cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N: Node> {
    pub nodes: Vec<N>,
    pub distance: Weight,
}

/// Distance and predecessor maps produced by a shortest-path engine.
///
/// Entries exist only for pairs with a finite, non-zero-hop path: the
/// implicit zero-distance self pair is never materialized, and
/// unreachable pairs are absent rather than carrying an infinity
/// sentinel. "Is `v` reachable from `u`" is therefore a presence
/// check, never an arithmetic comparison.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N: Node> {
    distances: HashMap<(N, N), Weight>,
    predecessors: HashMap<(N, N), N>,
}

impl<N: Node> ShortestPaths<N> {
    pub(crate) fn from_parts(
        distances: HashMap<(N, N), Weight>,
        predecessors: HashMap<(N, N), N>,
    ) -> Self {
        ShortestPaths {
            distances,
            predecessors,
        }
    }

    /// Re-key single-source engine state by `(source, target)` pairs,
    /// dropping the self pair.
    pub(crate) fn from_single_source(
        source: &N,
        distance: HashMap<N, Weight>,
        predecessor: HashMap<N, N>,
    ) -> Self {
        let distances = distance
            .into_iter()
            .filter(|(target, _)| target != source)
            .map(|(target, d)| ((source.clone(), target), d))
            .collect();
        let predecessors = predecessor
            .into_iter()
            .map(|(target, prev)| ((source.clone(), target), prev))
            .collect();
        ShortestPaths {
            distances,
            predecessors,
        }
    }

    /// Total cost of the discovered path from `u` to `v`, or `None`
    /// if no path was found (or `u == v`)
    pub fn distance(&self, u: &N, v: &N) -> Option<Weight> {
        self.distances.get(&(u.clone(), v.clone())).copied()
    }

    pub fn distances(&self) -> &HashMap<(N, N), Weight> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<(N, N), N> {
        &self.predecessors
    }

    /// Reconstruct the concrete node sequence from `u` to `v` by
    /// walking the predecessor chain backward from `v`. Returns
    /// `None` when the pair is absent from the predecessor map, i.e.
    /// no path was found.
    pub fn path(&self, u: &N, v: &N) -> Option<Path<N>> {
        if !self.predecessors.contains_key(&(u.clone(), v.clone())) {
            return None;
        }
        let distance = self.distance(u, v)?;

        let mut nodes = vec![v.clone()];
        let mut current = v.clone();
        while current != *u {
            current = self.predecessors.get(&(u.clone(), current))?.clone();
            nodes.push(current.clone());
        }
        nodes.reverse();
        Some(Path { nodes, distance })
    }

    fn materialize(&self) -> HashMap<(N, N), Path<N>> {
        self.distances
            .keys()
            .filter_map(|(u, v)| self.path(u, v).map(|p| ((u.clone(), v.clone()), p)))
            .collect()
    }
}

/// Shortest path between one pair of nodes, via Dijkstra from `u`.
/// `Ok(None)` means `v` is unreachable from `u`.
pub fn shortest_path<N: Node>(graph: &Graph<N>, u: &N, v: &N) -> Result<Option<Path<N>>> {
    let tree = dijkstra(graph, u)?;
    Ok(tree.path(u, v))
}

/// Shortest paths from `u` to every reachable target, via Dijkstra
pub fn single_source_shortest_paths<N: Node>(
    graph: &Graph<N>,
    u: &N,
) -> Result<HashMap<(N, N), Path<N>>> {
    Ok(dijkstra(graph, u)?.materialize())
}

/// Shortest paths between every reachable ordered pair, via
/// Floyd-Warshall
pub fn all_shortest_paths<N: Node>(graph: &Graph<N>) -> HashMap<(N, N), Path<N>> {
    floyd_warshall(graph).materialize()
}
