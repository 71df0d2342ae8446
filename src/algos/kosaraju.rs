//! Kosaraju strongly-connected-component decomposition

use std::collections::HashSet;

use crate::algos::search::dfs;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Node};

/// Lazy partition of a directed graph's nodes into strongly connected
/// components.
///
/// Each call to `next` pops an arbitrary unprocessed node, intersects
/// its forward-reachable set (original graph) with its
/// reverse-reachable set (edge-reversed graph), and yields that
/// intersection as one SCC. The partition is exhaustive and
/// non-overlapping; singleton components are yielded for nodes on no
/// cycle. Emission order is arbitrary.
#[derive(Debug)]
pub struct SccIter<'g, N: Node> {
    graph: &'g Graph<N>,
    reversed: Graph<N>,
    remaining: HashSet<N>,
}

/// Kosaraju's algorithm over a directed graph.
/// Fails with `DirectionMismatch` on undirected input.
#[tracing::instrument(skip(graph), fields(order = graph.order(), size = graph.size()))]
pub fn kosaraju<N: Node>(graph: &Graph<N>) -> Result<SccIter<'_, N>> {
    if !graph.is_directed() {
        return Err(GraphError::direction_mismatch(GraphKind::Directed));
    }
    Ok(SccIter {
        graph,
        reversed: graph.to_reversed()?,
        remaining: graph.node_set(),
    })
}

impl<N: Node> Iterator for SccIter<'_, N> {
    type Item = HashSet<N>;

    fn next(&mut self) -> Option<HashSet<N>> {
        let node = self.remaining.iter().next().cloned()?;

        // both traversals start from a node of the graph's own node
        // set, which the reversal preserves, so neither can fail
        let mut forward: HashSet<N> = dfs(self.graph, &node).ok()?.collect();
        forward.insert(node.clone());
        let mut backward: HashSet<N> = dfs(&self.reversed, &node).ok()?.collect();
        backward.insert(node.clone());

        let component: HashSet<N> = forward.intersection(&backward).cloned().collect();
        for member in &component {
            self.remaining.remove(member);
        }
        Some(component)
    }
}
