//! Connectivity predicates and connected components
//!
//! All built on the BFS traversal engine plus the graph conversions.

use std::collections::HashSet;

use crate::algos::bfs;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Node};

/// Whether an undirected graph is connected.
/// Fails with `DirectionMismatch` on directed input and `EmptyGraph`
/// on a graph with no nodes.
pub fn is_connected<N: Node>(graph: &Graph<N>) -> Result<bool> {
    if graph.is_directed() {
        return Err(GraphError::direction_mismatch(GraphKind::Undirected));
    }
    let Some(source) = graph.nodes().next() else {
        return Err(GraphError::EmptyGraph);
    };
    Ok(reach_count(graph, source)? == graph.order())
}

/// Whether a directed graph is weakly connected, i.e. connected once
/// edge directions are ignored.
/// Fails with `DirectionMismatch` on undirected input.
pub fn is_weakly_connected<N: Node>(graph: &Graph<N>) -> Result<bool> {
    if !graph.is_directed() {
        return Err(GraphError::direction_mismatch(GraphKind::Directed));
    }
    is_connected(&graph.to_undirected()?)
}

/// Whether a directed graph is strongly connected: every node reaches
/// every other. Fails with `DirectionMismatch` on undirected input.
pub fn is_strongly_connected<N: Node>(graph: &Graph<N>) -> Result<bool> {
    if !graph.is_directed() {
        return Err(GraphError::direction_mismatch(GraphKind::Directed));
    }
    let order = graph.order();
    for node in graph.nodes() {
        if reach_count(graph, node)? != order {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Connected components of an undirected graph. A directed argument
/// is coerced to undirected first, yielding its weakly connected
/// components.
pub fn connected_components<N: Node>(graph: &Graph<N>) -> Result<Vec<HashSet<N>>> {
    let coerced;
    let graph = if graph.is_directed() {
        tracing::warn!("directed input: computing weakly connected components");
        coerced = graph.to_undirected()?;
        &coerced
    } else {
        graph
    };

    let mut remaining = graph.node_set();
    let mut components = Vec::new();
    while let Some(node) = remaining.iter().next().cloned() {
        let mut component: HashSet<N> = bfs(graph, &node)?.collect();
        component.insert(node);
        for member in &component {
            remaining.remove(member);
        }
        components.push(component);
    }
    Ok(components)
}

fn reach_count<N: Node>(graph: &Graph<N>, source: &N) -> Result<usize> {
    let mut reached: HashSet<N> = bfs(graph, source)?.collect();
    reached.insert(source.clone());
    Ok(reached.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;

    #[test]
    fn test_is_connected() {
        let disconnected = datasets::weighted_path_graph(GraphKind::Undirected).unwrap();
        assert!(!is_connected(&disconnected).unwrap());

        let connected = datasets::scc_graph().unwrap().to_undirected().unwrap();
        assert!(is_connected(&connected).unwrap());
    }

    #[test]
    fn test_is_connected_errors() {
        let directed = datasets::scc_graph().unwrap();
        assert_eq!(
            is_connected(&directed).unwrap_err(),
            GraphError::direction_mismatch(GraphKind::Undirected)
        );
        let empty: Graph<&str> = Graph::undirected();
        assert_eq!(is_connected(&empty).unwrap_err(), GraphError::EmptyGraph);
    }

    #[test]
    fn test_is_weakly_connected() {
        let graph = datasets::scc_graph().unwrap();
        assert!(is_weakly_connected(&graph).unwrap());

        let split = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
        assert!(!is_weakly_connected(&split).unwrap());
    }

    #[test]
    fn test_is_strongly_connected() {
        let graph = datasets::scc_graph().unwrap();
        // weakly but not strongly connected
        assert!(!is_strongly_connected(&graph).unwrap());

        let mut cycle = Graph::directed();
        cycle
            .add_edges_from([("a", "b"), ("b", "c"), ("c", "a")])
            .unwrap();
        assert!(is_strongly_connected(&cycle).unwrap());
    }

    #[test]
    fn test_direction_checks_on_directed_predicates() {
        let undirected = datasets::path_graph(GraphKind::Undirected).unwrap();
        for err in [
            is_weakly_connected(&undirected).unwrap_err(),
            is_strongly_connected(&undirected).unwrap_err(),
        ] {
            assert_eq!(err, GraphError::direction_mismatch(GraphKind::Directed));
        }
    }

    #[test]
    fn test_connected_components_undirected() {
        let graph = datasets::path_graph(GraphKind::Undirected).unwrap();
        let mut components = connected_components(&graph).unwrap();
        components.sort_by_key(|c| c.len());
        assert_eq!(components.len(), 2);
        assert_eq!(components[0], HashSet::from(["g", "h", "i", "j"]));
        assert_eq!(
            components[1],
            HashSet::from(["a", "b", "c", "d", "e", "f"])
        );
    }

    #[test]
    fn test_connected_components_coerces_directed_input() {
        let graph = datasets::scc_graph().unwrap();
        let components = connected_components(&graph).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0], graph.node_set());
    }
}
