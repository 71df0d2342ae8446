//! Degree centrality
//!
//! Consumers of the graph store's read surface only: `nodes`, `edges`,
//! and neighbor lookups. Normalization divides by `order - 1`, the
//! maximum possible degree; a graph too small to normalize (fewer than
//! two nodes) reports `0.0` for its lone node rather than dividing by
//! zero.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Source,
    Target,
}

/// Degree centrality of every node in an undirected graph.
/// Fails with `DirectionMismatch` on directed input.
pub fn degree_centrality<N: Node>(
    graph: &Graph<N>,
    normalize: bool,
) -> Result<HashMap<N, f64>> {
    if graph.is_directed() {
        return Err(GraphError::direction_mismatch(GraphKind::Undirected));
    }
    let denominator = normalization_denominator(graph, normalize);
    Ok(graph
        .nodes()
        .map(|node| {
            let degree = graph.neighbors(node).map_or(0, |n| n.len()) as f64;
            (node.clone(), scale(degree, denominator))
        })
        .collect())
}

/// In-degree centrality of every node in a directed graph.
/// Fails with `DirectionMismatch` on undirected input.
pub fn in_degree_centrality<N: Node>(
    graph: &Graph<N>,
    normalize: bool,
) -> Result<HashMap<N, f64>> {
    directed_degree_centrality(graph, Endpoint::Target, normalize)
}

/// Out-degree centrality of every node in a directed graph.
/// Fails with `DirectionMismatch` on undirected input.
pub fn out_degree_centrality<N: Node>(
    graph: &Graph<N>,
    normalize: bool,
) -> Result<HashMap<N, f64>> {
    directed_degree_centrality(graph, Endpoint::Source, normalize)
}

fn directed_degree_centrality<N: Node>(
    graph: &Graph<N>,
    endpoint: Endpoint,
    normalize: bool,
) -> Result<HashMap<N, f64>> {
    if !graph.is_directed() {
        return Err(GraphError::direction_mismatch(GraphKind::Directed));
    }
    let denominator = normalization_denominator(graph, normalize);
    let mut counts: HashMap<N, f64> = graph.nodes().map(|n| (n.clone(), 0.0)).collect();
    for (source, target) in graph.edges() {
        let node = match endpoint {
            Endpoint::Source => source,
            Endpoint::Target => target,
        };
        if let Some(count) = counts.get_mut(node) {
            *count += 1.0;
        }
    }
    Ok(counts
        .into_iter()
        .map(|(node, degree)| (node, scale(degree, denominator)))
        .collect())
}

fn normalization_denominator<N: Node>(graph: &Graph<N>, normalize: bool) -> f64 {
    if normalize {
        graph.order().saturating_sub(1) as f64
    } else {
        1.0
    }
}

fn scale(degree: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        degree / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;

    fn approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_degree_centrality_raw() {
        let graph = datasets::weighted_path_graph(GraphKind::Undirected).unwrap();
        let centrality = degree_centrality(&graph, false).unwrap();
        let expected = [
            ("a", 2.0),
            ("b", 3.0),
            ("c", 2.0),
            ("d", 3.0),
            ("e", 2.0),
            ("f", 2.0),
            ("g", 2.0),
            ("z", 0.0),
        ];
        assert_eq!(centrality.len(), expected.len());
        for (node, degree) in expected {
            approx(centrality[&node], degree);
        }
    }

    #[test]
    fn test_degree_centrality_normalized() {
        let graph = datasets::weighted_path_graph(GraphKind::Undirected).unwrap();
        let centrality = degree_centrality(&graph, true).unwrap();
        approx(centrality[&"b"], 3.0 / 7.0);
        approx(centrality[&"z"], 0.0);
    }

    #[test]
    fn test_degree_centrality_rejects_directed() {
        let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
        let err = degree_centrality(&graph, true).unwrap_err();
        assert_eq!(err, GraphError::direction_mismatch(GraphKind::Undirected));
    }

    #[test]
    fn test_out_degree_centrality_raw() {
        let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
        let centrality = out_degree_centrality(&graph, false).unwrap();
        let expected = [
            ("a", 2.0),
            ("b", 2.0),
            ("c", 1.0),
            ("d", 0.0),
            ("e", 1.0),
            ("f", 1.0),
            ("g", 1.0),
            ("z", 0.0),
        ];
        for (node, degree) in expected {
            approx(centrality[&node], degree);
        }
    }

    #[test]
    fn test_in_degree_centrality_normalized() {
        let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
        let centrality = in_degree_centrality(&graph, true).unwrap();
        let expected = [
            ("a", 0.0),
            ("b", 1.0 / 7.0),
            ("c", 1.0 / 7.0),
            ("d", 3.0 / 7.0),
            ("e", 1.0 / 7.0),
            ("f", 1.0 / 7.0),
            ("g", 1.0 / 7.0),
            ("z", 0.0),
        ];
        for (node, degree) in expected {
            approx(centrality[&node], degree);
        }
    }

    #[test]
    fn test_directed_centrality_rejects_undirected() {
        let graph = datasets::weighted_path_graph(GraphKind::Undirected).unwrap();
        let err = in_degree_centrality(&graph, true).unwrap_err();
        assert_eq!(err, GraphError::direction_mismatch(GraphKind::Directed));
    }

    #[test]
    fn test_single_node_graph_has_zero_centrality() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_node("a");
        let centrality = degree_centrality(&graph, true).unwrap();
        approx(centrality[&"a"], 0.0);
    }
}
