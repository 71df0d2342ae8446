use super::*;
use crate::algos::dijkstra;
use crate::datasets;
use crate::graph::GraphKind;

#[test]
fn test_floyd_warshall_weighted_path_graph() {
    for kind in [GraphKind::Directed, GraphKind::Undirected] {
        let graph = datasets::weighted_path_graph(kind).unwrap();
        let paths = floyd_warshall(&graph);
        let path = paths.path(&"a", &"d").unwrap();
        assert_eq!(path.nodes, vec!["a", "b", "e", "f", "g", "d"]);
        assert_eq!(path.distance, 5.0);
    }
}

#[test]
fn test_floyd_warshall_covers_all_ordered_pairs() {
    let graph = datasets::weighted_path_graph(GraphKind::Undirected).unwrap();
    let paths = floyd_warshall(&graph);
    // 7 connected nodes (a through g), every ordered non-self pair,
    // z isolated
    assert_eq!(paths.distances().len(), 7 * 6);
    assert_eq!(paths.distance(&"d", &"a"), Some(5.0));
    assert_eq!(paths.distance(&"g", &"b"), Some(3.0));
}

#[test]
fn test_floyd_warshall_strips_diagonal_and_unreachable_pairs() {
    let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
    let paths = floyd_warshall(&graph);
    assert!(paths.distance(&"a", &"a").is_none());
    assert!(paths.distance(&"a", &"z").is_none());
    assert!(paths.distance(&"z", &"a").is_none());
    assert!(!paths.predecessors().keys().any(|(u, v)| u == v));
}

#[test]
fn test_floyd_warshall_agrees_with_dijkstra_per_source() {
    let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
    let all = floyd_warshall(&graph);
    for source in ["a", "b", "c", "d", "e", "f", "g", "z"] {
        let single = dijkstra(&graph, &source).unwrap();
        for ((u, v), d) in single.distances() {
            assert_eq!(all.distance(u, v), Some(*d), "pair ({u}, {v})");
        }
    }
}

#[test]
fn test_floyd_warshall_keeps_first_found_path_on_tie() {
    let mut graph = Graph::directed();
    // two equal-cost a->c routes; the direct seed must survive
    graph
        .add_edges_from([("a", "c", 2.0), ("a", "b", 1.0), ("b", "c", 1.0)])
        .unwrap();
    let paths = floyd_warshall(&graph);
    assert_eq!(paths.distance(&"a", &"c"), Some(2.0));
    assert_eq!(paths.path(&"a", &"c").unwrap().nodes, vec!["a", "c"]);
}

#[test]
fn test_floyd_warshall_empty_graph() {
    let graph: Graph<&str> = Graph::directed();
    let paths = floyd_warshall(&graph);
    assert!(paths.distances().is_empty());
    assert!(paths.predecessors().is_empty());
}

#[test]
fn test_floyd_warshall_self_loop_never_beats_zero_diagonal() {
    let mut graph = Graph::directed();
    graph.add_edge("a", "a", 2.0).unwrap();
    graph.add_edge("a", "b", 1.0).unwrap();
    let paths = floyd_warshall(&graph);
    assert!(paths.distance(&"a", &"a").is_none());
    assert_eq!(paths.distance(&"a", &"b"), Some(1.0));
}
