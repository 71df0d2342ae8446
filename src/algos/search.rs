//! Breadth- and depth-first traversal
//!
//! One parameterized work loop drives both orders: candidates pop off
//! the front of a deque, and newly discovered neighbors are appended
//! to the back (breadth-first) or pushed to the front (depth-first).

use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::graph::{Graph, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Breadth,
    Depth,
}

/// Lazy visitation sequence over the nodes reachable from a source.
///
/// The sequence is finite, produced on demand, consumed at most once,
/// and not restartable; re-traversal requires a fresh [`bfs`]/[`dfs`]
/// call. The source itself is never yielded, and a node may sit in
/// the work queue several times before its first (and only) emission.
#[derive(Debug)]
pub struct Traversal<'g, N: Node> {
    graph: &'g Graph<N>,
    queue: VecDeque<N>,
    visited: HashSet<N>,
    order: Order,
}

/// Breadth-first traversal from `source`, excluding `source` itself.
/// Fails with `NodeNotFound` if `source` is absent.
pub fn bfs<'g, N: Node>(graph: &'g Graph<N>, source: &N) -> Result<Traversal<'g, N>> {
    Traversal::new(graph, source, Order::Breadth)
}

/// Depth-first traversal from `source`, excluding `source` itself.
/// Fails with `NodeNotFound` if `source` is absent.
pub fn dfs<'g, N: Node>(graph: &'g Graph<N>, source: &N) -> Result<Traversal<'g, N>> {
    Traversal::new(graph, source, Order::Depth)
}

impl<'g, N: Node> Traversal<'g, N> {
    fn new(graph: &'g Graph<N>, source: &N, order: Order) -> Result<Self> {
        let seed = graph.get_neighbors(source)?;
        let mut visited = HashSet::new();
        visited.insert(source.clone());
        Ok(Traversal {
            graph,
            queue: seed.into_iter().collect(),
            visited,
            order,
        })
    }
}

impl<N: Node> Iterator for Traversal<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        while let Some(current) = self.queue.pop_front() {
            if !self.visited.insert(current.clone()) {
                continue;
            }
            if let Some(neighbors) = self.graph.neighbors(&current) {
                for neighbor in neighbors {
                    if self.visited.contains(neighbor) {
                        continue;
                    }
                    match self.order {
                        Order::Breadth => self.queue.push_back(neighbor.clone()),
                        Order::Depth => self.queue.push_front(neighbor.clone()),
                    }
                }
            }
            return Some(current);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use crate::error::GraphError;
    use crate::graph::GraphKind;

    #[test]
    fn test_bfs_visits_exactly_the_reachable_set() {
        let graph = datasets::path_graph(GraphKind::Directed).unwrap();
        let visited: HashSet<&str> = bfs(&graph, &"a").unwrap().collect();
        let expected: HashSet<&str> = ["b", "c", "d", "e", "f"].into();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_bfs_emits_closer_nodes_first() {
        let graph = datasets::path_graph(GraphKind::Directed).unwrap();
        let order: Vec<&str> = bfs(&graph, &"a").unwrap().collect();
        let position = |n: &str| order.iter().position(|x| *x == n).unwrap();
        // one hop before two hops before three
        assert!(position("b") < position("c"));
        assert!(position("b") < position("e"));
        assert!(position("c") < position("d"));
        assert!(position("f") < position("d"));
    }

    #[test]
    fn test_dfs_visits_exactly_the_reachable_set() {
        let graph = datasets::path_graph(GraphKind::Directed).unwrap();
        let visited: HashSet<&str> = dfs(&graph, &"a").unwrap().collect();
        let expected: HashSet<&str> = ["b", "c", "d", "e", "f"].into();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_traversal_excludes_source_and_unreachable_nodes() {
        let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
        let visited: Vec<&str> = bfs(&graph, &"a").unwrap().collect();
        assert!(!visited.contains(&"a"));
        assert!(!visited.contains(&"z"));
    }

    #[test]
    fn test_traversal_from_isolated_node_is_empty() {
        let graph = datasets::weighted_path_graph(GraphKind::Directed).unwrap();
        assert_eq!(bfs(&graph, &"z").unwrap().count(), 0);
    }

    #[test]
    fn test_traversal_missing_source() {
        let graph = datasets::path_graph(GraphKind::Directed).unwrap();
        let err = dfs(&graph, &"nope").unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound { .. }));
    }

    #[test]
    fn test_self_loop_does_not_reemit_the_source() {
        let mut graph = Graph::directed();
        graph.add_edge("a", "a", 1.0).unwrap();
        graph.add_edge("a", "b", 1.0).unwrap();
        let visited: Vec<&str> = bfs(&graph, &"a").unwrap().collect();
        assert_eq!(visited, vec!["b"]);
    }

    #[test]
    fn test_undirected_traversal_reaches_both_sides() {
        let graph = datasets::path_graph(GraphKind::Undirected).unwrap();
        let visited: HashSet<&str> = bfs(&graph, &"c").unwrap().collect();
        let expected: HashSet<&str> = ["a", "b", "d", "e", "f"].into();
        assert_eq!(visited, expected);
    }
}
