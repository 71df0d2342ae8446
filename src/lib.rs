//! Trellis
//!
//! A small graph-theory toolkit: a mutable directed/undirected weighted
//! graph store plus classical algorithms operating on it.
//!
//! - Graph storage with structural queries and conversions ([`graph`])
//! - BFS/DFS traversal as lazy iterators ([`algos::search`])
//! - Dijkstra, Bellman-Ford, and Floyd-Warshall shortest paths ([`algos`])
//! - Engine-agnostic path reconstruction ([`paths`])
//! - Kosaraju strongly-connected-component decomposition ([`algos::kosaraju`])
//! - Degree centrality and connectivity helpers ([`centrality`], [`connectivity`])
//!
//! The library is single-threaded and synchronous: every algorithm
//! takes a graph by reference and returns freshly allocated output.
//! Nothing is cached; mutating a graph invalidates any previously
//! computed result.

pub mod algos;
pub mod centrality;
pub mod connectivity;
pub mod datasets;
pub mod error;
pub mod graph;
pub mod paths;

pub use algos::{bellman_ford, bfs, dfs, dijkstra, floyd_warshall, kosaraju, SccIter, Traversal};
pub use error::{GraphError, Result};
pub use graph::{EdgeSpec, Graph, GraphKind, Node, Weight, WeightConflict, WeightPolicy};
pub use paths::{
    all_shortest_paths, shortest_path, single_source_shortest_paths, Path, ShortestPaths,
};
