//! Graph algorithms
//!
//! - BFS/DFS traversal as lazy, single-pass iterators
//! - Dijkstra single-source shortest paths (positive weights)
//! - Bellman-Ford single-source shortest paths (signed weights,
//!   negative-cycle detection)
//! - Floyd-Warshall all-pairs shortest paths
//! - Kosaraju strongly-connected-component decomposition

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kosaraju;
pub mod search;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;
pub use kosaraju::{kosaraju, SccIter};
pub use search::{bfs, dfs, Traversal};
