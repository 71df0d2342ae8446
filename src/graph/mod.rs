//! Graph storage and structural queries
//!
//! The store holds the node set, adjacency relation, and edge-weight
//! table for a directed graph; the undirected variant is the same
//! store with a symmetry-enforcing mutation policy selected at
//! construction time.

mod convert;
mod store;
mod types;

pub use store::Graph;
pub use types::{EdgeSpec, GraphKind, Node, Weight, WeightConflict, WeightPolicy};
