//! Error types for graph operations
//!
//! All failures are surfaced immediately at the point of violation; no
//! retries, no partial results. "No path found" is not an error: it is
//! an absent map entry / `None` from path reconstruction.

use std::fmt;

use thiserror::Error;

use crate::graph::GraphKind;

/// Errors that can occur during graph mutation, queries, and algorithms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("node not in graph: {node}")]
    NodeNotFound { node: String },

    #[error("edge not in graph: ({from}, {to})")]
    EdgeNotFound { from: String, to: String },

    #[error("invalid edge weight: {weight}")]
    InvalidWeight { weight: f64 },

    #[error("graph direction mismatch: expected {expected}")]
    DirectionMismatch { expected: GraphKind },

    #[error("conflicting weights for undirected edge ({from}, {to}): {forward} vs {reverse}")]
    ConflictingWeights {
        from: String,
        to: String,
        forward: f64,
        reverse: f64,
    },

    #[error("graph contains a negative cycle reachable from {node}")]
    NegativeCycle { node: String },

    #[error("graph is empty")]
    EmptyGraph,
}

impl GraphError {
    /// Create a `NodeNotFound` error for a node rendered via `Debug`
    pub fn node_not_found<N: fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound {
            node: format!("{node:?}"),
        }
    }

    /// Create an `EdgeNotFound` error for an endpoint pair
    pub fn edge_not_found<N: fmt::Debug>(from: &N, to: &N) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Create an `InvalidWeight` error
    pub fn invalid_weight(weight: f64) -> Self {
        GraphError::InvalidWeight { weight }
    }

    /// Create a `DirectionMismatch` error naming the required kind
    pub fn direction_mismatch(expected: GraphKind) -> Self {
        GraphError::DirectionMismatch { expected }
    }

    /// Create a `ConflictingWeights` error for an asymmetric logical edge
    pub fn conflicting_weights<N: fmt::Debug>(
        from: &N,
        to: &N,
        forward: f64,
        reverse: f64,
    ) -> Self {
        GraphError::ConflictingWeights {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            forward,
            reverse,
        }
    }

    /// Create a `NegativeCycle` error for a source node
    pub fn negative_cycle<N: fmt::Debug>(source: &N) -> Self {
        GraphError::NegativeCycle {
            node: format!("{source:?}"),
        }
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_renders_debug() {
        let err = GraphError::node_not_found(&"a");
        assert_eq!(err.to_string(), "node not in graph: \"a\"");
    }

    #[test]
    fn test_direction_mismatch_message() {
        let err = GraphError::direction_mismatch(GraphKind::Directed);
        assert_eq!(
            err.to_string(),
            "graph direction mismatch: expected directed"
        );
    }

    #[test]
    fn test_edge_not_found_message() {
        let err = GraphError::edge_not_found(&1, &2);
        assert_eq!(err.to_string(), "edge not in graph: (1, 2)");
    }

    #[test]
    fn test_negative_cycle_has_no_underlying_cause() {
        use std::error::Error;
        let err = GraphError::negative_cycle(&"a");
        assert_eq!(
            err.to_string(),
            "graph contains a negative cycle reachable from \"a\""
        );
        // the offending node is payload, not a chained source error
        assert!(err.source().is_none());
    }
}
