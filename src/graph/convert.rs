//! Graph-to-graph conversions
//!
//! Each conversion allocates a fresh store; the input is never
//! mutated. Directionality requirements are checked up front and
//! violated with `DirectionMismatch`.

use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{GraphKind, Node, Weight, WeightConflict};

impl<N: Node> Graph<N> {
    /// Collapse a directed graph into an undirected one using the
    /// default [`WeightConflict::Min`] resolution.
    /// Fails with `DirectionMismatch` if the input is already
    /// undirected.
    pub fn to_undirected(&self) -> Result<Graph<N>> {
        self.to_undirected_with(WeightConflict::default())
    }

    /// Collapse a directed graph into an undirected one.
    ///
    /// When both `(u, v)` and `(v, u)` exist with different weights,
    /// the logical edge takes the weight chosen by `conflict`;
    /// [`WeightConflict::Reject`] fails with `ConflictingWeights`
    /// instead. Resolution is independent of edge iteration order.
    pub fn to_undirected_with(&self, conflict: WeightConflict) -> Result<Graph<N>> {
        if !self.is_directed() {
            return Err(GraphError::direction_mismatch(GraphKind::Directed));
        }
        let mut undirected = Graph::with_policy(GraphKind::Undirected, self.weight_policy());
        undirected.add_nodes_from(self.nodes().cloned());
        for (u, v, weight) in self.weighted_edges() {
            let resolved = match undirected.get_edge_weight(u, v) {
                Ok(existing) => resolve_conflict(conflict, u, v, existing, weight)?,
                Err(_) => weight,
            };
            undirected.add_edge(u.clone(), v.clone(), resolved)?;
        }
        Ok(undirected)
    }

    /// Reinterpret an undirected graph as a directed one; every
    /// logical edge becomes two directed edges. Fails with
    /// `DirectionMismatch` if the input is already directed.
    pub fn to_directed(&self) -> Result<Graph<N>> {
        if self.is_directed() {
            return Err(GraphError::direction_mismatch(GraphKind::Undirected));
        }
        let mut directed = Graph::with_policy(GraphKind::Directed, self.weight_policy());
        directed.add_nodes_from(self.nodes().cloned());
        for (u, v, weight) in self.weighted_edges() {
            directed.add_edge(u.clone(), v.clone(), weight)?;
        }
        Ok(directed)
    }

    /// Edge-reversed copy of a directed graph.
    /// Fails with `DirectionMismatch` on undirected input.
    pub fn to_reversed(&self) -> Result<Graph<N>> {
        if !self.is_directed() {
            return Err(GraphError::direction_mismatch(GraphKind::Directed));
        }
        let mut reversed = Graph::with_policy(GraphKind::Directed, self.weight_policy());
        reversed.add_nodes_from(self.nodes().cloned());
        for (u, v, weight) in self.weighted_edges() {
            reversed.add_edge(v.clone(), u.clone(), weight)?;
        }
        Ok(reversed)
    }
}

fn resolve_conflict<N: Node>(
    conflict: WeightConflict,
    u: &N,
    v: &N,
    existing: Weight,
    incoming: Weight,
) -> Result<Weight> {
    if existing == incoming {
        return Ok(existing);
    }
    match conflict {
        WeightConflict::Reject => Err(GraphError::conflicting_weights(u, v, existing, incoming)),
        WeightConflict::Min => Ok(existing.min(incoming)),
        WeightConflict::Max => Ok(existing.max(incoming)),
    }
}
