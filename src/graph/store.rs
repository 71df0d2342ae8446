use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::types::{EdgeSpec, GraphKind, Node, Weight, WeightPolicy};

/// Mutable weighted graph store.
///
/// Owns the node set, the adjacency relation (successors per node),
/// and the edge-weight table keyed by ordered `(from, to)` pairs. The
/// directed/undirected distinction is a storage policy chosen at
/// construction: an undirected store keeps two directed entries per
/// logical edge and mutates them together, atomically.
///
/// Invariants maintained by every mutation:
/// - every node referenced by the adjacency relation or the weight
///   table is present in the node set;
/// - `(u, v)` has a weight iff `v` is a successor of `u`;
/// - undirected stores hold `(u, v)` iff they hold `(v, u)`.
///
/// Note one documented surprise of the undirected policy: re-inserting
/// either direction of a logical edge silently overwrites the weight
/// stored for both.
#[derive(Debug, Clone)]
pub struct Graph<N: Node> {
    kind: GraphKind,
    policy: WeightPolicy,
    adjacency: HashMap<N, HashSet<N>>,
    weights: HashMap<(N, N), Weight>,
}

impl<N: Node> Graph<N> {
    /// Create an empty graph of the given kind with the default
    /// (strictly positive) weight policy.
    pub fn new(kind: GraphKind) -> Self {
        Self::with_policy(kind, WeightPolicy::default())
    }

    /// Create an empty graph with an explicit weight policy.
    pub fn with_policy(kind: GraphKind, policy: WeightPolicy) -> Self {
        Graph {
            kind,
            policy,
            adjacency: HashMap::new(),
            weights: HashMap::new(),
        }
    }

    /// Empty directed graph, positive weights only
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Empty undirected graph, positive weights only
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Build a graph from a node collection and an edge collection.
    /// Edges may be `(u, v)` pairs (unit weight) or `(u, v, w)`
    /// triples; endpoints not listed as nodes are created implicitly.
    pub fn from_parts<E>(
        kind: GraphKind,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        E: Into<EdgeSpec<N>>,
    {
        let mut graph = Self::new(kind);
        graph.add_nodes_from(nodes);
        graph.add_edges_from(edges)?;
        Ok(graph)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn weight_policy(&self) -> WeightPolicy {
        self.policy
    }

    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Node count
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Edge count. Undirected stores report the logical count: each
    /// mirrored entry pair is one edge, a self-loop is one edge.
    pub fn size(&self) -> usize {
        match self.kind {
            GraphKind::Directed => self.weights.len(),
            GraphKind::Undirected => {
                let loops = self.weights.keys().filter(|(u, v)| u == v).count();
                (self.weights.len() - loops) / 2 + loops
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.weights.contains_key(&(from.clone(), to.clone()))
    }

    /// Iterate over all nodes, in arbitrary order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Owned copy of the node set
    pub fn node_set(&self) -> HashSet<N> {
        self.adjacency.keys().cloned().collect()
    }

    /// Iterate over all directed edge entries. An undirected store
    /// yields both `(u, v)` and `(v, u)` for each logical edge.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.weights.keys().map(|(u, v)| (u, v))
    }

    /// Iterate over all directed edge entries with their weights
    pub fn weighted_edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> {
        self.weights.iter().map(|((u, v), w)| (u, v, *w))
    }

    /// Borrow the successor set of `node`, or `None` if absent
    pub fn neighbors(&self, node: &N) -> Option<&HashSet<N>> {
        self.adjacency.get(node)
    }

    /// Defensive copy of the successor set of `node`.
    /// Fails with `NodeNotFound` if `node` is absent.
    pub fn get_neighbors(&self, node: &N) -> Result<HashSet<N>> {
        self.adjacency
            .get(node)
            .cloned()
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// Weight of the edge `(from, to)`.
    /// Fails with `EdgeNotFound` if the edge is absent.
    pub fn get_edge_weight(&self, from: &N, to: &N) -> Result<Weight> {
        self.weights
            .get(&(from.clone(), to.clone()))
            .copied()
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// Insert `node` if absent; no-op otherwise
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    pub fn add_nodes_from(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.add_node(node);
        }
    }

    fn validate_weight(&self, weight: Weight) -> Result<()> {
        let valid = match self.policy {
            WeightPolicy::Positive => weight > 0.0 && weight.is_finite(),
            WeightPolicy::Signed => weight.is_finite(),
        };
        if valid {
            Ok(())
        } else {
            Err(GraphError::invalid_weight(weight))
        }
    }

    fn insert_directed(&mut self, from: N, to: N, weight: Weight) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        if let Some(successors) = self.adjacency.get_mut(&from) {
            successors.insert(to.clone());
        }
        self.weights.insert((from, to), weight);
    }

    /// Insert the edge `(from, to)` with the given weight, creating
    /// missing endpoints. An undirected store inserts both directions
    /// as a single logical edge. Re-inserting an existing edge
    /// overwrites its weight.
    ///
    /// Fails with `InvalidWeight` if the weight violates the store's
    /// policy (non-positive under `Positive`, non-finite under either).
    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) -> Result<()> {
        self.validate_weight(weight)?;
        if !self.is_directed() && from != to {
            self.insert_directed(to.clone(), from.clone(), weight);
        }
        self.insert_directed(from, to, weight);
        Ok(())
    }

    /// Bulk edge insertion from `(u, v)` pairs or `(u, v, w)` triples
    pub fn add_edges_from<E>(&mut self, edges: impl IntoIterator<Item = E>) -> Result<()>
    where
        E: Into<EdgeSpec<N>>,
    {
        for edge in edges {
            let EdgeSpec { from, to, weight } = edge.into();
            self.add_edge(from, to, weight)?;
        }
        Ok(())
    }

    fn delete_directed(&mut self, from: &N, to: &N) {
        self.weights.remove(&(from.clone(), to.clone()));
        if let Some(successors) = self.adjacency.get_mut(from) {
            successors.remove(to);
        }
    }

    /// Remove the edge `(from, to)`; an undirected store removes both
    /// directions. Fails with `EdgeNotFound` if the edge is absent.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Result<()> {
        if !self.contains_edge(from, to) {
            return Err(GraphError::edge_not_found(from, to));
        }
        self.delete_directed(from, to);
        if !self.is_directed() && from != to {
            self.delete_directed(to, from);
        }
        Ok(())
    }

    pub fn remove_edges_from<'a>(
        &mut self,
        edges: impl IntoIterator<Item = (&'a N, &'a N)>,
    ) -> Result<()>
    where
        N: 'a,
    {
        for (from, to) in edges {
            self.remove_edge(from, to)?;
        }
        Ok(())
    }

    /// Remove `node` and every edge incident on it, inbound as well as
    /// outbound. Fails with `NodeNotFound` if `node` is absent.
    pub fn remove_node(&mut self, node: &N) -> Result<()> {
        let outbound = self.get_neighbors(node)?;
        for successor in &outbound {
            self.remove_edge(node, successor)?;
        }
        let inbound: Vec<N> = self
            .adjacency
            .iter()
            .filter(|(_, successors)| successors.contains(node))
            .map(|(pred, _)| pred.clone())
            .collect();
        for predecessor in &inbound {
            self.remove_edge(predecessor, node)?;
        }
        self.adjacency.remove(node);
        Ok(())
    }

    pub fn remove_nodes_from<'a>(
        &mut self,
        nodes: impl IntoIterator<Item = &'a N>,
    ) -> Result<()>
    where
        N: 'a,
    {
        for node in nodes {
            self.remove_node(node)?;
        }
        Ok(())
    }

    /// Unweighted reachability from `from` to `to` by incremental
    /// frontier expansion. A path must use at least one edge, so
    /// `path_exists(u, u)` holds only via a cycle or self-loop.
    /// Fails with `NodeNotFound` if either endpoint is absent.
    pub fn path_exists(&self, from: &N, to: &N) -> Result<bool> {
        if !self.contains(from) {
            return Err(GraphError::node_not_found(from));
        }
        if !self.contains(to) {
            return Err(GraphError::node_not_found(to));
        }

        let mut visited: HashSet<&N> = HashSet::new();
        let mut frontier: HashSet<&N> = match self.neighbors(from) {
            Some(successors) => successors.iter().collect(),
            None => HashSet::new(),
        };
        while !frontier.is_empty() {
            if frontier.contains(to) {
                return Ok(true);
            }
            visited.extend(frontier.iter().copied());
            let mut next: HashSet<&N> = HashSet::new();
            for node in &frontier {
                if let Some(successors) = self.neighbors(node) {
                    next.extend(successors.iter());
                }
            }
            frontier = next.difference(&visited).copied().collect();
        }
        Ok(false)
    }
}
