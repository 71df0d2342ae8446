use std::fmt;
use std::hash::Hash;

use serde::Serialize;

/// Edge weights are signed; which values a store accepts is governed
/// by its [`WeightPolicy`]. NaN and infinite weights are rejected
/// under every policy, so stored weights are always finite.
pub type Weight = f64;

/// Marker for node identity types: opaque, equality-comparable,
/// hashable tokens. Blanket-implemented; callers never implement it
/// by hand.
pub trait Node: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Node for T {}

/// Storage discipline of a [`Graph`](crate::graph::Graph), fixed at
/// construction. An undirected store mirrors every mutation so both
/// directions of a logical edge are created and removed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        self == GraphKind::Directed
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// Weight validation applied at edge insertion.
///
/// `Positive` is the default for both graph kinds and is what Dijkstra
/// requires; `Signed` admits negative weights for Bellman-Ford and
/// Floyd-Warshall workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Every edge weight must be strictly positive
    #[default]
    Positive,
    /// Any finite weight is accepted
    Signed,
}

/// How [`to_undirected`](crate::graph::Graph::to_undirected_with)
/// resolves asymmetric directed weights collapsing onto one logical
/// edge. Every policy is order-independent, so conversion is
/// deterministic regardless of map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightConflict {
    /// Fail with `ConflictingWeights`
    Reject,
    /// Keep the smaller of the two weights
    #[default]
    Min,
    /// Keep the larger of the two weights
    Max,
}

/// Edge description accepted by bulk constructors and
/// [`add_edges_from`](crate::graph::Graph::add_edges_from): a
/// `(u, v)` pair at unit weight or an explicit `(u, v, w)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec<N> {
    pub from: N,
    pub to: N,
    pub weight: Weight,
}

impl<N> From<(N, N)> for EdgeSpec<N> {
    fn from((from, to): (N, N)) -> Self {
        EdgeSpec {
            from,
            to,
            weight: 1.0,
        }
    }
}

impl<N> From<(N, N, Weight)> for EdgeSpec<N> {
    fn from((from, to, weight): (N, N, Weight)) -> Self {
        EdgeSpec { from, to, weight }
    }
}
