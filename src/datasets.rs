//! Synthetic graphs used by the test suite and handy for examples

use crate::error::Result;
use crate::graph::{Graph, GraphKind};

/// Empty graph of the requested kind
pub fn empty_graph(kind: GraphKind) -> Graph<&'static str> {
    Graph::new(kind)
}

/// Two unweighted components:
///
/// ```text
///      e
///     /
/// a---b---c---d
///  \       \
///   \_______f
///
/// g---h---i---j
/// ```
pub fn path_graph(kind: GraphKind) -> Result<Graph<&'static str>> {
    Graph::from_parts(
        kind,
        [],
        [
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("b", "e"),
            ("c", "f"),
            ("a", "f"),
            ("g", "h"),
            ("h", "i"),
            ("i", "j"),
        ],
    )
}

/// Weighted graph with a tempting expensive shortcut and an isolated
/// node `z`. The cheapest route from `a` to `d` is `a b e f g d` at
/// total cost 5.
///
/// ```text
///   _________
///  /         \
/// a---b---c---d   z
///     \       |
///      e      |
///       \__f__g
/// ```
pub fn weighted_path_graph(kind: GraphKind) -> Result<Graph<&'static str>> {
    Graph::from_parts(
        kind,
        ["z"],
        [
            ("a", "b", 1.0),
            ("b", "c", 10.0),
            ("c", "d", 10.0),
            ("b", "e", 1.0),
            ("e", "f", 1.0),
            ("f", "g", 1.0),
            ("g", "d", 1.0),
            ("a", "d", 100.0),
        ],
    )
}

/// Directed graph whose strongly connected components are
/// `{a, b}`, `{c}`, `{d, e}`, and `{f, g, h, i}`.
///
/// ```text
///                         _____
///                         |   |
///   a<--->b<----f<----g<->i----
///   |     ^     |  \  ^  /
///   |     |     |   \ | /
///   v     |     v    \|/
///   c---->d<--->e<----h
/// ```
pub fn scc_graph() -> Result<Graph<&'static str>> {
    Graph::from_parts(
        GraphKind::Directed,
        [],
        [
            ("a", "b"),
            ("b", "a"),
            ("a", "c"),
            ("c", "d"),
            ("d", "e"),
            ("e", "d"),
            ("f", "b"),
            ("f", "e"),
            ("f", "h"),
            ("g", "f"),
            ("g", "i"),
            ("h", "e"),
            ("h", "g"),
            ("i", "g"),
            ("i", "h"),
            ("i", "i"),
        ],
    )
}
