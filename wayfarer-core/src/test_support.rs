//! Small fixture graphs shared by unit, behaviour and property tests.
//!
//! Every builder panics on failure; fixtures are static and a failure means
//! the fixture itself is broken.

use crate::WeightedDigraph;

/// Build a graph from `(source, destination, total, outdoor)` records,
/// registering nodes on first mention.
///
/// # Panics
///
/// Panics if a record repeats an ordered pair or carries invalid weights.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture graphs are static and must be well formed"
)]
pub fn graph_from_edges(edges: &[(&str, &str, f64, f64)]) -> WeightedDigraph {
    let mut graph = WeightedDigraph::new();
    for &(source, destination, total, outdoor) in edges {
        graph.ensure_node(source);
        graph.ensure_node(destination);
        graph
            .add_weighted_edge(source, destination, total, outdoor)
            .expect("fixture edges must be unique and valid");
    }
    graph
}

/// Three nodes where the direct edge `a -> c` (14, 6) beats `a -> b -> c`
/// (18, 11).
#[must_use]
pub fn campus_triangle() -> WeightedDigraph {
    graph_from_edges(&[
        ("a", "b", 15.0, 10.0),
        ("a", "c", 14.0, 6.0),
        ("b", "c", 3.0, 1.0),
    ])
}

/// Five-node indoor chain `1 -> 2 -> 3 -> 4 -> 5` (each edge 5, 0) with a
/// shortcut `2 -> 4` of total 6 and the given outdoor distance.
///
/// The shortcut route totals 16; the chain totals 20 with no outdoor walking.
#[must_use]
pub fn shortcut_chain(shortcut_outdoor: f64) -> WeightedDigraph {
    graph_from_edges(&[
        ("1", "2", 5.0, 0.0),
        ("2", "3", 5.0, 0.0),
        ("2", "4", 6.0, shortcut_outdoor),
        ("3", "4", 5.0, 0.0),
        ("4", "5", 5.0, 0.0),
    ])
}

/// Fork from `s` where the first branch runs into dead ends (`d1`, `d2`,
/// `d3`) and the second reaches `t` through `m`.
#[must_use]
pub fn dead_end_fork() -> WeightedDigraph {
    graph_from_edges(&[
        ("s", "d1", 1.0, 0.0),
        ("d1", "d2", 1.0, 0.0),
        ("d1", "d3", 1.0, 0.0),
        ("s", "m", 2.0, 1.0),
        ("m", "t", 2.0, 1.0),
        ("m", "d2", 1.0, 0.0),
    ])
}

/// Two equal-cost routes from `a` to `d`, via `b` (inserted first) and `c`.
#[must_use]
pub fn tied_diamond() -> WeightedDigraph {
    graph_from_edges(&[
        ("a", "b", 1.0, 0.0),
        ("a", "c", 1.0, 0.0),
        ("b", "d", 1.0, 0.0),
        ("c", "d", 1.0, 0.0),
    ])
}
