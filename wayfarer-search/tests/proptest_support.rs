//! Proptest strategies and a brute-force oracle for search property tests.
//!
//! Generated graphs are small enough for the oracle to enumerate every simple
//! path. Weights are whole numbers so that path sums are exact and ties can be
//! compared with `==`.

use std::collections::HashSet;

use proptest::prelude::*;
use wayfarer_core::{Budget, NodeId, PathCost, WeightedDigraph};

/// A generated graph plus the query to run against it.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Graph under test.
    pub graph: WeightedDigraph,
    /// Label of the start node.
    pub start: String,
    /// Label of the end node.
    pub end: String,
    /// Caps applied to the query.
    pub budget: Budget,
}

fn label(position: usize) -> String {
    format!("n{position}")
}

/// Build a graph over `node_count` nodes, keeping the first edge for each
/// ordered pair.
#[must_use]
pub fn build_graph(node_count: usize, edges: &[(usize, usize, u8, u8)]) -> WeightedDigraph {
    let mut graph = WeightedDigraph::with_capacity(node_count);
    for position in 0..node_count {
        graph.ensure_node(&label(position));
    }
    let mut seen = HashSet::new();
    for &(from, to, total, outdoor) in edges {
        if !seen.insert((from, to)) {
            continue;
        }
        let added = graph.add_weighted_edge(
            &label(from),
            &label(to),
            f64::from(total),
            f64::from(outdoor),
        );
        assert!(added.is_ok(), "generated edge rejected: {added:?}");
    }
    graph
}

/// Strategy for scenarios with two to `max_nodes` nodes and integral caps.
pub fn scenario_strategy(max_nodes: usize) -> impl Strategy<Value = Scenario> {
    (2..=max_nodes).prop_flat_map(|node_count| {
        let edge = (0..node_count, 0..node_count, 0_u8..10, 0_u8..10);
        (
            proptest::collection::vec(edge, 0..=node_count * 3),
            0..node_count,
            0..node_count,
            0_u8..40,
            0_u8..20,
        )
            .prop_map(move |(edges, start, end, max_total, max_outdoor)| Scenario {
                graph: build_graph(node_count, &edges),
                start: label(start),
                end: label(end),
                budget: Budget::new(f64::from(max_total), f64::from(max_outdoor)),
            })
    })
}

/// First admissible simple path with the minimal total distance, found by
/// enumerating every simple path in edge insertion order.
#[must_use]
pub fn oracle(scenario: &Scenario) -> Option<(Vec<NodeId>, PathCost)> {
    let graph = &scenario.graph;
    let mut best: Option<(Vec<NodeId>, PathCost)> = None;
    for path in simple_paths(graph, &scenario.start, &scenario.end) {
        let Ok(cost) = graph.path_cost(&path) else {
            continue;
        };
        if !scenario.budget.admits(&cost) {
            continue;
        }
        let improves = best
            .as_ref()
            .is_none_or(|(_, current)| cost.total_distance < current.total_distance);
        if improves {
            best = Some((path, cost));
        }
    }
    best
}

/// Every simple path from `start` to `end`, in depth-first insertion order.
fn simple_paths(graph: &WeightedDigraph, start: &str, end: &str) -> Vec<Vec<NodeId>> {
    let mut found = Vec::new();
    let Ok(first) = graph.node(start) else {
        return found;
    };
    let mut path = vec![first.clone()];
    extend_paths(graph, end, &mut path, &mut found);
    found
}

fn extend_paths(
    graph: &WeightedDigraph,
    end: &str,
    path: &mut Vec<NodeId>,
    found: &mut Vec<Vec<NodeId>>,
) {
    let Some(last) = path.last().cloned() else {
        return;
    };
    if last == end {
        found.push(path.clone());
        return;
    }
    let children = graph.children_of(last.as_str()).unwrap_or_default();
    for child in children {
        if path.contains(child) {
            continue;
        }
        path.push(child.clone());
        extend_paths(graph, end, path, found);
        path.pop();
    }
}
