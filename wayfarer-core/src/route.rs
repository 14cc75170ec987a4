//! Resolved routes through the graph.
//!
//! A route is an ordered node sequence plus its aggregate cost.

use std::fmt;

use crate::{NodeId, PathCost};

/// An ordered, cycle-free walk from the start node to the end node.
///
/// # Examples
/// ```
/// use wayfarer_core::{NodeId, PathCost, Route};
///
/// let route = Route::new(
///     vec![NodeId::new("a"), NodeId::new("c")],
///     PathCost { total_distance: 14.0, outdoor_distance: 6.0 },
/// );
/// assert_eq!(route.to_string(), "a->c");
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes visited in order.
    pub nodes: Vec<NodeId>,
    /// Aggregate cost of walking the route.
    pub cost: PathCost,
}

impl Route {
    /// Construct a route from its nodes and cost.
    #[must_use]
    pub const fn new(nodes: Vec<NodeId>, cost: PathCost) -> Self {
        Self { nodes, cost }
    }

    /// The zero-cost route that starts and ends at `node`.
    #[must_use]
    pub fn trivial(node: NodeId) -> Self {
        Self::new(vec![node], PathCost::ZERO)
    }

    /// Nodes visited in order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Aggregate cost of the route.
    #[must_use]
    pub const fn cost(&self) -> PathCost {
        self.cost
    }

    /// Number of nodes on the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the route has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the route, keeping only its nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_path(&self.nodes))
    }
}

/// Render a node sequence as `a->b->c`.
///
/// # Examples
/// ```
/// use wayfarer_core::{NodeId, render_path};
///
/// let path = [NodeId::new("32"), NodeId::new("36"), NodeId::new("26")];
/// assert_eq!(render_path(&path), "32->36->26");
/// ```
#[must_use]
pub fn render_path<S: AsRef<str>>(nodes: &[S]) -> String {
    nodes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("->")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_route_has_zero_cost() {
        let route = Route::trivial(NodeId::new("a"));
        assert_eq!(route.nodes(), [NodeId::new("a")]);
        assert_eq!(route.cost(), PathCost::ZERO);
        assert!(!route.is_empty());
    }

    #[test]
    fn render_path_handles_short_inputs() {
        let empty: [&str; 0] = [];
        assert_eq!(render_path(&empty), "");
        assert_eq!(render_path(&["x"]), "x");
    }
}
