//! Errors raised by the graph store and the path cost evaluator.

use thiserror::Error;

use crate::NodeId;

/// Errors returned by [`Digraph`](crate::Digraph) mutations and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A node with this identifier is already registered.
    #[error("duplicate node {id}")]
    DuplicateNode {
        /// Identifier supplied twice.
        id: NodeId,
    },
    /// The identifier does not name a registered node.
    #[error("node {id} is not in the graph")]
    UnknownNode {
        /// Identifier that failed to resolve.
        id: NodeId,
    },
    /// No directed edge joins the two nodes.
    ///
    /// Both endpoints are `None` when an empty path was evaluated, since such
    /// a path has no edge to look up.
    #[error("{}", describe_missing_edge(.source_id.as_ref(), .destination.as_ref()))]
    NoSuchEdge {
        /// Tail of the missing edge.
        source_id: Option<NodeId>,
        /// Head of the missing edge.
        destination: Option<NodeId>,
    },
    /// The ordered pair already carries an edge.
    #[error("an edge from {source_id} to {destination} already exists")]
    DuplicateEdge {
        /// Tail of the rejected edge.
        source_id: NodeId,
        /// Head of the rejected edge.
        destination: NodeId,
    },
    /// Edge weights must be finite and non-negative.
    #[error("edge weights ({total_distance}, {outdoor_distance}) must be finite and non-negative")]
    InvalidWeight {
        /// Rejected total distance.
        total_distance: f64,
        /// Rejected outdoor distance.
        outdoor_distance: f64,
    },
}

impl GraphError {
    pub(crate) fn unknown(id: &str) -> Self {
        Self::UnknownNode { id: NodeId::from(id) }
    }

    pub(crate) fn no_edge(source_id: &NodeId, destination: &NodeId) -> Self {
        Self::NoSuchEdge {
            source_id: Some(source_id.clone()),
            destination: Some(destination.clone()),
        }
    }

    pub(crate) const fn empty_path() -> Self {
        Self::NoSuchEdge {
            source_id: None,
            destination: None,
        }
    }
}

fn describe_missing_edge(source_id: Option<&NodeId>, destination: Option<&NodeId>) -> String {
    match (source_id, destination) {
        (Some(from), Some(to)) => format!("no edge from {from} to {to}"),
        _ => "no edge to evaluate in an empty path".to_owned(),
    }
}
