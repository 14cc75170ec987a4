//! Core domain types for the Wayfarer routing engine.
//!
//! The crate holds the directed graph store, the path cost evaluator and the
//! solver boundary shared by search implementations. Every edge carries two
//! independent distances, a total and an outdoor portion, and routes are
//! judged against inclusive caps on both.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{Budget, WeightedDigraph};
//!
//! let mut graph = WeightedDigraph::new();
//! for id in ["a", "b", "c"] {
//!     graph.add_node(id)?;
//! }
//! graph.add_weighted_edge("a", "b", 15.0, 10.0)?;
//! graph.add_weighted_edge("a", "c", 14.0, 6.0)?;
//! graph.add_weighted_edge("b", "c", 3.0, 1.0)?;
//!
//! assert!(graph.path_within_budget(&["a", "c"], &Budget::new(14.0, 6.0))?);
//! assert!(!graph.path_within_budget(&["a", "b", "c"], &Budget::new(14.0, 6.0))?);
//! # Ok::<(), wayfarer_core::GraphError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cost;
pub mod error;
pub mod graph;
pub mod node;
pub mod route;
pub mod solver;
pub mod strategy;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cost::{Budget, PathCost};
pub use error::GraphError;
pub use graph::{Digraph, Edge, EdgeWeights, NodeIndex, OutEdge, WeightedDigraph};
pub use node::NodeId;
pub use route::{Route, render_path};
pub use solver::{Diagnostics, SolveError, SolveRequest, SolveResponse, Solver};
pub use strategy::SearchStrategy;
