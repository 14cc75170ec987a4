//! Facade crate for the Wayfarer routing engine.
//!
//! This crate re-exports the core graph and request types and exposes the
//! depth-first search engine and the edge-list loader behind feature flags.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Budget, Diagnostics, Digraph, Edge, EdgeWeights, GraphError, NodeId, PathCost, Route,
    SearchStrategy, SolveError, SolveRequest, SolveResponse, Solver, WeightedDigraph,
};

#[cfg(feature = "search")]
pub use wayfarer_search::{DepthFirstSolver, SearchConfig, find_constrained_shortest_path};

#[cfg(feature = "loader")]
pub use wayfarer_data::{LoadError, MapSummary, load_edge_list, parse_edge_list};
