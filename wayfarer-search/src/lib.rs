//! Depth-first constrained shortest-path search for Wayfarer.
//!
//! This crate provides [`DepthFirstSolver`], the default implementation of the
//! [`Solver`](wayfarer_core::Solver) trait, and the free function
//! [`find_constrained_shortest_path`]. Both walk the graph depth-first from the
//! start node, never revisiting a node already on the current path, and keep
//! the cheapest route whose total and outdoor distances fit the caller's caps.
//!
//! Three strategies trade work for pruning:
//!
//! - [`SearchStrategy::Exhaustive`](wayfarer_core::SearchStrategy::Exhaustive)
//!   visits every simple path.
//! - [`SearchStrategy::Pruned`](wayfarer_core::SearchStrategy::Pruned) marks
//!   nodes that cannot reach the destination as dead and skips them.
//! - [`SearchStrategy::CostBounded`](wayfarer_core::SearchStrategy::CostBounded)
//!   also abandons branches that cannot beat the best route or break a cap.
//!
//! Every explored partial path is logged at `trace` level and every dead node
//! at `debug` level through the `log` facade.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod session;
mod solver;

pub use engine::find_constrained_shortest_path;
pub use solver::{DepthFirstSolver, SearchConfig};
