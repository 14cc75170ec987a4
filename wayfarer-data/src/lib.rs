//! Map loading for the Wayfarer engine.
//!
//! Responsibilities:
//! - Parse whitespace-separated edge lists into a [`WeightedDigraph`].
//! - Report malformed input with the line it came from.
//!
//! Boundaries:
//! - Do not encode search rules (live in `wayfarer-search`).
//! - Graph invariants are enforced by `wayfarer-core`; the loader only
//!   attaches line numbers to its errors.
//!
//! [`WeightedDigraph`]: wayfarer_core::WeightedDigraph

#![forbid(unsafe_code)]

mod edge_list;

pub use edge_list::{LoadError, MapSummary, load_edge_list, parse_edge_list};
