//! `DepthFirstSolver`, the [`Solver`] implementation backed by the
//! depth-first search engine.

use std::borrow::Borrow;
use std::time::Instant;

use wayfarer_core::{Diagnostics, SolveError, SolveRequest, SolveResponse, Solver, WeightedDigraph};

use crate::engine;

/// Configuration for [`DepthFirstSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Abort with [`SolveError::StepLimitExceeded`] after entering this many
    /// nodes. `None` lets the search run to completion.
    pub max_steps: Option<u64>,
}

impl SearchConfig {
    /// Configuration with a step limit.
    #[must_use]
    pub const fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// Solver answering constrained shortest-path queries over one graph.
///
/// The solver is generic over how the graph is held: by value, by reference
/// or behind an `Arc`. Each call to [`Solver::solve`] owns its own search
/// session, so one solver may serve concurrent requests.
///
/// # Examples
/// ```
/// use wayfarer_core::{Budget, SearchStrategy, SolveRequest, Solver, WeightedDigraph};
/// use wayfarer_search::DepthFirstSolver;
///
/// let mut graph = WeightedDigraph::new();
/// for id in ["a", "b", "c"] {
///     graph.add_node(id)?;
/// }
/// graph.add_weighted_edge("a", "b", 15.0, 10.0)?;
/// graph.add_weighted_edge("a", "c", 14.0, 6.0)?;
/// graph.add_weighted_edge("b", "c", 3.0, 1.0)?;
///
/// let solver = DepthFirstSolver::new(&graph);
/// let request = SolveRequest::new("a", "c", Budget::new(100.0, 100.0))
///     .with_strategy(SearchStrategy::Exhaustive);
/// let response = solver.solve(&request)?;
/// assert_eq!(response.route.to_string(), "a->c");
/// assert_eq!(response.diagnostics.steps, 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstSolver<G> {
    graph: G,
    config: SearchConfig,
}

impl<G> DepthFirstSolver<G>
where
    G: Borrow<WeightedDigraph>,
{
    /// Construct a solver using default configuration.
    pub const fn new(graph: G) -> Self {
        Self::with_config(graph, SearchConfig { max_steps: None })
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(graph: G, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    /// The graph searched by this solver.
    pub fn graph(&self) -> &WeightedDigraph {
        self.graph.borrow()
    }

    /// Active configuration.
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<G> Solver for DepthFirstSolver<G>
where
    G: Borrow<WeightedDigraph> + Send + Sync,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let outcome = engine::search(self.graph(), request, &self.config)?;
        let diagnostics = Diagnostics {
            steps: outcome.steps,
            dead_nodes: outcome.dead_nodes,
            solve_time: started_at.elapsed(),
        };
        log::debug!(
            "{} search from {} to {} took {} steps",
            request.strategy,
            request.start,
            request.end,
            diagnostics.steps
        );
        Ok(SolveResponse {
            route: outcome.route,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests;
