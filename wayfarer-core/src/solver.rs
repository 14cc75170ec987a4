//! Request, response and error types for route solvers.

use std::time::Duration;

use thiserror::Error;

use crate::{Budget, NodeId, Route, SearchStrategy};

/// Parameters for a constrained shortest-path query.
///
/// # Examples
/// ```rust
/// use wayfarer_core::{Budget, SearchStrategy, SolveRequest};
///
/// let request = SolveRequest::new("32", "56", Budget::new(100.0, 0.0))
///     .with_strategy(SearchStrategy::Pruned);
/// assert_eq!(request.start.as_str(), "32");
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Node the route leaves from.
    pub start: NodeId,
    /// Node the route arrives at.
    pub end: NodeId,
    /// Caps on total and outdoor distance.
    pub budget: Budget,
    /// Traversal strategy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: SearchStrategy,
}

impl SolveRequest {
    /// Construct a request using the default strategy.
    pub fn new(start: impl Into<NodeId>, end: impl Into<NodeId>, budget: Budget) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            budget,
            strategy: SearchStrategy::default(),
        }
    }

    /// Replace the traversal strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the parameters that do not depend on a graph.
    ///
    /// Caps must be non-negative and not NaN; infinity is accepted.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.budget.is_valid() {
            Ok(())
        } else {
            Err(SolveError::InvalidBudget {
                max_total_distance: self.budget.max_total_distance,
                max_outdoor_distance: self.budget.max_outdoor_distance,
            })
        }
    }
}

/// Counters describing how much work a search performed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Nodes entered, counting repeat visits through different prefixes.
    pub steps: u64,
    /// Nodes proven unable to reach the destination, in marking order.
    pub dead_nodes: Vec<NodeId>,
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// The cheapest admissible route.
    pub route: Route,
    /// Work performed by the search.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The start or end node is not in the graph.
    #[error("node {id} is not in the graph")]
    UnknownNode {
        /// Identifier that failed to resolve.
        id: NodeId,
    },
    /// A budget cap was negative or NaN.
    #[error("budget caps ({max_total_distance}, {max_outdoor_distance}) must be non-negative")]
    InvalidBudget {
        /// Requested total distance cap.
        max_total_distance: f64,
        /// Requested outdoor distance cap.
        max_outdoor_distance: f64,
    },
    /// No simple path between the endpoints satisfies both caps.
    #[error("no path from {start} to {end} satisfies the constraints")]
    NoPath {
        /// Requested start node.
        start: NodeId,
        /// Requested end node.
        end: NodeId,
    },
    /// The search entered more nodes than the configured limit.
    #[error("search exceeded the limit of {limit} steps")]
    StepLimitExceeded {
        /// Configured maximum number of steps.
        limit: u64,
    },
}

/// Find a route satisfying the caller's endpoints and caps.
///
/// Implementations should return [`SolveError::InvalidBudget`] or
/// [`SolveError::UnknownNode`] for invalid requests rather than panicking.
/// Solvers must be `Send + Sync` so one graph can serve concurrent requests.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a route or an error.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct TrivialSolver;

    impl Solver for TrivialSolver {
        fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
            request.validate()?;
            if request.start == request.end {
                Ok(SolveResponse {
                    route: Route::trivial(request.start.clone()),
                    diagnostics: Diagnostics::default(),
                })
            } else {
                Err(SolveError::NoPath {
                    start: request.start.clone(),
                    end: request.end.clone(),
                })
            }
        }
    }

    #[rstest]
    #[case(Budget::new(-1.0, 1.0))]
    #[case(Budget::new(1.0, f64::NAN))]
    fn invalid_budget_is_rejected(#[case] budget: Budget) {
        let request = SolveRequest::new("a", "a", budget);
        let err = TrivialSolver.solve(&request).expect_err("invalid budget");
        assert!(matches!(err, SolveError::InvalidBudget { .. }));
    }

    #[rstest]
    fn solver_trait_returns_route() {
        let request = SolveRequest::new("a", "a", Budget::new(0.0, 0.0));
        let response = TrivialSolver.solve(&request).expect("trivial route");
        assert_eq!(response.route.nodes(), [NodeId::new("a")]);
    }

    #[rstest]
    fn no_path_names_both_endpoints() {
        let request = SolveRequest::new("a", "b", Budget::unbounded());
        let err = TrivialSolver.solve(&request).expect_err("no path");
        assert_eq!(err.to_string(), "no path from a to b satisfies the constraints");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn request_strategy_defaults_when_omitted() {
        let raw = r#"{"start":"1","end":"5","budget":{"max_total_distance":20.0,"max_outdoor_distance":0.0}}"#;
        let request: SolveRequest = serde_json::from_str(raw).expect("valid request JSON");
        assert_eq!(request.strategy, SearchStrategy::CostBounded);
        assert_eq!(request.end, NodeId::new("5"));
    }
}
