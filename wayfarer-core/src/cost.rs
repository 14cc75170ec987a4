//! Aggregate path costs and budget checks.
//!
//! Costs are summed left to right from zero over consecutive node pairs, so a
//! single-node path costs nothing and an empty path has no cost at all.

use std::fmt;

use crate::{EdgeWeights, GraphError, WeightedDigraph};

/// Total and outdoor distance accumulated along a path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCost {
    /// Sum of edge total distances.
    pub total_distance: f64,
    /// Sum of edge outdoor distances.
    pub outdoor_distance: f64,
}

impl PathCost {
    /// Cost of a path that has not left its first node.
    pub const ZERO: Self = Self {
        total_distance: 0.0,
        outdoor_distance: 0.0,
    };

    /// Cost after walking one more edge.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "path costs are sums of floating-point edge weights"
    )]
    pub fn extend(self, weights: &EdgeWeights) -> Self {
        Self {
            total_distance: self.total_distance + weights.total_distance(),
            outdoor_distance: self.outdoor_distance + weights.outdoor_distance(),
        }
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {:?}, outdoor {:?}",
            self.total_distance, self.outdoor_distance
        )
    }
}

/// Inclusive caps on the two cost dimensions of a path.
///
/// # Examples
/// ```
/// use wayfarer_core::{Budget, PathCost};
///
/// let budget = Budget::new(14.0, 6.0);
/// assert!(budget.admits(&PathCost { total_distance: 14.0, outdoor_distance: 6.0 }));
/// assert!(!budget.admits(&PathCost { total_distance: 14.5, outdoor_distance: 0.0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Budget {
    /// Largest admissible total distance.
    pub max_total_distance: f64,
    /// Largest admissible outdoor distance.
    pub max_outdoor_distance: f64,
}

impl Budget {
    /// Construct a budget from its two caps.
    #[must_use]
    pub const fn new(max_total_distance: f64, max_outdoor_distance: f64) -> Self {
        Self {
            max_total_distance,
            max_outdoor_distance,
        }
    }

    /// A budget every path satisfies.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY)
    }

    /// Whether both caps are non-negative numbers. Infinity is allowed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let valid = |cap: f64| !cap.is_nan() && cap >= 0.0;
        valid(self.max_total_distance) && valid(self.max_outdoor_distance)
    }

    /// Whether `cost` stays within both caps.
    #[must_use]
    pub fn admits(&self, cost: &PathCost) -> bool {
        cost.total_distance <= self.max_total_distance
            && cost.outdoor_distance <= self.max_outdoor_distance
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl WeightedDigraph {
    /// Weights of the edge `source -> destination`.
    pub fn edge_weights(&self, source: &str, destination: &str) -> Result<EdgeWeights, GraphError> {
        self.edge(source, destination).copied()
    }

    /// Aggregate cost of walking `path` in order.
    ///
    /// Fails with [`GraphError::NoSuchEdge`] when consecutive nodes are not
    /// adjacent or when the slice is empty, in which case both endpoints are
    /// `None`. An unregistered label gives [`GraphError::UnknownNode`].
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::WeightedDigraph;
    ///
    /// let mut graph = WeightedDigraph::new();
    /// for id in ["a", "b", "c"] {
    ///     graph.add_node(id)?;
    /// }
    /// graph.add_weighted_edge("a", "b", 15.0, 10.0)?;
    /// graph.add_weighted_edge("b", "c", 3.0, 1.0)?;
    /// let cost = graph.path_cost(&["a", "b", "c"])?;
    /// assert_eq!(cost.total_distance, 18.0);
    /// assert_eq!(cost.outdoor_distance, 11.0);
    /// # Ok::<(), wayfarer_core::GraphError>(())
    /// ```
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Result<PathCost, GraphError> {
        let Some(first) = path.first() else {
            return Err(GraphError::empty_path());
        };
        self.index_of(first.as_ref())?;
        path.windows(2).try_fold(PathCost::ZERO, |cost, pair| {
            let [from, to] = pair else {
                return Ok(cost);
            };
            let weights = self.edge(from.as_ref(), to.as_ref())?;
            Ok(cost.extend(weights))
        })
    }

    /// Sum of edge total distances along `path`.
    pub fn total_distance<S: AsRef<str>>(&self, path: &[S]) -> Result<f64, GraphError> {
        self.path_cost(path).map(|cost| cost.total_distance)
    }

    /// Sum of edge outdoor distances along `path`.
    pub fn outdoor_distance<S: AsRef<str>>(&self, path: &[S]) -> Result<f64, GraphError> {
        self.path_cost(path).map(|cost| cost.outdoor_distance)
    }

    /// Whether `path` stays within both caps of `budget`.
    pub fn path_within_budget<S: AsRef<str>>(
        &self,
        path: &[S],
        budget: &Budget,
    ) -> Result<bool, GraphError> {
        self.path_cost(path).map(|cost| budget.admits(&cost))
    }
}
