//! Depth-first traversal strategies.
//!
//! # Examples
//! ```
//! use wayfarer_core::SearchStrategy;
//!
//! assert_eq!(SearchStrategy::CostBounded.as_str(), "cost-bounded");
//! assert_eq!("pruned".parse::<SearchStrategy>(), Ok(SearchStrategy::Pruned));
//! ```

use std::fmt;
use std::str::FromStr;

/// How the depth-first search prunes its exploration.
///
/// Every strategy returns a route with the same minimal total distance; they
/// differ in how much of the graph they visit and, among tied routes, which
/// one they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SearchStrategy {
    /// Visit every simple path. Never prunes.
    Exhaustive,
    /// Skip nodes proven unable to reach the destination.
    Pruned,
    /// Prune dead nodes and any branch that cannot beat the best route so far
    /// or that already breaks a cap.
    #[default]
    CostBounded,
}

impl SearchStrategy {
    /// Every strategy, in increasing order of pruning.
    pub const ALL: [Self; 3] = [Self::Exhaustive, Self::Pruned, Self::CostBounded];

    /// Return the strategy as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Pruned => "pruned",
            Self::CostBounded => "cost-bounded",
        }
    }

    /// Whether the strategy tracks dead nodes.
    #[must_use]
    pub const fn prunes_dead_nodes(&self) -> bool {
        matches!(self, Self::Pruned | Self::CostBounded)
    }

    /// Whether the strategy bounds branches by cost.
    #[must_use]
    pub const fn bounds_cost(&self) -> bool {
        matches!(self, Self::CostBounded)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exhaustive" | "brute-force" => Ok(Self::Exhaustive),
            "pruned" => Ok(Self::Pruned),
            "cost-bounded" | "directed" => Ok(Self::CostBounded),
            _ => Err(format!("unknown search strategy '{s}'")),
        }
    }
}
