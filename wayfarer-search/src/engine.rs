//! Depth-first constrained shortest-path search.
//!
//! A single recursive walk serves every [`SearchStrategy`]; the strategy only
//! switches the pruning checks on or off. Children are visited in edge
//! insertion order and the first candidate with the minimal total distance
//! wins, so results are deterministic for a given graph.

use wayfarer_core::{
    Budget, NodeId, NodeIndex, PathCost, Route, SearchStrategy, SolveError, SolveRequest,
    WeightedDigraph,
};

use crate::SearchConfig;
use crate::session::SearchSession;

/// Route found by a search together with the work it took.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchOutcome {
    pub(crate) route: Route,
    pub(crate) steps: u64,
    pub(crate) dead_nodes: Vec<NodeId>,
}

/// Run one search for `request` over `graph`.
pub(crate) fn search(
    graph: &WeightedDigraph,
    request: &SolveRequest,
    config: &SearchConfig,
) -> Result<SearchOutcome, SolveError> {
    request.validate()?;
    let start = resolve(graph, &request.start)?;
    let end = resolve(graph, &request.end)?;
    if start == end {
        return Ok(SearchOutcome {
            route: Route::trivial(request.start.clone()),
            steps: 0,
            dead_nodes: Vec::new(),
        });
    }

    let mut walk = Walk {
        session: SearchSession::new(graph, config.max_steps),
        graph,
        end,
        budget: request.budget,
        strategy: request.strategy,
    };
    walk.visit(start, PathCost::ZERO)?;

    let steps = walk.session.steps();
    let (best, dead_nodes) = walk.session.finish();
    let Some(candidate) = best else {
        log::debug!(
            "{} search from {} to {} found no admissible path in {steps} steps",
            request.strategy,
            request.start,
            request.end
        );
        return Err(SolveError::NoPath {
            start: request.start.clone(),
            end: request.end.clone(),
        });
    };
    let nodes = candidate
        .nodes
        .iter()
        .filter_map(|&node| graph.node_id(node).cloned())
        .collect();
    Ok(SearchOutcome {
        route: Route::new(nodes, candidate.cost),
        steps,
        dead_nodes,
    })
}

fn resolve(graph: &WeightedDigraph, id: &NodeId) -> Result<NodeIndex, SolveError> {
    graph
        .index_of(id.as_str())
        .map_err(|_| SolveError::UnknownNode { id: id.clone() })
}

struct Walk<'g> {
    session: SearchSession<'g>,
    graph: &'g WeightedDigraph,
    end: NodeIndex,
    budget: Budget,
    strategy: SearchStrategy,
}

impl Walk<'_> {
    fn visit(&mut self, node: NodeIndex, cost: PathCost) -> Result<(), SolveError> {
        let entered = self.session.enter(node, self.strategy.as_str());
        let explored = entered.and_then(|()| self.explore(node, cost));
        self.session.leave(node);
        explored
    }

    fn explore(&mut self, node: NodeIndex, cost: PathCost) -> Result<(), SolveError> {
        if node == self.end {
            if self.budget.admits(&cost) {
                self.session.offer(cost);
            }
            return Ok(());
        }

        let prunes = self.strategy.prunes_dead_nodes();
        if prunes && self.session.children_all_dead(node) {
            self.session.mark_dead(node);
            return Ok(());
        }

        let graph = self.graph;
        for edge in graph.out_edges(node) {
            let child = edge.target;
            if self.session.is_on_path(child) || (prunes && self.session.is_dead(child)) {
                continue;
            }
            let next = cost.extend(&edge.payload);
            if self.strategy.bounds_cost() && !self.worth_extending(cost, next) {
                continue;
            }
            self.visit(child, next)?;
        }

        if prunes && self.session.children_all_dead(node) {
            self.session.mark_dead(node);
        }
        Ok(())
    }

    /// Costs only grow along a path, so a branch that already matches the
    /// best total or breaks a cap cannot produce a better candidate.
    fn worth_extending(&self, current: PathCost, next: PathCost) -> bool {
        let can_improve = self
            .session
            .best_total()
            .is_none_or(|best| current.total_distance < best);
        can_improve && self.budget.admits(&next)
    }
}

/// Find the shortest simple path from `start` to `end` whose total and
/// outdoor distances stay within the given caps.
///
/// Returns the node labels in walking order. Among equally short paths the
/// first one reached in edge insertion order is returned.
///
/// # Errors
///
/// [`SolveError::InvalidBudget`] for a negative or NaN cap,
/// [`SolveError::UnknownNode`] for an unregistered endpoint and
/// [`SolveError::NoPath`] when no path satisfies both caps.
///
/// # Stack usage
///
/// The walk recurses once per node on the current path, so stack depth grows
/// with the longest simple path explored. Maps with paths many thousands of
/// nodes long should be searched on a thread with a larger stack, see
/// [`std::thread::Builder::stack_size`].
///
/// # Examples
/// ```
/// use wayfarer_core::{NodeId, SearchStrategy, WeightedDigraph};
/// use wayfarer_search::find_constrained_shortest_path;
///
/// let mut graph = WeightedDigraph::new();
/// for id in ["a", "b", "c"] {
///     graph.add_node(id)?;
/// }
/// graph.add_weighted_edge("a", "b", 15.0, 10.0)?;
/// graph.add_weighted_edge("a", "c", 14.0, 6.0)?;
/// graph.add_weighted_edge("b", "c", 3.0, 1.0)?;
///
/// let path = find_constrained_shortest_path(&graph, "a", "c", 100.0, 100.0, SearchStrategy::Pruned)?;
/// assert_eq!(path, [NodeId::new("a"), NodeId::new("c")]);
/// assert!(find_constrained_shortest_path(&graph, "a", "c", 13.0, 100.0, SearchStrategy::Pruned).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn find_constrained_shortest_path(
    graph: &WeightedDigraph,
    start: &str,
    end: &str,
    max_total_distance: f64,
    max_outdoor_distance: f64,
    strategy: SearchStrategy,
) -> Result<Vec<NodeId>, SolveError> {
    let request = SolveRequest::new(
        start,
        end,
        Budget::new(max_total_distance, max_outdoor_distance),
    )
    .with_strategy(strategy);
    search(graph, &request, &SearchConfig::default()).map(|outcome| outcome.route.into_nodes())
}
