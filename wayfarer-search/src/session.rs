//! Mutable state owned by a single search invocation.
//!
//! The session threads the current path as a push/pop stack, remembers which
//! nodes are proven unable to reach the destination and counts every node
//! entered. It is created by the engine for one top-level call and dropped
//! when that call returns, so concurrent searches never share state.

use wayfarer_core::{NodeId, NodeIndex, PathCost, SolveError, WeightedDigraph, render_path};

/// Best admissible candidate recorded so far.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) nodes: Vec<NodeIndex>,
    pub(crate) cost: PathCost,
}

#[derive(Debug)]
pub(crate) struct SearchSession<'g> {
    graph: &'g WeightedDigraph,
    max_steps: Option<u64>,
    path: Vec<NodeIndex>,
    on_path: Vec<bool>,
    dead: Vec<bool>,
    dead_order: Vec<NodeIndex>,
    steps: u64,
    best: Option<Candidate>,
}

impl<'g> SearchSession<'g> {
    pub(crate) fn new(graph: &'g WeightedDigraph, max_steps: Option<u64>) -> Self {
        let node_count = graph.node_count();
        Self {
            graph,
            max_steps,
            path: Vec::with_capacity(node_count),
            on_path: vec![false; node_count],
            dead: vec![false; node_count],
            dead_order: Vec::new(),
            steps: 0,
            best: None,
        }
    }

    /// Push `node` onto the path and count the step.
    ///
    /// Fails once the step count passes the configured limit; the node is
    /// still pushed so the caller's matching [`Self::leave`] stays balanced.
    pub(crate) fn enter(&mut self, node: NodeIndex, label: &str) -> Result<(), SolveError> {
        self.path.push(node);
        if let Some(flag) = self.on_path.get_mut(node.index()) {
            *flag = true;
        }
        self.steps = self.steps.saturating_add(1);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("current {label} path: {}", self.render_current());
        }
        match self.max_steps {
            Some(limit) if self.steps > limit => Err(SolveError::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Pop `node` from the path.
    pub(crate) fn leave(&mut self, node: NodeIndex) {
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(node), "path stack out of balance");
        if let Some(flag) = self.on_path.get_mut(node.index()) {
            *flag = false;
        }
    }

    pub(crate) fn is_on_path(&self, node: NodeIndex) -> bool {
        self.on_path.get(node.index()).copied().unwrap_or(false)
    }

    pub(crate) fn is_dead(&self, node: NodeIndex) -> bool {
        self.dead.get(node.index()).copied().unwrap_or(false)
    }

    /// True when every child of `node` is dead, including when it has none.
    pub(crate) fn children_all_dead(&self, node: NodeIndex) -> bool {
        self.graph
            .out_edges(node)
            .iter()
            .all(|edge| self.is_dead(edge.target))
    }

    pub(crate) fn mark_dead(&mut self, node: NodeIndex) {
        let Some(flag) = self.dead.get_mut(node.index()) else {
            return;
        };
        if *flag {
            return;
        }
        *flag = true;
        self.dead_order.push(node);
        log::debug!("marking {} dead", self.label(node));
    }

    /// Record the current path if it beats the best candidate strictly.
    pub(crate) fn offer(&mut self, cost: PathCost) {
        let improves = self
            .best
            .as_ref()
            .is_none_or(|best| cost.total_distance < best.cost.total_distance);
        if improves {
            self.best = Some(Candidate {
                nodes: self.path.clone(),
                cost,
            });
        }
    }

    pub(crate) fn best_total(&self) -> Option<f64> {
        self.best.as_ref().map(|best| best.cost.total_distance)
    }

    pub(crate) const fn steps(&self) -> u64 {
        self.steps
    }

    /// Consume the session, returning the best candidate and the dead nodes
    /// in marking order.
    pub(crate) fn finish(self) -> (Option<Candidate>, Vec<NodeId>) {
        let dead = self
            .dead_order
            .iter()
            .filter_map(|&node| self.graph.node_id(node).cloned())
            .collect();
        (self.best, dead)
    }

    fn label(&self, node: NodeIndex) -> &str {
        self.graph.node_id(node).map_or("?", NodeId::as_str)
    }

    fn render_current(&self) -> String {
        let labels: Vec<&str> = self.path.iter().map(|&node| self.label(node)).collect();
        render_path(&labels)
    }
}
