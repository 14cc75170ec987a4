//! Tests for the `DepthFirstSolver`.

use std::sync::Arc;
use std::thread;

use super::*;
use rstest::rstest;
use wayfarer_core::test_support::{campus_triangle, dead_end_fork, shortcut_chain};
use wayfarer_core::{Budget, NodeId, PathCost, SearchStrategy};

#[rstest]
fn solve_reports_route_cost_and_diagnostics() {
    let graph = dead_end_fork();
    let solver = DepthFirstSolver::new(&graph);
    let request =
        SolveRequest::new("s", "t", Budget::unbounded()).with_strategy(SearchStrategy::Pruned);

    let response = solver.solve(&request).expect("route exists");

    assert_eq!(response.route.to_string(), "s->m->t");
    assert_eq!(
        response.route.cost(),
        PathCost {
            total_distance: 4.0,
            outdoor_distance: 2.0,
        }
    );
    assert_eq!(response.diagnostics.steps, 6);
    assert_eq!(
        response.diagnostics.dead_nodes,
        [NodeId::new("d2"), NodeId::new("d3"), NodeId::new("d1")]
    );
}

#[rstest]
fn step_limit_from_config_is_applied() {
    let graph = dead_end_fork();
    let solver = DepthFirstSolver::with_config(&graph, SearchConfig::with_max_steps(3));
    let request = SolveRequest::new("s", "t", Budget::unbounded());
    let err = solver.solve(&request).expect_err("limit reached");
    assert_eq!(err, SolveError::StepLimitExceeded { limit: 3 });
}

#[rstest]
fn solver_rejects_invalid_budget() {
    let solver = DepthFirstSolver::new(campus_triangle());
    let request = SolveRequest::new("a", "c", Budget::new(f64::NAN, 1.0));
    assert!(matches!(
        solver.solve(&request),
        Err(SolveError::InvalidBudget { .. })
    ));
}

#[rstest]
fn shared_solver_serves_concurrent_requests() {
    let solver = Arc::new(DepthFirstSolver::new(Arc::new(shortcut_chain(4.0))));
    let handles: Vec<_> = [4.0, 3.0]
        .into_iter()
        .map(|outdoor_cap| {
            let shared = Arc::clone(&solver);
            thread::spawn(move || {
                let request = SolveRequest::new("1", "5", Budget::new(100.0, outdoor_cap));
                shared.solve(&request).map(|response| response.route.to_string())
            })
        })
        .collect();
    let routes: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread finished").expect("route"))
        .collect();
    assert_eq!(routes, ["1->2->4->5", "1->2->3->4->5"]);
}

#[rstest]
fn default_config_is_unlimited() {
    let solver = DepthFirstSolver::new(campus_triangle());
    assert_eq!(solver.config(), &SearchConfig::default());
    assert_eq!(solver.graph().node_count(), 3);
}

#[rstest]
fn response_survives_a_json_round_trip() {
    let graph = dead_end_fork();
    let solver = DepthFirstSolver::new(&graph);
    let request =
        SolveRequest::new("s", "t", Budget::unbounded()).with_strategy(SearchStrategy::Pruned);
    let response = solver.solve(&request).expect("route exists");

    let payload = serde_json::to_value(&response).expect("serialise response");
    assert_eq!(payload["route"]["nodes"], serde_json::json!(["s", "m", "t"]));
    assert_eq!(payload["diagnostics"]["dead_nodes"], serde_json::json!(["d2", "d3", "d1"]));

    let decoded: SolveResponse = serde_json::from_value(payload).expect("decode response");
    assert_eq!(decoded, response);
}
