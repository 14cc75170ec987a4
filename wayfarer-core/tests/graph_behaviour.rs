//! Behavioural tests for the weighted graph store using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_core::test_support::campus_triangle;
use wayfarer_core::{Budget, GraphError, PathCost, WeightedDigraph};

#[derive(Debug, Default)]
struct GraphWorld {
    graph: RefCell<WeightedDigraph>,
    cost: RefCell<Option<Result<PathCost, GraphError>>>,
    within: RefCell<Option<bool>>,
    mutation: RefCell<Option<Result<(), GraphError>>>,
}

impl GraphWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_cost(&self) -> Result<PathCost, GraphError> {
        self.cost
            .borrow()
            .clone()
            .expect("path should be evaluated before assertions")
    }
}

#[fixture]
fn world() -> GraphWorld {
    GraphWorld::default()
}

#[given("the campus triangle graph")]
fn given_triangle(world: &GraphWorld) {
    world.graph.replace(campus_triangle());
}

#[when("I evaluate the path {path} against caps {total} and {outdoor}")]
fn when_evaluate(world: &GraphWorld, path: String, total: f64, outdoor: f64) {
    let nodes: Vec<&str> = path.split(',').collect();
    let graph = world.graph.borrow();
    let budget = Budget::new(total, outdoor);
    world.within.replace(graph.path_within_budget(&nodes, &budget).ok());
    world.cost.replace(Some(graph.path_cost(&nodes)));
}

#[when("I add an edge from {source} to {destination}")]
fn when_add_edge(world: &GraphWorld, source: String, destination: String) {
    let outcome = world
        .graph
        .borrow_mut()
        .add_weighted_edge(&source, &destination, 1.0, 1.0);
    world.mutation.replace(Some(outcome));
}

#[then("the path is within budget")]
fn then_within(world: &GraphWorld) {
    assert_eq!(*world.within.borrow(), Some(true));
}

#[then("the path is outside the budget")]
fn then_outside(world: &GraphWorld) {
    assert_eq!(*world.within.borrow(), Some(false));
}

#[then("the path costs {total} total and {outdoor} outdoor")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_costs(world: &GraphWorld, total: f64, outdoor: f64) {
    let cost = world.expect_cost().expect("path should have a cost");
    assert_eq!(cost.total_distance, total);
    assert_eq!(cost.outdoor_distance, outdoor);
}

#[then("a missing edge error is returned")]
fn then_missing_edge(world: &GraphWorld) {
    assert!(matches!(
        world.expect_cost(),
        Err(GraphError::NoSuchEdge { .. })
    ));
}

#[then("a duplicate edge error is returned")]
fn then_duplicate_edge(world: &GraphWorld) {
    assert!(matches!(
        *world.mutation.borrow(),
        Some(Err(GraphError::DuplicateEdge { .. }))
    ));
}

#[then("the graph still has {count} edges")]
fn then_edge_count(world: &GraphWorld, count: usize) {
    assert_eq!(world.graph.borrow().edge_count(), count);
}

#[scenario(path = "tests/features/graph.feature", index = 0)]
fn direct_edge_fits(world: GraphWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/graph.feature", index = 1)]
fn detour_breaks_outdoor_cap(world: GraphWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/graph.feature", index = 2)]
fn non_adjacent_nodes(world: GraphWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/graph.feature", index = 3)]
fn duplicate_edges_rejected(world: GraphWorld) {
    let _ = world;
}
