//! Tests for the edge-list parser.

use super::*;
use rstest::rstest;
use wayfarer_core::NodeId;

fn parse(input: &str) -> Result<(WeightedDigraph, MapSummary), LoadError> {
    parse_edge_list(input.as_bytes())
}

#[rstest]
fn nodes_are_registered_in_file_order() {
    let (graph, summary) = parse("32 76 54 23\n76 68 40 0\n32 68 100 10\n").expect("valid map");
    let nodes: Vec<&str> = graph.nodes().map(NodeId::as_str).collect();
    assert_eq!(nodes, ["32", "76", "68"]);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(
        summary,
        MapSummary {
            lines: 3,
            skipped: 0,
            edges: 3,
        }
    );
    let weights = graph.edge_weights("32", "76").expect("edge present");
    assert_eq!(weights.total_distance(), 54.0);
    assert_eq!(weights.outdoor_distance(), 23.0);
}

#[rstest]
fn blank_and_comment_lines_are_skipped() {
    let (graph, summary) = parse("# header\n\n   \na b 1 0\n  # indented comment\n").expect("valid");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(summary.skipped, 4);
    assert_eq!(summary.lines, 5);
}

#[rstest]
#[case("a b 1\n", 3)]
#[case("a b 1 2 3\n", 5)]
fn wrong_field_count_is_reported(#[case] input: &str, #[case] found: usize) {
    let err = parse(input).expect_err("malformed");
    assert!(matches!(err, LoadError::MalformedLine { line: 1, found: f } if f == found));
}

#[rstest]
fn bad_number_names_the_field_and_line() {
    let err = parse("a b 1 0\nb c ten 0\n").expect_err("bad number");
    match err {
        LoadError::InvalidNumber {
            line, field, value, ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(field, "total distance");
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case("a b 1 0\na b 2 0\n", 2)]
#[case("a b -1 0\n", 1)]
#[case("a b 1 inf\n", 1)]
fn graph_rejections_carry_line_numbers(#[case] input: &str, #[case] expected_line: usize) {
    let err = parse(input).expect_err("graph rejection");
    assert!(matches!(err, LoadError::Graph { line, .. } if line == expected_line));
    assert!(err.to_string().starts_with(&format!("line {expected_line}:")));
}

#[rstest]
fn empty_input_gives_empty_graph() {
    let (graph, summary) = parse("").expect("empty map");
    assert_eq!(graph.node_count(), 0);
    assert_eq!(summary, MapSummary::default());
}
