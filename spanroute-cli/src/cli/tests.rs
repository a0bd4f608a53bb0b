//! Unit tests for the CLI commands and edge-list loading.

use super::commands::{load_graph, run_mst, source_name};
use super::test_helpers::{create_edge_list, run_cli_expecting_error, temp_dir};
use super::{
    Cli, CliError, Command, EdgeListError, ExecutionSummary, MstCommand, PathCommand,
    render_summary, run_cli,
};

use std::path::Path;

use clap::Parser;
use rstest::rstest;
use spanroute_core::{NoPathReason, SpanrouteError, SpanrouteErrorCode};
use tracing::Level;

use spanroute_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const ROADS: &str = "# two islands\nA B 1\nB C 2\nA C 5\nvertex Z\n";
const DETOUR: &str = "A B 1\nB D 1\nA C 2\nC D 5\nvertex island\n";

fn mst(path: impl AsRef<Path>, seed: Option<u64>) -> Cli {
    Cli {
        command: Command::Mst(MstCommand {
            path: path.as_ref().to_path_buf(),
            seed,
        }),
    }
}

fn route(path: impl AsRef<Path>, from: &str, to: &str) -> Cli {
    Cli {
        command: Command::Path(PathCommand {
            path: path.as_ref().to_path_buf(),
            from: from.to_owned(),
            to: to.to_owned(),
        }),
    }
}

#[rstest]
#[case::stem_with_extension("/tmp/roads.txt", "roads")]
#[case::stem_without_extension("/tmp/roads", "roads")]
#[case::missing_stem("", "graph")]
fn source_name_uses_file_stem(#[case] raw_path: &str, #[case] expected: &str) {
    assert_eq!(source_name(Path::new(raw_path)), expected);
}

#[rstest]
fn mst_reports_forest_over_islands() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "roads.txt", ROADS)?;
    let ExecutionSummary::Mst(summary) = run_cli(mst(&path, Some(7)))? else {
        panic!("mst must produce an mst summary");
    };
    assert_eq!(summary.source, "roads");
    assert_eq!(summary.component_count, 2);
    assert_eq!(summary.edges.len(), 2);
    Ok(())
}

#[rstest]
#[case::seeded(Some(0))]
#[case::other_seed(Some(u64::MAX))]
#[case::entropy(None)]
fn mst_weight_is_independent_of_seed(#[case] seed: Option<u64>) -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "ties.txt", "A B 1\nB C 1\nC D 1\nD A 1\nA C 1\n")?;
    let summary = run_cli(mst(&path, seed))?;
    assert_eq!(summary.total_weight(), 3.0);
    assert_eq!(summary.edges().len(), 3);
    Ok(())
}

#[rstest]
fn path_reports_cheapest_route() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "detour.txt", DETOUR)?;
    let ExecutionSummary::Path(summary) = run_cli(route(&path, "A", "D"))? else {
        panic!("path must produce a path summary");
    };
    assert_eq!(summary.route(), ["A", "B", "D"]);
    assert_eq!(ExecutionSummary::Path(summary).total_weight(), 2.0);
    Ok(())
}

#[rstest]
fn path_to_itself_is_empty() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "detour.txt", DETOUR)?;
    let summary = run_cli(route(&path, "C", "C"))?;
    assert!(summary.edges().is_empty());
    assert_eq!(summary.total_weight(), 0.0);
    Ok(())
}

#[rstest]
#[case::unknown_start("nowhere", "A", NoPathReason::UnknownStart)]
#[case::unknown_end("A", "nowhere", NoPathReason::UnknownEnd)]
#[case::unreachable("A", "island", NoPathReason::Unreachable)]
fn path_reports_missing_routes(
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: NoPathReason,
) -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "detour.txt", DETOUR)?;
    let err = run_cli_expecting_error(route(&path, from, to), "route must not exist");
    assert!(matches!(
        err,
        CliError::Core(SpanrouteError::NoPathExists { reason }) if reason == expected
    ));
    assert_eq!(err.code(), Some(SpanrouteErrorCode::NoPathExists));
    Ok(())
}

#[rstest]
fn missing_file_is_an_io_error() {
    let dir = temp_dir();
    let err = run_cli_expecting_error(mst(dir.path().join("missing.txt"), None), "file is absent");
    assert!(matches!(err, CliError::Io { .. }));
    assert_eq!(err.code(), None);
}

#[rstest]
fn rejected_weights_carry_line_and_code() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "bad.txt", "A B 1\nB C -2\n")?;
    let err = run_cli_expecting_error(mst(&path, None), "negative weight must fail");
    assert!(matches!(
        err,
        CliError::EdgeList {
            source: EdgeListError::InvalidEdge { line: 2, .. },
            ..
        }
    ));
    assert_eq!(err.code(), Some(SpanrouteErrorCode::NegativeWeight));
    Ok(())
}

#[rstest]
fn malformed_lines_have_no_core_code() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "bad.txt", "A B one\n")?;
    let err = run_cli_expecting_error(route(&path, "A", "B"), "weight must parse");
    assert!(matches!(
        err,
        CliError::EdgeList {
            source: EdgeListError::InvalidWeight { line: 1, .. },
            ..
        }
    ));
    assert_eq!(err.code(), None);
    Ok(())
}

#[rstest]
fn render_summary_lists_forest_edges() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "roads.txt", ROADS)?;
    let summary = run_cli(mst(&path, Some(1)))?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(
        String::from_utf8(buffer)?,
        "source: roads\ncomponents: 2\ntotal weight: 3\nedges: 2\nA -- B (1)\nB -- C (2)\n"
    );
    Ok(())
}

#[rstest]
fn render_summary_prints_route() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "detour.txt", DETOUR)?;
    let summary = run_cli(route(&path, "D", "A"))?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let output = String::from_utf8(buffer)?;
    assert!(output.starts_with("source: detour\nroute: D -> B -> A\ntotal weight: 2\n"));
    Ok(())
}

#[rstest]
#[case::mst_with_seed(&["spanroute", "mst", "g.txt", "--seed", "3"])]
#[case::mst_without_seed(&["spanroute", "mst", "g.txt"])]
#[case::path(&["spanroute", "path", "g.txt", "--from", "A", "--to", "B"])]
fn clap_accepts_supported_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args.iter().copied()).is_ok());
}

#[rstest]
#[case::path_without_to(&["spanroute", "path", "g.txt", "--from", "A"])]
#[case::non_numeric_seed(&["spanroute", "mst", "g.txt", "--seed", "x"])]
#[case::unknown_command(&["spanroute", "flow", "g.txt"])]
fn clap_rejects_invalid_invocations(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args.iter().copied()).is_err());
}

#[rstest]
fn run_mst_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let path = create_edge_list(&dir, "roads.txt", ROADS)?;
    let layer = RecordingLayer::default();

    let summary = layer.capture(|| {
        run_mst(MstCommand {
            path: path.clone(),
            seed: Some(7),
        })
    })?;
    assert_eq!(summary.component_count, 2);

    let mst_span = layer.span_named("cli.mst").expect("cli.mst span must exist");
    assert!(
        mst_span
            .field("path")
            .is_some_and(|value| value.ends_with("roads.txt"))
    );
    assert_eq!(mst_span.field("seed"), Some("7"));

    let load_span = layer
        .span_named("cli.load_graph")
        .expect("cli.load_graph span must exist");
    assert_eq!(load_span.field("vertices"), Some("4"));
    assert!(layer.span_named("core.mst").is_some());

    assert!(layer.events_at(Level::INFO).iter().any(|event| {
        event.message() == Some("spanning forest computed")
            && event.field("source") == Some("roads")
            && event.field("components") == Some("2")
    }));
    Ok(())
}

#[rstest]
fn load_graph_records_path_on_error() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");
    let layer = RecordingLayer::default();

    let err = layer
        .capture(|| load_graph(&missing))
        .expect_err("missing file must fail");
    assert!(matches!(err, CliError::Io { .. }));

    let span = layer
        .span_named("cli.load_graph")
        .expect("load span must exist");
    assert!(
        span.field("path")
            .is_some_and(|value| value.ends_with("missing.txt"))
    );
    assert_eq!(span.field("vertices"), None);
    assert!(
        layer
            .events_at(Level::ERROR)
            .iter()
            .any(|event| event.field("error").is_some_and(|value| value.contains("missing.txt")))
    );
}
