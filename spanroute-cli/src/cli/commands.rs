//! Command implementations and argument parsing for the spanroute CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use spanroute_core::{Edge, SpanrouteError, SpanrouteErrorCode, WeightedEdge};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeList, EdgeListError, NamedGraph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanroute",
    about = "Minimum spanning trees and shortest paths over weighted edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print a minimum spanning forest of the graph.
    Mst(MstCommand),
    /// Print the cheapest route between two vertices.
    Path(PathCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Edge-list file with `FROM TO WEIGHT` and `vertex NAME` lines.
    pub path: PathBuf,

    /// Seed for the union tie-break; the forest weight does not depend on it.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Edge-list file with `FROM TO WEIGHT` and `vertex NAME` lines.
    pub path: PathBuf,

    /// Vertex the route starts from.
    #[arg(long)]
    pub from: String,

    /// Vertex the route ends at.
    #[arg(long)]
    pub to: String,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file is not a valid edge list.
    #[error("invalid edge list `{path}`: {source}")]
    EdgeList {
        /// Path of the rejected file.
        path: PathBuf,
        /// Parse or validation failure.
        #[source]
        source: EdgeListError,
    },
    /// A graph query failed.
    #[error(transparent)]
    Core(#[from] SpanrouteError),
}

impl CliError {
    /// Stable core error code behind this failure, when there is one.
    #[must_use]
    pub fn code(&self) -> Option<SpanrouteErrorCode> {
        match self {
            Self::Core(err)
            | Self::EdgeList {
                source: EdgeListError::InvalidEdge { source: err, .. },
                ..
            } => Some(err.code()),
            _ => None,
        }
    }
}

/// Minimum spanning forest produced by `mst`.
#[derive(Debug, Clone, PartialEq)]
pub struct MstSummary {
    /// Name derived from the input file.
    pub source: String,
    /// Number of connected components in the graph.
    pub component_count: usize,
    /// Forest edges in acceptance order.
    pub edges: Vec<WeightedEdge<String>>,
}

/// Cheapest route produced by `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    /// Name derived from the input file.
    pub source: String,
    /// Start vertex.
    pub from: String,
    /// End vertex.
    pub to: String,
    /// Route edges from `from` to `to`.
    pub edges: Vec<WeightedEdge<String>>,
}

impl PathSummary {
    /// Vertices visited along the route, starting with `from`.
    #[must_use]
    pub fn route(&self) -> Vec<&str> {
        let mut route = vec![self.from.as_str()];
        let mut current = &self.from;
        for edge in &self.edges {
            let Some(next) = edge.other_vertex(current) else {
                break;
            };
            route.push(next.as_str());
            current = next;
        }
        route
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionSummary {
    /// Outcome of `mst`.
    Mst(MstSummary),
    /// Outcome of `path`.
    Path(PathSummary),
}

impl ExecutionSummary {
    /// Edges reported by the command.
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge<String>] {
        match self {
            Self::Mst(summary) => &summary.edges,
            Self::Path(summary) => &summary.edges,
        }
    }

    /// Sum of the reported edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|edge| edge.weight()).sum()
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be loaded or the query fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanroute_cli::cli::{Cli, Command, MstCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A B 1\nB C 2\nA C 5\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         seed: Some(7),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(command).map(ExecutionSummary::Mst)
        }
        Command::Path(command) => {
            span.record("command", field::display("path"));
            run_path(command).map(ExecutionSummary::Path)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = field::Empty, seed = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<MstSummary, CliError> {
    let MstCommand { path, seed } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let graph = load_graph(&path)?;
    let forest = match seed {
        Some(seed) => {
            span.record("seed", seed);
            graph.minimum_spanning_tree_with_rng(SmallRng::seed_from_u64(seed))?
        }
        None => {
            span.record("seed", field::display("<entropy>"));
            graph.minimum_spanning_tree()?
        }
    };
    let summary = MstSummary {
        source: source_name(&path),
        component_count: forest.component_count(),
        edges: forest.into_edges().into_iter().cloned().collect(),
    };
    info!(
        source = summary.source.as_str(),
        components = summary.component_count,
        edges = summary.edges.len(),
        "spanning forest computed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.path",
    err,
    skip(command),
    fields(path = field::Empty, from = field::Empty, to = field::Empty),
)]
pub(super) fn run_path(command: PathCommand) -> Result<PathSummary, CliError> {
    let PathCommand { path, from, to } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("from", field::display(&from));
    span.record("to", field::display(&to));
    let graph = load_graph(&path)?;
    let edges = graph
        .shortest_path_between(&from, &to)?
        .into_iter()
        .cloned()
        .collect();
    let summary = PathSummary {
        source: source_name(&path),
        from,
        to,
        edges,
    };
    info!(
        source = summary.source.as_str(),
        hops = summary.edges.len(),
        "route computed"
    );
    Ok(summary)
}

#[instrument(name = "cli.load_graph", err, fields(path = field::Empty, vertices = field::Empty))]
pub(super) fn load_graph(path: &Path) -> Result<NamedGraph, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = EdgeList::parse(BufReader::new(file))
        .and_then(EdgeList::into_graph)
        .map_err(|source| CliError::EdgeList {
            path: path.to_path_buf(),
            source,
        })?;
    span.record("vertices", graph.num_vertices());
    Ok(graph)
}

pub(super) fn source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanroute_cli::cli::{ExecutionSummary, PathSummary, render_summary};
/// # use spanroute_core::WeightedEdge;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Path(PathSummary {
///     source: "roads".into(),
///     from: "A".into(),
///     to: "C".into(),
///     edges: vec![
///         WeightedEdge::new("A".into(), "B".into(), 1.0),
///         WeightedEdge::new("B".into(), "C".into(), 2.0),
///     ],
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("route: A -> B -> C"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Mst(mst) => {
            writeln!(writer, "source: {}", mst.source)?;
            writeln!(writer, "components: {}", mst.component_count)?;
        }
        ExecutionSummary::Path(path) => {
            writeln!(writer, "source: {}", path.source)?;
            writeln!(writer, "route: {}", path.route().join(" -> "))?;
        }
    }
    writeln!(writer, "total weight: {}", summary.total_weight())?;
    writeln!(writer, "edges: {}", summary.edges().len())?;
    for edge in summary.edges() {
        writeln!(writer, "{edge}")?;
    }
    Ok(())
}
