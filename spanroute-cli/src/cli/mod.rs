//! Command-line interface orchestration for spanroute.
//!
//! The CLI loads a whitespace-separated edge list and either prints a
//! minimum spanning forest (`mst`) or the cheapest route between two
//! vertices (`path`).

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MstCommand, MstSummary, PathCommand, PathSummary,
    render_summary, run_cli,
};
pub use edge_list::{EdgeList, EdgeListError, NamedGraph};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
