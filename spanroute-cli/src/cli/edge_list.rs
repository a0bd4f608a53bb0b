//! Whitespace-separated edge-list input.
//!
//! Each non-blank line that does not start with `#` is either
//! `vertex NAME`, declaring a vertex that may have no edges, or
//! `FROM TO WEIGHT`, declaring an undirected edge. Vertices named by an edge
//! are declared implicitly, in order of first appearance.

use std::collections::HashSet;
use std::io::BufRead;

use spanroute_core::{Graph, SpanrouteError, WeightedEdge};
use thiserror::Error;

/// Graph type built from an edge list.
pub type NamedGraph = Graph<String, WeightedEdge<String>>;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading the underlying stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A line did not match either accepted shape.
    #[error("line {line}: expected `vertex NAME` or `FROM TO WEIGHT`, found `{content}`")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The trimmed line.
        content: String,
    },
    /// The weight column did not parse as a number.
    #[error("line {line}: weight `{raw}` is not a number")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// The unparsed weight token.
        raw: String,
    },
    /// The graph rejected an edge declared on `line`.
    #[error("line {line}: {source}")]
    InvalidEdge {
        /// One-based line number.
        line: usize,
        /// Rejection reported by the graph.
        #[source]
        source: SpanrouteError,
    },
}

/// Parsed edge list, ready to become a [`NamedGraph`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    vertices: Vec<String>,
    edges: Vec<WeightedEdge<String>>,
    edge_lines: Vec<usize>,
}

impl EdgeList {
    /// Reads an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when a line cannot be read or parsed.
    ///
    /// # Examples
    /// ```
    /// use spanroute_cli::cli::EdgeList;
    ///
    /// let list = EdgeList::parse("# roads\nA B 1\nvertex C\n".as_bytes())?;
    /// assert_eq!(list.vertices(), ["A", "B", "C"]);
    /// assert_eq!(list.edge_count(), 1);
    /// # Ok::<(), spanroute_cli::cli::EdgeListError>(())
    /// ```
    pub fn parse(reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut list = Self::default();
        let mut seen = HashSet::new();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| EdgeListError::Read {
                line: line_number,
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            match fields.as_slice() {
                ["vertex", name] => list.declare(&mut seen, name),
                [from, to, weight] => {
                    let weight = weight.parse::<f64>().map_err(|_| EdgeListError::InvalidWeight {
                        line: line_number,
                        raw: (*weight).to_owned(),
                    })?;
                    list.declare(&mut seen, from);
                    list.declare(&mut seen, to);
                    list.edges
                        .push(WeightedEdge::new((*from).to_owned(), (*to).to_owned(), weight));
                    list.edge_lines.push(line_number);
                }
                _ => {
                    return Err(EdgeListError::Malformed {
                        line: line_number,
                        content: trimmed.to_owned(),
                    });
                }
            }
        }
        Ok(list)
    }

    /// Declared vertices in order of first appearance.
    #[must_use]
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Number of edge lines.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the graph, attributing rejected edges to their source line.
    ///
    /// # Errors
    /// Returns [`EdgeListError::InvalidEdge`] when an edge weight is negative
    /// or not finite.
    pub fn into_graph(self) -> Result<NamedGraph, EdgeListError> {
        let Self {
            vertices,
            edges,
            edge_lines,
        } = self;
        Graph::new(vertices, edges).map_err(|source| {
            let edge = match source {
                SpanrouteError::NegativeWeight { edge, .. }
                | SpanrouteError::NonFiniteWeight { edge }
                | SpanrouteError::UnknownEndpoint { edge } => Some(edge),
                _ => None,
            };
            EdgeListError::InvalidEdge {
                line: edge.and_then(|edge| edge_lines.get(edge).copied()).unwrap_or(0),
                source,
            }
        })
    }

    fn declare(&mut self, seen: &mut HashSet<String>, name: &str) {
        if seen.insert(name.to_owned()) {
            self.vertices.push(name.to_owned());
        }
    }
}
