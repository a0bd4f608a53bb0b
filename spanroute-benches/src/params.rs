//! Benchmark parameter types.

use std::fmt;

/// Parameters for a graph query benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning backbone.
    pub extra_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.extra_degree)
    }
}

/// Parameters for a top-k selection benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct TopKBenchParams {
    /// Number of candidate items.
    pub item_count: usize,
    /// Number of items kept.
    pub k: usize,
}

impl fmt::Display for TopKBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.item_count, self.k)
    }
}
