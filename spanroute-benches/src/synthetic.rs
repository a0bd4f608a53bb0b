//! Seeded synthetic graphs for benchmarking.
//!
//! Each graph is a random spanning backbone, so every vertex is reachable
//! from vertex `0`, plus a configurable number of random extra edges per
//! vertex. Weights are drawn uniformly from `[1, 100)`.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanroute_core::{Graph, SpanrouteError, WeightedEdge};

/// Graph over dense `usize` vertices used by every benchmark.
pub type SyntheticGraph = Graph<usize, WeightedEdge<usize>>;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The generated edges were rejected by the graph.
    #[error("generated graph was rejected: {0}")]
    Graph(#[from] SpanrouteError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the backbone.
    pub extra_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from `config`.
///
/// # Errors
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
///
/// # Examples
/// ```
/// use spanroute_benches::synthetic::{SyntheticConfig, generate};
///
/// let config = SyntheticConfig { vertex_count: 10, extra_degree: 2, seed: 42 };
/// let graph = generate(&config).expect("valid config");
/// assert_eq!(graph.num_vertices(), 10);
/// assert_eq!(graph.num_edges(), 9 + 20);
/// ```
pub fn generate(config: &SyntheticConfig) -> Result<SyntheticGraph, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let vertex_count = config.vertex_count;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extra = vertex_count.saturating_mul(config.extra_degree);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push(WeightedEdge::new(parent, vertex, rng.gen_range(1.0..100.0)));
    }
    for _ in 0..extra {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        edges.push(WeightedEdge::new(from, to, rng.gen_range(1.0..100.0)));
    }

    Ok(Graph::new(0..vertex_count, edges)?)
}

/// Generates `count` seeded integers for top-k selection.
#[must_use]
pub fn generate_items(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen()).collect()
}
