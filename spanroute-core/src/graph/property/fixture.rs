//! Generated graphs for the property suite.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use test_strategy::Arbitrary;

use crate::graph::{Graph, WeightedEdge};

/// Largest graph handed to the exhaustive MST oracle.
pub(super) const ORACLE_MAX_VERTICES: usize = 6;
/// Largest edge count handed to the exhaustive MST oracle.
pub(super) const ORACLE_MAX_EDGES: usize = 14;
/// Largest graph used by the shortest-path properties.
pub(super) const PATH_MAX_VERTICES: usize = 24;

/// How weights and topology are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights spread over a wide integer range, so ties are rare.
    Unique,
    /// Weights drawn from a pool of one to three values, so ties dominate.
    ManyIdentical,
    /// Roughly one edge per vertex, often leaving the graph disconnected.
    Sparse,
    /// Up to three components with no edges between them.
    Disconnected,
    /// Self-loops and parallel edges mixed into an otherwise random graph.
    Multigraph,
}

/// A generated graph together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    pub(super) fn graph(&self) -> Graph<usize, WeightedEdge<usize>> {
        Graph::new(
            0..self.vertex_count,
            self.edges
                .iter()
                .map(|&(from, to, weight)| WeightedEdge::new(from, to, weight)),
        )
        .expect("generated graphs are valid")
    }
}

/// Fixtures small enough for exhaustive MST enumeration.
pub(super) fn oracle_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fixture = generate_fixture(distribution, ORACLE_MAX_VERTICES, &mut rng);
        fixture.edges.truncate(ORACLE_MAX_EDGES);
        fixture
    })
}

/// Fixtures for the shortest-path properties.
pub(super) fn path_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, PATH_MAX_VERTICES, &mut rng)
    })
}

/// Builds a fixture with at most `max_vertices` vertices.
///
/// Weights are whole numbers so sums compare exactly.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    max_vertices: usize,
    rng: &mut SmallRng,
) -> GraphFixture {
    let vertex_count = rng.gen_range(1..=max_vertices);
    let edges = match distribution {
        WeightDistribution::Unique => {
            random_pairs(vertex_count, 0.5, rng, |r| f64::from(r.gen_range(0_u32..10_000)))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(0_u8..=5)))
                .collect();
            random_pairs(vertex_count, 0.6, rng, |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Sparse => {
            let probability = (1.0 / vertex_count as f64).min(1.0);
            random_pairs(vertex_count, probability, rng, |r| f64::from(r.gen_range(0_u8..20)))
        }
        WeightDistribution::Disconnected => split_components(vertex_count, rng),
        WeightDistribution::Multigraph => {
            let mut edges =
                random_pairs(vertex_count, 0.4, rng, |r| f64::from(r.gen_range(0_u8..10)));
            let extras = rng.gen_range(1..=vertex_count);
            for _ in 0..extras {
                let from = rng.gen_range(0..vertex_count);
                let to = if rng.gen_bool(0.3) {
                    from
                } else {
                    rng.gen_range(0..vertex_count)
                };
                edges.push((from, to, f64::from(rng.gen_range(0_u8..10))));
            }
            edges
        }
    };
    GraphFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn random_pairs(
    vertex_count: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::new();
    for from in 0..vertex_count {
        for to in from + 1..vertex_count {
            if rng.gen_bool(probability) {
                let weight = weight(rng);
                edges.push((from, to, weight));
            }
        }
    }
    edges
}

/// Splits the vertices into contiguous blocks and wires each block as a
/// path plus a few random chords.
fn split_components(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize, f64)> {
    let blocks = rng.gen_range(1..=vertex_count.min(3));
    let block_len = vertex_count.div_ceil(blocks);
    let mut edges = Vec::new();
    for block in (0..vertex_count).collect::<Vec<_>>().chunks(block_len) {
        for pair in block.windows(2) {
            edges.push((pair[0], pair[1], f64::from(rng.gen_range(1_u8..10))));
        }
        if block.len() > 2 && rng.gen_bool(0.5) {
            edges.push((block[0], block[block.len() - 1], f64::from(rng.gen_range(1_u8..10))));
        }
    }
    edges
}
