//! Kruskal's minimum spanning tree.

use std::{cmp::Ordering, hash::Hash};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{
    disjoint_set::DisjointSet,
    error::{Result, SpanrouteError},
    heap::PriorityQueue,
};

use super::{Edge, Graph, validate_weight};

/// Edges accepted by a minimum spanning tree query.
///
/// For a connected graph this is a minimum spanning tree. Otherwise it is a
/// minimum spanning forest holding one tree per connected component.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<'g, E> {
    edges: Vec<&'g E>,
    component_count: usize,
}

impl<'g, E: Edge> SpanningForest<'g, E> {
    /// Accepted edges in the order Kruskal accepted them, which is
    /// non-decreasing by weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[&'g E] { &self.edges }

    /// Consumes the forest, returning its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<&'g E> { self.edges }

    /// Number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Sum of the accepted edges' current weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight()).sum()
    }
}

/// Edge snapshot ordered by weight, then by construction position.
#[derive(Clone, Copy, Debug)]
struct QueuedEdge {
    weight: f64,
    position: usize,
}

impl Ord for QueuedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedEdge {}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<Vertex = V>,
{
    /// Computes a minimum spanning forest, breaking union-by-rank ties with
    /// an entropy-seeded generator.
    ///
    /// The graph is expected to be connected. No connectivity check is made;
    /// a disconnected graph yields one tree per component, visible through
    /// [`SpanningForest::component_count`].
    ///
    /// # Errors
    /// Returns [`SpanrouteError::NegativeWeight`] or
    /// [`SpanrouteError::NonFiniteWeight`] when an edge weight has become
    /// unusable since construction.
    ///
    /// # Examples
    /// ```
    /// use spanroute_core::{Graph, WeightedEdge};
    ///
    /// let graph = Graph::new(
    ///     ["a", "b", "c"],
    ///     [
    ///         WeightedEdge::new("a", "b", 1.0),
    ///         WeightedEdge::new("b", "c", 2.0),
    ///         WeightedEdge::new("a", "c", 5.0),
    ///     ],
    /// )?;
    /// let tree = graph.minimum_spanning_tree()?;
    /// assert!(tree.is_tree());
    /// assert_eq!(tree.total_weight(), 3.0);
    /// # Ok::<(), spanroute_core::SpanrouteError>(())
    /// ```
    pub fn minimum_spanning_tree(&self) -> Result<SpanningForest<'_, E>> {
        self.minimum_spanning_tree_with_rng(SmallRng::from_entropy())
    }

    /// Computes a minimum spanning forest, drawing union-by-rank tie-breaks
    /// from `rng`. The choice of generator never changes the total weight.
    ///
    /// # Errors
    /// See [`Self::minimum_spanning_tree`].
    #[instrument(
        name = "core.mst",
        err,
        skip_all,
        fields(vertices = self.num_vertices(), edges = self.num_edges()),
    )]
    pub fn minimum_spanning_tree_with_rng<R: Rng>(
        &self,
        rng: R,
    ) -> Result<SpanningForest<'_, E>> {
        record_mst_query();
        let vertex_count = self.num_vertices();
        let mut components = DisjointSet::with_capacity_and_rng(vertex_count, rng);
        for vertex in 0..vertex_count {
            components.make_set(vertex)?;
        }

        let mut queue = PriorityQueue::with_capacity(self.num_edges());
        for (position, edge) in self.edges.iter().enumerate() {
            let weight = validate_weight(position, edge.weight())?;
            queue.insert(QueuedEdge { weight, position });
        }

        // |V| - 1 accepted edges already connect every vertex.
        let tree_size = vertex_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(tree_size);
        while accepted.len() < tree_size {
            let Ok(QueuedEdge { position, .. }) = queue.remove_min() else {
                break;
            };
            let (first, second) = self.endpoints[position];
            match components.union(&first, &second) {
                Ok(_) => accepted.push(&self.edges[position]),
                Err(SpanrouteError::AlreadyJoined { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        let forest = SpanningForest {
            edges: accepted,
            component_count: components.set_count(),
        };
        if !forest.is_tree() {
            debug!(
                components = forest.component_count(),
                "graph is not connected, returning a spanning forest"
            );
        }
        info!(
            accepted = forest.edges().len(),
            components = forest.component_count(),
            "minimum spanning tree completed"
        );
        Ok(forest)
    }
}

#[cfg(feature = "metrics")]
fn record_mst_query() {
    metrics::counter!("spanroute_mst_queries_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_mst_query() {}
