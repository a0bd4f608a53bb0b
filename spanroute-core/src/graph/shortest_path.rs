//! Single-pair shortest paths with Dijkstra's algorithm.

use std::hash::Hash;

use tracing::{debug, info, instrument};

use crate::{
    error::{NoPathReason, Result, SpanrouteError},
    heap::IndexedPriorityQueue,
};

use super::{Edge, Graph, validate_weight};

/// Per-vertex search state for one query.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    predecessor: Option<usize>,
    visited: bool,
}

impl Default for FrontierEntry {
    fn default() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
            visited: false,
        }
    }
}

const fn no_path(reason: NoPathReason) -> SpanrouteError {
    SpanrouteError::NoPathExists { reason }
}

/// Sums the current weights along `path`.
#[must_use]
pub fn path_weight<E: Edge>(path: &[&E]) -> f64 {
    path.iter().map(|edge| edge.weight()).sum()
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<Vertex = V>,
{
    /// Returns the lightest path from `start` to `end` as the sequence of
    /// edges walked, in order. The path is empty when `start == end`.
    ///
    /// Where parallel edges join consecutive vertices the lightest is
    /// reported. Weights are read afresh on every call.
    ///
    /// Distances are plain `f64` sums. A route whose total overflows to
    /// infinity counts as unreachable.
    ///
    /// # Errors
    /// - [`SpanrouteError::NoPathExists`] when either vertex is not in the
    ///   graph or `end` cannot be reached from `start`.
    /// - [`SpanrouteError::NegativeWeight`] or
    ///   [`SpanrouteError::NonFiniteWeight`] when an edge met during the
    ///   search has an unusable weight.
    ///
    /// # Examples
    /// ```
    /// use spanroute_core::{Graph, WeightedEdge, path_weight};
    ///
    /// let graph = Graph::new(
    ///     ["a", "b", "c"],
    ///     [
    ///         WeightedEdge::new("a", "b", 1.0),
    ///         WeightedEdge::new("b", "c", 1.0),
    ///         WeightedEdge::new("a", "c", 5.0),
    ///     ],
    /// )?;
    /// let path = graph.shortest_path_between(&"a", &"c")?;
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path_weight(&path), 2.0);
    /// # Ok::<(), spanroute_core::SpanrouteError>(())
    /// ```
    #[instrument(
        name = "core.shortest_path",
        err,
        skip_all,
        fields(vertices = self.num_vertices(), edges = self.num_edges()),
    )]
    pub fn shortest_path_between(&self, start: &V, end: &V) -> Result<Vec<&E>> {
        record_shortest_path_query();
        let start = self
            .vertex_index(start)
            .ok_or(no_path(NoPathReason::UnknownStart))?;
        let end = self
            .vertex_index(end)
            .ok_or(no_path(NoPathReason::UnknownEnd))?;

        let mut entries = vec![FrontierEntry::default(); self.num_vertices()];
        entries[start].distance = 0.0;
        let mut frontier = IndexedPriorityQueue::with_capacity(self.num_vertices());
        frontier.insert(start, 0.0)?;

        while let Ok((current, distance)) = frontier.remove_min() {
            entries[current].visited = true;
            if current == end {
                let path = self.reconstruct(&entries, start, end)?;
                info!(hops = path.len(), distance, "shortest path found");
                return Ok(path);
            }

            for &position in &self.adjacency[current] {
                let weight = validate_weight(position, self.edges[position].weight())?;
                let neighbour = self.opposite(position, current);
                let entry = &mut entries[neighbour];
                if entry.visited {
                    continue;
                }
                let candidate = distance + weight;
                if candidate < entry.distance {
                    entry.distance = candidate;
                    entry.predecessor = Some(current);
                    if frontier.contains(&neighbour) {
                        frontier.decrease_priority(&neighbour, candidate)?;
                    } else {
                        frontier.insert(neighbour, candidate)?;
                    }
                }
            }
        }

        debug!("frontier exhausted before reaching the end vertex");
        Err(no_path(NoPathReason::Unreachable))
    }

    /// Walks predecessors back from `end`, choosing the lightest edge
    /// between each pair of consecutive vertices.
    fn reconstruct(&self, entries: &[FrontierEntry], start: usize, end: usize) -> Result<Vec<&E>> {
        let mut path = Vec::new();
        let mut node = end;
        while node != start {
            let previous = entries[node]
                .predecessor
                .ok_or(no_path(NoPathReason::Unreachable))?;
            let edge = self
                .lightest_edge_between(previous, node)
                .ok_or(no_path(NoPathReason::Unreachable))?;
            path.push(edge);
            node = previous;
        }
        path.reverse();
        Ok(path)
    }

    fn lightest_edge_between(&self, from: usize, to: usize) -> Option<&E> {
        self.adjacency[from]
            .iter()
            .copied()
            .filter(|&position| self.opposite(position, from) == to)
            .map(|position| &self.edges[position])
            .min_by(|left, right| left.cmp_by_weight(right))
    }
}

#[cfg(feature = "metrics")]
fn record_shortest_path_query() {
    metrics::counter!("spanroute_shortest_path_queries_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_shortest_path_query() {}
