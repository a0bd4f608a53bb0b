//! Immutable weighted graph and the queries it answers.
//!
//! A [`Graph`] is validated and indexed once at construction; afterwards it
//! is read-only and every query allocates its own working state, so a shared
//! `&Graph` can serve concurrent queries.

mod edge;
mod mst;
mod shortest_path;

use std::{collections::HashMap, hash::Hash};

use tracing::{Span, field, instrument};

use crate::error::{Result, SpanrouteError};

pub use self::edge::{Edge, WeightedEdge};
pub use self::mst::SpanningForest;
pub use self::shortest_path::path_weight;

/// Undirected weighted graph over caller-defined vertices and edges.
///
/// Self-loops and parallel edges are kept. Each vertex maps to the positions
/// of its incident edges; a self-loop is listed once under its vertex.
///
/// # Examples
/// ```
/// use spanroute_core::{Graph, WeightedEdge};
///
/// let graph = Graph::new(
///     ["a", "b", "c"],
///     [WeightedEdge::new("a", "b", 1.0), WeightedEdge::new("b", "c", 2.0)],
/// )?;
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.incident_edges(&"b").count(), 2);
/// # Ok::<(), spanroute_core::SpanrouteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    edges: Vec<E>,
    index: HashMap<V, usize>,
    endpoints: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<Vertex = V>,
{
    /// Builds a graph from its vertex and edge collections.
    ///
    /// # Errors
    /// - [`SpanrouteError::DuplicateVertex`] when a vertex appears twice.
    /// - [`SpanrouteError::NegativeWeight`] or
    ///   [`SpanrouteError::NonFiniteWeight`] when an edge weight is unusable.
    /// - [`SpanrouteError::UnknownEndpoint`] when an edge names a vertex that
    ///   is not in `vertices`.
    #[instrument(
        name = "core.graph.new",
        err,
        skip_all,
        fields(vertices = field::Empty, edges = field::Empty),
    )]
    pub fn new<IV, IE>(vertices: IV, edges: IE) -> Result<Self>
    where
        IV: IntoIterator<Item = V>,
        IE: IntoIterator<Item = E>,
    {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let edges: Vec<E> = edges.into_iter().collect();
        let span = Span::current();
        span.record("vertices", vertices.len());
        span.record("edges", edges.len());

        let mut index = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), position).is_some() {
                return Err(SpanrouteError::DuplicateVertex { position });
            }
        }

        let mut endpoints = Vec::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); vertices.len()];
        for (position, edge) in edges.iter().enumerate() {
            validate_weight(position, edge.weight())?;
            let (first, second) = edge.endpoints();
            let lookup = |vertex: &V| {
                index
                    .get(vertex)
                    .copied()
                    .ok_or(SpanrouteError::UnknownEndpoint { edge: position })
            };
            let (first, second) = (lookup(first)?, lookup(second)?);
            adjacency[first].push(position);
            if first != second {
                adjacency[second].push(position);
            }
            endpoints.push((first, second));
        }

        Ok(Self {
            vertices,
            edges,
            index,
            endpoints,
            adjacency,
        })
    }

    /// Number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_vertices(&self) -> usize { self.vertices.len() }

    /// Number of edges, counting parallel edges and self-loops.
    #[must_use]
    #[rustfmt::skip]
    pub fn num_edges(&self) -> usize { self.edges.len() }

    /// Vertices in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Edges in construction order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Edges touching `vertex`, in construction order. Yields nothing for a
    /// vertex outside the graph.
    pub fn incident_edges<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g E> + use<'g, V, E> {
        let positions = self
            .vertex_index(vertex)
            .map(|slot| self.adjacency[slot].as_slice())
            .unwrap_or_default();
        positions.iter().map(|&position| &self.edges[position])
    }

    fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Dense index of the endpoint of edge `position` opposite `vertex`.
    fn opposite(&self, position: usize, vertex: usize) -> usize {
        let (first, second) = self.endpoints[position];
        if first == vertex { second } else { first }
    }
}

fn validate_weight(edge: usize, weight: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(SpanrouteError::NonFiniteWeight { edge });
    }
    if weight < 0.0 {
        return Err(SpanrouteError::NegativeWeight { edge, weight });
    }
    Ok(weight)
}

#[cfg(test)]
mod property;
