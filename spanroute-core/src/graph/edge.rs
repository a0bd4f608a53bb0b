//! Edge capability consumed by [`super::Graph`].

use std::{cmp::Ordering, fmt};

/// An undirected, weighted connection between two vertices.
///
/// Implementors expose their endpoints by reference and report a weight on
/// demand. The graph never caches weights, so an implementation backed by
/// interior mutability may change its weight between queries.
pub trait Edge {
    /// Vertex identity joined by the edge.
    type Vertex;

    /// Current weight of the edge. Graph queries reject negative and
    /// non-finite weights.
    fn weight(&self) -> f64;

    /// First endpoint.
    fn vertex1(&self) -> &Self::Vertex;

    /// Second endpoint.
    fn vertex2(&self) -> &Self::Vertex;

    /// Both endpoints in declaration order.
    fn endpoints(&self) -> (&Self::Vertex, &Self::Vertex) {
        (self.vertex1(), self.vertex2())
    }

    /// Given one endpoint, returns the other. Returns `None` when `vertex`
    /// is not an endpoint of this edge.
    fn other_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>
    where
        Self::Vertex: PartialEq,
    {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Total order on current weights.
    fn cmp_by_weight(&self, other: &Self) -> Ordering
    where
        Self: Sized,
    {
        self.weight().total_cmp(&other.weight())
    }
}

impl<E: Edge + ?Sized> Edge for &E {
    type Vertex = E::Vertex;

    fn weight(&self) -> f64 {
        (**self).weight()
    }

    fn vertex1(&self) -> &Self::Vertex {
        (**self).vertex1()
    }

    fn vertex2(&self) -> &Self::Vertex {
        (**self).vertex2()
    }
}

/// Plain edge carrying owned endpoints and a fixed weight.
///
/// # Examples
/// ```
/// use spanroute_core::{Edge, WeightedEdge};
///
/// let edge = WeightedEdge::new("a", "b", 2.5);
/// assert_eq!(edge.other_vertex(&"a"), Some(&"b"));
/// assert_eq!(edge.other_vertex(&"c"), None);
/// assert_eq!(edge.to_string(), "a -- b (2.5)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<V> {
    from: V,
    to: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge joining `from` and `to`.
    #[must_use]
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<V> Edge for WeightedEdge<V> {
    type Vertex = V;

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }

    #[rustfmt::skip]
    fn vertex1(&self) -> &V { &self.from }

    #[rustfmt::skip]
    fn vertex2(&self) -> &V { &self.to }
}

impl<V: fmt::Display> fmt::Display for WeightedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.from, self.to, self.weight)
    }
}
