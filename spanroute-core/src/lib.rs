//! Spanroute core library.
//!
//! Minimum spanning trees and single-pair shortest paths over caller-defined
//! weighted graphs, built on a 4-ary [`PriorityQueue`], its keyed sibling
//! [`IndexedPriorityQueue`] and a rank-balanced [`DisjointSet`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod heap;
mod top_k;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{ErrorKind, NoPathReason, Result, SpanrouteError, SpanrouteErrorCode},
    graph::{Edge, Graph, SpanningForest, WeightedEdge, path_weight},
    heap::{IndexedPriorityQueue, PriorityQueue},
    top_k::top_k_sort,
};
