//! Property-based tests for the graph queries.
//!
//! Generated graphs are checked against brute-force oracles: exhaustive
//! subset enumeration for minimum spanning forests on small graphs and
//! Floyd-Warshall distances for shortest paths. A separate property confirms
//! that the union-by-rank tie-break source never changes the forest weight.

mod fixture;
mod oracle;
