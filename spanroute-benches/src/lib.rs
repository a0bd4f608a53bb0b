//! Benchmark support crate for spanroute.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for spanning forests, shortest paths and top-k selection.

pub mod error;
pub mod params;
pub mod synthetic;
