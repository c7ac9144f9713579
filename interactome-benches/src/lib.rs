//! Benchmark support crate for interactome.
//!
//! Provides synthetic interaction lists and parameter types used by the
//! Criterion benchmarks for network construction, analysis and random-graph
//! regeneration.

pub mod error;
pub mod params;
pub mod source;
