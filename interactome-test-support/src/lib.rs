//! Shared test utilities used across interactome crates.

pub mod ci;
pub mod fixtures;
pub mod tracing;
