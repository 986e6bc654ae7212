//! Scalactic Test Harness - Law checking and benchmarking tools
//!
//! This crate provides:
//! - Seeded law checkers for equalities, orderings and lazy chains
//! - A `tracing-subscriber` setup for tests and benchmarks

pub mod laws;
pub mod logging;

pub use laws::*;
pub use logging::*;
