//! Scalactic prettifier
//!
//! Diagnostic rendering of values for assertion failure messages:
//! - Strings quoted, chars single-quoted, `()` as `<(), the Unit value>`
//! - `Some`/`None`, `Ok`/`Err`, `Good`/`Bad`, `One`/`Many` by variant name
//! - Sequences as `Name(a, b)`, maps as `Name(k -> v)`, tuples as tuples
//!
//! Nesting is bounded by `PrettifierConfig::max_depth`, past which values
//! render in a shallow form, so cyclic structures always terminate.

pub mod config;
pub mod diff;
pub mod impls;
pub mod prettifier;
pub mod scalactic;

pub use config::*;
pub use diff::*;
pub use prettifier::*;
