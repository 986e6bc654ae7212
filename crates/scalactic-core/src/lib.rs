//! Scalactic Core - Equality abstractions and algebraic wrapper types
//!
//! This crate defines the capabilities used throughout Scalactic:
//! - Equality, hashing equality and ordering equality
//! - Normalizations, uniformities and normalizing equalities
//! - Tolerances and spreads for approximate numeric comparison
//! - `Or`, `Every`, `Present`, `Mitigator` and `Membership`
//! - Strict collections decided by a supplied equality (equa-sets, bags)
//!
//! Every capability is passed explicitly; nothing is resolved implicitly.

pub mod bag;
pub mod equa_set;
pub mod equality;
pub mod error;
pub mod every;
pub mod membership;
pub mod normalization;
pub mod or;
pub mod projection;
pub mod tolerance;

pub use bag::*;
pub use equa_set::*;
pub use equality::*;
pub use error::*;
pub use every::*;
pub use membership::*;
pub use normalization::*;
pub use or::*;
pub use projection::*;
pub use tolerance::*;
