//! Scalactic lazy views
//!
//! Lazily evaluated sequences, bags and equa-sets built on a shared,
//! immutable transformation chain:
//! - `LazyChain`: the node graph every view wraps
//! - `LazyView`: map, flat_map, collect, filter, scans, zips, unzips, concat
//! - `LazySeq`, `LazyBag`, `LazyEquaSet`, `LazyFastEquaSet`, `LazyTreeEquaSet`, `TreeEquaSetView`
//! - `Lazily`: `.lazy()` on strict collections
//!
//! Nothing is memoized: each `to_list` / `to_strict` / `force` recomputes
//! the chain from its sources.

pub mod bag;
pub mod chain;
pub mod equa_set;
pub mod lazily;
pub mod seq;
pub mod view;

pub use bag::*;
pub use chain::*;
pub use equa_set::*;
pub use lazily::*;
pub use seq::*;
pub use view::{LazyView, Pair, Triple};
