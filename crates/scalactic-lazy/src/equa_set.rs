//! Lazy equa-set views
//!
//! Transformations may map distinct elements to equal ones, so duplicates
//! are only collapsed when the view is forced into a strict set under an
//! explicitly supplied equality.
//!
//! - `LazyEquaSet`: forces into any `EquaSet` implementation
//! - `LazyFastEquaSet`: forces into a hash-bucketed `FastEquaSet`
//! - `LazyTreeEquaSet`: forces into a sorted `TreeEquaSet`
//! - `TreeEquaSetView`: a view over a `TreeEquaSet`; derived views refuse `flat_map`

use std::fmt;

use scalactic_core::{
    EquaSet, FastEquaSet, HashingEquality, OrderingEquality, ScalacticResult, TreeEquaSet,
};

use crate::view::unsupported;
use crate::{ChainOp, Element, LazyChain, LazyView};

/// A lazy set that can be forced into any `EquaSet`.
///
/// `len` and `to_list` count elements before duplicates are collapsed, so
/// they can exceed the size of the forced set.
pub struct LazyEquaSet<T> {
    chain: LazyChain<T>,
}

impl<T: Element> LazyEquaSet<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        LazyEquaSet {
            chain: LazyChain::from_vec(items),
        }
    }

    /// Force into a strict set, collapsing elements equal under `equality`.
    pub fn to_strict<S: EquaSet<T>>(&self, equality: S::Equality) -> S {
        S::from_elements(equality, self.to_list())
    }

    pub fn force<S: EquaSet<T>>(&self, equality: S::Equality) -> S {
        self.to_strict(equality)
    }
}

impl<T: Element> LazyView<T> for LazyEquaSet<T> {
    type Rebuilt<U: Element> = LazyEquaSet<U>;

    fn chain(&self) -> &LazyChain<T> {
        &self.chain
    }

    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> LazyEquaSet<U> {
        LazyEquaSet { chain }
    }

    fn view_name(&self) -> &'static str {
        "LazyEquaSet"
    }
}

/// A lazy set forced into a hash-bucketed `FastEquaSet`.
///
/// `len` and `to_list` count elements before duplicates are collapsed, so
/// they can exceed the size of the forced set.
pub struct LazyFastEquaSet<T> {
    chain: LazyChain<T>,
}

impl<T: Element> LazyFastEquaSet<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        LazyFastEquaSet {
            chain: LazyChain::from_vec(items),
        }
    }

    pub fn to_strict<E: HashingEquality<T>>(&self, equality: E) -> FastEquaSet<T, E> {
        FastEquaSet::from_elements(equality, self.to_list())
    }

    pub fn force<E: HashingEquality<T>>(&self, equality: E) -> FastEquaSet<T, E> {
        self.to_strict(equality)
    }
}

impl<T: Element> LazyView<T> for LazyFastEquaSet<T> {
    type Rebuilt<U: Element> = LazyFastEquaSet<U>;

    fn chain(&self) -> &LazyChain<T> {
        &self.chain
    }

    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> LazyFastEquaSet<U> {
        LazyFastEquaSet { chain }
    }

    fn view_name(&self) -> &'static str {
        "LazyFastEquaSet"
    }
}

/// A lazy set forced into a sorted `TreeEquaSet`.
///
/// `len` and `to_list` count elements before duplicates are collapsed, so
/// they can exceed the size of the forced set.
pub struct LazyTreeEquaSet<T> {
    chain: LazyChain<T>,
}

impl<T: Element> LazyTreeEquaSet<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        LazyTreeEquaSet {
            chain: LazyChain::from_vec(items),
        }
    }

    pub fn to_strict<E: OrderingEquality<T>>(&self, equality: E) -> TreeEquaSet<T, E> {
        TreeEquaSet::from_elements(equality, self.to_list())
    }

    pub fn force<E: OrderingEquality<T>>(&self, equality: E) -> TreeEquaSet<T, E> {
        self.to_strict(equality)
    }
}

impl<T: Element> LazyView<T> for LazyTreeEquaSet<T> {
    type Rebuilt<U: Element> = LazyTreeEquaSet<U>;

    fn chain(&self) -> &LazyChain<T> {
        &self.chain
    }

    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> LazyTreeEquaSet<U> {
        LazyTreeEquaSet { chain }
    }

    fn view_name(&self) -> &'static str {
        "LazyTreeEquaSet"
    }
}

/// A view over the sorted elements of a `TreeEquaSet`.
///
/// Only the root view supports `flat_map`; a view produced by any
/// transformation rejects it with `UnsupportedOperation`.
pub struct TreeEquaSetView<T> {
    chain: LazyChain<T>,
    derived: bool,
}

impl<T: Element> TreeEquaSetView<T> {
    /// A root view over the set's elements, in the set's order.
    pub fn of<E: OrderingEquality<T>>(set: &TreeEquaSet<T, E>) -> Self {
        TreeEquaSetView {
            chain: LazyChain::from_vec(set.elements().to_vec()),
            derived: false,
        }
    }

    /// Whether this view is the result of a transformation.
    pub fn is_derived(&self) -> bool {
        self.derived
    }

    pub fn to_strict<E: OrderingEquality<T>>(&self, equality: E) -> TreeEquaSet<T, E> {
        TreeEquaSet::from_elements(equality, self.to_list())
    }

    pub fn force<E: OrderingEquality<T>>(&self, equality: E) -> TreeEquaSet<T, E> {
        self.to_strict(equality)
    }
}

impl<T: Element> LazyView<T> for TreeEquaSetView<T> {
    type Rebuilt<U: Element> = TreeEquaSetView<U>;

    fn chain(&self) -> &LazyChain<T> {
        &self.chain
    }

    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> TreeEquaSetView<U> {
        TreeEquaSetView {
            chain,
            derived: true,
        }
    }

    fn view_name(&self) -> &'static str {
        if self.derived {
            "derived TreeEquaSetView"
        } else {
            "TreeEquaSetView"
        }
    }

    fn check_supported(&self, op: ChainOp) -> ScalacticResult<()> {
        if self.derived && op == ChainOp::FlatMap {
            tracing::debug!(view = self.view_name(), %op, "rejecting unsupported operation");
            return Err(unsupported(op, self.view_name()));
        }
        Ok(())
    }
}

macro_rules! impl_view_common {
    ($($view:ident),*) => {
        $(
            impl<T> Clone for $view<T> {
                fn clone(&self) -> Self {
                    $view {
                        chain: self.chain.clone(),
                    }
                }
            }

            impl<T: Element> FromIterator<T> for $view<T> {
                fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                    $view::from_vec(iter.into_iter().collect())
                }
            }

            impl<T: Element> fmt::Debug for $view<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($view))
                        .field("op", &self.chain.op())
                        .field("depth", &self.chain.depth())
                        .finish()
                }
            }
        )*
    };
}

impl_view_common!(LazyEquaSet, LazyFastEquaSet, LazyTreeEquaSet);

impl<T> Clone for TreeEquaSetView<T> {
    fn clone(&self) -> Self {
        TreeEquaSetView {
            chain: self.chain.clone(),
            derived: self.derived,
        }
    }
}

impl<T: Element> fmt::Debug for TreeEquaSetView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeEquaSetView")
            .field("op", &self.chain.op())
            .field("depth", &self.chain.depth())
            .field("derived", &self.derived)
            .finish()
    }
}
