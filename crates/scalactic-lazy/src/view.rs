//! The lazy view family
//!
//! Every lazy collection (sequence, bag, equa-sets, tree views) is a thin
//! wrapper around a `LazyChain`. The transformations are written once here;
//! each family only says how to rewrap a chain and which operations it
//! refuses.

use scalactic_core::{ScalacticError, ScalacticResult};

use crate::{ChainOp, Element, LazyChain};

/// A pair that can be split by `unzip`.
pub trait Pair: Element {
    type Left: Element;
    type Right: Element;

    fn into_parts(self) -> (Self::Left, Self::Right);
}

impl<A: Element, B: Element> Pair for (A, B) {
    type Left = A;
    type Right = B;

    fn into_parts(self) -> (A, B) {
        self
    }
}

/// A triple that can be split by `unzip3`.
pub trait Triple: Element {
    type First: Element;
    type Second: Element;
    type Third: Element;

    fn into_parts(self) -> (Self::First, Self::Second, Self::Third);
}

impl<A: Element, B: Element, C: Element> Triple for (A, B, C) {
    type First = A;
    type Second = B;
    type Third = C;

    fn into_parts(self) -> (A, B, C) {
        self
    }
}

/// Shared behaviour of every lazy collection.
///
/// Transformations return a new view of the same family; nothing runs until
/// `to_list` (or the family's `to_strict` / `force`) is called, and every
/// such call recomputes the whole chain.
pub trait LazyView<T: Element>: Sized {
    /// The same family over a different element type.
    type Rebuilt<U: Element>: LazyView<U>;

    fn chain(&self) -> &LazyChain<T>;

    /// Rewrap a transformed chain in this family.
    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> Self::Rebuilt<U>;

    /// Human-readable name used in diagnostics and errors.
    fn view_name(&self) -> &'static str;

    /// Refuse operations this view does not implement.
    fn check_supported(&self, _op: ChainOp) -> ScalacticResult<()> {
        Ok(())
    }

    fn to_list(&self) -> Vec<T> {
        self.chain().to_vec()
    }

    /// Materializes the chain to count it.
    fn len(&self) -> usize {
        self.to_list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn depth(&self) -> usize {
        self.chain().depth()
    }

    fn map<U, F>(&self, f: F) -> Self::Rebuilt<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.rebuild(self.chain().map(f))
    }

    fn flat_map<U, I, F>(&self, f: F) -> ScalacticResult<Self::Rebuilt<U>>
    where
        U: Element,
        I: IntoIterator<Item = U> + 'static,
        F: Fn(T) -> I + Send + Sync + 'static,
    {
        self.check_supported(ChainOp::FlatMap)?;
        Ok(self.rebuild(self.chain().flat_map(f)))
    }

    /// Keep the elements `pf` is defined at, transformed by it.
    fn collect<U, F>(&self, pf: F) -> Self::Rebuilt<U>
    where
        U: Element,
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        self.rebuild(self.chain().collect(pf))
    }

    fn filter<F>(&self, p: F) -> Self::Rebuilt<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rebuild(self.chain().filter(p))
    }

    /// Left-to-right running fold with an operator over the element type.
    fn scan<F>(&self, zero: T, op: F) -> Self::Rebuilt<T>
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.scan_left(zero, op)
    }

    fn scan_left<U, F>(&self, zero: U, op: F) -> Self::Rebuilt<U>
    where
        U: Element,
        F: Fn(U, T) -> U + Send + Sync + 'static,
    {
        self.rebuild(self.chain().scan_left(zero, op))
    }

    fn scan_right<U, F>(&self, zero: U, op: F) -> Self::Rebuilt<U>
    where
        U: Element,
        F: Fn(T, U) -> U + Send + Sync + 'static,
    {
        self.rebuild(self.chain().scan_right(zero, op))
    }

    /// Pair up with another view, truncating to the shorter one.
    fn zip<U, V>(&self, other: &V) -> Self::Rebuilt<(T, U)>
    where
        U: Element,
        V: LazyView<U>,
    {
        self.rebuild(self.chain().zip(other.chain()))
    }

    /// Pair up with another view, padding the shorter one with fillers.
    fn zip_all<U, V>(&self, other: &V, this_fill: T, that_fill: U) -> Self::Rebuilt<(T, U)>
    where
        U: Element,
        V: LazyView<U>,
    {
        self.rebuild(self.chain().zip_all(other.chain(), this_fill, that_fill))
    }

    fn zip_with_index(&self) -> Self::Rebuilt<(T, usize)> {
        self.rebuild(self.chain().zip_with_index())
    }

    /// Elements of `self` followed by elements of `other`.
    fn concat<V: LazyView<T>>(&self, other: &V) -> Self::Rebuilt<T> {
        self.rebuild(self.chain().concat(other.chain()))
    }

    fn unzip(&self) -> (Self::Rebuilt<T::Left>, Self::Rebuilt<T::Right>)
    where
        T: Pair,
    {
        let left = self
            .chain()
            .map_as(ChainOp::Unzip, |pair: T| pair.into_parts().0);
        let right = self
            .chain()
            .map_as(ChainOp::Unzip, |pair: T| pair.into_parts().1);
        (self.rebuild(left), self.rebuild(right))
    }

    #[allow(clippy::type_complexity)]
    fn unzip3(
        &self,
    ) -> (
        Self::Rebuilt<T::First>,
        Self::Rebuilt<T::Second>,
        Self::Rebuilt<T::Third>,
    )
    where
        T: Triple,
    {
        let first = self
            .chain()
            .map_as(ChainOp::Unzip, |t: T| t.into_parts().0);
        let second = self
            .chain()
            .map_as(ChainOp::Unzip, |t: T| t.into_parts().1);
        let third = self
            .chain()
            .map_as(ChainOp::Unzip, |t: T| t.into_parts().2);
        (
            self.rebuild(first),
            self.rebuild(second),
            self.rebuild(third),
        )
    }
}

pub(crate) fn unsupported(op: ChainOp, view: &'static str) -> ScalacticError {
    ScalacticError::unsupported(op.name(), view)
}
