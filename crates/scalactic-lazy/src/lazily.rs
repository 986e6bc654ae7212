//! Entry points from strict collections into their lazy views

use scalactic_core::{Bag, FastEquaSet, HashingEquality, OrderingEquality, TreeEquaSet};

use crate::{Element, LazyBag, LazyFastEquaSet, LazySeq, TreeEquaSetView};

/// Strict collections that can hand out a lazy view of themselves.
///
/// The view copies the current elements; later changes to the source are
/// not observed.
pub trait Lazily<T: Element> {
    type View;

    fn lazy(&self) -> Self::View;
}

impl<T: Element> Lazily<T> for [T] {
    type View = LazySeq<T>;

    fn lazy(&self) -> LazySeq<T> {
        LazySeq::from_vec(self.to_vec())
    }
}

impl<T: Element> Lazily<T> for Vec<T> {
    type View = LazySeq<T>;

    fn lazy(&self) -> LazySeq<T> {
        self.as_slice().lazy()
    }
}

impl<T: Element> Lazily<T> for Bag<T> {
    type View = LazyBag<T>;

    fn lazy(&self) -> LazyBag<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Element, E: HashingEquality<T>> Lazily<T> for FastEquaSet<T, E> {
    type View = LazyFastEquaSet<T>;

    fn lazy(&self) -> LazyFastEquaSet<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Element, E: OrderingEquality<T>> Lazily<T> for TreeEquaSet<T, E> {
    type View = TreeEquaSetView<T>;

    fn lazy(&self) -> TreeEquaSetView<T> {
        TreeEquaSetView::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LazyView;
    use scalactic_core::{DefaultEquality, EquaSet, NaturalOrdering};

    #[test]
    fn test_vec_and_slice_views() {
        let items = vec![1, 2, 3];
        assert_eq!(items.lazy().map(|n| n + 1).to_list(), vec![2, 3, 4]);
        assert_eq!(items[1..].lazy().to_list(), vec![2, 3]);
    }

    #[test]
    fn test_view_is_a_snapshot() {
        let mut items = vec![1, 2];
        let view = items.lazy();
        items.push(3);
        assert_eq!(view.to_list(), vec![1, 2]);
    }

    #[test]
    fn test_bag_view_round_trip() {
        let bag: Bag<char> = "abca".chars().collect();
        assert_eq!(bag.lazy().force(), bag);
    }

    #[test]
    fn test_set_views() {
        let fast = FastEquaSet::from_elements(DefaultEquality, vec![1, 1, 2]);
        assert_eq!(fast.lazy().len(), 2);

        let tree = TreeEquaSet::from_elements(NaturalOrdering, vec![3, 1, 2]);
        let view = tree.lazy();
        assert!(!view.is_derived());
        assert_eq!(view.to_list(), vec![1, 2, 3]);
    }
}
