//! LazySeq - an ordered lazy sequence

use std::fmt;

use crate::{Element, LazyChain, LazyView};

/// An ordered, lazily transformed sequence. Materializes to a `Vec`.
pub struct LazySeq<T> {
    chain: LazyChain<T>,
}

impl<T: Element> LazySeq<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        LazySeq {
            chain: LazyChain::from_vec(items),
        }
    }

    pub fn empty() -> Self {
        LazySeq::from_vec(Vec::new())
    }

    pub fn to_strict(&self) -> Vec<T> {
        self.to_list()
    }

    pub fn force(&self) -> Vec<T> {
        self.to_list()
    }
}

impl<T: Element> LazyView<T> for LazySeq<T> {
    type Rebuilt<U: Element> = LazySeq<U>;

    fn chain(&self) -> &LazyChain<T> {
        &self.chain
    }

    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> LazySeq<U> {
        LazySeq { chain }
    }

    fn view_name(&self) -> &'static str {
        "LazySeq"
    }
}

impl<T: Element> FromIterator<T> for LazySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazySeq::from_vec(iter.into_iter().collect())
    }
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        LazySeq {
            chain: self.chain.clone(),
        }
    }
}

impl<T: Element> fmt::Debug for LazySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySeq")
            .field("op", &self.chain.op())
            .field("depth", &self.chain.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_zip_with_index() {
        let seq = LazySeq::from_vec(vec![1, 2, 3]);
        assert_eq!(seq.zip_with_index().to_list(), vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_scan_running_sum() {
        let seq = LazySeq::from_vec(vec![1, 2, 3]);
        assert_eq!(seq.scan(0, |a, b| a + b).to_list(), vec![0, 1, 3, 6]);
    }

    #[test]
    fn test_collect_drops_undefined() {
        let seq: LazySeq<&str> = ["1", "two", "3"].into_iter().collect();
        let parsed = seq.collect(|s| s.parse::<i32>().ok());
        assert_eq!(parsed.to_list(), vec![1, 3]);
    }

    #[test]
    fn test_flat_map_concatenates_in_order() {
        let seq = LazySeq::from_vec(vec![1, 2, 3]);
        let expanded = seq.flat_map(|n| vec![n; n as usize]).unwrap();
        assert_eq!(expanded.to_list(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_zip_all_pads_shorter_side() {
        let a = LazySeq::from_vec(vec![1, 2, 3]);
        let b = LazySeq::from_vec(vec!["a"]);
        assert_eq!(
            a.zip_all(&b, 0, "-").to_list(),
            vec![(1, "a"), (2, "-"), (3, "-")]
        );
        assert_eq!(
            b.zip_all(&a, "-", 0).to_list(),
            vec![("a", 1), ("-", 2), ("-", 3)]
        );
    }

    #[test]
    fn test_unzip_and_unzip3() {
        let pairs = LazySeq::from_vec(vec![(1, 'a'), (2, 'b')]);
        let (nums, chars) = pairs.unzip();
        assert_eq!(nums.to_list(), vec![1, 2]);
        assert_eq!(chars.to_list(), vec!['a', 'b']);

        let triples = LazySeq::from_vec(vec![(1, "x", true), (2, "y", false)]);
        let (a, b, c) = triples.unzip3();
        assert_eq!(a.to_list(), vec![1, 2]);
        assert_eq!(b.to_list(), vec!["x", "y"]);
        assert_eq!(c.to_list(), vec![true, false]);
    }

    #[test]
    fn test_every_materialization_recomputes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let seq = LazySeq::from_vec(vec![1, 2, 3]).map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n * 2
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(seq.force(), vec![2, 4, 6]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        assert_eq!(seq.to_strict(), vec![2, 4, 6]);
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_concat_and_filter() {
        let a = LazySeq::from_vec(vec![1, 2]);
        let b = LazySeq::from_vec(vec![3, 4]);
        let evens = a.concat(&b).filter(|n| n % 2 == 0);
        assert_eq!(evens.to_list(), vec![2, 4]);
        assert_eq!(evens.len(), 2);
        assert!(LazySeq::<i32>::empty().is_empty());
    }

    proptest! {
        #[test]
        fn prop_map_is_functorial(items in prop::collection::vec(any::<i32>(), 0..50)) {
            let f = |n: i32| n.wrapping_mul(3).wrapping_sub(1);
            let seq = LazySeq::from_vec(items.clone());
            let expected: Vec<i32> = items.into_iter().map(f).collect();
            prop_assert_eq!(seq.map(f).to_list(), expected);
        }

        #[test]
        fn prop_zip_lengths(
            a in prop::collection::vec(any::<u8>(), 0..30),
            b in prop::collection::vec(any::<u8>(), 0..30),
        ) {
            let (la, lb) = (a.len(), b.len());
            let sa = LazySeq::from_vec(a);
            let sb = LazySeq::from_vec(b);
            prop_assert_eq!(sa.zip(&sb).len(), la.min(lb));
            prop_assert_eq!(sa.zip_all(&sb, 0, 0).len(), la.max(lb));
        }

        #[test]
        fn prop_scan_left_length_and_head(items in prop::collection::vec(any::<i64>(), 0..30), zero in any::<i64>()) {
            let n = items.len();
            let scanned = LazySeq::from_vec(items).scan_left(zero, |acc, x| acc.wrapping_add(x)).to_list();
            prop_assert_eq!(scanned.len(), n + 1);
            prop_assert_eq!(scanned[0], zero);
        }
    }
}
