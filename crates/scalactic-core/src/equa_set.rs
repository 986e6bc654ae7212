//! Equa-sets - sets whose membership is decided by a supplied equality
//!
//! Two flavours:
//! - `FastEquaSet`: hash-bucketed by a `HashingEquality`, insertion ordered
//! - `TreeEquaSet`: kept sorted by an `OrderingEquality`

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::{HashingEquality, OrderingEquality};

/// A set of `T` under a caller-supplied notion of equality.
pub trait EquaSet<T> {
    /// The capability deciding membership.
    type Equality;

    fn with_equality(equality: Self::Equality) -> Self
    where
        Self: Sized;

    fn equality(&self) -> &Self::Equality;

    /// Insert `item` unless an equal element is present. Returns whether it was added.
    fn insert(&mut self, item: T) -> bool;

    fn contains(&self, item: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in the set's iteration order.
    fn elements(&self) -> &[T];

    /// Build a set from elements; later duplicates are dropped.
    fn from_elements<I>(equality: Self::Equality, items: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_equality(equality);
        let mut dropped = 0usize;
        for item in items {
            if !set.insert(item) {
                dropped += 1;
            }
        }
        tracing::debug!(kept = set.len(), dropped, "built equa-set");
        set
    }
}

/// Hash-bucketed equa-set preserving insertion order.
#[derive(Clone)]
pub struct FastEquaSet<T, E> {
    equality: E,
    items: Vec<T>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl<T, E: HashingEquality<T>> FastEquaSet<T, E> {
    pub fn new(equality: E) -> Self {
        FastEquaSet {
            equality,
            items: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    fn find(&self, item: &T) -> Option<usize> {
        let hash = self.equality.hash_code_for(item);
        self.buckets.get(&hash).and_then(|slots| {
            slots
                .iter()
                .copied()
                .find(|&i| self.equality.are_equal(&self.items[i], item))
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone, E: HashingEquality<T> + Clone> FastEquaSet<T, E> {
    pub fn union(&self, other: &Self) -> Self {
        Self::from_elements(
            self.equality.clone(),
            self.items.iter().chain(other.items.iter()).cloned(),
        )
    }

    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_elements(
            self.equality.clone(),
            self.items.iter().filter(|i| other.contains(i)).cloned(),
        )
    }

    pub fn diff(&self, other: &Self) -> Self {
        Self::from_elements(
            self.equality.clone(),
            self.items.iter().filter(|i| !other.contains(i)).cloned(),
        )
    }
}

impl<T, E: HashingEquality<T>> EquaSet<T> for FastEquaSet<T, E> {
    type Equality = E;

    fn with_equality(equality: E) -> Self {
        FastEquaSet::new(equality)
    }

    fn equality(&self) -> &E {
        &self.equality
    }

    fn insert(&mut self, item: T) -> bool {
        if self.find(&item).is_some() {
            return false;
        }
        let hash = self.equality.hash_code_for(&item);
        self.buckets.entry(hash).or_default().push(self.items.len());
        self.items.push(item);
        true
    }

    fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn elements(&self) -> &[T] {
        &self.items
    }
}

/// Equal when both sets hold equal elements, regardless of order.
impl<T, E: HashingEquality<T>> PartialEq for FastEquaSet<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|i| other.contains(i))
    }
}

impl<T: fmt::Debug, E> fmt::Debug for FastEquaSet<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FastEquaSet")?;
        f.debug_set().entries(self.items.iter()).finish()
    }
}

/// Sorted equa-set.
#[derive(Clone)]
pub struct TreeEquaSet<T, E> {
    equality: E,
    items: Vec<T>,
}

impl<T, E: OrderingEquality<T>> TreeEquaSet<T, E> {
    pub fn new(equality: E) -> Self {
        TreeEquaSet {
            equality,
            items: Vec::new(),
        }
    }

    fn search(&self, item: &T) -> Result<usize, usize> {
        self.items
            .binary_search_by(|probe| self.equality.compare(probe, item))
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Elements ordered at or after `from` and strictly before `until`.
    pub fn range(&self, from: &T, until: &T) -> &[T] {
        let start = self.search(from).unwrap_or_else(|i| i);
        let end = self.search(until).unwrap_or_else(|i| i);
        if start >= end {
            &[]
        } else {
            &self.items[start..end]
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, E: OrderingEquality<T>> EquaSet<T> for TreeEquaSet<T, E> {
    type Equality = E;

    fn with_equality(equality: E) -> Self {
        TreeEquaSet::new(equality)
    }

    fn equality(&self) -> &E {
        &self.equality
    }

    fn insert(&mut self, item: T) -> bool {
        match self.search(&item) {
            Ok(_) => false,
            Err(at) => {
                self.items.insert(at, item);
                true
            }
        }
    }

    fn contains(&self, item: &T) -> bool {
        self.search(item).is_ok()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn elements(&self) -> &[T] {
        &self.items
    }
}

impl<T, E: OrderingEquality<T>> PartialEq for TreeEquaSet<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| self.equality.compare(a, b) == Ordering::Equal)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for TreeEquaSet<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeEquaSet")?;
        f.debug_set().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{after_being, lower_cased, DefaultEquality, NaturalOrdering};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fast_set_dedups_by_equality() {
        let eq = after_being(lower_cased(), DefaultEquality);
        let set = FastEquaSet::from_elements(eq, words(&["Hi", "hi", "HI", "there"]));
        assert_eq!(set.len(), 2);
        assert_eq!(set.elements(), &words(&["Hi", "there"])[..]);
        assert!(set.contains(&"THERE".to_string()));
    }

    #[test]
    fn test_fast_set_algebra() {
        let a = FastEquaSet::from_elements(DefaultEquality, vec![1, 2, 3]);
        let b = FastEquaSet::from_elements(DefaultEquality, vec![3, 4]);
        assert_eq!(a.union(&b).into_vec(), vec![1, 2, 3, 4]);
        assert_eq!(a.intersect(&b).into_vec(), vec![3]);
        assert_eq!(a.diff(&b).into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_fast_set_equality_ignores_order() {
        let a = FastEquaSet::from_elements(DefaultEquality, vec![1, 2, 3]);
        let b = FastEquaSet::from_elements(DefaultEquality, vec![3, 1, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tree_set_sorted_and_deduped() {
        let set = TreeEquaSet::from_elements(NaturalOrdering, vec![5, 1, 4, 1, 5, 9]);
        assert_eq!(set.elements(), &[1, 4, 5, 9]);
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&9));
        assert_eq!(set.range(&2, &9), &[4, 5]);
        assert!(set.range(&9, &2).is_empty());
    }

    #[test]
    fn test_tree_set_insert_reports_duplicates() {
        let mut set = TreeEquaSet::new(NaturalOrdering);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(2));
        assert_eq!(set.into_vec(), vec![2, 3]);
    }
}
