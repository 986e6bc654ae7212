//! Bag - an unordered collection that keeps duplicates

use std::fmt;

use crate::Equality;

/// A multiset. Two bags are equal when every element occurs equally often.
#[derive(Clone, Default)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T> Bag<T> {
    pub fn new() -> Self {
        Bag { items: Vec::new() }
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// How many elements equal `item` under `equality`.
    pub fn count_by<E: Equality<T>>(&self, item: &T, equality: &E) -> usize {
        self.items
            .iter()
            .filter(|i| equality.are_equal(i, item))
            .count()
    }

    /// Multiset equality under a supplied equality.
    pub fn equal_by<E: Equality<T>>(&self, other: &Bag<T>, equality: &E) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut unmatched: Vec<&T> = other.items.iter().collect();
        for item in &self.items {
            match unmatched.iter().position(|o| equality.are_equal(item, o)) {
                Some(at) => {
                    unmatched.swap_remove(at);
                }
                None => return false,
            }
        }
        true
    }
}

impl<T: PartialEq> Bag<T> {
    pub fn count_of(&self, item: &T) -> usize {
        self.items.iter().filter(|i| *i == item).count()
    }
}

impl<T> From<Vec<T>> for Bag<T> {
    fn from(items: Vec<T>) -> Self {
        Bag { items }
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Bag {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: PartialEq> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_by(other, &crate::DefaultEquality)
    }
}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bag")?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}
