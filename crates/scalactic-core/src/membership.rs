//! Membership - a set described by a predicate
//!
//! Memberships may be infinite ("all even numbers"), so they only answer
//! `contains` and combine with set algebra; they cannot be enumerated.

use std::fmt;
use std::sync::Arc;

use crate::Equality;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A set defined by a membership predicate.
pub struct Membership<T> {
    predicate: Predicate<T>,
}

impl<T: 'static> Membership<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Membership {
            predicate: Arc::new(predicate),
        }
    }

    /// Members are the values equal, under `equality`, to one of `elements`.
    pub fn of<E>(elements: Vec<T>, equality: E) -> Self
    where
        T: Send + Sync,
        E: Equality<T> + Send + Sync + 'static,
    {
        Membership::new(move |a| elements.iter().any(|e| equality.are_equal(a, e)))
    }

    pub fn contains(&self, a: &T) -> bool {
        (self.predicate)(a)
    }

    pub fn complement(&self) -> Membership<T> {
        let p = Arc::clone(&self.predicate);
        Membership::new(move |a| !p(a))
    }

    pub fn union(&self, other: &Membership<T>) -> Membership<T> {
        let (p, q) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Membership::new(move |a| p(a) || q(a))
    }

    pub fn intersect(&self, other: &Membership<T>) -> Membership<T> {
        let (p, q) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Membership::new(move |a| p(a) && q(a))
    }

    /// Members of `self` that are not members of `other`.
    pub fn diff(&self, other: &Membership<T>) -> Membership<T> {
        let (p, q) = (Arc::clone(&self.predicate), Arc::clone(&other.predicate));
        Membership::new(move |a| p(a) && !q(a))
    }
}

impl<T> Clone for Membership<T> {
    fn clone(&self) -> Self {
        Membership {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Membership<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<membership>")
    }
}
