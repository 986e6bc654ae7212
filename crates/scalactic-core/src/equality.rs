//! Equality, equivalence and ordering capabilities
//!
//! A capability value decides what "equal" means for a type, independently
//! of the type's own `PartialEq`. The hierarchy is:
//!
//! ```text
//! Equality<A, B>          are_equal(a, b), B may differ from A
//!     │
//! HashingEquality<T>      + hash_code_for(a), consistent with are_equal
//!     │
//! OrderingEquality<T>     + compare(a, b), Equal exactly when are_equal
//! ```

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{ScalacticError, ScalacticResult};

/// Decides whether a left value of type `A` equals a right value of type `B`.
///
/// The right-hand side may be an unrelated type, mirroring `PartialEq<Rhs>`.
pub trait Equality<A: ?Sized, B: ?Sized = A> {
    fn are_equal(&self, a: &A, b: &B) -> bool;
}

/// Symmetric equality over a single type.
///
/// Every `Equality<T>` is an `Equivalence<T>`.
pub trait Equivalence<T: ?Sized> {
    fn are_equivalent(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, E: Equality<T> + ?Sized> Equivalence<T> for E {
    #[inline]
    fn are_equivalent(&self, a: &T, b: &T) -> bool {
        self.are_equal(a, b)
    }
}

/// An equality that can also hash.
///
/// Contract: `are_equal(a, b)` implies `hash_code_for(a) == hash_code_for(b)`.
pub trait HashingEquality<T: ?Sized>: Equality<T> {
    fn hash_code_for(&self, a: &T) -> u64;
}

/// A hashing equality that also totally orders its values.
///
/// Contract: `compare(a, b) == Ordering::Equal` exactly when `are_equal(a, b)`.
pub trait OrderingEquality<T: ?Sized>: HashingEquality<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    fn lteq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    fn gteq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// The smaller of two values; `a` wins ties.
    fn min<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.lteq(a, b) {
            a
        } else {
            b
        }
    }

    /// The larger of two values; `a` wins ties.
    fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.gteq(a, b) {
            a
        } else {
            b
        }
    }

    /// Compare two possibly-absent values.
    ///
    /// Ordering against an absent value is always an error.
    fn try_compare(&self, a: Option<&T>, b: Option<&T>) -> ScalacticResult<Ordering> {
        match (a, b) {
            (Some(a), Some(b)) => Ok(self.compare(a, b)),
            _ => Err(ScalacticError::NullComparison),
        }
    }
}

// Capabilities passed by reference or shared behind an Arc.

impl<A: ?Sized, B: ?Sized, E: Equality<A, B> + ?Sized> Equality<A, B> for &E {
    #[inline]
    fn are_equal(&self, a: &A, b: &B) -> bool {
        (**self).are_equal(a, b)
    }
}

impl<T: ?Sized, E: HashingEquality<T> + ?Sized> HashingEquality<T> for &E {
    #[inline]
    fn hash_code_for(&self, a: &T) -> u64 {
        (**self).hash_code_for(a)
    }
}

impl<T: ?Sized, E: OrderingEquality<T> + ?Sized> OrderingEquality<T> for &E {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<A: ?Sized, B: ?Sized, E: Equality<A, B> + ?Sized> Equality<A, B> for Arc<E> {
    #[inline]
    fn are_equal(&self, a: &A, b: &B) -> bool {
        (**self).are_equal(a, b)
    }
}

impl<T: ?Sized, E: HashingEquality<T> + ?Sized> HashingEquality<T> for Arc<E> {
    #[inline]
    fn hash_code_for(&self, a: &T) -> u64 {
        (**self).hash_code_for(a)
    }
}

impl<T: ?Sized, E: OrderingEquality<T> + ?Sized> OrderingEquality<T> for Arc<E> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Hash a value with the standard library's default hasher.
pub fn default_hash<T: Hash + ?Sized>(a: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    a.hash(&mut hasher);
    hasher.finish()
}

/// Equality by the type's own `PartialEq`, hashing by its own `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultEquality;

impl<A: PartialEq<B> + ?Sized, B: ?Sized> Equality<A, B> for DefaultEquality {
    #[inline]
    fn are_equal(&self, a: &A, b: &B) -> bool {
        a == b
    }
}

impl<T: PartialEq + Hash + ?Sized> HashingEquality<T> for DefaultEquality {
    #[inline]
    fn hash_code_for(&self, a: &T) -> u64 {
        default_hash(a)
    }
}

/// Equality, hashing and ordering by the type's own `Ord` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrdering;

impl<T: Ord + ?Sized> Equality<T> for NaturalOrdering {
    #[inline]
    fn are_equal(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Equal
    }
}

impl<T: Ord + Hash + ?Sized> HashingEquality<T> for NaturalOrdering {
    #[inline]
    fn hash_code_for(&self, a: &T) -> u64 {
        default_hash(a)
    }
}

impl<T: Ord + Hash + ?Sized> OrderingEquality<T> for NaturalOrdering {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An equality decided by a closure.
#[derive(Clone, Copy)]
pub struct FnEquality<F> {
    f: F,
}

impl<F> FnEquality<F> {
    pub fn new(f: F) -> Self {
        FnEquality { f }
    }
}

impl<A: ?Sized, B: ?Sized, F: Fn(&A, &B) -> bool> Equality<A, B> for FnEquality<F> {
    #[inline]
    fn are_equal(&self, a: &A, b: &B) -> bool {
        (self.f)(a, b)
    }
}

impl<F> fmt::Debug for FnEquality<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnEquality")
    }
}

/// Compare two values under an explicitly supplied equality.
///
/// ```rust
/// use scalactic_core::{equal_by, FnEquality};
///
/// let same_len = FnEquality::new(|a: &str, b: &str| a.len() == b.len());
/// assert!(equal_by("abc", "xyz", &same_len));
/// ```
pub fn equal_by<A, B, E>(a: &A, b: &B, equality: &E) -> bool
where
    A: ?Sized,
    B: ?Sized,
    E: Equality<A, B> + ?Sized,
{
    equality.are_equal(a, b)
}

/// An equality chosen explicitly for one comparison site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decided<E> {
    equality: E,
}

impl<E> Decided<E> {
    pub fn equal<A: ?Sized, B: ?Sized>(&self, a: &A, b: &B) -> bool
    where
        E: Equality<A, B>,
    {
        self.equality.are_equal(a, b)
    }

    pub fn not_equal<A: ?Sized, B: ?Sized>(&self, a: &A, b: &B) -> bool
    where
        E: Equality<A, B>,
    {
        !self.equality.are_equal(a, b)
    }

    pub fn into_inner(self) -> E {
        self.equality
    }
}

impl<A: ?Sized, B: ?Sized, E: Equality<A, B>> Equality<A, B> for Decided<E> {
    #[inline]
    fn are_equal(&self, a: &A, b: &B) -> bool {
        self.equality.are_equal(a, b)
    }
}

/// Wrap `equality` for a single explicit comparison.
///
/// ```rust
/// use scalactic_core::{after_being, decided_by, lower_cased, DefaultEquality};
///
/// let by_case = decided_by(after_being(lower_cased(), DefaultEquality));
/// assert!(by_case.equal(&"Hi".to_string(), &"HI".to_string()));
/// ```
pub fn decided_by<E>(equality: E) -> Decided<E> {
    Decided { equality }
}
