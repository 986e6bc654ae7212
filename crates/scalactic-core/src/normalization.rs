//! Normalization and uniformity
//!
//! A normalization maps a value to a canonical form before it is compared.
//! A uniformity additionally knows how to normalize a right-hand value of
//! unknown type, so asymmetric comparisons normalize both sides.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use crate::{Equality, HashingEquality, OrderingEquality};

/// Transforms a value into its canonical form.
pub trait Normalization<T> {
    fn normalized(&self, a: &T) -> T;

    /// Apply `self`, then `next`.
    fn and_then<N>(self, next: N) -> AndThen<Self, N>
    where
        Self: Sized,
        N: Normalization<T>,
    {
        AndThen { first: self, second: next }
    }

    /// Build an equality that normalizes both sides before delegating to `inner`.
    fn to_equality<E>(self, inner: E) -> NormalizingEquality<Self, E>
    where
        Self: Sized,
        E: Equality<T>,
    {
        NormalizingEquality::new(self, inner)
    }
}

/// Result of asking a uniformity to normalize a value of unknown type.
#[derive(Debug)]
pub enum Uniformed<'a, T> {
    /// The value was of a handled type and has been normalized.
    Normalized(T),
    /// The value was not handled and is returned untouched.
    Same(&'a dyn Any),
}

/// A normalization that can also normalize right-hand values of unknown type.
pub trait Uniformity<T: 'static>: Normalization<T> {
    fn normalized_can_handle(&self, b: &dyn Any) -> bool;

    fn normalized_or_same<'a>(&self, b: &'a dyn Any) -> Uniformed<'a, T>;
}

/// A normalization over strings.
///
/// Implementors get a `Uniformity<String>` that handles both `String` and
/// `&'static str` right-hand values.
pub trait AbstractStringUniformity: Normalization<String> {}

impl<U: AbstractStringUniformity> Uniformity<String> for U {
    fn normalized_can_handle(&self, b: &dyn Any) -> bool {
        b.is::<String>() || b.is::<&'static str>()
    }

    fn normalized_or_same<'a>(&self, b: &'a dyn Any) -> Uniformed<'a, String> {
        if let Some(s) = b.downcast_ref::<String>() {
            Uniformed::Normalized(self.normalized(s))
        } else if let Some(s) = b.downcast_ref::<&'static str>() {
            Uniformed::Normalized(self.normalized(&(*s).to_string()))
        } else {
            Uniformed::Same(b)
        }
    }
}

/// Two normalizations applied in sequence.
#[derive(Debug, Clone, Copy)]
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<T, A: Normalization<T>, B: Normalization<T>> Normalization<T> for AndThen<A, B> {
    fn normalized(&self, a: &T) -> T {
        self.second.normalized(&self.first.normalized(a))
    }
}

impl<A: AbstractStringUniformity, B: AbstractStringUniformity> AbstractStringUniformity
    for AndThen<A, B>
{
}

/// A normalization defined by a closure.
#[derive(Clone, Copy)]
pub struct FnNormalization<F> {
    f: F,
}

impl<F> FnNormalization<F> {
    pub fn new(f: F) -> Self {
        FnNormalization { f }
    }
}

impl<T, F: Fn(&T) -> T> Normalization<T> for FnNormalization<F> {
    fn normalized(&self, a: &T) -> T {
        (self.f)(a)
    }
}

impl<F> fmt::Debug for FnNormalization<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnNormalization")
    }
}

/// Lower-cases strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCased;

impl Normalization<String> for LowerCased {
    fn normalized(&self, a: &String) -> String {
        a.to_lowercase()
    }
}

impl AbstractStringUniformity for LowerCased {}

/// Upper-cases strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCased;

impl Normalization<String> for UpperCased {
    fn normalized(&self, a: &String) -> String {
        a.to_uppercase()
    }
}

impl AbstractStringUniformity for UpperCased {}

/// Strips leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trimmed;

impl Normalization<String> for Trimmed {
    fn normalized(&self, a: &String) -> String {
        a.trim().to_string()
    }
}

impl AbstractStringUniformity for Trimmed {}

pub fn lower_cased() -> LowerCased {
    LowerCased
}

pub fn upper_cased() -> UpperCased {
    UpperCased
}

pub fn trimmed() -> Trimmed {
    Trimmed
}

/// An equality that normalizes both sides before delegating.
#[derive(Debug, Clone, Copy)]
pub struct NormalizingEquality<N, E> {
    normalization: N,
    inner: E,
}

impl<N, E> NormalizingEquality<N, E> {
    pub fn new(normalization: N, inner: E) -> Self {
        NormalizingEquality {
            normalization,
            inner,
        }
    }

    pub fn normalization(&self) -> &N {
        &self.normalization
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Compare against a right-hand value of unknown type.
    ///
    /// A right-hand value the uniformity cannot handle is never equal.
    pub fn are_equal_any<T>(&self, a: &T, b: &dyn Any) -> bool
    where
        T: 'static,
        N: Uniformity<T>,
        E: Equality<T>,
    {
        match self.normalization.normalized_or_same(b) {
            Uniformed::Normalized(nb) => {
                self.inner.are_equal(&self.normalization.normalized(a), &nb)
            }
            Uniformed::Same(_) => false,
        }
    }
}

impl<T, N: Normalization<T>, E: Equality<T>> Equality<T> for NormalizingEquality<N, E> {
    fn are_equal(&self, a: &T, b: &T) -> bool {
        self.inner.are_equal(
            &self.normalization.normalized(a),
            &self.normalization.normalized(b),
        )
    }
}

impl<T, N: Normalization<T>, E: HashingEquality<T>> HashingEquality<T>
    for NormalizingEquality<N, E>
{
    fn hash_code_for(&self, a: &T) -> u64 {
        self.inner.hash_code_for(&self.normalization.normalized(a))
    }
}

impl<T, N: Normalization<T>, E: OrderingEquality<T>> OrderingEquality<T>
    for NormalizingEquality<N, E>
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(
            &self.normalization.normalized(a),
            &self.normalization.normalized(b),
        )
    }
}

/// Build the equality "`inner`, after being normalized by `normalization`".
///
/// ```rust
/// use scalactic_core::{after_being, lower_cased, DefaultEquality, Equality};
///
/// let eq = after_being(lower_cased(), DefaultEquality);
/// assert!(eq.are_equal(&"Hello".to_string(), &"hELLO".to_string()));
/// ```
pub fn after_being<N, E>(normalization: N, inner: E) -> NormalizingEquality<N, E> {
    NormalizingEquality::new(normalization, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefaultEquality, NaturalOrdering};

    #[test]
    fn test_lower_cased_equality() {
        let eq = lower_cased().to_equality(DefaultEquality);
        assert!(eq.are_equal(&"HeLLo".to_string(), &"hello".to_string()));
        assert!(!eq.are_equal(&"hello".to_string(), &"help".to_string()));
    }

    #[test]
    fn test_composed_normalization() {
        let norm = trimmed().and_then(upper_cased());
        assert_eq!(norm.normalized(&"  MiXed  ".to_string()), "MIXED");
    }

    #[test]
    fn test_closure_normalization() {
        let abs = FnNormalization::new(|n: &i32| n.abs());
        let eq = after_being(abs, NaturalOrdering);
        assert!(eq.are_equal(&-4, &4));
        assert_eq!(eq.compare(&-5, &4), Ordering::Greater);
        assert_eq!(eq.hash_code_for(&-4), eq.hash_code_for(&4));
    }

    #[test]
    fn test_string_uniformity_handles_str_and_string() {
        let u = lower_cased();
        assert!(u.normalized_can_handle(&String::from("A")));
        assert!(u.normalized_can_handle(&"A"));
        assert!(!u.normalized_can_handle(&1_i32));

        match u.normalized_or_same(&"ABC") {
            Uniformed::Normalized(s) => assert_eq!(s, "abc"),
            Uniformed::Same(_) => panic!("&str should be handled"),
        }
        match u.normalized_or_same(&7_u8) {
            Uniformed::Same(v) => assert_eq!(v.downcast_ref::<u8>(), Some(&7)),
            Uniformed::Normalized(_) => panic!("u8 should not be handled"),
        }
    }

    #[test]
    fn test_are_equal_any() {
        let eq = after_being(trimmed().and_then(lower_cased()), DefaultEquality);
        let left = " Scala ".to_string();
        assert!(eq.are_equal_any(&left, &"scala"));
        assert!(eq.are_equal_any(&left, &String::from("SCALA  ")));
        assert!(!eq.are_equal_any(&left, &42_i64));
    }

    #[test]
    fn test_hash_consistent_under_normalization() {
        let eq = after_being(lower_cased(), DefaultEquality);
        let a = "ABC".to_string();
        let b = "abc".to_string();
        assert!(eq.are_equal(&a, &b));
        assert_eq!(eq.hash_code_for(&a), eq.hash_code_for(&b));
    }
}
