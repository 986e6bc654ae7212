//! Tolerance and spreads for approximate numeric comparison
//!
//! `plus_or_minus(pivot, tolerance)` replaces the `pivot +- tolerance` sugar.
//! A spread contains every value within `tolerance` of `pivot`, inclusive.

use std::fmt;

use crate::{Equality, ScalacticError, ScalacticResult};

/// Numbers a spread can be built over.
pub trait Numeric: Copy + PartialOrd + fmt::Display {
    /// Strictly greater than zero (false for NaN).
    fn is_positive(self) -> bool;

    /// Whether `self` lies within `tolerance` of `pivot`, inclusive.
    fn within(self, pivot: Self, tolerance: Self) -> bool;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_positive(self) -> bool {
                    self > 0
                }

                #[inline]
                fn within(self, pivot: Self, tolerance: Self) -> bool {
                    // i128 holds the difference of any two 64-bit values
                    (self as i128 - pivot as i128).abs() <= tolerance as i128
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_positive(self) -> bool {
                    self > 0.0
                }

                #[inline]
                fn within(self, pivot: Self, tolerance: Self) -> bool {
                    self >= pivot - tolerance && self <= pivot + tolerance
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);

fn check_tolerance<T: Numeric>(tolerance: T) -> ScalacticResult<()> {
    if tolerance.is_positive() {
        Ok(())
    } else {
        Err(ScalacticError::InvalidArgument(format!(
            "{tolerance} passed to +- was zero or negative. Must be a positive non-zero number."
        )))
    }
}

/// A pivot value plus an allowed deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread<T> {
    pivot: T,
    tolerance: T,
}

impl<T: Numeric> Spread<T> {
    pub fn new(pivot: T, tolerance: T) -> ScalacticResult<Self> {
        check_tolerance(tolerance)?;
        Ok(Spread { pivot, tolerance })
    }

    pub fn pivot(&self) -> T {
        self.pivot
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Whether `n` lies in `[pivot - tolerance, pivot + tolerance]`.
    pub fn is_within(&self, n: T) -> bool {
        n.within(self.pivot, self.tolerance)
    }
}

impl<T: Numeric> fmt::Display for Spread<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +- {}", self.pivot, self.tolerance)
    }
}

/// Build the spread `pivot +- tolerance`.
///
/// ```rust
/// use scalactic_core::plus_or_minus;
///
/// let spread = plus_or_minus(1.0, 0.1).unwrap();
/// assert!(spread.is_within(1.05));
/// assert!(plus_or_minus(1.0, -0.1).is_err());
/// ```
pub fn plus_or_minus<T: Numeric>(pivot: T, tolerance: T) -> ScalacticResult<Spread<T>> {
    Spread::new(pivot, tolerance)
}

/// An equality that treats two numbers as equal when within a tolerance.
///
/// Not a hashing equality: tolerance is not transitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TolerantEquality<T> {
    tolerance: T,
}

impl<T: Numeric> TolerantEquality<T> {
    pub fn tolerance(&self) -> T {
        self.tolerance
    }
}

/// `b` must lie in the spread `a +- tolerance`.
impl<T: Numeric> Equality<T> for TolerantEquality<T> {
    fn are_equal(&self, a: &T, b: &T) -> bool {
        b.within(*a, self.tolerance)
    }
}

pub fn tolerant_equality<T: Numeric>(tolerance: T) -> ScalacticResult<TolerantEquality<T>> {
    check_tolerance(tolerance)?;
    Ok(TolerantEquality { tolerance })
}
