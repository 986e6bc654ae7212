//! Every - a non-empty sequence
//!
//! Used as the accumulation container for bad values: an `Every` always
//! holds at least one element, so an accumulated failure is never empty.

use std::fmt;

use crate::{ScalacticError, ScalacticResult};

/// A sequence with at least one element.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Every<T> {
    elements: Vec<T>,
}

impl<T> Every<T> {
    /// A single-element `Every`.
    pub fn one(element: T) -> Self {
        Every {
            elements: vec![element],
        }
    }

    /// A head followed by any number of further elements.
    pub fn of(head: T, tail: impl IntoIterator<Item = T>) -> Self {
        let mut elements = vec![head];
        elements.extend(tail);
        Every { elements }
    }

    pub fn try_from_vec(elements: Vec<T>) -> ScalacticResult<Self> {
        if elements.is_empty() {
            return Err(ScalacticError::EmptyEvery);
        }
        Ok(Every { elements })
    }

    pub fn head(&self) -> &T {
        &self.elements[0]
    }

    pub fn last(&self) -> &T {
        &self.elements[self.elements.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; present for API symmetry with other collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether this holds exactly one element.
    pub fn is_one(&self) -> bool {
        self.elements.len() == 1
    }

    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Append all elements of another `Every`.
    pub fn append(&mut self, other: Every<T>) {
        self.elements.extend(other.elements);
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Every<U> {
        Every {
            elements: self.elements.into_iter().map(f).collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> TryFrom<Vec<T>> for Every<T> {
    type Error = ScalacticError;

    fn try_from(elements: Vec<T>) -> ScalacticResult<Self> {
        Every::try_from_vec(elements)
    }
}

impl<T> IntoIterator for Every<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Every<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

fn write_elements<T>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    each: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    let name = if elements.len() == 1 { "One" } else { "Many" };
    write!(f, "{name}(")?;
    for (i, e) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        each(f, e)?;
    }
    write!(f, ")")
}

impl<T: fmt::Debug> fmt::Debug for Every<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, &self.elements, |f, e| write!(f, "{e:?}"))
    }
}

impl<T: fmt::Display> fmt::Display for Every<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, &self.elements, |f, e| write!(f, "{e}"))
    }
}
