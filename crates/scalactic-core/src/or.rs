//! Or - a good value or a bad one
//!
//! `Or<G, B>` is either `Good(G)` or `Bad(B)`. Unlike `Result`, the bad side
//! is not an "error" by convention, and with an `Every` on the bad side
//! failures accumulate instead of short-circuiting.

use std::fmt;

use crate::{Every, Mitigator, Present, ScalacticError, ScalacticResult};

/// A good value or a bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Or<G, B> {
    Good(G),
    Bad(B),
}

/// Outcome of a validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation<E> {
    Pass,
    Fail(E),
}

impl<E> Validation<E> {
    pub fn is_pass(&self) -> bool {
        matches!(self, Validation::Pass)
    }

    /// First failure wins.
    pub fn and(self, other: Validation<E>) -> Validation<E> {
        match self {
            Validation::Pass => other,
            fail => fail,
        }
    }
}

impl<G, B> Or<G, B> {
    pub fn is_good(&self) -> bool {
        matches!(self, Or::Good(_))
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Or::Bad(_))
    }

    /// The good value, if any.
    pub fn good(self) -> Option<G> {
        match self {
            Or::Good(g) => Some(g),
            Or::Bad(_) => None,
        }
    }

    /// The bad value, if any.
    pub fn bad(self) -> Option<B> {
        match self {
            Or::Good(_) => None,
            Or::Bad(b) => Some(b),
        }
    }

    pub fn as_ref(&self) -> Or<&G, &B> {
        match self {
            Or::Good(g) => Or::Good(g),
            Or::Bad(b) => Or::Bad(b),
        }
    }

    pub fn map<H>(self, f: impl FnOnce(G) -> H) -> Or<H, B> {
        match self {
            Or::Good(g) => Or::Good(f(g)),
            Or::Bad(b) => Or::Bad(b),
        }
    }

    pub fn bad_map<C>(self, f: impl FnOnce(B) -> C) -> Or<G, C> {
        match self {
            Or::Good(g) => Or::Good(g),
            Or::Bad(b) => Or::Bad(f(b)),
        }
    }

    pub fn flat_map<H>(self, f: impl FnOnce(G) -> Or<H, B>) -> Or<H, B> {
        match self {
            Or::Good(g) => f(g),
            Or::Bad(b) => Or::Bad(b),
        }
    }

    pub fn fold<R>(self, good: impl FnOnce(G) -> R, bad: impl FnOnce(B) -> R) -> R {
        match self {
            Or::Good(g) => good(g),
            Or::Bad(b) => bad(b),
        }
    }

    pub fn swap(self) -> Or<B, G> {
        match self {
            Or::Good(g) => Or::Bad(g),
            Or::Bad(b) => Or::Good(b),
        }
    }

    /// Turn a bad value into a good one.
    pub fn recover(self, f: impl FnOnce(B) -> G) -> Or<G, B> {
        match self {
            Or::Bad(b) => Or::Good(f(b)),
            good => good,
        }
    }

    /// Replace a bad value with the outcome of another computation.
    pub fn recover_with<C>(self, f: impl FnOnce(B) -> Or<G, C>) -> Or<G, C> {
        match self {
            Or::Good(g) => Or::Good(g),
            Or::Bad(b) => f(b),
        }
    }

    pub fn or_else<C>(self, alternative: impl FnOnce() -> Or<G, C>) -> Or<G, C> {
        match self {
            Or::Good(g) => Or::Good(g),
            Or::Bad(_) => alternative(),
        }
    }

    /// The good value, failing with `NoSuchElement` on a bad one.
    pub fn get(self) -> ScalacticResult<G>
    where
        B: fmt::Debug,
    {
        match self {
            Or::Good(g) => Ok(g),
            Or::Bad(b) => Err(ScalacticError::NoSuchElement(format!(
                "Bad({b:?}) has no good value"
            ))),
        }
    }

    pub fn get_or_else(self, default: impl FnOnce() -> G) -> G {
        match self {
            Or::Good(g) => g,
            Or::Bad(_) => default(),
        }
    }

    /// Keep a good value only if the validation passes.
    pub fn filter(self, validation: impl FnOnce(&G) -> Validation<B>) -> Or<G, B> {
        match self {
            Or::Good(g) => match validation(&g) {
                Validation::Pass => Or::Good(g),
                Validation::Fail(b) => Or::Bad(b),
            },
            bad => bad,
        }
    }

    pub fn to_result(self) -> Result<G, B> {
        match self {
            Or::Good(g) => Ok(g),
            Or::Bad(b) => Err(b),
        }
    }

    /// Project onto the good side.
    pub fn present(self) -> Present<G, B> {
        Present::new(self)
    }

    /// Project onto the bad side.
    pub fn mitigator(self) -> Mitigator<G, B> {
        Mitigator::new(self)
    }

    /// Wrap the bad side in an `Every` so failures can accumulate.
    pub fn accumulating(self) -> Or<G, Every<B>> {
        self.bad_map(Every::one)
    }
}

impl<G, E> Or<G, Every<E>> {
    /// Combine two accumulating values; bads from both sides are kept.
    pub fn zip<H>(self, other: Or<H, Every<E>>) -> Or<(G, H), Every<E>> {
        match (self, other) {
            (Or::Good(g), Or::Good(h)) => Or::Good((g, h)),
            (Or::Bad(b), Or::Good(_)) | (Or::Good(_), Or::Bad(b)) => Or::Bad(b),
            (Or::Bad(mut b1), Or::Bad(b2)) => {
                b1.append(b2);
                Or::Bad(b1)
            }
        }
    }

    /// Run every validation against a good value, accumulating all failures.
    pub fn validated_by<V>(self, validations: &[V]) -> Or<G, Every<E>>
    where
        V: Fn(&G) -> Validation<E>,
    {
        let g = match self {
            Or::Good(g) => g,
            bad => return bad,
        };
        let mut failures: Option<Every<E>> = None;
        for validation in validations {
            if let Validation::Fail(e) = validation(&g) {
                match failures.as_mut() {
                    Some(every) => every.push(e),
                    None => failures = Some(Every::one(e)),
                }
            }
        }
        match failures {
            Some(every) => Or::Bad(every),
            None => Or::Good(g),
        }
    }
}

/// Combine many accumulating values into one.
///
/// Good when every input is good; otherwise bad with every failure in order.
pub fn combined<G, E, I>(items: I) -> Or<Vec<G>, Every<E>>
where
    I: IntoIterator<Item = Or<G, Every<E>>>,
{
    let mut goods = Vec::new();
    let mut bads: Option<Every<E>> = None;
    for item in items {
        match item {
            Or::Good(g) => goods.push(g),
            Or::Bad(b) => match bads.as_mut() {
                Some(acc) => acc.append(b),
                None => bads = Some(b),
            },
        }
    }
    match bads {
        Some(b) => Or::Bad(b),
        None => Or::Good(goods),
    }
}

impl<G, B> From<Result<G, B>> for Or<G, B> {
    fn from(result: Result<G, B>) -> Self {
        match result {
            Ok(g) => Or::Good(g),
            Err(b) => Or::Bad(b),
        }
    }
}

impl<G, B> From<Or<G, B>> for Result<G, B> {
    fn from(or: Or<G, B>) -> Self {
        or.to_result()
    }
}

impl<G: fmt::Display, B: fmt::Display> fmt::Display for Or<G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Or::Good(g) => write!(f, "Good({g})"),
            Or::Bad(b) => write!(f, "Bad({b})"),
        }
    }
}
