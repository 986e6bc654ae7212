//! One-sided projections of an `Or`
//!
//! - `Present` operates on the good side, passing a bad value through.
//! - `Mitigator` operates on the bad side; its `flat_map` can turn a bad
//!   value back into a good one.

use crate::Or;

/// Projection over the good side of an `Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Present<G, B> {
    or: Or<G, B>,
}

impl<G, B> Present<G, B> {
    pub fn new(or: Or<G, B>) -> Self {
        Present { or }
    }

    pub fn get(&self) -> Option<&G> {
        match &self.or {
            Or::Good(g) => Some(g),
            Or::Bad(_) => None,
        }
    }

    pub fn exists(&self, p: impl FnOnce(&G) -> bool) -> bool {
        self.get().map_or(false, p)
    }

    pub fn map<H>(self, f: impl FnOnce(G) -> H) -> Present<H, B> {
        Present::new(self.or.map(f))
    }

    pub fn flat_map<H>(self, f: impl FnOnce(G) -> Or<H, B>) -> Present<H, B> {
        Present::new(self.or.flat_map(f))
    }

    pub fn into_or(self) -> Or<G, B> {
        self.or
    }
}

/// Projection over the bad side of an `Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mitigator<G, B> {
    or: Or<G, B>,
}

impl<G, B> Mitigator<G, B> {
    pub fn new(or: Or<G, B>) -> Self {
        Mitigator { or }
    }

    pub fn get(&self) -> Option<&B> {
        match &self.or {
            Or::Good(_) => None,
            Or::Bad(b) => Some(b),
        }
    }

    pub fn exists(&self, p: impl FnOnce(&B) -> bool) -> bool {
        self.get().map_or(false, p)
    }

    pub fn map<C>(self, f: impl FnOnce(B) -> C) -> Mitigator<G, C> {
        Mitigator::new(self.or.bad_map(f))
    }

    /// Mitigate a bad value: `f` may produce a good or a new bad.
    pub fn flat_map<C>(self, f: impl FnOnce(B) -> Or<G, C>) -> Mitigator<G, C> {
        Mitigator::new(self.or.recover_with(f))
    }

    pub fn into_or(self) -> Or<G, B> {
        self.or
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_maps_good_side_only() {
        let good: Or<i32, &str> = Or::Good(2);
        assert_eq!(good.present().map(|n| n * 3).into_or(), Or::Good(6));

        let bad: Or<i32, &str> = Or::Bad("nope");
        let mapped = bad.present().map(|n| n * 3);
        assert_eq!(mapped.get(), None);
        assert_eq!(mapped.into_or(), Or::Bad("nope"));
    }

    #[test]
    fn test_present_exists() {
        let good: Or<i32, &str> = Or::Good(5);
        assert!(good.present().exists(|n| *n > 3));
        assert!(!Or::<i32, &str>::Bad("x").present().exists(|_| true));
    }

    #[test]
    fn test_mitigator_recovers_bad() {
        let bad: Or<u32, String> = Or::Bad("timeout".to_string());
        let mitigated = bad
            .mitigator()
            .flat_map(|reason| {
                if reason == "timeout" {
                    Or::Good(0)
                } else {
                    Or::Bad(reason.len())
                }
            })
            .into_or();
        assert_eq!(mitigated, Or::Good(0));
    }

    #[test]
    fn test_mitigator_passes_good_through() {
        let good: Or<u32, String> = Or::Good(7);
        let m = good.mitigator().map(|s| s.len());
        assert_eq!(m.get(), None);
        assert_eq!(m.into_or(), Or::Good(7));
    }
}
