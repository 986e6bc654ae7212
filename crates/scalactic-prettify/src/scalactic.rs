//! Renderings for the scalactic-core types

use scalactic_core::{
    Bag, EquaSet, Every, FastEquaSet, HashingEquality, Membership, Numeric, OrderingEquality, Or,
    Spread, TreeEquaSet, Validation,
};

use crate::{Prettify, Renderer};

impl<G: Prettify, B: Prettify> Prettify for Or<G, B> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        match self {
            Or::Good(g) => out.wrapped("Good", g),
            Or::Bad(b) => out.wrapped("Bad", b),
        }
    }
}

impl<E: Prettify> Prettify for Validation<E> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        match self {
            Validation::Pass => "Pass".to_string(),
            Validation::Fail(e) => out.wrapped("Fail", e),
        }
    }
}

impl<T: Prettify> Prettify for Every<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        let name = if self.is_one() { "One" } else { "Many" };
        out.sequence(name, self.as_slice())
    }
}

impl<T: Prettify> Prettify for Bag<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("Bag", self.iter())
    }
}

impl<T: Prettify, E: HashingEquality<T>> Prettify for FastEquaSet<T, E> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("FastEquaSet", self.elements())
    }
}

impl<T: Prettify, E: OrderingEquality<T>> Prettify for TreeEquaSet<T, E> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("TreeEquaSet", self.elements())
    }
}

impl<T: Numeric> Prettify for Spread<T> {
    fn render(&self, _out: &mut Renderer<'_>) -> String {
        self.to_string()
    }

    fn shallow(&self) -> String {
        self.to_string()
    }
}

impl<T> Prettify for Membership<T> {
    fn render(&self, _out: &mut Renderer<'_>) -> String {
        self.shallow()
    }

    fn shallow(&self) -> String {
        "<membership>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pretty;
    use scalactic_core::{plus_or_minus, DefaultEquality, NaturalOrdering};

    #[test]
    fn test_or_and_validation() {
        assert_eq!(pretty(&Or::<i32, String>::Good(1)), "Good(1)");
        assert_eq!(pretty(&Or::<i32, &str>::Bad("no")), "Bad(\"no\")");
        assert_eq!(pretty(&Validation::<&str>::Pass), "Pass");
        assert_eq!(pretty(&Validation::Fail('x')), "Fail('x')");
    }

    #[test]
    fn test_every() {
        assert_eq!(pretty(&Every::one(1)), "One(1)");
        assert_eq!(pretty(&Every::of(1, vec![2, 3])), "Many(1, 2, 3)");
    }

    #[test]
    fn test_accumulated_errors() {
        let bad: Or<i32, Every<&str>> = Or::Bad(Every::of("too small", vec!["odd"]));
        assert_eq!(pretty(&bad), "Bad(Many(\"too small\", \"odd\"))");
    }

    #[test]
    fn test_sets_and_bags() {
        let tree = TreeEquaSet::from_elements(NaturalOrdering, vec![2, 1, 2]);
        assert_eq!(pretty(&tree), "TreeEquaSet(1, 2)");

        let fast = FastEquaSet::from_elements(DefaultEquality, vec!["a"]);
        assert_eq!(pretty(&fast), "FastEquaSet(\"a\")");

        let bag: Bag<i32> = vec![1, 1].into();
        assert_eq!(pretty(&bag), "Bag(1, 1)");
    }

    #[test]
    fn test_spread_and_membership() {
        let spread = plus_or_minus(10, 2).unwrap();
        assert_eq!(pretty(&spread), "10 +- 2");
        assert_eq!(pretty(&Membership::new(|n: &i32| *n > 0)), "<membership>");
    }
}
