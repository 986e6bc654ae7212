//! Renderings for standard library types

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::{Prettify, Renderer};

macro_rules! display_leaf {
    ($($ty:ty),*) => {
        $(
            impl Prettify for $ty {
                fn render(&self, _out: &mut Renderer<'_>) -> String {
                    self.to_string()
                }

                fn shallow(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_leaf!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Prettify for str {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.string(self)
    }

    fn shallow(&self) -> String {
        self.to_string()
    }
}

impl Prettify for String {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.string(self)
    }

    fn shallow(&self) -> String {
        self.clone()
    }
}

impl Prettify for char {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.char(*self)
    }

    fn shallow(&self) -> String {
        self.to_string()
    }
}

impl Prettify for () {
    fn render(&self, _out: &mut Renderer<'_>) -> String {
        self.shallow()
    }

    fn shallow(&self) -> String {
        "<(), the Unit value>".to_string()
    }
}

impl<T: Prettify> Prettify for Option<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        match self {
            Some(v) => out.wrapped("Some", v),
            None => "None".to_string(),
        }
    }
}

impl<T: Prettify, E: Prettify> Prettify for Result<T, E> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        match self {
            Ok(v) => out.wrapped("Ok", v),
            Err(e) => out.wrapped("Err", e),
        }
    }
}

impl<T: Prettify> Prettify for [T] {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("Array", self)
    }
}

impl<T: Prettify, const N: usize> Prettify for [T; N] {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("Array", self)
    }
}

impl<T: Prettify> Prettify for Vec<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("Vec", self)
    }
}

impl<T: Prettify> Prettify for VecDeque<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("VecDeque", self)
    }
}

impl<T: Prettify, S> Prettify for HashSet<T, S> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("HashSet", self)
    }
}

impl<T: Prettify> Prettify for BTreeSet<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.sequence("BTreeSet", self)
    }
}

impl<K: Prettify, V: Prettify, S> Prettify for HashMap<K, V, S> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.entries("HashMap", self)
    }
}

impl<K: Prettify, V: Prettify> Prettify for BTreeMap<K, V> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.entries("BTreeMap", self)
    }
}

macro_rules! tuple_impl {
    ($($name:ident),+) => {
        impl<$($name: Prettify),+> Prettify for ($($name,)+) {
            #[allow(non_snake_case)]
            fn render(&self, out: &mut Renderer<'_>) -> String {
                let ($($name,)+) = self;
                let parts = [$(out.nested($name)),+];
                format!("({})", parts.join(", "))
            }
        }
    };
}

tuple_impl!(A, B);
tuple_impl!(A, B, C);
tuple_impl!(A, B, C, D);
tuple_impl!(A, B, C, D, E);
tuple_impl!(A, B, C, D, E, F);

impl<T: Prettify + ?Sized> Prettify for &T {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        (**self).render(out)
    }

    fn shallow(&self) -> String {
        (**self).shallow()
    }
}

impl<T: Prettify + ?Sized> Prettify for Box<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        (**self).render(out)
    }

    fn shallow(&self) -> String {
        (**self).shallow()
    }
}

// Shared pointers and cells take a nesting level each so cycles through
// them always reach the bound.
impl<T: Prettify + ?Sized> Prettify for Rc<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.nested(&**self)
    }
}

impl<T: Prettify + ?Sized> Prettify for Arc<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        out.nested(&**self)
    }
}

impl<T: Prettify + ?Sized> Prettify for RefCell<T> {
    fn render(&self, out: &mut Renderer<'_>) -> String {
        match self.try_borrow() {
            Ok(inner) => out.nested(&*inner),
            Err(_) => "<borrowed>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pretty, Prettifier, PrettifierConfig};

    #[test]
    fn test_leaves() {
        assert_eq!(pretty("abc"), "\"abc\"");
        assert_eq!(pretty(&String::from("abc")), "\"abc\"");
        assert_eq!(pretty(&'x'), "'x'");
        assert_eq!(pretty(&()), "<(), the Unit value>");
        assert_eq!(pretty(&42u8), "42");
        assert_eq!(pretty(&true), "true");
        assert_eq!(pretty(&1.5f64), "1.5");
    }

    #[test]
    fn test_optional_and_result_shapes() {
        assert_eq!(pretty(&Some('a')), "Some('a')");
        assert_eq!(pretty(&None::<i32>), "None");
        assert_eq!(pretty(&Ok::<_, String>(1)), "Ok(1)");
        assert_eq!(pretty(&Err::<i32, _>("bad")), "Err(\"bad\")");
    }

    #[test]
    fn test_collections() {
        assert_eq!(pretty(&vec!["a", "b"]), "Vec(\"a\", \"b\")");
        assert_eq!(pretty(&[1, 2, 3]), "Array(1, 2, 3)");
        assert_eq!(pretty(&[1, 2][..]), "Array(1, 2)");
        assert_eq!(pretty(&VecDeque::from(vec![1])), "VecDeque(1)");
        assert_eq!(pretty(&Vec::<i32>::new()), "Vec()");

        let set: BTreeSet<i32> = [3, 1].into_iter().collect();
        assert_eq!(pretty(&set), "BTreeSet(1, 3)");

        let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(pretty(&map), "BTreeMap(\"a\" -> 1, \"b\" -> 2)");

        let single: HashMap<char, bool> = [('k', false)].into_iter().collect();
        assert_eq!(pretty(&single), "HashMap('k' -> false)");
    }

    #[test]
    fn test_tuples_and_pointers() {
        assert_eq!(pretty(&(1, "a")), "(1, \"a\")");
        assert_eq!(pretty(&(1, 'b', ())), "(1, 'b', <(), the Unit value>)");
        assert_eq!(pretty(&Box::new(Some(1))), "Some(1)");
        assert_eq!(pretty(&Rc::new("x")), "\"x\"");
        assert_eq!(pretty(&Arc::new(vec![1])), "Vec(1)");
    }

    #[test]
    fn test_basic_config_skips_quotes() {
        let p = Prettifier::basic();
        assert_eq!(p.apply(&vec!["a", "b"]), "Vec(a, b)");
        assert_eq!(p.apply(&Some('c')), "Some(c)");
    }

    #[test]
    fn test_size_limit_truncates() {
        let p = Prettifier::truncated(2);
        assert_eq!(p.apply(&vec![1, 2, 3, 4]), "Vec(1, 2, ...)");
        assert_eq!(p.apply(&vec![1, 2]), "Vec(1, 2)");
    }

    #[test]
    fn test_mutably_borrowed_cell() {
        let cell = RefCell::new(1);
        let _guard = cell.borrow_mut();
        assert_eq!(pretty(&cell), "<borrowed>");
    }

    struct Node {
        label: &'static str,
        next: RefCell<Option<Rc<Node>>>,
    }

    impl Prettify for Node {
        fn render(&self, out: &mut Renderer<'_>) -> String {
            let label = out.nested(self.label);
            let next = out.nested(&self.next);
            format!("Node({label}, {next})")
        }
    }

    #[test]
    fn test_self_referential_structure_terminates() {
        let node = Rc::new(Node {
            label: "loop",
            next: RefCell::new(None),
        });
        *node.next.borrow_mut() = Some(Rc::clone(&node));

        let p = Prettifier::new(PrettifierConfig::default().with_max_depth(16));
        let rendered = p.apply(&node);
        assert!(rendered.starts_with("Node(\"loop\", Some(Node(\"loop\""));
        assert!(rendered.contains("<"));

        *node.next.borrow_mut() = None;
    }

    #[test]
    fn test_short_list_renders_fully() {
        let node = Node {
            label: "end",
            next: RefCell::new(None),
        };
        assert_eq!(pretty(&node), "Node(\"end\", None)");
    }
}
