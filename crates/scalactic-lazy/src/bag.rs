//! LazyBag - a lazy multiset

use std::fmt;

use scalactic_core::Bag;

use crate::{Element, LazyChain, LazyView};

/// A lazily transformed bag. Order is not significant; duplicates are kept.
pub struct LazyBag<T> {
    chain: LazyChain<T>,
}

impl<T: Element> LazyBag<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        LazyBag {
            chain: LazyChain::from_vec(items),
        }
    }

    pub fn to_strict(&self) -> Bag<T> {
        Bag::from(self.to_list())
    }

    pub fn force(&self) -> Bag<T> {
        self.to_strict()
    }
}

impl<T: Element> LazyView<T> for LazyBag<T> {
    type Rebuilt<U: Element> = LazyBag<U>;

    fn chain(&self) -> &LazyChain<T> {
        &self.chain
    }

    fn rebuild<U: Element>(&self, chain: LazyChain<U>) -> LazyBag<U> {
        LazyBag { chain }
    }

    fn view_name(&self) -> &'static str {
        "LazyBag"
    }
}

impl<T: Element> FromIterator<T> for LazyBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazyBag::from_vec(iter.into_iter().collect())
    }
}

impl<T> Clone for LazyBag<T> {
    fn clone(&self) -> Self {
        LazyBag {
            chain: self.chain.clone(),
        }
    }
}

impl<T: Element> fmt::Debug for LazyBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyBag")
            .field("op", &self.chain.op())
            .field("depth", &self.chain.depth())
            .finish()
    }
}
