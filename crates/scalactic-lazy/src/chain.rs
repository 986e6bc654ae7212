//! Lazy chain - a deferred pipeline of per-element transformations
//!
//! A chain is a graph of immutable nodes. Each node exclusively owns its
//! function and shares its upstream node(s) read-only through an `Arc`.
//!
//! INVARIANT: materializing walks and recomputes the whole graph on every
//! call. Nothing is cached, so a side-effecting function runs once per
//! element per materialization.

use std::fmt;
use std::sync::Arc;

/// Anything that can flow through a chain.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// The operation a node performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainOp {
    Source,
    Map,
    FlatMap,
    Collect,
    Filter,
    ScanLeft,
    ScanRight,
    Zip,
    ZipAll,
    ZipWithIndex,
    Unzip,
    Concat,
}

impl ChainOp {
    pub fn name(&self) -> &'static str {
        match self {
            ChainOp::Source => "source",
            ChainOp::Map => "map",
            ChainOp::FlatMap => "flat_map",
            ChainOp::Collect => "collect",
            ChainOp::Filter => "filter",
            ChainOp::ScanLeft => "scan_left",
            ChainOp::ScanRight => "scan_right",
            ChainOp::Zip => "zip",
            ChainOp::ZipAll => "zip_all",
            ChainOp::ZipWithIndex => "zip_with_index",
            ChainOp::Unzip => "unzip",
            ChainOp::Concat => "concat",
        }
    }
}

impl fmt::Display for ChainOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

trait Node<T>: Send + Sync {
    fn materialize(&self) -> Vec<T>;
    fn depth(&self) -> usize;
    fn op(&self) -> ChainOp;
}

type Upstream<T> = Arc<dyn Node<T>>;

struct SourceNode<T> {
    items: Arc<[T]>,
}

impl<T: Element> Node<T> for SourceNode<T> {
    fn materialize(&self) -> Vec<T> {
        self.items.to_vec()
    }

    fn depth(&self) -> usize {
        0
    }

    fn op(&self) -> ChainOp {
        ChainOp::Source
    }
}

struct MapNode<S, F> {
    upstream: Upstream<S>,
    f: F,
    op: ChainOp,
}

impl<S: Element, T: Element, F> Node<T> for MapNode<S, F>
where
    F: Fn(S) -> T + Send + Sync,
{
    fn materialize(&self) -> Vec<T> {
        self.upstream.materialize().into_iter().map(&self.f).collect()
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        self.op
    }
}

struct FlatMapNode<S, F> {
    upstream: Upstream<S>,
    f: F,
}

impl<S: Element, T: Element, I, F> Node<T> for FlatMapNode<S, F>
where
    F: Fn(S) -> I + Send + Sync,
    I: IntoIterator<Item = T>,
{
    fn materialize(&self) -> Vec<T> {
        self.upstream
            .materialize()
            .into_iter()
            .flat_map(&self.f)
            .collect()
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::FlatMap
    }
}

struct CollectNode<S, F> {
    upstream: Upstream<S>,
    pf: F,
}

impl<S: Element, T: Element, F> Node<T> for CollectNode<S, F>
where
    F: Fn(S) -> Option<T> + Send + Sync,
{
    fn materialize(&self) -> Vec<T> {
        self.upstream
            .materialize()
            .into_iter()
            .filter_map(&self.pf)
            .collect()
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::Collect
    }
}

struct FilterNode<T, F> {
    upstream: Upstream<T>,
    p: F,
}

impl<T: Element, F> Node<T> for FilterNode<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn materialize(&self) -> Vec<T> {
        self.upstream
            .materialize()
            .into_iter()
            .filter(|t| (self.p)(t))
            .collect()
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::Filter
    }
}

struct ScanLeftNode<S, T, F> {
    upstream: Upstream<S>,
    zero: T,
    op: F,
}

impl<S: Element, T: Element, F> Node<T> for ScanLeftNode<S, T, F>
where
    F: Fn(T, S) -> T + Send + Sync,
{
    fn materialize(&self) -> Vec<T> {
        let items = self.upstream.materialize();
        let mut out = Vec::with_capacity(items.len() + 1);
        let mut acc = self.zero.clone();
        out.push(acc.clone());
        for s in items {
            acc = (self.op)(acc, s);
            out.push(acc.clone());
        }
        out
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::ScanLeft
    }
}

struct ScanRightNode<S, T, F> {
    upstream: Upstream<S>,
    zero: T,
    op: F,
}

impl<S: Element, T: Element, F> Node<T> for ScanRightNode<S, T, F>
where
    F: Fn(S, T) -> T + Send + Sync,
{
    fn materialize(&self) -> Vec<T> {
        let items = self.upstream.materialize();
        let mut out = Vec::with_capacity(items.len() + 1);
        let mut acc = self.zero.clone();
        out.push(acc.clone());
        for s in items.into_iter().rev() {
            acc = (self.op)(s, acc);
            out.push(acc.clone());
        }
        out.reverse();
        out
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::ScanRight
    }
}

struct ZipNode<A, B> {
    left: Upstream<A>,
    right: Upstream<B>,
}

impl<A: Element, B: Element> Node<(A, B)> for ZipNode<A, B> {
    fn materialize(&self) -> Vec<(A, B)> {
        self.left
            .materialize()
            .into_iter()
            .zip(self.right.materialize())
            .collect()
    }

    fn depth(&self) -> usize {
        self.left.depth().max(self.right.depth()) + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::Zip
    }
}

struct ZipAllNode<A, B> {
    left: Upstream<A>,
    right: Upstream<B>,
    this_fill: A,
    that_fill: B,
}

impl<A: Element, B: Element> Node<(A, B)> for ZipAllNode<A, B> {
    fn materialize(&self) -> Vec<(A, B)> {
        let left = self.left.materialize();
        let right = self.right.materialize();
        let len = left.len().max(right.len());
        let mut left = left.into_iter();
        let mut right = right.into_iter();
        (0..len)
            .map(|_| {
                (
                    left.next().unwrap_or_else(|| self.this_fill.clone()),
                    right.next().unwrap_or_else(|| self.that_fill.clone()),
                )
            })
            .collect()
    }

    fn depth(&self) -> usize {
        self.left.depth().max(self.right.depth()) + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::ZipAll
    }
}

struct ZipWithIndexNode<T> {
    upstream: Upstream<T>,
}

impl<T: Element> Node<(T, usize)> for ZipWithIndexNode<T> {
    fn materialize(&self) -> Vec<(T, usize)> {
        self.upstream
            .materialize()
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, i))
            .collect()
    }

    fn depth(&self) -> usize {
        self.upstream.depth() + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::ZipWithIndex
    }
}

struct ConcatNode<T> {
    left: Upstream<T>,
    right: Upstream<T>,
}

impl<T: Element> Node<T> for ConcatNode<T> {
    fn materialize(&self) -> Vec<T> {
        let mut out = self.left.materialize();
        out.extend(self.right.materialize());
        out
    }

    fn depth(&self) -> usize {
        self.left.depth().max(self.right.depth()) + 1
    }

    fn op(&self) -> ChainOp {
        ChainOp::Concat
    }
}

/// A lazily evaluated sequence of `T`.
pub struct LazyChain<T> {
    node: Upstream<T>,
}

impl<T: Element> LazyChain<T> {
    /// A chain rooted at a fixed list of elements.
    pub fn from_vec(items: Vec<T>) -> Self {
        LazyChain {
            node: Arc::new(SourceNode {
                items: items.into(),
            }),
        }
    }

    fn wrap<U: Element>(node: impl Node<U> + 'static) -> LazyChain<U> {
        LazyChain {
            node: Arc::new(node),
        }
    }

    /// Run the whole chain.
    pub fn to_vec(&self) -> Vec<T> {
        tracing::trace!(op = %self.op(), depth = self.depth(), "materializing lazy chain");
        self.node.materialize()
    }

    /// Number of transformation nodes between this chain and its deepest root.
    pub fn depth(&self) -> usize {
        self.node.depth()
    }

    /// The operation of the outermost node.
    pub fn op(&self) -> ChainOp {
        self.node.op()
    }

    pub fn map<U, F>(&self, f: F) -> LazyChain<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.map_as(ChainOp::Map, f)
    }

    pub(crate) fn map_as<U, F>(&self, op: ChainOp, f: F) -> LazyChain<U>
    where
        U: Element,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Self::wrap(MapNode {
            upstream: Arc::clone(&self.node),
            f,
            op,
        })
    }

    pub fn flat_map<U, I, F>(&self, f: F) -> LazyChain<U>
    where
        U: Element,
        I: IntoIterator<Item = U> + 'static,
        F: Fn(T) -> I + Send + Sync + 'static,
    {
        Self::wrap(FlatMapNode {
            upstream: Arc::clone(&self.node),
            f,
        })
    }

    pub fn collect<U, F>(&self, pf: F) -> LazyChain<U>
    where
        U: Element,
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        Self::wrap(CollectNode {
            upstream: Arc::clone(&self.node),
            pf,
        })
    }

    pub fn filter<F>(&self, p: F) -> LazyChain<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::wrap(FilterNode {
            upstream: Arc::clone(&self.node),
            p,
        })
    }

    pub fn scan_left<U, F>(&self, zero: U, op: F) -> LazyChain<U>
    where
        U: Element,
        F: Fn(U, T) -> U + Send + Sync + 'static,
    {
        Self::wrap(ScanLeftNode {
            upstream: Arc::clone(&self.node),
            zero,
            op,
        })
    }

    pub fn scan_right<U, F>(&self, zero: U, op: F) -> LazyChain<U>
    where
        U: Element,
        F: Fn(T, U) -> U + Send + Sync + 'static,
    {
        Self::wrap(ScanRightNode {
            upstream: Arc::clone(&self.node),
            zero,
            op,
        })
    }

    pub fn zip<U: Element>(&self, other: &LazyChain<U>) -> LazyChain<(T, U)> {
        Self::wrap(ZipNode {
            left: Arc::clone(&self.node),
            right: Arc::clone(&other.node),
        })
    }

    pub fn zip_all<U: Element>(
        &self,
        other: &LazyChain<U>,
        this_fill: T,
        that_fill: U,
    ) -> LazyChain<(T, U)> {
        Self::wrap(ZipAllNode {
            left: Arc::clone(&self.node),
            right: Arc::clone(&other.node),
            this_fill,
            that_fill,
        })
    }

    pub fn zip_with_index(&self) -> LazyChain<(T, usize)> {
        Self::wrap(ZipWithIndexNode {
            upstream: Arc::clone(&self.node),
        })
    }

    pub fn concat(&self, other: &LazyChain<T>) -> LazyChain<T> {
        Self::wrap(ConcatNode {
            left: Arc::clone(&self.node),
            right: Arc::clone(&other.node),
        })
    }
}

impl<T> Clone for LazyChain<T> {
    fn clone(&self) -> Self {
        LazyChain {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T: Element> fmt::Debug for LazyChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyChain")
            .field("op", &self.op())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_source_depth_and_op() {
        let chain = LazyChain::from_vec(vec![1, 2, 3]);
        assert_eq!(chain.depth(), 0);
        assert_eq!(chain.op(), ChainOp::Source);

        let mapped = chain.map(|n| n + 1).filter(|n| n % 2 == 0);
        assert_eq!(mapped.depth(), 2);
        assert_eq!(mapped.op(), ChainOp::Filter);
        assert_eq!(mapped.to_vec(), vec![2, 4]);
    }

    #[test]
    fn test_scan_right_ends_with_zero() {
        let chain = LazyChain::from_vec(vec![1, 2, 3]);
        assert_eq!(chain.scan_right(0, |a, acc| a + acc).to_vec(), vec![6, 5, 3, 0]);
    }

    #[test]
    fn test_scan_left_on_empty() {
        let chain = LazyChain::<i32>::from_vec(vec![]);
        assert_eq!(chain.scan_left(10, |acc, n| acc + n).to_vec(), vec![10]);
    }

    #[test]
    fn test_zip_depth_takes_deeper_side() {
        let a = LazyChain::from_vec(vec![1, 2]).map(|n| n * 2).map(|n| n + 1);
        let b = LazyChain::from_vec(vec!['x', 'y', 'z']);
        let zipped = a.zip(&b);
        assert_eq!(zipped.depth(), 3);
        assert_eq!(zipped.to_vec(), vec![(3, 'x'), (5, 'y')]);
    }

    #[test]
    fn test_shared_upstream_recomputed_per_branch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let base = LazyChain::from_vec(vec![1, 2, 3]).map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        });
        let both = base.concat(&base);
        assert_eq!(both.to_vec(), vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let chain = LazyChain::from_vec(vec![1, 2]).map(|n| n.to_string());
        assert_send_sync(&chain);
        let handle = std::thread::spawn(move || chain.to_vec());
        assert_eq!(handle.join().unwrap(), vec!["1", "2"]);
    }
}
