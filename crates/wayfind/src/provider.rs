use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::Edge;

/// Source of outgoing edges for a search.
///
/// Called once each time a vertex is expanded. Results are not cached by
/// the engine, and for a given id they must not change during one search.
pub trait EdgeProvider<T> {
    /// Append the outgoing edges of `id` into `buf`. The caller clears `buf`
    /// before calling.
    fn edges(&self, id: &T, buf: &mut Vec<Edge<T>>);
}

impl<T, P: EdgeProvider<T> + ?Sized> EdgeProvider<T> for &P {
    #[inline]
    fn edges(&self, id: &T, buf: &mut Vec<Edge<T>>) {
        (**self).edges(id, buf);
    }
}

/// Weighted static table. Ids without an entry have no outgoing edges.
impl<T, S> EdgeProvider<T> for HashMap<T, Vec<Edge<T>>, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn edges(&self, id: &T, buf: &mut Vec<Edge<T>>) {
        if let Some(out) = self.get(id) {
            buf.extend(out.iter().cloned());
        }
    }
}

/// Unweighted static table: every listed neighbour is a weight-1 edge.
#[derive(Debug)]
pub struct Unweighted<'a, T, S = std::collections::hash_map::RandomState>(
    pub &'a HashMap<T, Vec<T>, S>,
);

impl<T, S> EdgeProvider<T> for Unweighted<'_, T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher,
{
    fn edges(&self, id: &T, buf: &mut Vec<Edge<T>>) {
        if let Some(out) = self.0.get(id) {
            buf.extend(out.iter().cloned().map(Edge::unit));
        }
    }
}

/// Edges computed on demand by a closure.
///
/// This is how implicit graphs are searched: the full vertex set is never
/// built, only the part the search actually reaches. Callers whose neighbour
/// computation is expensive should memoize inside the closure.
#[derive(Clone, Copy)]
pub struct FnEdges<F>(pub F);

impl<T, F, I> EdgeProvider<T> for FnEdges<F>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = Edge<T>>,
{
    #[inline]
    fn edges(&self, id: &T, buf: &mut Vec<Edge<T>>) {
        buf.extend((self.0)(id));
    }
}

/// Wrap a closure `id -> edges` as an [`EdgeProvider`].
#[inline]
pub fn from_fn<T, F, I>(f: F) -> FnEdges<F>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = Edge<T>>,
{
    FnEdges(f)
}
