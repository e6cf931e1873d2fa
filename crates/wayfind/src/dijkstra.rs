use std::hash::Hash;

use crate::lazy::BestFirst;
use crate::{EdgeProvider, Traversal};

/// Zero heuristic: turns best-first search into uniform-cost search.
pub(crate) fn zero<T>(_: &T) -> f64 {
    0.0
}

/// Uniform-cost (Dijkstra) search from one or more sources.
///
/// Vertices are settled in non-decreasing cost order, each the first time it
/// leaves the frontier; ties go to whichever entry was pushed first. The
/// search stops as soon as `end` matches the vertex just settled, or when the
/// frontier is empty. On an unbounded graph with an `end` that never
/// matches, this does not return.
pub fn dijkstra<T, P>(
    sources: impl IntoIterator<Item = T>,
    edges: P,
    end: impl FnMut(&T) -> bool,
) -> Traversal<T>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
{
    let found = dijkstra_iter(sources, edges).run_until(end);
    log::debug!(
        "dijkstra: {} vertices settled, stop: {:?}",
        found.len(),
        found.stop()
    );
    found
}

/// Lazy Dijkstra: an iterator over settled vertices in non-decreasing cost.
pub fn dijkstra_iter<T, P>(
    sources: impl IntoIterator<Item = T>,
    edges: P,
) -> BestFirst<T, P, fn(&T) -> f64>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
{
    BestFirst::new(sources, zero::<T> as fn(&T) -> f64, edges)
}
