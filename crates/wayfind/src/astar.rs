use std::hash::Hash;

use crate::lazy::BestFirst;
use crate::{EdgeProvider, Traversal};

/// A* search from one or more sources.
///
/// Same loop as [`dijkstra`](crate::dijkstra), but the frontier is ordered by
/// `cost + heuristic(id)`. The heuristic is called once per frontier push.
/// Settled costs are optimal only if the heuristic never overestimates the
/// remaining cost; an inadmissible one still terminates, just not
/// necessarily with the cheapest path. A heuristic that is constantly zero
/// gives exactly Dijkstra.
pub fn astar<T, P, H>(
    sources: impl IntoIterator<Item = T>,
    heuristic: H,
    edges: P,
    end: impl FnMut(&T) -> bool,
) -> Traversal<T>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
    H: FnMut(&T) -> f64,
{
    let found = astar_iter(sources, heuristic, edges).run_until(end);
    log::debug!("astar: {} vertices settled, stop: {:?}", found.len(), found.stop());
    found
}

/// A* whose goal is any vertex where `heuristic` returns exactly `0.0`.
///
/// For heuristics that measure "distance to goal" this saves repeating the
/// goal test as a separate predicate.
pub fn astar_to_zero<T, P, H>(
    sources: impl IntoIterator<Item = T>,
    heuristic: H,
    edges: P,
) -> Traversal<T>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
    H: Fn(&T) -> f64,
{
    astar(sources, &heuristic, edges, |id| heuristic(id) == 0.0)
}

/// Lazy A*: settled vertices in non-decreasing `cost + heuristic` order.
pub fn astar_iter<T, P, H>(
    sources: impl IntoIterator<Item = T>,
    heuristic: H,
    edges: P,
) -> BestFirst<T, P, H>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
    H: FnMut(&T) -> f64,
{
    BestFirst::new(sources, heuristic, edges)
}
