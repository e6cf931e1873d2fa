use std::hash::Hash;

use crate::lazy::Bfs;
use crate::{EdgeProvider, Traversal};

/// Multi-source breadth-first search.
///
/// Every source starts at cost 0 and each edge counts as one hop, whatever
/// its weight. The search stops at the first vertex, in finalized order,
/// for which `end` returns `true` (pass [`never`](crate::never) to explore
/// everything reachable). The result holds every vertex discovered up to
/// that point; ids that were never reached are simply absent.
pub fn bfs<T, P>(
    sources: impl IntoIterator<Item = T>,
    edges: P,
    end: impl FnMut(&T) -> bool,
) -> Traversal<T>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
{
    let found = Bfs::new(sources, edges).run_until(end);
    log::debug!("bfs: {} vertices settled, stop: {:?}", found.len(), found.stop());
    found
}

/// Lazy breadth-first search: an iterator over settled vertices in
/// non-decreasing hop count. Dropping it early cancels the search.
pub fn bfs_iter<T, P>(sources: impl IntoIterator<Item = T>, edges: P) -> Bfs<T, P>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
{
    Bfs::new(sources, edges)
}
