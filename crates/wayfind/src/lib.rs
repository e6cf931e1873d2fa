//! Generic graph search: breadth-first, uniform-cost (Dijkstra) and A*.
//!
//! Vertices are identified by any caller type `T: Clone + Eq + Hash`; the
//! engine never looks inside them. Outgoing edges come from an
//! [`EdgeProvider`], which is either a static table or a closure that builds
//! neighbours on demand, so implicit and effectively unbounded state spaces
//! work as well as precomputed graphs.
//!
//! Every algorithm comes in two forms:
//!
//! - **eager** ([`bfs`], [`dijkstra`], [`astar`]) runs until an end predicate
//!   matches or the frontier is empty and returns a [`Traversal`];
//! - **lazy** ([`bfs_iter`], [`dijkstra_iter`], [`astar_iter`]) is an
//!   [`Iterator`] yielding settled [`Vertex`] values in finalized cost order,
//!   so a caller can stop pulling as soon as it has what it needs.
//!
//! ```
//! use std::collections::HashMap;
//! use wayfind::{dijkstra, Edge};
//!
//! let mut graph = HashMap::new();
//! graph.insert("a", vec![Edge::new("b", 2.0), Edge::new("c", 7.0)]);
//! graph.insert("b", vec![Edge::new("c", 3.0)]);
//!
//! let found = dijkstra(["a"], &graph, |id| *id == "c");
//! assert_eq!(found.steps_to(&"c"), Some(5));
//! assert_eq!(found.ids_to(&"c"), Some(vec!["a", "b", "c"]));
//! ```
//!
//! # Contracts
//!
//! Edge weights must be non-negative for Dijkstra and A*, heuristics must be
//! admissible for A* to return optimal costs, and an unbounded graph needs an
//! end predicate that eventually matches (or [`Limits`]) to terminate. None of
//! these are checked at run time.

mod astar;
mod bfs;
mod dijkstra;
pub mod distance;
mod edge;
mod error;
mod frontier;
mod lazy;
mod limits;
mod neighbors;
mod provider;
mod traversal;

#[cfg(test)]
mod tests;

pub use astar::{astar, astar_iter, astar_to_zero};
pub use bfs::{bfs, bfs_iter};
pub use dijkstra::{dijkstra, dijkstra_iter};
pub use edge::{Edge, Vertex};
pub use error::SearchError;
pub use lazy::{BestFirst, Bfs};
pub use limits::Limits;
pub use neighbors::GridEdges;
pub use provider::{EdgeProvider, FnEdges, Unweighted, from_fn};
pub use traversal::{Stop, Traversal};

/// End predicate that never matches: search until the frontier is empty.
#[inline]
pub fn never<T: ?Sized>(_: &T) -> bool {
    false
}
