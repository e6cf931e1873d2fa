//! Pull-based search state machines.
//!
//! [`Bfs`] and [`BestFirst`] own their whole search state (frontier, settled
//! arena, scratch edge buffer). Each call to `next` runs the loop just far
//! enough to settle one more vertex and then returns. The eager entry points
//! drive the same machines with [`run_until`](Bfs::run_until).

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::frontier::Frontier;
use crate::traversal::{Stop, Traversal};
use crate::{Edge, EdgeProvider, Limits, Vertex};

// ---------------------------------------------------------------------------
// Breadth-first
// ---------------------------------------------------------------------------

/// Lazy breadth-first search. Yields vertices in non-decreasing hop count.
///
/// A vertex is settled as soon as it is first discovered (all edges count
/// as one hop, so the first discovery is the shortest), which means the
/// arena may hold discovered vertices that have not been yielded yet.
pub struct Bfs<T, P> {
    edges: P,
    queue: VecDeque<usize>,
    found: Traversal<T>,
    buf: Vec<Edge<T>>,
    limits: Limits,
    /// Last yielded vertex, expanded on the next pull.
    pending: Option<usize>,
    yielded: usize,
    limited: bool,
}

impl<T, P> Bfs<T, P>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
{
    pub(crate) fn new(sources: impl IntoIterator<Item = T>, edges: P) -> Self {
        let mut found = Traversal::new();
        let mut queue = VecDeque::new();
        for src in sources {
            if found.contains(&src) {
                continue;
            }
            queue.push_back(found.insert(src, 0.0, None));
        }
        Self {
            edges,
            queue,
            found,
            buf: Vec::new(),
            limits: Limits::default(),
            pending: None,
            yielded: 0,
            limited: false,
        }
    }

    /// Apply search bounds. Costs here are hop counts.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Vertices settled so far, yielded or not.
    #[inline]
    pub fn settled(&self) -> usize {
        self.found.len()
    }

    /// Path from a source to a vertex this search produced.
    pub fn path(&self, v: &Vertex<T>) -> Vec<&Vertex<T>> {
        self.found.path(v)
    }

    /// Yield the next queued vertex and return its arena index.
    ///
    /// The vertex returned by the previous call is expanded first, so a
    /// vertex's edges are never generated before the caller has seen it.
    fn advance(&mut self) -> Option<usize> {
        if let Some(pi) = self.pending.take() {
            self.expand(pi);
        }
        if self.limits.is_full(self.yielded) {
            if !self.queue.is_empty() && !self.limited {
                log::debug!("bfs: settled limit of {} reached", self.yielded);
                self.limited = true;
            }
            return None;
        }
        let ci = self.queue.pop_front()?;
        self.pending = Some(ci);
        self.yielded += 1;
        Some(ci)
    }

    fn expand(&mut self, ci: usize) {
        let current = self.found.vertex(ci);
        let next_cost = current.cost + 1.0;
        let id = current.id.clone();

        self.buf.clear();
        self.edges.edges(&id, &mut self.buf);

        for e in self.buf.drain(..) {
            if self.found.contains(&e.to) {
                continue;
            }
            if !self.limits.allows_cost(next_cost) {
                self.limited = true;
                continue;
            }
            let ni = self.found.insert(e.to, next_cost, Some(ci));
            self.queue.push_back(ni);
        }
    }

    /// Run until `end` matches a vertex or the search cannot continue.
    ///
    /// The returned traversal holds every vertex discovered so far.
    pub fn run_until(mut self, mut end: impl FnMut(&T) -> bool) -> Traversal<T> {
        let mut goal = None;
        while let Some(ci) = self.advance() {
            if end(&self.found.vertex(ci).id) {
                goal = Some(ci);
                break;
            }
        }
        let stop = stop_reason(goal, self.limited);
        self.found.finish(stop, goal);
        self.found
    }
}

impl<T, P> Iterator for Bfs<T, P>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
{
    type Item = Vertex<T>;

    fn next(&mut self) -> Option<Vertex<T>> {
        let ci = self.advance()?;
        Some(self.found.vertex(ci).clone())
    }
}

// ---------------------------------------------------------------------------
// Best-first (Dijkstra / A*)
// ---------------------------------------------------------------------------

/// Lazy best-first search shared by Dijkstra and A*.
///
/// The frontier is ordered by `cost + heuristic(id)`; with a zero heuristic
/// this is uniform-cost search. A vertex is settled the first time it is
/// popped. Stale entries for already-settled ids are dropped on pop.
pub struct BestFirst<T, P, H> {
    edges: P,
    heuristic: H,
    open: Frontier<T>,
    /// Cheapest cost pushed so far for each unsettled id.
    best: HashMap<T, f64>,
    found: Traversal<T>,
    buf: Vec<Edge<T>>,
    limits: Limits,
    pending: Option<usize>,
    limited: bool,
}

impl<T, P, H> BestFirst<T, P, H>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
    H: FnMut(&T) -> f64,
{
    pub(crate) fn new(sources: impl IntoIterator<Item = T>, mut heuristic: H, edges: P) -> Self {
        let mut open = Frontier::new();
        let mut best = HashMap::new();
        for src in sources {
            if best.contains_key(&src) {
                continue;
            }
            let h = heuristic(&src);
            best.insert(src.clone(), 0.0);
            open.push(src, 0.0, h, None);
        }
        Self {
            edges,
            heuristic,
            open,
            best,
            found: Traversal::new(),
            buf: Vec::new(),
            limits: Limits::default(),
            pending: None,
            limited: false,
        }
    }

    /// Apply search bounds.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Vertices settled so far.
    #[inline]
    pub fn settled(&self) -> usize {
        self.found.len()
    }

    /// Entries waiting in the frontier, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    /// Path from a source to a vertex this search produced.
    pub fn path(&self, v: &Vertex<T>) -> Vec<&Vertex<T>> {
        self.found.path(v)
    }

    /// Settle the next vertex and return its arena index.
    ///
    /// As in [`Bfs`], the previously returned vertex is expanded lazily on
    /// the following call.
    fn advance(&mut self) -> Option<usize> {
        if let Some(pi) = self.pending.take() {
            self.expand(pi);
        }
        if self.limits.is_full(self.found.len()) {
            if !self.limited && self.has_live_entry() {
                log::debug!("search: settled limit of {} reached", self.found.len());
                self.limited = true;
            }
            return None;
        }

        let ci = loop {
            let entry = self.open.pop()?;
            if self.found.contains(&entry.id) {
                continue;
            }
            self.best.remove(&entry.id);
            break self.found.insert(entry.id, entry.cost, entry.parent);
        };
        self.pending = Some(ci);
        Some(ci)
    }

    fn expand(&mut self, ci: usize) {
        let current = self.found.vertex(ci);
        let current_cost = current.cost;
        let id = current.id.clone();

        self.buf.clear();
        self.edges.edges(&id, &mut self.buf);

        for e in self.buf.drain(..) {
            if self.found.contains(&e.to) {
                continue;
            }
            let tentative = current_cost + e.weight;
            if !self.limits.allows_cost(tentative) {
                self.limited = true;
                continue;
            }
            if let Some(&known) = self.best.get(&e.to) {
                if tentative >= known {
                    continue;
                }
            }
            let priority = tentative + (self.heuristic)(&e.to);
            self.best.insert(e.to.clone(), tentative);
            self.open.push(e.to, tentative, priority, Some(ci));
        }
    }

    /// Drop stale entries off the top of the frontier and report whether an
    /// unsettled one remains.
    fn has_live_entry(&mut self) -> bool {
        while let Some(top) = self.open.peek() {
            if !self.found.contains(&top.id) {
                return true;
            }
            self.open.pop();
        }
        false
    }

    /// Run until `end` matches a settled vertex or the search cannot continue.
    pub fn run_until(mut self, mut end: impl FnMut(&T) -> bool) -> Traversal<T> {
        let mut goal = None;
        while let Some(ci) = self.advance() {
            if end(&self.found.vertex(ci).id) {
                goal = Some(ci);
                break;
            }
        }
        let stop = stop_reason(goal, self.limited);
        self.found.finish(stop, goal);
        self.found
    }
}

impl<T, P, H> Iterator for BestFirst<T, P, H>
where
    T: Clone + Eq + Hash,
    P: EdgeProvider<T>,
    H: FnMut(&T) -> f64,
{
    type Item = Vertex<T>;

    fn next(&mut self) -> Option<Vertex<T>> {
        let ci = self.advance()?;
        Some(self.found.vertex(ci).clone())
    }
}

fn stop_reason(goal: Option<usize>, limited: bool) -> Stop {
    match (goal, limited) {
        (Some(_), _) => Stop::Goal,
        (None, true) => Stop::Limit,
        (None, false) => Stop::Exhausted,
    }
}
