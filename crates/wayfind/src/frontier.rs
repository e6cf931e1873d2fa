//! Priority frontier for Dijkstra and A*.
//!
//! Entries are kept in a min-heap keyed by `(priority, seq)`. Lower
//! priorities pop first; equal priorities pop in insertion order (FIFO).
//! Superseded entries are not removed, the search skips them on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry: a vertex reached at `cost` via arena index `parent`.
#[derive(Debug)]
pub(crate) struct Entry<T> {
    pub(crate) id: T,
    pub(crate) cost: f64,
    pub(crate) parent: Option<usize>,
    /// `cost` plus the heuristic estimate (equal to `cost` for Dijkstra).
    priority: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equals the earliest pushed.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of frontier entries.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, id: T, cost: f64, priority: f64, parent: Option<usize>) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            id,
            cost,
            parent,
            priority,
            seq,
        });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry<T>> {
        self.heap.pop()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&Entry<T>> {
        self.heap.peek()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push("a", 3.0, 3.0, None);
        f.push("b", 1.0, 1.0, None);
        f.push("c", 2.0, 2.0, None);

        assert_eq!(f.pop().map(|e| e.id), Some("b"));
        assert_eq!(f.pop().map(|e| e.id), Some("c"));
        assert_eq!(f.pop().map(|e| e.id), Some("a"));
        assert!(f.pop().is_none());
    }

    #[test]
    fn equal_priorities_are_fifo() {
        let mut f = Frontier::new();
        f.push("first", 1.0, 4.0, None);
        f.push("second", 2.0, 4.0, None);
        f.push("third", 0.0, 4.0, None);
        assert_eq!(f.len(), 3);

        assert_eq!(f.pop().map(|e| e.id), Some("first"));
        assert_eq!(f.pop().map(|e| e.id), Some("second"));
        assert_eq!(f.pop().map(|e| e.id), Some("third"));
    }

    #[test]
    fn priority_not_cost_orders() {
        let mut f = Frontier::new();
        f.push("cheap-but-far", 1.0, 10.0, None);
        f.push("dear-but-close", 5.0, 6.0, Some(0));
        let e = f.pop().unwrap();
        assert_eq!(e.id, "dear-but-close");
        assert_eq!(e.cost, 5.0);
        assert_eq!(e.parent, Some(0));
    }
}
