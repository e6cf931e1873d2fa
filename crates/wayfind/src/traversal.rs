use std::collections::HashMap;
use std::hash::Hash;

use crate::{SearchError, Vertex};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stop {
    /// The end predicate matched a settled vertex.
    Goal,
    /// The frontier ran empty.
    Exhausted,
    /// A [`Limits`](crate::Limits) bound cut the search short.
    Limit,
}

/// The settled vertices of one search, in settlement order.
///
/// This is also the arena that vertex parent indices point into. Every id
/// appears at most once.
#[derive(Debug, Clone)]
pub struct Traversal<T> {
    vertices: Vec<Vertex<T>>,
    index: HashMap<T, usize>,
    goal: Option<usize>,
    stop: Stop,
}

impl<T: Clone + Eq + Hash> Traversal<T> {
    pub(crate) fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            goal: None,
            stop: Stop::Exhausted,
        }
    }

    /// Settle `id`. The caller guarantees it is not settled yet.
    pub(crate) fn insert(&mut self, id: T, cost: f64, parent: Option<usize>) -> usize {
        let idx = self.vertices.len();
        self.index.insert(id.clone(), idx);
        self.vertices.push(Vertex { id, cost, parent });
        idx
    }

    #[inline]
    pub(crate) fn vertex(&self, idx: usize) -> &Vertex<T> {
        &self.vertices[idx]
    }

    pub(crate) fn finish(&mut self, stop: Stop, goal: Option<usize>) {
        self.stop = stop;
        self.goal = goal;
    }

    /// Number of settled vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Settled vertices in settlement order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }

    #[inline]
    pub fn contains(&self, id: &T) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &T) -> Option<&Vertex<T>> {
        self.index.get(id).map(|&i| &self.vertices[i])
    }

    /// Final cost of `id`, if it was settled.
    pub fn cost(&self, id: &T) -> Option<f64> {
        self.get(id).map(|v| v.cost)
    }

    /// Whole-number cost of `id`, if it was settled. See [`Vertex::steps`].
    pub fn steps_to(&self, id: &T) -> Option<u64> {
        self.get(id).map(Vertex::steps)
    }

    /// The vertex that satisfied the end predicate.
    pub fn goal(&self) -> Option<&Vertex<T>> {
        self.goal.map(|i| &self.vertices[i])
    }

    /// The most recently settled vertex.
    pub fn last(&self) -> Option<&Vertex<T>> {
        self.vertices.last()
    }

    #[inline]
    pub fn stop(&self) -> Stop {
        self.stop
    }

    /// The goal vertex, or why there is none.
    pub fn require_goal(&self) -> Result<&Vertex<T>, SearchError> {
        match (self.stop, self.goal()) {
            (Stop::Goal, Some(v)) => Ok(v),
            (Stop::Limit, _) => Err(SearchError::LimitReached {
                settled: self.len(),
            }),
            _ => Err(SearchError::Unreachable),
        }
    }

    /// Path from a source to `v`, both inclusive.
    ///
    /// Empty if `v` was not settled by this traversal.
    pub fn path(&self, v: &Vertex<T>) -> Vec<&Vertex<T>> {
        self.path_to(&v.id).unwrap_or_default()
    }

    /// Path from a source to the vertex settled as `id`, both inclusive.
    pub fn path_to(&self, id: &T) -> Option<Vec<&Vertex<T>>> {
        let mut cur = Some(*self.index.get(id)?);
        let mut path = Vec::new();
        while let Some(i) = cur {
            let v = &self.vertices[i];
            path.push(v);
            cur = v.parent;
        }
        path.reverse();
        Some(path)
    }

    /// Ids along [`path_to`](Self::path_to).
    pub fn ids_to(&self, id: &T) -> Option<Vec<T>> {
        self.path_to(id)
            .map(|p| p.into_iter().map(|v| v.id.clone()).collect())
    }

    /// Final cost of every settled id.
    pub fn costs(&self) -> HashMap<T, f64> {
        self.vertices
            .iter()
            .map(|v| (v.id.clone(), v.cost))
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a Traversal<T> {
    type Item = &'a Vertex<T>;
    type IntoIter = std::slice::Iter<'a, Vertex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
