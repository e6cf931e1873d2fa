/// A directed, weighted edge to `to`.
///
/// Dijkstra and A* require `weight >= 0`; BFS ignores the weight and counts
/// every edge as one hop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
    pub to: T,
    pub weight: f64,
}

impl<T> Edge<T> {
    #[inline]
    pub fn new(to: T, weight: f64) -> Self {
        Self { to, weight }
    }

    /// An edge of weight 1.
    #[inline]
    pub fn unit(to: T) -> Self {
        Self { to, weight: 1.0 }
    }
}

/// A settled vertex: its id, the final cost from the nearest source, and the
/// arena index of the vertex it was reached from.
///
/// Parents are indices into the [`Traversal`](crate::Traversal) (or lazy
/// iterator) that produced the vertex, so they only mean something there.
/// Sources have no parent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<T> {
    pub id: T,
    pub cost: f64,
    pub(crate) parent: Option<usize>,
}

impl<T> Vertex<T> {
    /// Arena index of the predecessor, `None` for a source.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn is_source(&self) -> bool {
        self.parent.is_none()
    }

    /// The cost as a whole number of steps, rounded to the nearest integer.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.cost.round() as u64
    }
}
