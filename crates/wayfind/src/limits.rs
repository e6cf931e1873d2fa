/// Optional bounds on a search.
///
/// The default is unbounded. `max_cost` keeps any vertex whose cost would
/// exceed it out of the frontier, like the distance ceiling of a bounded
/// distance map. `max_settled` stops the search once that many vertices
/// have been produced in finalized order. Either bound being hit is
/// reported as [`Stop::Limit`](crate::Stop::Limit).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub max_cost: Option<f64>,
    pub max_settled: Option<usize>,
}

impl Limits {
    /// No bounds.
    pub const fn unbounded() -> Self {
        Self {
            max_cost: None,
            max_settled: None,
        }
    }

    #[must_use]
    pub const fn max_cost(mut self, cost: f64) -> Self {
        self.max_cost = Some(cost);
        self
    }

    #[must_use]
    pub const fn max_settled(mut self, n: usize) -> Self {
        self.max_settled = Some(n);
        self
    }

    /// Whether a vertex at `cost` may enter the frontier.
    #[inline]
    pub(crate) fn allows_cost(&self, cost: f64) -> bool {
        self.max_cost.is_none_or(|max| cost <= max)
    }

    /// Whether `settled` vertices already fill the budget.
    #[inline]
    pub(crate) fn is_full(&self, settled: usize) -> bool {
        self.max_settled.is_some_and(|max| settled >= max)
    }
}
