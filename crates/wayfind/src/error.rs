use std::fmt;

/// Why a search that was expected to reach a goal did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Every reachable vertex was settled without the end predicate matching.
    Unreachable,
    /// A [`Limits`](crate::Limits) bound stopped the search first.
    LimitReached { settled: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => write!(f, "search: goal is unreachable"),
            Self::LimitReached { settled } => {
                write!(f, "search: limit reached after {settled} vertices")
            }
        }
    }
}

impl std::error::Error for SearchError {}
