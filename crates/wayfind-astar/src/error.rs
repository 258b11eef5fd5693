use thiserror::Error;

/// Why a search produced no path.
#[derive(Debug, Error)]
pub enum SearchError<E> {
    /// Every reachable node was explored without reaching the goal.
    #[error("astar: no path exists between start and end")]
    Unreachable,
    /// Neighbor enumeration or heuristic evaluation failed; the search was
    /// abandoned at that point.
    #[error("astar: graph query failed: {0}")]
    GraphQueryFailed(#[source] E),
}

impl<E> SearchError<E> {
    /// Whether the search space was exhausted (as opposed to a graph failure).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }

    /// The underlying graph error, if any.
    pub fn into_graph_error(self) -> Option<E> {
        match self {
            Self::Unreachable => None,
            Self::GraphQueryFailed(e) => Some(e),
        }
    }
}
