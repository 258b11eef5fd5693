//! Optional observation channels.
//!
//! A search holds at most one handler of each kind. Handlers only watch:
//! nothing they do feeds back into node ordering or relaxation.

/// Receives every route to the goal as soon as it is found, before the
/// search has proven it optimal.
///
/// Reported costs never increase over the course of one search; the last
/// report carries the cost of the path eventually returned.
pub trait PossiblePath<N> {
    fn possible_path(&mut self, path: &[N], cost: f64);
}

impl<N, F> PossiblePath<N> for F
where
    F: FnMut(&[N], f64),
{
    #[inline]
    fn possible_path(&mut self, path: &[N], cost: f64) {
        self(path, cost)
    }
}

/// One node being expanded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit<N> {
    pub node: N,
    /// `None` for the start node.
    pub parent: Option<N>,
    /// Best known cost from the start to `node`.
    pub current_cost: f64,
    /// Heuristic estimate from `node` to the goal.
    pub predicted_cost: f64,
}

/// Receives a [`Visit`] each time a node is popped from the open set and
/// expanded.
pub trait VisitObserver<N> {
    fn visited(&mut self, visit: &Visit<N>);
}

impl<N, F> VisitObserver<N> for F
where
    F: FnMut(&Visit<N>),
{
    #[inline]
    fn visited(&mut self, visit: &Visit<N>) {
        self(visit)
    }
}
