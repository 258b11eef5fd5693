use std::fmt::Debug;
use std::hash::Hash;

/// One directed transition out of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    /// Destination node.
    pub node: N,
    /// Cost of moving to `node`. Must be non-negative.
    pub cost: f64,
}

impl<N> Edge<N> {
    #[inline]
    pub const fn new(node: N, cost: f64) -> Self {
        Self { node, cost }
    }
}

/// The node space searched by [`AStar`](crate::AStar).
///
/// Both operations may fail; the first failure aborts the search and is
/// returned wrapped in [`SearchError::GraphQueryFailed`](crate::SearchError).
/// Graphs that cannot fail use [`std::convert::Infallible`].
pub trait Graph {
    /// Opaque node identity. The engine only compares, hashes and copies it.
    type Node: Copy + Eq + Hash + Ord + Debug;
    type Error: std::error::Error + 'static;

    /// Append every outgoing edge of `node` to `edges`.
    ///
    /// `edges` is a scratch buffer owned by the search; it is cleared before
    /// each call and must not be retained.
    fn neighbors(
        &self,
        node: Self::Node,
        edges: &mut Vec<Edge<Self::Node>>,
    ) -> Result<(), Self::Error>;

    /// Lower bound on the cost of reaching `to` from `from`.
    ///
    /// An overestimating heuristic is not detected: the search still
    /// terminates but the returned path may be suboptimal.
    fn heuristic_cost(&self, from: Self::Node, to: Self::Node) -> Result<f64, Self::Error>;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;
    type Error = G::Error;

    #[inline]
    fn neighbors(
        &self,
        node: Self::Node,
        edges: &mut Vec<Edge<Self::Node>>,
    ) -> Result<(), Self::Error> {
        (**self).neighbors(node, edges)
    }

    #[inline]
    fn heuristic_cost(&self, from: Self::Node, to: Self::Node) -> Result<f64, Self::Error> {
        (**self).heuristic_cost(from, to)
    }
}
