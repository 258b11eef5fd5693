//! Generic A* shortest-path search over implicit graphs.
//!
//! The engine knows nothing about the shape of the graph it searches. Callers
//! describe their node space through the [`Graph`] trait (neighbor
//! enumeration plus an admissible heuristic) and the engine returns the
//! cheapest path between two nodes, or reports that none exists.
//!
//! - **Entry point**: [`find_path`], or the [`AStar`] builder when hooks or
//!   tuning are needed.
//! - **Observation**: [`PossiblePath`] receives every goal-reaching route as
//!   it is discovered; [`VisitObserver`] receives every expanded node.
//!   Neither influences the search.
//! - **Errors**: [`SearchError::Unreachable`] when the open set runs dry,
//!   [`SearchError::GraphQueryFailed`] when the graph itself fails.
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible;
//! use wayfind_astar::{Edge, Graph, find_path};
//!
//! /// Integers on a number line, each connected to its successor.
//! struct Line;
//!
//! impl Graph for Line {
//!     type Node = i64;
//!     type Error = Infallible;
//!
//!     fn neighbors(&self, node: i64, edges: &mut Vec<Edge<i64>>) -> Result<(), Infallible> {
//!         edges.push(Edge::new(node + 1, 1.0));
//!         Ok(())
//!     }
//!
//!     fn heuristic_cost(&self, from: i64, to: i64) -> Result<f64, Infallible> {
//!         Ok((to - from).abs() as f64)
//!     }
//! }
//!
//! let path = find_path(&Line, 3, 6).unwrap();
//! assert_eq!(path, vec![3, 4, 5, 6]);
//! ```

mod config;
mod error;
mod graph;
mod hooks;
mod open_set;
mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use graph::{Edge, Graph};
pub use hooks::{PossiblePath, Visit, VisitObserver};
pub use search::{AStar, Solution, find_path};
