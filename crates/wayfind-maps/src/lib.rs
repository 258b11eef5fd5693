//! Ready-made graphs for [`wayfind_astar`].
//!
//! - [`GridMap`]: blocked/open cells keyed by [`Point`], 4- or 8-way
//!   movement, Euclidean heuristic.
//! - [`LumaMap`]: an 8-bit luminance raster keyed by pixel index, where
//!   stepping between pixels costs more the more their brightness differs.
//!
//! Both report queries about nodes outside their bounds as [`MapError`]s,
//! which the search surfaces as
//! [`SearchError::GraphQueryFailed`](wayfind_astar::SearchError).

mod distance;
mod error;
mod grid;
mod luma;
mod movement;

pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use error::MapError;
pub use grid::GridMap;
pub use luma::LumaMap;
pub use movement::{Movement, Step};
pub use wayfind_core::{Point, Range};
