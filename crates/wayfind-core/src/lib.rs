//! **wayfind-core**: coordinate primitives shared by the wayfind crates.
//!
//! Grid-shaped graphs identify their nodes by a packed 2-D coordinate. This
//! crate provides that key type ([`Point`]) and the rectangle it lives in
//! ([`Range`]), including the row-major flat indexing used by raster maps.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
