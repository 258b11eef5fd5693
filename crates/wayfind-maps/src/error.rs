use thiserror::Error;
use wayfind_core::Point;

/// Errors raised while building or querying a map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map: {0} is outside the map")]
    OutOfBounds(Point),
    #[error("map: node {0} is outside the image")]
    NodeOutOfRange(u64),
    #[error("map: image has no pixels")]
    EmptyImage,
    #[error("map: {width}x{height} image is too large to address")]
    ImageTooLarge { width: usize, height: usize },
    #[error("map: pixel buffer holds {actual} bytes, need at least {needed}")]
    BufferTooSmall { needed: usize, actual: usize },
    #[error("map: invalid size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("map: {actual} cells given for a {width}x{height} map")]
    CellCountMismatch {
        width: i32,
        height: i32,
        actual: usize,
    },
    #[error("map: row {row} is {width} cells wide, expected {expected}")]
    InconsistentWidth {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("map: invalid cell \u{201c}{ch}\u{201d} at {pos}")]
    InvalidCell { ch: char, pos: Point },
}
