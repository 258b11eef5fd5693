//! Luminance cost maps: shortest paths along regions of similar brightness.

use wayfind_astar::{Edge, Graph};
use wayfind_core::Point;

use crate::distance;
use crate::error::MapError;
use crate::movement::Movement;

/// Cost of stepping between two pixels: grows with the square of their
/// brightness difference and is never below 1.
#[inline]
fn luma_cost(a: u8, b: u8) -> f64 {
    let d = f64::from(a.abs_diff(b));
    d * d + 1.0
}

/// An 8-bit luminance raster viewed as an 8-connected graph.
///
/// Nodes are row-major pixel indices (`y * width + x`). Moving to a
/// neighboring pixel costs `|a - b|² + 1`, times √2 for diagonal moves, so
/// the Euclidean pixel distance is an admissible heuristic.
///
/// The pixel buffer is borrowed and may be interleaved: `x_stride` is the
/// byte distance between horizontally adjacent samples, `y_stride` between
/// rows.
#[derive(Debug, Clone)]
pub struct LumaMap<'a> {
    pix: &'a [u8],
    width: usize,
    height: usize,
    x_stride: usize,
    y_stride: usize,
    stddev: f64,
}

impl<'a> LumaMap<'a> {
    /// A tightly packed single-channel image.
    pub fn new(pix: &'a [u8], width: usize, height: usize) -> Result<Self, MapError> {
        Self::with_strides(pix, width, height, 1, width)
    }

    /// An image whose samples are `x_stride` bytes apart within a row and
    /// whose rows start `y_stride` bytes apart.
    pub fn with_strides(
        pix: &'a [u8],
        width: usize,
        height: usize,
        x_stride: usize,
        y_stride: usize,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyImage);
        }
        let too_large = MapError::ImageTooLarge { width, height };
        // Pixel coordinates must fit a Point and node ids must fit a u64.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large);
        }
        match width.checked_mul(height) {
            Some(n) if u64::try_from(n).is_ok() => {}
            _ => return Err(too_large),
        }
        let needed = (height - 1)
            .checked_mul(y_stride)
            .zip((width - 1).checked_mul(x_stride))
            .and_then(|(rows, cols)| rows.checked_add(cols))
            .and_then(|last| last.checked_add(1))
            .ok_or(too_large)?;
        if pix.len() < needed {
            return Err(MapError::BufferTooSmall {
                needed,
                actual: pix.len(),
            });
        }
        let mut map = Self {
            pix,
            width,
            height,
            x_stride,
            y_stride,
            stddev: 0.0,
        };
        map.stddev = map.sample_stddev();
        Ok(map)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample standard deviation of the image brightness.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Node id of pixel `(x, y)`.
    #[inline]
    pub fn node(&self, x: usize, y: usize) -> u64 {
        (y * self.width + x) as u64
    }

    /// Top-left and bottom-right pixels.
    pub fn corners(&self) -> (u64, u64) {
        (0, self.node(self.width - 1, self.height - 1))
    }

    /// Pixel coordinates of `node`, or `None` outside the image.
    #[inline]
    pub fn coords(&self, node: u64) -> Option<Point> {
        let idx = usize::try_from(node).ok()?;
        if idx >= self.width * self.height {
            return None;
        }
        Some(Point::new(
            (idx % self.width) as i32,
            (idx / self.width) as i32,
        ))
    }

    /// Brightness at pixel `p`, which must lie inside the image.
    #[inline]
    fn luma(&self, p: Point) -> u8 {
        self.pix[p.y as usize * self.y_stride + p.x as usize * self.x_stride]
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn locate(&self, node: u64) -> Result<Point, MapError> {
        self.coords(node).ok_or(MapError::NodeOutOfRange(node))
    }

    /// Running (Welford) variance over every pixel.
    fn sample_stddev(&self) -> f64 {
        let mut count = 0u64;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for y in 0..self.height {
            for x in 0..self.width {
                let v = f64::from(self.luma(Point::new(x as i32, y as i32)));
                count += 1;
                let delta = v - mean;
                mean += delta / count as f64;
                m2 += delta * (v - mean);
            }
        }
        if count < 2 {
            return 0.0;
        }
        (m2 / (count - 1) as f64).sqrt()
    }
}

impl Graph for LumaMap<'_> {
    type Node = u64;
    type Error = MapError;

    fn neighbors(&self, node: u64, edges: &mut Vec<Edge<u64>>) -> Result<(), MapError> {
        let p = self.locate(node)?;
        let here = self.luma(p);
        for step in Movement::Octile.steps() {
            let q = p + step.delta;
            if !self.contains(q) {
                continue;
            }
            let cost = step.cost * luma_cost(here, self.luma(q));
            edges.push(Edge::new(self.node(q.x as usize, q.y as usize), cost));
        }
        Ok(())
    }

    fn heuristic_cost(&self, from: u64, to: u64) -> Result<f64, MapError> {
        Ok(distance::euclidean(self.locate(from)?, self.locate(to)?))
    }
}
