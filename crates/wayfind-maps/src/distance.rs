use wayfind_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    ((dx * dx + dy * dy) as f64).sqrt()
}

/// Shortest 8-way distance with unit straight steps and √2 diagonals.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(hi - lo) + f64::from(lo) * std::f64::consts::SQRT_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 6);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(euclidean(a, b), 5.0);
        assert!((octile(a, b) - (1.0 + 3.0 * std::f64::consts::SQRT_2)).abs() < 1e-12);
        assert_eq!(octile(a, a), 0.0);
    }

    #[test]
    fn octile_never_exceeds_manhattan_nor_undercuts_euclidean() {
        let o = Point::ZERO;
        for p in wayfind_core::Range::new(-5, -5, 6, 6) {
            let d = octile(o, p);
            assert!(d <= f64::from(manhattan(o, p)) + 1e-9);
            assert!(d + 1e-9 >= euclidean(o, p));
        }
    }
}
