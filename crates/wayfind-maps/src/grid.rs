//! Blocked/open cell maps keyed by [`Point`].

use std::fmt::{self, Write as _};

use wayfind_astar::{Edge, Graph};
use wayfind_core::{Point, Range};

use crate::distance;
use crate::error::MapError;
use crate::movement::Movement;

const BLOCKED: char = '#';

/// A rectangular map of passable and blocked cells.
///
/// Every passable cell connects to its passable neighbors according to the
/// map's [`Movement`]; the heuristic is the straight-line distance, which
/// never overestimates for either movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    range: Range,
    blocked: Vec<bool>,
    movement: Movement,
}

/// The range covering a `width` by `height` map anchored at the origin.
fn map_range(width: i32, height: i32) -> Result<Range, MapError> {
    if width <= 0 || height <= 0 {
        return Err(MapError::InvalidSize { width, height });
    }
    Ok(Range::with_size(width, height))
}

impl GridMap {
    /// A fully passable map. Both dimensions must be positive.
    pub fn new(width: i32, height: i32, movement: Movement) -> Result<Self, MapError> {
        let range = map_range(width, height)?;
        Ok(Self {
            range,
            blocked: vec![false; range.len()],
            movement,
        })
    }

    /// Build a map from row-major blocked flags.
    pub fn from_cells(
        width: i32,
        height: i32,
        blocked: Vec<bool>,
        movement: Movement,
    ) -> Result<Self, MapError> {
        let range = map_range(width, height)?;
        if blocked.len() != range.len() {
            return Err(MapError::CellCountMismatch {
                width,
                height,
                actual: blocked.len(),
            });
        }
        Ok(Self {
            range,
            blocked,
            movement,
        })
    }

    /// Parse a map drawn in ASCII.
    ///
    /// `#` is a blocked cell; `.` and space are passable. All lines must
    /// have the same width. Blank leading and trailing lines are ignored.
    pub fn parse(s: &str, movement: Movement) -> Result<Self, MapError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        let mut blocked = Vec::with_capacity(s.len());
        let mut expected = None;
        let mut rows = 0;

        for (y, line) in s.lines().enumerate() {
            let mut width = 0;
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    BLOCKED => blocked.push(true),
                    '.' | ' ' => blocked.push(false),
                    _ => {
                        return Err(MapError::InvalidCell {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                }
                width += 1;
            }
            match expected {
                None => expected = Some(width),
                Some(w) if w != width => {
                    return Err(MapError::InconsistentWidth {
                        row: y,
                        width,
                        expected: w,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let width = expected.unwrap_or(0) as i32;
        Self::from_cells(width, rows, blocked, movement)
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.range.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.range.height()
    }

    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Row-major index of `p`, or `None` outside the map.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.range.index_of(p)
    }

    /// Inverse of [`GridMap::index`].
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        self.range.point_at(idx)
    }

    /// Whether `p` is blocked. Cells outside the map count as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.index(p).is_none_or(|i| self.blocked[i])
    }

    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), MapError> {
        let i = self.index(p).ok_or(MapError::OutOfBounds(p))?;
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Total movement cost of a path, or `None` if two consecutive points
    /// are not a single step apart.
    pub fn path_cost(&self, path: &[Point]) -> Option<f64> {
        path.windows(2)
            .map(|w| self.movement.step_cost(w[0], w[1]))
            .sum()
    }

    /// Draw the map with `path` overlaid: `#` blocked, `.` open, `*` path.
    pub fn render(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity(self.range.len() + self.height() as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if path.contains(&p) {
                    '*'
                } else if self.is_blocked(p) {
                    BLOCKED
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn check(&self, p: Point) -> Result<(), MapError> {
        if self.range.contains(p) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds(p))
        }
    }
}

impl Graph for GridMap {
    type Node = Point;
    type Error = MapError;

    fn neighbors(&self, node: Point, edges: &mut Vec<Edge<Point>>) -> Result<(), MapError> {
        self.check(node)?;
        for step in self.movement.steps() {
            let q = node + step.delta;
            if !self.is_blocked(q) {
                edges.push(Edge::new(q, step.cost));
            }
        }
        Ok(())
    }

    fn heuristic_cost(&self, from: Point, to: Point) -> Result<f64, MapError> {
        self.check(from)?;
        self.check(to)?;
        Ok(distance::euclidean(from, to))
    }
}

/// Writes the grid in the format read by [`GridMap::parse`].
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width() {
                let ch = if self.is_blocked(Point::new(x, y)) { BLOCKED } else { '.' };
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wayfind_astar::{AStar, SearchError, find_path};

    use super::*;

    const WALL_WITH_GAP: &str = "
....#.....
.##.#.....
..#.#.....
..#.#.....
..#.#..##.
..#.#...#.
..#.#..#..
###.#.#...
....#.....
..........
";

    fn wall_map() -> GridMap {
        GridMap::parse(WALL_WITH_GAP, Movement::Octile).unwrap()
    }

    fn points(map: &GridMap, indices: &[usize]) -> Vec<Point> {
        indices.iter().map(|&i| map.point(i).unwrap()).collect()
    }

    #[test]
    fn parse_fixture() {
        let map = wall_map();
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 10);
        assert!(map.is_blocked(Point::new(4, 0)));
        assert!(!map.is_blocked(Point::new(4, 9)));
        assert!(map.is_blocked(Point::new(-1, 0)));
        assert_eq!(map.to_string(), WALL_WITH_GAP.trim_matches('\n'));
    }

    #[test]
    fn parse_rejects_ragged_rows_and_unknown_cells() {
        assert_eq!(
            GridMap::parse("...\n..\n...", Movement::Octile),
            Err(MapError::InconsistentWidth {
                row: 1,
                width: 2,
                expected: 3,
            })
        );
        assert_eq!(
            GridMap::parse("..\n.x", Movement::Octile),
            Err(MapError::InvalidCell {
                ch: 'x',
                pos: Point::new(1, 1),
            })
        );
        assert_eq!(
            GridMap::from_cells(3, 3, vec![false; 8], Movement::Cardinal),
            Err(MapError::CellCountMismatch {
                width: 3,
                height: 3,
                actual: 8,
            })
        );
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(
            GridMap::new(-3, 4, Movement::Octile),
            Err(MapError::InvalidSize {
                width: -3,
                height: 4
            })
        );
        assert_eq!(
            GridMap::new(5, 0, Movement::Cardinal),
            Err(MapError::InvalidSize {
                width: 5,
                height: 0
            })
        );
        assert_eq!(
            GridMap::from_cells(-2, -2, vec![false; 4], Movement::Octile),
            Err(MapError::InvalidSize {
                width: -2,
                height: -2
            })
        );
        assert_eq!(
            GridMap::parse("\n\n", Movement::Octile),
            Err(MapError::InvalidSize {
                width: 0,
                height: 0
            })
        );
        let map = GridMap::new(3, 2, Movement::Octile).unwrap();
        assert_eq!(map.range().min, Point::ZERO);
        assert_eq!(map.to_string(), "...\n...");
    }

    #[test]
    fn path_threads_through_the_gap() {
        let map = wall_map();
        let start = map.point(50).unwrap();
        let end = map.point(39).unwrap();
        let path = find_path(&map, start, end).unwrap();

        let expected = points(
            &map,
            &[
                50, 40, 30, 20, 10, 1, 2, 13, 23, 33, 43, 53, 63, 73, 83, 94, 85, 86, 77, 68, 59,
                49, 39,
            ],
        );
        assert_eq!(path, expected, "\n{}", map.render(&path));
    }

    #[test]
    fn solution_cost_matches_path_steps() {
        let map = wall_map();
        let sol = AStar::new(&map)
            .search(Point::new(0, 5), Point::new(9, 3))
            .unwrap();
        let steps = map.path_cost(&sol.path).unwrap();
        assert!((sol.cost - steps).abs() < 1e-4, "{} vs {steps}", sol.cost);
    }

    #[test]
    fn closed_gap_is_unreachable() {
        let mut map = wall_map();
        map.set_blocked(Point::new(4, 9), true).unwrap();
        let err = find_path(&map, Point::new(0, 5), Point::new(9, 3)).unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn walled_in_start_is_unreachable() {
        let mut map = wall_map();
        for x in 0..3 {
            map.set_blocked(Point::new(x, 1), true).unwrap();
        }
        let err = find_path(&map, Point::new(0, 5), Point::new(9, 3)).unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn open_map_costs_match_distance_formulas() {
        let octile = GridMap::new(12, 9, Movement::Octile).unwrap();
        let cardinal = GridMap::new(12, 9, Movement::Cardinal).unwrap();
        let from = Point::new(1, 7);
        for to in octile.range() {
            let sol = AStar::new(&octile).search(from, to).unwrap();
            assert!((sol.cost - distance::octile(from, to)).abs() < 1e-4);

            let sol = AStar::new(&cardinal).search(from, to).unwrap();
            assert_eq!(sol.cost, f64::from(distance::manhattan(from, to)));
            assert_eq!(sol.path.len() as i32, distance::manhattan(from, to) + 1);
        }
    }

    #[test]
    fn same_start_and_end() {
        let map = wall_map();
        let p = Point::new(6, 6);
        assert_eq!(find_path(&map, p, p).unwrap(), vec![p]);
    }

    #[test]
    fn nodes_outside_the_map_fail_the_query() {
        let map = wall_map();
        let err = find_path(&map, Point::new(0, 5), Point::new(10, 3)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::GraphQueryFailed(MapError::OutOfBounds(p)) if p == Point::new(10, 3)
        ));

        let mut edges = Vec::new();
        assert_eq!(
            map.neighbors(Point::new(0, -1), &mut edges),
            Err(MapError::OutOfBounds(Point::new(0, -1)))
        );
    }

    #[test]
    fn neighbors_skip_blocked_cells_in_fixed_order() {
        let map = GridMap::parse("...\n.#.\n...", Movement::Octile).unwrap();
        let mut edges = Vec::new();
        map.neighbors(Point::new(1, 0), &mut edges).unwrap();
        let got: Vec<Point> = edges.iter().map(|e| e.node).collect();
        assert_eq!(
            got,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(2, 0), Point::new(2, 1)]
        );
    }

    #[test]
    fn possible_paths_improve_toward_the_result() {
        let map = wall_map();
        let mut costs = Vec::new();
        let mut report = |path: &[Point], cost: f64| {
            assert_eq!(path.last(), Some(&Point::new(9, 3)));
            costs.push(cost);
        };
        let sol = AStar::new(&map)
            .on_possible_path(&mut report)
            .search(Point::new(0, 5), Point::new(9, 3))
            .unwrap();
        assert!(!costs.is_empty());
        assert!(costs.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(costs.last().copied(), Some(sol.cost));
    }

    #[test]
    fn render_marks_path() {
        let map = GridMap::parse("...\n##.\n...", Movement::Cardinal).unwrap();
        let path = find_path(&map, Point::new(0, 0), Point::new(0, 2)).unwrap();
        assert_eq!(map.render(&path), "***\n##*\n***\n");
    }
}
