use std::f64::consts::SQRT_2;

use wayfind_core::Point;

/// One admissible move on a grid: an offset and its base cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub delta: Point,
    pub cost: f64,
}

impl Step {
    const fn new(dx: i32, dy: i32, cost: f64) -> Self {
        Self {
            delta: Point::new(dx, dy),
            cost,
        }
    }
}

static CARDINAL: [Step; 4] = [
    Step::new(-1, 0, 1.0),
    Step::new(1, 0, 1.0),
    Step::new(0, -1, 1.0),
    Step::new(0, 1, 1.0),
];

// West column, east column, then straight up and down.
static OCTILE: [Step; 8] = [
    Step::new(-1, 0, 1.0),
    Step::new(-1, -1, SQRT_2),
    Step::new(-1, 1, SQRT_2),
    Step::new(1, 0, 1.0),
    Step::new(1, -1, SQRT_2),
    Step::new(1, 1, SQRT_2),
    Step::new(0, -1, 1.0),
    Step::new(0, 1, 1.0),
];

/// Which neighbors a grid cell connects to.
///
/// The step order is fixed and is the order in which neighbors are
/// reported, which keeps tie-breaking between equal-cost paths stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// 4-way: west, east, north, south.
    Cardinal,
    /// 8-way, diagonals cost √2.
    #[default]
    Octile,
}

impl Movement {
    #[inline]
    pub fn steps(self) -> &'static [Step] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Octile => &OCTILE,
        }
    }

    /// Cost of moving directly from `from` to the adjacent `to`, or `None`
    /// if this movement does not allow that step.
    pub fn step_cost(self, from: Point, to: Point) -> Option<f64> {
        let delta = to - from;
        self.steps()
            .iter()
            .find(|s| s.delta == delta)
            .map(|s| s.cost)
    }
}
