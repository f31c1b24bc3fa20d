use crate::data::Point;

/// Turn direction of three points.
///
/// The crate works in laser bed coordinates where the y axis points down.
/// Walking `p1 -> p2 -> p3` is counter-clockwise when the cross product
/// `(p2 - p1) x (p3 - p1)` is negative. Every orientation decision in the
/// crate (loop orientation, ear convexity, triangle `ccwize`) uses this
/// rule.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use panelcut::data::Point;
  /// # use panelcut::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([1.0, 0.0]);
  /// assert!(Orientation::new(&p1, &p2, &Point::new([2.0, 0.0])).is_colinear());
  /// // Turning towards negative y is counter-clockwise on screen.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, -1.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 1.0])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::from_cross(cross(p1, p2, p3))
  }

  pub fn from_cross(cross: f64) -> Orientation {
    if cross < 0.0 {
      CounterClockWise
    } else if cross > 0.0 {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

/// `(p2 - p1) x (p3 - p1)`
pub(crate) fn cross(p1: &Point, p2: &Point, p3: &Point) -> f64 {
  let [ax, ay] = p1.array;
  let [bx, by] = p2.array;
  let [cx, cy] = p3.array;
  (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
}
