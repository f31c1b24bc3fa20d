use std::cmp::Ordering;

use crate::data::Point;

/// Default comparison slack, in drawing units.
pub const EPSILON: f64 = 0.001;

/// Epsilon tolerant comparator.
///
/// Two points are equal when both coordinate deltas are within `epsilon`.
/// Otherwise they are ordered lexicographically, x first. This ordering
/// defines the minimum vertex of a loop, which in turn drives orientation
/// detection and the void splicing order, so every sort, min and contains
/// in the crate goes through here rather than through `PartialEq`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
  pub epsilon: f64,
}

impl Default for Tolerance {
  fn default() -> Self {
    Tolerance { epsilon: EPSILON }
  }
}

impl Tolerance {
  pub const fn new(epsilon: f64) -> Tolerance {
    Tolerance { epsilon }
  }

  #[inline]
  pub fn near_zero(self, value: f64) -> bool {
    value.abs() <= self.epsilon
  }

  #[inline]
  pub fn approx_eq(self, a: f64, b: f64) -> bool {
    self.near_zero(a - b)
  }

  pub fn cmp(self, a: &Point, b: &Point) -> Ordering {
    let dx = a.x_coord() - b.x_coord();
    if dx.abs() > self.epsilon {
      return if dx < 0.0 {
        Ordering::Less
      } else {
        Ordering::Greater
      };
    }
    let dy = a.y_coord() - b.y_coord();
    if dy.abs() > self.epsilon {
      return if dy < 0.0 {
        Ordering::Less
      } else {
        Ordering::Greater
      };
    }
    Ordering::Equal
  }

  pub fn eq(self, a: &Point, b: &Point) -> bool {
    self.cmp(a, b) == Ordering::Equal
  }

  /// Index of the minimum point. The first of several equal points wins.
  pub fn min_index(self, points: &[Point]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut best, mut min) = iter.next()?;
    for (idx, pt) in iter {
      if self.cmp(pt, min) == Ordering::Less {
        best = idx;
        min = pt;
      }
    }
    Some(best)
  }

  /// Index of the maximum point. The first of several equal points wins.
  pub fn max_index(self, points: &[Point]) -> Option<usize> {
    let mut iter = points.iter().enumerate();
    let (mut best, mut max) = iter.next()?;
    for (idx, pt) in iter {
      if self.cmp(pt, max) == Ordering::Greater {
        best = idx;
        max = pt;
      }
    }
    Some(best)
  }

  /// Position of the first point equal to `needle`.
  pub fn position(self, points: &[Point], needle: &Point) -> Option<usize> {
    points.iter().position(|pt| self.eq(pt, needle))
  }
}
