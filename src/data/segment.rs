use super::{Point, Vector};
use crate::Tolerance;

/// Where a disc of some radius sits relative to a segment's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
  Right,
  Left,
  /// The disc crosses the line.
  Touching,
}

///////////////////////////////////////////////////////////////////////////////
// Segment

/// Directed line piece stored as origin + delta. `end = origin + delta`.
///
/// Geometric operations borrow `self` and return fresh values; only the
/// `set_*` methods mutate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
  origin: Point,
  delta: Vector,
}

impl Segment {
  pub fn from_delta(origin: Point, delta: Vector) -> Segment {
    Segment { origin, delta }
  }

  pub fn from_end(origin: Point, end: Point) -> Segment {
    Segment {
      origin,
      delta: end - origin,
    }
  }

  pub fn origin(&self) -> Point {
    self.origin
  }

  pub fn delta(&self) -> Vector {
    self.delta
  }

  pub fn end(&self) -> Point {
    self.origin + self.delta
  }

  /// Moves the origin. The delta is kept, so the end moves along.
  pub fn set_origin(&mut self, origin: Point) {
    self.origin = origin;
  }

  pub fn set_delta(&mut self, delta: Vector) {
    self.delta = delta;
  }

  /// Moves the end by recomputing the delta. The origin stays put.
  pub fn set_end(&mut self, end: Point) {
    self.delta = end - self.origin;
  }

  pub fn magnitude(&self) -> f64 {
    self.delta.magnitude()
  }

  /// Whether `p` is on the left of the directed segment (negative cross
  /// product in screen coordinates).
  pub fn is_left(&self, p: &Point) -> bool {
    self.delta.cross(&(p - &self.origin)) < 0.0
  }

  /// Classify a disc of radius `r` around `p` against this segment's line.
  pub fn classify(&self, p: &Point, r: f64) -> Region {
    if self.distance(p) < r {
      Region::Touching
    } else if self.is_left(p) {
      Region::Left
    } else {
      Region::Right
    }
  }

  /// Intersection of the infinite lines through `self` and `other`.
  ///
  /// Each line is written as `a*x + b*y = c`. Returns `None` when the
  /// determinant is below epsilon, i.e. the lines are (nearly) parallel.
  pub fn intersect(&self, other: &Segment, tol: Tolerance) -> Option<Point> {
    let (a1, b1, c1) = self.line_coefficients();
    let (a2, b2, c2) = other.line_coefficients();
    let det = a1 * b2 - a2 * b1;
    if det.abs() < tol.epsilon {
      return None;
    }
    Some(Point::new([
      (b2 * c1 - b1 * c2) / det,
      (a1 * c2 - a2 * c1) / det,
    ]))
  }

  /// The piece of this segment's line between its intersections with `b`
  /// and `c`.
  pub fn intersect_interval(&self, b: &Segment, c: &Segment, tol: Tolerance) -> Option<Segment> {
    let p = self.intersect(b, tol)?;
    let q = self.intersect(c, tol)?;
    Some(Segment::from_end(p, q))
  }

  fn line_coefficients(&self) -> (f64, f64, f64) {
    let s = self.origin;
    let e = self.end();
    let a = e.y_coord() - s.y_coord();
    let b = s.x_coord() - e.x_coord();
    let c = a * s.x_coord() + b * s.y_coord();
    (a, b, c)
  }

  /// Orthogonal projection of `p` onto the infinite line. Not clamped to
  /// the segment's extent.
  pub fn project(&self, p: &Point) -> Point {
    let dir = self.delta.normalize();
    let along = (p - &self.origin).dot(&dir);
    self.origin + dir * along
  }

  /// Position of `p`'s projection along the segment: 0 at the origin, 1 at
  /// the end.
  pub fn fraction(&self, p: &Point) -> f64 {
    (p - &self.origin).dot(&self.delta) / self.delta.dot(&self.delta)
  }

  /// `p` lies within epsilon of the line and projects strictly between the
  /// two ends.
  pub fn passes_through(&self, p: &Point, tol: Tolerance) -> bool {
    let along = self.fraction(p);
    along > 0.0 && along < 1.0 && self.distance(p) <= tol.epsilon
  }

  /// Distance from `p` to the segment's infinite line.
  pub fn distance(&self, p: &Point) -> f64 {
    (&self.project(p) - p).magnitude()
  }

  /// Mirror a direction vector across this segment's direction.
  pub fn reflect_delta(&self, v: &Vector) -> Vector {
    let dir = self.delta.normalize();
    let along = dir * v.dot(&dir);
    along * 2.0 - *v
  }

  /// Mirror `self` across the line through `mirror`.
  #[must_use]
  pub fn reflect(&self, mirror: &Segment) -> Segment {
    let base = mirror.origin;
    let a = base + mirror.reflect_delta(&(self.origin - base));
    let b = base + mirror.reflect_delta(&(self.end() - base));
    Segment::from_end(a, b)
  }

  /// Unit normal pointing to the right of the segment. For a
  /// counter-clockwise loop that is outwards.
  pub fn ortho_normal(&self) -> Vector {
    let normal = self.delta.normalize().quarter_rotation();
    if self.is_left(&(self.origin + normal)) {
      normal.flip()
    } else {
      normal
    }
  }

  /// Copy of the segment translated by `n` along its outward normal.
  /// Negative distances move it inwards.
  #[must_use]
  pub fn offset(&self, n: f64) -> Segment {
    Segment {
      origin: self.origin + self.ortho_normal() * n,
      delta: self.delta,
    }
  }
}
