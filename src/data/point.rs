use ordered_float::NotNan;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

use super::Vector;
use crate::{Error, Orientation, Result};

mod add;
mod sub;

/// A position in the drawing plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  /// Like [`Point::new`] but rejects NaN and infinite coordinates.
  pub fn try_new(array: [f64; 2]) -> Result<Point> {
    for coord in array.iter() {
      let coord = NotNan::new(*coord).map_err(|_| Error::NotFinite)?;
      if coord.is_infinite() {
        return Err(Error::NotFinite);
      }
    }
    Ok(Point { array })
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn as_vec(&self) -> Vector {
    Vector(self.array)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    (rhs - self).squared_magnitude()
  }

  pub fn distance(&self, rhs: &Point) -> f64 {
    (rhs - self).magnitude()
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Barycentric interior test against the triangle `a, b, c`.
  ///
  /// Returns true only for points strictly inside. Points on an edge may go
  /// either way; the test carries no epsilon.
  pub fn in_triangle(&self, a: &Point, b: &Point, c: &Point) -> bool {
    let [px, py] = self.array;
    let [ax, ay] = a.array;
    let [bx, by] = b.array;
    let [cx, cy] = c.array;
    let mut s = ay * cx - ax * cy + (cy - ay) * px + (ax - cx) * py;
    let mut t = ax * by - ay * bx + (ay - by) * px + (bx - ax) * py;
    if (s < 0.0) != (t < 0.0) {
      return false;
    }
    let mut area = -by * cx + ay * (cx - bx) + ax * (by - cy) + bx * cy;
    if area < 0.0 {
      s = -s;
      t = -t;
      area = -area;
    }
    s > 0.0 && t > 0.0 && s + t < area
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point { array: vector.0 }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_non_finite() {
    assert_eq!(Point::try_new([f64::NAN, 0.0]), Err(Error::NotFinite));
    assert_eq!(Point::try_new([0.0, f64::INFINITY]), Err(Error::NotFinite));
    assert!(Point::try_new([1.0, -2.0]).is_ok());
  }

  #[test]
  fn in_triangle_is_strict() {
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([10.0, 0.0]);
    let c = Point::new([0.0, 10.0]);
    assert!(Point::new([2.0, 2.0]).in_triangle(&a, &b, &c));
    // winding does not matter
    assert!(Point::new([2.0, 2.0]).in_triangle(&a, &c, &b));
    assert!(!Point::new([8.0, 8.0]).in_triangle(&a, &b, &c));
    assert!(!a.in_triangle(&a, &b, &c));
    assert!(!Point::new([5.0, 5.0]).in_triangle(&a, &b, &c));
  }

  #[test]
  fn distances() {
    let a = Point::new([1.0, 1.0]);
    let b = Point::new([4.0, 5.0]);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(a.squared_euclidean_distance(&b), 25.0);
  }
}
