use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter::Sum;
use std::ops::{Add, Index};

use crate::data::Point;

mod div;
mod mul;
mod sub;

/// A displacement in the drawing plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Distribution<Vector> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    Vector([rng.gen(), rng.gen()])
  }
}

impl Vector {
  pub const fn new(x: f64, y: f64) -> Vector {
    Vector([x, y])
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }

  pub fn magnitude(&self) -> f64 {
    self.squared_magnitude().sqrt()
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// z component of the 3D cross product.
  pub fn cross(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  /// Unit vector with the same direction. The zero vector stays zero.
  pub fn normalize(&self) -> Vector {
    let len = self.magnitude();
    if len > 0.0 {
      *self / len
    } else {
      *self
    }
  }

  /// Quarter rotation, `(x, y) -> (y, -x)`.
  #[must_use]
  pub fn quarter_rotation(&self) -> Vector {
    Vector([self.0[1], -self.0[0]])
  }

  #[must_use]
  pub fn flip(&self) -> Vector {
    -*self
  }

  /// Unsigned angle between two vectors in radians, in `[0, pi]`.
  pub fn angle_to(&self, other: &Vector) -> f64 {
    self.cross(other).abs().atan2(self.dot(other))
  }
}

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl Add for Vector {
  type Output = Vector;
  fn add(self, other: Vector) -> Vector {
    Vector([self.0[0] + other.0[0], self.0[1] + other.0[1]])
  }
}

impl Zero for Vector {
  fn zero() -> Vector {
    Vector([0.0, 0.0])
  }

  fn is_zero(&self) -> bool {
    self.0[0] == 0.0 && self.0[1] == 0.0
  }
}

impl Sum for Vector {
  fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
    iter.fold(Vector::zero(), |acc, v| acc + v)
  }
}
