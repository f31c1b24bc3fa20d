use std::ops::Mul;

use super::Vector;

impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(self: Vector, other: f64) -> Self::Output {
    Vector([self.0[0] * other, self.0[1] * other])
  }
}

impl Mul<Vector> for f64 {
  type Output = Vector;

  fn mul(self, other: Vector) -> Vector {
    other * self
  }
}
