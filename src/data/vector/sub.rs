use std::ops::Neg;
use std::ops::Sub;

use super::Vector;

impl Sub for Vector {
  type Output = Vector;

  fn sub(self: Vector, other: Vector) -> Self::Output {
    Vector([self.0[0] - other.0[0], self.0[1] - other.0[1]])
  }
}

impl Neg for Vector {
  type Output = Vector;

  fn neg(self) -> Self::Output {
    Vector([-self.0[0], -self.0[1]])
  }
}
