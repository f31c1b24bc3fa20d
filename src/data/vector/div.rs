use std::ops::Div;

use super::Vector;

impl Div<f64> for Vector {
  type Output = Vector;

  fn div(self: Vector, other: f64) -> Self::Output {
    Vector([self.0[0] / other, self.0[1] / other])
  }
}
