use crate::data::{Point, Vector};
use std::ops::Sub;

// &point - &point = vector
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Vector;

  fn sub(self: &'b Point, other: &'a Point) -> Self::Output {
    Vector([self.array[0] - other.array[0], self.array[1] - other.array[1]])
  }
}

// point - point = vector
impl Sub<Point> for Point {
  type Output = Vector;

  fn sub(self: Point, other: Point) -> Self::Output {
    &self - &other
  }
}

// &point - &vector = point
impl<'a, 'b> Sub<&'a Vector> for &'b Point {
  type Output = Point;

  fn sub(self: &'b Point, other: &'a Vector) -> Self::Output {
    Point::new([self.array[0] - other.0[0], self.array[1] - other.0[1]])
  }
}

// point - vector = point
impl Sub<Vector> for Point {
  type Output = Point;

  fn sub(self: Point, other: Vector) -> Self::Output {
    &self - &other
  }
}
