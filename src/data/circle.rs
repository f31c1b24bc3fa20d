use super::Point;
use crate::Tolerance;

/// Circumcircle of a triangle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub radius: f64,
}

impl Circle {
  pub fn new(center: Point, radius: f64) -> Circle {
    Circle { center, radius }
  }

  /// Circle through three points, or `None` when two of them coincide
  /// (within epsilon) or all three are colinear.
  ///
  /// The centre is the crossing of the perpendicular bisectors, solved
  /// relative to `a`. Colinearity is judged against the longest side, so
  /// long thin triangles still get their (large) circle.
  pub fn through(a: &Point, b: &Point, c: &Point, tol: Tolerance) -> Option<Circle> {
    if tol.eq(a, b) || tol.eq(b, c) || tol.eq(a, c) {
      return None;
    }
    let ab = b - a;
    let ac = c - a;
    let bc = c - b;
    let cross = ab.cross(&ac);
    let longest = ab
      .squared_magnitude()
      .max(ac.squared_magnitude())
      .max(bc.squared_magnitude());
    if cross.abs() <= f64::EPSILON * longest {
      return None;
    }

    let d = 2.0 * cross;
    let ab2 = ab.squared_magnitude();
    let ac2 = ac.squared_magnitude();
    let ux = (ac.0[1] * ab2 - ab.0[1] * ac2) / d;
    let uy = (ab.0[0] * ac2 - ac.0[0] * ab2) / d;
    if !ux.is_finite() || !uy.is_finite() {
      return None;
    }
    let center = Point::new([a.x_coord() + ux, a.y_coord() + uy]);
    Some(Circle {
      center,
      radius: center.distance(a),
    })
  }

  /// Strictly inside, by more than epsilon.
  pub fn contains(&self, p: &Point, tol: Tolerance) -> bool {
    self.center.distance(p) + tol.epsilon < self.radius
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn right_triangle() {
    let tol = Tolerance::default();
    let circle = Circle::through(
      &Point::new([0.0, 0.0]),
      &Point::new([4.0, 0.0]),
      &Point::new([0.0, 4.0]),
      tol,
    )
    .unwrap();
    assert!(circle.center.distance(&Point::new([2.0, 2.0])) < 1e-9);
    assert!((circle.radius - 8f64.sqrt()).abs() < 1e-9);
  }

  #[test]
  fn vertical_chords() {
    let tol = Tolerance::default();
    // a-b vertical
    let circle = Circle::through(
      &Point::new([0.0, 0.0]),
      &Point::new([0.0, 4.0]),
      &Point::new([4.0, 4.0]),
      tol,
    )
    .unwrap();
    assert!(circle.center.distance(&Point::new([2.0, 2.0])) < 1e-9);
    // b-c vertical
    let circle = Circle::through(
      &Point::new([0.0, 0.0]),
      &Point::new([4.0, 0.0]),
      &Point::new([4.0, 4.0]),
      tol,
    )
    .unwrap();
    assert!(circle.center.distance(&Point::new([2.0, 2.0])) < 1e-9);
  }

  #[test]
  fn colinear_has_no_circle() {
    let tol = Tolerance::default();
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([1.0, 1.0]);
    let c = Point::new([2.0, 2.0]);
    assert_eq!(Circle::through(&a, &b, &c, tol), None);
    let v = Point::new([0.0, 5.0]);
    let w = Point::new([0.0, 9.0]);
    assert_eq!(Circle::through(&a, &v, &w, tol), None);
  }

  #[test]
  fn long_thin_triangle() {
    // The chord slopes differ by only 1/2000, yet the corners are far from
    // colinear.
    let tol = Tolerance::default();
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([2000.0, 0.0]);
    let c = Point::new([4000.0, 1.0]);
    let circle = Circle::through(&a, &b, &c, tol).unwrap();
    for p in [a, b, c] {
      assert!((circle.center.distance(&p) - circle.radius).abs() <= 1e-6 * circle.radius);
    }
    assert!(circle.contains(&Point::new([2000.0, 1.0]), tol));
  }

  #[test]
  fn coincident_corners() {
    let tol = Tolerance::default();
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([0.0005, 0.0]);
    let c = Point::new([3.0, 4.0]);
    assert_eq!(Circle::through(&a, &b, &c, tol), None);
  }

  #[test]
  fn contains_is_strict() {
    let tol = Tolerance::default();
    let circle = Circle::new(Point::new([0.0, 0.0]), 1.0);
    assert!(circle.contains(&Point::new([0.5, 0.0]), tol));
    assert!(!circle.contains(&Point::new([1.0, 0.0]), tol));
    assert!(!circle.contains(&Point::new([0.9995, 0.0]), tol));
  }

  #[proptest]
  fn passes_through_all_corners(
    #[strategy(-100i32..100)] ax: i32,
    #[strategy(-100i32..100)] ay: i32,
    #[strategy(-100i32..100)] bx: i32,
    #[strategy(-100i32..100)] by: i32,
    #[strategy(-100i32..100)] cx: i32,
    #[strategy(-100i32..100)] cy: i32,
  ) {
    let a = Point::new([ax.into(), ay.into()]);
    let b = Point::new([bx.into(), by.into()]);
    let c = Point::new([cx.into(), cy.into()]);
    let tol = Tolerance::default();
    if let Some(circle) = Circle::through(&a, &b, &c, tol) {
      for p in [a, b, c] {
        let d = circle.center.distance(&p);
        prop_assert!((d - circle.radius).abs() <= 1e-6 * circle.radius.max(1.0));
      }
    }
  }
}
