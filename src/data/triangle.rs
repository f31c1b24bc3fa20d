use super::{Circle, Mesh, Point, PointLocation, Segment, VertexId};
use crate::orientation::cross;
use crate::{Error, Orientation, Result, Tolerance};
use array_init::array_init;
use claims::debug_assert_ok;

///////////////////////////////////////////////////////////////////////////////
// Triangle

/// Three vertex handles into a shared arena. Kept counter-clockwise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
  vertices: [VertexId; 3],
}

impl Triangle {
  /// Build a triangle and reorder it counter-clockwise.
  pub fn new(points: &[Point], vertices: [VertexId; 3]) -> Triangle {
    let mut triangle = Triangle { vertices };
    debug_assert_ok!(triangle.validate(points));
    triangle.ccwize(points);
    triangle
  }

  /// Keep the given order as is.
  pub fn new_unchecked(vertices: [VertexId; 3]) -> Triangle {
    Triangle { vertices }
  }

  /// # Errors
  ///
  /// `InvalidVertex` if a handle is outside the arena or repeats another.
  pub fn validate(&self, points: &[Point]) -> Result<()> {
    let [a, b, c] = self.vertices;
    for v in self.vertices {
      if v.0 >= points.len() {
        return Err(Error::InvalidVertex { index: v.0 });
      }
    }
    if a == b || a == c {
      return Err(Error::InvalidVertex { index: a.0 });
    }
    if b == c {
      return Err(Error::InvalidVertex { index: b.0 });
    }
    Ok(())
  }

  pub fn vertices(&self) -> [VertexId; 3] {
    self.vertices
  }

  pub fn vertex(&self, corner: usize) -> VertexId {
    self.vertices[corner % 3]
  }

  /// Corner index of `v`, if the triangle uses it.
  pub fn corner(&self, v: VertexId) -> Option<usize> {
    self.vertices.iter().position(|&u| u == v)
  }

  pub fn contains_vertex(&self, v: VertexId) -> bool {
    self.vertices.contains(&v)
  }

  /// The edge opposite `corner`, in winding order.
  pub fn opposite_edge(&self, corner: usize) -> (VertexId, VertexId) {
    (self.vertex(corner + 1), self.vertex(corner + 2))
  }

  /// Number of vertex handles the two triangles have in common.
  pub fn shared_vertices(&self, other: &Triangle) -> usize {
    self
      .vertices
      .iter()
      .filter(|v| other.contains_vertex(**v))
      .count()
  }

  /// Swap the last two vertices unless the triangle already turns
  /// counter-clockwise.
  pub fn ccwize(&mut self, points: &[Point]) {
    let [a, b, c] = self.vertices;
    if cross(&points[a.0], &points[b.0], &points[c.0]) >= 0.0 {
      self.vertices.swap(1, 2);
    }
  }

  /// Fan three triangles from `v` to the edges of `self`. Does not check
  /// that `v` is actually inside.
  pub fn split(&self, v: VertexId) -> [Triangle; 3] {
    array_init(|i| Triangle {
      vertices: [self.vertex(i), self.vertex(i + 1), v],
    })
  }

  pub fn view<'a>(&self, points: &'a [Point]) -> TriangleView<'a> {
    TriangleView::new_unchecked(array_init(|i| &points[self.vertices[i].0]))
  }

  /// Copy the triangle into a fresh three-point arena.
  pub fn detach(&self, points: &[Point]) -> Mesh {
    let copy: [Point; 3] = array_init(|i| points[self.vertices[i].0]);
    Mesh {
      points: copy.to_vec(),
      triangles: vec![Triangle::new_unchecked([VertexId(0), VertexId(1), VertexId(2)])],
    }
  }

  /// Detached copy with every edge moved `d` outwards.
  ///
  /// # Errors
  ///
  /// `ParallelLines` when two adjacent edges are parallel.
  pub fn offset(&self, points: &[Point], d: f64, tol: Tolerance) -> Result<Mesh> {
    let moved = self.view(points).offset(d, tol)?;
    Ok(Mesh {
      points: moved.to_vec(),
      triangles: vec![Triangle::new_unchecked([VertexId(0), VertexId(1), VertexId(2)])],
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// TriangleView

/// Borrowed corner positions of a triangle.
#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a>([&'a Point; 3]);

impl<'a> TriangleView<'a> {
  // O(1)
  pub fn new(pts: [&'a Point; 3]) -> TriangleView<'a> {
    let triangle = TriangleView(pts);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(pts: [&'a Point; 3]) -> TriangleView<'a> {
    TriangleView(pts)
  }

  // O(1)
  pub fn validate(&self) -> Result<()> {
    if self.orientation() != Orientation::CounterClockWise {
      Err(Error::ClockWiseViolation)
    } else {
      Ok(())
    }
  }

  pub fn points(&self) -> [&'a Point; 3] {
    self.0
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Strict interior test. Points on an edge are not guaranteed either way.
  pub fn contains(&self, pt: &Point) -> bool {
    let [a, b, c] = self.0;
    pt.in_triangle(a, b, c)
  }

  /// Classify `pt` using its distance to each edge line. Within `epsilon`
  /// of an edge counts as on the boundary.
  // O(1)
  pub fn locate(&self, pt: &Point, tol: Tolerance) -> PointLocation {
    // Interior lies on the counter-clockwise side of every edge.
    let sign = if self.orientation().is_cw() { -1.0 } else { 1.0 };
    let mut on_edge = false;
    for i in 0..3 {
      let a = self.0[i];
      let b = self.0[(i + 1) % 3];
      let len = a.distance(b);
      if len == 0.0 {
        return PointLocation::Outside;
      }
      let dist = sign * cross(a, b, pt) / len;
      if dist > tol.epsilon {
        return PointLocation::Outside;
      }
      if dist.abs() <= tol.epsilon {
        on_edge = true;
      }
    }
    if on_edge {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn circumcircle(&self, tol: Tolerance) -> Option<Circle> {
    let [a, b, c] = self.0;
    Circle::through(a, b, c, tol)
  }

  /// Smallest altitude.
  pub fn breadth(&self) -> f64 {
    let [a, b, c] = self.0;
    let longest = a.distance(b).max(b.distance(c)).max(c.distance(a));
    if longest == 0.0 {
      return 0.0;
    }
    self.signed_area_2x().abs() / longest
  }

  /// Interior angle at `corner`, in radians.
  pub fn angle(&self, corner: usize) -> f64 {
    let p = self.0[corner % 3];
    let q = self.0[(corner + 1) % 3];
    let r = self.0[(corner + 2) % 3];
    (q - p).angle_to(&(r - p))
  }

  pub fn centroid(&self) -> Point {
    let [a, b, c] = self.0;
    Point::new([
      (a.x_coord() + b.x_coord() + c.x_coord()) / 3.0,
      (a.y_coord() + b.y_coord() + c.y_coord()) / 3.0,
    ])
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Negative for counter-clockwise triangles.
  pub fn signed_area_2x(&self) -> f64 {
    let [a, b, c] = self.0;
    let [ax, ay] = a.array;
    let [bx, by] = b.array;
    let [cx, cy] = c.array;
    ax * by - bx * ay + bx * cy - cx * by + cx * ay - ax * cy
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }

  /// Corners of the triangle whose edges have moved `d` along their outward
  /// normals. Each corner is the crossing of its two adjacent moved edges.
  ///
  /// # Errors
  ///
  /// `ParallelLines` when two adjacent edges are parallel.
  pub fn offset(&self, d: f64, tol: Tolerance) -> Result<[Point; 3]> {
    let edges: [Segment; 3] =
      array_init(|i| Segment::from_end(*self.0[i], *self.0[(i + 1) % 3]).offset(d));
    let mut out = [Point::default(); 3];
    for (i, slot) in out.iter_mut().enumerate() {
      let prev = &edges[(i + 2) % 3];
      *slot = prev
        .intersect(&edges[i], tol)
        .ok_or(Error::ParallelLines)?;
    }
    Ok(out)
  }
}
