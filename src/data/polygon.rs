use std::cmp::Ordering;
use std::ops::Index;

use crate::data::{Point, Segment};
use crate::{Error, Orientation, Result, Tolerance};

/// Closed ring of vertices. The last vertex connects back to the first.
///
/// Orientation is not stored. It is read off the minimum vertex (see
/// [`Tolerance::cmp`]) and its two ring neighbours, which stays correct for
/// any simple ring no matter how many reflex vertices it has.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Loop {
  vertices: Vec<Point>,
}

impl Loop {
  pub fn new(vertices: Vec<Point>) -> Loop {
    Loop { vertices }
  }

  /// # Errors
  ///
  /// * `InsufficientVertices` with fewer than 3 vertices.
  /// * `NotFinite` if any coordinate is NaN or infinite.
  pub fn validate(&self) -> Result<()> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    for pt in self.vertices.iter() {
      Point::try_new(pt.array)?;
    }
    Ok(())
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn into_vertices(self) -> Vec<Point> {
    self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  /// Edges in ring order, the closing edge last.
  pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
    let len = self.vertices.len();
    (0..len).map(move |i| Segment::from_end(self.vertices[i], self.vertices[(i + 1) % len]))
  }

  // O(n)
  pub fn min_index(&self, tol: Tolerance) -> Option<usize> {
    tol.min_index(&self.vertices)
  }

  pub fn min_vertex(&self, tol: Tolerance) -> Option<Point> {
    self.min_index(tol).map(|idx| self.vertices[idx])
  }

  pub fn max_vertex(&self, tol: Tolerance) -> Option<Point> {
    tol.max_index(&self.vertices).map(|idx| self.vertices[idx])
  }

  /// Turn direction at the minimum vertex. Loops with fewer than three
  /// vertices are colinear.
  pub fn orientation(&self, tol: Tolerance) -> Orientation {
    let len = self.vertices.len();
    match self.min_index(tol) {
      Some(m) if len >= 3 => {
        let prev = &self.vertices[(m + len - 1) % len];
        let next = &self.vertices[(m + 1) % len];
        Orientation::new(prev, &self.vertices[m], next)
      }
      _ => Orientation::CoLinear,
    }
  }

  pub fn is_ccw(&self, tol: Tolerance) -> bool {
    self.orientation(tol).is_ccw()
  }

  /// Vertices starting at the minimum vertex, in the requested winding.
  pub fn ordered_vertices(&self, ccw: bool, tol: Tolerance) -> Vec<Point> {
    let len = self.vertices.len();
    let m = match self.min_index(tol) {
      Some(m) => m,
      None => return Vec::new(),
    };
    if self.is_ccw(tol) == ccw {
      (0..len).map(|i| self.vertices[(m + i) % len]).collect()
    } else {
      (0..len).map(|i| self.vertices[(m + len - i) % len]).collect()
    }
  }

  /// [`Loop::ordered_vertices`] wrapped as a new loop.
  #[must_use]
  pub fn ordered(&self, ccw: bool, tol: Tolerance) -> Loop {
    Loop::new(self.ordered_vertices(ccw, tol))
  }

  /// Move every edge `d` along its right-hand normal and re-intersect each
  /// edge with its predecessor. For a counter-clockwise loop a positive `d`
  /// grows the loop.
  ///
  /// # Errors
  ///
  /// * `InsufficientVertices` with fewer than 3 vertices.
  /// * `ParallelLines` when two consecutive edges are parallel.
  pub fn offset(&self, d: f64, tol: Tolerance) -> Result<Loop> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let edges: Vec<Segment> = self.segments().map(|s| s.offset(d)).collect();
    let len = edges.len();
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
      let prev = &edges[(i + len - 1) % len];
      out.push(prev.intersect(&edges[i], tol).ok_or(Error::ParallelLines)?);
    }
    Ok(Loop::new(out))
  }

  /// Shoelace sum `x_i*y_{i+1} - x_{i+1}*y_i`. Negative for
  /// counter-clockwise loops.
  pub fn signed_area_2x(&self) -> f64 {
    let len = self.vertices.len();
    (0..len)
      .map(|i| {
        let p = &self.vertices[i];
        let q = &self.vertices[(i + 1) % len];
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .sum()
  }

  pub fn area(&self) -> f64 {
    self.signed_area_2x().abs() / 2.0
  }

  /// Order loops by their minimum vertex. Empty loops sort first.
  pub fn cmp_by_min(&self, other: &Loop, tol: Tolerance) -> Ordering {
    match (self.min_vertex(tol), other.min_vertex(tol)) {
      (Some(a), Some(b)) => tol.cmp(&a, &b),
      (None, Some(_)) => Ordering::Less,
      (Some(_), None) => Ordering::Greater,
      (None, None) => Ordering::Equal,
    }
  }

  /// Multiply every coordinate by `factor`.
  #[must_use]
  pub fn scale(&self, factor: f64) -> Loop {
    Loop::new(
      self
        .vertices
        .iter()
        .map(|pt| Point::new([pt.x_coord() * factor, pt.y_coord() * factor]))
        .collect(),
    )
  }
}

impl Index<usize> for Loop {
  type Output = Point;
  fn index(&self, index: usize) -> &Point {
    self.vertices.index(index)
  }
}

impl From<Vec<Point>> for Loop {
  fn from(vertices: Vec<Point>) -> Loop {
    Loop::new(vertices)
  }
}

impl FromIterator<Point> for Loop {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Loop {
    Loop::new(iter.into_iter().collect())
  }
}
