//! Incremental Delaunay triangulation.
//!
//! Points are inserted one at a time into a large square of four "omega"
//! vertices that encloses the input. Each insertion splits the triangle (or
//! the two triangles sharing the edge) the point falls in, then flips edges
//! until every triangle around the new vertex passes the incircle test.
//! Finally the omega vertices and every triangle touching them are dropped.
use std::collections::HashSet;

use tracing::{debug, warn};

use crate::data::{IndexEdge, Mesh, Point, PointLocation, Segment, Triangle, VertexId};
use crate::{Config, Error, Result};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TriIdx(pub usize);
impl std::fmt::Debug for TriIdx {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "t{}", self.0)
  }
}

/// A location of a point, in a [`Delaunay`] network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
  /// The point is strictly inside the triangle.
  InTriangle(TriIdx),
  /// The point lies on the edge opposite the given corner.
  OnEdge(TriIdx, usize),
  /// No triangle contains the point.
  Outside,
}

/// Triangulation under construction. The arena holds the input points
/// followed by the four omega vertices.
#[derive(Debug, Clone)]
pub struct Delaunay {
  points: Vec<Point>,
  triangles: Vec<Triangle>,
  real: usize,
  inserted: Vec<VertexId>,
  config: Config,
}

impl Delaunay {
  /// Set up the omega square around `points`. Nothing is inserted yet.
  ///
  /// # Errors
  ///
  /// * `InsufficientVertices` with fewer than 3 points.
  /// * `NotFinite` if a coordinate is NaN or infinite.
  pub fn new(points: &[Point], config: &Config) -> Result<Delaunay> {
    if points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    for pt in points {
      Point::try_new(pt.array)?;
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for pt in points {
      min_x = min_x.min(pt.x_coord());
      min_y = min_y.min(pt.y_coord());
      max_x = max_x.max(pt.x_coord());
      max_y = max_y.max(pt.y_coord());
    }
    let margin = config.omega_margin;
    let side = 2.0 * ((max_x - min_x).max(max_y - min_y) + 2.0 * margin);
    let o0 = Point::new([min_x - margin, min_y - margin]);

    let real = points.len();
    let mut arena = Vec::with_capacity(real + 4);
    arena.extend_from_slice(points);
    arena.push(o0);
    arena.push(Point::new([o0.x_coord() + side, o0.y_coord()]));
    arena.push(Point::new([o0.x_coord() + side, o0.y_coord() + side]));
    arena.push(Point::new([o0.x_coord(), o0.y_coord() + side]));

    // The o1-o3 diagonal runs past the input bounds, so every input point
    // starts strictly inside the first triangle.
    let [o0, o1, o2, o3] = [
      VertexId(real),
      VertexId(real + 1),
      VertexId(real + 2),
      VertexId(real + 3),
    ];
    let triangles = vec![
      Triangle::new(&arena, [o0, o1, o3]),
      Triangle::new(&arena, [o1, o2, o3]),
    ];
    Ok(Delaunay {
      points: arena,
      triangles,
      real,
      inserted: Vec::with_capacity(real),
      config: *config,
    })
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn triangles(&self) -> &[Triangle] {
    &self.triangles
  }

  pub fn is_omega(&self, v: VertexId) -> bool {
    v.0 >= self.real
  }

  // O(n)
  pub fn locate(&self, pt: &Point) -> Location {
    let tol = self.config.tolerance;
    let mut on_edge = None;
    for (idx, t) in self.triangles.iter().enumerate() {
      match t.view(&self.points).locate(pt, tol) {
        PointLocation::Inside => return Location::InTriangle(TriIdx(idx)),
        PointLocation::OnBoundary if on_edge.is_none() => {
          on_edge = Some(Location::OnEdge(TriIdx(idx), self.closest_edge(t, pt)));
        }
        _ => {}
      }
    }
    on_edge.unwrap_or(Location::Outside)
  }

  // Corner opposite the edge nearest to `pt`. Edges are tried in winding
  // order starting with (t0, t1); the first of a tie wins.
  fn closest_edge(&self, t: &Triangle, pt: &Point) -> usize {
    let mut best = (0, f64::INFINITY);
    for i in 0..3 {
      let corner = (i + 2) % 3;
      let (a, b) = t.opposite_edge(corner);
      let dist = Segment::from_end(self.points[a.0], self.points[b.0]).distance(pt);
      if dist < best.1 {
        best = (corner, dist);
      }
    }
    best.0
  }

  /// Insert an input vertex and restore the Delaunay property around it.
  ///
  /// # Errors
  ///
  /// * `InvalidVertex` if `v` is not an input vertex or was inserted before.
  /// * `DuplicatePoint` if `v` coincides with an inserted vertex.
  /// * `NoContainingTriangle` if point location fails.
  pub fn insert(&mut self, v: VertexId) -> Result<()> {
    let tol = self.config.tolerance;
    if v.0 >= self.real || self.inserted.contains(&v) {
      return Err(Error::InvalidVertex { index: v.0 });
    }
    let pt = self.points[v.0];
    if self
      .inserted
      .iter()
      .any(|u| tol.eq(&self.points[u.0], &pt))
    {
      return Err(Error::DuplicatePoint { vertex: v });
    }

    let work = match self.locate(&pt) {
      Location::InTriangle(t) => {
        debug!(vertex = ?v, triangle = ?t, "splitting triangle");
        self.split_triangle(t, v)
      }
      Location::OnEdge(t, corner) => {
        debug!(vertex = ?v, triangle = ?t, corner, "splitting edge");
        self.split_edge(t, corner, v)
      }
      Location::Outside => return Err(Error::NoContainingTriangle { vertex: v }),
    };
    self.inserted.push(v);
    self.legalize(v, work);
    Ok(())
  }

  // One triangle into three. Returns the edges facing `v`.
  fn split_triangle(&mut self, t: TriIdx, v: VertexId) -> Vec<(VertexId, VertexId)> {
    let old = self.triangles[t.0];
    let [first, second, third] = old.split(v);
    self.triangles[t.0] = first;
    self.triangles.push(second);
    self.triangles.push(third);
    (0..3).map(|i| (old.vertex(i), old.vertex(i + 1))).collect()
  }

  // The triangle and its neighbour across the edge opposite `corner` into
  // four. Returns the edges facing `v`.
  fn split_edge(&mut self, t: TriIdx, corner: usize, v: VertexId) -> Vec<(VertexId, VertexId)> {
    let old = self.triangles[t.0];
    let apex = old.vertex(corner);
    let (u, w) = old.opposite_edge(corner);
    self.triangles[t.0] = Triangle::new(&self.points, [apex, u, v]);
    self
      .triangles
      .push(Triangle::new(&self.points, [apex, w, v]));
    let mut work = vec![(apex, u), (apex, w)];
    let across = self
      .neighbour(u, w, apex)
      .and_then(|n| self.opposite(n, u, w).map(|far| (n, far)));
    if let Some((n, far)) = across {
      self.triangles[n.0] = Triangle::new(&self.points, [far, u, v]);
      self
        .triangles
        .push(Triangle::new(&self.points, [far, w, v]));
      work.push((far, u));
      work.push((far, w));
    }
    work
  }

  // Triangle with edge (u, w) that does not use `not`.
  fn neighbour(&self, u: VertexId, w: VertexId, not: VertexId) -> Option<TriIdx> {
    self
      .triangles
      .iter()
      .position(|t| t.contains_vertex(u) && t.contains_vertex(w) && !t.contains_vertex(not))
      .map(TriIdx)
  }

  // Vertex of `t` that is neither `u` nor `w`. `None` only for a triangle
  // that repeats a vertex.
  fn opposite(&self, t: TriIdx, u: VertexId, w: VertexId) -> Option<VertexId> {
    let far = self.triangles[t.0]
      .vertices()
      .into_iter()
      .find(|&x| x != u && x != w);
    debug_assert!(far.is_some(), "{:?} has no vertex across {:?}", t, (u, w));
    far
  }

  // Each queued edge faces `v`. If the vertex across it lies strictly inside
  // the circumcircle, the edge is flipped and the two edges that now face
  // `v` are queued. Every edge is looked at once per insertion.
  fn legalize(&mut self, v: VertexId, mut work: Vec<(VertexId, VertexId)>) {
    let tol = self.config.tolerance;
    let pt = self.points[v.0];
    let mut visited: HashSet<IndexEdge> = HashSet::new();
    while let Some((u, w)) = work.pop() {
      if !visited.insert(IndexEdge::new(u, w)) {
        continue;
      }
      let own = self.triangles.iter().position(|t| {
        t.contains_vertex(v) && t.contains_vertex(u) && t.contains_vertex(w)
      });
      let (own, other) = match (own, self.neighbour(u, w, v)) {
        (Some(own), Some(other)) => (TriIdx(own), other),
        _ => continue,
      };
      let far = match self.opposite(other, u, w) {
        Some(far) => far,
        None => continue,
      };
      let circle = match self.triangles[other.0].view(&self.points).circumcircle(tol) {
        Some(circle) => circle,
        None => continue,
      };
      if circle.contains(&pt, tol) {
        debug!(vertex = ?v, from = ?(u, w), to = ?(v, far), "flipping edge");
        self.swap_diagonal(own, other, (u, w), (v, far));
        work.push((u, far));
        work.push((far, w));
      }
    }
  }

  /// Replace the edge shared by two triangles with the other diagonal of
  /// their quadrilateral.
  ///
  /// # Errors
  ///
  /// `NoSharedEdge` unless both indices are valid, distinct, and the
  /// triangles share exactly two vertices.
  pub fn flip(&mut self, a: TriIdx, b: TriIdx) -> Result<()> {
    let (ta, tb) = match (self.triangles.get(a.0), self.triangles.get(b.0)) {
      (Some(ta), Some(tb)) if a != b => (*ta, *tb),
      _ => return Err(Error::NoSharedEdge),
    };
    if ta.shared_vertices(&tb) != 2 {
      return Err(Error::NoSharedEdge);
    }
    let shared: Vec<VertexId> = ta
      .vertices()
      .into_iter()
      .filter(|&v| tb.contains_vertex(v))
      .collect();
    let (u, w) = (shared[0], shared[1]);
    let x = self.opposite(a, u, w).ok_or(Error::NoSharedEdge)?;
    let y = self.opposite(b, u, w).ok_or(Error::NoSharedEdge)?;
    self.swap_diagonal(a, b, (u, w), (x, y));
    Ok(())
  }

  // `a` becomes (x, u, y) and `b` becomes (x, y, w), where x is across the
  // shared edge (u, w) in `a` and y in `b`.
  fn swap_diagonal(
    &mut self,
    a: TriIdx,
    b: TriIdx,
    (u, w): (VertexId, VertexId),
    (x, y): (VertexId, VertexId),
  ) {
    self.triangles[a.0] = Triangle::new(&self.points, [x, u, y]);
    self.triangles[b.0] = Triangle::new(&self.points, [x, y, w]);
  }

  /// Drop the omega vertices and every triangle that uses one.
  pub fn into_mesh(self) -> Mesh {
    let real = self.real;
    let mut points = self.points;
    points.truncate(real);
    let triangles = self
      .triangles
      .into_iter()
      .filter(|t| t.vertices().iter().all(|v| v.0 < real))
      .collect();
    Mesh { points, triangles }
  }
}

/// Delaunay triangulation of `points`, inserted in input order.
///
/// The resulting mesh shares its arena layout with `points`: vertex `i` of
/// the mesh is `points[i]`.
///
/// # Errors
///
/// * `InsufficientVertices` with fewer than 3 points.
/// * `NotFinite` for NaN or infinite coordinates.
/// * `DuplicatePoint` when two points coincide within epsilon.
/// * `NoContainingTriangle` when point location fails.
///
/// # Examples
///
/// ```rust
/// use panelcut::algorithms::triangulation::delaunay::triangulate;
/// use panelcut::data::Point;
/// use panelcut::Config;
///
/// let points = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
///   Point::new([5.0, 5.0]),
/// ];
/// let mesh = triangulate(&points, &Config::default()).unwrap();
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn triangulate(points: &[Point], config: &Config) -> Result<Mesh> {
  debug!(points = points.len(), "delaunay triangulation");
  let result = Delaunay::new(points, config).and_then(|mut network| {
    for v in 0..points.len() {
      network.insert(VertexId(v))?;
    }
    Ok(network.into_mesh())
  });
  if let Err(error) = &result {
    warn!(%error, "delaunay triangulation aborted");
  }
  result
}
