use std::collections::BTreeMap;

use tracing::debug;

use super::{Loop, Point, Triangle, TriangleView, VertexId};

/// Undirected edge between two arena vertices.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexEdge {
  pub min: VertexId,
  pub max: VertexId,
}

impl IndexEdge {
  pub fn new(a: VertexId, b: VertexId) -> IndexEdge {
    IndexEdge {
      min: std::cmp::min(a, b),
      max: std::cmp::max(a, b),
    }
  }
}

/// The edge of `triangle` opposite one of its corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeshEdge {
  pub triangle: usize,
  pub corner: usize,
}

/// Vertex arena plus counter-clockwise index triples.
///
/// This is what the triangulators hand to renderers: a flat list of
/// positions and a list of triangles referencing them by [`VertexId`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
  pub points: Vec<Point>,
  pub triangles: Vec<Triangle>,
}

impl Mesh {
  pub fn new(points: Vec<Point>, triangles: Vec<Triangle>) -> Mesh {
    Mesh { points, triangles }
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  pub fn vertex_count(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  pub fn point(&self, v: VertexId) -> &Point {
    &self.points[v.0]
  }

  pub fn view(&self, triangle: usize) -> TriangleView<'_> {
    self.triangles[triangle].view(&self.points)
  }

  pub fn views(&self) -> impl Iterator<Item = TriangleView<'_>> + '_ {
    self.triangles.iter().map(move |t| t.view(&self.points))
  }

  /// Total unsigned area of all triangles.
  pub fn area(&self) -> f64 {
    self.views().map(|v| v.signed_area().abs()).sum()
  }

  /// Triangle on the other side of the edge opposite `corner`.
  // O(n)
  pub fn adjacent(&self, triangle: usize, corner: usize) -> Option<usize> {
    let (a, b) = self.triangles[triangle].opposite_edge(corner);
    self
      .triangles
      .iter()
      .enumerate()
      .find(|(idx, t)| *idx != triangle && t.contains_vertex(a) && t.contains_vertex(b))
      .map(|(idx, _)| idx)
  }

  /// Edges without a neighbouring triangle.
  // O(n^2)
  pub fn boundary_edges(&self) -> Vec<MeshEdge> {
    let mut out = Vec::new();
    for triangle in 0..self.triangles.len() {
      for corner in 0..3 {
        if self.adjacent(triangle, corner).is_none() {
          out.push(MeshEdge { triangle, corner });
        }
      }
    }
    out
  }

  /// Drop triangles that have exactly one boundary edge and whose angle
  /// opposite that edge exceeds `min_angle` (radians). Returns the number of
  /// triangles removed.
  pub fn prune_wide_boundary_triangles(&mut self, min_angle: f64) -> usize {
    let keep: Vec<bool> = (0..self.triangles.len())
      .map(|triangle| {
        let open: Vec<usize> = (0..3)
          .filter(|&corner| self.adjacent(triangle, corner).is_none())
          .collect();
        !(open.len() == 1 && self.view(triangle).angle(open[0]) > min_angle)
      })
      .collect();
    let before = self.triangles.len();
    let mut flags = keep.iter();
    self
      .triangles
      .retain(|_| flags.next().copied().unwrap_or(true));
    let pruned = before - self.triangles.len();
    debug!(pruned, remaining = self.triangles.len(), "pruned wide boundary triangles");
    pruned
  }

  /// Walk the boundary edges into a loop, starting at `start` (or the
  /// lowest boundary vertex). The walk stops when it returns to the start or
  /// runs out of edges. Counter-clockwise for a mesh of counter-clockwise
  /// triangles.
  pub fn boundary_loop(&self, start: Option<VertexId>) -> Loop {
    let mut next: BTreeMap<VertexId, VertexId> = BTreeMap::new();
    for edge in self.boundary_edges() {
      let (a, b) = self.triangles[edge.triangle].opposite_edge(edge.corner);
      next.insert(a, b);
    }
    let first = match start.or_else(|| next.keys().next().copied()) {
      Some(first) => first,
      None => return Loop::default(),
    };
    let mut out = vec![self.points[first.0]];
    let mut cursor = first;
    while let Some(b) = next.remove(&cursor) {
      if b == first {
        break;
      }
      out.push(self.points[b.0]);
      cursor = b;
    }
    Loop::new(out)
  }

  /// Nearest arena vertex to `p`.
  // O(n)
  pub fn closest_point(&self, p: &Point) -> Option<VertexId> {
    closest(&self.points, p).map(VertexId)
  }

  /// Corner positions, three per triangle, as uploaded to a position
  /// buffer.
  pub fn positions(&self) -> Vec<[f32; 2]> {
    self
      .views()
      .flat_map(|view| view.points())
      .map(|pt| [pt.x_coord() as f32, pt.y_coord() as f32])
      .collect()
  }

  pub fn indices(&self) -> Vec<[usize; 3]> {
    self
      .triangles
      .iter()
      .map(|t| {
        let [a, b, c] = t.vertices();
        [a.0, b.0, c.0]
      })
      .collect()
  }

  /// One `color` entry per corner, matching [`Mesh::positions`].
  pub fn solid_colors(&self, color: [f32; 4]) -> Vec<[f32; 4]> {
    vec![color; self.triangles.len() * 3]
  }
}

pub(crate) fn closest(points: &[Point], p: &Point) -> Option<usize> {
  let mut best: Option<(usize, f64)> = None;
  for (idx, pt) in points.iter().enumerate() {
    let d = pt.squared_euclidean_distance(p);
    if best.map_or(true, |(_, bd)| d < bd) {
      best = Some((idx, d));
    }
  }
  best.map(|(idx, _)| idx)
}
