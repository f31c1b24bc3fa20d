mod circle;
pub(crate) mod mesh;
mod panel;
pub(crate) mod point;
pub mod polygon;
mod segment;
mod triangle;
mod vector;

pub use circle::Circle;
pub use mesh::*;
pub use panel::*;
pub use point::Point;
pub use polygon::Loop;
pub use segment::*;
pub use triangle::*;
pub use vector::Vector;

/// Handle into a vertex arena (`&[Point]`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct VertexId(pub usize);

impl std::fmt::Debug for VertexId {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "v{}", self.0)
  }
}

impl VertexId {
  pub fn usize(self) -> usize {
    self.0
  }
}

impl From<usize> for VertexId {
  fn from(idx: usize) -> VertexId {
    VertexId(idx)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
