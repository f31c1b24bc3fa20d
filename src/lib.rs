//! Triangulation engine for laser-cut panel design.
//!
//! Panels are described by a boundary [`Loop`](data::Loop) and any number of
//! void loops (holes). The crate turns them into renderable triangles:
//!
//! * [`delaunay`](algorithms::triangulation::delaunay) triangulates a point
//!   set by incremental insertion with edge-flip legalization,
//! * [`splice`](algorithms::triangulation::splice) merges void loops into
//!   the boundary ring through a visibility bridge,
//! * [`earclip`](algorithms::triangulation::earclip) converts the resulting
//!   ring into triangles.
//!
//! All geometry is `f64` with an epsilon tolerant comparator
//! ([`Tolerance`]). Coordinates follow the laser bed / screen convention
//! where y grows downwards; see [`Orientation`] for the sign rules.
//!
//! ```rust
//! use panelcut::data::{Loop, Panel, Point};
//! use panelcut::Config;
//!
//! let boundary = Loop::new(vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([0.0, 10.0]),
//! ]);
//! let panel = Panel::new(boundary);
//! let out = panel.triangulate(&Config::default()).unwrap();
//! assert!(!out.clip_failure);
//! assert_eq!(out.mesh.triangle_count(), 2);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod config;
pub mod data;
mod orientation;
mod tolerance;

pub use config::{Config, ConfigBuilder};
pub use orientation::Orientation;
pub use tolerance::Tolerance;

use data::VertexId;

/// Errors reported by the geometry primitives and triangulators.
///
/// Every failure is local to the operation that detects it. Callers decide
/// whether to skip, retry with perturbed input, or give up.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// A loop, triangle or point set has too few vertices to work with.
  #[error("insufficient vertices")]
  InsufficientVertices,
  /// A void loop without any vertices was handed to the splicer.
  #[error("cannot splice an empty void loop")]
  EmptyVoid,
  /// A triangle refers to a vertex outside its arena, or repeats a vertex.
  #[error("invalid vertex reference {index}")]
  InvalidVertex { index: usize },
  /// A point coincides (within tolerance) with one already inserted.
  #[error("duplicate point {vertex:?}")]
  DuplicatePoint { vertex: VertexId },
  /// A coordinate was NaN or infinite.
  #[error("coordinate is not finite")]
  NotFinite,
  /// Two lines that had to be intersected are (nearly) parallel.
  #[error("lines are parallel")]
  ParallelLines,
  /// Three points are (nearly) colinear and have no circumcircle.
  #[error("degenerate triangle")]
  DegenerateTriangle,
  /// A triangle or ring that must be counter-clockwise is not.
  #[error("clockwise violation")]
  ClockWiseViolation,
  /// Point location found no triangle containing the vertex.
  #[error("no triangle contains {vertex:?}")]
  NoContainingTriangle { vertex: VertexId },
  /// Two triangles handed to an edge flip do not share exactly one edge.
  #[error("triangles do not share an edge")]
  NoSharedEdge,
  /// No visible boundary vertex was found to bridge a void into.
  #[error("no bridge vertex found for void")]
  NoBridge,
  /// Configuration validation failed.
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
pub mod testing;
