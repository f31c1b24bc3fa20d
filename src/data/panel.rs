use tracing::{debug, warn};

use super::{Loop, Mesh, Point};
use crate::algorithms::triangulation::{earclip, splice};
use crate::{Config, Result, Tolerance};

/// A cut panel: an outer boundary with voids (holes) cut out of it.
///
/// Voids are kept sorted by their minimum vertex, which is also the order
/// in which they are spliced into the boundary. Nothing is cached;
/// triangulate again whenever the geometry changes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
  boundary: Loop,
  voids: Vec<Loop>,
}

/// Output of [`Panel::triangulate`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelMesh {
  /// Triangles over the spliced ring. Bridge vertices appear twice in
  /// `mesh.points`.
  pub mesh: Mesh,
  /// Ear clipping stopped early; `mesh` only covers part of the panel.
  pub clip_failure: bool,
  /// Indices into [`Panel::voids`] of voids that could not be spliced.
  pub skipped_voids: Vec<usize>,
}

impl Panel {
  pub fn new(boundary: Loop) -> Panel {
    Panel {
      boundary,
      voids: Vec::new(),
    }
  }

  /// Insert `void`, keeping the voids sorted. A void whose minimum vertex
  /// ties with an existing one goes after it.
  pub fn add_void(&mut self, void: Loop, tol: Tolerance) {
    let at = self
      .voids
      .partition_point(|other| other.cmp_by_min(&void, tol).is_le());
    self.voids.insert(at, void);
  }

  pub fn boundary(&self) -> &Loop {
    &self.boundary
  }

  pub fn voids(&self) -> &[Loop] {
    &self.voids
  }

  /// The counter-clockwise boundary with every spliceable void merged in,
  /// plus the indices of the voids that were left out.
  ///
  /// # Errors
  ///
  /// Fails if the boundary does not pass [`Loop::validate`].
  pub fn ring(&self, tol: Tolerance) -> Result<(Vec<Point>, Vec<usize>)> {
    self.boundary.validate()?;
    let mut ring = self.boundary.ordered_vertices(true, tol);
    let skipped = splice::splice_voids(&mut ring, &self.voids, tol);
    Ok((ring, skipped))
  }

  /// Splice the voids into the boundary and ear clip the result.
  ///
  /// A void that cannot be spliced is skipped and reported in
  /// [`PanelMesh::skipped_voids`]; the rest of the panel is still
  /// triangulated. A clip failure is reported through
  /// [`PanelMesh::clip_failure`].
  ///
  /// # Errors
  ///
  /// Fails if the boundary does not pass [`Loop::validate`].
  pub fn triangulate(&self, config: &Config) -> Result<PanelMesh> {
    let tol = config.tolerance;
    let (ring, skipped_voids) = self.ring(tol)?;
    debug!(
      ring = ring.len(),
      voids = self.voids.len(),
      skipped = skipped_voids.len(),
      "triangulating panel"
    );
    let clipped = earclip::triangulate(&ring, tol)?;
    if clipped.failed {
      warn!(
        triangles = clipped.triangles.len(),
        "clip failure, panel is only partially triangulated"
      );
    }
    Ok(PanelMesh {
      mesh: Mesh::new(ring, clipped.triangles),
      clip_failure: clipped.failed,
      skipped_voids,
    })
  }

  /// Grow the boundary by `d` and shrink every void by `d`. A negative `d`
  /// does the opposite. Used to compensate for the laser kerf.
  ///
  /// # Errors
  ///
  /// Propagates [`Loop::offset`] failures.
  pub fn offset(&self, d: f64, tol: Tolerance) -> Result<Panel> {
    let boundary = self.boundary.ordered(true, tol).offset(d, tol)?;
    let voids = self
      .voids
      .iter()
      .map(|void| void.ordered(true, tol).offset(-d, tol))
      .collect::<Result<Vec<Loop>>>()?;
    Ok(Panel { boundary, voids })
  }

  /// Closed outlines for export, scaled by `scale` (e.g. millimetres per
  /// unit). The counter-clockwise boundary comes first, followed by the
  /// voids in clockwise order.
  pub fn export_loops(&self, scale: f64, tol: Tolerance) -> Vec<Loop> {
    std::iter::once(self.boundary.ordered(true, tol))
      .chain(self.voids.iter().map(|void| void.ordered(false, tol)))
      .map(|ring| ring.scale(scale))
      .collect()
  }
}
