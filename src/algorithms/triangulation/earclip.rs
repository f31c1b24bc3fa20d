use tracing::{debug, warn};

use crate::data::{Point, Segment, Triangle, VertexId};
use crate::orientation::cross;
use crate::{Error, Result, Tolerance};

/// Output of [`triangulate`].
#[derive(Debug, Clone, PartialEq)]
pub struct EarClip {
  /// Counter-clockwise triangles indexing the input ring.
  pub triangles: Vec<Triangle>,
  /// Set when a full scan found no ear. `triangles` then holds what was
  /// clipped before the scan gave up.
  pub failed: bool,
}

// Working list of ring positions still to be clipped. Scan triples
// (i-2, i-1, i) with wrap-around from the start of the list. The first ear
// found is emitted, its tip removed, and the scan restarts. A tip that is
// convex (a->b->c turns counter-clockwise) with no other remaining vertex
// strictly inside, or on the new edge a-c, is an ear.

/// Triangulate a counter-clockwise ring, such as a boundary with its voids
/// spliced in.
///
/// Vertices that coincide (within epsilon) with a corner of a candidate ear
/// are skipped by the inside test. Splicing duplicates the bridge vertices,
/// and those copies always sit on the ear they belong to.
///
/// # Errors
///
/// `InsufficientVertices` for rings with fewer than 3 vertices.
pub fn triangulate(ring: &[Point], tol: Tolerance) -> Result<EarClip> {
  if ring.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let mut order: Vec<usize> = (0..ring.len()).collect();
  let mut triangles = Vec::with_capacity(ring.len() - 2);
  while order.len() > 3 {
    match find_ear(ring, &order, tol) {
      Some(b) => {
        let len = order.len();
        let a = (b + len - 1) % len;
        let c = (b + 1) % len;
        triangles.push(Triangle::new_unchecked([
          VertexId(order[a]),
          VertexId(order[b]),
          VertexId(order[c]),
        ]));
        order.remove(b);
      }
      None => {
        warn!(
          clipped = triangles.len(),
          remaining = order.len(),
          "failed to clip ear"
        );
        return Ok(EarClip {
          triangles,
          failed: true,
        });
      }
    }
  }
  triangles.push(Triangle::new_unchecked([
    VertexId(order[0]),
    VertexId(order[1]),
    VertexId(order[2]),
  ]));
  debug!(triangles = triangles.len(), "ear clipping done");
  Ok(EarClip {
    triangles,
    failed: false,
  })
}

// Position (in `order`) of the next ear tip.
fn find_ear(ring: &[Point], order: &[usize], tol: Tolerance) -> Option<usize> {
  let len = order.len();
  (0..len).find_map(|i| {
    let a = (i + len - 2) % len;
    let b = (i + len - 1) % len;
    if is_ear(ring, order, a, b, i, tol) {
      Some(b)
    } else {
      None
    }
  })
}

fn is_ear(ring: &[Point], order: &[usize], a: usize, b: usize, c: usize, tol: Tolerance) -> bool {
  let pa = &ring[order[a]];
  let pb = &ring[order[b]];
  let pc = &ring[order[c]];
  if cross(pa, pb, pc) >= 0.0 {
    return false;
  }
  let diagonal = Segment::from_end(*pa, *pc);
  !order.iter().enumerate().any(|(pos, &idx)| {
    if pos == a || pos == b || pos == c {
      return false;
    }
    let v = &ring[idx];
    if tol.eq(v, pa) || tol.eq(v, pb) || tol.eq(v, pc) {
      return false;
    }
    v.in_triangle(pa, pb, pc) || diagonal.passes_through(v, tol)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::{Loop, TriangleView};
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn area_2x(ring: &[Point], triangles: &[Triangle]) -> f64 {
    triangles
      .iter()
      .map(|t| t.view(ring).signed_area_2x())
      .sum()
  }

  #[test]
  fn basic_1() {
    let tol = Tolerance::default();
    let ring = Loop::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([1.0, 1.0]),
    ])
    .ordered_vertices(true, tol);
    let out = triangulate(&ring, tol).unwrap();
    assert!(!out.failed);
    assert_eq!(out.triangles.len(), 1);
  }

  #[test]
  fn l_shape() {
    let tol = Tolerance::default();
    let ring = Loop::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 2.0]),
      Point::new([2.0, 2.0]),
      Point::new([2.0, 4.0]),
      Point::new([0.0, 4.0]),
    ]);
    let ccw = ring.ordered(true, tol);
    let out = triangulate(ccw.vertices(), tol).unwrap();
    assert!(!out.failed);
    assert_eq!(out.triangles.len(), 4);
    assert_eq!(area_2x(ccw.vertices(), &out.triangles), ccw.signed_area_2x());
    assert_eq!(area_2x(ccw.vertices(), &out.triangles).abs(), 24.0);
    for t in out.triangles.iter() {
      assert!(t.view(ccw.vertices()).orientation().is_ccw());
    }
  }

  #[test]
  fn too_small() {
    let ring = vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])];
    assert_eq!(
      triangulate(&ring, Tolerance::default()),
      Err(Error::InsufficientVertices)
    );
  }

  #[test]
  fn clockwise_ring_fails() {
    // Every tip of a clockwise ring is reflex.
    let ring = vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
    ];
    let out = triangulate(&ring, Tolerance::default()).unwrap();
    assert!(out.failed);
    assert!(out.triangles.is_empty());
  }

  #[test]
  fn first_ear_wins() {
    // Convex ring: the first triple scanned is (n-2, n-1, 0).
    let tol = Tolerance::default();
    let ring = Loop::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([0.0, 10.0]),
      Point::new([10.0, 10.0]),
      Point::new([10.0, 0.0]),
    ]);
    assert!(ring.is_ccw(tol));
    let out = triangulate(ring.vertices(), tol).unwrap();
    assert_eq!(
      out.triangles[0].vertices(),
      [VertexId(2), VertexId(3), VertexId(0)]
    );
  }

  #[test]
  fn vertex_on_the_cut() {
    // The first tip scanned, (0,15), would cut from (20,10) to (10,20)
    // straight through (15,15).
    let tol = Tolerance::default();
    let ring = vec![
      Point::new([10.0, 20.0]),
      Point::new([20.0, 15.0]),
      Point::new([15.0, 15.0]),
      Point::new([20.0, 10.0]),
      Point::new([0.0, 15.0]),
    ];
    let out = triangulate(&ring, tol).unwrap();
    assert!(!out.failed);
    assert_eq!(
      out.triangles[0].vertices(),
      [VertexId(0), VertexId(1), VertexId(2)]
    );
    assert_eq!(out.triangles.len(), 3);
    assert_eq!(area_2x(&ring, &out.triangles), -175.0);
  }

  #[proptest]
  fn equal_area_prop(#[strategy(any_star_loop(3..40))] ring: Loop) {
    let tol = Tolerance::default();
    let ccw = ring.ordered(true, tol);
    let out = triangulate(ccw.vertices(), tol).unwrap();
    prop_assert!(!out.failed);
    prop_assert_eq!(out.triangles.len(), ccw.len() - 2);
    let total = area_2x(ccw.vertices(), &out.triangles);
    prop_assert!((total - ccw.signed_area_2x()).abs() < 1e-6 * ccw.signed_area_2x().abs());
    for t in out.triangles.iter() {
      let view: TriangleView = t.view(ccw.vertices());
      prop_assert!(view.signed_area_2x() <= 0.0);
    }
  }
}
