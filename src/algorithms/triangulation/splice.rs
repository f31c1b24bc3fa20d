use tracing::{debug, warn};

use crate::data::{Loop, Point, Segment, Vector};
use crate::{Error, Result, Tolerance};

/// Merge a void loop into a counter-clockwise ring.
///
/// A probe runs leftwards from the void's minimum vertex `vv`. It bridges
/// to the boundary vertex it hits directly, or else to the best visible
/// vertex near the boundary edge it crosses first. The void is inserted
/// clockwise right after the bridge vertex `b`:
///
/// ```text
/// .., b, vv, <void clockwise>, vv, b, ..
/// ```
///
/// Voids must be spliced in ascending order of their minimum vertex, so
/// every void left of `vv` is already part of `ring`.
///
/// # Errors
///
/// * `EmptyVoid` if `void` has no vertices.
/// * `NoBridge` if the probe hits nothing.
pub fn splice_void(ring: &mut Vec<Point>, void: &Loop, tol: Tolerance) -> Result<()> {
  let vv = void.min_vertex(tol).ok_or(Error::EmptyVoid)?;
  let bridge = find_bridge(ring, &vv, tol)?;
  debug!(bridge, x = vv.x_coord(), y = vv.y_coord(), "splicing void");

  let mut inserted = void.ordered_vertices(false, tol);
  inserted.push(vv);
  inserted.push(ring[bridge]);
  ring.splice(bridge + 1..bridge + 1, inserted);
  Ok(())
}

/// Splice every void, in ascending order of minimum vertex. Voids that
/// cannot be spliced are logged and left out. Returns their indices into
/// `voids`.
pub fn splice_voids(ring: &mut Vec<Point>, voids: &[Loop], tol: Tolerance) -> Vec<usize> {
  let mut order: Vec<usize> = (0..voids.len()).collect();
  order.sort_by(|&a, &b| voids[a].cmp_by_min(&voids[b], tol));
  let mut skipped = Vec::new();
  for idx in order {
    if let Err(error) = splice_void(ring, &voids[idx], tol) {
      warn!(void = idx, %error, "skipping void");
      skipped.push(idx);
    }
  }
  skipped.sort_unstable();
  skipped
}

fn find_bridge(ring: &[Point], vv: &Point, tol: Tolerance) -> Result<usize> {
  let min_x = ring
    .iter()
    .map(Point::x_coord)
    .fold(f64::INFINITY, f64::min);
  if !min_x.is_finite() {
    return Err(Error::NoBridge);
  }
  let probe = Segment::from_end(*vv, Point::new([min_x - 1.0, vv.y_coord()]));

  // Vertices on the probe. Closest wins, the first of a tie stays.
  let mut vertex_hit: Option<usize> = None;
  for (idx, pt) in ring.iter().enumerate() {
    if tol.approx_eq(pt.y_coord(), vv.y_coord()) && pt.x_coord() < vv.x_coord() {
      match vertex_hit {
        Some(best) if ring[best].x_coord() >= pt.x_coord() => {}
        _ => vertex_hit = Some(idx),
      }
    }
  }

  // Edges crossing the probe. Largest x wins.
  let mut edge_hit: Option<(usize, Point)> = None;
  let len = ring.len();
  for i in 0..len {
    let p = &ring[i];
    let q = &ring[(i + 1) % len];
    if tol.approx_eq(p.y_coord(), q.y_coord()) {
      continue;
    }
    let edge = Segment::from_end(*p, *q);
    let hit = match probe.intersect(&edge, tol) {
      Some(hit) => hit,
      None => continue,
    };
    let (lo, hi) = if p.y_coord() < q.y_coord() {
      (p.y_coord(), q.y_coord())
    } else {
      (q.y_coord(), p.y_coord())
    };
    if hit.y_coord() < lo || hit.y_coord() > hi || hit.x_coord() >= vv.x_coord() {
      continue;
    }
    match edge_hit {
      Some((_, best)) if best.x_coord() >= hit.x_coord() => {}
      _ => edge_hit = Some((i, hit)),
    }
  }

  match (vertex_hit, edge_hit) {
    (Some(v), Some((_, hit))) if ring[v].x_coord() >= hit.x_coord() => Ok(v),
    (Some(v), None) => Ok(v),
    (_, Some((edge, hit))) => Ok(visible_vertex(ring, vv, edge, &hit, tol)),
    (None, None) => Err(Error::NoBridge),
  }
}

// The crossed edge's endpoint with the larger x is visible from `vv` unless
// another ring vertex sits inside the triangle (vv, hit, endpoint) or on the
// segment vv-endpoint. An inside vertex wins, the one closest in angle to the
// probe direction and the last one on a tie. Otherwise the vertex on the
// segment nearest to `vv` is used.
fn visible_vertex(ring: &[Point], vv: &Point, edge: usize, hit: &Point, tol: Tolerance) -> usize {
  let len = ring.len();
  let a = edge;
  let b = (edge + 1) % len;
  let candidate = if ring[a].x_coord() >= ring[b].x_coord() {
    a
  } else {
    b
  };
  let endpoint = ring[candidate];
  let sight = Segment::from_end(*vv, endpoint);
  let leftwards = Vector::new(-1.0, 0.0);

  let mut best: Option<(usize, f64)> = None;
  let mut blocking: Option<(usize, f64)> = None;
  for (idx, pt) in ring.iter().enumerate() {
    if idx == candidate || tol.eq(pt, &endpoint) || tol.eq(pt, vv) {
      continue;
    }
    if pt.in_triangle(vv, hit, &endpoint) {
      let angle = leftwards.angle_to(&(pt - vv));
      match best {
        Some((_, smallest)) if angle > smallest => {}
        _ => best = Some((idx, angle)),
      }
    } else if sight.passes_through(pt, tol) {
      let along = sight.fraction(pt);
      match blocking {
        Some((_, nearest)) if nearest <= along => {}
        _ => blocking = Some((idx, along)),
      }
    }
  }
  best.or(blocking).map_or(candidate, |(idx, _)| idx)
}
