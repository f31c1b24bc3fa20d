use rand::Rng;
use tracing::debug;

use crate::data::mesh::closest;
use crate::data::Point;

/// Scatter up to `count` points in the rectangle spanned by `bounds`, no two
/// closer than `min_distance`.
///
/// Each point gets `attempts` tries. A try is rejected when the candidate is
/// within `min_distance` of the nearest point accepted so far. Points that
/// run out of tries are dropped, so the result may be shorter than `count`.
///
/// # Examples
///
/// ```rust
/// use panelcut::algorithms::scatter;
/// use panelcut::data::Point;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let bounds = [Point::new([0.0, 0.0]), Point::new([100.0, 100.0])];
/// let pts = scatter(50, bounds, 2.0, 30, &mut rng);
/// assert!(pts.len() <= 50);
/// ```
pub fn scatter<R>(
  count: usize,
  bounds: [Point; 2],
  min_distance: f64,
  attempts: usize,
  rng: &mut R,
) -> Vec<Point>
where
  R: Rng + ?Sized,
{
  let [lo, hi] = bounds;
  let width = hi.x_coord() - lo.x_coord();
  let height = hi.y_coord() - lo.y_coord();
  let min_sq = min_distance * min_distance;

  let mut out: Vec<Point> = Vec::with_capacity(count);
  for _ in 0..count {
    for _ in 0..attempts {
      let candidate = Point::new([
        lo.x_coord() + rng.gen::<f64>() * width,
        lo.y_coord() + rng.gen::<f64>() * height,
      ]);
      let clear = match closest(&out, &candidate) {
        Some(idx) => out[idx].squared_euclidean_distance(&candidate) > min_sq,
        None => true,
      };
      if clear {
        out.push(candidate);
        break;
      }
    }
  }
  debug!(requested = count, placed = out.len(), "scattered points");
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn stays_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(1);
    let bounds = [Point::new([-5.0, 10.0]), Point::new([5.0, 20.0])];
    let pts = scatter(40, bounds, 0.5, 20, &mut rng);
    assert!(!pts.is_empty());
    for pt in pts {
      assert!((-5.0..=5.0).contains(&pt.x_coord()));
      assert!((10.0..=20.0).contains(&pt.y_coord()));
    }
  }

  #[test]
  fn crowded_rectangle_drops_points() {
    // At most a handful of points fit 3 apart in a 2x2 square.
    let mut rng = SmallRng::seed_from_u64(2);
    let bounds = [Point::new([0.0, 0.0]), Point::new([2.0, 2.0])];
    let pts = scatter(10, bounds, 3.0, 10, &mut rng);
    assert_eq!(pts.len(), 1);
  }

  #[test]
  fn degenerate_bounds() {
    let mut rng = SmallRng::seed_from_u64(3);
    let corner = Point::new([1.0, 1.0]);
    let pts = scatter(5, [corner, corner], 0.1, 5, &mut rng);
    assert_eq!(pts, vec![corner]);
    assert!(scatter(5, [corner, corner], 0.1, 0, &mut rng).is_empty());
  }

  #[proptest]
  fn spacing_holds(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let bounds = [Point::new([0.0, 0.0]), Point::new([50.0, 50.0])];
    let pts = scatter(30, bounds, 2.0, 20, &mut rng);
    for (i, a) in pts.iter().enumerate() {
      for b in pts[i + 1..].iter() {
        assert!(a.distance(b) > 2.0);
      }
    }
  }
}
