// Strategies for:
//  * points
//  * triangles
//  * star shaped loops
//  * spaced point sets
// A Strategy is a way to generate a shrinkable value.
use crate::algorithms::scatter;
use crate::data::{Loop, Point};

use core::ops::Range;
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Integer coordinates keep the exact predicates and the float code in
// agreement, and make failures easy to read.
pub fn any_point() -> impl Strategy<Value = Point> {
  (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn any_triangle() -> impl Strategy<Value = [Point; 3]> {
  [any_point(), any_point(), any_point()]
}

// Star shaped around the origin: vertex i sits at a random radius in
// 10..100 and a random angle inside the i-th sector. Half of the loops are
// reversed, so both windings show up.
pub fn any_star_loop(range: Range<usize>) -> impl Strategy<Value = Loop> {
  (range, any::<u64>()).prop_map(|(n, seed)| {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ring: Vec<Point> = (0..n)
      .map(|i| {
        let jitter: f64 = rng.gen();
        let radius = rng.gen_range(10.0..100.0);
        let angle = std::f64::consts::TAU * (i as f64 + 0.8 * jitter) / n as f64;
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    if rng.gen_bool(0.5) {
      ring.reverse();
    }
    Loop::new(ring)
  })
}

// Up to `count` points in an `extent` sized square, pairwise further apart
// than `spacing`.
pub fn spaced_points(count: usize, extent: f64, spacing: f64) -> impl Strategy<Value = Vec<Point>> {
  any::<u64>().prop_map(move |seed| {
    let mut rng = SmallRng::seed_from_u64(seed);
    let bounds = [Point::new([0.0, 0.0]), Point::new([extent, extent])];
    scatter(count, bounds, spacing, 30, &mut rng)
  })
}

#[test]
fn star_loops_are_valid() {
  let mut runner = proptest::test_runner::TestRunner::deterministic();
  for _ in 0..32 {
    let ring = any_star_loop(3..20)
      .new_tree(&mut runner)
      .unwrap()
      .current();
    assert!(ring.validate().is_ok());
  }
}
