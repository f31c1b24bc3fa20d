use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use panelcut::algorithms::scatter;
use panelcut::algorithms::triangulation::delaunay;
use panelcut::data::Point;
use panelcut::Config;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn criterion_benchmark(c: &mut Criterion) {
  let config = Config::default();
  let mut group = c.benchmark_group("delaunay::triangulate");
  for n in [50, 200, 500] {
    let mut rng = SmallRng::seed_from_u64(n as u64);
    let bounds = [Point::new([0.0, 0.0]), Point::new([1000.0, 1000.0])];
    let pts = scatter(n, bounds, 5.0, 30, &mut rng);
    group.bench_with_input(BenchmarkId::from_parameter(n), &pts, |b, pts| {
      b.iter(|| delaunay::triangulate(pts, &config))
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
