mod triangulation {
  use panelcut::algorithms::triangulation::{delaunay, earclip};
  use panelcut::data::*;
  use panelcut::*;

  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn crossing_segments() {
    let tol = Tolerance::default();
    let a = Segment::from_end(Point::new([0.0, 0.0]), Point::new([10.0, 10.0]));
    let b = Segment::from_end(Point::new([0.0, 10.0]), Point::new([10.0, 0.0]));
    let hit = a.intersect(&b, tol).unwrap();
    assert!(hit.distance(&Point::new([5.0, 5.0])) < 1e-12);

    let c = Segment::from_end(Point::new([0.0, 1.0]), Point::new([10.0, 11.0]));
    assert_eq!(a.intersect(&c, tol), None);
  }

  #[test]
  fn square_and_centre() -> Result<()> {
    let pts = vec![
      Point::new([0.0, 0.0]),
      Point::new([10.0, 0.0]),
      Point::new([10.0, 10.0]),
      Point::new([0.0, 10.0]),
      Point::new([5.0, 5.0]),
    ];
    let mesh = delaunay::triangulate(&pts, &Config::default())?;
    assert_eq!(mesh.triangle_count(), 4);
    assert!(mesh
      .triangles
      .iter()
      .all(|t| t.contains_vertex(VertexId(4))));
    assert_eq!(mesh.boundary_loop(None).len(), 4);
    Ok(())
  }

  #[test]
  fn l_shape() -> Result<()> {
    let tol = Tolerance::default();
    let ring = Loop::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 2.0]),
      Point::new([2.0, 2.0]),
      Point::new([2.0, 4.0]),
      Point::new([0.0, 4.0]),
    ])
    .ordered(true, tol);
    let out = earclip::triangulate(ring.vertices(), tol)?;
    assert!(!out.failed);
    let mesh = Mesh::new(ring.into_vertices(), out.triangles);
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.area(), 12.0);
    Ok(())
  }

  #[test]
  fn panel_with_void() -> Result<()> {
    let config = ConfigBuilder::new().epsilon(1e-6)?.build();
    let boundary = Loop::new(vec![
      Point::new([0.0, 0.0]),
      Point::new([60.0, 0.0]),
      Point::new([60.0, 40.0]),
      Point::new([0.0, 40.0]),
    ]);
    let void = Loop::new(vec![
      Point::new([20.0, 10.0]),
      Point::new([40.0, 10.0]),
      Point::new([40.0, 30.0]),
      Point::new([20.0, 30.0]),
    ]);
    let mut panel = Panel::new(boundary);
    panel.add_void(void, config.tolerance);
    let out = panel.triangulate(&config)?;
    assert!(!out.clip_failure);
    assert!(out.skipped_voids.is_empty());
    assert!((out.mesh.area() - (2400.0 - 400.0)).abs() < 1e-9);
    assert_eq!(out.mesh.positions().len(), 3 * out.mesh.triangle_count());
    Ok(())
  }

  #[test]
  fn scattered_points() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(42);
    let bounds = [Point::new([0.0, 0.0]), Point::new([200.0, 100.0])];
    let pts = algorithms::scatter(100, bounds, 3.0, 30, &mut rng);
    let mesh = delaunay::triangulate(&pts, &Config::default())?;
    assert_eq!(mesh.vertex_count(), pts.len());
    assert!(!mesh.is_empty());
    for view in mesh.views() {
      assert!(view.orientation().is_ccw());
    }
    Ok(())
  }

  #[test]
  fn bad_config() {
    assert!(ConfigBuilder::new().epsilon(-1.0).is_err());
    assert!(ConfigBuilder::new().omega_margin(f64::NAN).is_err());
  }
}
