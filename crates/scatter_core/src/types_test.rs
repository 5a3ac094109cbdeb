use glam::DVec2;
use smallvec::smallvec;

use super::*;

#[test]
fn test_bounds_encapsulate() {
  let mut bounds = ScalarBounds::empty();
  bounds.encapsulate(DVec2::new(1.0, -2.0));
  bounds.encapsulate(DVec2::new(-3.0, 4.0));

  assert_eq!(bounds.min, DVec2::new(-3.0, -2.0));
  assert_eq!(bounds.max, DVec2::new(1.0, 4.0));
  assert!(bounds.is_valid());
}

#[test]
fn test_bounds_empty_is_invalid() {
  assert!(!ScalarBounds::empty().is_valid());
}

#[test]
fn test_density_value_or() {
  assert_eq!(Density::Finite(2.5).value_or(9.0), 2.5);
  assert_eq!(Density::Unbounded.value_or(9.0), 9.0);
  assert!(Density::Unbounded.is_unbounded());
  assert!(!Density::Finite(0.0).is_unbounded());
}

#[test]
fn test_config_builders() {
  let config = ScatterConfig::new()
    .with_dummy_value(-999.0)
    .with_resolution(640, 480)
    .with_scalar_range(DVec2::new(-1.0, 0.0), DVec2::new(1.0, 2.0));

  assert_eq!(config.dummy_value, Some(-999.0));
  assert_eq!(config.resolution, [640, 480]);
  assert_eq!(config.scalar_min, DVec2::new(-1.0, 0.0));
  assert_eq!(config.scalar_max, DVec2::new(1.0, 2.0));
}

#[test]
fn test_config_default_has_no_dummy() {
  assert_eq!(ScatterConfig::default().dummy_value, None);
}

#[test]
fn test_sampling_derivation() {
  let config = ScatterConfig::new()
    .with_resolution(100, 50)
    .with_scalar_range(DVec2::new(0.0, 0.0), DVec2::new(10.0, 5.0));
  let sampling = config.sampling();

  assert_eq!(sampling.delta, DVec2::new(10.0, 5.0));
  assert_eq!(sampling.step, DVec2::new(0.1, 0.1));
}

#[test]
fn test_output_triangle_count() {
  let record = CellScatter {
    cell: 0,
    density: Density::Finite(1.0),
    is_limit: false,
    triangles: smallvec![[VertexRef::Mesh(0), VertexRef::Mesh(1), VertexRef::Mesh(2)]; 3],
    synthetic: None,
    bounds: ScalarBounds::empty(),
  };
  let output = ScatterOutput {
    cells: vec![record.clone(), record],
    sampling: ScatterConfig::default().sampling(),
  };

  assert!(!output.is_empty());
  assert_eq!(output.triangle_count(), 6);
}

#[test]
fn test_error_status_codes() {
  assert_eq!(
    ScatterError::FirstFieldIncomplete { have: 0, need: 4 }.status_code(),
    -1
  );
  assert_eq!(
    ScatterError::SecondFieldIncomplete { have: 0, need: 4 }.status_code(),
    -2
  );
  assert_eq!(ScatterError::NoCells.status_code(), -5);
  assert_eq!(
    ScatterError::NotTetrahedral { cell_vertices: 3 }.status_code(),
    -6
  );
}

#[test]
fn test_error_messages() {
  assert_eq!(ScatterError::NoCells.to_string(), "no cells");
  assert_eq!(
    ScatterError::NotTetrahedral { cell_vertices: 3 }.to_string(),
    "no tetrahedra (first cell has 3 vertices)"
  );
}
