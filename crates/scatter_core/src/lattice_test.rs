use glam::Vec3;

use super::TetLattice;
use crate::pipeline::types::TetMesh;

#[test]
fn test_counts() {
  let lattice = TetLattice::new(2, 3, 4);
  assert_eq!(lattice.vertex_count(), 3 * 4 * 5);
  assert_eq!(lattice.cell_count(), 6 * 2 * 3 * 4);
}

#[test]
fn test_unit_cube_cells() {
  let lattice = TetLattice::new(1, 1, 1);
  assert_eq!(lattice.cell_count(), 6);
  assert_eq!(lattice.vertex_count(), 8);

  // Every tetrahedron spans the main diagonal.
  for cell in 0..6 {
    assert_eq!(lattice.cell_vertex_count(cell), 4);
    assert_eq!(lattice.cell_vertex(cell, 0), 0);
    assert_eq!(lattice.cell_vertex(cell, 3), 7);
  }

  let first: Vec<usize> = (0..4).map(|c| lattice.cell_vertex(0, c)).collect();
  assert_eq!(first, vec![0, 1, 3, 7]);
}

#[test]
fn test_vertex_positions() {
  let lattice = TetLattice::new(1, 1, 1);
  assert_eq!(lattice.vertex_position(0), Vec3::ZERO);
  assert_eq!(lattice.vertex_position(5), Vec3::new(1.0, 0.0, 1.0));
  assert_eq!(lattice.vertex_position(7), Vec3::ONE);
}

#[test]
fn test_vertex_ids_in_range() {
  let lattice = TetLattice::new(2, 2, 2);
  for cell in 0..lattice.cell_count() {
    for corner in 0..4 {
      assert!(lattice.cell_vertex(cell, corner) < lattice.vertex_count());
    }
  }
}

#[test]
fn test_six_tets_fill_the_cube() {
  // Each tetrahedron has volume 1/6, so the |det| of its edge frame is 1.
  let lattice = TetLattice::new(1, 1, 1);
  for cell in 0..6 {
    let p: Vec<Vec3> = (0..4)
      .map(|c| lattice.vertex_position(lattice.cell_vertex(cell, c)))
      .collect();
    let e1 = (p[1] - p[0]).as_dvec3();
    let e2 = (p[2] - p[0]).as_dvec3();
    let e3 = (p[3] - p[0]).as_dvec3();
    assert_eq!(e3.dot(e1.cross(e2)).abs(), 1.0);
  }
}

#[test]
fn test_sample_vertices_matches_positions() {
  let lattice = TetLattice::new(2, 1, 1);
  let values = lattice.sample_vertices(|p| p.x as f64 + 10.0 * p.y as f64);
  assert_eq!(values.len(), lattice.vertex_count());

  // Vertex ids run X fastest.
  assert_eq!(values[0], 0.0);
  assert_eq!(values[1], 1.0);
  assert_eq!(values[2], 2.0);
  assert_eq!(values[3], 10.0);
}
