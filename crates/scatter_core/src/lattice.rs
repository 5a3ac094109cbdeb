//! Synthetic tetrahedral lattice for tests, benches and the CLI driver.
//!
//! Covers an axis-aligned grid of unit cubes, each split into six
//! tetrahedra around the main diagonal (Kuhn subdivision), so neighboring
//! cubes mesh without gaps.

use glam::Vec3;

use crate::pipeline::types::TetMesh;
use crate::types::{CellId, VertexId};

/// Local corner ids of the six tetrahedra of one cube.
///
/// Corner codes pack grid offsets as bits:
/// - bit 0: X offset (0 or 1)
/// - bit 1: Y offset (0 or 1)
/// - bit 2: Z offset (0 or 1)
///
/// ```text
///        6──────7
///       /│     /│
///      2─┼────3 │
///      │ 4────┼─5
///      │/     │/
///      0──────1
/// ```
///
/// Each row walks the main diagonal 0 → 7 adding one axis bit at a time,
/// one row per axis order.
const TET_CORNERS: [[usize; 4]; 6] = [
  [0, 1, 3, 7],
  [0, 1, 5, 7],
  [0, 2, 3, 7],
  [0, 2, 6, 7],
  [0, 4, 5, 7],
  [0, 4, 6, 7],
];

/// Regular grid of unit cubes, six tetrahedra each.
///
/// Vertex positions are the integer grid points, X fastest.
#[derive(Clone, Copy, Debug)]
pub struct TetLattice {
  nx: usize,
  ny: usize,
  nz: usize,
}

impl TetLattice {
  /// Create a lattice of `nx * ny * nz` cubes.
  pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
    Self { nx, ny, nz }
  }

  /// Sample `f` at every grid vertex, in vertex id order.
  ///
  /// The result pairs directly with the lattice as a scalar field.
  pub fn sample_vertices<F: Fn(Vec3) -> f64>(&self, f: F) -> Vec<f64> {
    (0..self.vertex_count())
      .map(|v| f(self.vertex_position(v)))
      .collect()
  }

  fn vertex_id(&self, x: usize, y: usize, z: usize) -> VertexId {
    (z * (self.ny + 1) + y) * (self.nx + 1) + x
  }
}

impl TetMesh for TetLattice {
  fn cell_count(&self) -> usize {
    6 * self.nx * self.ny * self.nz
  }

  fn vertex_count(&self) -> usize {
    (self.nx + 1) * (self.ny + 1) * (self.nz + 1)
  }

  fn cell_vertex_count(&self, _cell: CellId) -> usize {
    4
  }

  fn cell_vertex(&self, cell: CellId, corner: usize) -> VertexId {
    let cube = cell / 6;
    let code = TET_CORNERS[cell % 6][corner];
    let cx = cube % self.nx;
    let cy = (cube / self.nx) % self.ny;
    let cz = cube / (self.nx * self.ny);
    self.vertex_id(cx + (code & 1), cy + ((code >> 1) & 1), cz + ((code >> 2) & 1))
  }

  fn vertex_position(&self, vertex: VertexId) -> Vec3 {
    let x = vertex % (self.nx + 1);
    let rest = vertex / (self.nx + 1);
    let y = rest % (self.ny + 1);
    let z = rest / (self.ny + 1);
    Vec3::new(x as f32, y as f32, z as f32)
  }
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
