//! Stage 1: lift one tetrahedron out of the mesh.

use glam::{DVec2, Vec3};

use super::types::{CellSample, ScalarField, TetMesh};
use crate::types::{CellId, ScalarBounds};

/// Fetch the four corners of `cell` with both scalar values per corner.
///
/// Returns `None` when any corner carries the dummy marker in either
/// field; remaining corners are not fetched in that case.
pub fn load_cell<M, S1, S2>(
  mesh: &M,
  first: &S1,
  second: &S2,
  dummy_value: Option<f64>,
  cell: CellId,
) -> Option<CellSample>
where
  M: TetMesh + ?Sized,
  S1: ScalarField + ?Sized,
  S2: ScalarField + ?Sized,
{
  let mut vertices = [0; 4];
  let mut data = [DVec2::ZERO; 4];
  let mut positions = [Vec3::ZERO; 4];
  let mut bounds = ScalarBounds::empty();

  for corner in 0..4 {
    let vertex = mesh.cell_vertex(cell, corner);
    let point = DVec2::new(first.value(vertex), second.value(vertex));

    if let Some(dummy) = dummy_value {
      if point.x == dummy || point.y == dummy {
        return None;
      }
    }

    vertices[corner] = vertex;
    data[corner] = point;
    positions[corner] = mesh.vertex_position(vertex);
    bounds.encapsulate(point);
  }

  Some(CellSample {
    cell,
    vertices,
    data,
    positions,
    bounds,
  })
}

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;
