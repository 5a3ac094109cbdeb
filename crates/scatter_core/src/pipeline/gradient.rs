//! Stage 2: per-cell gradient reconstruction.
//!
//! Both scalar fields are linear over a tetrahedron, so each has one
//! constant gradient per cell. Together the pair describes the cell's
//! local map into scalar space, and `|g0 x g1|` measures how much
//! spatial volume the cell spreads over the plot.

use glam::DVec3;

use super::types::{CellSample, GradientPair};

/// Solve both field gradients over one tetrahedron.
///
/// Edge vectors are formed at `f32` before widening, matching the
/// position precision of the mesh. A flat cell (zero edge determinant)
/// yields zero gradients.
pub fn solve_gradients(sample: &CellSample) -> GradientPair {
  let e1 = (sample.positions[1] - sample.positions[0]).as_dvec3();
  let e2 = (sample.positions[2] - sample.positions[0]).as_dvec3();
  let e3 = (sample.positions[3] - sample.positions[0]).as_dvec3();

  let ds1 = sample.data[1] - sample.data[0];
  let ds2 = sample.data[2] - sample.data[0];
  let ds3 = sample.data[3] - sample.data[0];

  let a = e2.cross(e1);
  let b = e1.cross(e3);
  let c = e3.cross(e2);

  let det = e3.dot(a);
  if det == 0.0 {
    return GradientPair {
      g0: DVec3::ZERO,
      g1: DVec3::ZERO,
    };
  }

  let inv_det = 1.0 / det;
  GradientPair {
    g0: (a * ds3.x + b * ds2.x + c * ds1.x) * inv_det,
    g1: (a * ds3.y + b * ds2.y + c * ds1.y) * inv_det,
  }
}

/// Spatial volume spread of the cell's image in scalar space.
///
/// Zero marks a singular cell whose pointwise density is unbounded.
#[inline]
pub fn jacobian_volume(pair: &GradientPair) -> f64 {
  pair.g0.cross(pair.g1).length()
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;
