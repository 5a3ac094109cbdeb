//! Stage 4: mass density and triangle fan emission.
//!
//! The mass carried by a cell is the spatial distance between the two
//! points that project onto the image's interior anchor. Dividing by
//! the Jacobian volume turns it into a density; singular cells keep
//! their mass but report an unbounded density.

use smallvec::SmallVec;

use super::types::{CellImage, CellSample};
use crate::geometry::triangle_area;
use crate::types::{CellScatter, Density, ScatterTriangle, VertexRef};

/// Project one cell into scalar space.
///
/// `volume` is the Jacobian volume from the gradient stage; zero marks
/// the cell as a limit case up front.
pub fn project_cell(sample: &CellSample, volume: f64, image: CellImage) -> CellScatter {
  let mut is_limit = volume == 0.0;

  let mass;
  let synthetic;
  let mut triangles: SmallVec<[ScatterTriangle; 4]> = SmallVec::new();
  let v = |i: usize| VertexRef::Mesh(sample.vertices[i]);

  match image {
    CellImage::InTriangle { order } => {
      let [b0, b1, b2, apex] = order;

      let area = triangle_area(sample.data[b0], sample.data[b1], sample.data[b2]);
      let mut inv_area = 1.0 / area;
      if area == 0.0 {
        inv_area = 0.0;
        is_limit = true;
      }

      let alpha = triangle_area(sample.data[b1], sample.data[b2], sample.data[apex]) * inv_area;
      let beta = triangle_area(sample.data[b0], sample.data[b2], sample.data[apex]) * inv_area;
      let gamma = triangle_area(sample.data[b0], sample.data[b1], sample.data[apex]) * inv_area;

      let p0 = sample.positions[apex].as_dvec3();
      let p1 = sample.positions[b0].as_dvec3() * alpha
        + sample.positions[b1].as_dvec3() * beta
        + sample.positions[b2].as_dvec3() * gamma;
      mass = p0.distance(p1);
      synthetic = None;

      triangles.push([v(apex), v(b0), v(b1)]);
      triangles.push([v(apex), v(b0), v(b2)]);
      triangles.push([v(apex), v(b1), v(b2)]);
    }
    CellImage::Quad { order, crossing } => {
      let [i0, i1, i2, i3] = order;

      // Coincident corner pairs classify as InTriangle, so both edge
      // lengths are nonzero here.
      let r0 = sample.data[i0].distance(crossing) / sample.data[i0].distance(sample.data[i1]);
      let r1 = sample.data[i2].distance(crossing) / sample.data[i2].distance(sample.data[i3]);

      let p0 = sample.positions[i0].as_dvec3()
        + (sample.positions[i1] - sample.positions[i0]).as_dvec3() * r0;
      let p1 = sample.positions[i2].as_dvec3()
        + (sample.positions[i3] - sample.positions[i2]).as_dvec3() * r1;
      mass = p0.distance(p1);
      synthetic = Some(crossing);

      triangles.push([VertexRef::Synthetic, v(i0), v(i2)]);
      triangles.push([VertexRef::Synthetic, v(i2), v(i1)]);
      triangles.push([VertexRef::Synthetic, v(i1), v(i3)]);
      triangles.push([VertexRef::Synthetic, v(i3), v(i0)]);
    }
  }

  let density = if is_limit {
    if mass == 0.0 {
      Density::Finite(0.0)
    } else {
      Density::Unbounded
    }
  } else {
    Density::Finite(mass / volume)
  };

  CellScatter {
    cell: sample.cell,
    density,
    is_limit,
    triangles,
    synthetic,
    bounds: sample.bounds,
  }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;
