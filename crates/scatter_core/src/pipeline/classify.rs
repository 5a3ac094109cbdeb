//! Stage 3: cell image classification in scalar space.
//!
//! The four corner pairs of a tetrahedron map to four points in the
//! plot plane. Either one point lands inside the triangle of the other
//! three, or two projected edges cross and the image is a quad.
//! Containment is tested first, in corner order, so the two shapes are
//! mutually exclusive.

use glam::DVec2;

use super::types::CellImage;
use crate::geometry::{point_in_triangle, segment_intersection};

/// Containment test orders: three base corners, then the candidate apex.
///
/// Corner 0 is tried as the apex first, then 1, 2 and 3.
const APEX_ORDERS: [[usize; 4]; 4] = [
  [1, 2, 3, 0],
  [0, 2, 3, 1],
  [0, 1, 3, 2],
  [0, 1, 2, 3],
];

/// Edge pairings tried for the quad case, first edge then second.
const EDGE_PAIRINGS: [[usize; 4]; 3] = [
  [0, 1, 2, 3],
  [0, 2, 1, 3],
  [0, 3, 1, 2],
];

/// Decide the shape of a cell's image from its four scalar-space points.
pub fn classify(data: &[DVec2; 4]) -> CellImage {
  for order in APEX_ORDERS {
    if point_in_triangle(data[order[0]], data[order[1]], data[order[2]], data[order[3]]) {
      return CellImage::InTriangle { order };
    }
  }

  for order in EDGE_PAIRINGS {
    if let Some(crossing) =
      segment_intersection(data[order[0]], data[order[1]], data[order[2]], data[order[3]])
    {
      return CellImage::Quad { order, crossing };
    }
  }

  // Near-degenerate images can fail every test above; keep the first
  // pairing with a crossing at the origin.
  CellImage::Quad {
    order: [0, 1, 2, 3],
    crossing: DVec2::ZERO,
  }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
