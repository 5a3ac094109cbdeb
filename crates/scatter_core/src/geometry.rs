//! 2D scalar-space geometry predicates.
//!
//! All predicates treat scalar pairs as points in the plane and run in
//! double precision. Containment is inclusive of the triangle boundary;
//! classification depends on that.

use glam::DVec2;

/// Denominator cutoff below which two segments are treated as parallel.
pub const PARALLEL_EPS: f64 = 1e-15;

/// Unsigned area of a triangle.
#[inline]
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
  0.5 * (b - a).perp_dot(c - a).abs()
}

/// Barycentric coordinates of `p` with respect to triangle `(a, b, c)`.
///
/// Degenerate triangles yield non-finite weights: NaN when the base is
/// fully collapsed or `p` lies on a collinear base's line, infinite when
/// `p` lies off that line.
pub fn barycentric(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> [f64; 3] {
  let d = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
  let w0 = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / d;
  let w1 = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / d;
  [w0, w1, 1.0 - w0 - w1]
}

/// Inclusive point-in-triangle test via barycentric coordinates.
///
/// NaN weights (collapsed base) fail neither comparison below and count as
/// contained; infinite weights (collinear base, `p` off its line) do not.
/// A `(0.0..=1.0).contains()` rewrite would lose the NaN case.
#[allow(clippy::manual_range_contains)]
pub fn point_in_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
  for w in barycentric(a, b, c, p) {
    if w < 0.0 || w > 1.0 {
      return false;
    }
  }
  true
}

/// Intersection of segments `(a, b)` and `(c, d)`.
///
/// Solves the line-line system, then accepts the point when its x
/// coordinate falls within both segments' x extents. Returns `None` for
/// (near-)parallel segments, cut off at [`PARALLEL_EPS`].
pub fn segment_intersection(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> Option<DVec2> {
  let denom = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
  if denom.abs() < PARALLEL_EPS {
    return None;
  }

  // Cross products of each segment's endpoints.
  let ab = a.x * b.y - a.y * b.x;
  let cd = c.x * d.y - c.y * d.x;
  let x = ((c.x - d.x) * ab - (a.x - b.x) * cd) / denom;
  let y = ((c.y - d.y) * ab - (a.y - b.y) * cd) / denom;

  if x < a.x.min(b.x) || x > a.x.max(b.x) {
    return None;
  }
  if x < c.x.min(d.x) || x > c.x.max(d.x) {
    return None;
  }

  Some(DVec2::new(x, y))
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
