//! Core data types for continuous scatterplot computation.

use glam::DVec2;
use smallvec::SmallVec;
use thiserror::Error;

/// Opaque handle of a mesh vertex.
pub type VertexId = usize;

/// Index of a mesh cell (tetrahedron).
pub type CellId = usize;

/// Corner of an emitted scatterplot triangle.
///
/// `Synthetic` marks the crossing point fabricated in the quad case; it is
/// not part of the input mesh. Its scalar-space position is carried once per
/// record on [`CellScatter::synthetic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexRef {
  /// A vertex of the input mesh.
  Mesh(VertexId),

  /// The cell's fabricated crossing point.
  Synthetic,
}

/// One emitted triangle in scalar space (three corner handles).
pub type ScatterTriangle = [VertexRef; 3];

/// Mass density of the bivariate map at one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Density {
  /// 3D mass per unit of scatterplot area.
  Finite(f64),

  /// Limit cell with non-zero mass: the map concentrates volume onto a
  /// degenerate image, so the density grows without bound.
  Unbounded,
}

impl Density {
  /// Finite value, or `cap` for unbounded cells.
  pub fn value_or(self, cap: f64) -> f64 {
    match self {
      Density::Finite(value) => value,
      Density::Unbounded => cap,
    }
  }

  /// True for the unbounded (limit) state.
  pub fn is_unbounded(self) -> bool {
    matches!(self, Density::Unbounded)
  }
}

/// Axis-aligned bounding box in 2D scalar space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalarBounds {
  pub min: DVec2,
  pub max: DVec2,
}

impl ScalarBounds {
  /// Create bounds with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: DVec2::splat(f64::INFINITY),
      max: DVec2::splat(f64::NEG_INFINITY),
    }
  }

  /// Create bounds from min/max corners.
  pub fn new(min: DVec2, max: DVec2) -> Self {
    Self { min, max }
  }

  /// Expand bounds to include a scalar pair.
  #[inline]
  pub fn encapsulate(&mut self, point: DVec2) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if bounds are valid (min <= max on both axes).
  pub fn is_valid(&self) -> bool {
    self.min.x <= self.max.x && self.min.y <= self.max.y
  }
}

impl Default for ScalarBounds {
  fn default() -> Self {
    Self::empty()
  }
}

/// Output record for one processed tetrahedron.
///
/// Every field is a pure function of the cell's own four vertices; records
/// from different cells are independent and safely mergeable in any order.
#[derive(Clone, Debug, PartialEq)]
pub struct CellScatter {
  /// Cell this record was computed from.
  pub cell: CellId,

  /// Density shared by every triangle of the fan.
  pub density: Density,

  /// True when the bivariate map is locally singular at this cell (zero
  /// Jacobian volume or collapsed base triangle).
  pub is_limit: bool,

  /// Triangle fan covering the cell's image in scalar space.
  /// 3 entries for the apex case, 4 for the quad case.
  pub triangles: SmallVec<[ScatterTriangle; 4]>,

  /// Scalar-space position of the fabricated crossing point, present iff a
  /// corner of the fan is [`VertexRef::Synthetic`].
  pub synthetic: Option<DVec2>,

  /// Scalar-space extent of the cell's four samples (rasterizer scan bound).
  pub bounds: ScalarBounds,
}

/// Sampling deltas derived from the scalar domain and the grid resolution.
///
/// Consumed by the downstream rasterizer, not by the classification math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSampling {
  /// Extent of the scalar domain per axis.
  pub delta: DVec2,

  /// Scalar step between adjacent grid samples per axis.
  pub step: DVec2,
}

/// Whole-run result handed to the rasterizer.
#[derive(Clone, Debug)]
pub struct ScatterOutput {
  /// Per-cell records, in cell order.
  pub cells: Vec<CellScatter>,

  /// Grid sampling info for scan conversion.
  pub sampling: GridSampling,
}

impl ScatterOutput {
  /// Returns true if no cell produced a record.
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Total number of emitted triangles across all records.
  pub fn triangle_count(&self) -> usize {
    self.cells.iter().map(|record| record.triangles.len()).sum()
  }
}

/// Configuration for a scatterplot run.
///
/// Values are fixed before a run and never mutated during it.
#[derive(Clone, Debug)]
pub struct ScatterConfig {
  /// Sentinel scalar marking excluded samples. Any cell with a vertex whose
  /// first or second scalar equals this value is skipped wholesale.
  pub dummy_value: Option<f64>,

  /// Target 2D grid resolution (columns, rows) for the rasterizer.
  pub resolution: [u32; 2],

  /// Lower corner of the scalar domain.
  pub scalar_min: DVec2,

  /// Upper corner of the scalar domain.
  pub scalar_max: DVec2,
}

impl Default for ScatterConfig {
  fn default() -> Self {
    Self {
      dummy_value: None,
      resolution: [256, 256],
      scalar_min: DVec2::ZERO,
      scalar_max: DVec2::ONE,
    }
  }
}

impl ScatterConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_dummy_value(mut self, value: f64) -> Self {
    self.dummy_value = Some(value);
    self
  }

  pub fn with_resolution(mut self, columns: u32, rows: u32) -> Self {
    self.resolution = [columns, rows];
    self
  }

  pub fn with_scalar_range(mut self, min: DVec2, max: DVec2) -> Self {
    self.scalar_min = min;
    self.scalar_max = max;
    self
  }

  /// Sampling deltas handed to the rasterizer.
  pub fn sampling(&self) -> GridSampling {
    let delta = self.scalar_max - self.scalar_min;
    GridSampling {
      delta,
      step: delta / DVec2::new(self.resolution[0] as f64, self.resolution[1] as f64),
    }
  }
}

/// Precondition failure detected before the parallel pass.
///
/// These abort the whole run with no partial results. Per-cell numerical
/// degeneracies are never errors; they are defined branches of the per-cell
/// computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScatterError {
  /// First scalar field does not cover every mesh vertex.
  #[error("first scalar field covers {have} of {need} vertices")]
  FirstFieldIncomplete { have: usize, need: usize },

  /// Second scalar field does not cover every mesh vertex.
  #[error("second scalar field covers {have} of {need} vertices")]
  SecondFieldIncomplete { have: usize, need: usize },

  /// The mesh has no cells.
  #[error("no cells")]
  NoCells,

  /// The mesh's cells are not tetrahedra.
  #[error("no tetrahedra (first cell has {cell_vertices} vertices)")]
  NotTetrahedral { cell_vertices: usize },
}

impl ScatterError {
  /// Stable negative status code for embedding layers.
  pub fn status_code(&self) -> i32 {
    match self {
      ScatterError::FirstFieldIncomplete { .. } => -1,
      ScatterError::SecondFieldIncomplete { .. } => -2,
      ScatterError::NoCells => -5,
      ScatterError::NotTetrahedral { .. } => -6,
    }
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
