//! Pipeline I/O types for the continuous scatterplot stages.
//!
//! ```text
//!                 CONTINUOUS SCATTERPLOT PIPELINE
//!                 ===============================
//!
//! ┌──────────────────────────────────────────────────────────────┐
//! │ INPUT                                                        │
//! │ TetMesh (cells + spatial positions), two ScalarFields        │
//! └─────────────────────────────┬────────────────────────────────┘
//!                               │ per-cell, rayon fan-out
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ STAGE 1: LOAD                                                │
//! │ Input:  cell id + mesh + fields (+ optional dummy value)     │
//! │ Output: Option<CellSample>                                   │
//! │                                                              │
//! │ Fetches the four corner pairs, tracks scalar bounds,         │
//! │ drops cells carrying the dummy marker.                       │
//! └─────────────────────────────┬────────────────────────────────┘
//!                               │ CellSample
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ STAGE 2: GRADIENT                                            │
//! │ Input:  CellSample                                           │
//! │ Output: GradientPair { g0, g1 }                              │
//! │                                                              │
//! │ Linear solve over the edge frame; |g0 x g1| is the           │
//! │ Jacobian volume used by the density quotient.                │
//! └─────────────────────────────┬────────────────────────────────┘
//!                               │ GradientPair
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ STAGE 3: CLASSIFY                                            │
//! │ Input:  the four scalar-space points                         │
//! │ Output: CellImage (InTriangle | Quad)                        │
//! │                                                              │
//! │ Containment tests in vertex order, then diagonal             │
//! │ crossing tests, then the origin fallback.                    │
//! └─────────────────────────────┬────────────────────────────────┘
//!                               │ CellImage
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │ STAGE 4: PROJECT                                             │
//! │ Input:  CellSample + Jacobian volume + CellImage             │
//! │ Output: CellScatter (density + triangle fan)                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stage 4 writes [`CellScatter`](crate::types::CellScatter), which lives
//! in [`crate::types`] next to the other public output types.

use glam::{DVec2, DVec3, Vec3};

use crate::types::{CellId, ScalarBounds, VertexId};

// =============================================================================
// Input Traits - Mesh and scalar field access
// =============================================================================

/// Tetrahedral mesh access for the scatterplot pipeline.
///
/// Implementations expose cells as groups of four vertex ids plus a spatial
/// position per vertex. Positions are `f32`: edge vectors are formed at
/// single precision before the gradient solve widens to `f64`.
pub trait TetMesh: Send + Sync {
  /// Number of cells in the mesh.
  fn cell_count(&self) -> usize;

  /// Number of vertices in the mesh.
  fn vertex_count(&self) -> usize;

  /// Number of vertices spanning `cell`. Tetrahedra report 4.
  fn cell_vertex_count(&self, cell: CellId) -> usize;

  /// Global id of the `corner`-th vertex of `cell`.
  fn cell_vertex(&self, cell: CellId, corner: usize) -> VertexId;

  /// Spatial position of `vertex`.
  fn vertex_position(&self, vertex: VertexId) -> Vec3;
}

/// Blanket impl for boxed trait objects.
impl TetMesh for Box<dyn TetMesh> {
  fn cell_count(&self) -> usize {
    (**self).cell_count()
  }

  fn vertex_count(&self) -> usize {
    (**self).vertex_count()
  }

  fn cell_vertex_count(&self, cell: CellId) -> usize {
    (**self).cell_vertex_count(cell)
  }

  fn cell_vertex(&self, cell: CellId, corner: usize) -> VertexId {
    (**self).cell_vertex(cell, corner)
  }

  fn vertex_position(&self, vertex: VertexId) -> Vec3 {
    (**self).vertex_position(vertex)
  }
}

/// Per-vertex scalar data, one value per mesh vertex.
pub trait ScalarField: Send + Sync {
  /// Number of stored values.
  fn len(&self) -> usize;

  /// Value at `vertex`, widened to `f64`.
  fn value(&self, vertex: VertexId) -> f64;

  /// True when the field stores no values.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl ScalarField for [f64] {
  fn len(&self) -> usize {
    self.len()
  }

  fn value(&self, vertex: VertexId) -> f64 {
    self[vertex]
  }
}

impl ScalarField for [f32] {
  fn len(&self) -> usize {
    self.len()
  }

  fn value(&self, vertex: VertexId) -> f64 {
    self[vertex] as f64
  }
}

impl ScalarField for Vec<f64> {
  fn len(&self) -> usize {
    self.as_slice().len()
  }

  fn value(&self, vertex: VertexId) -> f64 {
    self[vertex]
  }
}

impl ScalarField for Vec<f32> {
  fn len(&self) -> usize {
    self.as_slice().len()
  }

  fn value(&self, vertex: VertexId) -> f64 {
    self[vertex] as f64
  }
}

/// Blanket impl for boxed trait objects.
impl ScalarField for Box<dyn ScalarField> {
  fn len(&self) -> usize {
    (**self).len()
  }

  fn value(&self, vertex: VertexId) -> f64 {
    (**self).value(vertex)
  }
}

// =============================================================================
// Stage 1: Load Types
// =============================================================================

/// One tetrahedron lifted out of the mesh, ready for the gradient solve.
#[derive(Clone, Debug)]
pub struct CellSample {
  /// The cell this sample came from.
  pub cell: CellId,

  /// Global ids of the four corners.
  pub vertices: [VertexId; 4],

  /// Both scalar values per corner, as points in scalar space.
  pub data: [DVec2; 4],

  /// Spatial corner positions.
  pub positions: [Vec3; 4],

  /// Scalar-space bounds spanned by the four corners.
  pub bounds: ScalarBounds,
}

// =============================================================================
// Stage 2: Gradient Types
// =============================================================================

/// Gradients of both scalar fields over one tetrahedron.
///
/// Constant per cell: both fields are linear over each tetrahedron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientPair {
  /// Gradient of the first field.
  pub g0: DVec3,

  /// Gradient of the second field.
  pub g1: DVec3,
}

// =============================================================================
// Stage 3: Classify Types
// =============================================================================

/// Shape of a cell's image in scalar space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellImage {
  /// One corner projects inside the triangle of the other three.
  InTriangle {
    /// Permutation of local corner indices: three base corners, then
    /// the contained apex last.
    order: [usize; 4],
  },

  /// Two projected edges cross: the image is a quadrilateral.
  Quad {
    /// Permutation of local corner indices: the first edge pair, then
    /// the second.
    order: [usize; 4],

    /// Where the two projected edges cross in scalar space.
    crossing: DVec2,
  },
}
