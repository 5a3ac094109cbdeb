//! scatter_core - Mesh-independent continuous scatterplot computation
//!
//! This crate projects a tetrahedral volume carrying two scalar fields into
//! the 2D scalar space spanned by those fields. Each tetrahedron becomes a
//! small triangle fan with a mass density attached, which a rasterizer can
//! accumulate into a continuous scatterplot image.
//!
//! # Features
//!
//! - **Per-cell pipeline**: Load, gradient reconstruction, image
//!   classification and projection as separate, testable stages
//! - **Limit handling**: Cells with a singular Jacobian keep their mass and
//!   are flagged instead of dividing by zero
//! - **Parallel batches**: Cells are processed with rayon and collected in
//!   deterministic cell order
//! - **Async driver**: Fire-and-poll wrapper for interactive frontends
//!
//! # Example
//!
//! ```ignore
//! use scatter_core::{compute_scatter, ScatterConfig, TetLattice};
//!
//! // Sample two analytic fields over a Kuhn-subdivided lattice
//! let lattice = TetLattice::new(32, 32, 32);
//! let first = lattice.sample_vertices(|p| p.length() as f64);
//! let second = lattice.sample_vertices(|p| p.x as f64);
//!
//! let output = compute_scatter(&lattice, &first, &second, &ScatterConfig::new())?;
//!
//! println!("Emitted {} triangles from {} cells",
//!     output.triangle_count(), output.cells.len());
//! ```

pub mod types;

// Re-export commonly used items
pub use types::{
  CellId, CellScatter, Density, GridSampling, ScalarBounds, ScatterConfig, ScatterError,
  ScatterOutput, ScatterTriangle, VertexId, VertexRef,
};

// 2D predicates shared by classification and projection
pub mod geometry;

// Per-cell processing pipeline
pub mod pipeline;
pub use pipeline::{
  compute_scatter, compute_scatter_timed, AsyncScatterPlot, ScalarField, ScatterRequest,
  ScatterRunResult, ScatterStats, TetMesh,
};

// Built-in tetrahedralized grid mesh
pub mod lattice;
pub use lattice::TetLattice;
