//! Continuous Scatterplot Pipeline
//!
//! A per-cell stage pipeline with parallel execution via rayon.
//!
//! ```text
//! ┌──────┐     ┌──────────┐     ┌──────────┐     ┌─────────┐
//! │ Load ├────►│ Gradient ├────►│ Classify ├────►│ Project │
//! └──────┘     └──────────┘     └──────────┘     └─────────┘
//!    │              │                │               │
//! CellSample   GradientPair      CellImage       CellScatter
//! (4 corners)    (g0, g1)      (tri | quad)    (density + fan)
//! ```
//!
//! # Pipeline Stages
//!
//! 1. **Load**: Fetches corner ids, scalar pairs and positions, applies
//!    the dummy-value exclusion
//! 2. **Gradient**: Solves both field gradients per cell and derives the
//!    Jacobian volume
//! 3. **Classify**: Picks the InTriangle or Quad image shape in scalar
//!    space
//! 4. **Project**: Computes the mass density and emits the triangle fan
//!
//! Cells are mutually independent: the parallel loop reads only the
//! immutable mesh and field inputs and every record depends on its own
//! cell alone, so thread count never changes the result.

pub mod types;

// Stage implementations
pub mod classify;
pub mod gradient;
pub mod load;
pub mod project;
pub mod process;
pub mod async_process;


// Re-exports
pub use types::{CellImage, CellSample, GradientPair, ScalarField, TetMesh};

// Synchronous entry point
pub use process::{compute_scatter, compute_scatter_timed, ScatterStats};

// Async entry point (non-blocking, cross-platform)
pub use async_process::{AsyncScatterPlot, ScatterRequest, ScatterRunResult};
