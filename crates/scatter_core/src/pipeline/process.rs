//! Pipeline Orchestrator
//!
//! Runs the full load → gradient → classify → project pipeline using
//! rayon for parallelism. This is the main entry point for embedding.
//!
//! # Usage
//!
//! ```ignore
//! let lattice = TetLattice::new(8, 8, 8);
//! let first = lattice.sample_vertices(|p| p.length() as f64);
//! let second = lattice.sample_vertices(|p| p.x as f64);
//!
//! let output = compute_scatter(
//!     &lattice,
//!     first.as_slice(),
//!     second.as_slice(),
//!     &ScatterConfig::default(),
//! )?;
//!
//! // Rasterize output.cells onto the plot grid
//! ```

use rayon::prelude::*;

use super::classify::classify;
use super::gradient::{jacobian_volume, solve_gradients};
use super::load::load_cell;
use super::project::project_cell;
use super::types::{ScalarField, TetMesh};
use crate::types::{CellScatter, ScatterConfig, ScatterError, ScatterOutput};

/// Compute the continuous scatterplot of two fields over a mesh.
///
/// This is a synchronous function that uses rayon internally for
/// parallelism. Cells are processed independently and the output keeps
/// them in cell order, so repeated runs over the same input agree.
///
/// # Arguments
///
/// * `mesh` - Tetrahedral mesh shared by both fields
/// * `first` - First scalar field, one value per vertex
/// * `second` - Second scalar field, one value per vertex
/// * `config` - Dummy marker, plot resolution and scalar range
///
/// # Returns
///
/// One record per surviving cell plus the derived grid sampling, or a
/// validation error reported before any cell is touched.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::compute_scatter"))]
pub fn compute_scatter<M, S1, S2>(
  mesh: &M,
  first: &S1,
  second: &S2,
  config: &ScatterConfig,
) -> Result<ScatterOutput, ScatterError>
where
  M: TetMesh + ?Sized,
  S1: ScalarField + ?Sized,
  S2: ScalarField + ?Sized,
{
  if first.len() < mesh.vertex_count() {
    return Err(ScatterError::FirstFieldIncomplete {
      have: first.len(),
      need: mesh.vertex_count(),
    });
  }
  if second.len() < mesh.vertex_count() {
    return Err(ScatterError::SecondFieldIncomplete {
      have: second.len(),
      need: mesh.vertex_count(),
    });
  }

  let cell_count = mesh.cell_count();
  if cell_count == 0 {
    return Err(ScatterError::NoCells);
  }

  let corners = mesh.cell_vertex_count(0);
  if corners != 4 {
    return Err(ScatterError::NotTetrahedral {
      cell_vertices: corners,
    });
  }

  let dummy_value = config.dummy_value;
  let cells: Vec<CellScatter> = (0..cell_count)
    .into_par_iter()
    .filter_map(|cell| {
      let sample = load_cell(mesh, first, second, dummy_value, cell)?;
      let volume = jacobian_volume(&solve_gradients(&sample));
      let image = classify(&sample.data);
      Some(project_cell(&sample, volume, image))
    })
    .collect();

  Ok(ScatterOutput {
    cells,
    sampling: config.sampling(),
  })
}

/// Compute the scatterplot with timing information.
///
/// Same as `compute_scatter` but returns processing stats.
pub fn compute_scatter_timed<M, S1, S2>(
  mesh: &M,
  first: &S1,
  second: &S2,
  config: &ScatterConfig,
) -> Result<(ScatterOutput, ScatterStats), ScatterError>
where
  M: TetMesh + ?Sized,
  S1: ScalarField + ?Sized,
  S2: ScalarField + ?Sized,
{
  use web_time::Instant;

  let start = Instant::now();
  let output = compute_scatter(mesh, first, second, config)?;
  let total_us = start.elapsed().as_micros() as u64;

  let stats = ScatterStats {
    cell_count: mesh.cell_count(),
    emitted: output.cells.len(),
    total_us,
  };

  Ok((output, stats))
}

/// Statistics from a scatterplot run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterStats {
  /// Cells visited, including skipped ones.
  pub cell_count: usize,
  /// Cell records emitted after dummy exclusion.
  pub emitted: usize,
  /// Total processing time in microseconds.
  pub total_us: u64,
}
