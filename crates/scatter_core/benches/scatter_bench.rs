//! Continuous scatterplot benchmarks.
//!
//! Measures the full per-cell pipeline and its stages in isolation:
//! - **full**: `compute_scatter` over growing lattices
//! - **scenarios**: field shapes with different image mixes
//! - **stages**: load / gradient / classify / project on a prepared batch
//!
//! Field scenarios:
//! - **linear**: affine fields (every cell non-degenerate, apex images)
//! - **radial**: curved fields (mix of apex and quad images)
//! - **aligned**: second field a multiple of the first (limit cells)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scatter_core::pipeline::classify::classify;
use scatter_core::pipeline::gradient::{jacobian_volume, solve_gradients};
use scatter_core::pipeline::load::load_cell;
use scatter_core::pipeline::project::project_cell;
use scatter_core::pipeline::{CellImage, CellSample};
use scatter_core::{compute_scatter, ScatterConfig, TetLattice, TetMesh};

// =============================================================================
// Field scenarios
// =============================================================================

fn linear_fields(lattice: &TetLattice) -> (Vec<f64>, Vec<f64>) {
  (
    lattice.sample_vertices(|p| (p.x + 2.0 * p.y + 3.0 * p.z) as f64),
    lattice.sample_vertices(|p| (p.x - p.y) as f64),
  )
}

fn radial_fields(lattice: &TetLattice) -> (Vec<f64>, Vec<f64>) {
  (
    lattice.sample_vertices(|p| p.length() as f64),
    lattice.sample_vertices(|p| ((p.x * 0.7).sin() + (p.y * 0.4).cos()) as f64),
  )
}

fn aligned_fields(lattice: &TetLattice) -> (Vec<f64>, Vec<f64>) {
  let first = lattice.sample_vertices(|p| (p.x + p.y) as f64);
  let second = first.iter().map(|value| value * 2.0).collect();
  (first, second)
}

fn loaded_samples(lattice: &TetLattice, first: &[f64], second: &[f64]) -> Vec<CellSample> {
  (0..lattice.cell_count())
    .filter_map(|cell| load_cell(lattice, first, second, None, cell))
    .collect()
}

// =============================================================================
// Full pipeline
// =============================================================================

/// Benchmark the whole pipeline over growing lattice sizes.
fn bench_full_pipeline(c: &mut Criterion) {
  let mut group = c.benchmark_group("scatter/full");

  for &size in &[8usize, 16, 32] {
    let lattice = TetLattice::new(size, size, size);
    let (first, second) = radial_fields(&lattice);
    let config = ScatterConfig::new();

    group.bench_with_input(BenchmarkId::new("radial", size), &size, |b, _| {
      b.iter(|| {
        compute_scatter(
          black_box(&lattice),
          black_box(&first),
          black_box(&second),
          black_box(&config),
        )
      })
    });
  }

  group.finish();
}

/// Benchmark field shapes that steer cells into different image kinds.
fn bench_field_scenarios(c: &mut Criterion) {
  let mut group = c.benchmark_group("scatter/scenarios");
  let lattice = TetLattice::new(16, 16, 16);
  let config = ScatterConfig::new();

  let (linear_a, linear_b) = linear_fields(&lattice);
  group.bench_function("linear", |b| {
    b.iter(|| {
      compute_scatter(
        black_box(&lattice),
        black_box(&linear_a),
        black_box(&linear_b),
        black_box(&config),
      )
    })
  });

  let (radial_a, radial_b) = radial_fields(&lattice);
  group.bench_function("radial", |b| {
    b.iter(|| {
      compute_scatter(
        black_box(&lattice),
        black_box(&radial_a),
        black_box(&radial_b),
        black_box(&config),
      )
    })
  });

  let (aligned_a, aligned_b) = aligned_fields(&lattice);
  group.bench_function("aligned_limit", |b| {
    b.iter(|| {
      compute_scatter(
        black_box(&lattice),
        black_box(&aligned_a),
        black_box(&aligned_b),
        black_box(&config),
      )
    })
  });

  group.finish();
}

// =============================================================================
// Isolated stages
// =============================================================================

/// Benchmark each pipeline stage on a prepared batch of cells.
fn bench_stages_isolated(c: &mut Criterion) {
  let mut group = c.benchmark_group("scatter/stages");
  let lattice = TetLattice::new(16, 16, 16);
  let (first, second) = radial_fields(&lattice);

  group.bench_function("load", |b| {
    b.iter(|| {
      let samples: Vec<_> = (0..lattice.cell_count())
        .filter_map(|cell| {
          load_cell(
            black_box(&lattice),
            black_box(first.as_slice()),
            black_box(second.as_slice()),
            None,
            cell,
          )
        })
        .collect();
      black_box(samples)
    })
  });

  let samples = loaded_samples(&lattice, &first, &second);

  group.bench_function("gradient", |b| {
    b.iter(|| {
      let volumes: Vec<f64> = samples
        .iter()
        .map(|sample| jacobian_volume(&solve_gradients(black_box(sample))))
        .collect();
      black_box(volumes)
    })
  });

  group.bench_function("classify", |b| {
    b.iter(|| {
      let images: Vec<_> = samples
        .iter()
        .map(|sample| classify(black_box(&sample.data)))
        .collect();
      black_box(images)
    })
  });

  // Gradient and image results are inputs of projection, so precompute them.
  let prepared: Vec<(f64, CellImage)> = samples
    .iter()
    .map(|sample| {
      (
        jacobian_volume(&solve_gradients(sample)),
        classify(&sample.data),
      )
    })
    .collect();

  group.bench_function("project", |b| {
    b.iter(|| {
      let records: Vec<_> = samples
        .iter()
        .zip(&prepared)
        .map(|(sample, &(volume, image))| project_cell(black_box(sample), volume, image))
        .collect();
      black_box(records)
    })
  });

  group.finish();
}

criterion_group!(
  scatter,
  bench_full_pipeline,
  bench_field_scenarios,
  bench_stages_isolated,
);

criterion_main!(scatter);
