//! Command-line continuous scatterplot driver.
//!
//! Samples two analytic fields over a tetrahedral lattice, runs the
//! scatterplot pipeline, and reports per-case counts and the density range.
//! Optionally dumps the emitted records as JSON for downstream rasterizers.

mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use glam::DVec2;
use scatter_core::{
	compute_scatter_timed, CellScatter, Density, ScalarBounds, ScatterConfig, ScatterError,
	ScatterOutput, ScatterStats, TetLattice, TetMesh, VertexRef,
};
use serde::Serialize;

use config::Config;

/// Continuous scatterplot driver for tetrahedral lattice volumes.
#[derive(Parser, Debug)]
#[command(name = "scatter")]
#[command(about = "Projects two scalar fields into a continuous scatterplot")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Worker threads for the cell batch (default: all cores).
	#[arg(short, long)]
	threads: Option<usize>,

	/// Write emitted records as JSON to this path.
	#[arg(short, long)]
	json: Option<PathBuf>,
}

fn main() -> ExitCode {
	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => match error.downcast_ref::<ScatterError>() {
			Some(scatter) => {
				eprintln!("error: {scatter}");
				ExitCode::from(scatter.status_code().unsigned_abs() as u8)
			}
			None => {
				eprintln!("error: {error:#}");
				ExitCode::FAILURE
			}
		},
	}
}

fn run() -> Result<()> {
	let args = Args::parse();

	if let Some(threads) = args.threads {
		rayon::ThreadPoolBuilder::new()
			.num_threads(threads)
			.build_global()
			.context("Failed to configure the rayon thread pool")?;
	}

	println!("Loading config from: {}", args.config.display());
	let config = Config::load(&args.config)?;

	let [nx, ny, nz] = config.lattice;
	let lattice = TetLattice::new(nx, ny, nz);
	let first = lattice.sample_vertices(|p| config.first.evaluate(p));
	let second = lattice.sample_vertices(|p| config.second.evaluate(p));

	// The plot range comes from the sampled data, skipping dummy pairs.
	let (scalar_min, scalar_max) = field_range(&first, &second, config.dummy_value);
	let mut scatter_config = ScatterConfig::new()
		.with_resolution(config.resolution[0], config.resolution[1])
		.with_scalar_range(scalar_min, scalar_max);
	if let Some(value) = config.dummy_value {
		scatter_config = scatter_config.with_dummy_value(value);
	}

	println!(
		"Processing {} tetrahedra ({nx} x {ny} x {nz} lattice)",
		lattice.cell_count()
	);

	let (output, stats) = compute_scatter_timed(&lattice, &first, &second, &scatter_config)?;

	report(&output, &stats);

	if let Some(path) = &args.json {
		write_json(&output, path)?;
		println!("  ✓ {}", path.display());
	}

	Ok(())
}

/// Scalar range of the sampled pairs, with a degenerate-input fallback.
fn field_range(first: &[f64], second: &[f64], dummy_value: Option<f64>) -> (DVec2, DVec2) {
	let mut bounds = ScalarBounds::empty();
	for (&x, &y) in first.iter().zip(second) {
		if dummy_value == Some(x) || dummy_value == Some(y) {
			continue;
		}
		bounds.encapsulate(DVec2::new(x, y));
	}

	if !bounds.is_valid() {
		return (DVec2::ZERO, DVec2::ONE);
	}
	(bounds.min, bounds.max)
}

/// Print the per-case summary a run ends with.
fn report(output: &ScatterOutput, stats: &ScatterStats) {
	let mut apex_fans = 0usize;
	let mut quad_fans = 0usize;
	let mut limit_cells = 0usize;
	let mut unbounded = 0usize;
	let mut min_density = f64::INFINITY;
	let mut max_density = 0.0f64;

	for record in &output.cells {
		match record.synthetic {
			None => apex_fans += 1,
			Some(_) => quad_fans += 1,
		}
		if record.is_limit {
			limit_cells += 1;
		}
		match record.density {
			Density::Finite(value) => {
				min_density = min_density.min(value);
				max_density = max_density.max(value);
			}
			Density::Unbounded => unbounded += 1,
		}
	}

	println!(
		"Processed {} tetrahedra in {:.3} s ({} records, {} triangles)",
		stats.cell_count,
		stats.total_us as f64 / 1e6,
		stats.emitted,
		output.triangle_count()
	);
	println!("  apex fans: {apex_fans}");
	println!("  quad fans: {quad_fans}");
	println!("  limit cells: {limit_cells} ({unbounded} unbounded)");
	if min_density.is_finite() {
		println!("  density range: [{min_density:.6}, {max_density:.6}]");
	}
	println!(
		"  plot step: {:.6} x {:.6}",
		output.sampling.step.x, output.sampling.step.y
	);
}

/// One emitted record in the JSON dump.
///
/// Mesh corners carry their vertex id; the fabricated crossing point is
/// `null` and its scalar position is in `synthetic`. An unbounded density
/// is `null` with `is_limit` set.
#[derive(Serialize)]
struct JsonRecord {
	cell: usize,
	density: Option<f64>,
	is_limit: bool,
	synthetic: Option<[f64; 2]>,
	bounds: [[f64; 2]; 2],
	triangles: Vec<[Option<usize>; 3]>,
}

impl JsonRecord {
	fn from_record(record: &CellScatter) -> Self {
		Self {
			cell: record.cell,
			density: match record.density {
				Density::Finite(value) => Some(value),
				Density::Unbounded => None,
			},
			is_limit: record.is_limit,
			synthetic: record.synthetic.map(|point| point.to_array()),
			bounds: [record.bounds.min.to_array(), record.bounds.max.to_array()],
			triangles: record
				.triangles
				.iter()
				.map(|triangle| {
					triangle.map(|corner| match corner {
						VertexRef::Mesh(id) => Some(id),
						VertexRef::Synthetic => None,
					})
				})
				.collect(),
		}
	}
}

/// Whole-run JSON dump consumed by external rasterizers.
#[derive(Serialize)]
struct JsonDump {
	delta: [f64; 2],
	step: [f64; 2],
	records: Vec<JsonRecord>,
}

/// Write the emitted records to `path` as pretty-printed JSON.
fn write_json(output: &ScatterOutput, path: &Path) -> Result<()> {
	let dump = JsonDump {
		delta: output.sampling.delta.to_array(),
		step: output.sampling.step.to_array(),
		records: output.cells.iter().map(JsonRecord::from_record).collect(),
	};

	let json = serde_json::to_vec_pretty(&dump).context("Failed to serialize records")?;
	std::fs::write(path, json)
		.with_context(|| format!("Failed to write JSON output: {}", path.display()))?;

	Ok(())
}
