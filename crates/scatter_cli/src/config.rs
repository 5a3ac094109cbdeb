//! Configuration parsing for scatterplot runs.

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;

/// Root configuration for a scatterplot run.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Lattice dimensions in cubes per axis [nx, ny, nz].
	pub lattice: [usize; 3],
	/// First scalar field sampled at every lattice vertex.
	pub first: FieldConfig,
	/// Second scalar field sampled at every lattice vertex.
	pub second: FieldConfig,
	/// Plot grid resolution [columns, rows].
	#[serde(default = "default_resolution")]
	pub resolution: [u32; 2],
	/// Scalar pairs equal to this value mark missing data.
	#[serde(default)]
	pub dummy_value: Option<f64>,
}

/// Analytic per-vertex field.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
	/// Distance from a center point.
	Radial { center: [f32; 3] },
	/// Linear ramp `coeffs . position + offset`.
	Affine {
		coeffs: [f32; 3],
		#[serde(default)]
		offset: f32,
	},
	/// Sum of per-axis sines (periodic bands).
	Waves { frequency: f32 },
}

fn default_resolution() -> [u32; 2] {
	[256, 256]
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config: Config =
			toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;

		if config.lattice.contains(&0) {
			anyhow::bail!(
				"Lattice dimensions must be nonzero, got {:?}",
				config.lattice
			);
		}
		if config.resolution.contains(&0) {
			anyhow::bail!(
				"Plot resolution must be nonzero, got {:?}",
				config.resolution
			);
		}

		Ok(config)
	}
}

impl FieldConfig {
	/// Evaluate the field at a lattice vertex position.
	pub fn evaluate(&self, position: Vec3) -> f64 {
		match self {
			FieldConfig::Radial { center } => {
				(position - Vec3::from_array(*center)).length() as f64
			}
			FieldConfig::Affine { coeffs, offset } => {
				(position.dot(Vec3::from_array(*coeffs)) + offset) as f64
			}
			FieldConfig::Waves { frequency } => {
				((position.x * frequency).sin()
					+ (position.y * frequency).sin()
					+ (position.z * frequency).sin()) as f64
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_full_config() {
		let config: Config = toml::from_str(
			r#"
			lattice = [16, 16, 8]
			resolution = [512, 512]
			dummy_value = -999.0

			[first]
			kind = "radial"
			center = [8.0, 8.0, 4.0]

			[second]
			kind = "affine"
			coeffs = [1.0, 0.0, -1.0]
			offset = 0.5
			"#,
		)
		.unwrap();

		assert_eq!(config.lattice, [16, 16, 8]);
		assert_eq!(config.resolution, [512, 512]);
		assert_eq!(config.dummy_value, Some(-999.0));
		assert!(matches!(config.first, FieldConfig::Radial { .. }));
		assert!(matches!(config.second, FieldConfig::Affine { .. }));
	}

	#[test]
	fn test_defaults_and_evaluation() {
		let config: Config = toml::from_str(
			r#"
			lattice = [4, 4, 4]

			[first]
			kind = "affine"
			coeffs = [2.0, 0.0, 0.0]

			[second]
			kind = "waves"
			frequency = 0.25
			"#,
		)
		.unwrap();

		assert_eq!(config.resolution, [256, 256]);
		assert_eq!(config.dummy_value, None);
		assert_eq!(config.first.evaluate(Vec3::new(3.0, 7.0, 1.0)), 6.0);
	}
}
