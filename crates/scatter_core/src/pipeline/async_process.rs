//! Async Scatterplot Pipeline
//!
//! Moves the CPU-intensive `compute_scatter()` call off the caller's
//! thread, for hosts that poll once per frame.
//!
//! # Flow
//!
//! ```text
//! Caller Thread                    Async (rayon)
//! ┌────────────────┐
//! │ Capture inputs │
//! │ (mesh, fields) │
//! └───────┬────────┘
//!         │ start()
//!         ▼
//!                                  ┌────────────────┐
//!                                  │ compute_       │
//!                                  │ scatter_timed()│
//!                                  │ load → solve → │
//!                                  │ classify →     │
//!                                  │ project        │
//!                                  └───────┬────────┘
//!                                          │
//! ┌────────────────┐                       │
//! │ poll_results() │◄──────────────────────┘
//! │ - Draw plot    │
//! │ - Read stats   │
//! └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut pipeline = AsyncScatterPlot::new();
//!
//! // Start (non-blocking) - the run executes on rayon's pool
//! pipeline.start(ScatterRequest {
//!     mesh: lattice,
//!     first,
//!     second,
//!     config: ScatterConfig::default(),
//! });
//!
//! // Poll each frame
//! if let Some(result) = pipeline.poll_results() {
//!     let (output, stats) = result?;
//!     draw(&output);
//! }
//! ```

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

use super::process::{compute_scatter_timed, ScatterStats};
use super::types::{ScalarField, TetMesh};
use crate::types::{ScatterConfig, ScatterError, ScatterOutput};

/// Request to start an async scatterplot run.
///
/// Owns a snapshot of its inputs so the caller is free to mutate its
/// own copies while the run is in flight.
pub struct ScatterRequest<M: TetMesh, S: ScalarField> {
	/// Mesh shared by both fields.
	pub mesh: M,
	/// First scalar field, one value per vertex.
	pub first: S,
	/// Second scalar field, one value per vertex.
	pub second: S,
	/// Run configuration (dummy marker, resolution, scalar range).
	pub config: ScatterConfig,
}

/// Outcome carried back from the worker.
pub type ScatterRunResult = Result<(ScatterOutput, ScatterStats), ScatterError>;

/// Non-blocking scatterplot computation.
///
/// Runs the full pipeline on rayon's thread pool.
pub struct AsyncScatterPlot {
	/// Receiver for pending result.
	receiver: Option<Receiver<ScatterRunResult>>,
}

impl AsyncScatterPlot {
	/// Create an idle pipeline.
	pub fn new() -> Self {
		Self { receiver: None }
	}

	/// Check if a run is in flight.
	pub fn is_busy(&self) -> bool {
		self.receiver.is_some()
	}

	/// Start an async run.
	///
	/// Returns `true` if started, `false` if already busy.
	pub fn start<M, S>(&mut self, request: ScatterRequest<M, S>) -> bool
	where
		M: TetMesh + 'static,
		S: ScalarField + 'static,
	{
		if self.is_busy() {
			return false;
		}

		let (sender, receiver) = channel::bounded(1);
		self.receiver = Some(receiver);

		// Spawn on rayon thread pool
		rayon::spawn(move || {
			let ScatterRequest {
				mesh,
				first,
				second,
				config,
			} = request;
			let result = compute_scatter_timed(&mesh, &first, &second, &config);
			// Ignore send error (receiver dropped = cancelled)
			let _ = sender.send(result);
		});

		true
	}

	/// Poll for results (non-blocking).
	///
	/// Returns `Some(result)` when complete, `None` if still running.
	pub fn poll_results(&mut self) -> Option<ScatterRunResult> {
		let receiver = self.receiver.as_ref()?;

		match receiver.try_recv() {
			Ok(result) => {
				self.receiver = None;
				Some(result)
			}
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => {
				self.receiver = None;
				None
			}
		}
	}

	/// Cancel the pending run.
	pub fn cancel(&mut self) {
		self.receiver = None;
	}
}

impl Default for AsyncScatterPlot {
	fn default() -> Self {
		Self::new()
	}
}
