//! Sequential execution of the ordered fixture sequence.

use std::io::Write;
use std::path::PathBuf;

use crate::error::{FixtureError, FixtureResult};
use crate::scanner::DiscoveredFixture;

/// Runs an execution sequence against the target database.
///
/// Execution is strictly sequential: each unit's data-load operation, then
/// its index-provisioning operation, are awaited to completion before the
/// next unit starts. The first failure propagates immediately; units
/// already executed are not rolled back.
#[derive(Debug, Default)]
pub struct FixtureExecutor;

impl FixtureExecutor {
	/// Creates a new executor.
	pub fn new() -> Self {
		Self
	}

	/// Executes every unit in order, emitting one progress line per unit
	/// and a final summary line on `out`.
	///
	/// # Errors
	///
	/// [`FixtureError::NoFixturesFound`] when the sequence is empty,
	/// raised before any unit executes and naming every attempted search
	/// location. Unit failures propagate unchanged.
	pub async fn execute<W: Write>(
		&self,
		sequence: Vec<DiscoveredFixture>,
		searched: &[PathBuf],
		out: &mut W,
	) -> FixtureResult<usize> {
		if sequence.is_empty() {
			return Err(FixtureError::NoFixturesFound {
				searched: searched.to_vec(),
			});
		}

		for unit in &sequence {
			unit.fixture.load_data().await?;
			unit.fixture.load_indexes().await?;
			writeln!(out, "Loaded fixture: {}", unit.identity)?;
			tracing::debug!(
				identity = unit.identity,
				collection = unit.fixture.collection(),
				"fixture applied"
			);
		}

		writeln!(out, "Done, loaded {} fixtures files", sequence.len())?;
		Ok(sequence.len())
	}
}
