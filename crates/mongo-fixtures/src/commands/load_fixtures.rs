//! The fixtures load command: resolve paths, discover, order, execute.

use std::io::Write;
use std::path::PathBuf;

use crate::error::FixtureResult;
use crate::executor::FixtureExecutor;
use crate::ordering::execution_sequence;
use crate::paths::resolve_search_paths;
use crate::registry::FixtureRegistry;
use crate::scanner::FixtureScanner;

/// Arguments for the load command.
#[derive(Debug, Clone, Default)]
pub struct LoadFixturesArgs {
	/// Extra path to search for fixture sources, ahead of the
	/// conventional locations.
	pub fixtures_path: Option<PathBuf>,
}

/// Loads fixtures and applies them to the target database.
///
/// # Example
///
/// ```ignore
/// let command = LoadFixturesCommand::new();
/// let scanner = FixtureScanner::new().with_context(context);
/// let loaded = command
///     .execute(LoadFixturesArgs::default(), &scanner, &settings.module_roots, &mut io::stdout())
///     .await?;
/// ```
#[derive(Debug, Default)]
pub struct LoadFixturesCommand;

impl LoadFixturesCommand {
	/// Creates a new load command.
	pub fn new() -> Self {
		Self
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		"load"
	}

	/// Returns the command description.
	pub fn description(&self) -> &str {
		"Load fixtures and apply them to the target database"
	}

	/// Runs the full pipeline: path resolution, discovery, registration,
	/// ordering and execution.
	///
	/// Search locations that are not present on disk are skipped here (the
	/// scanner still rejects bad locations handed to it directly); every
	/// resolved location counts as attempted for the zero-fixtures error.
	pub async fn execute<W: Write>(
		&self,
		args: LoadFixturesArgs,
		scanner: &FixtureScanner,
		module_roots: &[PathBuf],
		out: &mut W,
	) -> FixtureResult<usize> {
		writeln!(out, "Loading mongo fixtures")?;

		let searched = resolve_search_paths(args.fixtures_path.as_deref(), module_roots);

		let mut registry = FixtureRegistry::new();
		for path in &searched {
			if path.is_dir() {
				for unit in scanner.scan_directory(path)? {
					registry.register(unit);
				}
			} else if path.is_file() {
				for unit in scanner.scan_file(path)? {
					registry.register(unit);
				}
			} else {
				tracing::debug!(path = %path.display(), "search path not present, skipping");
			}
		}
		tracing::debug!(
			registered = registry.len(),
			searched = searched.len(),
			"discovery finished"
		);

		let sequence = execution_sequence(registry.into_units());
		FixtureExecutor::new().execute(sequence, &searched, out).await
	}
}
