//! Error types for fixture loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering, registering or executing fixtures.
///
/// Every variant is fatal to the current run; nothing is retried.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// A directory search location does not exist.
	#[error("\"{}\" does not exist", .path.display())]
	InvalidPath {
		/// The location that was handed to the scanner.
		path: PathBuf,
	},

	/// A file search location is missing or not readable.
	#[error("\"{}\" does not exist or is not readable", .path.display())]
	UnreadablePath {
		/// The location that was handed to the scanner.
		path: PathBuf,
	},

	/// Discovery completed without producing a single fixture unit.
	#[error("could not find any fixtures to load in:{}", format_search_paths(.searched))]
	NoFixturesFound {
		/// Every search location that was attempted.
		searched: Vec<PathBuf>,
	},

	/// A registered identity failed the conformance re-check at instantiation.
	#[error("registered fixture `{identity}` does not satisfy the fixture contract")]
	InstantiationMismatch {
		/// Identity of the offending registration.
		identity: String,
	},

	/// A fixture asked the shared context for a connection it does not hold.
	#[error("unknown connection: {0}")]
	UnknownConnection(String),

	/// Database operation failed.
	#[error("database error: {0}")]
	Database(#[from] mongodb::error::Error),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings file could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Settings are structurally invalid.
	#[error("configuration error: {0}")]
	Config(String),
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

fn format_search_paths(paths: &[PathBuf]) -> String {
	let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
	format!("\n\n- {}", listed.join("\n- "))
}
