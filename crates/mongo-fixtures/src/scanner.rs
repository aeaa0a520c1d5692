//! Discovery scanner: turns search locations into instantiated fixture
//! units by filtering the registration manifest by search-path membership.

use std::path::Path;
use std::sync::Arc;

use crate::context::FixtureContext;
use crate::error::{FixtureError, FixtureResult};
use crate::fixture::MongoFixture;
use crate::manifest::{FixtureRegistration, registered_fixtures};

/// Recognized extension of fixture source files.
pub const SOURCE_EXTENSION: &str = "rs";

/// A fixture unit produced by discovery, together with its provenance.
pub struct DiscoveredFixture {
	/// Fully-qualified type name of the unit.
	pub identity: &'static str,

	/// Source file the unit's registration was declared in.
	pub source: &'static str,

	/// The instantiated, decorated unit.
	pub fixture: Box<dyn MongoFixture>,
}

/// Scans search locations against the fixture manifest.
///
/// By default the scanner consults the process-wide manifest populated by
/// [`register_fixture!`](crate::register_fixture); an explicit manifest can
/// be supplied instead with [`FixtureScanner::with_manifest`].
///
/// When a shared execution context is attached, every discovered unit that
/// declares context awareness receives it right after instantiation.
pub struct FixtureScanner {
	manifest: Vec<FixtureRegistration>,
	context: Option<Arc<FixtureContext>>,
}

impl Default for FixtureScanner {
	fn default() -> Self {
		Self::new()
	}
}

impl FixtureScanner {
	/// Creates a scanner over the process-wide manifest.
	pub fn new() -> Self {
		Self::with_manifest(registered_fixtures().copied().collect())
	}

	/// Creates a scanner over an explicit list of registrations.
	pub fn with_manifest(manifest: Vec<FixtureRegistration>) -> Self {
		Self {
			manifest,
			context: None,
		}
	}

	/// Attaches the shared execution context injected into context-aware
	/// units.
	pub fn with_context(mut self, context: Arc<FixtureContext>) -> Self {
		self.context = Some(context);
		self
	}

	/// Scans one location, dispatching on its form.
	///
	/// Files are scanned as single candidates; everything else is treated
	/// as a directory, so a missing location surfaces as
	/// [`FixtureError::InvalidPath`].
	pub fn scan_path(&self, path: &Path) -> FixtureResult<Vec<DiscoveredFixture>> {
		if path.is_file() {
			self.scan_file(path)
		} else {
			self.scan_directory(path)
		}
	}

	/// Scans a directory recursively.
	///
	/// Every descendant leaf whose name carries the recognized source
	/// extension is considered; other files are skipped silently.
	/// Traversal is in sorted order, so discovery is deterministic.
	///
	/// # Errors
	///
	/// [`FixtureError::InvalidPath`] when the location is not an existing
	/// directory; the whole discovery run aborts.
	pub fn scan_directory(&self, dir: &Path) -> FixtureResult<Vec<DiscoveredFixture>> {
		if !dir.is_dir() {
			return Err(FixtureError::InvalidPath {
				path: dir.to_path_buf(),
			});
		}

		let mut discovered = Vec::new();
		for entry in walkdir::WalkDir::new(dir)
			.follow_links(true)
			.sort_by_file_name()
		{
			let entry = entry.map_err(std::io::Error::from)?;
			if !entry.file_type().is_file() {
				continue;
			}
			let path = entry.path();
			if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
				tracing::trace!(path = %path.display(), "skipping non-source file");
				continue;
			}
			discovered.extend(self.fixtures_from_source(path)?);
		}
		Ok(discovered)
	}

	/// Scans a single candidate file.
	///
	/// # Errors
	///
	/// [`FixtureError::UnreadablePath`] when the file is missing or not
	/// readable; the whole discovery run aborts.
	pub fn scan_file(&self, file: &Path) -> FixtureResult<Vec<DiscoveredFixture>> {
		if !file.is_file() || std::fs::File::open(file).is_err() {
			return Err(FixtureError::UnreadablePath {
				path: file.to_path_buf(),
			});
		}
		self.fixtures_from_source(file)
	}

	/// Instantiates every manifest registration declared in `candidate`.
	///
	/// Matches within one file are taken in identity order; manifest
	/// iteration order is link-dependent and must not leak into the
	/// execution sequence.
	fn fixtures_from_source(&self, candidate: &Path) -> FixtureResult<Vec<DiscoveredFixture>> {
		let canonical = candidate
			.canonicalize()
			.unwrap_or_else(|_| candidate.to_path_buf());

		let mut matches: Vec<&FixtureRegistration> = self
			.manifest
			.iter()
			.filter(|registration| {
				source_matches(&canonical, registration.source)
					|| source_matches(candidate, registration.source)
			})
			.collect();
		matches.sort_by_key(|registration| registration.identity);

		let mut discovered = Vec::with_capacity(matches.len());
		for registration in matches {
			discovered.push(self.instantiate(registration)?);
		}
		Ok(discovered)
	}

	/// Constructs, re-checks and decorates one registration.
	fn instantiate(&self, registration: &FixtureRegistration) -> FixtureResult<DiscoveredFixture> {
		let mut fixture = (registration.construct)();

		// The type system already guarantees the contract; the one property
		// it cannot see is a usable collection name.
		if fixture.collection().is_empty() {
			return Err(FixtureError::InstantiationMismatch {
				identity: registration.identity.to_string(),
			});
		}

		if let Some(context) = &self.context {
			if let Some(aware) = fixture.as_context_aware() {
				aware.set_context(Arc::clone(context));
			}
		}

		tracing::debug!(
			identity = registration.identity,
			source = registration.source,
			"discovered fixture"
		);

		Ok(DiscoveredFixture {
			identity: registration.identity,
			source: registration.source,
			fixture,
		})
	}
}

/// Whether a candidate file matches a registration's recorded source path.
///
/// Provenance recorded with `file!()` is crate-relative, so a candidate
/// matches when it ends with the recorded path (whole components only).
/// Exact equality covers absolute provenance paths.
fn source_matches(candidate: &Path, source: &str) -> bool {
	let source = Path::new(source);
	candidate == source || candidate.ends_with(source)
}
