//! Search-path resolution.

use std::path::{Path, PathBuf};

/// Conventional fixtures subdirectory under each module root.
pub const CONVENTION_SUBDIR: &str = "DataFixtures/Mongo";

/// The conventional fixtures location under one module root.
pub fn convention_path(root: &Path) -> PathBuf {
	root.join("DataFixtures").join("Mongo")
}

/// Builds the ordered list of candidate search locations.
///
/// The explicit path, when present and non-empty, comes first; the
/// conventional location of each module root follows, in registration
/// order. No filesystem access happens here; existence is checked by the
/// scanner's caller.
pub fn resolve_search_paths(explicit: Option<&Path>, module_roots: &[PathBuf]) -> Vec<PathBuf> {
	let mut paths = Vec::with_capacity(module_roots.len() + 1);
	if let Some(path) = explicit {
		if !path.as_os_str().is_empty() {
			paths.push(path.to_path_buf());
		}
	}
	for root in module_roots {
		paths.push(convention_path(root));
	}
	paths
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn explicit_path_comes_first() {
		let roots = vec![PathBuf::from("modules/a"), PathBuf::from("modules/b")];
		let paths = resolve_search_paths(Some(Path::new("extra/fixtures")), &roots);

		assert_eq!(
			paths,
			vec![
				PathBuf::from("extra/fixtures"),
				PathBuf::from("modules/a/DataFixtures/Mongo"),
				PathBuf::from("modules/b/DataFixtures/Mongo"),
			]
		);
	}

	#[rstest]
	fn empty_explicit_path_is_omitted() {
		let roots = vec![PathBuf::from("modules/a")];
		let paths = resolve_search_paths(Some(Path::new("")), &roots);

		assert_eq!(paths, vec![PathBuf::from("modules/a/DataFixtures/Mongo")]);
	}

	#[rstest]
	fn no_roots_and_no_explicit_yields_nothing() {
		assert!(resolve_search_paths(None, &[]).is_empty());
	}

	#[rstest]
	fn root_order_is_preserved() {
		let roots = vec![
			PathBuf::from("z"),
			PathBuf::from("a"),
			PathBuf::from("m"),
		];
		let paths = resolve_search_paths(None, &roots);
		let suffixes: Vec<_> = paths
			.iter()
			.map(|p| p.components().next().unwrap().as_os_str().to_str().unwrap().to_string())
			.collect();

		assert_eq!(suffixes, vec!["z", "a", "m"]);
	}
}
