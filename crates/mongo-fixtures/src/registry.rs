//! Insertion-ordered, identity-deduplicated accumulation of discovered
//! fixture units.

use std::collections::HashSet;

use crate::scanner::DiscoveredFixture;

/// Accumulates discovered units across all search paths.
///
/// Units are keyed by identity; a later discovery of an identity already
/// held is silently ignored, so the first-registered instance wins. The
/// registry lives for one load-and-run cycle and offers no removal.
#[derive(Default)]
pub struct FixtureRegistry {
	units: Vec<DiscoveredFixture>,
	identities: HashSet<&'static str>,
}

impl FixtureRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a unit unless its identity is already held.
	///
	/// Returns whether the unit was inserted.
	pub fn register(&mut self, unit: DiscoveredFixture) -> bool {
		if !self.identities.insert(unit.identity) {
			tracing::debug!(identity = unit.identity, "already registered, keeping first");
			return false;
		}
		self.units.push(unit);
		true
	}

	/// All registered units, in insertion order.
	pub fn all(&self) -> &[DiscoveredFixture] {
		&self.units
	}

	/// Consumes the registry, yielding the units in insertion order.
	pub fn into_units(self) -> Vec<DiscoveredFixture> {
		self.units
	}

	/// Number of registered units.
	pub fn len(&self) -> usize {
		self.units.len()
	}

	/// Whether nothing has been registered.
	pub fn is_empty(&self) -> bool {
		self.units.is_empty()
	}
}
