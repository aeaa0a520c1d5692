//! Deterministic ordering of the execution sequence.

use crate::scanner::DiscoveredFixture;

/// Produces the execution sequence from the registry's units.
///
/// Units without the ordering capability come first, keeping their
/// discovery order. Units declaring it follow, sorted ascending by their
/// order value; equal values keep their discovery order. The result is a
/// permutation of the input.
///
/// This is a stable partition followed by a stable sort of the second
/// partition. A single pass through a comparator cannot express it
/// deterministically, so none is used.
pub fn execution_sequence(units: Vec<DiscoveredFixture>) -> Vec<DiscoveredFixture> {
	let mut sequence = Vec::with_capacity(units.len());
	let mut ordered = Vec::new();

	for unit in units {
		if unit.fixture.order().is_some() {
			ordered.push(unit);
		} else {
			sequence.push(unit);
		}
	}

	// sort_by_key is stable, so ties keep their discovery order. Every unit
	// in this partition declared an order value; the fallback never applies.
	ordered.sort_by_key(|unit| unit.fixture.order().unwrap_or(i64::MAX));

	sequence.extend(ordered);
	sequence
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FixtureResult;
	use crate::fixture::MongoFixture;
	use async_trait::async_trait;
	use rstest::rstest;

	struct Unit {
		order: Option<i64>,
	}

	#[async_trait]
	impl MongoFixture for Unit {
		fn collection(&self) -> &str {
			"units"
		}

		async fn load_data(&self) -> FixtureResult<()> {
			Ok(())
		}

		async fn load_indexes(&self) -> FixtureResult<()> {
			Ok(())
		}

		fn order(&self) -> Option<i64> {
			self.order
		}
	}

	fn unit(identity: &'static str, order: Option<i64>) -> DiscoveredFixture {
		DiscoveredFixture {
			identity,
			source: "tests/units.rs",
			fixture: Box::new(Unit { order }),
		}
	}

	fn identities(sequence: &[DiscoveredFixture]) -> Vec<&'static str> {
		sequence.iter().map(|u| u.identity).collect()
	}

	#[rstest]
	fn unordered_units_precede_ordered_ones() {
		let sequence = execution_sequence(vec![
			unit("ordered::Low", Some(1)),
			unit("plain::A", None),
			unit("ordered::High", Some(5)),
			unit("plain::B", None),
		]);

		assert_eq!(
			identities(&sequence),
			vec!["plain::A", "plain::B", "ordered::Low", "ordered::High"]
		);
	}

	#[rstest]
	fn ordered_units_sort_ascending() {
		let sequence = execution_sequence(vec![
			unit("ordered::Five", Some(5)),
			unit("ordered::One", Some(1)),
			unit("ordered::Three", Some(3)),
		]);

		assert_eq!(
			identities(&sequence),
			vec!["ordered::One", "ordered::Three", "ordered::Five"]
		);
	}

	#[rstest]
	fn equal_order_values_keep_discovery_order() {
		let sequence = execution_sequence(vec![
			unit("ordered::First", Some(2)),
			unit("ordered::Second", Some(2)),
			unit("ordered::Third", Some(2)),
		]);

		assert_eq!(
			identities(&sequence),
			vec!["ordered::First", "ordered::Second", "ordered::Third"]
		);
	}

	#[rstest]
	fn unordered_units_keep_discovery_order() {
		let sequence = execution_sequence(vec![
			unit("plain::C", None),
			unit("plain::A", None),
			unit("plain::B", None),
		]);

		assert_eq!(identities(&sequence), vec!["plain::C", "plain::A", "plain::B"]);
	}

	#[rstest]
	fn sequence_is_a_permutation_of_the_input() {
		let sequence = execution_sequence(vec![
			unit("a", Some(9)),
			unit("b", None),
			unit("c", Some(-4)),
			unit("d", None),
		]);

		let mut seen = identities(&sequence);
		seen.sort_unstable();
		assert_eq!(seen, vec!["a", "b", "c", "d"]);
	}

	#[rstest]
	fn empty_input_yields_empty_sequence() {
		assert!(execution_sequence(Vec::new()).is_empty());
	}
}
