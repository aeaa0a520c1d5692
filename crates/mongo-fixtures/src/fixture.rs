//! The fixture unit contract and its optional capabilities.

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::FixtureContext;
use crate::error::FixtureResult;

/// A single data/index-provisioning unit targeting one collection.
///
/// Implementors provide a data-load operation, an index-provisioning
/// operation and the name of the collection they write to. The optional
/// capabilities (`order`, `dependencies`, context awareness) are declared by
/// overriding the corresponding default methods.
///
/// A fixture is instantiated once during discovery through its registered
/// no-argument constructor, decorated immediately afterwards (context
/// injection), executed exactly once and then discarded.
///
/// # Example
///
/// ```ignore
/// use mongo_fixtures::prelude::*;
///
/// #[derive(Default)]
/// struct UserFixture;
///
/// #[async_trait]
/// impl MongoFixture for UserFixture {
///     fn collection(&self) -> &str {
///         "users"
///     }
///
///     async fn load_data(&self) -> FixtureResult<()> {
///         // insert documents
///         Ok(())
///     }
///
///     async fn load_indexes(&self) -> FixtureResult<()> {
///         Ok(())
///     }
/// }
///
/// register_fixture!(UserFixture);
/// ```
#[async_trait]
pub trait MongoFixture: Send + Sync {
	/// Name of the collection this fixture provisions.
	fn collection(&self) -> &str;

	/// Loads the fixture's data into the target database.
	async fn load_data(&self) -> FixtureResult<()>;

	/// Provisions the fixture's indexes on the target collection.
	async fn load_indexes(&self) -> FixtureResult<()>;

	/// Execution-order value, present only when the fixture declares the
	/// ordering capability.
	///
	/// Fixtures returning `None` run before every ordered fixture, keeping
	/// their discovery order. Fixtures returning `Some` run afterwards,
	/// ascending by this value.
	fn order(&self) -> Option<i64> {
		None
	}

	/// Identities of fixtures this one declares a dependency on.
	///
	/// Carried as data only; the ordering policy does not consult it.
	fn dependencies(&self) -> Option<Vec<String>> {
		None
	}

	/// Capability query for shared-context awareness.
	///
	/// Fixtures that need the shared execution context return `Some(self)`
	/// here; the scanner then injects the context through
	/// [`ContextAware::set_context`] right after instantiation.
	fn as_context_aware(&mut self) -> Option<&mut dyn ContextAware> {
		None
	}
}

/// Optional capability for fixtures that need the shared execution context.
pub trait ContextAware {
	/// Receives the shared execution context.
	///
	/// Called exactly once per instance, before execution.
	fn set_context(&mut self, context: Arc<FixtureContext>);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Plain;

	#[async_trait]
	impl MongoFixture for Plain {
		fn collection(&self) -> &str {
			"plain"
		}

		async fn load_data(&self) -> FixtureResult<()> {
			Ok(())
		}

		async fn load_indexes(&self) -> FixtureResult<()> {
			Ok(())
		}
	}

	#[derive(Default)]
	struct Aware {
		context: Option<Arc<FixtureContext>>,
	}

	#[async_trait]
	impl MongoFixture for Aware {
		fn collection(&self) -> &str {
			"aware"
		}

		async fn load_data(&self) -> FixtureResult<()> {
			Ok(())
		}

		async fn load_indexes(&self) -> FixtureResult<()> {
			Ok(())
		}

		fn order(&self) -> Option<i64> {
			Some(7)
		}

		fn as_context_aware(&mut self) -> Option<&mut dyn ContextAware> {
			Some(self)
		}
	}

	impl ContextAware for Aware {
		fn set_context(&mut self, context: Arc<FixtureContext>) {
			self.context = Some(context);
		}
	}

	#[test]
	fn capabilities_default_to_absent() {
		let mut fixture = Plain;
		assert_eq!(fixture.order(), None);
		assert_eq!(fixture.dependencies(), None);
		assert!(fixture.as_context_aware().is_none());
	}

	#[test]
	fn declared_capabilities_are_visible() {
		let mut fixture = Aware::default();
		assert_eq!(fixture.order(), Some(7));
		assert!(fixture.as_context_aware().is_some());
	}

	#[test]
	fn context_injection_reaches_the_instance() {
		let mut fixture = Aware::default();
		let context = Arc::new(FixtureContext::builder().build());
		if let Some(aware) = fixture.as_context_aware() {
			aware.set_context(Arc::clone(&context));
		}
		assert!(fixture.context.is_some());
	}
}
