//! Process-wide fixture registration manifest.
//!
//! Fixture types self-register into a distributed registry at program
//! startup via [`register_fixture!`](crate::register_fixture). Each
//! registration records the type identity, the declaring source file and a
//! no-argument constructor, so discovery can filter the manifest by
//! search-path membership instead of loading code at runtime.

use crate::fixture::MongoFixture;

/// One entry in the fixture manifest.
///
/// Provenance (`source`) is captured at registration time with `file!()`,
/// which yields the crate-relative path of the declaring source file.
#[derive(Clone, Copy)]
pub struct FixtureRegistration {
	/// Fully-qualified type name of the fixture.
	pub identity: &'static str,

	/// Source file the registration was declared in.
	pub source: &'static str,

	/// No-argument constructor producing a fresh instance.
	pub construct: fn() -> Box<dyn MongoFixture>,
}

inventory::collect!(FixtureRegistration);

/// Returns every fixture registration submitted to the process-wide manifest.
pub fn registered_fixtures() -> impl Iterator<Item = &'static FixtureRegistration> {
	inventory::iter::<FixtureRegistration>.into_iter()
}

/// Registers a fixture type into the process-wide manifest.
///
/// The type must implement [`MongoFixture`](crate::fixture::MongoFixture)
/// and `Default` (the no-argument constructor the scanner instantiates it
/// with). The declaring file is recorded as the registration's provenance.
///
/// # Example
///
/// ```ignore
/// #[derive(Default)]
/// struct UserFixture;
///
/// // impl MongoFixture for UserFixture ...
///
/// mongo_fixtures::register_fixture!(UserFixture);
/// ```
#[macro_export]
macro_rules! register_fixture {
	($fixture:ty) => {
		$crate::inventory::submit! {
			$crate::manifest::FixtureRegistration {
				identity: ::std::any::type_name::<$fixture>(),
				source: ::std::file!(),
				construct: || ::std::boxed::Box::new(<$fixture as ::core::default::Default>::default()),
			}
		}
	};
}
