//! Data-fixture provisioning for MongoDB.
//!
//! This crate discovers fixture units from filesystem locations, orders
//! them deterministically and applies each one's data and index operations
//! to a target database.
//!
//! # Quick Start
//!
//! Define a fixture and register it:
//!
//! ```ignore
//! use mongo_fixtures::prelude::*;
//!
//! #[derive(Default)]
//! struct UserFixture {
//!     context: Option<std::sync::Arc<FixtureContext>>,
//! }
//!
//! #[async_trait]
//! impl MongoFixture for UserFixture {
//!     fn collection(&self) -> &str {
//!         "users"
//!     }
//!
//!     async fn load_data(&self) -> FixtureResult<()> {
//!         let context = self.context.as_ref()
//!             .ok_or_else(|| FixtureError::Config("context not injected".into()))?;
//!         let users = context.default_collection(self.collection())?;
//!         users.insert_one(bson::doc! { "name": "admin" }).await?;
//!         Ok(())
//!     }
//!
//!     async fn load_indexes(&self) -> FixtureResult<()> {
//!         Ok(())
//!     }
//!
//!     fn as_context_aware(&mut self) -> Option<&mut dyn ContextAware> {
//!         Some(self)
//!     }
//! }
//!
//! impl ContextAware for UserFixture {
//!     fn set_context(&mut self, context: std::sync::Arc<FixtureContext>) {
//!         self.context = Some(context);
//!     }
//! }
//!
//! register_fixture!(UserFixture);
//! ```
//!
//! Then load everything found under the search paths:
//!
//! ```ignore
//! let settings = Settings::load(None)?;
//! let context = FixtureContext::connect(&settings).await?;
//! let scanner = FixtureScanner::new().with_context(context);
//! LoadFixturesCommand::new()
//!     .execute(LoadFixturesArgs::default(), &scanner, &settings.module_roots, &mut std::io::stdout())
//!     .await?;
//! ```
//!
//! # Architecture
//!
//! One sequential pipeline, no feedback loop:
//!
//! - [`paths`] resolves the ordered list of search locations
//!   (explicit path first, then `<module-root>/DataFixtures/Mongo`).
//! - [`scanner`] walks each location and filters the registration
//!   manifest ([`manifest`]) by search-path membership, instantiating and
//!   decorating every match.
//! - [`registry`] deduplicates discovered units by identity,
//!   first-registered wins, insertion order preserved.
//! - [`ordering`] produces the execution sequence: unordered units first
//!   in discovery order, then ordered units ascending by order value.
//! - [`executor`] runs each unit's data and index operations in order,
//!   reporting progress and failing fast.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod fixture;
pub mod manifest;
pub mod ordering;
pub mod paths;
pub mod prelude;
pub mod registry;
pub mod scanner;

// Re-export commonly used types at crate root
pub use config::Settings;
pub use context::FixtureContext;
pub use error::{FixtureError, FixtureResult};
pub use executor::FixtureExecutor;
pub use fixture::{ContextAware, MongoFixture};
pub use manifest::FixtureRegistration;
pub use registry::FixtureRegistry;
pub use scanner::{DiscoveredFixture, FixtureScanner};

// Re-exported for the registration macro
pub use inventory;
