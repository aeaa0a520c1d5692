//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use mongo_fixtures::prelude::*;
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Fixture contract
pub use crate::fixture::{ContextAware, MongoFixture};

// Registration
pub use crate::manifest::{FixtureRegistration, registered_fixtures};
pub use crate::register_fixture;

// Discovery and execution
pub use crate::executor::FixtureExecutor;
pub use crate::ordering::execution_sequence;
pub use crate::paths::resolve_search_paths;
pub use crate::registry::FixtureRegistry;
pub use crate::scanner::{DiscoveredFixture, FixtureScanner};

// Shared execution context
pub use crate::context::{FixtureContext, FixtureContextBuilder};

// Settings
pub use crate::config::Settings;

// Commands
pub use crate::commands::{LoadFixturesArgs, LoadFixturesCommand};

// The async-trait attribute fixture implementations need
pub use async_trait::async_trait;
