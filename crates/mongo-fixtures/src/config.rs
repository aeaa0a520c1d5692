//! Layered settings: TOML file plus prefixed environment overrides.
//!
//! The settings file mirrors the client/connection split of the database
//! configuration: clients hold connection strings, connections pair a client
//! with a database name. Environment variables with the `MONGO_FIXTURES_`
//! prefix override the file.
//!
//! ```toml
//! default_connection = "app"
//! module_roots = ["modules/accounts", "modules/billing"]
//!
//! [clients.main]
//! uri = "mongodb://localhost:27017"
//!
//! [connections.app]
//! client = "main"
//! database = "appdb"
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::FixtureResult;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "MONGO_FIXTURES_";

/// Connection name used for standalone (single-database) overrides.
const STANDALONE: &str = "default";

/// A configured MongoDB client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
	/// MongoDB connection string.
	pub uri: String,
}

/// A named connection: a client paired with a database name.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionSettings {
	/// Name of the client this connection uses.
	pub client: String,

	/// Database name.
	pub database: String,
}

/// Tool settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
	/// Configured clients, keyed by name.
	#[serde(default)]
	pub clients: BTreeMap<String, ClientSettings>,

	/// Configured connections, keyed by name.
	#[serde(default)]
	pub connections: BTreeMap<String, ConnectionSettings>,

	/// Name of the connection used when fixtures ask for the default.
	#[serde(default)]
	pub default_connection: Option<String>,

	/// Module roots searched for the conventional fixtures subdirectory.
	#[serde(default)]
	pub module_roots: Vec<PathBuf>,
}

impl Settings {
	/// Parses settings from a TOML file.
	pub fn from_file(path: &Path) -> FixtureResult<Self> {
		let content = fs::read_to_string(path)?;
		Ok(toml::from_str(&content)?)
	}

	/// Loads settings from an optional file, then applies environment
	/// overrides.
	pub fn load(path: Option<&Path>) -> FixtureResult<Self> {
		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		Ok(settings.overlay_env())
	}

	/// Settings holding a single client and connection, both named
	/// `default`.
	pub fn standalone(uri: impl Into<String>, database: impl Into<String>) -> Self {
		let mut settings = Self::default();
		settings.set_standalone(uri, database);
		settings
	}

	/// Replaces the standalone client/connection pair with the given
	/// connection string and database name, and makes it the default.
	pub fn set_standalone(&mut self, uri: impl Into<String>, database: impl Into<String>) {
		self.clients
			.insert(STANDALONE.to_string(), ClientSettings { uri: uri.into() });
		self.connections.insert(
			STANDALONE.to_string(),
			ConnectionSettings {
				client: STANDALONE.to_string(),
				database: database.into(),
			},
		);
		self.default_connection = Some(STANDALONE.to_string());
	}

	/// Applies `MONGO_FIXTURES_*` environment overrides.
	///
	/// `MONGO_FIXTURES_URI` and `MONGO_FIXTURES_DATABASE` configure the
	/// standalone connection pair; `MONGO_FIXTURES_DEFAULT_CONNECTION`
	/// renames the default.
	pub fn overlay_env(mut self) -> Self {
		let uri = env::var(format!("{ENV_PREFIX}URI")).ok();
		let database = env::var(format!("{ENV_PREFIX}DATABASE")).ok();
		if let (Some(uri), Some(database)) = (uri, database) {
			self.set_standalone(uri, database);
		}
		if let Ok(name) = env::var(format!("{ENV_PREFIX}DEFAULT_CONNECTION")) {
			self.default_connection = Some(name);
		}
		self
	}
}
