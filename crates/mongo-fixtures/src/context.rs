//! Shared execution context handed to context-aware fixtures.
//!
//! The context is a read-mostly registry of named database handles, built
//! once from settings before any fixture runs and immutable afterwards.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

use bson::Document;
use mongodb::{Client, Collection, Database};

use crate::config::Settings;
use crate::error::{FixtureError, FixtureResult};

/// Registry of named MongoDB database handles.
///
/// Fixtures that declare the context-awareness capability receive an
/// [`Arc<FixtureContext>`] during discovery and use it to reach their
/// target connection and collection by name.
///
/// # Example
///
/// ```ignore
/// let context = FixtureContext::connect(&settings).await?;
/// let users = context.default_collection("users")?;
/// users.insert_one(bson::doc! { "name": "admin" }).await?;
/// ```
#[derive(Debug, Default)]
pub struct FixtureContext {
	databases: BTreeMap<String, Database>,
	default_connection: Option<String>,
}

impl FixtureContext {
	/// Creates a builder for assembling a context by hand.
	pub fn builder() -> FixtureContextBuilder {
		FixtureContextBuilder::default()
	}

	/// Builds a context from settings, one client per configured client
	/// entry and one database handle per configured connection.
	///
	/// The driver connects lazily, so this performs no I/O beyond parsing
	/// the connection strings.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::Config`] when a connection references an
	/// unknown client, and driver errors for invalid connection strings.
	pub async fn connect(settings: &Settings) -> FixtureResult<Arc<Self>> {
		let mut clients: HashMap<&str, Client> = HashMap::new();
		for (name, client_settings) in &settings.clients {
			let client = Client::with_uri_str(&client_settings.uri).await?;
			clients.insert(name.as_str(), client);
		}

		let mut builder = Self::builder();
		for (name, connection) in &settings.connections {
			let client = clients.get(connection.client.as_str()).ok_or_else(|| {
				FixtureError::Config(format!(
					"connection \"{}\" references unknown client \"{}\"",
					name, connection.client
				))
			})?;
			builder = builder.with_database(name, client.database(&connection.database));
		}
		if let Some(default) = &settings.default_connection {
			builder = builder.default_connection(default);
		}

		Ok(Arc::new(builder.build()))
	}

	/// Looks up a database handle by connection name.
	pub fn database(&self, name: &str) -> FixtureResult<&Database> {
		self.databases
			.get(name)
			.ok_or_else(|| FixtureError::UnknownConnection(name.to_string()))
	}

	/// The default database handle.
	///
	/// Resolves to the configured default connection, or to the only
	/// connection when exactly one is registered.
	pub fn default_database(&self) -> FixtureResult<&Database> {
		if let Some(name) = &self.default_connection {
			return self.database(name);
		}
		let mut handles = self.databases.values();
		match (handles.next(), handles.next()) {
			(Some(database), None) => Ok(database),
			_ => Err(FixtureError::UnknownConnection("default".to_string())),
		}
	}

	/// A collection handle on a named connection.
	pub fn collection(&self, connection: &str, name: &str) -> FixtureResult<Collection<Document>> {
		Ok(self.database(connection)?.collection::<Document>(name))
	}

	/// A collection handle on the default connection.
	pub fn default_collection(&self, name: &str) -> FixtureResult<Collection<Document>> {
		Ok(self.default_database()?.collection::<Document>(name))
	}

	/// Names of every registered connection, in lexical order.
	pub fn connection_names(&self) -> Vec<&str> {
		self.databases.keys().map(String::as_str).collect()
	}
}

/// Builder for [`FixtureContext`].
#[derive(Debug, Default)]
pub struct FixtureContextBuilder {
	databases: BTreeMap<String, Database>,
	default_connection: Option<String>,
}

impl FixtureContextBuilder {
	/// Registers a database handle under a connection name.
	pub fn with_database(mut self, name: impl Into<String>, database: Database) -> Self {
		self.databases.insert(name.into(), database);
		self
	}

	/// Names the default connection.
	pub fn default_connection(mut self, name: impl Into<String>) -> Self {
		self.default_connection = Some(name.into());
		self
	}

	/// Finalizes the context.
	pub fn build(self) -> FixtureContext {
		FixtureContext {
			databases: self.databases,
			default_connection: self.default_connection,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{ClientSettings, ConnectionSettings};

	fn settings_with(connections: &[(&str, &str, &str)]) -> Settings {
		let mut settings = Settings::default();
		settings.clients.insert(
			"main".to_string(),
			ClientSettings {
				uri: "mongodb://localhost:27017".to_string(),
			},
		);
		for (name, client, database) in connections {
			settings.connections.insert(
				(*name).to_string(),
				ConnectionSettings {
					client: (*client).to_string(),
					database: (*database).to_string(),
				},
			);
		}
		settings
	}

	#[test]
	fn empty_context_has_no_default() {
		let context = FixtureContext::builder().build();
		assert!(context.default_database().is_err());
	}

	#[tokio::test]
	async fn connect_registers_each_connection() {
		let settings = settings_with(&[("app", "main", "appdb"), ("logs", "main", "logsdb")]);
		let context = FixtureContext::connect(&settings).await.unwrap();

		assert_eq!(context.connection_names(), vec!["app", "logs"]);
		assert_eq!(context.database("app").unwrap().name(), "appdb");
		assert_eq!(context.database("logs").unwrap().name(), "logsdb");
	}

	#[tokio::test]
	async fn connect_rejects_unknown_client() {
		let mut settings = settings_with(&[]);
		settings.connections.insert(
			"app".to_string(),
			ConnectionSettings {
				client: "missing".to_string(),
				database: "appdb".to_string(),
			},
		);

		let result = FixtureContext::connect(&settings).await;
		assert!(matches!(result, Err(FixtureError::Config(_))));
	}

	#[tokio::test]
	async fn single_connection_is_the_default() {
		let settings = settings_with(&[("only", "main", "onlydb")]);
		let context = FixtureContext::connect(&settings).await.unwrap();

		assert_eq!(context.default_database().unwrap().name(), "onlydb");
	}

	#[tokio::test]
	async fn ambiguous_default_is_an_error() {
		let settings = settings_with(&[("a", "main", "adb"), ("b", "main", "bdb")]);
		let context = FixtureContext::connect(&settings).await.unwrap();

		assert!(matches!(
			context.default_database(),
			Err(FixtureError::UnknownConnection(_))
		));
	}

	#[tokio::test]
	async fn named_default_wins_over_ambiguity() {
		let mut settings = settings_with(&[("a", "main", "adb"), ("b", "main", "bdb")]);
		settings.default_connection = Some("b".to_string());
		let context = FixtureContext::connect(&settings).await.unwrap();

		assert_eq!(context.default_database().unwrap().name(), "bdb");
	}

	#[tokio::test]
	async fn unknown_connection_lookup_fails() {
		let settings = settings_with(&[("app", "main", "appdb")]);
		let context = FixtureContext::connect(&settings).await.unwrap();

		assert!(matches!(
			context.database("nope"),
			Err(FixtureError::UnknownConnection(name)) if name == "nope"
		));
	}
}
