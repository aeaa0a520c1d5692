//! Command-line entry point for the fixtures tool.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mongo_fixtures::commands::{LoadFixturesArgs, LoadFixturesCommand};
use mongo_fixtures::config::Settings;
use mongo_fixtures::context::FixtureContext;
use mongo_fixtures::scanner::FixtureScanner;

/// MongoDB fixtures management interface.
#[derive(Debug, Parser)]
#[command(name = "mongo-fixtures")]
#[command(about = "MongoDB data-fixture management", long_about = None)]
#[command(version)]
struct Cli {
	/// Subcommand to execute
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated for more output)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
	/// Load fixtures and apply them to the target database
	Load {
		/// Extra path to search for fixtures sources
		#[arg(value_name = "PATH")]
		fixtures_path: Option<PathBuf>,

		/// Settings file
		#[arg(long, value_name = "FILE")]
		config: Option<PathBuf>,

		/// MongoDB connection string, overriding the settings file
		#[arg(long, value_name = "URI")]
		database_url: Option<String>,

		/// Database name, overriding the settings file
		#[arg(long, value_name = "NAME")]
		database: Option<String>,
	},
}

fn init_tracing(verbosity: u8) {
	let default_level = match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	match cli.command {
		Commands::Load {
			fixtures_path,
			config,
			database_url,
			database,
		} => {
			let mut settings = Settings::load(config.as_deref())?;
			match (database_url, database) {
				(Some(uri), Some(name)) => settings.set_standalone(uri, name),
				(None, None) => {}
				_ => bail!("--database-url and --database must be provided together"),
			}

			let context = FixtureContext::connect(&settings).await?;
			let scanner = FixtureScanner::new().with_context(Arc::clone(&context));

			let mut stdout = io::stdout();
			LoadFixturesCommand::new()
				.execute(
					LoadFixturesArgs { fixtures_path },
					&scanner,
					&settings.module_roots,
					&mut stdout,
				)
				.await?;
		}
	}

	Ok(())
}
