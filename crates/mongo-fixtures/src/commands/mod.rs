//! Management commands.

mod load_fixtures;

pub use load_fixtures::{LoadFixturesArgs, LoadFixturesCommand};
