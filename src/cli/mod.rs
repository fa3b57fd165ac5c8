//! CLI module for newswire
//!
//! Provides command-line interface for:
//! - start: Open the store and enter the serving loop
//! - seed: Create the schema and load the sample data set

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, seed, start};
pub use errors::{CliError, CliResult};
