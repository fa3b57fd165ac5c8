//! CLI argument definitions using clap
//!
//! Commands:
//! - newswire start --config <path>
//! - newswire seed --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newswire - REST API backend for a community news site
#[derive(Parser, Debug)]
#[command(name = "newswire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the newswire server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./newswire.json")]
        config: PathBuf,
    },

    /// Create the schema and load the sample data set
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./newswire.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
