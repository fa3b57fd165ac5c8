//! CLI-specific error types
//!
//! Every error here is fatal: it is printed once and the process exits
//! non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The store could not be opened or written
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The server failed to bind or serve
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
