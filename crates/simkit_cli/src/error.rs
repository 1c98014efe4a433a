//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `simkit` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected by the simulation core.
    #[error(transparent)]
    Sim(#[from] simkit_core::SimError),

    /// Monte Carlo configuration out of range.
    #[error(transparent)]
    Simulation(#[from] simkit_core::mc::ConfigError),

    /// Configuration file or environment problem.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Command-line argument that parses but makes no sense.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failure.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
