//! CLI error types

use quadra_core::types::IntegrationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Integration failed: {0}")]
    Integration(#[from] IntegrationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
