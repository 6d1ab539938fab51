//! Error types for the CLI.

use pix_core::{CoreError, PixConfigError};

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shown to the operator verbatim; encoding was not attempted.
    #[error(transparent)]
    Payment(#[from] PixConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
