//! CLI error types and conversions

use crate::config::ConfigError;
use crate::downloader::DownloadError;
use crate::provider::ProviderError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Download failure (validation or transport)
    #[error("download error: {0}")]
    DownloadError(#[from] DownloadError),

    /// Configuration generation failure
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Orbit-type resolution failure
    #[error("provider error: {0}")]
    ProviderError(#[from] ProviderError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
