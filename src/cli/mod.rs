//! CLI command implementations

pub mod config;
pub mod download;
pub mod error;
pub mod providers;

pub use config::ConfigCommand;
pub use download::{Cli, Commands, DownloadArgs};
pub use error::CliError;
pub use providers::ProvidersCommand;
