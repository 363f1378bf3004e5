//! Download command implementation

use crate::downloader::{DownloadOrchestrator, OrbitRequest};
use crate::fetcher::HttpFetcher;
use crate::storage::StorageLayout;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use super::{CliError, ConfigCommand, ProvidersCommand};

/// GNSS orbit product downloader
#[derive(Parser, Debug)]
#[command(name = "download_orbits", version, about)]
pub struct Cli {
    /// Root of the local orbit storage tree; falls back to the ORBITS
    /// environment variable, then ./orbits
    #[arg(long, global = true)]
    pub orbit_root: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download one orbit product
    Download(DownloadArgs),
    /// List recognized orbit types
    Providers(ProvidersCommand),
    /// Generate a per-station analysis configuration file
    Config(ConfigCommand),
}

/// Arguments for the download command
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Orbit type (gps, gnss, gps+glo, rapid, or a specific code e.g. jax)
    pub orbit: String,

    /// Four-digit year
    pub year: i32,

    /// Month, or day-of-year when day is 0
    pub month: u32,

    /// Day of month; pass 0 to treat the previous argument as day-of-year
    pub day: u32,

    /// Hour of day for ultra-rapid products (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,
}

impl DownloadArgs {
    /// Execute the download command
    ///
    /// A product missing from the archive prints a diagnostic and still
    /// returns `Ok`; only validation and transport failures are errors.
    pub async fn execute(&self, layout: StorageLayout) -> Result<(), CliError> {
        debug!(root = %layout.root().display(), "using orbit storage root");

        let mut request = OrbitRequest::new(&self.orbit, self.year, self.month, self.day);
        if let Some(hour) = self.hour {
            request = request.with_hour(hour);
        }

        let orchestrator = DownloadOrchestrator::with_layout(layout, HttpFetcher::new());
        let outcome = orchestrator.run(&request).await?;

        match outcome.local_path {
            Some(path) => println!("SUCCESS: {}", path.display()),
            None => println!("{} not found", outcome.filename),
        }

        Ok(())
    }
}
