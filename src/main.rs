//! Main entry point for the download_orbits CLI

use clap::Parser;
use gnss_orbit_downloader::cli::{Cli, Commands};
use gnss_orbit_downloader::storage::StorageLayout;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber with optional JSON formatting
fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gnss_orbit_downloader=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    // Resolve the storage root once, before any request executes.
    let layout = StorageLayout::from_env_or(cli.orbit_root.clone());

    let result = match cli.command {
        Commands::Download(ref args) => {
            args.execute(layout).await.map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Providers(ref cmd) => cmd.execute().map_err(|e| anyhow::anyhow!(e)),
        Commands::Config(ref cmd) => cmd.execute(layout).map_err(|e| anyhow::anyhow!(e)),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
