//! # GNSS Orbit Downloader Library
//!
//! Resolves a logical orbit-product request ("give me orbit type X for date Y")
//! into a concrete remote file on one of several public GNSS archives, fetches
//! it, and reports the outcome.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gnss_orbit_downloader::downloader::{DownloadOrchestrator, OrbitRequest};
//! use gnss_orbit_downloader::fetcher::HttpFetcher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = DownloadOrchestrator::new("./orbits", HttpFetcher::new());
//!
//! // gps, year 2021, day-of-year 15 (day == 0 selects day-of-year input)
//! let request = OrbitRequest::new("gps", 2021, 15, 0);
//! let outcome = orchestrator.run(&request).await?;
//!
//! if outcome.found {
//!     println!("SUCCESS: {}", outcome.local_path.unwrap().display());
//! } else {
//!     println!("{} not found", outcome.remote_description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`date`] - Calendar / day-of-year normalization and GPS week arithmetic
//! - [`provider`] - Orbit-type tokens, aliases, and the provider key set
//! - [`registry`] - Per-provider retrieval strategies (path and filename rules)
//! - [`fetcher`] - HTTP transfer of a resolved remote product
//! - [`downloader`] - Orchestration tying the above together
//! - [`storage`] - Canonical local directory tree for persisted products
//! - [`config`] - Analysis configuration file generator
//! - [`cli`] - Command line surface
//!
//! ## Providers
//!
//! Supported orbit types cover broadcast navigation files, IGS final and
//! rapid products, multi-GNSS products from several analysis centers, GFZ
//! rapid and ultra-rapid products, and an IGN mirror used when the primary
//! archive lacks a product. Generic tokens (`gps`, `gnss`, `gps+glo`,
//! `rapid`) are aliases for specific providers.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Command line surface
pub mod cli;

/// Analysis configuration file generator
pub mod config;

/// Date normalization and GPS week arithmetic
pub mod date;

/// Download orchestration
pub mod downloader;

/// Remote product fetching
pub mod fetcher;

/// Orbit-type resolution and provider keys
pub mod provider;

/// Per-provider retrieval strategies
pub mod registry;

/// Local storage tree for persisted products
pub mod storage;

// Re-export the types most callers need.
pub use date::CanonicalDate;
pub use downloader::{DownloadOrchestrator, OrbitRequest, RetrievalOutcome};
pub use provider::ProviderKey;
