//! Remote product fetching
//!
//! The orchestrator only needs one capability from the transport layer:
//! "try to fetch this resolved remote file into this local path, once, and
//! tell me whether it was there". [`ProductFetcher`] is that seam;
//! [`HttpFetcher`] is the production implementation.

use crate::registry::RemoteProduct;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod http;

pub use http::HttpFetcher;

/// Fetcher errors
///
/// A missing remote file is NOT an error; see [`FetchStatus::Missing`].
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Network-level failure (DNS, connect, timeout)
    #[error("network error: {0}")]
    NetworkError(String),

    /// Unexpected HTTP status from the archive
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Failure writing the retrieved file locally
    #[error("io error: {0}")]
    IoError(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;

/// Outcome of a single fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// File existed and was written to `local_path`
    Retrieved {
        /// Where the file landed on disk
        local_path: PathBuf,
    },
    /// The archive does not have the file; a routine operational state,
    /// not a failure
    Missing,
}

/// Transport seam consumed by the orchestrator
///
/// Implementations must be safe to call once per request; any transient
/// retry policy lives inside the implementation, never in the orchestrator.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    /// Fetch `product` into the directory `dest_dir`
    ///
    /// Returns [`FetchStatus::Missing`] when the archive responds that the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FetcherError`] only for transport or local I/O failures.
    async fn fetch(&self, product: &RemoteProduct, dest_dir: &Path) -> FetcherResult<FetchStatus>;
}
