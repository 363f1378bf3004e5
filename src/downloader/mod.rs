//! Download orchestration
//!
//! [`DownloadOrchestrator`] ties the pieces together: it validates the
//! request, normalizes the date, canonicalizes the orbit type, selects the
//! provider strategy, invokes the fetcher exactly once, and reports a
//! [`RetrievalOutcome`].
//!
//! Validation failures (bad year, bad date, unknown type) are rejected before
//! any I/O. A missing remote file is NOT an error: it comes back as an
//! outcome with `found == false` carrying the attempted remote location.
//! Fallback between products (e.g. rapid after final) is the caller's job,
//! issued as a new request; this layer never retries.

use crate::date::{validate_year, CanonicalDate, DateError};
use crate::fetcher::{FetchStatus, FetcherError, ProductFetcher};
use crate::provider::{ProviderError, ProviderKey};
use crate::registry::strategy_for;
use crate::storage::StorageLayout;
use std::path::PathBuf;
use tracing::{debug, info};

/// Hour used for ultra-rapid products when the caller does not specify one
pub const DEFAULT_ULTRA_HOUR: u32 = 0;

/// Errors that terminate an orchestration run
///
/// All of these are raised before any network activity; transport failures
/// are the only exception and are forwarded from the fetcher unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Date validation failure (bad year or impossible date)
    #[error(transparent)]
    Date(#[from] DateError),

    /// Orbit-type resolution failure
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Hour-of-day outside 0-23
    #[error("hour must be 0-23, got {0}")]
    InvalidHour(u32),

    /// Transport failure forwarded from the fetcher
    #[error(transparent)]
    Fetcher(#[from] FetcherError),
}

/// A single orbit-product request
///
/// Immutable caller input. When `day == 0`, `month_or_doy` is interpreted as
/// a day-of-year.
#[derive(Debug, Clone)]
pub struct OrbitRequest {
    /// User-supplied orbit-type token (alias or literal provider code)
    pub raw_type: String,
    /// Four-digit year
    pub year: i32,
    /// Month (1-12), or day-of-year when `day == 0`
    pub month_or_doy: u32,
    /// Day of month; 0 selects day-of-year interpretation
    pub day: u32,
    /// Hour-of-day for ultra-rapid products; ignored by other providers
    pub hour: Option<u32>,
}

impl OrbitRequest {
    /// Create a request; `day == 0` means `month_or_doy` carries a day-of-year
    pub fn new(raw_type: impl Into<String>, year: i32, month_or_doy: u32, day: u32) -> Self {
        Self {
            raw_type: raw_type.into(),
            year,
            month_or_doy,
            day,
            hour: None,
        }
    }

    /// Set the hour-of-day for ultra-rapid products
    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }
}

/// Terminal artifact of one orchestration run
///
/// Either fully successful with a local path, or a miss with a diagnostic
/// description of what was attempted. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalOutcome {
    /// Whether the product was retrieved
    pub found: bool,
    /// Local file location; present exactly when `found` is true
    pub local_path: Option<PathBuf>,
    /// The attempted remote location (full URL)
    pub remote_description: String,
    /// The attempted filename
    pub filename: String,
}

/// Orchestrates one resolve -> select -> fetch chain per request
///
/// Holds no mutable state; independent requests may run concurrently.
pub struct DownloadOrchestrator {
    layout: StorageLayout,
    fetcher: Box<dyn ProductFetcher>,
}

impl DownloadOrchestrator {
    /// Create an orchestrator storing products under `root`
    pub fn new(root: impl Into<PathBuf>, fetcher: impl ProductFetcher + 'static) -> Self {
        Self {
            layout: StorageLayout::new(root),
            fetcher: Box::new(fetcher),
        }
    }

    /// Create an orchestrator with an already-resolved layout
    pub fn with_layout(layout: StorageLayout, fetcher: impl ProductFetcher + 'static) -> Self {
        Self {
            layout,
            fetcher: Box::new(fetcher),
        }
    }

    /// Run one request to completion
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] for validation failures (no I/O attempted)
    /// and forwarded transport failures. A file missing from the archive is
    /// reported in the outcome, not as an error.
    pub async fn run(&self, request: &OrbitRequest) -> Result<RetrievalOutcome, DownloadError> {
        // Reject malformed years before anything else, including date math.
        validate_year(request.year)?;

        let date = if request.day == 0 {
            CanonicalDate::from_doy(request.year, request.month_or_doy)?
        } else {
            CanonicalDate::from_ymd(request.year, request.month_or_doy, request.day)?
        };

        let key = ProviderKey::resolve(&request.raw_type)?;

        let hour = request.hour.unwrap_or(DEFAULT_ULTRA_HOUR);
        if hour > 23 {
            return Err(DownloadError::InvalidHour(hour));
        }

        let strategy = strategy_for(key);
        let product = strategy.remote_product(&date, hour);

        // Experimental products stay out of the canonical tree.
        let dest_dir = if strategy.persist() {
            self.layout.product_dir(date.year(), strategy.category())
        } else {
            PathBuf::from(".")
        };

        debug!(
            provider = %key,
            doy = date.doy(),
            url = %product.url,
            "fetching orbit product"
        );

        let status = self.fetcher.fetch(&product, &dest_dir).await?;

        let outcome = match status {
            FetchStatus::Retrieved { local_path } => {
                info!(path = %local_path.display(), "orbit product retrieved");
                RetrievalOutcome {
                    found: true,
                    local_path: Some(local_path),
                    remote_description: product.url,
                    filename: product.filename,
                }
            }
            FetchStatus::Missing => {
                info!(url = %product.url, "orbit product not available");
                RetrievalOutcome {
                    found: false,
                    local_path: None,
                    remote_description: product.url,
                    filename: product.filename,
                }
            }
        };

        Ok(outcome)
    }
}
