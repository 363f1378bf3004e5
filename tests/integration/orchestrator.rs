//! Orchestrator behavior against stub fetchers

use async_trait::async_trait;
use gnss_orbit_downloader::downloader::{DownloadError, DownloadOrchestrator, OrbitRequest};
use gnss_orbit_downloader::fetcher::{FetchStatus, FetcherResult, ProductFetcher};
use gnss_orbit_downloader::registry::RemoteProduct;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stub fetcher that counts invocations and reports a configurable status
struct StubFetcher {
    calls: Arc<AtomicUsize>,
    /// When set, every fetch succeeds with this exact path
    fixed_path: Option<PathBuf>,
    /// When true, every fetch reports the file as missing
    missing: bool,
}

impl StubFetcher {
    fn succeeding(calls: Arc<AtomicUsize>) -> Self {
        Self {
            calls,
            fixed_path: None,
            missing: false,
        }
    }

    fn with_fixed_path(calls: Arc<AtomicUsize>, path: impl Into<PathBuf>) -> Self {
        Self {
            calls,
            fixed_path: Some(path.into()),
            missing: false,
        }
    }

    fn always_missing(calls: Arc<AtomicUsize>) -> Self {
        Self {
            calls,
            fixed_path: None,
            missing: true,
        }
    }
}

#[async_trait]
impl ProductFetcher for StubFetcher {
    async fn fetch(&self, product: &RemoteProduct, dest_dir: &Path) -> FetcherResult<FetchStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.missing {
            return Ok(FetchStatus::Missing);
        }
        let local_path = self
            .fixed_path
            .clone()
            .unwrap_or_else(|| dest_dir.join(&product.filename));
        Ok(FetchStatus::Retrieved { local_path })
    }
}

/// gps + day-of-year 15 derives a January 2021 date, selects the broadcast
/// strategy, and reports the stub's path
#[tokio::test]
async fn test_gps_day_of_year_scenario() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator = DownloadOrchestrator::new(
        "/orbits",
        StubFetcher::with_fixed_path(calls.clone(), "/orbits/2021/015/brdc0150.21n"),
    );

    let request = OrbitRequest::new("gps", 2021, 15, 0);
    let outcome = orchestrator.run(&request).await.unwrap();

    assert!(outcome.found);
    assert_eq!(
        outcome.local_path,
        Some(PathBuf::from("/orbits/2021/015/brdc0150.21n"))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // The derived date is in January 2021: the filename carries doy 015
    // and the two-digit year 21.
    assert_eq!(outcome.filename, "brdc0150.21n.gz");
}

/// Two identical runs produce identical local paths
#[tokio::test]
async fn test_idempotent_runs() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator =
        DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    let request = OrbitRequest::new("igs", 2021, 1, 15);
    let first = orchestrator.run(&request).await.unwrap();
    let second = orchestrator.run(&request).await.unwrap();

    assert_eq!(first.local_path, second.local_path);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// Non-four-digit years never reach the fetcher
#[tokio::test]
async fn test_short_year_rejected_without_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator =
        DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    for year in [0, 99, 999, 10000] {
        let request = OrbitRequest::new("igs", year, 1, 15);
        let result = orchestrator.run(&request).await;
        assert!(matches!(result, Err(DownloadError::Date(_))), "year {year}");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// Unknown orbit types never reach the fetcher
#[tokio::test]
async fn test_unknown_type_rejected_without_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator =
        DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    let request = OrbitRequest::new("martian", 2021, 1, 15);
    let result = orchestrator.run(&request).await;

    assert!(matches!(result, Err(DownloadError::Provider(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// A missing product is an outcome, not an error, and names the attempted
/// remote location
#[tokio::test]
async fn test_missing_product_is_reported_not_raised() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator =
        DownloadOrchestrator::new("/orbits", StubFetcher::always_missing(calls.clone()));

    let request = OrbitRequest::new("rapid", 2021, 15, 0);
    let outcome = orchestrator.run(&request).await.unwrap();

    assert!(!outcome.found);
    assert_eq!(outcome.local_path, None);
    assert!(outcome.remote_description.contains("GFZ0OPSRAP"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Persisted products land under {root}/{year}/{category}
#[tokio::test]
async fn test_persisted_destination_follows_layout() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator = DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    let outcome = orchestrator
        .run(&OrbitRequest::new("igr", 2021, 1, 15))
        .await
        .unwrap();
    assert_eq!(
        outcome.local_path,
        Some(PathBuf::from("/orbits/2021/sp3/igr21405.sp3.Z"))
    );

    let outcome = orchestrator
        .run(&OrbitRequest::new("nav", 2021, 1, 15))
        .await
        .unwrap();
    assert_eq!(
        outcome.local_path,
        Some(PathBuf::from("/orbits/2021/nav/brdc0150.21n.gz"))
    );
}

/// The experimental RINEX-3 broadcast product stays out of the canonical tree
#[tokio::test]
async fn test_experimental_product_not_persisted_to_tree() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator = DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    let outcome = orchestrator
        .run(&OrbitRequest::new("brdc", 2021, 15, 0))
        .await
        .unwrap();

    let path = outcome.local_path.unwrap();
    assert!(!path.starts_with("/orbits"));
    assert_eq!(
        path,
        PathBuf::from(".").join("BRDC00IGS_R_20210150000_01D_MN.rnx.gz")
    );
}

/// The ultra-rapid hour flows through to the resolved filename
#[tokio::test]
async fn test_ultra_rapid_hour_parameter() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator = DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    let outcome = orchestrator
        .run(&OrbitRequest::new("ultra", 2021, 15, 0).with_hour(18))
        .await
        .unwrap();
    assert!(outcome.filename.contains("20210151800"));

    // Unspecified hour defaults to the first hour of the day.
    let outcome = orchestrator
        .run(&OrbitRequest::new("ultra", 2021, 15, 0))
        .await
        .unwrap();
    assert!(outcome.filename.contains("20210150000"));
}

/// Alias and literal resolve to the same remote product
#[tokio::test]
async fn test_alias_and_literal_fetch_same_product() {
    let calls = Arc::new(AtomicUsize::new(0));
    let orchestrator = DownloadOrchestrator::new("/orbits", StubFetcher::succeeding(calls.clone()));

    let via_alias = orchestrator
        .run(&OrbitRequest::new("gps", 2021, 15, 0))
        .await
        .unwrap();
    let via_literal = orchestrator
        .run(&OrbitRequest::new("nav", 2021, 15, 0))
        .await
        .unwrap();

    assert_eq!(via_alias.remote_description, via_literal.remote_description);
    assert_eq!(via_alias.local_path, via_literal.local_path);
}
