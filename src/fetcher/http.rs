//! HTTP implementation of [`ProductFetcher`]
//!
//! Retries transient failures (network errors, 5xx) with capped exponential
//! backoff. A 404 is returned as [`FetchStatus::Missing`] without retrying:
//! "product not yet published" is routine in this domain and retrying the
//! same URL will not change the answer.

use super::{FetchStatus, FetcherError, FetcherResult, ProductFetcher};
use crate::registry::RemoteProduct;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum number of retries for transient failures.
/// 3 retries recovers from brief archive hiccups without stalling a CLI run
/// on a persistently unreachable host.
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Maximum backoff delay in milliseconds.
const MAX_BACKOFF_MS: u64 = 8000;

/// Calculate exponential backoff delay
fn calculate_backoff(retry_count: u32) -> Duration {
    let delay_ms = INITIAL_BACKOFF_MS * 2u64.pow(retry_count);
    Duration::from_millis(delay_ms.min(MAX_BACKOFF_MS))
}

/// HTTP fetcher backed by a shared [`reqwest::Client`]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with a default client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Execute the GET with retry on transient failures
    async fn get_with_retry(&self, url: &str) -> FetcherResult<Option<Vec<u8>>> {
        let mut last_error = None;

        for attempt in 0..=MAX_RETRIES {
            let response = match self.client.get(url).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    warn!(
                        "network error on attempt {}/{}: {}",
                        attempt + 1,
                        MAX_RETRIES + 1,
                        e
                    );
                    last_error = Some(FetcherError::NetworkError(e.to_string()));
                    if attempt < MAX_RETRIES {
                        tokio::time::sleep(calculate_backoff(attempt)).await;
                        continue;
                    }
                    break;
                }
            };

            let status = response.status();

            if status == StatusCode::NOT_FOUND {
                debug!("archive reports {} missing", url);
                return Ok(None);
            }

            if status.is_server_error() {
                warn!(
                    "server error {} on attempt {}/{}",
                    status,
                    attempt + 1,
                    MAX_RETRIES + 1
                );
                last_error = Some(FetcherError::HttpError(format!("server error: {status}")));
                if attempt < MAX_RETRIES {
                    tokio::time::sleep(calculate_backoff(attempt)).await;
                    continue;
                }
                break;
            }

            if !status.is_success() {
                return Err(FetcherError::HttpError(format!(
                    "unexpected status {status} for {url}"
                )));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetcherError::NetworkError(e.to_string()))?;
            debug!("retrieved {} bytes from {}", body.len(), url);
            return Ok(Some(body.to_vec()));
        }

        Err(last_error
            .unwrap_or_else(|| FetcherError::NetworkError("all retries exhausted".to_string())))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductFetcher for HttpFetcher {
    async fn fetch(&self, product: &RemoteProduct, dest_dir: &Path) -> FetcherResult<FetchStatus> {
        let body = match self.get_with_retry(&product.url).await? {
            Some(body) => body,
            None => return Ok(FetchStatus::Missing),
        };

        // Must tolerate concurrent creation; independent requests may target
        // the same directory.
        std::fs::create_dir_all(dest_dir).map_err(|e| {
            FetcherError::IoError(format!(
                "failed to create directory {}: {e}",
                dest_dir.display()
            ))
        })?;

        let local_path = dest_dir.join(&product.filename);
        std::fs::write(&local_path, &body).map_err(|e| {
            FetcherError::IoError(format!("failed to write {}: {e}", local_path.display()))
        })?;

        Ok(FetchStatus::Retrieved { local_path })
    }
}
