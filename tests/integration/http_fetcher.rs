//! HTTP fetcher behavior against a mock archive

use gnss_orbit_downloader::fetcher::{FetchStatus, HttpFetcher, ProductFetcher};
use gnss_orbit_downloader::registry::RemoteProduct;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn product_on(server: &MockServer, filename: &str) -> RemoteProduct {
    RemoteProduct {
        url: format!("{}/products/2140/{}", server.uri(), filename),
        filename: filename.to_string(),
    }
}

#[tokio::test]
async fn test_retrieved_file_is_written_to_dest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/2140/igs21405.sp3.Z"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"sp3 payload".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("2021").join("sp3");
    let fetcher = HttpFetcher::new();

    let status = fetcher
        .fetch(&product_on(&server, "igs21405.sp3.Z"), &dest)
        .await
        .unwrap();

    match status {
        FetchStatus::Retrieved { local_path } => {
            assert_eq!(local_path, dest.join("igs21405.sp3.Z"));
            assert_eq!(std::fs::read(&local_path).unwrap(), b"sp3 payload");
        }
        FetchStatus::Missing => panic!("expected retrieval"),
    }
}

#[tokio::test]
async fn test_404_reports_missing_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let fetcher = HttpFetcher::new();

    let status = fetcher
        .fetch(&product_on(&server, "igr21405.sp3.Z"), temp.path())
        .await
        .unwrap();

    assert_eq!(status, FetchStatus::Missing);
    // Nothing gets written on a miss.
    assert!(!temp.path().join("igr21405.sp3.Z").exists());
}

#[tokio::test]
async fn test_client_error_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let fetcher = HttpFetcher::new();

    let result = fetcher
        .fetch(&product_on(&server, "igs21405.sp3.Z"), temp.path())
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_dest_directory_is_created_if_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"nav payload".to_vec()))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    // Deep path that does not exist yet.
    let dest = temp.path().join("2021").join("nav");
    assert!(!dest.exists());

    let fetcher = HttpFetcher::new();
    let status = fetcher
        .fetch(&product_on(&server, "brdc0150.21n.gz"), &dest)
        .await
        .unwrap();

    assert!(matches!(status, FetchStatus::Retrieved { .. }));
    assert!(dest.join("brdc0150.21n.gz").exists());
}
