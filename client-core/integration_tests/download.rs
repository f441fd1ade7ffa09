// Endpoint tests for version export and archive extraction.

use crate::helpers::{TEST_KEY, zip_fixture};

use client_core::ClientConfig;
use client_core::error::DownloadError;
use client_core::version::{Version, VersionInfo};

use common::ApiKey;

use std::fs;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn version_for(server: &MockServer) -> Version {
    let info: VersionInfo = serde_json::from_value(json!({
        "id": "acme/widgets",
        "created": 1616161616.0,
        "images": 240,
        "augmentation": {},
        "preprocessing": {},
        "splits": { "train": 200, "valid": 30, "test": 10 }
    }))
    .unwrap();

    Version::new(
        info,
        "object-detection",
        ApiKey::new(TEST_KEY),
        "widgets",
        "3",
        false,
        ClientConfig::new(server.uri()),
    )
}

/// **VALUE**: Verifies the full export flow: resolve link, fetch zip,
/// extract, clean up.
///
/// **WHY THIS MATTERS**: This is the only operation in the SDK with
/// filesystem side effects. The archive must land extracted in the
/// destination with no zip file left behind.
#[tokio::test]
async fn given_export_available_when_downloading_then_entries_extracted_and_archive_removed() {
    let server = MockServer::start().await;
    let signed_link = format!("{}/signed/export.zip", server.uri());

    Mock::given(method("GET"))
        .and(path("/acme/widgets/3/coco"))
        .and(query_param("api_key", TEST_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "export": { "link": signed_link } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let archive = zip_fixture(&[
        ("README.roboflow.txt", "widgets v3"),
        ("train/example.jpg", "not really a jpeg"),
        ("train/_annotations.coco.json", "{}"),
    ]);
    Mock::given(method("GET"))
        .and(path("/signed/export.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
        .expect(1)
        .mount(&server)
        .await;

    let dest = tempfile::tempdir().unwrap();
    version_for(&server)
        .download_to("coco", dest.path())
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(dest.path().join("README.roboflow.txt")).unwrap(),
        "widgets v3"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("train/example.jpg")).unwrap(),
        "not really a jpeg"
    );

    let leftover_zips: Vec<_> = fs::read_dir(dest.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "zip"))
        .collect();
    assert!(leftover_zips.is_empty());
}

#[tokio::test]
async fn given_signed_link_when_fetched_then_no_api_key_attached() {
    let server = MockServer::start().await;
    let signed_link = format!("{}/signed/export.zip", server.uri());

    Mock::given(method("GET"))
        .and(path("/acme/widgets/3/voc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "export": { "link": signed_link } })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/signed/export.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(zip_fixture(&[("a.txt", "a")])))
        .mount(&server)
        .await;

    let dest = tempfile::tempdir().unwrap();
    version_for(&server)
        .download_to("voc", dest.path())
        .await
        .unwrap();

    let archive_fetch = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|request| request.url.path() == "/signed/export.zip")
        .expect("archive fetch should have happened");
    assert!(archive_fetch.url.query().is_none());
}

/// Property: a rejected export performs no filesystem writes.
#[tokio::test]
async fn given_export_rejected_when_downloading_then_export_error_with_parsed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acme/widgets/3/coco"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "error": "Export not ready" })),
        )
        .mount(&server)
        .await;

    let dest = tempfile::tempdir().unwrap();
    let err = version_for(&server)
        .download_to("coco", dest.path())
        .await
        .unwrap_err();

    match err {
        DownloadError::Export { status, body, .. } => {
            assert_eq!(status.0, 422);
            assert_eq!(body["error"], json!("Export not ready"));
        }
        other => panic!("expected Export, got {other:?}"),
    }
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_export_body_without_link_when_downloading_then_missing_link_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/acme/widgets/3/coco"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "export": {} })))
        .mount(&server)
        .await;

    let dest = tempfile::tempdir().unwrap();
    let err = version_for(&server)
        .download_to("coco", dest.path())
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::MissingExportLink { .. }));
}

#[tokio::test]
async fn given_expired_signed_link_when_downloading_then_archive_error_and_no_writes() {
    let server = MockServer::start().await;
    let signed_link = format!("{}/signed/export.zip", server.uri());

    Mock::given(method("GET"))
        .and(path("/acme/widgets/3/coco"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "export": { "link": signed_link } })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/signed/export.zip"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Signed link expired"))
        .mount(&server)
        .await;

    let dest = tempfile::tempdir().unwrap();
    let err = version_for(&server)
        .download_to("coco", dest.path())
        .await
        .unwrap_err();

    match err {
        DownloadError::Archive { status, .. } => assert_eq!(status.0, 403),
        other => panic!("expected Archive, got {other:?}"),
    }
    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}
