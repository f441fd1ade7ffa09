// Endpoint tests for the key handshake.

use crate::helpers::{TEST_KEY, authed_client, mount_auth};

use client_core::error::AuthError;
use client_core::{ClientConfig, Roboflow};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies that a malformed key never reaches the wire.
///
/// **WHY THIS MATTERS**: Keys are secrets. A key that is obviously
/// invalid (empty, embedded whitespace) must be rejected locally, with
/// a request count of zero, instead of being sent to the server.
#[tokio::test]
async fn given_empty_key_when_constructing_then_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = Roboflow::with_config("", ClientConfig::new(server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidKey { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_key_with_whitespace_when_constructing_then_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = Roboflow::with_config("bad key", ClientConfig::new(server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidKey { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_accepted_key_when_constructing_then_current_workspace_stored() {
    let server = MockServer::start().await;

    let client = authed_client(&server, "acme").await;

    assert_eq!(client.current_workspace(), "acme");
}

#[tokio::test]
async fn given_non_200_status_when_constructing_then_rejected_with_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized key"))
        .mount(&server)
        .await;

    let err = Roboflow::with_config(TEST_KEY, ClientConfig::new(server.uri()))
        .await
        .unwrap_err();

    match err {
        AuthError::Rejected { status, body, .. } => {
            assert_eq!(status.0, 401);
            assert!(status.is_client_error());
            assert_eq!(body, "Unauthorized key");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn given_error_field_in_200_body_when_constructing_then_rejected_with_exact_body() {
    let server = MockServer::start().await;
    let body_text = r#"{"error":"Invalid API Key."}"#;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body_text))
        .mount(&server)
        .await;

    let err = Roboflow::with_config(TEST_KEY, ClientConfig::new(server.uri()))
        .await
        .unwrap_err();

    match err {
        AuthError::Rejected { status, body, .. } => {
            assert_eq!(status.0, 200);
            assert_eq!(body, body_text);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn given_200_body_without_workspace_field_when_constructing_then_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let err = Roboflow::with_config(TEST_KEY, ClientConfig::new(server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Malformed { .. }));
}

#[tokio::test]
async fn given_undecodable_200_body_when_constructing_then_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = Roboflow::with_config(TEST_KEY, ClientConfig::new(server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Malformed { .. }));
}

#[tokio::test]
async fn given_handshake_then_key_travels_as_query_parameter_not_header() {
    let server = MockServer::start().await;
    mount_auth(&server, "acme").await;

    Roboflow::with_config(TEST_KEY, ClientConfig::new(server.uri()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.url.query().unwrap().contains("api_key=test-api-key"));
    assert!(!request.headers.contains_key("authorization"));
}
