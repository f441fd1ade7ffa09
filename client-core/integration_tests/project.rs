// Endpoint tests for project resolution and workspace routing.

use crate::helpers::{TEST_KEY, authed_client};

use client_core::error::{IdentError, RequestError};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project_body() -> serde_json::Value {
    json!({
        "project": {
            "id": "ws/proj",
            "name": "proj",
            "type": "object-detection",
            "annotation": "widgets",
            "images": 120,
            "public": false
        }
    })
}

/// **VALUE**: Verifies the workspace embedded in `ws/proj` wins over a
/// separately supplied workspace argument.
///
/// **WHY THIS MATTERS**: Callers paste composite identifiers straight
/// from the web UI. Routing those against a different workspace than
/// the one in the identifier would fetch the wrong dataset.
#[tokio::test]
async fn given_slashed_name_when_fetching_then_embedded_workspace_overrides_argument() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/ws/proj"))
        .and(query_param("api_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
        .expect(1)
        .mount(&server)
        .await;

    let project = client.project("ws/proj", Some("other")).await.unwrap();

    assert_eq!(project.workspace(), "ws");
    assert_eq!(project.name(), "proj");
    assert_eq!(project.id(), "ws/proj");
    assert_eq!(project.info().task_type.as_deref(), Some("object-detection"));
}

#[tokio::test]
async fn given_bare_name_and_no_workspace_when_fetching_then_current_workspace_applies() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/acme/proj"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
        .expect(1)
        .mount(&server)
        .await;

    let project = client.project("proj", None).await.unwrap();

    assert_eq!(project.workspace(), "acme");
}

#[tokio::test]
async fn given_bare_name_and_explicit_workspace_when_fetching_then_explicit_workspace_applies() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/explicit/proj"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_body()))
        .expect(1)
        .mount(&server)
        .await;

    client.project("proj", Some("explicit")).await.unwrap();
}

#[tokio::test]
async fn given_non_200_when_fetching_then_status_error_with_body() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/acme/missing"))
        .respond_with(ResponseTemplate::new(403).set_body_string("You do not have permission"))
        .mount(&server)
        .await;

    let err = client.project("missing", None).await.unwrap_err();

    match err {
        RequestError::Status { status, body, .. } => {
            assert_eq!(status.0, 403);
            assert_eq!(body, "You do not have permission");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a 200 body without the `project` envelope
/// surfaces as an error instead of an empty project.
///
/// **WHY THIS MATTERS**: Defaulting the metadata would hand callers a
/// `Project` with every field `None` and hide a malformed server
/// response; the handshake already fails loudly on a missing
/// `workspace` field, and this endpoint must behave the same way.
#[tokio::test]
async fn given_200_body_without_project_field_when_fetching_then_malformed_error() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/acme/proj"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let err = client.project("proj", None).await.unwrap_err();

    match err {
        RequestError::Malformed { message, .. } => {
            assert!(message.contains("project field"));
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_name_with_two_separators_when_fetching_then_ident_error_and_no_request() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    let err = client.project("a/b/c", None).await.unwrap_err();

    assert!(matches!(
        err,
        RequestError::Ident(IdentError::ExtraSeparator { .. })
    ));
    // Only the handshake reached the server.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
