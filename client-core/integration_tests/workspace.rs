// Endpoint tests for workspace listing.

use crate::helpers::{TEST_KEY, authed_client};

use client_core::error::RequestError;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_no_name_when_listing_then_current_workspace_queried() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/acme"))
        .and(query_param("api_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspace": {
                "name": "Acme Robotics",
                "url": "acme",
                "projects": [
                    { "id": "acme/widgets", "name": "widgets", "type": "object-detection", "images": 240 }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = client.workspace(None).await.unwrap();

    assert_eq!(workspace.name(), "acme");
    assert_eq!(workspace.projects().len(), 1);
    let project = &workspace.projects()[0];
    assert_eq!(project.id.as_deref(), Some("acme/widgets"));
    assert_eq!(project.task_type.as_deref(), Some("object-detection"));
    assert_eq!(project.images, Some(240));
}

#[tokio::test]
async fn given_explicit_name_when_listing_then_that_workspace_queried() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/other"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspace": { "name": "Other", "projects": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = client.workspace(Some("other")).await.unwrap();

    assert_eq!(workspace.name(), "other");
    assert!(workspace.projects().is_empty());
}

#[tokio::test]
async fn given_non_200_when_listing_then_status_error_with_body() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/acme"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Workspace not found"))
        .mount(&server)
        .await;

    let err = client.workspace(None).await.unwrap_err();

    match err {
        RequestError::Status { status, body, .. } => {
            assert_eq!(status.0, 404);
            assert_eq!(body, "Workspace not found");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unknown_fields_in_listing_then_tolerated() {
    let server = MockServer::start().await;
    let client = authed_client(&server, "acme").await;

    Mock::given(method("GET"))
        .and(path("/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workspace": {
                "name": "Acme",
                "members": 12,
                "projects": [{ "name": "widgets", "colormap": {} }]
            },
            "quota": { "images": 10000 }
        })))
        .mount(&server)
        .await;

    let workspace = client.workspace(None).await.unwrap();

    assert_eq!(workspace.projects().len(), 1);
    assert_eq!(workspace.projects()[0].name.as_deref(), Some("widgets"));
}
