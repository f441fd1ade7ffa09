// Shared fixtures for endpoint tests.

use client_core::{ClientConfig, Roboflow};

use std::io::{Cursor, Write};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const TEST_KEY: &str = "test-api-key";

/// Mount the key handshake: `TEST_KEY` resolves to `workspace`.
pub async fn mount_auth(server: &MockServer, workspace: &str) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("api_key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "workspace": workspace })))
        .mount(server)
        .await;
}

/// Authenticated client pointed at the mock server.
pub async fn authed_client(server: &MockServer, workspace: &str) -> Roboflow {
    mount_auth(server, workspace).await;
    Roboflow::with_config(TEST_KEY, ClientConfig::new(server.uri()))
        .await
        .expect("handshake against mock server should succeed")
}

/// Build an in-memory zip archive from (name, contents) pairs.
pub fn zip_fixture(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }

    writer.finish().unwrap().into_inner()
}
