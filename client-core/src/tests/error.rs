// Unit tests for error formatting and conversions.

use crate::error::{AuthError, CoreError, DownloadError, RequestError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

#[test]
fn given_rejected_auth_error_when_formatted_then_includes_status_and_body() {
    let err = AuthError::Rejected {
        status: HttpStatusCode(401),
        body: r#"{"error":"Invalid API Key."}"#.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let message = format!("{err}");

    assert!(message.contains("401"));
    assert!(message.contains("Invalid API Key."));
    assert!(message.contains("error.rs"));
}

#[test]
fn given_export_error_when_formatted_then_includes_parsed_body() {
    let err = DownloadError::Export {
        status: HttpStatusCode(422),
        body: serde_json::json!({ "error": "Export not ready" }),
        location: ErrorLocation::from(Location::caller()),
    };

    let message = format!("{err}");

    assert!(message.contains("422"));
    assert!(message.contains("Export not ready"));
}

#[test]
fn given_stage_errors_when_wrapped_then_core_error_is_transparent() {
    let status = RequestError::Status {
        status: HttpStatusCode(404),
        body: "Not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = format!("{status}");

    let wrapped = CoreError::from(status);

    assert_eq!(format!("{wrapped}"), expected);
}

#[test]
fn given_io_failure_when_wrapped_then_source_chain_preserved() {
    use std::error::Error;

    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = DownloadError::from(io_err);

    assert!(matches!(err, DownloadError::Io { .. }));
    assert!(err.source().is_some());
}
