use crate::error::IdentError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures on the workspace and project endpoints.
///
/// Non-200 responses always surface as [`RequestError::Status`] with
/// the status code and raw body text, regardless of which endpoint
/// produced them.
#[derive(Debug, ThisError)]
pub enum RequestError {
    #[error("Request Failed: HTTP {status} - {body} {location}")]
    Status {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    /// The server accepted the request but the response body did not
    /// have the expected shape.
    #[error("Malformed Response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Ident(#[from] IdentError),
}

impl From<reqwest::Error> for RequestError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RequestError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RequestError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
