use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures during client construction and the key handshake.
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// The key failed format validation; no request was sent.
    #[error("Invalid API Key: {reason} {location}")]
    InvalidKey {
        reason: String,
        location: ErrorLocation,
    },

    /// The server refused the key. `body` is the exact response text.
    #[error("Authentication Rejected: HTTP {status} - {body} {location}")]
    Rejected {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Invalid API Base URL: {message} {location}")]
    InvalidBaseUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// The server accepted the key but the response could not be used.
    #[error("Malformed Auth Response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        AuthError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for AuthError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AuthError::InvalidBaseUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
