use crate::error::IdentError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures while exporting and unpacking a version archive.
#[derive(Debug, ThisError)]
pub enum DownloadError {
    /// The export endpoint refused the request. `body` is the parsed
    /// JSON response (or the raw text as a JSON string when the body
    /// was not JSON).
    #[error("Export Request Failed: HTTP {status} - {body} {location}")]
    Export {
        status: HttpStatusCode,
        body: serde_json::Value,
        location: ErrorLocation,
    },

    /// The export response had no `export.link` field.
    #[error("Export Response Missing Link {location}")]
    MissingExportLink { location: ErrorLocation },

    /// The signed link did not yield the archive (expired or revoked).
    #[error("Archive Fetch Failed: HTTP {status} {location}")]
    Archive {
        status: HttpStatusCode,
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

    #[error("Archive I/O Error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Archive Extraction Error: {source} {location}")]
    Zip {
        #[source]
        source: zip::result::ZipError,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Ident(#[from] IdentError),
}

impl From<reqwest::Error> for DownloadError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        DownloadError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DownloadError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        DownloadError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for DownloadError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        DownloadError::Io {
            source: error,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<zip::result::ZipError> for DownloadError {
    #[track_caller]
    fn from(error: zip::result::ZipError) -> Self {
        DownloadError::Zip {
            source: error,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
