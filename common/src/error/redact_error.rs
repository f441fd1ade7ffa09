use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when code tries to move a credential through a path that
/// would write it somewhere durable.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
