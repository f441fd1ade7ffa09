//! API key format checks run before the first request.
//!
//! The server rejects bad keys anyway, but an obviously malformed key
//! should fail without burning a network round trip.

use crate::error::AuthError;

use common::{ApiKey, ErrorLocation};

use std::panic::Location;

/// Reject keys that cannot possibly be valid.
#[track_caller]
pub(crate) fn validate_key(api_key: &ApiKey) -> Result<(), AuthError> {
    let location = ErrorLocation::from(Location::caller());

    if api_key.is_empty() {
        return Err(AuthError::InvalidKey {
            reason: "key is empty".to_string(),
            location,
        });
    }

    if api_key
        .expose()
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(AuthError::InvalidKey {
            reason: "key contains whitespace or control characters".to_string(),
            location,
        });
    }

    Ok(())
}
