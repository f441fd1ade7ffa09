//! Credential wrapper with redacted Debug output.
//!
//! The API key travels as a query parameter on every request, so it
//! passes through a lot of format strings. Wrapping it keeps the raw
//! value out of logs, debug dumps, and serialized config.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// A Roboflow API key that never exposes its value in logs or debug
/// output. The inner string is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    /// Wrap a raw key value. No format checking happens here; the
    /// client validates before its first request.
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when building the request URL.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for ApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("ApiKey cannot be serialized - use expose() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_api_key_when_debug_formatted_then_value_is_redacted() {
        let key = ApiKey::new("super-secret-value");

        let debug = format!("{key:?}");
        let display = format!("{key}");

        assert!(!debug.contains("super-secret-value"));
        assert!(!display.contains("super-secret-value"));
        assert_eq!(debug, "ApiKey([REDACTED])");
    }

    #[test]
    fn given_api_key_when_exposed_then_returns_raw_value() {
        let key = ApiKey::new("abc123");

        assert_eq!(key.expose(), "abc123");
        assert_eq!(key.len(), 6);
        assert!(!key.is_empty());
    }

    #[test]
    fn given_api_key_when_serialized_then_fails() {
        let key = ApiKey::new("abc123");

        let result = serde_json::to_string(&key);

        assert!(result.is_err());
    }
}
