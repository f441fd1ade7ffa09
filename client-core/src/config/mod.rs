//! Client configuration.
//!
//! The API base URL is a process-wide constant by default, but it is
//! always handed to the client explicitly rather than read from an
//! ambient global, so tests and self-hosted deployments can point the
//! SDK elsewhere.

use crate::DEFAULT_API_URL;

use std::time::Duration;

use log::debug;

/// Environment variable that overrides the API base URL.
const API_URL_ENV_VAR: &str = "ROBOFLOW_API_URL";

/// Request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration handed to [`crate::Roboflow`] at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Timeout for each HTTP request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Config pointing at an explicit base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            api_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Config from the process environment.
    ///
    /// Loads `.env` from the working directory when present (missing
    /// files are not an error) and honors `ROBOFLOW_API_URL`.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded .env from {}", path.display()),
            Err(_) => debug!("No .env file found - using existing environment"),
        }

        match std::env::var(API_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                debug!("API base URL overridden via {API_URL_ENV_VAR}");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
