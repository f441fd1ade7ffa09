//! HTTP status code utilities for error categorization.

/// HTTP status code attached to request failures.
///
/// Stored directly on the error variant rather than parsed back out
/// of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors (bad key, unknown project, no permission).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_status_codes_when_categorized_then_ranges_are_exclusive() {
        assert!(HttpStatusCode(200).is_success());
        assert!(HttpStatusCode(404).is_client_error());
        assert!(HttpStatusCode(500).is_server_error());

        assert!(!HttpStatusCode(404).is_success());
        assert!(!HttpStatusCode(404).is_server_error());
        assert!(!HttpStatusCode(500).is_client_error());
    }
}
