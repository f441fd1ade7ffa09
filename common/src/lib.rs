//! Shared data types for the Roboflow client.
//!
//! This crate contains pure data structures with no business logic:
//! the credential wrapper, HTTP status categorization, and the error
//! location capture used by every error variant in the SDK.
//!
//! ## Architecture
//!
//! - **common** (this crate): Pure data structures
//! - **client-core**: The SDK itself - authentication, listing, and
//!   dataset export against the remote API
//!
//! Keeping the data layer separate keeps concerns testable in
//! isolation and stops the credential type from growing behavior.

pub mod api_key;
pub mod error;
pub mod http_status;

pub use api_key::ApiKey;
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
