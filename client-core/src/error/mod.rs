pub mod auth;
pub mod download;
pub mod ident;
pub mod request;

pub use auth::AuthError;
pub use download::DownloadError;
pub use ident::IdentError;
pub use request::RequestError;

use thiserror::Error;

/// Umbrella error for callers that drive the whole flow and do not
/// care which stage failed.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Ident(#[from] IdentError),
}
