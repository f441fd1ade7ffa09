pub mod client;
pub mod config;
pub mod error;
pub mod ident;
pub mod models;
pub mod project;
pub mod version;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use client::Roboflow;
pub use config::ClientConfig;

pub const API_SCHEME: &str = "https://";
pub const API_HOSTNAME: &str = "api.roboflow.com";
pub const DEFAULT_API_URL: &str = const_format::concatcp!(API_SCHEME, API_HOSTNAME);
