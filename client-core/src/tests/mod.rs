mod config;
mod error;
mod ident;
mod models;
mod version;
