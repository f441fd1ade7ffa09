mod helpers;

mod auth;
mod download;
mod project;
mod workspace;
