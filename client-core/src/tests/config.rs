// Unit tests for client configuration.

use crate::DEFAULT_API_URL;
use crate::config::ClientConfig;

use std::time::Duration;

use serial_test::serial;

const API_URL_ENV_VAR: &str = "ROBOFLOW_API_URL";

#[test]
fn given_default_config_then_points_at_production_api() {
    let config = ClientConfig::default();

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.api_url, "https://api.roboflow.com");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn given_trailing_slashes_when_config_built_then_normalized_away() {
    let config = ClientConfig::new("http://localhost:9001///");

    assert_eq!(config.api_url, "http://localhost:9001");
}

#[test]
fn given_with_timeout_then_timeout_replaced() {
    let config = ClientConfig::default().with_timeout(Duration::from_secs(5));

    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn given_env_override_when_loaded_from_env_then_base_url_replaced() {
    unsafe { std::env::set_var(API_URL_ENV_VAR, "http://localhost:9001/") };

    let config = ClientConfig::from_env();

    unsafe { std::env::remove_var(API_URL_ENV_VAR) };

    assert_eq!(config.api_url, "http://localhost:9001");
}

#[test]
#[serial]
fn given_no_env_override_when_loaded_from_env_then_default_applies() {
    unsafe { std::env::remove_var(API_URL_ENV_VAR) };

    let config = ClientConfig::from_env();

    assert_eq!(config.api_url, DEFAULT_API_URL);
}
