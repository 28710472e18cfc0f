//! Integration tests for the Quantfoot API.
//!
//! These tests require the API server to be running against a seeded marts
//! schema, so they are `#[ignore]`d by default; run them with
//! `cargo test -p quantfoot-tests -- --ignored`. Configure the server URL
//! via the `API_BASE_URL` environment variable (default:
//! `http://localhost:8080`).

use quantfoot_client::{ClientConfig, QuantfootClient};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<QuantfootClient, quantfoot_client::Error> {
    QuantfootClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}
