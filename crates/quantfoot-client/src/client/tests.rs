//! Unit tests for client module.

use super::*;

// ============================================================================
// ClientConfig Tests
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn test_client_config_custom() {
    let config = ClientConfig {
        base_url: "http://api.example.com:9000".to_string(),
        timeout: Duration::from_secs(60),
    };

    assert_eq!(config.base_url, "http://api.example.com:9000");
    assert_eq!(config.timeout, Duration::from_secs(60));
}

#[test]
fn test_client_config_clone() {
    let config = ClientConfig {
        base_url: "http://test.com".to_string(),
        timeout: Duration::from_secs(10),
    };

    let cloned = config.clone();
    assert_eq!(cloned.base_url, config.base_url);
    assert_eq!(cloned.timeout, config.timeout);
}

// ============================================================================
// QuantfootClient Creation Tests
// ============================================================================

#[test]
fn test_quantfoot_client_new() {
    let config = ClientConfig::default();
    let client = QuantfootClient::new(config);

    assert!(client.is_ok());
}

#[test]
fn test_quantfoot_client_with_base_url() {
    let client = QuantfootClient::with_base_url("http://localhost:3000");

    assert!(client.is_ok());
}

#[test]
fn test_quantfoot_client_base_url_trimmed() {
    let client = QuantfootClient::with_base_url("http://localhost:8080/").unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn test_quantfoot_client_custom_timeout() {
    let config = ClientConfig {
        base_url: "http://localhost:8080".to_string(),
        timeout: Duration::from_secs(5),
    };

    let client = QuantfootClient::new(config);
    assert!(client.is_ok());
}
