//! HTTP client creation

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client used for schedule requests.
///
/// Every request is a single attempt bounded by `timeout_seconds`; idle
/// connections to the feed host are pooled across the window's requests.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Creates an HTTP client for testing with a short timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(5).expect("Failed to create test HTTP client")
}
