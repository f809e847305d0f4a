//! HTTP client abstraction for explorer API requests.

use reqwest::Client;
use std::time::Duration;

use crate::constants::REQUEST_TIMEOUT;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        Self {
            inner: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(HttpClient::new().config().timeout, Duration::from_secs(30));
        let client = HttpClient::with_config(HttpConfig::with_timeout(Duration::from_secs(2)));
        assert_eq!(client.config().timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_get_sets_json_accept() {
        let request = HttpClient::new()
            .get("https://explorer.test/api/v2/stats")
            .build()
            .unwrap();
        assert_eq!(request.headers()["accept"], "application/json");
        assert_eq!(request.timeout(), Some(&Duration::from_secs(30)));
    }
}
