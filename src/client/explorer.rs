//! Blockscout-compatible explorer API client.
//!
//! Covers the three home-page endpoints the dashboard polls: aggregate
//! stats, the latest zkEvm batch number and the latest transactions.

use serde::de::DeserializeOwned;

use super::http::{HttpClient, HttpConfig};
use crate::constants::{LATEST_BATCH_PATH, LATEST_TXS_PATH, STATS_PATH, UPDATED_GAS_ORACLE_HEADER};
use crate::domain::{AggregateStats, ScoutError, Transaction};

// ============================================================================
// Explorer Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: HttpClient,
    base_url: String,
}

impl ExplorerClient {
    /// Create a client for the explorer at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(base_url, HttpConfig::default())
    }

    #[must_use]
    pub fn with_config(base_url: impl Into<String>, config: HttpConfig) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: HttpClient::with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        self.http.get(&url)
    }

    fn stats_request(&self) -> reqwest::RequestBuilder {
        self.request(STATS_PATH).header(UPDATED_GAS_ORACLE_HEADER, "true")
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<T, ScoutError> {
        let response = request
            .send()
            .await
            .inspect_err(|e| tracing::debug!("{what} request failed: {e}"))?
            .error_for_status()
            .inspect_err(|e| tracing::debug!("{what} HTTP error: {e}"))?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("{what} JSON parse error: {e}");
            ScoutError::parse(format!("{what}: {e}"))
        })
    }

    /// Fetch aggregate chain statistics, asking for a fresh gas oracle.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn get_stats(&self) -> Result<AggregateStats, ScoutError> {
        self.fetch(self.stats_request(), "stats").await
    }

    /// Fetch the number of the latest zkEvm batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a number.
    pub async fn get_latest_batch_number(&self) -> Result<u64, ScoutError> {
        self.fetch(self.request(LATEST_BATCH_PATH), "latest batch").await
    }

    /// Fetch the transactions shown on the home page, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn get_latest_transactions(&self) -> Result<Vec<Transaction>, ScoutError> {
        self.fetch(self.request(LATEST_TXS_PATH), "latest transactions").await
    }
}

// ============================================================================
// Tests
// ============================================================================
