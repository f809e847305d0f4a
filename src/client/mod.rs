//! HTTP client for the explorer API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::ExplorerClient;
//!
//! let client = ExplorerClient::new("https://eth.blockscout.com");
//! let stats = client.get_stats().await?;
//! ```

pub mod explorer;
pub mod http;
pub mod query;

// ============================================================================
// Re-exports
// ============================================================================

pub use explorer::ExplorerClient;
pub use query::QueryState;
