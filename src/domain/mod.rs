//! Domain types for the scoutboard dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by client, formatter and composers
//! - [`amount`] - Arbitrary-precision amount formatting
//! - [`stats`] - Aggregate chain statistics
//! - [`transaction`] - Transaction records
//! - [`time_ago`] - Relative time labels
//! - [`route`] - Link targets

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod error;
pub mod route;
pub mod stats;
pub mod time_ago;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{UnitFormatter, UnitValue, ValueFormatter, format_locale_f64};
pub use error::ScoutError;
pub use route::{Route, route};
pub use stats::{AggregateStats, GasPriceTier, GasPrices};
pub use time_ago::{next_refresh_in, parse_anchor, time_ago};
pub use transaction::{AddressParam, Fee, StabilityFee, TokenInfo, Transaction, TxStatus};
