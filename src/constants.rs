//! Application constants for the scoutboard TUI.
//!
//! Centralized numeric values, API paths, polling cadences and UI
//! dimensions used throughout the application.

use std::time::Duration;

// ============================================================================
// Explorer API
// ============================================================================

/// Explorer instance used when neither config nor CLI name one.
pub const DEFAULT_API_URL: &str = "https://eth.blockscout.com";

/// Aggregate statistics endpoint.
pub const STATS_PATH: &str = "/api/v2/stats";

/// Latest zkEvm batch number endpoint.
pub const LATEST_BATCH_PATH: &str = "/api/v2/main-page/zkevm/batches/latest-number";

/// Latest transactions endpoint.
pub const LATEST_TXS_PATH: &str = "/api/v2/main-page/transactions";

/// Header asking the stats endpoint to include a freshly computed gas oracle.
pub const UPDATED_GAS_ORACLE_HEADER: &str = "updated-gas-oracle";

/// Default timeout for HTTP requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Polling and Ticking
// ============================================================================

/// How often aggregate stats are refetched.
pub const STATS_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// How often the latest batch number is refetched.
pub const BATCH_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// How often the latest transactions are refetched.
pub const TXS_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Clock resolution of the relative-time ticker.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Input poll timeout of the main loop.
pub const INPUT_POLL: Duration = Duration::from_millis(100);

// ============================================================================
// Amounts
// ============================================================================

/// Decimals of the native coin (wei → ether).
pub const NATIVE_COIN_DECIMALS: u32 = 18;

/// Fractional digits shown for transaction values and fees.
pub const TX_AMOUNT_PLACES: u32 = 5;

/// Fractional digits of USD conversions.
pub const USD_PLACES: u32 = 2;

/// Most fractional digits a locale-formatted number shows.
pub const LOCALE_MAX_FRACTION_DIGITS: u32 = 3;

// ============================================================================
// Placeholders
// ============================================================================

/// Batch number shown while the real one is in flight.
pub const PLACEHOLDER_BATCH_NUMBER: u64 = 12_345;

/// Skeleton rows shown while the first transactions page is in flight.
pub const PLACEHOLDER_TX_ROWS: usize = 5;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of one stat tile, borders included.
pub const TILE_HEIGHT: u16 = 5;

/// Height of one transaction row, borders included.
pub const TX_ROW_HEIGHT: u16 = 3;

/// Width of the hash slot in a transaction row.
pub const HASH_WIDTH: u16 = 20;
