//! Aggregate chain statistics for the home dashboard.
//!
//! Mirrors the explorer's `/api/v2/stats` payload. Counters arrive as decimal
//! strings, block time as milliseconds.

use serde::{Deserialize, Serialize};

// ============================================================================
// Gas Prices
// ============================================================================

/// One gas oracle tier (slow / average / fast).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasPriceTier {
    /// Price in fiat, already formatted by the oracle (e.g. `"1.01"`).
    #[serde(default)]
    pub fiat_price: Option<String>,
    /// Price in gwei.
    #[serde(default)]
    pub price: Option<f64>,
    /// Expected confirmation time in milliseconds.
    #[serde(default)]
    pub time: Option<f64>,
}

/// Gas oracle snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasPrices {
    #[serde(default)]
    pub slow: Option<GasPriceTier>,
    #[serde(default)]
    pub average: Option<GasPriceTier>,
    #[serde(default)]
    pub fast: Option<GasPriceTier>,
}

// ============================================================================
// AggregateStats
// ============================================================================

/// Aggregate chain statistics, replaced wholesale on every poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_blocks: String,
    pub total_transactions: String,
    pub total_addresses: String,
    /// Average block time in milliseconds.
    #[serde(default)]
    pub average_block_time: Option<f64>,
    #[serde(default)]
    pub gas_prices: Option<GasPrices>,
    /// When the gas oracle last refreshed, as reported by the API.
    #[serde(default)]
    pub gas_price_updated_at: Option<String>,
    /// Milliseconds until the next oracle refresh.
    #[serde(default)]
    pub gas_prices_update_in: Option<u64>,
    /// Collateral locked in the Rootstock two-way peg, in wei.
    #[serde(default)]
    pub rootstock_locked_btc: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "total_blocks": "30215608",
            "total_addresses": "19667249",
            "total_transactions": "193823272",
            "average_block_time": 14346,
            "coin_price": "1.39",
            "gas_prices": {
                "slow": {"fiat_price": "0.95", "price": 18.5, "time": 30000},
                "average": {"fiat_price": "1.01", "price": 20.41, "time": 12283},
                "fast": null
            },
            "gas_price_updated_at": "2024-06-01T11:59:00Z",
            "gas_prices_update_in": 30000,
            "rootstock_locked_btc": null
        }"#;

        let stats: AggregateStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_blocks, "30215608");
        assert_eq!(stats.average_block_time, Some(14346.0));
        let gas = stats.gas_prices.unwrap();
        assert_eq!(gas.average.unwrap().fiat_price.as_deref(), Some("1.01"));
        assert!(gas.fast.is_none());
        assert_eq!(stats.gas_prices_update_in, Some(30000));
        assert!(stats.rootstock_locked_btc.is_none());
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let json = r#"{"total_blocks":"1","total_addresses":"2","total_transactions":"3"}"#;
        let stats: AggregateStats = serde_json::from_str(json).unwrap();
        assert!(stats.average_block_time.is_none());
        assert!(stats.gas_prices.is_none());
        assert!(stats.gas_price_updated_at.is_none());
    }
}
