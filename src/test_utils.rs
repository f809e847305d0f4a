//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use ratatui::buffer::Buffer;

use crate::config::{ExplorerConfig, RollupFeature, RollupType};
use crate::domain::{
    AddressParam, AggregateStats, Fee, GasPriceTier, GasPrices, StabilityFee, TokenInfo,
    Transaction, TxStatus,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ConfigMother;

impl ConfigMother {
    /// Default config with the two home-page toggles set.
    #[must_use]
    pub fn with_toggles(show_gas_tracker: bool, show_avg_block_time: bool) -> ExplorerConfig {
        let mut config = ExplorerConfig::default();
        config.ui.homepage.show_gas_tracker = show_gas_tracker;
        config.ui.homepage.show_avg_block_time = show_avg_block_time;
        config
    }

    #[must_use]
    pub fn zk_evm_rollup() -> RollupFeature {
        RollupFeature {
            is_enabled: true,
            kind: Some(RollupType::ZkEvm),
        }
    }
}

pub struct StatsMother;

impl StatsMother {
    /// Counters and block time only; no gas, no locked collateral.
    #[must_use]
    pub fn scenario_a() -> AggregateStats {
        AggregateStats {
            total_blocks: "1000000".to_string(),
            total_transactions: "5000000".to_string(),
            total_addresses: "200000".to_string(),
            average_block_time: Some(12_000.0),
            ..AggregateStats::default()
        }
    }

    /// Three oracle tiers; only the average one carries a fiat price.
    #[must_use]
    pub fn gas_prices() -> GasPrices {
        GasPrices {
            slow: Some(GasPriceTier {
                fiat_price: None,
                price: Some(18.0),
                time: None,
            }),
            average: Some(GasPriceTier {
                fiat_price: Some("1.01".to_string()),
                price: Some(20.41),
                time: Some(12_283.0),
            }),
            fast: Some(GasPriceTier {
                fiat_price: None,
                price: Some(25.5),
                time: None,
            }),
        }
    }
}

pub struct TransactionMother;

impl TransactionMother {
    /// A confirmed 1.5 ETH transfer mined 15s before 2024-06-01T12:00:00Z.
    #[must_use]
    pub fn transfer(hash: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            to: Some(AddressParam {
                hash: "0x000000000000000000000000000000000000dEaD".to_string(),
            }),
            created_contract: None,
            status: TxStatus::Success,
            result: Some("success".to_string()),
            timestamp: Some("2024-06-01T11:59:45Z".to_string()),
            value: "1500000000000000000".to_string(),
            fee: Fee {
                kind: Some("actual".to_string()),
                value: Some("420000000000000".to_string()),
            },
            stability_fee: None,
        }
    }

    /// A USDC stability fee of `total_fee` base units.
    #[must_use]
    pub fn stability_fee(
        total_fee: &str,
        decimals: Option<&str>,
        exchange_rate: Option<&str>,
    ) -> StabilityFee {
        StabilityFee {
            total_fee: total_fee.to_string(),
            token: TokenInfo {
                symbol: Some("USDC".to_string()),
                name: Some("USD Coin".to_string()),
                decimals: decimals.map(str::to_string),
                exchange_rate: exchange_rate.map(str::to_string),
            },
            dapp_fee: None,
            validator_fee: None,
        }
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flatten a buffer into one line per row.
pub fn buf_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}
