//! Stand-in data shown as skeletons until the first responses arrive.

use crate::constants::{PLACEHOLDER_BATCH_NUMBER, PLACEHOLDER_TX_ROWS};
use crate::domain::{
    AddressParam, AggregateStats, Fee, GasPriceTier, GasPrices, Transaction, TxStatus,
};

/// Aggregate stats with every tile's field populated, so the skeleton grid
/// has the same shape as a typical loaded one.
#[must_use]
pub fn stats() -> AggregateStats {
    let tier = |price: f64| GasPriceTier {
        fiat_price: Some("1.39".to_string()),
        price: Some(price),
        time: Some(12_283.0),
    };

    AggregateStats {
        total_blocks: "8988686".to_string(),
        total_transactions: "193823272".to_string(),
        total_addresses: "28722099".to_string(),
        average_block_time: Some(12_345.0),
        gas_prices: Some(GasPrices {
            slow: Some(tier(18.0)),
            average: Some(tier(20.41)),
            fast: Some(tier(23.7)),
        }),
        gas_price_updated_at: None,
        gas_prices_update_in: None,
        rootstock_locked_btc: None,
    }
}

#[must_use]
pub const fn latest_batch() -> u64 {
    PLACEHOLDER_BATCH_NUMBER
}

/// A page of identical stub transactions.
#[must_use]
pub fn transactions() -> Vec<Transaction> {
    let stub = Transaction {
        hash: format!("0x{}", "0".repeat(64)),
        to: Some(AddressParam {
            hash: format!("0x{}", "0".repeat(40)),
        }),
        created_contract: None,
        status: TxStatus::Success,
        result: Some("success".to_string()),
        timestamp: Some("2022-11-11T11:11:11.000000Z".to_string()),
        value: "42000000000000000000".to_string(),
        fee: Fee {
            kind: Some("actual".to_string()),
            value: Some("2100000000000000".to_string()),
        },
        stability_fee: None,
    };

    vec![stub; PLACEHOLDER_TX_ROWS]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{StatsComposer, TxRowComposer};
    use crate::config::ExplorerConfig;
    use crate::domain::parse_anchor;

    #[test]
    fn test_placeholders_compose_cleanly() {
        let config = ExplorerConfig::default();
        let stats = stats();
        let snapshot = crate::compose::stats::StatsSnapshot {
            stats: Some(&stats),
            latest_batch: Some(latest_batch()),
            data_updated_at: None,
            is_loading: true,
        };

        let tiles = StatsComposer::new(&config).compose(&snapshot).unwrap();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|tile| tile.is_loading));

        let now = parse_anchor(Some("2024-06-01T12:00:00Z"));
        let rows = TxRowComposer::new(&config)
            .compose_all(&transactions(), true, now)
            .unwrap();
        assert_eq!(rows.len(), PLACEHOLDER_TX_ROWS);
        assert!(rows.iter().all(|row| row.hash.is_loading()));
    }
}
