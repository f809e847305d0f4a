//! Data state of the dashboard.
//!
//! One [`QueryState`] per polled endpoint. The state is separate from the
//! view models: composers read it, message processing writes it.

use chrono::{DateTime, Utc};

use super::{AppMessage, placeholders};
use crate::client::QueryState;
use crate::config::RollupFeature;
use crate::domain::{AggregateStats, Transaction};

// ============================================================================
// Data State
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DataState {
    pub stats: QueryState<AggregateStats>,
    /// Only enabled for zkEvm rollups.
    pub latest_batch: QueryState<u64>,
    pub transactions: QueryState<Vec<Transaction>>,
}

impl DataState {
    /// Placeholder data for every query; the batch query is disabled unless
    /// the rollup shows batches.
    #[must_use]
    pub fn new(rollup: &RollupFeature) -> Self {
        let latest_batch = QueryState::with_placeholder(placeholders::latest_batch());

        Self {
            stats: QueryState::with_placeholder(placeholders::stats()),
            latest_batch: if rollup.shows_latest_batch() {
                latest_batch
            } else {
                latest_batch.disabled()
            },
            transactions: QueryState::with_placeholder(placeholders::transactions()),
        }
    }

    /// Fold one background message into the matching query.
    pub fn apply(&mut self, message: AppMessage, at: DateTime<Utc>) {
        match message {
            AppMessage::StatsUpdated(stats) => self.stats.succeed(*stats, at),
            AppMessage::StatsFailed(error) => {
                tracing::warn!("Stats query failed: {error}");
                self.stats.fail();
            }
            AppMessage::LatestBatchUpdated(number) => self.latest_batch.succeed(number, at),
            AppMessage::LatestBatchFailed(error) => {
                tracing::warn!("Latest batch query failed: {error}");
                self.latest_batch.fail();
            }
            AppMessage::TransactionsUpdated(txs) => self.transactions.succeed(txs, at),
            AppMessage::TransactionsFailed(error) => {
                tracing::warn!("Transactions query failed: {error}");
                self.transactions.fail();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ConfigMother, StatsMother, TransactionMother};

    fn at() -> DateTime<Utc> {
        crate::domain::parse_anchor(Some("2024-06-01T12:00:00Z"))
    }

    #[test]
    fn test_new_starts_with_placeholders() {
        let data = DataState::new(&ConfigMother::with_toggles(true, true).features.rollup);
        assert!(data.stats.is_placeholder_data);
        assert!(data.transactions.is_placeholder_data);
        assert_eq!(data.latest_batch.data, Some(12_345));
        assert!(!data.latest_batch.enabled);

        let data = DataState::new(&ConfigMother::zk_evm_rollup());
        assert!(data.latest_batch.enabled);
    }

    #[test]
    fn test_apply_success_and_failure() {
        let mut data = DataState::new(&ConfigMother::zk_evm_rollup());

        data.apply(
            AppMessage::StatsUpdated(Box::new(StatsMother::scenario_a())),
            at(),
        );
        assert_eq!(data.stats.data, Some(StatsMother::scenario_a()));
        assert!(!data.stats.is_placeholder_data);
        assert_eq!(data.stats.data_updated_at, Some(at()));

        data.apply(AppMessage::StatsFailed("timeout".to_string()), at());
        assert!(data.stats.is_error);
        assert_eq!(data.stats.data, Some(StatsMother::scenario_a()));

        data.apply(AppMessage::LatestBatchUpdated(77), at());
        assert_eq!(data.latest_batch.data, Some(77));

        let txs = vec![TransactionMother::transfer("0x1")];
        data.apply(AppMessage::TransactionsUpdated(txs.clone()), at());
        assert_eq!(data.transactions.data, Some(txs));

        data.apply(AppMessage::TransactionsFailed("502".to_string()), at());
        assert!(data.transactions.is_error);
        assert!(!data.latest_batch.is_error);
    }
}
