//! The composed dashboard: everything one frame needs, computed up front.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::DataState;
use crate::compose::{StatTile, StatsComposer, TxRowComposer, TxRowViewModel};
use crate::config::ExplorerConfig;
use crate::domain::{ScoutError, next_refresh_in};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Explorer the data comes from.
    pub explorer: String,
    pub tiles: Vec<StatTile>,
    pub rows: Vec<TxRowViewModel>,
    /// The transactions query failed; `rows` is empty.
    pub transactions_failed: bool,
    pub stats_updated_at: Option<DateTime<Utc>>,
    /// Clock value the elapsed labels were computed for.
    pub now: DateTime<Utc>,
    /// When the first elapsed label changes, `None` without live rows.
    #[serde(skip)]
    pub next_label_change: Option<Duration>,
}

impl DashboardView {
    /// Run both composers over the current data.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors from either composer.
    pub fn compose(
        config: &ExplorerConfig,
        data: &DataState,
        now: DateTime<Utc>,
    ) -> Result<Self, ScoutError> {
        let tiles = StatsComposer::new(config).compose_queries(&data.stats, &data.latest_batch)?;

        let txs = &data.transactions;
        let rows = if txs.is_error {
            Vec::new()
        } else {
            TxRowComposer::new(config).compose_all(
                txs.data.as_deref().unwrap_or_default(),
                txs.is_placeholder_data,
                now,
            )?
        };

        let next_label_change = rows
            .iter()
            .filter(|row| !row.elapsed.is_loading())
            .map(|row| next_refresh_in(row.anchor, now))
            .min();

        Ok(Self {
            explorer: config.api.base_url.clone(),
            tiles,
            rows,
            transactions_failed: txs.is_error,
            stats_updated_at: data.stats.data_updated_at,
            now,
            next_label_change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Slot;
    use crate::domain::Transaction;
    use crate::state::AppMessage;
    use crate::test_utils::{ConfigMother, StatsMother, TransactionMother};

    fn now() -> DateTime<Utc> {
        crate::domain::parse_anchor(Some("2024-06-01T12:00:00Z"))
    }

    #[test]
    fn test_placeholders_render_as_skeletons() {
        let config = ConfigMother::with_toggles(true, true);
        let data = DataState::new(&config.features.rollup);

        let view = DashboardView::compose(&config, &data, now()).unwrap();
        assert!(view.tiles.iter().all(|tile| tile.is_loading));
        assert!(view.rows.iter().all(|row| row.status.is_loading()));
        assert!(view.next_label_change.is_none());
    }

    #[test]
    fn test_live_rows_schedule_next_label_change() {
        let config = ConfigMother::with_toggles(true, true);
        let mut data = DataState::new(&config.features.rollup);
        data.apply(
            AppMessage::StatsUpdated(Box::new(StatsMother::scenario_a())),
            now(),
        );
        data.apply(
            AppMessage::TransactionsUpdated(vec![TransactionMother::transfer("0x1")]),
            now(),
        );

        let view = DashboardView::compose(&config, &data, now()).unwrap();
        assert_eq!(view.tiles.len(), 4);
        assert!(view.tiles.iter().all(|tile| !tile.is_loading));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.next_label_change, Some(Duration::from_millis(500)));
        assert_eq!(view.stats_updated_at, Some(now()));
    }

    #[test]
    fn test_day_old_rows_still_schedule_a_redraw() {
        let config = ConfigMother::with_toggles(true, true);
        let mut data = DataState::new(&config.features.rollup);
        let old = Transaction {
            timestamp: Some("2024-05-30T12:00:00Z".to_string()),
            ..TransactionMother::transfer("0x1")
        };
        data.apply(AppMessage::TransactionsUpdated(vec![old]), now());

        let view = DashboardView::compose(&config, &data, now()).unwrap();
        assert_eq!(view.rows[0].elapsed, Slot::Ready("2d ago".to_string()));
        assert_eq!(view.next_label_change, Some(Duration::from_secs(12 * 3_600)));

        let later = DashboardView::compose(&config, &data, now() + chrono::Duration::hours(12))
            .unwrap();
        assert_eq!(later.rows[0].elapsed, Slot::Ready("3d ago".to_string()));
    }

    #[test]
    fn test_failed_queries_hide_sections() {
        let config = ConfigMother::with_toggles(true, true);
        let mut data = DataState::new(&config.features.rollup);
        data.apply(AppMessage::StatsFailed("boom".to_string()), now());
        data.apply(AppMessage::TransactionsFailed("boom".to_string()), now());

        let view = DashboardView::compose(&config, &data, now()).unwrap();
        assert!(view.tiles.is_empty());
        assert!(view.rows.is_empty());
        assert!(view.transactions_failed);
    }
}
