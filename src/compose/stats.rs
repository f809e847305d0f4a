//! Summary tiles for the home dashboard.
//!
//! [`StatsComposer`] turns one [`AggregateStats`] snapshot into the ordered
//! list of [`StatTile`]s the two-column stats grid shows. Which tiles appear
//! is decided by walking [`TILE_ORDER`] and asking each kind whether it
//! applies; the span hint is a post-pass over the finished list.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::slot::Slot;
use crate::client::QueryState;
use crate::config::{CurrencyUnits, ExplorerConfig, HomepageConfig, RollupFeature};
use crate::constants::NATIVE_COIN_DECIMALS;
use crate::domain::amount::group_thousands;
use crate::domain::{
    AggregateStats, GasPriceTier, Route, ScoutError, UnitValue, format_locale_f64, route,
};

/// Display order of every tile the dashboard knows.
pub const TILE_ORDER: [TileKind; 7] = [
    TileKind::LatestBatch,
    TileKind::TotalBlocks,
    TileKind::AverageBlockTime,
    TileKind::TotalTransactions,
    TileKind::WalletAddresses,
    TileKind::GasTracker,
    TileKind::LockedCollateral,
];

/// Value shown when a gas price or block time is unknown.
const NOT_AVAILABLE: &str = "N/A";

// ============================================================================
// Tile Types
// ============================================================================

/// The statistic a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    LatestBatch,
    TotalBlocks,
    AverageBlockTime,
    TotalTransactions,
    WalletAddresses,
    GasTracker,
    LockedCollateral,
}

impl TileKind {
    /// Icon id of the tile.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::LatestBatch => "txn_batches",
            Self::TotalBlocks => "block",
            Self::AverageBlockTime => "clock-light",
            Self::TotalTransactions => "transactions",
            Self::WalletAddresses => "wallet",
            Self::GasTracker => "gas",
            Self::LockedCollateral => "coins/bitcoin",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::LatestBatch => "Latest batch",
            Self::TotalBlocks => "Total blocks",
            Self::AverageBlockTime => "Average block time",
            Self::TotalTransactions => "Total transactions",
            Self::WalletAddresses => "Wallet addresses",
            Self::GasTracker => "Gas tracker",
            Self::LockedCollateral => "BTC Locked in 2WP",
        }
    }
}

/// How many grid columns a tile occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSpan {
    #[default]
    Single,
    Double,
}

/// One gas oracle tier as shown in the gas tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasTierLine {
    pub label: &'static str,
    pub value: String,
    /// Expected confirmation time, e.g. `"12.283s"`.
    pub time: Option<String>,
}

/// Tooltip payload of the gas tracker tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasTooltip {
    pub tiers: Vec<GasTierLine>,
    /// When the stats snapshot was received.
    pub data_updated_at: Option<DateTime<Utc>>,
    /// When the oracle computed these prices, as reported by the API.
    pub oracle_updated_at: Option<String>,
    /// Time until the oracle refreshes.
    pub next_update_in: Option<Duration>,
}

/// One summary statistic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub kind: TileKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub value: String,
    pub url: Option<String>,
    pub tooltip: Option<GasTooltip>,
    pub is_loading: bool,
    pub span: TileSpan,
}

impl StatTile {
    fn new(kind: TileKind, value: String, is_loading: bool) -> Self {
        Self {
            kind,
            icon: kind.icon(),
            title: kind.title(),
            value,
            url: None,
            tooltip: None,
            is_loading,
            span: TileSpan::Single,
        }
    }

    fn with_url(mut self, target: Route<'_>) -> Self {
        self.url = Some(route(target));
        self
    }

    /// The value behind its loading gate.
    #[must_use]
    pub fn value_slot(&self) -> Slot<&str> {
        Slot::gate(self.is_loading, self.value.as_str())
    }
}

// ============================================================================
// StatsComposer
// ============================================================================

/// Inputs that change on every poll.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSnapshot<'a> {
    /// Latest stats, `None` while nothing (not even a placeholder) is known.
    pub stats: Option<&'a AggregateStats>,
    /// Latest zkEvm batch number, `None` while unresolved.
    pub latest_batch: Option<u64>,
    /// When `stats` was received.
    pub data_updated_at: Option<DateTime<Utc>>,
    /// Whether `stats` is placeholder data.
    pub is_loading: bool,
}

/// Decides which stat tiles appear and how they are laid out.
#[derive(Debug, Clone, Copy)]
pub struct StatsComposer<'a> {
    rollup: &'a RollupFeature,
    homepage: &'a HomepageConfig,
    units: &'a CurrencyUnits,
}

impl<'a> StatsComposer<'a> {
    #[must_use]
    pub fn new(config: &'a ExplorerConfig) -> Self {
        Self {
            rollup: &config.features.rollup,
            homepage: &config.ui.homepage,
            units: &config.units,
        }
    }

    /// Compose the tiles for `snapshot`.
    ///
    /// Returns no tiles while `snapshot.stats` is unknown.
    ///
    /// # Errors
    ///
    /// Propagates [`ScoutError::InvalidAmount`] when a counter or amount in
    /// the snapshot is not a decimal number.
    pub fn compose(&self, snapshot: &StatsSnapshot<'_>) -> Result<Vec<StatTile>, ScoutError> {
        let Some(stats) = snapshot.stats else {
            return Ok(Vec::new());
        };

        let mut tiles = TILE_ORDER
            .into_iter()
            .filter(|&kind| self.applies(kind, stats))
            .map(|kind| self.build(kind, stats, snapshot))
            .collect::<Result<Vec<_>, _>>()?;

        apply_span_hint(&mut tiles);
        Ok(tiles)
    }

    /// Compose the tiles straight from the stats and batch-number queries.
    ///
    /// A failure of either query hides the whole section.
    ///
    /// # Errors
    ///
    /// See [`StatsComposer::compose`].
    pub fn compose_queries(
        &self,
        stats: &QueryState<AggregateStats>,
        latest_batch: &QueryState<u64>,
    ) -> Result<Vec<StatTile>, ScoutError> {
        if stats.is_error || latest_batch.is_error {
            tracing::debug!(
                stats_error = stats.is_error,
                batch_error = latest_batch.is_error,
                "Hiding stats section"
            );
            return Ok(Vec::new());
        }

        let batch_pending = self.rollup.shows_latest_batch() && latest_batch.is_placeholder_data;
        self.compose(&StatsSnapshot {
            stats: stats.data.as_ref(),
            latest_batch: latest_batch.data,
            data_updated_at: stats.data_updated_at,
            is_loading: stats.is_placeholder_data || batch_pending,
        })
    }

    fn applies(&self, kind: TileKind, stats: &AggregateStats) -> bool {
        match kind {
            TileKind::LatestBatch => self.rollup.shows_latest_batch(),
            TileKind::TotalBlocks => !self.rollup.shows_latest_batch(),
            TileKind::AverageBlockTime => self.homepage.show_avg_block_time,
            TileKind::TotalTransactions | TileKind::WalletAddresses => true,
            TileKind::GasTracker => self.homepage.show_gas_tracker && stats.gas_prices.is_some(),
            TileKind::LockedCollateral => has_locked_collateral(stats),
        }
    }

    fn build(
        &self,
        kind: TileKind,
        stats: &AggregateStats,
        snapshot: &StatsSnapshot<'_>,
    ) -> Result<StatTile, ScoutError> {
        let tile = |value: String| StatTile::new(kind, value, snapshot.is_loading);

        Ok(match kind {
            TileKind::LatestBatch => {
                let number = snapshot.latest_batch.unwrap_or(0);
                tile(group_thousands(&number.to_string())).with_url(Route::Batches)
            }
            TileKind::TotalBlocks => {
                tile(locale_count(&stats.total_blocks)?).with_url(Route::Blocks)
            }
            TileKind::AverageBlockTime => tile(
                stats
                    .average_block_time
                    .map_or_else(|| NOT_AVAILABLE.to_string(), |ms| format!("{:.1}s", ms / 1000.0)),
            ),
            TileKind::TotalTransactions => {
                tile(locale_count(&stats.total_transactions)?).with_url(Route::Txs)
            }
            TileKind::WalletAddresses => tile(locale_count(&stats.total_addresses)?),
            TileKind::GasTracker => {
                let average = stats.gas_prices.as_ref().and_then(|g| g.average.as_ref());
                let mut gas = tile(gas_price_text(average, &self.units.gwei));
                gas.tooltip = Some(self.gas_tooltip(stats, snapshot.data_updated_at));
                gas
            }
            TileKind::LockedCollateral => {
                let raw = stats.rootstock_locked_btc.as_deref().unwrap_or_default();
                let locked = UnitValue::with_unit(raw, NATIVE_COIN_DECIMALS)?.dp(0);
                tile(format!(
                    "{} {}",
                    locked.to_format(),
                    self.units.locked_collateral
                ))
            }
        })
    }

    fn gas_tooltip(
        &self,
        stats: &AggregateStats,
        data_updated_at: Option<DateTime<Utc>>,
    ) -> GasTooltip {
        let prices = stats.gas_prices.clone().unwrap_or_default();
        let tiers = [
            ("Slow", prices.slow.as_ref()),
            ("Normal", prices.average.as_ref()),
            ("Fast", prices.fast.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, tier)| {
            tier.map(|tier| GasTierLine {
                label,
                value: gas_price_text(Some(tier), &self.units.gwei),
                time: tier
                    .time
                    .map(|ms| format!("{}s", format_locale_f64(ms / 1000.0))),
            })
        })
        .collect();

        GasTooltip {
            tiers,
            data_updated_at,
            oracle_updated_at: stats.gas_price_updated_at.clone(),
            next_update_in: stats.gas_prices_update_in.map(Duration::from_millis),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Gas price text: fiat first, then gwei, then `N/A`.
fn gas_price_text(tier: Option<&GasPriceTier>, gwei_unit: &str) -> String {
    if let Some(fiat) = tier
        .and_then(|t| t.fiat_price.as_deref())
        .filter(|fiat| !fiat.is_empty())
    {
        return format!("${fiat}");
    }

    if let Some(price) = tier.and_then(|t| t.price) {
        return format!("{} {gwei_unit}", format_locale_f64(price));
    }

    NOT_AVAILABLE.to_string()
}

/// Counters arrive as decimal strings.
fn locale_count(raw: &str) -> Result<String, ScoutError> {
    Ok(UnitValue::parse(raw)?.to_locale_string())
}

/// A zero (or empty) locked amount hides the tile just like a missing one.
/// Unparseable amounts count as present so the formatter reports them.
fn has_locked_collateral(stats: &AggregateStats) -> bool {
    stats
        .rootstock_locked_btc
        .as_deref()
        .map(str::trim)
        .is_some_and(|raw| {
            !raw.is_empty() && !UnitValue::parse(raw).is_ok_and(|value| value.is_zero())
        })
}

/// An odd tile count leaves a hole in the two-column grid: the last tile
/// spans both columns instead.
fn apply_span_hint(tiles: &mut [StatTile]) {
    if tiles.len() % 2 == 0 {
        return;
    }
    if let Some(last) = tiles.last_mut() {
        last.span = TileSpan::Double;
    }
}

// ============================================================================
// Tests
// ============================================================================
