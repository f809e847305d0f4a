//! One row of the latest-transactions list.
//!
//! Every visible field is a [`Slot`] so the renderer can draw a skeleton of
//! the same footprint while the row is placeholder data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::slot::Slot;
use super::stability_fee::{StabilityFeeView, render_stability_fee};
use crate::config::{CurrencyUnits, ExplorerConfig, TxHiddenFields};
use crate::constants::TX_AMOUNT_PLACES;
use crate::domain::{
    Route, ScoutError, Transaction, TxStatus, UnitFormatter, ValueFormatter, parse_anchor, route,
    time_ago,
};

/// Fee text when the API reports no fee.
const NO_FEE: &str = "-";

/// Status glyph of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIcon {
    Success,
    Error,
    Pending,
}

impl StatusIcon {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Pending => "pending",
        }
    }
}

impl From<TxStatus> for StatusIcon {
    fn from(status: TxStatus) -> Self {
        match status {
            TxStatus::Success => Self::Success,
            TxStatus::Error => Self::Error,
            TxStatus::Pending => Self::Pending,
        }
    }
}

/// Content of the fee slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeeLabel {
    /// Native-coin fee, e.g. `"ETH 0.00021"`, or `"-"` when unknown.
    Plain { text: String },
    /// Fee paid in a stability token.
    Stability(StabilityFeeView),
}

/// Display fields of one transaction row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxRowViewModel {
    pub hash: Slot<String>,
    pub href: String,
    pub status: Slot<StatusIcon>,
    /// Anchor of the elapsed label, for scheduling the next re-render.
    pub anchor: DateTime<Utc>,
    pub elapsed: Slot<String>,
    pub value: Slot<String>,
    /// `None` when the fee field is hidden for this view.
    pub fee: Option<Slot<FeeLabel>>,
    /// Grid columns the row occupies. A hidden value only narrows the grid;
    /// the value itself is always shown.
    pub columns: u8,
}

/// Computes [`TxRowViewModel`]s from transactions.
#[derive(Debug, Clone)]
pub struct TxRowComposer<'a, F = UnitFormatter> {
    hidden: &'a TxHiddenFields,
    units: &'a CurrencyUnits,
    formatter: F,
}

impl<'a> TxRowComposer<'a> {
    #[must_use]
    pub fn new(config: &'a ExplorerConfig) -> Self {
        Self::with_formatter(config, UnitFormatter::native())
    }
}

impl<'a, F: ValueFormatter> TxRowComposer<'a, F> {
    #[must_use]
    pub fn with_formatter(config: &'a ExplorerConfig, formatter: F) -> Self {
        Self {
            hidden: &config.ui.views.tx.hidden_fields,
            units: &config.units,
            formatter,
        }
    }

    /// Compose the row for `tx` as seen at `now`.
    ///
    /// # Errors
    ///
    /// Propagates [`ScoutError::InvalidAmount`] for malformed amounts.
    pub fn compose(
        &self,
        tx: &Transaction,
        is_loading: bool,
        now: DateTime<Utc>,
    ) -> Result<TxRowViewModel, ScoutError> {
        let gate = |value| Slot::gate(is_loading, value);
        let anchor = parse_anchor(tx.timestamp.as_deref());

        let value = gate(self.native_amount(&tx.value)?);

        let fee = if self.hidden.tx_fee {
            None
        } else {
            Some(Slot::gate(is_loading, self.fee_label(tx)?))
        };

        Ok(TxRowViewModel {
            hash: gate(tx.hash.clone()),
            href: route(Route::Tx(&tx.hash)),
            status: Slot::gate(is_loading, StatusIcon::from(tx.status)),
            anchor,
            elapsed: gate(time_ago(anchor, now)),
            value,
            fee,
            columns: if self.hidden.value && self.hidden.tx_fee { 2 } else { 3 },
        })
    }

    /// Compose every row of a list with one shared loading flag.
    ///
    /// # Errors
    ///
    /// See [`TxRowComposer::compose`].
    pub fn compose_all(
        &self,
        txs: &[Transaction],
        is_loading: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<TxRowViewModel>, ScoutError> {
        txs.iter()
            .map(|tx| self.compose(tx, is_loading, now))
            .collect()
    }

    fn fee_label(&self, tx: &Transaction) -> Result<FeeLabel, ScoutError> {
        if let Some(stability) = &tx.stability_fee {
            return render_stability_fee(stability, TX_AMOUNT_PLACES, true)
                .map(FeeLabel::Stability);
        }

        let text = match tx.fee.value.as_deref() {
            Some(raw) => self.native_amount(raw)?,
            None => NO_FEE.to_string(),
        };
        Ok(FeeLabel::Plain { text })
    }

    fn native_amount(&self, raw: &str) -> Result<String, ScoutError> {
        let amount = self.formatter.format_fixed(raw, TX_AMOUNT_PLACES)?;
        Ok(format!("{} {amount}", self.units.ether))
    }
}
