//! Transaction records shown in the latest-transactions list.
//!
//! Mirrors an item of the explorer's `/api/v2/main-page/transactions`
//! payload. Amounts stay as base-unit decimal strings; formatting happens in
//! the composers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Transaction Status
// ============================================================================

/// Outcome of a transaction.
///
/// The mapping from the API string is total: `"ok"` and `"error"` are
/// recognized, everything else (including `null`) is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Error,
    #[default]
    Pending,
}

impl TxStatus {
    /// Map a raw API status string.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "ok" => Self::Success,
            "error" => Self::Error,
            _ => Self::Pending,
        }
    }
}

impl From<Option<String>> for TxStatus {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map_or(Self::Pending, Self::from_raw)
    }
}

// ============================================================================
// Nested Payloads
// ============================================================================

/// Address reference embedded in a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParam {
    pub hash: String,
}

/// Plain fee in wei.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// `"actual"` or `"maximum"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Token a stability fee is paid in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub decimals: Option<String>,
    #[serde(default)]
    pub exchange_rate: Option<String>,
}

/// Fee paid through a stability mechanism instead of the native coin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityFee {
    pub total_fee: String,
    pub token: TokenInfo,
    #[serde(default)]
    pub dapp_fee: Option<String>,
    #[serde(default)]
    pub validator_fee: Option<String>,
}

// ============================================================================
// Transaction
// ============================================================================

/// A transaction as listed on the home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    #[serde(default)]
    pub to: Option<AddressParam>,
    #[serde(default)]
    pub created_contract: Option<AddressParam>,
    #[serde(default)]
    pub status: TxStatus,
    /// Status message from the node (e.g. the revert reason).
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Transferred amount in wei.
    pub value: String,
    #[serde(default)]
    pub fee: Fee,
    #[serde(default)]
    pub stability_fee: Option<StabilityFee>,
}

impl Transaction {
    /// The receiving side: `to`, or the contract this transaction created.
    ///
    /// Not rendered on the dashboard today.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.to
            .as_ref()
            .or(self.created_contract.as_ref())
            .map(|address| address.hash.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
