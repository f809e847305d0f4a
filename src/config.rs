//! Explorer configuration.
//!
//! This module provides [`ExplorerConfig`], the static feature/config set the
//! dashboard reads for the lifetime of the process. It is loaded once at
//! startup and then handed to the composers explicitly.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/scoutboard/config.json`
//! - macOS: `~/Library/Application Support/scoutboard/config.json`
//! - Windows: `%APPDATA%/scoutboard/config.json`
//!
//! Every field is optional in the file; missing ones take their defaults.
//!
//! ```json
//! {
//!   "api": { "baseUrl": "https://zkevm.blockscout.com" },
//!   "ui": { "homepage": { "showGasTracker": false } },
//!   "features": { "rollup": { "isEnabled": true, "type": "zkEvm" } }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_API_URL;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "scoutboard";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// Feature Sections
// ============================================================================

/// Explorer API location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Home page toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomepageConfig {
    pub show_gas_tracker: bool,
    pub show_avg_block_time: bool,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            show_gas_tracker: true,
            show_avg_block_time: true,
        }
    }
}

/// Transaction fields a deployment chooses to hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxHiddenFields {
    pub value: bool,
    pub tx_fee: bool,
}

/// Transaction view settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TxViewConfig {
    pub hidden_fields: TxHiddenFields,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub tx: TxViewConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub homepage: HomepageConfig,
    pub views: ViewsConfig,
}

/// Rollup flavours an explorer instance can be deployed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum RollupType {
    Optimistic,
    Arbitrum,
    Shibarium,
    ZkEvm,
    ZkSync,
}

/// Rollup feature flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollupFeature {
    pub is_enabled: bool,
    #[serde(rename = "type")]
    pub kind: Option<RollupType>,
}

impl RollupFeature {
    /// An enabled zkEvm rollup replaces the block counter with the latest
    /// batch number.
    #[must_use]
    pub fn shows_latest_batch(&self) -> bool {
        self.is_enabled && self.kind == Some(RollupType::ZkEvm)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub rollup: RollupFeature,
}

/// Unit symbols printed next to amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyUnits {
    /// Native coin symbol.
    pub ether: String,
    /// Gas price unit.
    pub gwei: String,
    /// Symbol of the two-way-peg collateral.
    pub locked_collateral: String,
}

impl Default for CurrencyUnits {
    fn default() -> Self {
        Self {
            ether: "ETH".to_string(),
            gwei: "Gwei".to_string(),
            locked_collateral: "RBTC".to_string(),
        }
    }
}

// ============================================================================
// ExplorerConfig
// ============================================================================

/// Process-wide explorer configuration. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub features: FeaturesConfig,
    pub units: CurrencyUnits,
}

impl ExplorerConfig {
    /// Returns the default path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration, falling back to defaults on any failure.
    ///
    /// `path` overrides the default location.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        };

        match resolved.and_then(|path| Self::try_load(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Apply command-line overrides. A rollup type given on the command line
    /// also enables the rollup feature.
    pub fn apply_overrides(&mut self, api_url: Option<String>, rollup: Option<RollupType>) {
        if let Some(base_url) = api_url {
            self.api.base_url = base_url;
        }
        if let Some(kind) = rollup {
            self.features.rollup = RollupFeature {
                is_enabled: true,
                kind: Some(kind),
            };
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
