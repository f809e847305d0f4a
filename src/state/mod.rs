//! State management for the scoutboard TUI.
//!
//! - [`DataState`] - One query state per polled endpoint
//! - [`DashboardView`] - Composed tiles and rows for one frame
//! - [`placeholders`] - Skeleton data shown before the first responses
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  AppMessage   ┌───────────────┐  compose  ┌───────────────┐
//! │ polling task     │ ────────────▶ │ App.data      │ ────────▶ │ DashboardView │
//! │ (tokio intervals)│               │ (QueryState)  │   + now   │ → ui::render  │
//! └──────────────────┘               └───────────────┘           └───────────────┘
//! ```

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};

use crate::client::ExplorerClient;
use crate::config::ExplorerConfig;
use crate::domain::{AggregateStats, Transaction};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod dashboard;
pub mod data;
pub mod placeholders;

// ============================================================================
// Re-exports
// ============================================================================

pub use dashboard::DashboardView;
pub use data::DataState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from the polling task to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    StatsUpdated(Box<AggregateStats>),
    StatsFailed(String),
    LatestBatchUpdated(u64),
    LatestBatchFailed(String),
    TransactionsUpdated(Vec<Transaction>),
    TransactionsFailed(String),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Read-only for the lifetime of the app.
    pub config: ExplorerConfig,

    pub data: DataState,

    /// Clock value elapsed labels are computed for. Advanced by the run
    /// loop's own ticker, never by fetches.
    pub now: DateTime<Utc>,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    /// Sender for app messages (cloned for the polling task).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Bumped to make the polling task refetch everything now.
    pub(crate) refetch_tx: watch::Sender<()>,

    pub(crate) client: ExplorerClient,
}

impl App {
    /// Compose the dashboard for the current data and clock.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors from the composers.
    pub fn dashboard(&self) -> Result<DashboardView, crate::domain::ScoutError> {
        DashboardView::compose(&self.config, &self.data, self.now)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
