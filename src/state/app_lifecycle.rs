//! Application lifecycle management.
//!
//! - `new()` - Creates the app with placeholder data
//! - `run()` - Main event loop and relative-time ticker
//! - `fetch_once()` - Single fetch for the snapshot command
//! - Background polling task

use std::time::Instant;

use chrono::Utc;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;

use super::{App, AppMessage, DataState};
use crate::client::ExplorerClient;
use crate::commands::{AppCommand, map_key};
use crate::config::ExplorerConfig;
use crate::constants::{
    BATCH_POLL_INTERVAL, CLOCK_TICK, INPUT_POLL, STATS_POLL_INTERVAL, TXS_POLL_INTERVAL,
};
use crate::domain::ScoutError;
use crate::tui::Tui;
use crate::ui;

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance showing placeholder data.
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (refetch_tx, _refetch_rx) = watch::channel(());
        let client = ExplorerClient::new(config.api.base_url.as_str());

        Self {
            data: DataState::new(&config.features.rollup),
            now: Utc::now(),
            exit: false,
            message_tx,
            message_rx,
            refetch_tx,
            client,
            config,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail or the explorer hands out
    /// amounts the formatter cannot read.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();

        let mut last_tick = Instant::now();
        let mut labels_due: Option<Instant> = None;
        let mut needs_redraw = true;

        while !self.exit {
            needs_redraw |= self.process_messages();

            if event::poll(INPUT_POLL)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        needs_redraw = true;
                    }
                    Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= CLOCK_TICK {
                self.now = Utc::now();
                last_tick = Instant::now();
                needs_redraw |= labels_due.is_some_and(|due| last_tick >= due);
            }

            if needs_redraw && !self.exit {
                let view = self.dashboard().map_err(ScoutError::into_report)?;
                labels_due = view
                    .next_label_change
                    .and_then(|wait| Instant::now().checked_add(wait));
                terminal.draw(|frame| ui::render(&view, frame))?;
                needs_redraw = false;
            }
        }

        Ok(())
    }

    /// Fetch every enabled endpoint once and fold the results in.
    pub async fn fetch_once(&mut self) {
        let poll_batch = self.data.latest_batch.enabled;
        let client = &self.client;
        let message_tx = &self.message_tx;

        let _ = tokio::join!(
            fetch_stats(client, message_tx),
            async { !poll_batch || fetch_latest_batch(client, message_tx).await },
            fetch_transactions(client, message_tx),
        );

        self.process_messages();
    }

    /// Apply a key press.
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match map_key(key) {
            AppCommand::Quit => self.exit = true,
            AppCommand::Refresh => {
                tracing::info!("Manual refetch requested");
                self.refetch_tx.send_replace(());
            }
            AppCommand::Noop => {}
        }
    }

    /// Drain pending background messages. Returns whether anything changed.
    pub(crate) fn process_messages(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.message_rx.try_recv() {
            self.data.apply(message, Utc::now());
            changed = true;
        }
        changed
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    pub(super) fn start_background_tasks(&self) {
        let message_tx = self.message_tx.clone();
        let refetch_rx = self.refetch_tx.subscribe();
        let client = self.client.clone();
        let poll_batch = self.data.latest_batch.enabled;

        tokio::spawn(async move {
            Self::data_fetching_task(message_tx, refetch_rx, client, poll_batch).await;
        });
    }

    /// Poll every endpoint on its own interval until the app goes away.
    ///
    /// Every interval fires immediately on its first tick, which doubles as
    /// the initial fetch.
    pub(super) async fn data_fetching_task(
        message_tx: mpsc::UnboundedSender<AppMessage>,
        mut refetch_rx: watch::Receiver<()>,
        client: ExplorerClient,
        poll_batch: bool,
    ) {
        let mut stats_interval = interval(STATS_POLL_INTERVAL);
        let mut batch_interval = interval(BATCH_POLL_INTERVAL);
        let mut transaction_interval = interval(TXS_POLL_INTERVAL);

        loop {
            let delivered = tokio::select! {
                changed = refetch_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let (stats, batch, txs) = tokio::join!(
                        fetch_stats(&client, &message_tx),
                        async { !poll_batch || fetch_latest_batch(&client, &message_tx).await },
                        fetch_transactions(&client, &message_tx),
                    );
                    stats && batch && txs
                }

                _ = stats_interval.tick() => fetch_stats(&client, &message_tx).await,

                _ = batch_interval.tick(), if poll_batch => {
                    fetch_latest_batch(&client, &message_tx).await
                }

                _ = transaction_interval.tick() => fetch_transactions(&client, &message_tx).await,
            };

            if !delivered {
                break;
            }
        }

        tracing::debug!("Polling task stopped");
    }
}

// ============================================================================
// Fetch Helpers
// ============================================================================

/// Send the outcome of one fetch. Returns `false` once the app is gone.
fn deliver<T>(
    message_tx: &mpsc::UnboundedSender<AppMessage>,
    what: &str,
    result: std::result::Result<T, ScoutError>,
    on_success: impl FnOnce(T) -> AppMessage,
    on_failure: impl FnOnce(String) -> AppMessage,
) -> bool {
    let message = match result {
        Ok(data) => on_success(data),
        Err(err) => {
            tracing::warn!("{what} fetch failed: {err}");
            on_failure(err.to_string())
        }
    };
    message_tx.send(message).is_ok()
}

async fn fetch_stats(
    client: &ExplorerClient,
    message_tx: &mpsc::UnboundedSender<AppMessage>,
) -> bool {
    deliver(
        message_tx,
        "Stats",
        client.get_stats().await,
        |stats| AppMessage::StatsUpdated(Box::new(stats)),
        AppMessage::StatsFailed,
    )
}

async fn fetch_latest_batch(
    client: &ExplorerClient,
    message_tx: &mpsc::UnboundedSender<AppMessage>,
) -> bool {
    deliver(
        message_tx,
        "Latest batch",
        client.get_latest_batch_number().await,
        AppMessage::LatestBatchUpdated,
        AppMessage::LatestBatchFailed,
    )
}

async fn fetch_transactions(
    client: &ExplorerClient,
    message_tx: &mpsc::UnboundedSender<AppMessage>,
) -> bool {
    deliver(
        message_tx,
        "Transactions",
        client.get_latest_transactions().await,
        AppMessage::TransactionsUpdated,
        AppMessage::TransactionsFailed,
    )
}
