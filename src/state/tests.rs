//! Tests for the state module.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::{mpsc, watch};

use super::{App, AppMessage};
use crate::client::ExplorerClient;
use crate::test_utils::{ConfigMother, StatsMother, TransactionMother};

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test App instance without network operations.
fn create_test_app() -> App {
    App::new(ConfigMother::with_toggles(true, true))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ========================================================================
// Key Handling
// ========================================================================

#[test]
fn test_quit_keys() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = create_test_app();
        app.handle_key_event(key(code));
        assert!(app.exit, "{code:?}");
    }
}

#[test]
fn test_refresh_key_notifies_polling_task() {
    let mut app = create_test_app();
    let mut refetch_rx = app.refetch_tx.subscribe();
    assert!(!refetch_rx.has_changed().unwrap());

    app.handle_key_event(key(KeyCode::Char('r')));

    assert!(refetch_rx.has_changed().unwrap());
    refetch_rx.mark_unchanged();
    assert!(!app.exit);
}

// ========================================================================
// Message Processing
// ========================================================================

#[test]
fn test_process_messages_updates_queries() {
    let mut app = create_test_app();
    assert!(!app.process_messages());

    app.message_tx
        .send(AppMessage::StatsUpdated(Box::new(StatsMother::scenario_a())))
        .unwrap();
    app.message_tx
        .send(AppMessage::TransactionsUpdated(vec![
            TransactionMother::transfer("0x1"),
            TransactionMother::transfer("0x2"),
        ]))
        .unwrap();

    assert!(app.process_messages());
    assert!(app.data.stats.is_fresh());
    assert_eq!(app.data.transactions.data.as_ref().map(Vec::len), Some(2));

    let view = app.dashboard().unwrap();
    assert_eq!(view.tiles.len(), 4);
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn test_clock_only_moves_labels() {
    let mut app = create_test_app();
    app.message_tx
        .send(AppMessage::TransactionsUpdated(vec![
            TransactionMother::transfer("0x1"),
        ]))
        .unwrap();
    app.process_messages();

    app.now = crate::domain::parse_anchor(Some("2024-06-01T12:00:00Z"));
    let before = app.dashboard().unwrap();
    app.now += chrono::Duration::seconds(30);
    let after = app.dashboard().unwrap();

    assert_ne!(before.rows[0].elapsed, after.rows[0].elapsed);
    assert_eq!(before.rows[0].value, after.rows[0].value);
    assert_eq!(before.tiles, after.tiles);
}

// ========================================================================
// Polling Task
// ========================================================================

#[tokio::test]
async fn test_polling_task_stops_when_app_is_gone() {
    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let (_refetch_tx, refetch_rx) = watch::channel(());
    drop(message_rx);

    // Nothing listens on the discard port, so every fetch fails fast.
    let client = ExplorerClient::new("http://127.0.0.1:9");
    let task = App::data_fetching_task(message_tx, refetch_rx, client, true);

    tokio::time::timeout(Duration::from_secs(10), task)
        .await
        .expect("polling task should stop once the receiver is dropped");
}

#[tokio::test]
async fn test_polling_task_stops_when_refetch_sender_is_dropped() {
    let (message_tx, _message_rx) = mpsc::unbounded_channel();
    let (refetch_tx, refetch_rx) = watch::channel(());
    drop(refetch_tx);

    let client = ExplorerClient::new("http://127.0.0.1:9");
    let task = App::data_fetching_task(message_tx, refetch_rx, client, false);

    tokio::time::timeout(Duration::from_secs(10), task)
        .await
        .expect("polling task should stop once the app drops its refetch sender");
}

#[tokio::test]
async fn test_fetch_once_marks_unreachable_explorer_as_failed() {
    let mut config = ConfigMother::with_toggles(true, true);
    config.api.base_url = "http://127.0.0.1:9".to_string();
    let mut app = App::new(config);

    tokio::time::timeout(Duration::from_secs(10), app.fetch_once())
        .await
        .expect("single fetch should finish");

    assert!(app.data.stats.is_error);
    assert!(app.data.transactions.is_error);
    assert!(!app.data.latest_batch.is_error);

    let view = app.dashboard().unwrap();
    assert!(view.tiles.is_empty());
    assert!(view.transactions_failed);
}
