use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod compose;
mod config;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::compose::{FeeLabel, StatTile, TxRowViewModel};
use crate::config::{ExplorerConfig, RollupType};
use crate::domain::ScoutError;
use crate::state::{App, DashboardView};

// scoutboard version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "SCOUTBOARD_LOG";

/// scoutboard - Terminal home dashboard for Blockscout explorers
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Explorer API base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat the explorer as a rollup of this type
    #[arg(long, global = true, value_enum)]
    rollup: Option<RollupType>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the dashboard once and print it
    Snapshot {
        /// Print the composed view models as JSON
        #[arg(long)]
        json: bool,
    },
    /// Display version
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let mut config = ExplorerConfig::load(cli.config.as_deref());
    config.apply_overrides(cli.api_url.clone(), cli.rollup);
    tracing::info!("Watching {}", config.api.base_url);

    if handle_cli_commands(&cli, &config).await? {
        return Ok(());
    }

    let mut terminal = tui::init()?;
    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Log to a file under the cache directory; the terminal belongs to the TUI.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("scoutboard")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("scoutboard.log")) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Handles CLI subcommands.
/// Returns Ok(true) if a command was handled and the app should exit, Ok(false) otherwise.
async fn handle_cli_commands(cli: &Cli, config: &ExplorerConfig) -> Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Commands::Version => {
            println!("scoutboard v{VERSION}");
        }
        Commands::Snapshot { json } => {
            let mut app = App::new(config.clone());
            app.fetch_once().await;
            let view = app.dashboard().map_err(ScoutError::into_report)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", snapshot_text(&view));
            }
        }
    }

    Ok(true)
}

// ============================================================================
// Plain-text Snapshot
// ============================================================================

fn snapshot_text(view: &DashboardView) -> String {
    let mut out = format!("scoutboard  {}\n\n", view.explorer);

    for tile in &view.tiles {
        out.push_str(&tile_line(tile));
        out.push('\n');
    }

    out.push_str("\nLatest transactions\n");
    if view.transactions_failed {
        out.push_str("  Unable to load transactions\n");
    }
    for row in &view.rows {
        out.push_str(&row_line(row));
        out.push('\n');
    }
    out
}

fn tile_line(tile: &StatTile) -> String {
    let value = tile.value_slot().ready().copied().unwrap_or("…");
    match &tile.url {
        Some(url) => format!("  {:<24} {value}  ({url})", tile.title),
        None => format!("  {:<24} {value}", tile.title),
    }
}

fn row_line(row: &TxRowViewModel) -> String {
    let mut line = format!(
        "  {:<8} {}  {}  value {}",
        row.status.ready().map_or("…", |status| status.label()),
        row.hash.ready().map_or("…", String::as_str),
        row.elapsed.ready().map_or("…", String::as_str),
        row.value.ready().map_or("…", String::as_str),
    );

    if let Some(fee) = &row.fee {
        line.push_str("  fee ");
        match fee.ready() {
            Some(FeeLabel::Plain { text }) => line.push_str(text),
            Some(FeeLabel::Stability(view)) => line.push_str(&view.to_string()),
            None => line.push('…'),
        }
    }
    line
}
