//! Widget components for the scoutboard TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Hash truncation and glyph lookup
//! - [`skeleton`]: Fixed-width loading placeholders
//! - [`stat_tile`]: A single stat card
//! - [`stats_grid`]: Two-column tile grid honoring the span hint
//! - [`tx_row`]: One latest-transactions row

pub mod helpers;
pub mod skeleton;
pub mod stat_tile;
pub mod stats_grid;
pub mod tx_row;

pub use stats_grid::{StatsGrid, grid_height};
pub use tx_row::TxRowWidget;
