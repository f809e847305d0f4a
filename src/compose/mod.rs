//! View-model composers for the home dashboard.
//!
//! Composers are pure: raw snapshot in, display fields out. They never
//! touch the network or the terminal, so they can be re-run on every tick
//! and every fetch completion.
//!
//! - [`stats`] - Summary tiles and the two-column span hint
//! - [`tx_row`] - Rows of the latest-transactions list
//! - [`stability_fee`] - Fees paid in a stability token
//! - [`slot`] - Skeleton-or-value field wrapper

pub mod slot;
pub mod stability_fee;
pub mod stats;
pub mod tx_row;

pub use slot::Slot;
pub use stats::{GasTooltip, StatTile, StatsComposer, TileKind, TileSpan};
pub use tx_row::{FeeLabel, StatusIcon, TxRowComposer, TxRowViewModel};
