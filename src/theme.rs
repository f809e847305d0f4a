//! Theme and styling constants for the scoutboard TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - titles and links.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Successful transaction glyph.
pub const SUCCESS_COLOR: Color = Color::Rgb(50, 205, 50);

/// Pending transaction glyph.
pub const PENDING_COLOR: Color = Color::Rgb(255, 165, 0);

/// Failed transaction glyph and error text.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Skeleton placeholder color.
pub const SKELETON_COLOR: Color = Color::DarkGray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Section and tile title style.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Prominent values (tile values, hashes).
pub const VALUE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Link targets.
pub const LINK_STYLE: Style = Style::new().fg(Color::Blue);

/// Secondary text.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);
