//! Helper functions shared by the dashboard widgets.

use ratatui::style::Color;

use crate::compose::{StatusIcon, TileKind};
use crate::theme::{ERROR_COLOR, PENDING_COLOR, SUCCESS_COLOR};

// ============================================================================
// Hash Formatting
// ============================================================================

/// Truncate a hash to fit in the given width.
///
/// If the hash is longer than `max_len`, it is shortened with an ellipsis in
/// the middle (e.g. `"0x1234...cdef"`).
///
/// # Examples
///
/// ```ignore
/// let hash = "0x5d2f8e0a1b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e";
/// assert_eq!(truncate_hash(hash, 13), "0x5d2...c8d9e");
/// ```
#[must_use]
pub fn truncate_hash(hash: &str, max_len: usize) -> String {
    let len = hash.chars().count();
    if len <= max_len {
        return hash.to_string();
    }

    if max_len < 7 {
        return hash.chars().take(max_len).collect();
    }

    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = hash.chars().take(prefix_len).collect();
    let suffix: String = hash.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Glyphs
// ============================================================================

/// Terminal glyph and color for a transaction status.
#[must_use]
pub const fn status_glyph(status: StatusIcon) -> (&'static str, Color) {
    match status {
        StatusIcon::Success => ("✓", SUCCESS_COLOR),
        StatusIcon::Error => ("✗", ERROR_COLOR),
        StatusIcon::Pending => ("◷", PENDING_COLOR),
    }
}

/// Terminal glyph standing in for a tile's icon.
#[must_use]
pub const fn tile_glyph(kind: TileKind) -> &'static str {
    match kind {
        TileKind::LatestBatch => "▤",
        TileKind::TotalBlocks => "▦",
        TileKind::AverageBlockTime => "◔",
        TileKind::TotalTransactions => "⇄",
        TileKind::WalletAddresses => "◉",
        TileKind::GasTracker => "≋",
        TileKind::LockedCollateral => "₿",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_hash() {
        let hash = "0x5d2f8e0a1b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e";
        let cases = [
            (hash, 13, "0x5d2...c8d9e"),
            (hash, 20, "0x5d2f8e0...6b7c8d9e"),
            ("0xabc", 20, "0xabc"),
            (hash, 5, "0x5d2"),
        ];

        for (input, max_len, expected) in cases {
            let truncated = truncate_hash(input, max_len);
            assert_eq!(truncated, expected, "max_len={max_len}");
            assert!(truncated.chars().count() <= max_len);
        }
    }

    #[test]
    fn test_status_glyphs_are_distinct() {
        let glyphs = [
            status_glyph(StatusIcon::Success),
            status_glyph(StatusIcon::Error),
            status_glyph(StatusIcon::Pending),
        ];
        assert_ne!(glyphs[0].0, glyphs[1].0);
        assert_ne!(glyphs[1].0, glyphs[2].0);
        assert_eq!(glyphs[0].1, SUCCESS_COLOR);
    }
}
