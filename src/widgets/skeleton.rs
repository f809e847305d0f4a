//! Skeleton placeholders for loading slots.
//!
//! A slot renders at a fixed width whether it holds a skeleton or a value,
//! so content arriving never shifts the rest of the line.

use ratatui::{style::Style, text::Span};

use crate::compose::Slot;
use crate::theme::SKELETON_COLOR;

const SKELETON_CHAR: char = '░';

/// A run of `width` skeleton cells.
#[must_use]
pub fn skeleton(width: usize) -> Span<'static> {
    Span::styled(
        SKELETON_CHAR.to_string().repeat(width),
        Style::new().fg(SKELETON_COLOR),
    )
}

/// Render a text slot padded (or cut) to exactly `width` cells.
#[must_use]
pub fn slot_span<T: AsRef<str>>(slot: &Slot<T>, width: usize, style: Style) -> Span<'static> {
    match slot.ready() {
        None => skeleton(width),
        Some(text) => Span::styled(fit(text.as_ref(), width), style),
    }
}

/// Pad with spaces or truncate so the text covers exactly `width` chars.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}
