//! One row of the latest-transactions list.
//!
//! ```text
//! ✓ 0x5d2f8e0...6b7c8d9e  12s ago    Value ETH 1.50000  Fee ETH 0.00042
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::helpers::{status_glyph, truncate_hash};
use super::skeleton::{fit, skeleton, slot_span};
use crate::compose::{FeeLabel, Slot, TxRowViewModel};
use crate::constants::HASH_WIDTH;
use crate::theme::{LINK_STYLE, MUTED_STYLE, VALUE_STYLE};

const ELAPSED_WIDTH: usize = 9;
const AMOUNT_WIDTH: usize = 18;
const FEE_WIDTH: usize = 28;

/// Renders a [`TxRowViewModel`] on a single line.
#[derive(Debug)]
pub struct TxRowWidget<'a> {
    row: &'a TxRowViewModel,
}

impl<'a> TxRowWidget<'a> {
    #[must_use]
    pub const fn new(row: &'a TxRowViewModel) -> Self {
        Self { row }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let row = self.row;
        let hash_width = usize::from(HASH_WIDTH);

        let status = match row.status.ready() {
            Some(&icon) => {
                let (glyph, color) = status_glyph(icon);
                Span::styled(glyph, Style::new().fg(color))
            }
            None => skeleton(1),
        };

        let hash = match row.hash.ready() {
            Some(hash) => Span::styled(fit(&truncate_hash(hash, hash_width), hash_width), LINK_STYLE),
            None => skeleton(hash_width),
        };

        let mut spans = vec![
            status,
            Span::raw(" "),
            hash,
            Span::raw("  "),
            slot_span(&row.elapsed, ELAPSED_WIDTH, MUTED_STYLE),
        ];

        spans.push(Span::styled("  Value ", MUTED_STYLE));
        spans.push(slot_span(&row.value, AMOUNT_WIDTH, VALUE_STYLE));

        if let Some(fee) = &row.fee {
            spans.push(Span::styled("  Fee ", MUTED_STYLE));
            spans.push(fee_span(fee));
        }

        spans
    }
}

fn fee_span(fee: &Slot<FeeLabel>) -> Span<'static> {
    match fee.ready() {
        None => skeleton(FEE_WIDTH),
        Some(FeeLabel::Plain { text }) => Span::styled(fit(text, FEE_WIDTH), VALUE_STYLE),
        Some(FeeLabel::Stability(view)) => {
            Span::styled(fit(&view.to_string(), FEE_WIDTH), VALUE_STYLE)
        }
    }
}

impl Widget for TxRowWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans())).render(area, buf);
    }
}
