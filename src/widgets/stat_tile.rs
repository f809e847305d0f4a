//! A single stat tile.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::helpers::tile_glyph;
use super::skeleton::slot_span;
use crate::compose::{GasTooltip, StatTile};
use crate::theme::{BORDER_STYLE, LINK_STYLE, MUTED_STYLE, TITLE_STYLE, VALUE_STYLE};

/// Width of a tile value skeleton.
const VALUE_SKELETON_WIDTH: usize = 12;

/// Renders one [`StatTile`] as a bordered card.
///
/// ```text
/// ╭ ▦ Total blocks ───────────╮
/// │ 1,000,000                 │
/// │ → /blocks                 │
/// ╰───────────────────────────╯
/// ```
#[derive(Debug)]
pub struct StatTileWidget<'a> {
    tile: &'a StatTile,
}

impl<'a> StatTileWidget<'a> {
    #[must_use]
    pub const fn new(tile: &'a StatTile) -> Self {
        Self { tile }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let tile = self.tile;
        let value_slot = tile.value_slot();
        let value = match value_slot.ready() {
            Some(text) => Span::styled(text.to_string(), VALUE_STYLE),
            None => slot_span(&value_slot, VALUE_SKELETON_WIDTH, VALUE_STYLE),
        };

        let mut lines = vec![Line::from(value)];
        if let Some(url) = &tile.url {
            lines.push(Line::from(Span::styled(format!("→ {url}"), LINK_STYLE)));
        }
        if let Some(tooltip) = tile.tooltip.as_ref().filter(|_| !tile.is_loading) {
            lines.push(Line::from(Span::styled(tooltip_summary(tooltip), MUTED_STYLE)));
        }
        lines
    }
}

/// One-line summary of the gas tiers, e.g. `"Slow 18 Gwei · Fast 25.5 Gwei"`.
fn tooltip_summary(tooltip: &GasTooltip) -> String {
    tooltip
        .tiers
        .iter()
        .map(|tier| format!("{} {}", tier.label, tier.value))
        .collect::<Vec<_>>()
        .join(" · ")
}

impl Widget for StatTileWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} {} ", tile_glyph(self.tile.kind), self.tile.title);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(BORDER_STYLE)
            .title(Span::styled(title, TITLE_STYLE));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
