//! Two-column grid of stat tiles.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use super::stat_tile::StatTileWidget;
use crate::compose::{StatTile, TileSpan};
use crate::constants::TILE_HEIGHT;

/// Group tile indices into grid rows. A double-span tile always takes a row
/// to itself.
#[must_use]
pub fn grid_rows(tiles: &[StatTile]) -> Vec<Vec<usize>> {
    let mut rows = Vec::new();
    let mut current = Vec::with_capacity(2);

    for (idx, tile) in tiles.iter().enumerate() {
        if tile.span == TileSpan::Double {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            rows.push(vec![idx]);
            continue;
        }

        current.push(idx);
        if current.len() == 2 {
            rows.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Height the grid needs for `tiles`.
#[must_use]
pub fn grid_height(tiles: &[StatTile]) -> u16 {
    u16::try_from(grid_rows(tiles).len())
        .unwrap_or(u16::MAX)
        .saturating_mul(TILE_HEIGHT)
}

/// Renders tiles two per row.
#[derive(Debug)]
pub struct StatsGrid<'a> {
    tiles: &'a [StatTile],
}

impl<'a> StatsGrid<'a> {
    #[must_use]
    pub const fn new(tiles: &'a [StatTile]) -> Self {
        Self { tiles }
    }
}

impl Widget for StatsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = grid_rows(self.tiles);
        let row_areas = Layout::vertical(rows.iter().map(|_| Constraint::Length(TILE_HEIGHT)))
            .split(area);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            let cells = if row.len() == 1 && self.tiles[row[0]].span == TileSpan::Double {
                Layout::horizontal([Constraint::Percentage(100)]).split(*row_area)
            } else {
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(*row_area)
            };

            for (&idx, cell) in row.iter().zip(cells.iter()) {
                StatTileWidget::new(&self.tiles[idx]).render(*cell, buf);
            }
        }
    }
}
