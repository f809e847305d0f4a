//! UI rendering module for the scoutboard TUI.
//!
//! - `header` - Explorer and freshness line
//! - `footer` - Keyboard shortcuts

pub mod footer;
pub mod header;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::constants::{HEADER_HEIGHT, TX_ROW_HEIGHT};
use crate::state::DashboardView;
use crate::theme::{BORDER_STYLE, ERROR_COLOR, MUTED_STYLE, TITLE_STYLE};
use crate::widgets::{StatsGrid, TxRowWidget, grid_height};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draw one frame: header, stats grid, latest transactions, footer.
///
/// Nothing here computes display values; everything comes precomposed in
/// `view`.
pub fn render(view: &DashboardView, frame: &mut Frame) {
    let [header_area, stats_area, txs_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(grid_height(&view.tiles)),
        Constraint::Min(TX_ROW_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    header::render(frame, header_area, view);
    frame.render_widget(StatsGrid::new(&view.tiles), stats_area);
    render_transactions(frame, txs_area, view);
    footer::render(frame, footer_area);
}

fn render_transactions(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(BORDER_STYLE)
        .title(Span::styled(" Latest transactions ", TITLE_STYLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.transactions_failed {
        let message = Paragraph::new("Unable to load transactions")
            .style(MUTED_STYLE.fg(ERROR_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let row_areas = Layout::vertical(view.rows.iter().map(|_| Constraint::Length(1))).split(inner);
    for (row, row_area) in view.rows.iter().zip(row_areas.iter()) {
        if row_area.height == 0 {
            break;
        }
        frame.render_widget(TxRowWidget::new(row), *row_area);
    }
}
