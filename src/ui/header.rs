//! Header rendering for scoutboard.
//!
//! Shows the app name, the explorer being watched and how fresh the stats are.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::time_ago;
use crate::state::DashboardView;
use crate::theme::{BORDER_STYLE, LINK_STYLE, MUTED_STYLE, TITLE_STYLE};

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let freshness = match view.stats_updated_at {
        Some(at) => format!("stats updated {}", time_ago(at, view.now)),
        None => "waiting for stats".to_string(),
    };

    let line = Line::from(vec![
        Span::styled("scoutboard", TITLE_STYLE),
        Span::styled("  ", MUTED_STYLE),
        Span::styled(view.explorer.clone(), LINK_STYLE),
        Span::styled(format!("  {freshness}"), MUTED_STYLE),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).border_style(BORDER_STYLE));
    frame.render_widget(header, area);
}
