//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::theme::MUTED_STYLE;

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("q:Quit  r:Refresh")
        .style(MUTED_STYLE)
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
