// Status bar component
//
// Renders the focus hint on the left and session facts on the right:
// endpoint mode, language, enabled feature count.

use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar at the bottom of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let enabled = app
        .settings
        .features
        .iter()
        .filter(|(_, feature)| feature.enabled)
        .count();

    let facts = format!(
        "{} │ {} │ {}/{} features ",
        app.config.endpoint.mode.as_str(),
        app.settings.language.code(),
        enabled,
        app.settings.features.len()
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(facts.chars().count() as u16)])
        .split(area);

    let style = Style::default().fg(app.theme.status_bar);
    let hint = format!(" {}", app.focus_hint().unwrap_or_default());

    f.render_widget(
        Paragraph::new(hint)
            .style(style)
            .block(Block::default().borders(Borders::TOP)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(facts)
            .style(style)
            .block(Block::default().borders(Borders::TOP)),
        chunks[1],
    );
}
