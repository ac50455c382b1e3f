// Title bar component
//
// Renders the app title with the active section and a spinner while a
// connection test or feedback submission is in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let busy_indicator = if app.is_busy() {
        let what = if app.connection.is_pending() {
            "testing connection"
        } else {
            "sending feedback"
        };
        format!("  {} {}", app.spinner_char(), what)
    } else {
        String::new()
    };

    let title_text = format!(
        " ⚙ Redmine Assist Settings ──── {}{}",
        app.panel.navigator.active_label(),
        busy_indicator
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
