// About section
//
// Version, runtime config facts and the tail of the in-memory log buffer.

use crate::config::{Config, APP_NAME, VERSION};
use crate::logging::LogLevel;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the About pane: facts on top, recent logs below
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(4)])
        .split(area);

    render_facts(f, chunks[0], app);
    render_logs(f, chunks[1], app);
}

fn render_facts(f: &mut Frame, area: Rect, app: &App) {
    let label_style = Style::default().fg(app.theme.muted);
    let value_style = Style::default().fg(app.theme.foreground);

    let row = |label: &str, value: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<14}", label), label_style),
            Span::styled(value, value_style),
        ])
    };

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {} v{}", APP_NAME, VERSION),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  AI assist settings for Redmine",
            label_style,
        )),
        Line::raw(""),
        row("Theme", app.theme.name.clone()),
        row("Themes", Theme::list_available().join(", ")),
        row("Endpoint", app.config.endpoint.mode.as_str().to_string()),
        row("Config file", config_path),
        row("Log level", app.config.logging.level.clone()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" About "),
    );
    f.render_widget(paragraph, area);
}

fn render_logs(f: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => app.theme.error,
                LogLevel::Warn => app.theme.pending,
                LogLevel::Info => app.theme.success,
                LogLevel::Debug | LogLevel::Trace => app.theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(
                    format!("{}: ", short_target(&entry.target)),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(app.theme.foreground)),
            ])
        })
        .collect();

    let title = format!(" Recent Logs ({}) ", app.log_buffer.len());
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(title),
    );
    f.render_widget(paragraph, area);
}

/// Module path without the crate prefix ("settings::prompt")
fn short_target(target: &str) -> &str {
    target
        .strip_prefix("redmine_assist::")
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_target_strips_crate() {
        assert_eq!(short_target("redmine_assist::settings::prompt"), "settings::prompt");
        assert_eq!(short_target("redmine_assist"), "redmine_assist");
        assert_eq!(short_target("reqwest::connect"), "reqwest::connect");
    }
}
