// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Prompt editor: multi-line system prompt editing

use crate::settings::FeatureKey;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::PromptEditor(key) => render_prompt_editor(f, app, *key),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("1-6", "Jump to section"),
        kb("Tab", "Switch sidebar / fields"),
        kb("↑/↓, j/k", "Move selection"),
        kb("Home/End", "First / last field"),
        Line::raw(""),
        Line::from(Span::styled("  Editing", header_style)),
        kb("Enter/Space", "Toggle, edit or run"),
        kb("←/→", "Cycle option / step"),
        kb("Shift+←/→", "Step by 10"),
        kb("Enter/Esc", "Finish text edit"),
        kb("Ctrl+U", "Clear text field"),
        Line::raw(""),
        Line::from(Span::styled("  Prompt Editor", header_style)),
        kb("Arrows", "Move cursor"),
        kb("Ctrl+S", "Save prompt"),
        kb("Esc", "Discard changes"),
        kb("Ctrl+Y", "Copy prompt"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.clone(), key_style),
        ]),
    ]);

    // Calculate modal size
    let width = 44;
    let height = 30;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the prompt editor overlay
///
/// Shows the session buffer (never the stored prompt) and places the
/// terminal cursor at the edit position. Long buffers scroll to keep the
/// cursor line visible.
fn render_prompt_editor(f: &mut Frame, app: &App, key: FeatureKey) {
    let screen = f.area();
    let width = (screen.width * 4 / 5).max(40);
    let height = (screen.height * 3 / 4).max(10);
    let area = centered_rect(width, height, screen);

    let buffer = app.prompt.buffer().unwrap_or_default();
    let (cursor_line, _) = app.prompt.cursor_line_col().unwrap_or((0, 0));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(format!(
            " System Prompt: {} ",
            app.settings.features[key].label
        ))
        .title_bottom(Line::from(" Ctrl+S save · Esc cancel · Ctrl+Y copy ").centered());
    let inner = block.inner(area);

    let viewport = inner.height as usize;
    let scroll = if viewport > 0 && cursor_line >= viewport {
        cursor_line + 1 - viewport
    } else {
        0
    };

    let lines: Vec<Line> = buffer
        .split('\n')
        .map(|line| Line::raw(line.replace('\t', "    ")))
        .collect();

    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        )
        .scroll((scroll as u16, 0))
        .block(block);
    f.render_widget(paragraph, area);

    // Cursor column in terminal cells, tabs expanded like the text above
    if let Some(cursor) = app.prompt.cursor() {
        let line_start = buffer[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = buffer[line_start..cursor].replace('\t', "    ").width() as u16;
        let row = cursor_line.saturating_sub(scroll) as u16;
        let x = (inner.x + col).min(inner.right().saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y + row));
    }
}
