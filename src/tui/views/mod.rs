// Views module - screen-level rendering logic
//
// The editor has a single screen:
// - Settings: sidebar plus the active section's fields (or About)
//
// Modals and the toast are drawn on top of it.

mod about;
mod modal;
mod settings;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    // Shell: title, content, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    settings::render(f, chunks[1], app);
    components::render_status(f, chunks[2], app);

    // Render modal overlay (on top of everything)
    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    // Clear expired toast after render
    app.clear_expired_toast();
}
