// Components module - reusable UI building blocks
//
// Shell components are rendered around every section:
// - Title bar: App name, active section, pending-call spinner
// - Status bar: Focus hints and session facts
//
// Interactive components own their own state:
// - Settings panel: sidebar, focus and field selection
// - Text input: inline single-line editing
// - Toast: auto-dismissing notifications

pub mod settings_panel;
pub mod status_bar;
pub mod text_input;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
