//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.
//! Destructive notifications get the error color.

use crate::settings::notification::Notification;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A toast notification that auto-dismisses
pub struct Toast {
    pub notification: Notification,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = self.notification.title.as_str();
        let description = self.notification.description.as_str();

        // Widest line plus padding and borders
        let content_width = title.width().max(description.width()) as u16;
        let width = (content_width + 4).min(area.width.saturating_sub(4)).max(10);
        let height = 4; // title + description + 2 for borders

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height.min(area.height));

        let accent = if self.notification.is_destructive() {
            theme.error
        } else {
            theme.success
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", description),
                Style::default().fg(theme.foreground),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
