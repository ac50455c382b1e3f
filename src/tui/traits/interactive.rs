//! Keyboard handling for focusable widgets
//!
//! The settings panel and the inline text input both implement
//! [`Interactive`]. App decides which one is focused and falls back to its
//! own field handling when the widget passes on a key.

use crossterm::event::KeyEvent;

/// Whether a widget consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    /// Caller should try the next layer
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// A widget that reacts to keys while it has focus
///
/// ```text
/// key ─► modal ─► inline edit ─► global (q ? 1-9) ─► panel ─► field action
/// ```
///
/// Only the last two layers go through this trait; modal and global keys
/// are resolved in `tui::handle_key_event`.
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Status bar hint shown while this widget has focus
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
