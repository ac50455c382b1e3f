//! Single-line text input
//!
//! Used for inline editing of text fields (API URL, API key, custom model,
//! feedback message and contact). The cursor is a char index, not a byte
//! offset, so multibyte input edits cleanly.

use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable single-line buffer with a cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars
    cursor: usize,
    /// Show bullets instead of the value
    masked: bool,
}

impl TextInput {
    /// Start editing `value` with the cursor at the end
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            masked: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Text to render (bullets when masked)
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Terminal column of the cursor within `display()`
    pub fn cursor_column(&self) -> u16 {
        let shown = self.display();
        let prefix: String = shown.chars().take(self.cursor).collect();
        prefix.width() as u16
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

impl Interactive for TextInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            // Ctrl+U clears the line, like a shell prompt
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                Handled::Yes
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Handled::No,
            KeyCode::Char(c) => {
                self.insert(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.backspace();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.delete();
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type to edit  Enter/Esc:done  Ctrl+U:clear")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = TextInput::new("gpt");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "xgpt");
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("日本");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "本");
        input.handle_key(key(KeyCode::End));
        input.handle_key(key(KeyCode::Char('語')));
        assert_eq!(input.value(), "本語");
        // Wide chars take two columns each
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = TextInput::new("30000");
        input.handle_key(key(KeyCode::Home));
        input.set_value("1440");
        assert_eq!(input.value(), "1440");
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_masked_display() {
        let input = TextInput::new("secret").masked();
        assert_eq!(input.display(), "••••••");
        assert_eq!(input.value(), "secret");
    }

    #[test]
    fn test_ctrl_u_clears_and_other_ctrl_bubbles() {
        let mut input = TextInput::new("abc");
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Handled::No
        );
        input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_edges_are_safe() {
        let mut input = TextInput::new("");
        input.handle_key(key(KeyCode::Backspace));
        input.handle_key(key(KeyCode::Delete));
        input.handle_key(key(KeyCode::Left));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor_column(), 0);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), Handled::No);
    }
}
