//! Prompt sub-editor session
//!
//! Long system prompts are edited in a modal with explicit commit
//! semantics. While the session is open, every keystroke lands in the
//! session buffer; `Configuration` only changes on `save`.
//!
//! ```text
//!            open(key)                 save → write prompt, notify
//!   Closed ────────────▶ Open{key, buf} ─────────────────────────▶ Closed
//!                              │
//!                              └── cancel → discard buffer ──────▶ Closed
//! ```

use super::notification::Notification;
use super::{Configuration, FeatureKey};

/// Editing session for one feature's system prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PromptEditSession {
    #[default]
    Closed,
    Open {
        target: FeatureKey,
        buffer: String,
        /// Cursor position as a byte offset into `buffer`
        cursor: usize,
    },
}

impl PromptEditSession {
    /// Open (or re-open) the session seeded from the stored prompt
    pub fn open(&mut self, key: FeatureKey, config: &Configuration) {
        let buffer = config.features[key].system_prompt.clone();
        let cursor = buffer.len();
        tracing::debug!("Prompt editor opened for {}", key);
        *self = PromptEditSession::Open {
            target: key,
            buffer,
            cursor,
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PromptEditSession::Open { .. })
    }

    pub fn target(&self) -> Option<FeatureKey> {
        match self {
            PromptEditSession::Open { target, .. } => Some(*target),
            PromptEditSession::Closed => None,
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            PromptEditSession::Open { buffer, .. } => Some(buffer),
            PromptEditSession::Closed => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            PromptEditSession::Open { cursor, .. } => Some(*cursor),
            PromptEditSession::Closed => None,
        }
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            if let Some((idx, _)) = buffer[..*cursor].char_indices().next_back() {
                buffer.remove(idx);
                *cursor = idx;
            }
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            if *cursor < buffer.len() {
                buffer.remove(*cursor);
            }
        }
    }

    pub fn move_left(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            if let Some((idx, _)) = buffer[..*cursor].char_indices().next_back() {
                *cursor = idx;
            }
        }
    }

    pub fn move_right(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            if let Some(c) = buffer[*cursor..].chars().next() {
                *cursor += c.len_utf8();
            }
        }
    }

    /// Jump to the start of the current line
    pub fn move_line_start(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            *cursor = line_start(buffer, *cursor);
        }
    }

    /// Jump to the end of the current line
    pub fn move_line_end(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            *cursor = buffer[*cursor..]
                .find('\n')
                .map(|i| *cursor + i)
                .unwrap_or(buffer.len());
        }
    }

    /// Move to the previous line, keeping the column where it fits
    pub fn move_up(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            let start = line_start(buffer, *cursor);
            if start == 0 {
                return;
            }
            let col = buffer[start..*cursor].chars().count();
            let prev_end = start - 1;
            let prev_start = line_start(buffer, prev_end);
            *cursor = column_offset(buffer, prev_start, prev_end, col);
        }
    }

    /// Move to the next line, keeping the column where it fits
    pub fn move_down(&mut self) {
        if let PromptEditSession::Open { buffer, cursor, .. } = self {
            let Some(newline) = buffer[*cursor..].find('\n') else {
                return;
            };
            let col = buffer[line_start(buffer, *cursor)..*cursor].chars().count();
            let next_start = *cursor + newline + 1;
            let next_end = buffer[next_start..]
                .find('\n')
                .map(|i| next_start + i)
                .unwrap_or(buffer.len());
            *cursor = column_offset(buffer, next_start, next_end, col);
        }
    }

    /// (line, column) of the cursor, both in characters
    pub fn cursor_line_col(&self) -> Option<(usize, usize)> {
        let PromptEditSession::Open { buffer, cursor, .. } = self else {
            return None;
        };
        let before = &buffer[..*cursor];
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|s| s.chars().count())
            .unwrap_or(0);
        Some((line, col))
    }

    /// Commit the buffer to `config` and close
    ///
    /// Returns the "saved" notification, or `None` if nothing was open.
    pub fn save(&mut self, config: &mut Configuration) -> Option<Notification> {
        let PromptEditSession::Open { target, buffer, .. } = std::mem::take(self) else {
            return None;
        };

        let label = config.features[target].label;
        config.set_feature_system_prompt(target, buffer);
        tracing::info!("System prompt saved for {}", target);

        Some(Notification::info(
            "Prompt Saved",
            format!("System prompt for {} has been updated.", label),
        ))
    }

    /// Discard the buffer and close without touching `Configuration`
    pub fn cancel(&mut self) {
        if let Some(target) = self.target() {
            tracing::debug!("Prompt edit cancelled for {}", target);
        }
        *self = PromptEditSession::Closed;
    }
}

/// Byte offset where the line containing `at` begins
fn line_start(buffer: &str, at: usize) -> usize {
    buffer[..at].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of character column `col` within `buffer[start..end]`,
/// clamped to the line end
fn column_offset(buffer: &str, start: usize, end: usize, col: usize) -> usize {
    buffer[start..end]
        .char_indices()
        .nth(col)
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    impl PromptEditSession {
        /// Replace the whole buffer and put the cursor at its end
        fn set_buffer(&mut self, value: &str) {
            if let PromptEditSession::Open { buffer, cursor, .. } = self {
                *buffer = value.to_string();
                *cursor = buffer.len();
            }
        }
    }

    #[test]
    fn test_open_seeds_buffer() {
        let config = Configuration::default();
        let mut session = PromptEditSession::default();
        assert!(!session.is_open());

        session.open(FeatureKey::NotePolish, &config);
        assert_eq!(session.target(), Some(FeatureKey::NotePolish));
        assert_eq!(
            session.buffer(),
            Some(config.features[FeatureKey::NotePolish].system_prompt.as_str())
        );
    }

    #[test]
    fn test_cancel_leaves_config_unchanged() {
        let config = Configuration::default();
        let original = config.clone();
        let mut session = PromptEditSession::default();

        session.open(FeatureKey::EditorAssist, &config);
        session.set_buffer("something else entirely");
        session.insert_char('!');
        assert_eq!(config, original);

        session.cancel();
        assert!(!session.is_open());
        assert_eq!(config, original);
    }

    #[test]
    fn test_save_commits_and_closes() {
        let mut config = Configuration::default();
        let mut session = PromptEditSession::default();

        session.open(FeatureKey::WeeklyReport, &config);
        session.set_buffer("Summarize in three bullets.");

        let note = session.save(&mut config).expect("save should notify");
        assert_eq!(note.title, "Prompt Saved");
        assert!(!note.is_destructive());
        assert_eq!(session, PromptEditSession::Closed);
        assert_eq!(
            config.features[FeatureKey::WeeklyReport].system_prompt,
            "Summarize in three bullets."
        );
        // Other features untouched
        assert_eq!(
            config.features[FeatureKey::EditorAssist],
            Configuration::default().features[FeatureKey::EditorAssist]
        );
    }

    #[test]
    fn test_save_when_closed_is_noop() {
        let mut config = Configuration::default();
        let mut session = PromptEditSession::default();
        assert!(session.save(&mut config).is_none());
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let config = Configuration::default();
        let mut session = PromptEditSession::default();
        session.open(FeatureKey::NotePolish, &config);
        session.set_buffer("日本");

        session.move_left();
        session.insert_char('語');
        assert_eq!(session.buffer(), Some("日語本"));

        session.backspace();
        session.backspace();
        assert_eq!(session.buffer(), Some("本"));

        session.move_right();
        session.delete();
        assert_eq!(session.buffer(), Some("本"));
    }

    #[test]
    fn test_line_navigation() {
        let config = Configuration::default();
        let mut session = PromptEditSession::default();
        session.open(FeatureKey::NotePolish, &config);
        session.set_buffer("first\nsecond");

        assert_eq!(session.cursor_line_col(), Some((1, 6)));
        session.move_line_start();
        assert_eq!(session.cursor_line_col(), Some((1, 0)));
        session.move_left();
        assert_eq!(session.cursor_line_col(), Some((0, 5)));
        session.move_line_start();
        session.move_line_end();
        assert_eq!(session.cursor_line_col(), Some((0, 5)));
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let config = Configuration::default();
        let mut session = PromptEditSession::default();
        session.open(FeatureKey::EditorAssist, &config);
        session.set_buffer("abcdef\nxy\n日本語です");

        // End of last line, column 5
        session.move_up();
        assert_eq!(session.cursor_line_col(), Some((1, 2)));
        session.move_up();
        assert_eq!(session.cursor_line_col(), Some((0, 2)));
        session.move_up();
        assert_eq!(session.cursor_line_col(), Some((0, 2)));

        session.move_line_end();
        session.move_down();
        assert_eq!(session.cursor_line_col(), Some((1, 2)));
        session.move_down();
        assert_eq!(session.cursor_line_col(), Some((2, 2)));
        session.insert_char('!');
        assert_eq!(session.buffer(), Some("abcdef\nxy\n日本!語です"));
        session.move_down();
        assert_eq!(session.cursor_line_col(), Some((2, 3)));
    }
}
