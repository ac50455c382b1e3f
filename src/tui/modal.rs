// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::settings::FeatureKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal (prompt editor: discard the buffer)
    Close,
    /// Commit the prompt buffer and close
    Save,
    /// Insert a character at the cursor
    Insert(char),
    /// Insert a line break at the cursor
    Newline,
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    /// Cursor one character left
    Left,
    /// Cursor one character right
    Right,
    /// Cursor one line up, same column where it fits
    Up,
    /// Cursor one line down, same column where it fits
    Down,
    /// Cursor to start of line
    Home,
    /// Cursor to end of line
    End,
    /// Copy the buffer to the clipboard
    Copy,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// System prompt editor for a feature
    /// Buffer and cursor live in the PromptEditSession
    PromptEditor(FeatureKey),
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Create a prompt editor modal for the given feature
    pub fn prompt_editor(key: FeatureKey) -> Self {
        Modal::PromptEditor(key)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: &KeyEvent) -> ModalAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self {
            Modal::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::PromptEditor(_) => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Char('s') if ctrl => ModalAction::Save,
                KeyCode::Char('y') if ctrl => ModalAction::Copy,
                KeyCode::Char(_) if ctrl => ModalAction::None,
                KeyCode::Char(c) => ModalAction::Insert(c),
                KeyCode::Tab => ModalAction::Insert('\t'),
                KeyCode::Enter => ModalAction::Newline,
                KeyCode::Backspace => ModalAction::Backspace,
                KeyCode::Delete => ModalAction::Delete,
                KeyCode::Left => ModalAction::Left,
                KeyCode::Right => ModalAction::Right,
                KeyCode::Up => ModalAction::Up,
                KeyCode::Down => ModalAction::Down,
                KeyCode::Home => ModalAction::Home,
                KeyCode::End => ModalAction::End,
                _ => ModalAction::None,
            },
        }
    }
}
