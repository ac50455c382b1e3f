//! Settings panel component
//!
//! Owns the navigation state of the editor:
//! - Section navigation (sidebar)
//! - Focus tracking (sidebar vs content pane)
//! - Field selection within the active section
//!
//! Field visibility depends on the settings being edited, so App calls
//! `sync_fields` after every change and before dispatching keys here.

use crate::settings::navigator::{SectionId, SectionNavigator};
use crate::settings::Configuration;
use crate::tui::form::{visible_fields, FieldId, FormCursor};
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};

/// Which pane is focused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelFocus {
    #[default]
    Sidebar,
    Content,
}

impl PanelFocus {
    /// Toggle between panes
    pub fn toggle(self) -> Self {
        match self {
            PanelFocus::Sidebar => PanelFocus::Content,
            PanelFocus::Content => PanelFocus::Sidebar,
        }
    }
}

pub struct SettingsPanel {
    pub navigator: SectionNavigator,
    pub focus: PanelFocus,
    cursor: FormCursor,
    /// Visible fields of the active section (refreshed by `sync_fields`)
    fields: Vec<FieldId>,
}

impl SettingsPanel {
    pub fn new(navigator: SectionNavigator) -> Self {
        Self {
            navigator,
            focus: PanelFocus::default(),
            cursor: FormCursor::new(),
            fields: Vec::new(),
        }
    }

    pub fn section(&self) -> SectionId {
        self.navigator.active()
    }

    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    /// Recompute visible fields for the active section
    pub fn sync_fields(&mut self, config: &Configuration) {
        self.fields = visible_fields(self.section(), config);
    }

    /// Field under the cursor, only while the content pane has focus
    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            PanelFocus::Content => self.cursor.current(&self.fields),
            PanelFocus::Sidebar => None,
        }
    }

    /// Field highlighted in the content pane, regardless of focus
    pub fn selected_field(&self) -> Option<FieldId> {
        self.cursor.current(&self.fields)
    }

    /// Put the content cursor on `id` if it is visible
    pub fn focus_field(&mut self, id: FieldId) -> bool {
        if !self.fields.contains(&id) {
            return false;
        }
        self.cursor.select(id);
        self.focus = PanelFocus::Content;
        true
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        // Sections without fields keep focus on the sidebar
        if self.focus == PanelFocus::Content && self.fields.is_empty() {
            self.focus = PanelFocus::Sidebar;
        }
    }

    /// Jump to a section from anywhere; returns false for unknown ids
    pub fn select_section(&mut self, id: SectionId, config: &Configuration) -> bool {
        let before = self.section();
        if !self.navigator.select(id) {
            return false;
        }
        if before != self.section() {
            self.cursor.reset();
        }
        self.sync_fields(config);
        true
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) -> Handled {
        let before = self.section();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.navigator.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.navigator.next(),
            KeyCode::Right | KeyCode::Enter => {
                self.toggle_focus();
                return Handled::Yes;
            }
            _ => return Handled::No,
        }
        if before != self.section() {
            self.cursor.reset();
            self.fields.clear();
        }
        Handled::Yes
    }

    fn handle_content_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.move_up(&self.fields),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.move_down(&self.fields),
            KeyCode::Home | KeyCode::Char('g') => self.cursor.move_first(&self.fields),
            KeyCode::End | KeyCode::Char('G') => self.cursor.move_last(&self.fields),
            _ => return Handled::No,
        }
        Handled::Yes
    }
}

impl Interactive for SettingsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match self.focus {
            PanelFocus::Sidebar => self.handle_sidebar_key(key),
            PanelFocus::Content => self.handle_content_key(key),
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            PanelFocus::Sidebar => Some("↑↓:section  Tab/→:fields  1-6:jump  ?:help  q:quit"),
            PanelFocus::Content => Some("↑↓:field  Enter/Space:change  ←→:adjust  Tab:sections"),
        }
    }
}
