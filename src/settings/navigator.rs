//! Section navigation for the settings shell
//!
//! The navigator only knows which section is active. It never looks at
//! `Configuration`, so editing settings can't move the selection.

/// Identifier of a top-level settings section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    General,
    Features,
    Api,
    Script,
    Feedback,
    About,
}

/// A navigation entry: section id plus its sidebar label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub label: &'static str,
}

/// Sections shown by the editor, in sidebar order
pub const DEFAULT_SECTIONS: &[SectionEntry] = &[
    SectionEntry { id: SectionId::General, label: "General" },
    SectionEntry { id: SectionId::Features, label: "AI Features" },
    SectionEntry { id: SectionId::Api, label: "API Settings" },
    SectionEntry { id: SectionId::Script, label: "Script" },
    SectionEntry { id: SectionId::Feedback, label: "Feedback" },
    SectionEntry { id: SectionId::About, label: "About" },
];

/// Tracks the active section over a fixed entry list
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    entries: &'static [SectionEntry],
    active: usize,
}

impl SectionNavigator {
    /// Navigator over `entries`, starting at the first one
    ///
    /// An empty list falls back to `DEFAULT_SECTIONS`.
    pub fn new(entries: &'static [SectionEntry]) -> Self {
        let entries = if entries.is_empty() {
            DEFAULT_SECTIONS
        } else {
            entries
        };
        Self { entries, active: 0 }
    }

    pub fn entries(&self) -> &'static [SectionEntry] {
        self.entries
    }

    pub fn active(&self) -> SectionId {
        self.entries[self.active].id
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_label(&self) -> &'static str {
        self.entries[self.active].label
    }

    /// Jump to a section; ids not in the list are ignored
    pub fn select(&mut self, id: SectionId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Move down (stays at the last entry)
    pub fn next(&mut self) {
        if self.active + 1 < self.entries.len() {
            self.active += 1;
        }
    }

    /// Move up (stays at the first entry)
    pub fn prev(&mut self) {
        self.active = self.active.saturating_sub(1);
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_SECTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Configuration, FeatureKey, ScriptUpdate};

    #[test]
    fn test_starts_at_first_entry() {
        let nav = SectionNavigator::default();
        assert_eq!(nav.active(), SectionId::General);
        assert_eq!(nav.active_label(), "General");

        const CUSTOM: &[SectionEntry] = &[
            SectionEntry { id: SectionId::Features, label: "AI" },
            SectionEntry { id: SectionId::Api, label: "API" },
        ];
        let nav = SectionNavigator::new(CUSTOM);
        assert_eq!(nav.active(), SectionId::Features);
    }

    #[test]
    fn test_select_and_bounds() {
        let mut nav = SectionNavigator::default();
        assert!(nav.select(SectionId::About));
        assert_eq!(nav.active(), SectionId::About);

        nav.next();
        assert_eq!(nav.active(), SectionId::About);

        nav.select(SectionId::General);
        nav.prev();
        assert_eq!(nav.active(), SectionId::General);
    }

    #[test]
    fn test_select_unknown_section_ignored() {
        const SMALL: &[SectionEntry] = &[SectionEntry { id: SectionId::General, label: "General" }];
        let mut nav = SectionNavigator::new(SMALL);
        assert!(!nav.select(SectionId::Script));
        assert_eq!(nav.active(), SectionId::General);
    }

    #[test]
    fn test_config_mutation_does_not_navigate() {
        let mut nav = SectionNavigator::default();
        nav.select(SectionId::Script);

        let mut config = Configuration::default();
        config.toggle_feature_enabled(FeatureKey::EditorAssist);
        config.set_script(ScriptUpdate {
            auto_backup: Some(false),
            ..Default::default()
        });

        assert_eq!(nav.active(), SectionId::Script);
    }
}
