//! Field model for the settings sections
//!
//! Each section is a vertical list of focusable fields. Which fields exist
//! depends on the current settings:
//! - A feature's model, custom-model and prompt controls are shown only
//!   while that feature is enabled
//! - The custom-model input is shown only while the model is "custom"
//! - The backup interval is shown only while auto-backup is on
//!
//! Hidden fields keep their stored values; they are just not focusable.

use crate::settings::navigator::SectionId;
use crate::settings::{Configuration, FeatureKey, ModelChoice};

/// How a field reacts to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Enter/Space flips it
    Toggle,
    /// Enter/→ next value, ← previous value
    Cycle,
    /// Enter starts inline editing
    Text,
    /// ←/→ step the value
    Number,
    /// Enter runs an action
    Action,
}

/// Every focusable field in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    // General
    Notifications,
    AutoSync,
    Language,
    // AI Features
    FeatureEnabled(FeatureKey),
    FeatureModel(FeatureKey),
    FeatureCustomModel(FeatureKey),
    FeaturePrompt(FeatureKey),
    // API
    ApiUrl,
    ApiKey,
    TestConnection,
    // Script
    UpdateInterval,
    DebugMode,
    AllowExperimental,
    AutoBackup,
    BackupInterval,
    // Feedback
    FeedbackKind,
    FeedbackMessage,
    FeedbackContact,
    SubmitFeedback,
}

impl FieldId {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::Notifications
            | FieldId::AutoSync
            | FieldId::FeatureEnabled(_)
            | FieldId::DebugMode
            | FieldId::AllowExperimental
            | FieldId::AutoBackup => FieldKind::Toggle,
            FieldId::Language | FieldId::FeatureModel(_) | FieldId::FeedbackKind => {
                FieldKind::Cycle
            }
            FieldId::FeatureCustomModel(_)
            | FieldId::ApiUrl
            | FieldId::ApiKey
            | FieldId::FeedbackMessage
            | FieldId::FeedbackContact => FieldKind::Text,
            FieldId::UpdateInterval | FieldId::BackupInterval => FieldKind::Number,
            FieldId::FeaturePrompt(_) | FieldId::TestConnection | FieldId::SubmitFeedback => {
                FieldKind::Action
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Notifications => "Notifications",
            FieldId::AutoSync => "Auto Sync",
            FieldId::Language => "Language",
            FieldId::FeatureEnabled(_) => "Enabled",
            FieldId::FeatureModel(_) => "Model",
            FieldId::FeatureCustomModel(_) => "Custom Model",
            FieldId::FeaturePrompt(_) => "Edit Prompt",
            FieldId::ApiUrl => "API URL",
            FieldId::ApiKey => "API Key",
            FieldId::TestConnection => "Test Connection",
            FieldId::UpdateInterval => "Update Interval (min)",
            FieldId::DebugMode => "Debug Mode",
            FieldId::AllowExperimental => "Experimental Features",
            FieldId::AutoBackup => "Auto Backup",
            FieldId::BackupInterval => "Backup Interval (h)",
            FieldId::FeedbackKind => "Feedback Type",
            FieldId::FeedbackMessage => "Message",
            FieldId::FeedbackContact => "Contact (optional)",
            FieldId::SubmitFeedback => "Submit Feedback",
        }
    }

    /// One-line help shown under the label
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FieldId::Notifications => Some("Enable desktop notifications"),
            FieldId::AutoSync => Some("Automatically sync changes"),
            FieldId::DebugMode => Some("Verbose logging in the browser console"),
            FieldId::AllowExperimental => Some("Opt in to unreleased script features"),
            FieldId::AutoBackup => Some("Periodically back up local drafts"),
            _ => None,
        }
    }

    /// Feature this field belongs to, if any
    pub fn feature(&self) -> Option<FeatureKey> {
        match self {
            FieldId::FeatureEnabled(k)
            | FieldId::FeatureModel(k)
            | FieldId::FeatureCustomModel(k)
            | FieldId::FeaturePrompt(k) => Some(*k),
            _ => None,
        }
    }
}

/// Fields visible in `section` for the current settings
pub fn visible_fields(section: SectionId, config: &Configuration) -> Vec<FieldId> {
    match section {
        SectionId::General => vec![FieldId::Notifications, FieldId::AutoSync, FieldId::Language],
        SectionId::Features => {
            let mut fields = Vec::new();
            for (key, feature) in config.features.iter() {
                fields.push(FieldId::FeatureEnabled(key));
                if !feature.enabled {
                    continue;
                }
                fields.push(FieldId::FeatureModel(key));
                if feature.model == ModelChoice::Custom {
                    fields.push(FieldId::FeatureCustomModel(key));
                }
                fields.push(FieldId::FeaturePrompt(key));
            }
            fields
        }
        SectionId::Api => vec![FieldId::ApiUrl, FieldId::ApiKey, FieldId::TestConnection],
        SectionId::Script => {
            let mut fields = vec![
                FieldId::UpdateInterval,
                FieldId::DebugMode,
                FieldId::AllowExperimental,
                FieldId::AutoBackup,
            ];
            if config.script.backup_interval_editable() {
                fields.push(FieldId::BackupInterval);
            }
            fields
        }
        SectionId::Feedback => vec![
            FieldId::FeedbackKind,
            FieldId::FeedbackMessage,
            FieldId::FeedbackContact,
            FieldId::SubmitFeedback,
        ],
        SectionId::About => Vec::new(),
    }
}

/// Selection within the content pane
///
/// Tracks the focused field by identity so that fields appearing or
/// disappearing above it don't move the focus to a different field.
#[derive(Debug, Default)]
pub struct FormCursor {
    selected: Option<FieldId>,
}

impl FormCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused field, resolved against the visible list
    ///
    /// Falls back to the nearest surviving field when the focused one was
    /// hidden, or to the first field.
    pub fn current(&self, fields: &[FieldId]) -> Option<FieldId> {
        match self.selected {
            Some(id) if fields.contains(&id) => Some(id),
            Some(id) => id
                .feature()
                .and_then(|k| fields.iter().find(|f| **f == FieldId::FeatureEnabled(k)))
                .copied()
                .or_else(|| fields.first().copied()),
            None => fields.first().copied(),
        }
    }

    pub fn index(&self, fields: &[FieldId]) -> Option<usize> {
        let current = self.current(fields)?;
        fields.iter().position(|f| *f == current)
    }

    pub fn select(&mut self, id: FieldId) {
        self.selected = Some(id);
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }

    pub fn move_up(&mut self, fields: &[FieldId]) {
        if let Some(idx) = self.index(fields) {
            self.selected = Some(fields[idx.saturating_sub(1)]);
        }
    }

    pub fn move_down(&mut self, fields: &[FieldId]) {
        if let Some(idx) = self.index(fields) {
            let next = (idx + 1).min(fields.len() - 1);
            self.selected = Some(fields[next]);
        }
    }

    pub fn move_first(&mut self, fields: &[FieldId]) {
        self.selected = fields.first().copied();
    }

    pub fn move_last(&mut self, fields: &[FieldId]) {
        self.selected = fields.last().copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ScriptUpdate;

    #[test]
    fn test_features_gated_on_enabled() {
        let mut config = Configuration::default();
        let fields = visible_fields(SectionId::Features, &config);
        assert!(fields.contains(&FieldId::FeaturePrompt(FeatureKey::NotePolish)));
        assert!(fields.contains(&FieldId::FeatureModel(FeatureKey::NotePolish)));

        config.toggle_feature_enabled(FeatureKey::NotePolish);
        let fields = visible_fields(SectionId::Features, &config);
        assert!(fields.contains(&FieldId::FeatureEnabled(FeatureKey::NotePolish)));
        assert!(!fields.contains(&FieldId::FeatureModel(FeatureKey::NotePolish)));
        assert!(!fields.contains(&FieldId::FeaturePrompt(FeatureKey::NotePolish)));
        // Other features unaffected
        assert!(fields.contains(&FieldId::FeaturePrompt(FeatureKey::WeeklyReport)));
    }

    #[test]
    fn test_custom_model_input_only_for_custom() {
        let mut config = Configuration::default();
        let key = FeatureKey::EditorAssist;
        assert!(!visible_fields(SectionId::Features, &config)
            .contains(&FieldId::FeatureCustomModel(key)));

        config.set_feature_model(key, ModelChoice::Custom);
        assert!(visible_fields(SectionId::Features, &config)
            .contains(&FieldId::FeatureCustomModel(key)));
    }

    #[test]
    fn test_backup_interval_hidden_without_auto_backup() {
        let mut config = Configuration::default();
        assert!(visible_fields(SectionId::Script, &config).contains(&FieldId::BackupInterval));

        config.set_script(ScriptUpdate {
            auto_backup: Some(false),
            ..Default::default()
        });
        assert!(!visible_fields(SectionId::Script, &config).contains(&FieldId::BackupInterval));
    }

    #[test]
    fn test_cursor_survives_fields_appearing() {
        let mut config = Configuration::default();
        let mut cursor = FormCursor::new();
        cursor.select(FieldId::FeatureEnabled(FeatureKey::WeeklyReport));

        config.set_feature_model(FeatureKey::EditorAssist, ModelChoice::Custom);
        let fields = visible_fields(SectionId::Features, &config);
        assert_eq!(
            cursor.current(&fields),
            Some(FieldId::FeatureEnabled(FeatureKey::WeeklyReport))
        );
    }

    #[test]
    fn test_cursor_falls_back_when_hidden() {
        let mut config = Configuration::default();
        let mut cursor = FormCursor::new();
        cursor.select(FieldId::FeaturePrompt(FeatureKey::NotePolish));

        config.toggle_feature_enabled(FeatureKey::NotePolish);
        let fields = visible_fields(SectionId::Features, &config);
        assert_eq!(
            cursor.current(&fields),
            Some(FieldId::FeatureEnabled(FeatureKey::NotePolish))
        );
    }

    #[test]
    fn test_cursor_bounds() {
        let config = Configuration::default();
        let fields = visible_fields(SectionId::General, &config);
        let mut cursor = FormCursor::new();

        cursor.move_up(&fields);
        assert_eq!(cursor.current(&fields), Some(FieldId::Notifications));

        cursor.move_last(&fields);
        cursor.move_down(&fields);
        assert_eq!(cursor.current(&fields), Some(FieldId::Language));

        assert_eq!(cursor.current(&[]), None);
    }
}
