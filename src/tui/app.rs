// TUI application state
//
// App owns the settings being edited and all transient UI state: focus,
// inline text editing, the prompt editor session, in-flight collaborator
// calls and the toast. Key routing lives in tui/mod.rs; App exposes the
// operations it routes to.

use super::components::settings_panel::{PanelFocus, SettingsPanel};
use super::components::text_input::TextInput;
use super::components::Toast;
use super::form::{FieldId, FieldKind};
use super::input::InputHandler;
use super::modal::{Modal, ModalAction};
use super::traits::{Handled, Interactive};
use crate::client::{ClientOutcome, Collaborators};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::settings::connection::ConnectionTest;
use crate::settings::feedback::{FeedbackForm, ValidationError};
use crate::settings::navigator::{SectionId, SectionNavigator};
use crate::settings::notification::Notification;
use crate::settings::prompt::PromptEditSession;
use crate::settings::{Configuration, FeatureKey, GeneralUpdate, ScriptUpdate};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Spinner frames for pending operations
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Field being edited inline, with its input buffer
pub struct InlineEdit {
    pub field: FieldId,
    pub input: TextInput,
}

/// Main application state for the TUI
pub struct App {
    /// Settings being edited (single source of truth)
    pub settings: Configuration,

    /// Sidebar, focus and field selection
    pub panel: SettingsPanel,

    /// Inline text edit in progress, if any
    pub editing: Option<InlineEdit>,

    /// Prompt sub-editor session (buffer lives here, not in settings)
    pub prompt: PromptEditSession,

    /// Active modal overlay
    pub modal: Option<Modal>,

    /// Connection test state machine
    pub connection: ConnectionTest,

    /// Feedback form state
    pub feedback: FeedbackForm,

    /// Active toast notification
    pub toast: Option<Toast>,

    /// Current color theme
    pub theme: Theme,

    /// Application config (for the About section)
    pub config: Config,

    /// Log buffer for the About section
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Animation frame counter for spinners
    animation_frame: usize,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Connection test and feedback implementations
    collaborators: Collaborators,

    /// Where spawned collaborator calls report back
    outcome_tx: mpsc::Sender<ClientOutcome>,
}

impl App {
    pub fn new(
        config: Config,
        log_buffer: LogBuffer,
        collaborators: Collaborators,
        outcome_tx: mpsc::Sender<ClientOutcome>,
    ) -> Self {
        let settings = Configuration::with_credentials(
            config.editor.api_url.clone(),
            config.editor.api_key.clone(),
        );
        let theme = Theme::by_name_with_background(&config.theme, config.use_theme_background);

        let mut panel = SettingsPanel::new(SectionNavigator::default());
        panel.sync_fields(&settings);

        Self {
            settings,
            panel,
            editing: None,
            prompt: PromptEditSession::default(),
            modal: None,
            connection: ConnectionTest::new(),
            feedback: FeedbackForm::new(),
            toast: None,
            theme,
            config,
            log_buffer,
            should_quit: false,
            animation_frame: 0,
            input_handler: InputHandler::default(),
            collaborators,
            outcome_tx,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    /// Uses the configured behavior for each key (state-change or repeatable)
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Route a key to the settings panel, then refresh visible fields
    pub fn dispatch_to_panel(&mut self, key: KeyEvent) -> Handled {
        let handled = self.panel.handle_key(key);
        self.panel.sync_fields(&self.settings);
        handled
    }

    /// Status bar hint for whatever currently has focus
    pub fn focus_hint(&self) -> Option<&'static str> {
        if let Some(modal) = &self.modal {
            return Some(match modal {
                Modal::Help => "?/Esc:close",
                Modal::PromptEditor(_) => "Ctrl+S:save  Esc:cancel  Ctrl+Y:copy",
            });
        }
        match &self.editing {
            Some(edit) => edit.input.focus_hint(),
            None => self.panel.focus_hint(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Animation & notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// Advance the animation frame (called on each tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Current spinner character
    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Whether any collaborator call is in flight
    pub fn is_busy(&self) -> bool {
        self.connection.is_pending() || self.feedback.is_submitting()
    }

    /// Log a notification and show it as a toast
    pub fn notify(&mut self, notification: Notification) {
        if notification.is_destructive() {
            tracing::warn!("{}: {}", notification.title, notification.description);
        } else {
            tracing::info!("{}: {}", notification.title, notification.description);
        }
        self.toast = Some(Toast::new(notification));
    }

    /// Drop the toast once it has expired
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Jump to the n-th section (0-based); out of range is ignored
    pub fn select_section_index(&mut self, index: usize) {
        let Some(entry) = self.panel.navigator.entries().get(index) else {
            return;
        };
        self.panel.select_section(entry.id, &self.settings);
    }

    pub fn toggle_focus(&mut self) {
        self.panel.toggle_focus();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter/Space on the focused field
    pub fn activate_focused(&mut self) -> Handled {
        let Some(field) = self.panel.focused_field() else {
            return Handled::No;
        };

        match field.kind() {
            FieldKind::Toggle => self.toggle_field(field),
            FieldKind::Cycle => self.cycle_field(field, true),
            FieldKind::Text | FieldKind::Number => self.begin_edit(field),
            FieldKind::Action => self.run_action(field),
        }
        self.panel.sync_fields(&self.settings);
        Handled::Yes
    }

    /// ←/→ on the focused field; `step` is ±1 or ±10
    pub fn adjust_focused(&mut self, step: i64) -> Handled {
        let Some(field) = self.panel.focused_field() else {
            return Handled::No;
        };

        match field.kind() {
            FieldKind::Cycle => self.cycle_field(field, step > 0),
            FieldKind::Number => self.step_number(field, step),
            _ => return Handled::No,
        }
        self.panel.sync_fields(&self.settings);
        Handled::Yes
    }

    fn toggle_field(&mut self, field: FieldId) {
        let settings = &mut self.settings;
        match field {
            FieldId::Notifications => settings.set_general(GeneralUpdate {
                notifications: Some(!settings.notifications),
                ..Default::default()
            }),
            FieldId::AutoSync => settings.set_general(GeneralUpdate {
                auto_sync: Some(!settings.auto_sync),
                ..Default::default()
            }),
            FieldId::FeatureEnabled(key) => settings.toggle_feature_enabled(key),
            FieldId::DebugMode => settings.set_script(ScriptUpdate {
                debug_mode: Some(!settings.script.debug_mode),
                ..Default::default()
            }),
            FieldId::AllowExperimental => settings.set_script(ScriptUpdate {
                allow_experimental: Some(!settings.script.allow_experimental),
                ..Default::default()
            }),
            FieldId::AutoBackup => settings.set_script(ScriptUpdate {
                auto_backup: Some(!settings.script.auto_backup),
                ..Default::default()
            }),
            _ => {}
        }
    }

    fn cycle_field(&mut self, field: FieldId, forward: bool) {
        match field {
            FieldId::Language => {
                let current = self.settings.language;
                let language = if forward { current.next() } else { current.prev() };
                self.settings.set_general(GeneralUpdate {
                    language: Some(language),
                    ..Default::default()
                });
            }
            FieldId::FeatureModel(key) => {
                let current = self.settings.features[key].model;
                let model = if forward { current.next() } else { current.prev() };
                self.settings.set_feature_model(key, model);
            }
            FieldId::FeedbackKind => self.feedback.cycle_kind(),
            _ => {}
        }
    }

    fn step_number(&mut self, field: FieldId, step: i64) {
        let script = &self.settings.script;
        let current = match field {
            FieldId::UpdateInterval => script.update_interval,
            FieldId::BackupInterval => script.backup_interval,
            _ => return,
        };
        // Clamping into range happens in the store
        let value = (current as i64 + step).clamp(0, u32::MAX as i64) as u32;
        self.set_number(field, value);
    }

    fn set_number(&mut self, field: FieldId, value: u32) {
        let update = match field {
            FieldId::UpdateInterval => ScriptUpdate {
                update_interval: Some(value),
                ..Default::default()
            },
            FieldId::BackupInterval => ScriptUpdate {
                backup_interval: Some(value),
                ..Default::default()
            },
            _ => return,
        };
        self.settings.set_script(update);
    }

    fn run_action(&mut self, field: FieldId) {
        match field {
            FieldId::FeaturePrompt(key) => self.open_prompt_editor(key),
            FieldId::TestConnection => self.start_connection_test(),
            FieldId::SubmitFeedback => self.submit_feedback(),
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inline text editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Current text of a text or number field
    pub fn field_text(&self, field: FieldId) -> String {
        match field {
            FieldId::FeatureCustomModel(key) => self.settings.features[key].custom_model.clone(),
            FieldId::ApiUrl => self.settings.api_url.clone(),
            FieldId::ApiKey => self.settings.api_key.expose().to_string(),
            FieldId::FeedbackMessage => self.feedback.message.clone(),
            FieldId::FeedbackContact => self.feedback.contact.clone(),
            FieldId::UpdateInterval => self.settings.script.update_interval.to_string(),
            FieldId::BackupInterval => self.settings.script.backup_interval.to_string(),
            _ => String::new(),
        }
    }

    fn begin_edit(&mut self, field: FieldId) {
        let input = TextInput::new(self.field_text(field));
        let input = if field == FieldId::ApiKey {
            input.masked()
        } else {
            input
        };
        self.editing = Some(InlineEdit { field, input });
    }

    /// Feed a key to the inline editor; every change is applied to the
    /// settings immediately
    pub fn edit_key(&mut self, key: KeyEvent) -> Handled {
        let Some(edit) = self.editing.as_mut() else {
            return Handled::No;
        };

        // Number fields only accept digits
        if edit.field.kind() == FieldKind::Number
            && !key.modifiers.contains(KeyModifiers::CONTROL)
        {
            if let KeyCode::Char(c) = key.code {
                if !c.is_ascii_digit() {
                    return Handled::Yes;
                }
            }
        }

        let handled = edit.input.handle_key(key);
        if handled.was_handled() {
            let field = edit.field;
            let value = edit.input.value().to_string();
            self.apply_text(field, value.clone());

            // Numbers are clamped by the store; show what it kept. An empty
            // buffer stays empty so a new value can be typed.
            if field.kind() == FieldKind::Number && !value.is_empty() {
                let stored = self.field_text(field);
                if let Some(edit) = self.editing.as_mut() {
                    if edit.input.value() != stored {
                        edit.input.set_value(stored);
                    }
                }
            }
        }
        handled
    }

    /// Leave inline editing
    pub fn finish_edit(&mut self) {
        self.editing = None;
        self.panel.sync_fields(&self.settings);
    }

    fn apply_text(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::FeatureCustomModel(key) => self.settings.set_feature_custom_model(key, value),
            FieldId::ApiUrl => {
                self.settings.set_api_credentials(Some(value), None);
                self.connection.invalidate();
            }
            FieldId::ApiKey => {
                self.settings.set_api_credentials(None, Some(value));
                self.connection.invalidate();
            }
            FieldId::FeedbackMessage => {
                self.feedback.message = value;
                self.feedback.clear_error();
            }
            FieldId::FeedbackContact => self.feedback.contact = value,
            FieldId::UpdateInterval | FieldId::BackupInterval => {
                // Empty or overflowing input leaves the stored value alone
                if let Ok(n) = value.parse::<u32>() {
                    self.set_number(field, n);
                }
            }
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Prompt sub-editor
    // ─────────────────────────────────────────────────────────────────────────

    pub fn open_prompt_editor(&mut self, key: FeatureKey) {
        self.prompt.open(key, &self.settings);
        self.modal = Some(Modal::prompt_editor(key));
    }

    /// Apply a prompt editor action; returns false once the modal closed
    pub fn prompt_action(&mut self, action: ModalAction) -> bool {
        // A prompt modal without a session has nothing to edit
        if !self.prompt.is_open() {
            self.modal = None;
            return false;
        }

        match action {
            ModalAction::None => {}
            ModalAction::Close => {
                self.prompt.cancel();
                self.modal = None;
                return false;
            }
            ModalAction::Save => {
                if let Some(notification) = self.prompt.save(&mut self.settings) {
                    self.notify(notification);
                }
                self.modal = None;
                return false;
            }
            ModalAction::Insert(c) => self.prompt.insert_char(c),
            ModalAction::Newline => self.prompt.insert_char('\n'),
            ModalAction::Backspace => self.prompt.backspace(),
            ModalAction::Delete => self.prompt.delete(),
            ModalAction::Left => self.prompt.move_left(),
            ModalAction::Right => self.prompt.move_right(),
            ModalAction::Up => self.prompt.move_up(),
            ModalAction::Down => self.prompt.move_down(),
            ModalAction::Home => self.prompt.move_line_start(),
            ModalAction::End => self.prompt.move_line_end(),
            ModalAction::Copy => {
                if let Some(text) = self.prompt.buffer() {
                    let notification = match super::clipboard::copy_to_clipboard(text) {
                        Ok(()) => Notification::info("Copied", "Prompt copied to clipboard"),
                        Err(e) => {
                            tracing::debug!("Clipboard copy failed: {:#}", e);
                            Notification::destructive("Copy Failed", "Clipboard is not available")
                        }
                    };
                    self.notify(notification);
                }
            }
        }
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collaborator calls
    // ─────────────────────────────────────────────────────────────────────────

    /// Start the connection test; a no-op while disabled or pending
    pub fn start_connection_test(&mut self) {
        let Some(request) = self.connection.begin(&self.settings) else {
            return;
        };

        let endpoint = Arc::clone(&self.collaborators.endpoint);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = endpoint.check(&request).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(ClientOutcome::Connection(result)).await;
        });
    }

    /// Validate and submit feedback; errors show inline on the form
    pub fn submit_feedback(&mut self) {
        let submission = match self.feedback.begin_submit() {
            Ok(Some(submission)) => submission,
            Ok(None) => return,
            Err(e) => {
                // Jump to the field that needs attention
                let field = match e {
                    ValidationError::MissingKind => FieldId::FeedbackKind,
                    ValidationError::EmptyMessage => FieldId::FeedbackMessage,
                };
                self.panel.focus_field(field);
                return;
            }
        };

        let sink = Arc::clone(&self.collaborators.feedback);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = sink.submit(&submission).await;
            let _ = tx.send(ClientOutcome::Feedback(result)).await;
        });
    }

    /// Apply the result of a spawned collaborator call
    pub fn handle_outcome(&mut self, outcome: ClientOutcome) {
        let notification = match outcome {
            ClientOutcome::Connection(result) => self.connection.finish(result),
            ClientOutcome::Feedback(result) => self.feedback.finish_submit(result),
        };
        if let Some(notification) = notification {
            self.notify(notification);
        }
    }

    /// Section currently shown in the content pane
    pub fn section(&self) -> SectionId {
        self.panel.section()
    }

    /// Whether the content pane has focus
    pub fn content_focused(&self) -> bool {
        self.panel.focus == PanelFocus::Content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{SimulatedEndpoint, SimulatedFeedback};
    use crate::config::EndpointConfig;
    use crate::settings::connection::ConnectionTestState;
    use crate::settings::feedback::FeedbackKind;
    use crate::settings::ModelChoice;

    fn app_with(succeed: bool) -> (App, mpsc::Receiver<ClientOutcome>) {
        let (tx, rx) = mpsc::channel(8);
        let collaborators = Collaborators {
            endpoint: Arc::new(SimulatedEndpoint::new(0, succeed)),
            feedback: Arc::new(SimulatedFeedback::new(0, succeed)),
        };
        let mut config = Config::default();
        config.endpoint = EndpointConfig {
            connection_delay_ms: 0,
            feedback_delay_ms: 0,
            ..Default::default()
        };
        (App::new(config, LogBuffer::new(), collaborators, tx), rx)
    }

    fn focus_field(app: &mut App, section: SectionId, field: FieldId) {
        app.panel.select_section(section, &app.settings);
        app.panel.focus = PanelFocus::Content;
        while app.panel.focused_field() != Some(field) {
            let before = app.panel.focused_field();
            app.dispatch_to_panel(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
            assert_ne!(before, app.panel.focused_field(), "field {:?} not visible", field);
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.edit_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[tokio::test]
    async fn test_toggle_field_flips_setting() {
        let (mut app, _rx) = app_with(true);
        focus_field(&mut app, SectionId::General, FieldId::AutoSync);
        app.activate_focused();
        assert!(!app.settings.auto_sync);
        app.activate_focused();
        assert!(app.settings.auto_sync);
    }

    #[tokio::test]
    async fn test_custom_model_editing_is_live() {
        let (mut app, _rx) = app_with(true);
        let key = FeatureKey::WeeklyReport;
        app.settings.set_feature_model(key, ModelChoice::Custom);
        app.panel.sync_fields(&app.settings);

        focus_field(&mut app, SectionId::Features, FieldId::FeatureCustomModel(key));
        app.activate_focused();
        type_str(&mut app, "llama-3");
        assert_eq!(app.settings.features[key].custom_model, "llama-3");
        assert_eq!(app.settings.effective_model(key), "llama-3");
        app.finish_edit();
        assert!(app.editing.is_none());
    }

    #[tokio::test]
    async fn test_number_edit_ignores_letters_and_clamps() {
        let (mut app, _rx) = app_with(true);
        focus_field(&mut app, SectionId::Script, FieldId::BackupInterval);
        app.activate_focused();
        app.edit_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_str(&mut app, "9x99");
        assert_eq!(app.settings.script.backup_interval, 168);

        app.finish_edit();
        app.adjust_focused(-10);
        assert_eq!(app.settings.script.backup_interval, 158);
    }

    #[tokio::test]
    async fn test_number_edit_buffer_matches_store() {
        let (mut app, _rx) = app_with(true);
        focus_field(&mut app, SectionId::Script, FieldId::UpdateInterval);
        app.activate_focused();
        type_str(&mut app, "000");

        let buffer = app.editing.as_ref().map(|e| e.input.value().to_string());
        assert_eq!(app.settings.script.update_interval, 1440);
        assert_eq!(buffer.as_deref(), Some("1440"));

        // Cleared buffer stays empty and leaves the stored value alone
        app.edit_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        let buffer = app.editing.as_ref().map(|e| e.input.value().to_string());
        assert_eq!(buffer.as_deref(), Some(""));
        assert_eq!(app.settings.script.update_interval, 1440);

        type_str(&mut app, "45");
        assert_eq!(app.settings.script.update_interval, 45);
        let buffer = app.editing.as_ref().map(|e| e.input.value().to_string());
        assert_eq!(buffer.as_deref(), Some("45"));
    }

    #[tokio::test]
    async fn test_prompt_cancel_and_save() {
        let (mut app, _rx) = app_with(true);
        let key = FeatureKey::NotePolish;
        let original = app.settings.features[key].system_prompt.clone();

        app.open_prompt_editor(key);
        app.prompt_action(ModalAction::Insert('!'));
        assert!(!app.prompt_action(ModalAction::Close));
        assert_eq!(app.settings.features[key].system_prompt, original);
        assert!(app.modal.is_none());

        app.open_prompt_editor(key);
        app.prompt_action(ModalAction::Insert('!'));
        assert!(!app.prompt_action(ModalAction::Save));
        assert_eq!(app.settings.features[key].system_prompt, format!("{}!", original));
        assert_eq!(
            app.toast.as_ref().map(|t| t.notification.title.as_str()),
            Some("Prompt Saved")
        );
    }

    #[tokio::test]
    async fn test_connection_test_round_trip() {
        let (mut app, mut rx) = app_with(false);
        app.settings
            .set_api_credentials(Some("https://r.example".into()), Some("k".into()));

        app.start_connection_test();
        assert!(app.connection.is_pending());
        assert!(app.is_busy());

        // Second attempt while pending is ignored
        app.start_connection_test();

        let outcome = rx.recv().await.expect("outcome");
        app.handle_outcome(outcome);
        assert_eq!(app.connection.state(), ConnectionTestState::Error);
        assert!(app.toast.as_ref().is_some_and(|t| t.notification.is_destructive()));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_editing_credentials_clears_connection_result() {
        let (mut app, mut rx) = app_with(true);
        app.settings
            .set_api_credentials(Some("https://r.example".into()), Some("k".into()));
        app.start_connection_test();
        let outcome = rx.recv().await.expect("outcome");
        app.handle_outcome(outcome);
        assert_eq!(app.connection.state(), ConnectionTestState::Success);

        focus_field(&mut app, SectionId::Api, FieldId::ApiKey);
        app.activate_focused();
        type_str(&mut app, "2");
        assert_eq!(app.settings.api_key.expose(), "k2");
        assert_eq!(app.connection.state(), ConnectionTestState::Idle);
    }

    #[tokio::test]
    async fn test_connection_test_without_credentials_is_noop() {
        let (mut app, mut rx) = app_with(true);
        app.start_connection_test();
        assert_eq!(app.connection.state(), ConnectionTestState::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_feedback_validation_then_submit() {
        let (mut app, mut rx) = app_with(true);
        app.submit_feedback();
        assert!(app.feedback.error().is_some());
        assert!(!app.feedback.is_submitting());

        app.feedback.kind = Some(FeedbackKind::Bug);
        focus_field(&mut app, SectionId::Feedback, FieldId::FeedbackMessage);
        app.activate_focused();
        type_str(&mut app, "Toast overlaps sidebar");
        app.finish_edit();
        assert!(app.feedback.error().is_none());

        app.submit_feedback();
        assert!(app.feedback.is_submitting());
        let outcome = rx.recv().await.expect("outcome");
        app.handle_outcome(outcome);

        assert!(app.feedback.message.is_empty());
        assert_eq!(
            app.toast.as_ref().map(|t| t.notification.title.as_str()),
            Some("Feedback Submitted")
        );
    }

    #[tokio::test]
    async fn test_invalid_feedback_focuses_offending_field() {
        let (mut app, mut rx) = app_with(true);
        focus_field(&mut app, SectionId::Feedback, FieldId::SubmitFeedback);
        app.activate_focused();
        assert_eq!(app.panel.focused_field(), Some(FieldId::FeedbackKind));

        app.activate_focused(); // cycles to Bug
        focus_field(&mut app, SectionId::Feedback, FieldId::SubmitFeedback);
        app.activate_focused();
        assert_eq!(app.panel.focused_field(), Some(FieldId::FeedbackMessage));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disabling_feature_hides_its_controls() {
        let (mut app, _rx) = app_with(true);
        let key = FeatureKey::EditorAssist;
        focus_field(&mut app, SectionId::Features, FieldId::FeatureEnabled(key));
        app.activate_focused();
        assert!(!app.settings.features[key].enabled);
        assert!(!app.panel.fields().contains(&FieldId::FeaturePrompt(key)));
        // Prompt is kept while hidden
        assert!(!app.settings.features[key].system_prompt.is_empty());
    }
}
