// TUI module - Terminal User Interface
//
// This module manages the settings editor UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, collaborator outcomes)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod form;
pub mod input;
pub mod modal;
pub mod traits;
pub mod views;

use crate::client::{ClientOutcome, Collaborators};
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::Handled;

/// Capacity of the collaborator outcome channel
const OUTCOME_CHANNEL_SIZE: usize = 16;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. In-flight collaborator calls are abandoned on quit.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    collaborators: Collaborators,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (outcome_tx, mut outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_SIZE);
    let mut app = App::new(config, log_buffer, collaborators, outcome_tx);
    tracing::info!("Settings editor started");

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (for navigation and editing)
/// 2. Timer ticks (for spinners and toast expiry)
/// 3. Collaborator outcomes (connection test, feedback submit)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut mpsc::Receiver<ClientOutcome>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Results of spawned collaborator calls
            Some(outcome) = outcome_rx.recv() => {
                app.handle_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Settings editor closed");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Inline edit → Global → Panel → Field
pub(crate) fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Ctrl+C always quits, even mid-edit
    if key_event.kind == KeyEventKind::Press
        && key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Inline text editing captures typing
    if handle_edit_input(app, &key_event) {
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    // Layer 4: Panel navigation, then field activation
    match key_event.kind {
        KeyEventKind::Press => {
            if !app.handle_key_press(key) {
                return;
            }

            match key {
                KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                KeyCode::Enter | KeyCode::Char(' ') if app.content_focused() => {
                    app.activate_focused();
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
                    if app.content_focused() =>
                {
                    let forward = matches!(key, KeyCode::Right | KeyCode::Char('l'));
                    let magnitude = if key_event.modifiers.contains(KeyModifiers::SHIFT) {
                        10
                    } else {
                        1
                    };
                    let step = if forward { magnitude } else { -magnitude };

                    // Left on a field with nothing to adjust goes back to the sidebar
                    if app.adjust_focused(step) == Handled::No && !forward {
                        app.toggle_focus();
                    }
                }
                KeyCode::Esc if app.content_focused() => app.toggle_focus(),
                _ => {
                    app.dispatch_to_panel(key_event);
                }
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs other non-press events (Repeat, etc.)
    }

    let is_prompt_editor = matches!(modal, Modal::PromptEditor(_));
    let action = modal.handle_input(key_event);

    if is_prompt_editor {
        app.prompt_action(action);
    } else if action == ModalAction::Close {
        app.modal = None;
    }

    true // Modal absorbed the input
}

/// Handle inline edit input - returns true while an edit is active
fn handle_edit_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.editing.is_none() {
        return false;
    }

    match key_event.kind {
        KeyEventKind::Release => app.handle_key_release(key_event.code),
        KeyEventKind::Press => match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => app.finish_edit(),
            _ => {
                app.edit_key(*key_event);
            }
        },
        _ => {}
    }

    true
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        // Number keys jump straight to a section
        KeyCode::Char(c @ '1'..='9') => {
            if app.handle_key_press(key) {
                app.select_section_index((c as usize) - ('1' as usize));
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{SimulatedEndpoint, SimulatedFeedback};
    use crate::settings::navigator::SectionId;
    use crate::settings::FeatureKey;
    use crate::tui::form::FieldId;
    use std::sync::Arc;

    fn app() -> App {
        let (tx, _rx) = mpsc::channel(1);
        let collaborators = Collaborators {
            endpoint: Arc::new(SimulatedEndpoint::new(0, true)),
            feedback: Arc::new(SimulatedFeedback::new(0, true)),
        };
        App::new(Config::default(), LogBuffer::new(), collaborators, tx)
    }

    /// Press then release, like a terminal with keyboard enhancement
    fn tap(app: &mut App, code: KeyCode) {
        tap_with(app, code, KeyModifiers::NONE);
    }

    fn tap_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(
            app,
            KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press),
        );
        handle_key_event(
            app,
            KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Release),
        );
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            tap(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_jump_sections() {
        let mut app = app();
        tap(&mut app, KeyCode::Char('3'));
        assert_eq!(app.section(), SectionId::Api);
        tap(&mut app, KeyCode::Char('9'));
        assert_eq!(app.section(), SectionId::Api);
    }

    #[test]
    fn test_editing_settings_does_not_move_section() {
        let mut app = app();
        tap(&mut app, KeyCode::Char('2'));
        tap(&mut app, KeyCode::Tab);
        tap(&mut app, KeyCode::Enter); // toggle first feature off
        tap(&mut app, KeyCode::Enter); // and back on
        assert_eq!(app.section(), SectionId::Features);
        assert!(app.settings.features[FeatureKey::EditorAssist].enabled);
    }

    #[test]
    fn test_q_types_while_editing_and_quits_otherwise() {
        let mut app = app();
        tap(&mut app, KeyCode::Char('3'));
        tap(&mut app, KeyCode::Tab);
        tap(&mut app, KeyCode::Enter); // edit API URL
        type_str(&mut app, "q1");
        assert_eq!(app.settings.api_url, "q1");
        assert!(!app.should_quit);

        tap(&mut app, KeyCode::Enter);
        assert!(app.editing.is_none());
        tap(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_prompt_modal_stages_until_save() {
        let mut app = app();
        let key = FeatureKey::EditorAssist;
        let original = app.settings.features[key].system_prompt.clone();

        tap(&mut app, KeyCode::Char('2'));
        tap(&mut app, KeyCode::Tab);
        tap(&mut app, KeyCode::Down);
        tap(&mut app, KeyCode::Down);
        assert_eq!(app.panel.focused_field(), Some(FieldId::FeaturePrompt(key)));

        tap(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::PromptEditor(key)));

        tap(&mut app, KeyCode::Enter);
        type_str(&mut app, "Be brief.");
        assert_eq!(app.settings.features[key].system_prompt, original);

        tap_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.modal.is_none());
        assert_eq!(
            app.settings.features[key].system_prompt,
            format!("{}\nBe brief.", original)
        );
    }

    #[test]
    fn test_help_modal_absorbs_keys() {
        let mut app = app();
        tap(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));
        tap(&mut app, KeyCode::Char('3'));
        assert_eq!(app.section(), SectionId::General);
        tap(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_left_adjusts_then_returns_to_sidebar() {
        let mut app = app();
        tap(&mut app, KeyCode::Tab);
        tap(&mut app, KeyCode::End); // Language
        tap(&mut app, KeyCode::Right);
        assert_eq!(app.settings.language.code(), "ja");
        tap(&mut app, KeyCode::Up); // Auto Sync
        tap(&mut app, KeyCode::Left);
        assert!(!app.content_focused());
    }

    #[test]
    fn test_ctrl_c_quits_from_modal() {
        let mut app = app();
        app.open_prompt_editor(FeatureKey::NotePolish);
        tap_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
