// Settings view - the editor's main screen
//
// Two-panel layout:
// - Left: Section navigation
// - Right: Fields of the active section (About has its own renderer)

use super::about;
use crate::settings::connection::ConnectionTestState;
use crate::settings::navigator::SectionId;
use crate::settings::script::{BACKUP_INTERVAL_RANGE, UPDATE_INTERVAL_RANGE};
use crate::settings::{FeatureKey, ModelChoice};
use crate::tui::app::App;
use crate::tui::form::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Column width reserved for field labels
const LABEL_WIDTH: usize = 24;

/// Longest prompt preview shown inline
const PROMPT_PREVIEW_CHARS: usize = 40;

/// Main render function for the Settings view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // Split into left nav (fixed) and right content (fill)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(30)])
        .split(area);

    render_sections(f, chunks[0], app);

    match app.section() {
        SectionId::About => about::render(f, chunks[1], app),
        section => render_fields(f, chunks[1], app, section),
    }
}

/// Render the left section navigation panel
fn render_sections(f: &mut Frame, area: Rect, app: &App) {
    let navigator = &app.panel.navigator;
    let border_color = if app.content_focused() {
        app.theme.border
    } else {
        app.theme.highlight
    };

    let items: Vec<ListItem> = navigator
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == navigator.active_index();
            let prefix = if is_selected { " ▸ " } else { "   " };
            let style = if is_selected {
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.foreground)
            };
            ListItem::new(format!("{}{} {}", prefix, i + 1, entry.label)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(" Settings "),
    );

    f.render_widget(list, area);
}

// ─────────────────────────────────────────────────────────────────────────────
// Field rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Rendered lines plus where the selection and edit cursor landed
#[derive(Default)]
struct FormLines<'a> {
    lines: Vec<Line<'a>>,
    selected_line: Option<usize>,
    /// (column, line) of the inline edit cursor, relative to the inner area
    cursor: Option<(u16, usize)>,
}

/// Render the right pane for a field-based section
fn render_fields(f: &mut Frame, area: Rect, app: &App, section: SectionId) {
    let is_focused = app.content_focused();
    let border_color = if is_focused {
        app.theme.highlight
    } else {
        app.theme.border
    };

    let form = build_lines(app, section);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", app.panel.navigator.active_label()));
    let inner = block.inner(area);

    // Keep the selected line in view
    let viewport = inner.height as usize;
    let scroll = match form.selected_line {
        Some(line) if viewport > 0 && line >= viewport => line + 1 - viewport,
        _ => 0,
    };

    let paragraph = Paragraph::new(form.lines)
        .style(Style::default().fg(app.theme.foreground))
        .scroll((scroll as u16, 0))
        .block(block);
    f.render_widget(paragraph, area);

    if let Some((col, line)) = form.cursor {
        if line >= scroll && line - scroll < viewport {
            let x = (inner.x + col).min(inner.right().saturating_sub(1));
            let y = inner.y + (line - scroll) as u16;
            f.set_cursor_position(Position::new(x, y));
        }
    }
}

fn build_lines<'a>(app: &'a App, section: SectionId) -> FormLines<'a> {
    let mut form = FormLines::default();
    let selected = app.panel.selected_field();
    let fields = app.panel.fields();

    form.lines.push(Line::raw(""));
    if let Some(intro) = section_intro(section) {
        form.lines.push(Line::from(Span::styled(
            format!("  {}", intro),
            Style::default().fg(app.theme.muted),
        )));
        form.lines.push(Line::raw(""));
    }

    let mut current_feature: Option<FeatureKey> = None;
    for &field in fields {
        // Feature group header
        if let Some(key) = field.feature() {
            if current_feature != Some(key) {
                if current_feature.is_some() {
                    form.lines.push(Line::raw(""));
                }
                push_feature_header(&mut form, app, key);
                current_feature = Some(key);
            }
        }

        let indent = if field.feature().is_some() { 4 } else { 2 };
        if selected == Some(field) {
            form.selected_line = Some(form.lines.len());
        }
        push_field(&mut form, app, field, indent, selected == Some(field));
    }

    if section == SectionId::Feedback {
        if let Some(error) = app.feedback.error() {
            form.lines.push(Line::raw(""));
            form.lines.push(Line::from(Span::styled(
                format!("  ✗ {}", error),
                Style::default().fg(app.theme.error),
            )));
        }
    }

    form
}

fn section_intro(section: SectionId) -> Option<&'static str> {
    match section {
        SectionId::General => Some("Basic editor preferences"),
        SectionId::Features => Some("Enable AI assistants and choose their models"),
        SectionId::Api => Some("Credentials for the AI backend"),
        SectionId::Script => Some("Advanced options for the userscript"),
        SectionId::Feedback => Some("Report a bug or suggest a feature"),
        SectionId::About => None,
    }
}

fn push_feature_header<'a>(form: &mut FormLines<'a>, app: &'a App, key: FeatureKey) {
    let feature = &app.settings.features[key];
    // Model downstream calls would use; custom text only counts when selected
    let model = if !feature.enabled {
        "off"
    } else {
        match app.settings.effective_model(key) {
            "" => "no model",
            model => model,
        }
    };
    form.lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", feature.label),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  · {}", model), Style::default().fg(app.theme.muted)),
    ]));
    form.lines.push(Line::from(Span::styled(
        format!("  {}", feature.description),
        Style::default().fg(app.theme.muted),
    )));
}

fn push_field<'a>(
    form: &mut FormLines<'a>,
    app: &'a App,
    field: FieldId,
    indent: usize,
    is_selected: bool,
) {
    let focused = is_selected && app.content_focused();
    let marker = if focused { "▸ " } else { "  " };

    let label_style = if focused {
        Style::default()
            .bg(app.theme.selection)
            .fg(app.theme.selection_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.foreground)
    };

    let mut spans = vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(marker, Style::default().fg(app.theme.highlight)),
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
    ];

    match app.editing.as_ref().filter(|edit| edit.field == field) {
        Some(edit) => {
            spans.push(Span::styled(
                edit.input.display(),
                Style::default()
                    .fg(app.theme.foreground)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            let col = (indent + marker.chars().count() + LABEL_WIDTH) as u16
                + edit.input.cursor_column();
            form.cursor = Some((col, form.lines.len()));
        }
        None => {
            let (value, style) = field_value(app, field);
            spans.push(Span::styled(value, style));
        }
    }

    if let Some(hint) = field.hint() {
        spans.push(Span::styled(
            format!("  · {}", hint),
            Style::default().fg(app.theme.muted),
        ));
    }

    form.lines.push(Line::from(spans));
}

/// Display text and style for a field's current value
fn field_value(app: &App, field: FieldId) -> (String, Style) {
    let theme = &app.theme;
    let normal = Style::default().fg(theme.foreground);
    let muted = Style::default().fg(theme.muted);
    let settings = &app.settings;

    let toggle = |on: bool| {
        if on {
            ("[x] On".to_string(), Style::default().fg(theme.success))
        } else {
            ("[ ] Off".to_string(), muted)
        }
    };
    let text = |value: &str, placeholder: &str| {
        if value.is_empty() {
            (placeholder.to_string(), muted)
        } else {
            (value.to_string(), normal)
        }
    };

    match field {
        FieldId::Notifications => toggle(settings.notifications),
        FieldId::AutoSync => toggle(settings.auto_sync),
        FieldId::Language => (format!("◂ {} ▸", settings.language.display_name()), normal),

        FieldId::FeatureEnabled(key) => toggle(settings.features[key].enabled),
        FieldId::FeatureModel(key) => {
            let model = settings.features[key].model;
            let label = match model {
                ModelChoice::Custom => "Custom…",
                other => other.as_str(),
            };
            (format!("◂ {} ▸", label), normal)
        }
        FieldId::FeatureCustomModel(key) => {
            text(&settings.features[key].custom_model, "Enter a model name")
        }
        FieldId::FeaturePrompt(key) => {
            let prompt = &settings.features[key].system_prompt;
            let first_line = prompt.lines().next().unwrap_or_default();
            let mut preview: String = first_line.chars().take(PROMPT_PREVIEW_CHARS).collect();
            if first_line.chars().count() > PROMPT_PREVIEW_CHARS || prompt.lines().nth(1).is_some()
            {
                preview.push('…');
            }
            if preview.is_empty() {
                ("(empty)  [Enter to edit]".to_string(), muted)
            } else {
                (format!("{}  [Enter to edit]", preview), normal)
            }
        }

        FieldId::ApiUrl => text(&settings.api_url, "https://your-redmine.example/api"),
        FieldId::ApiKey => {
            if settings.api_key.is_empty() {
                ("Not set".to_string(), muted)
            } else {
                (settings.api_key.masked(), normal)
            }
        }
        FieldId::TestConnection => connection_value(app),

        FieldId::UpdateInterval => number_value(
            app,
            settings.script.update_interval,
            "min",
            UPDATE_INTERVAL_RANGE,
        ),
        FieldId::DebugMode => toggle(settings.script.debug_mode),
        FieldId::AllowExperimental => toggle(settings.script.allow_experimental),
        FieldId::AutoBackup => toggle(settings.script.auto_backup),
        FieldId::BackupInterval => number_value(
            app,
            settings.script.backup_interval,
            "h",
            BACKUP_INTERVAL_RANGE,
        ),

        FieldId::FeedbackKind => match app.feedback.kind {
            Some(kind) => (format!("◂ {} ▸", kind.label()), normal),
            None => ("◂ Select a type ▸".to_string(), muted),
        },
        FieldId::FeedbackMessage => text(&app.feedback.message, "Describe the issue or idea"),
        FieldId::FeedbackContact => text(&app.feedback.contact, "Email or Redmine login"),
        FieldId::SubmitFeedback => {
            if app.feedback.is_submitting() {
                (
                    format!("{} Submitting…", app.spinner_char()),
                    Style::default().fg(theme.pending),
                )
            } else {
                ("[ Submit ]".to_string(), Style::default().fg(theme.highlight))
            }
        }
    }
}

fn number_value(app: &App, value: u32, unit: &str, (min, max): (u32, u32)) -> (String, Style) {
    (
        format!("◂ {} {} ▸  ({}-{})", value, unit, min, max),
        Style::default().fg(app.theme.foreground),
    )
}

fn connection_value(app: &App) -> (String, Style) {
    let theme = &app.theme;
    match app.connection.state() {
        ConnectionTestState::Pending => (
            format!("{} Testing…", app.spinner_char()),
            Style::default().fg(theme.pending),
        ),
        _ if !app.connection.can_start(&app.settings) => (
            "[ Test ]  enter URL and key first".to_string(),
            Style::default().fg(theme.muted),
        ),
        ConnectionTestState::Success => (
            "[ Test ]  ✓ connected".to_string(),
            Style::default().fg(theme.success),
        ),
        ConnectionTestState::Error => (
            "[ Test ]  ✗ failed".to_string(),
            Style::default().fg(theme.error),
        ),
        ConnectionTestState::Idle => (
            "[ Test ]".to_string(),
            Style::default().fg(theme.highlight),
        ),
    }
}
