//! AI feature configuration
//!
//! The feature collection is closed: exactly one `FeatureConfig` per
//! `FeatureKey`, stored in a fixed record rather than a map. There is no
//! way to add or remove an entry, only to mutate one in place.

use std::fmt;
use std::ops::{Index, IndexMut};

// ─────────────────────────────────────────────────────────────────────────────
// Feature Keys
// ─────────────────────────────────────────────────────────────────────────────

/// The three AI-assist capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    EditorAssist,
    NotePolish,
    WeeklyReport,
}

impl FeatureKey {
    /// Every key, in display order
    pub const ALL: [FeatureKey; 3] = [
        FeatureKey::EditorAssist,
        FeatureKey::NotePolish,
        FeatureKey::WeeklyReport,
    ];

    /// Stable identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::EditorAssist => "AI_EDITOR_ASSIST",
            FeatureKey::NotePolish => "AI_NOTE_POLISH",
            FeatureKey::WeeklyReport => "AI_WEEKLY_REPORT",
        }
    }

    /// Position within `ALL`
    pub fn index(&self) -> usize {
        match self {
            FeatureKey::EditorAssist => 0,
            FeatureKey::NotePolish => 1,
            FeatureKey::WeeklyReport => 2,
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Model Choice
// ─────────────────────────────────────────────────────────────────────────────

/// Model selection for a feature: one of the known models, or "custom"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    Gpt4oMini,
    Gpt4o,
    Gpt35Turbo,
    Custom,
}

impl ModelChoice {
    /// Selector order
    pub const ALL: [ModelChoice; 4] = [
        ModelChoice::Gpt4oMini,
        ModelChoice::Gpt4o,
        ModelChoice::Gpt35Turbo,
        ModelChoice::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelChoice::Gpt4oMini => "gpt-4o-mini",
            ModelChoice::Gpt4o => "gpt-4o",
            ModelChoice::Gpt35Turbo => "gpt-3.5-turbo",
            ModelChoice::Custom => "custom",
        }
    }

    /// Next entry in the selector (wraps)
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous entry in the selector (wraps)
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature Config
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for a single AI feature
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    pub enabled: bool,
    /// Display name (fixed per key)
    pub label: &'static str,
    /// Display description (fixed per key)
    pub description: &'static str,
    pub model: ModelChoice,
    /// Only meaningful while `model == Custom`, but retained otherwise
    pub custom_model: String,
    pub system_prompt: String,
}

impl FeatureConfig {
    /// Default config for a feature key
    pub fn default_for(key: FeatureKey) -> Self {
        let (label, description, system_prompt) = match key {
            FeatureKey::EditorAssist => (
                "AI Editor Assistant",
                "Adds a magic wand button to help fill daily updates",
                EDITOR_ASSIST_PROMPT,
            ),
            FeatureKey::NotePolish => (
                "AI Note Polish",
                "Quick edit button to improve note formatting and clarity",
                NOTE_POLISH_PROMPT,
            ),
            FeatureKey::WeeklyReport => (
                "AI Weekly Report",
                "Generates weekly summary from daily notes",
                WEEKLY_REPORT_PROMPT,
            ),
        };

        Self {
            enabled: true,
            label,
            description,
            model: ModelChoice::default(),
            custom_model: String::new(),
            system_prompt: system_prompt.to_string(),
        }
    }

    /// Model identifier downstream consumers should use
    pub fn effective_model(&self) -> &str {
        match self.model {
            ModelChoice::Custom => &self.custom_model,
            other => other.as_str(),
        }
    }
}

const EDITOR_ASSIST_PROMPT: &str = "You are a helpful assistant that analyzes daily updates.
Read the user's draft and fill in the missing sections:
- What was done today
- What is planned next
- Blockers, if any
Keep the user's wording where possible and answer in the user's language.";

const NOTE_POLISH_PROMPT: &str = "You are a helpful assistant that polishes issue notes.
Fix grammar and formatting, keep technical terms and links untouched,
and never change the meaning of the note.";

const WEEKLY_REPORT_PROMPT: &str = "You are an assistant that creates weekly summaries from daily notes.
Group the work by project, highlight completed items and open risks,
and keep the report under one page.";

// ─────────────────────────────────────────────────────────────────────────────
// Feature Map
// ─────────────────────────────────────────────────────────────────────────────

/// Closed collection holding one config per `FeatureKey`
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap {
    entries: [FeatureConfig; 3],
}

impl FeatureMap {
    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &FeatureConfig)> {
        FeatureKey::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for FeatureMap {
    fn default() -> Self {
        Self {
            entries: FeatureKey::ALL.map(FeatureConfig::default_for),
        }
    }
}

impl Index<FeatureKey> for FeatureMap {
    type Output = FeatureConfig;

    fn index(&self, key: FeatureKey) -> &FeatureConfig {
        &self.entries[key.index()]
    }
}

impl IndexMut<FeatureKey> for FeatureMap {
    fn index_mut(&mut self, key: FeatureKey) -> &mut FeatureConfig {
        &mut self.entries[key.index()]
    }
}
