//! Settings editor state
//!
//! `Configuration` is the single source of truth the editor mutates. It is
//! created with fixed defaults when the editor opens and lives for the
//! editor session only; nothing here touches disk or the network.
//!
//! Every store operation is synchronous and total: feature keys are a
//! closed enum, so there is no "unknown key" failure path.

pub mod connection;
pub mod feedback;
pub mod features;
pub mod navigator;
pub mod notification;
pub mod prompt;
pub mod script;

pub use features::{FeatureKey, FeatureMap, ModelChoice};
pub use script::{ScriptConfig, ScriptUpdate};

use sha2::{Digest, Sha256};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ja,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ja, Language::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    /// Name shown in the selector (native script)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ja => "日本語",
            Language::Zh => "中文",
        }
    }

    /// Next entry in the selector (wraps)
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous entry in the selector (wraps)
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Secret
// ─────────────────────────────────────────────────────────────────────────────

/// API key wrapper that never prints its contents
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Short SHA-256 fingerprint, safe for logs
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        let hash = hasher.finalize();
        format!("{:x}", hash)[..16].to_string()
    }

    /// Bullet mask with the same character count
    pub fn masked(&self) -> String {
        "•".repeat(self.0.chars().count())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "Secret(<empty>)")
        } else {
            write!(f, "Secret({})", self.fingerprint())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Root aggregate edited by the settings editor
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub notifications: bool,
    pub auto_sync: bool,
    pub language: Language,
    pub api_url: String,
    pub api_key: Secret,
    pub features: FeatureMap,
    pub script: ScriptConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_sync: true,
            language: Language::default(),
            api_url: String::new(),
            api_key: Secret::default(),
            features: FeatureMap::default(),
            script: ScriptConfig::default(),
        }
    }
}

/// Partial update for the general options (shallow merge)
#[derive(Debug, Clone, Default)]
pub struct GeneralUpdate {
    pub notifications: Option<bool>,
    pub auto_sync: Option<bool>,
    pub language: Option<Language>,
}

impl Configuration {
    /// Defaults with API credentials pre-filled (from the app config)
    pub fn with_credentials(api_url: Option<String>, api_key: Option<String>) -> Self {
        let mut config = Self::default();
        config.set_api_credentials(api_url, api_key);
        config
    }

    pub fn set_general(&mut self, update: GeneralUpdate) {
        if let Some(v) = update.notifications {
            self.notifications = v;
        }
        if let Some(v) = update.auto_sync {
            self.auto_sync = v;
        }
        if let Some(v) = update.language {
            self.language = v;
        }
    }

    /// Shallow-merge API credentials; no validation happens here
    pub fn set_api_credentials(&mut self, api_url: Option<String>, api_key: Option<String>) {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(key) = api_key {
            self.api_key = Secret::new(key);
        }
    }

    /// Both credentials are non-empty (connection test precondition)
    pub fn credentials_present(&self) -> bool {
        !self.api_url.is_empty() && !self.api_key.is_empty()
    }

    pub fn toggle_feature_enabled(&mut self, key: FeatureKey) {
        let feature = &mut self.features[key];
        feature.enabled = !feature.enabled;
        tracing::debug!("{} enabled: {}", key, feature.enabled);
    }

    /// Set the model choice. `custom_model` is left untouched on purpose,
    /// so switching back to `Custom` restores the previous value.
    pub fn set_feature_model(&mut self, key: FeatureKey, model: ModelChoice) {
        self.features[key].model = model;
        tracing::debug!("{} model: {}", key, model.as_str());
    }

    pub fn set_feature_custom_model(&mut self, key: FeatureKey, value: impl Into<String>) {
        self.features[key].custom_model = value.into();
    }

    pub fn set_feature_system_prompt(&mut self, key: FeatureKey, value: impl Into<String>) {
        self.features[key].system_prompt = value.into();
    }

    pub fn set_script(&mut self, update: ScriptUpdate) {
        self.script.apply(update);
    }

    /// Model identifier for a feature, resolving "custom"
    pub fn effective_model(&self, key: FeatureKey) -> &str {
        self.features[key].effective_model()
    }
}
