//! External collaborator configuration
//!
//! Controls whether the connection test and feedback form talk to real
//! HTTP endpoints or to the built-in simulation.

use serde::Deserialize;

/// How collaborator calls are carried out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndpointMode {
    /// Fixed delay, always succeeds (no network)
    #[default]
    Simulated,
    /// Real HTTP requests via reqwest
    Http,
}

impl EndpointMode {
    /// Parse mode string from config or env
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "http" => Self::Http,
            "simulated" => Self::Simulated,
            _ => Self::Simulated, // Unknown values stay offline
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::Http => "http",
        }
    }
}

/// Collaborator settings
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub mode: EndpointMode,
    /// Simulated connection test delay
    pub connection_delay_ms: u64,
    /// Simulated feedback submit delay
    pub feedback_delay_ms: u64,
    /// Where HTTP mode POSTs feedback (None = simulate feedback)
    pub feedback_url: Option<String>,
    /// HTTP request timeout
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            mode: EndpointMode::Simulated,
            connection_delay_ms: 1500,
            feedback_delay_ms: 1000,
            feedback_url: None,
            timeout_secs: 10,
        }
    }
}

/// Endpoint settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileEndpoint {
    pub mode: Option<String>,
    pub connection_delay_ms: Option<u64>,
    pub feedback_delay_ms: Option<u64>,
    pub feedback_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl EndpointConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileEndpoint>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            mode: file
                .mode
                .map(|s| EndpointMode::from_str(&s))
                .unwrap_or(defaults.mode),
            connection_delay_ms: file
                .connection_delay_ms
                .unwrap_or(defaults.connection_delay_ms),
            feedback_delay_ms: file.feedback_delay_ms.unwrap_or(defaults.feedback_delay_ms),
            feedback_url: file.feedback_url.filter(|s| !s.is_empty()),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs).max(1),
        }
    }
}
