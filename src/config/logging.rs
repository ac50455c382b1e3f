//! `[logging]` section: level filter and optional JSON file output

use serde::Deserialize;
use std::path::PathBuf;

use super::APP_NAME;

/// Levels accepted for `level`; anything else falls back to "info"
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// When the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// Single ever-growing file
    Never,
}

impl LogRotation {
    /// Case-insensitive; unknown values mean daily
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error (RUST_LOG wins when set)
    pub level: String,
    /// Write JSON lines to `file_dir` besides the in-app log buffer
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: default_log_dir(),
            file_rotation: LogRotation::Daily,
            file_prefix: APP_NAME.to_string(),
        }
    }
}

/// `~/.config/redmine-assist/logs`, or `./logs` without a home directory
fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config").join(APP_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Lowercased level if known
fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.contains(&level.as_str()).then_some(level)
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level {
            Some(raw) => normalize_level(&raw).unwrap_or_else(|| {
                eprintln!("Warning: unknown log level {:?}, using \"info\"", raw);
                defaults.level.clone()
            }),
            None => defaults.level,
        };

        Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(defaults.file_rotation),
            file_prefix: file
                .file_prefix
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }
}
