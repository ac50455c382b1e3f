//! Editor session seed values

use serde::Deserialize;

/// Initial values copied into the editor's `Configuration` at startup
#[derive(Debug, Clone, Default)]
pub struct EditorConfig {
    /// Pre-filled API URL (empty = user must type it)
    pub api_url: Option<String>,
    /// Pre-filled API key, from REDMINE_ASSIST_API_KEY only
    pub api_key: Option<String>,
}

/// Editor settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileEditor {
    pub api_url: Option<String>,
}

impl EditorConfig {
    /// Env values win over the file
    pub fn from_file(
        file: Option<FileEditor>,
        env_api_url: Option<String>,
        env_api_key: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();

        Self {
            api_url: env_api_url.or(file.api_url).filter(|s| !s.is_empty()),
            api_key: env_api_key.filter(|s| !s.is_empty()),
        }
    }
}
