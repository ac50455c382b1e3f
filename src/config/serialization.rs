//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML string literal with escaping
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Serialize the optional [editor] section
    fn editor_to_toml(&self) -> String {
        match &self.editor.api_url {
            Some(url) => format!("api_url = {}\n", quoted(url)),
            None => "# api_url = \"https://redmine.example.com/ai\"\n".to_string(),
        }
    }

    /// Serialize the feedback URL line (commented out when unset)
    fn feedback_url_to_toml(&self) -> String {
        match &self.endpoint.feedback_url {
            Some(url) => format!("feedback_url = {}\n", quoted(url)),
            None => "# feedback_url = \"https://redmine.example.com/feedback\"\n".to_string(),
        }
    }

    /// Render the full config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# redmine-assist configuration

# Theme: Assist Dark, Assist Light, Terminal
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the in-app log buffer)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}

# External collaborators for the connection test and feedback form
# mode = "simulated" never touches the network (REDMINE_ASSIST_ENDPOINT overrides)
[endpoint]
mode = "{mode}"  # simulated, http
connection_delay_ms = {conn_delay}
feedback_delay_ms = {fb_delay}
timeout_secs = {timeout}
{feedback_url}
# Initial values for the editor (API key: set REDMINE_ASSIST_API_KEY)
[editor]
{editor}"#,
            theme = quoted(&self.theme),
            use_bg = self.use_theme_background,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
            mode = self.endpoint.mode.as_str(),
            conn_delay = self.endpoint.connection_delay_ms,
            fb_delay = self.endpoint.feedback_delay_ms,
            timeout = self.endpoint.timeout_secs,
            feedback_url = self.feedback_url_to_toml(),
            editor = self.editor_to_toml(),
        )
    }
}
