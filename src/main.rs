// Redmine Assist - Terminal settings editor for the Redmine AI assistant
//
// Edits the assistant's in-memory settings: endpoint credentials, per-feature
// toggles and prompts, script options and a feedback form.
//
// Architecture:
// - Settings: the in-memory configuration store and its operations
// - Client: endpoint and feedback collaborators (http or simulated)
// - TUI (ratatui): sidebar navigation, field editing, prompt modal
// - Config/logging: TOML config file, env overrides, in-memory log buffer

mod cli;
mod client;
mod config;
mod logging;
mod settings;
mod theme;
mod tui;

use anyhow::Result;
use client::Collaborators;
use config::Config;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs are captured in memory so they never garble the TUI
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer);

    let collaborators = Collaborators::from_config(&config.endpoint)?;

    tracing::info!(
        mode = config.endpoint.mode.as_str(),
        theme = %config.theme,
        "Starting settings editor"
    );

    tui::run_tui(config, log_buffer, collaborators).await
}
