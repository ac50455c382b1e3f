//! System clipboard access for the prompt editor
//!
//! A fresh `arboard::Clipboard` is opened per copy; holding one open for
//! the whole session keeps an X11/Wayland connection alive for nothing.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
///
/// Fails on headless sessions (no display server) or when the platform
/// clipboard refuses access.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Clipboard unavailable")?
        .set_text(text.to_owned())
        .context("Clipboard rejected text")
}
