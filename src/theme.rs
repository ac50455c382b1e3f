// Theme system for the TUI
//
// A theme is a resolved set of semantic colors. Themes are bundled in the
// binary; unknown names fall back to the default dark theme.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Name of the fallback theme
pub const DEFAULT_THEME: &str = "Assist Dark";

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Focused border, active section
    pub status_bar: Color,
    pub muted: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Outcome Colors ──────────────────────────────────────
    pub success: Color,
    pub error: Color,
    pub pending: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Bundled theme names, in selector order
    pub fn list_available() -> Vec<String> {
        vec![
            "Assist Dark".to_string(),
            "Assist Light".to_string(),
            "Terminal".to_string(),
        ]
    }

    /// Load theme by name (case-insensitive, falls back to default)
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "assist light" => Self::assist_light(),
            "terminal" => Self::terminal(),
            "assist dark" => Self::assist_dark(),
            other => {
                tracing::warn!("Unknown theme '{}', using {}", other, DEFAULT_THEME);
                Self::assist_dark()
            }
        }
    }

    /// Load theme and optionally drop its background color
    pub fn by_name_with_background(name: &str, use_theme_background: bool) -> Self {
        let mut theme = Self::by_name(name);
        if !use_theme_background {
            theme.background = Color::Reset;
        }
        theme
    }

    fn assist_dark() -> Self {
        Self {
            name: "Assist Dark".to_string(),
            background: Color::Rgb(0x1e, 0x1f, 0x29),
            foreground: Color::Rgb(0xe6, 0xe6, 0xef),
            title: Color::Rgb(0xbd, 0x93, 0xf9),
            border: Color::Rgb(0x4a, 0x4c, 0x5e),
            highlight: Color::Rgb(0x8b, 0xe9, 0xfd),
            status_bar: Color::Rgb(0x9a, 0x9c, 0xb0),
            muted: Color::Rgb(0x7a, 0x7c, 0x90),
            selection: Color::Rgb(0x44, 0x47, 0x5a),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            success: Color::Rgb(0x50, 0xfa, 0x7b),
            error: Color::Rgb(0xff, 0x55, 0x55),
            pending: Color::Rgb(0xf1, 0xfa, 0x8c),
            border_type: BorderType::Rounded,
        }
    }

    fn assist_light() -> Self {
        Self {
            name: "Assist Light".to_string(),
            background: Color::Rgb(0xfa, 0xfa, 0xfa),
            foreground: Color::Rgb(0x38, 0x3a, 0x42),
            title: Color::Rgb(0x4f, 0x46, 0xe5),
            border: Color::Rgb(0xc8, 0xc8, 0xd0),
            highlight: Color::Rgb(0x02, 0x84, 0xc7),
            status_bar: Color::Rgb(0x6b, 0x6d, 0x78),
            muted: Color::Rgb(0x9a, 0x9c, 0xa6),
            selection: Color::Rgb(0xdb, 0xea, 0xfe),
            selection_fg: Color::Rgb(0x1e, 0x29, 0x3b),
            success: Color::Rgb(0x16, 0xa3, 0x4a),
            error: Color::Rgb(0xdc, 0x26, 0x26),
            pending: Color::Rgb(0xca, 0x8a, 0x04),
            border_type: BorderType::Rounded,
        }
    }

    fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            title: Color::Magenta,
            border: Color::DarkGray,
            highlight: Color::Cyan,
            status_bar: Color::Gray,
            muted: Color::DarkGray,
            selection: Color::Blue,
            selection_fg: Color::White,
            success: Color::Green,
            error: Color::Red,
            pending: Color::Yellow,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::list_available() {
            assert_eq!(Theme::by_name(&name).name, name);
        }
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(Theme::by_name("Solarized Mauve").name, DEFAULT_THEME);
        assert_eq!(Theme::by_name("assist light").name, "Assist Light");
    }

    #[test]
    fn test_background_toggle() {
        let theme = Theme::by_name_with_background("Assist Dark", false);
        assert_eq!(theme.background, Color::Reset);
    }
}
