//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting
//! both built-in themes (Catppuccin variants) and custom themes loaded from
//! TOML files. It provides utilities for converting hex colors to ANSI escape
//! sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#45475a"
//! search_bar_focused_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! letter_active_fg = "#1e1e2e"
//! letter_active_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! loading_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! detail_border = "#b4befe"
//! ```

use crate::domain::error::{Result, ZatlasError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color when unfocused.
    pub search_bar_border: String,
    /// Search bar border color while typing.
    pub search_bar_focused_border: String,

    /// Substring match highlight foreground.
    pub match_highlight_fg: String,
    /// Substring match highlight background.
    pub match_highlight_bg: String,

    /// Active alphabet letter foreground.
    pub letter_active_fg: String,
    /// Active alphabet letter background.
    pub letter_active_bg: String,

    /// Empty-result message color.
    pub empty_state_fg: String,

    /// Loading indicator color.
    pub loading_fg: String,

    /// Error panel color.
    pub error_fg: String,

    /// Detail overlay border color.
    pub detail_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZatlasError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type
    /// mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ZatlasError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ZatlasError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present, validates length, and parses the six
    /// hex digits in one pass. Returns `(255, 255, 255)` (white) on parse
    /// errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        match u32::from_str_radix(hex, 16) {
            Ok(rgb) if hex.len() == 6 => (
                ((rgb >> 16) & 0xff) as u8,
                ((rgb >> 8) & 0xff) as u8,
                (rgb & 0xff) as u8,
            ),
            _ => (255, 255, 255),
        }
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).expect("built-in theme parses");
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn custom_theme_file_round_trips() {
        let theme = Theme::default();
        let serialized = toml::to_string(&theme).expect("theme serializes");

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(serialized.as_bytes()).expect("write");

        let loaded = Theme::from_file(file.path()).expect("file theme parses");
        assert_eq!(loaded.name, theme.name);
        assert_eq!(loaded.colors.header_fg, theme.colors.header_fg);
    }

    #[test]
    fn missing_theme_file_is_an_error() {
        assert!(Theme::from_file("/no/such/theme.toml").is_err());
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // Malformed input degrades to white rather than failing.
        assert_eq!(Theme::fg("oops"), "\u{001b}[38;2;255;255;255m");
    }
}
