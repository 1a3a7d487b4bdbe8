//! Color palettes and ANSI escape sequence generation.
//!
//! Two built-in palettes match the two [`ThemePreference`] values. Both are TOML
//! documents compiled into the binary; a custom palette with the same shape can
//! be parsed with [`Theme::from_toml`].
//!
//! # TOML Format
//!
//! ```toml
//! name = "galeria-dark"
//!
//! [colors]
//! header_fg = "#e4e4e7"
//! header_bg = "#18181b"        # optional
//! accent = "#f59e0b"
//! selection_fg = "#09090b"
//! selection_bg = "#f59e0b"
//! text_normal = "#d4d4d8"
//! text_dim = "#71717a"
//! border = "#3f3f46"
//! tile_border = "#52525b"
//! sidebar_active_fg = "#fbbf24"
//! lightbox_bg = "#000000"      # optional
//! empty_state_fg = "#a1a1aa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use galeria::ui::Theme;
//! use galeria::ThemePreference;
//!
//! let theme = Theme::for_preference(ThemePreference::Light);
//! print!("{}{}Bold{}", Theme::fg(&theme.colors.header_fg), Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{GalleryError, Result};
use crate::domain::ThemePreference;
use serde::{Deserialize, Serialize};

const DARK_TOML: &str = include_str!("../../themes/galeria-dark.toml");
const LIGHT_TOML: &str = include_str!("../../themes/galeria-light.toml");

/// Named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Palette name.
    pub name: String,
    /// Colors for every UI element.
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#f59e0b"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text.
    pub header_fg: String,
    /// Header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Highlights such as the lightbox counter.
    pub accent: String,

    /// Cursor tile foreground.
    pub selection_fg: String,
    /// Cursor tile background.
    pub selection_bg: String,

    /// Normal text.
    pub text_normal: String,
    /// Secondary text (footer, captions).
    pub text_dim: String,

    /// Separator lines.
    pub border: String,
    /// Tile frames in grid and miniature modes.
    pub tile_border: String,

    /// Active sidebar entry.
    pub sidebar_active_fg: String,

    /// Lightbox backdrop.
    #[serde(default)]
    pub lightbox_bg: Option<String>,

    /// Empty state message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Returns the built-in palette for `preference`.
    ///
    /// Falls back to a hard-coded monochrome palette if the embedded TOML is
    /// somehow unreadable, so rendering never fails.
    #[must_use]
    pub fn for_preference(preference: ThemePreference) -> Self {
        let source = match preference {
            ThemePreference::Dark => DARK_TOML,
            ThemePreference::Light => LIGHT_TOML,
        };

        Self::from_toml(source).unwrap_or_else(|e| {
            tracing::error!(error = %e, theme = %preference, "built-in palette failed to parse");
            Self::monochrome()
        })
    }

    /// Parses a palette from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| GalleryError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    fn monochrome() -> Self {
        let white = "#ffffff".to_string();
        let grey = "#808080".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white.clone(),
                header_bg: None,
                accent: white.clone(),
                selection_fg: "#000000".to_string(),
                selection_bg: white.clone(),
                text_normal: white.clone(),
                text_dim: grey.clone(),
                border: grey.clone(),
                tile_border: grey,
                sidebar_active_fg: white.clone(),
                lightbox_bg: None,
                empty_state_fg: white,
            },
        }
    }

    /// Parses `#rrggbb` into components, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold escape.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Dim escape.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Reset escape, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_preference(ThemePreference::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_palettes_parse() {
        assert_eq!(Theme::for_preference(ThemePreference::Dark).name, "galeria-dark");
        assert_eq!(Theme::for_preference(ThemePreference::Light).name, "galeria-light");
    }

    #[test]
    fn invalid_toml_is_a_theme_error() {
        assert!(matches!(Theme::from_toml("name = 1"), Err(GalleryError::Theme(_))));
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }
}
