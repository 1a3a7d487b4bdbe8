//! User settings carried through the application state.
//!
//! The only persisted preference is the color scheme. It lives in an explicit
//! [`Settings`] value owned by [`AppState`](crate::app::AppState) and reaches disk
//! through the [`SettingsStore`](crate::storage::SettingsStore) trait.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark color scheme.
///
/// Serialized as the lowercase strings `"dark"` and `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark palette (default).
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl ThemePreference {
    /// Returns the other preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Storage and configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme preference: {other}")),
        }
    }
}

/// Explicit settings object for the gallery UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Active color scheme.
    pub theme: ThemePreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_preference() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!(" dark ".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert!("sepia".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&ThemePreference::Light).unwrap(), "\"light\"");
    }
}
