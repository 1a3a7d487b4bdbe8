//! Storage record models for the settings file.

use crate::domain::ThemePreference;
use serde::{Deserialize, Serialize};

/// Current version of the settings file format.
pub const SETTINGS_VERSION: u32 = 1;

/// Persisted user settings.
///
/// ```json
/// { "version": 1, "theme": "dark" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Format version for future migrations.
    pub version: u32,

    /// Stored theme, `None` until the user first toggles it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme: None,
        }
    }
}
