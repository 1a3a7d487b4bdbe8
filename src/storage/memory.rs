//! In-memory settings store.

use crate::domain::error::Result;
use crate::domain::ThemePreference;
use crate::storage::backend::SettingsStore;
use crate::storage::models::SettingsRecord;

/// Process-local settings store.
///
/// Used by tests and by hosts where the plugin has no writable data directory.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    record: SettingsRecord,
}

impl MemorySettingsStore {
    /// Creates a store pre-seeded with a theme.
    #[must_use]
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            record: SettingsRecord {
                theme: Some(theme),
                ..SettingsRecord::default()
            },
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<SettingsRecord> {
        Ok(self.record.clone())
    }

    fn save_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.record.theme = Some(theme);
        Ok(())
    }
}
