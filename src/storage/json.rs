//! JSON file-based settings store.
//!
//! Keeps the settings record in memory and writes it back with an atomic
//! write-to-temp + rename, so a crash never leaves a truncated file behind.

use crate::domain::error::{GalleryError, Result};
use crate::domain::ThemePreference;
use crate::storage::backend::SettingsStore;
use crate::storage::models::SettingsRecord;
use std::path::{Path, PathBuf};

/// JSON file settings backend.
///
/// This type is `Send` but not `Sync`; it is owned by the single worker thread.
pub struct JsonSettingsStore {
    file_path: PathBuf,
    data: SettingsRecord,
    dirty: bool,
}

impl JsonSettingsStore {
    /// Opens the settings file, creating parent directories as needed.
    ///
    /// A missing file yields default settings; the file is created on the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// existing file is unreadable or not valid settings JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use galeria::storage::JsonSettingsStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonSettingsStore::new(PathBuf::from("/tmp/galeria/settings.json"))?;
    /// # Ok::<(), galeria::GalleryError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON settings store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no settings file yet, using defaults");
            SettingsRecord::default()
        };

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<SettingsRecord> {
        let contents = std::fs::read_to_string(path)?;
        let data: SettingsRecord = serde_json::from_str(&contents)
            .map_err(|e| GalleryError::Storage(format!("failed to parse settings JSON: {e}")))?;

        tracing::debug!(version = data.version, theme = ?data.theme, "loaded settings");
        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| GalleryError::Storage(format!("failed to serialize settings: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "settings saved");
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<SettingsRecord> {
        Ok(self.data.clone())
    }

    fn save_theme(&mut self, theme: ThemePreference) -> Result<()> {
        let _span = tracing::debug_span!("json_save_theme", theme = %theme).entered();

        if self.data.theme == Some(theme) && self.file_path.exists() {
            return Ok(());
        }

        self.data.theme = Some(theme);
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonSettingsStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save settings on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.load().unwrap(), SettingsRecord::default());
    }

    #[test]
    fn saved_theme_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        {
            let mut store = JsonSettingsStore::new(path.clone()).unwrap();
            store.save_theme(ThemePreference::Light).unwrap();
        }

        let reopened = JsonSettingsStore::new(path.clone()).unwrap();
        assert_eq!(reopened.load().unwrap().theme, Some(ThemePreference::Light));

        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("\"light\""));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = JsonSettingsStore::new(path.clone()).unwrap();
        store.save_theme(ThemePreference::Dark).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(JsonSettingsStore::new(path), Err(GalleryError::Storage(_))));
    }
}
