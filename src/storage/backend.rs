//! Settings store abstraction.
//!
//! This module defines the [`SettingsStore`] trait that the worker uses to persist
//! user preferences. The UI never touches durable storage directly; it emits
//! worker messages and the worker talks to whichever store was injected.

use crate::domain::error::Result;
use crate::domain::ThemePreference;
use crate::storage::models::SettingsRecord;

/// Abstraction over persistent settings backends.
///
/// # Implementations
///
/// - [`JsonSettingsStore`](crate::storage::JsonSettingsStore): JSON file with atomic writes (default)
/// - [`MemorySettingsStore`](crate::storage::MemorySettingsStore): process-local, for tests
///
/// # Examples
///
/// ```
/// use galeria::storage::{MemorySettingsStore, SettingsStore};
/// use galeria::ThemePreference;
///
/// let mut store = MemorySettingsStore::default();
/// store.save_theme(ThemePreference::Light)?;
/// assert_eq!(store.load()?.theme, Some(ThemePreference::Light));
/// # Ok::<(), galeria::GalleryError>(())
/// ```
pub trait SettingsStore: Send {
    /// Reads the stored settings.
    ///
    /// A store that has never been written returns a record with no theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self) -> Result<SettingsRecord>;

    /// Persists the theme preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_theme(&mut self, theme: ThemePreference) -> Result<()>;
}
