//! Plugin data locations inside the Zellij sandbox.
//!
//! The host filesystem is mounted under `/host`, which Zellij points at the cwd
//! of the last focused terminal (usually the user's home directory).

use std::path::PathBuf;

/// File holding the persisted settings.
pub const SETTINGS_FILE: &str = "settings.json";

/// File receiving OTLP span exports.
pub const TRACE_FILE: &str = "galeria-otlp.json";

/// Returns the data directory for Galeria state.
///
/// Resolves to `/host/.local/share/zellij/galeria`, which is
/// `~/.local/share/zellij/galeria` when Zellij was started from the home directory.
///
/// # Examples
///
/// ```
/// use galeria::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/galeria"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("galeria")
}

/// Location of [`SETTINGS_FILE`] in the data directory.
#[must_use]
pub fn settings_path() -> PathBuf {
    get_data_dir().join(SETTINGS_FILE)
}

/// Location of [`TRACE_FILE`] in the data directory.
#[must_use]
pub fn trace_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE)
}
