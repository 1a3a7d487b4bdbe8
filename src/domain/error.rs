//! Error types for the gallery crate.
//!
//! This module defines the centralized error type [`GalleryError`] and a type alias
//! [`Result`] used by the storage, worker and API layers. Failures that must never
//! reach the view layer (a failed gallery fetch) are modelled separately as
//! [`LoadFailure`](crate::service::LoadFailure).

use thiserror::Error;

/// The main error type for gallery operations.
///
/// # Examples
///
/// ```
/// use galeria::GalleryError;
///
/// fn require_url(url: Option<&str>) -> Result<&str, GalleryError> {
///     url.ok_or_else(|| GalleryError::Config("DATABASE_URL is not set".to_string()))
/// }
///
/// assert!(require_url(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Reading or writing the settings store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem, socket or other I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A built-in palette could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Raised for a missing database connection string and for an unparsable
    /// listen address.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connecting to the database or running the gallery query failed.
    #[error("Database error: {0}")]
    Database(String),
}

/// A specialized `Result` type for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
