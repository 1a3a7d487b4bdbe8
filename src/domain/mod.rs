//! Domain layer for the gallery.
//!
//! Core types and pure operations, independent of Zellij APIs, HTTP and storage.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Gallery item model, folder derivation and filtering
//! - [`settings`]: Theme preference and the settings object
//!
//! # Examples
//!
//! ```
//! use galeria::domain::{filter_items, GalleryItem};
//!
//! let items = vec![
//!     GalleryItem::new(1, "A", "https://img/1"),
//!     GalleryItem::new(2, "B", "https://img/2"),
//! ];
//! assert_eq!(filter_items(&items, Some("B")).len(), 1);
//! ```

pub mod error;
pub mod item;
pub mod settings;

pub use error::{GalleryError, Result};
pub use item::{derive_folders, filter_items, GalleryItem};
pub use settings::{Settings, ThemePreference};
