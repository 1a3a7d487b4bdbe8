//! Storage layer for persisted user settings.
//!
//! # Modules
//!
//! - `backend`: [`SettingsStore`] trait abstraction
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-memory implementation
//! - `models`: storage record types

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::SettingsStore;
pub use json::JsonSettingsStore;
pub use memory::MemorySettingsStore;
pub use models::{SettingsRecord, SETTINGS_VERSION};
