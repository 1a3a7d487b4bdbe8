//! Infrastructure layer for the Zellij sandbox environment.
//!
//! Path handling for plugin state where the host filesystem is mounted under `/host`.

pub mod paths;

pub use paths::{get_data_dir, settings_path, trace_path};
