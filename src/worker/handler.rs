//! Worker thread implementation for settings persistence.
//!
//! This module implements the Zellij worker thread interface. The worker owns the
//! [`SettingsStore`] so file I/O never runs on the plugin's render loop, and it
//! re-attaches the caller's trace context so its spans join the plugin trace.

use crate::domain::error::{GalleryError, Result};
use crate::infrastructure::paths;
use crate::storage::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name under which the worker is registered and addressed.
pub const WORKER_NAME: &str = "galeria";

/// Worker thread state for handling settings operations.
///
/// The store is initialized lazily on first message receipt, or injected up
/// front with [`GaleriaWorker::with_store`].
#[derive(Serialize, Deserialize, Default)]
pub struct GaleriaWorker {
    #[serde(skip)]
    store: Option<Box<dyn SettingsStore>>,
}

impl GaleriaWorker {
    /// Creates a worker around an injected store.
    ///
    /// # Examples
    ///
    /// ```
    /// use galeria::storage::MemorySettingsStore;
    /// use galeria::worker::{GaleriaWorker, WorkerMessage, WorkerResponse};
    ///
    /// let mut worker = GaleriaWorker::with_store(Box::new(MemorySettingsStore::default()));
    /// let response = worker.handle_message(WorkerMessage::load_settings());
    /// assert_eq!(response, WorkerResponse::SettingsLoaded { theme: None });
    /// ```
    #[must_use]
    pub fn with_store(store: Box<dyn SettingsStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Whether a store is available.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    fn get_store(&mut self) -> Result<&mut Box<dyn SettingsStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| GalleryError::Worker("Settings store not initialized".to_string()))
    }

    /// Standardizes error reporting and success logging across store operations.
    fn handle_store_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "settings operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "settings operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Re-creates the caller's span context so worker spans link to it.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes a worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadSettings { .. } => Self::handle_store_result(
                "load settings",
                self.get_store().and_then(|store| store.load()),
                |record| WorkerResponse::SettingsLoaded { theme: record.theme },
            ),
            WorkerMessage::SaveTheme { theme, .. } => Self::handle_store_result(
                "save theme",
                self.get_store().and_then(|store| store.save_theme(theme)),
                |()| WorkerResponse::ThemeSaved { theme },
            ),
        }
    }

    /// Opens the JSON store at `path`, or an in-memory store when the data
    /// directory is unusable. Theme changes then last for the session only.
    pub fn open_store(path: &Path) -> Box<dyn SettingsStore> {
        match JsonSettingsStore::new(path.to_path_buf()) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "settings file unavailable, keeping settings in memory");
                Box::new(MemorySettingsStore::default())
            }
        }
    }

    /// Decodes a JSON payload, handles it and encodes the response.
    ///
    /// Opens the settings store on first use. Returns `None` when the payload
    /// is not a worker message or the response cannot be encoded.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        if !self.is_initialized() {
            self.store = Some(Self::open_store(&paths::settings_path()));
        }

        let response = match serde_json::from_str::<WorkerMessage>(payload) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        match serde_json::to_string(&response) {
            Ok(encoded) => Some(encoded),
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
                None
            }
        }
    }
}

#[cfg(feature = "plugin")]
mod zellij {
    use super::GaleriaWorker;
    use std::sync::atomic::{AtomicBool, Ordering};
    use zellij_tile::prelude::{PluginMessage, ZellijWorker};
    use zellij_tile::shim::post_message_to_plugin;

    static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

    impl ZellijWorker<'_> for GaleriaWorker {
        /// Handles a message from the plugin thread and posts the response back
        /// under the same message name.
        fn on_message(&mut self, message: String, payload: String) {
            if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
                crate::observability::init_tracing(&crate::Config::default());
            }

            if let Some(payload) = self.handle_payload(&payload) {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemePreference;
    use crate::storage::MemorySettingsStore;

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn load(&self) -> Result<crate::storage::SettingsRecord> {
            Err(GalleryError::Storage("disk gone".to_string()))
        }

        fn save_theme(&mut self, _theme: ThemePreference) -> Result<()> {
            Err(GalleryError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn save_then_load_round_trips_through_store() {
        let mut worker = GaleriaWorker::with_store(Box::new(MemorySettingsStore::default()));

        let saved = worker.handle_message(WorkerMessage::save_theme(ThemePreference::Light));
        assert_eq!(saved, WorkerResponse::ThemeSaved { theme: ThemePreference::Light });

        let loaded = worker.handle_message(WorkerMessage::load_settings());
        assert_eq!(loaded, WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Light) });
    }

    #[test]
    fn store_failure_becomes_error_response() {
        let mut worker = GaleriaWorker::with_store(Box::new(FailingStore));
        match worker.handle_message(WorkerMessage::save_theme(ThemePreference::Dark)) {
            WorkerResponse::Error { message } => assert!(message.contains("read-only")),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn payload_round_trip() {
        let mut worker = GaleriaWorker::with_store(Box::new(MemorySettingsStore::with_theme(ThemePreference::Light)));
        let payload = serde_json::to_string(&WorkerMessage::load_settings()).unwrap();
        let response = worker.handle_payload(&payload).unwrap();
        assert_eq!(response, r#"{"SettingsLoaded":{"theme":"light"}}"#);
    }

    #[test]
    fn unusable_data_dir_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let mut worker = GaleriaWorker::with_store(GaleriaWorker::open_store(&blocker.join("settings.json")));
        let saved = worker.handle_message(WorkerMessage::save_theme(ThemePreference::Light));
        assert_eq!(saved, WorkerResponse::ThemeSaved { theme: ThemePreference::Light });
        assert_eq!(
            worker.handle_message(WorkerMessage::load_settings()),
            WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Light) }
        );
        assert!(!blocker.join("settings.json").exists());
    }

    #[test]
    fn garbage_payload_is_dropped() {
        let mut worker = GaleriaWorker::with_store(Box::new(MemorySettingsStore::default()));
        assert_eq!(worker.handle_payload("not json"), None);
    }
}
