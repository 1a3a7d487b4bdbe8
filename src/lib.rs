//! Galeria: a terminal image gallery for Zellij and the API that feeds it.
//!
//! Galeria provides:
//! - Folder filtering over a gallery fetched from a JSON endpoint
//! - Grid, miniature and list view densities
//! - A full-screen lightbox with wrap-around keyboard navigation
//! - A persisted light/dark theme, stored by a Zellij worker thread
//! - A small HTTP service that reads the gallery table from Postgres

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Service Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (service/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Responses   │   │ - Settings IO │
//! │ - Theming     │   │ - Deadlines   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage, Infrastructure & Domain Layers            │
//! │  - Settings stores (storage/)                       │
//! │  - Plugin data paths (infrastructure/)              │
//! │  - Items, settings, errors (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────┐
//! │  Gallery API (api/, bin/gallery-api.rs)             │  ← Separate process
//! │  - Env configuration                                │
//! │  - Query handler, Postgres repository, axum server  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/galeria.wasm" {
//!         api_url "http://127.0.0.1:3000/api/gallery"
//!         request_timeout "10"
//!         theme "dark"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, initialize tracing, build `AppState`,
//!    request `WebAccess` and `FullHdAccess`
//! 2. **Permissions Granted**: ask the worker for stored settings and start the
//!    first gallery fetch with its deadline timer
//! 3. **Response or Deadline**: whichever arrives first for the pending request
//!    settles it; the other is ignored
//! 4. **Rendering**: compute the view model and draw the components
//!
//! # Example
//!
//! ```rust
//! use galeria::{handle_event, initialize, Action, Config, Event};
//! use std::time::Instant;
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Reload { now: Instant::now() })?;
//! let Action::FetchGallery { request_id, .. } = &actions[0] else { unreachable!() };
//!
//! let body = br#"[{"id":1,"carpeta":"A","url":"https://img/1.jpg"}]"#.to_vec();
//! handle_event(
//!     &mut state,
//!     &Event::GalleryResponse { request_id: *request_id, status: 200, body },
//! )?;
//! assert_eq!(state.folders, vec!["A"]);
//! # Ok::<(), galeria::GalleryError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Plugin**: `wasm32-wasip1` (Zellij WASM runtime), feature `plugin`
//! - **API**: any tokio target, feature `api`

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod service;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ViewMode};
pub use domain::{GalleryError, GalleryItem, Result, Settings, ThemePreference};
pub use ui::Theme;

use service::{RequestTracker, DEFAULT_TIMEOUT, MAX_TIMEOUT};
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/galeria.wasm" {
///     api_url "https://gallery.example.com/api/gallery"
///     request_timeout "5"
///     theme "light"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gallery endpoint. Default: [`app::DEFAULT_API_URL`]
    pub api_url: String,

    /// Bound on each gallery fetch, at most one hour. Default: 10 seconds
    pub request_timeout: Duration,

    /// Theme used until a stored preference is loaded. Default: dark
    pub theme: Option<ThemePreference>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: app::DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            theme: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `api_url`: trimmed, blank falls back to the default
    /// - `request_timeout`: whole seconds from 1 to 3600, otherwise 10
    /// - `theme`: `dark` or `light` (any case), otherwise unset
    /// - `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use galeria::{Config, ThemePreference};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("request_timeout".to_string(), "5".to_string());
    /// map.insert("theme".to_string(), "Light".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.request_timeout, Duration::from_secs(5));
    /// assert_eq!(config.theme, Some(ThemePreference::Light));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_url = config
            .get("api_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| app::DEFAULT_API_URL.to_string(), String::from);

        let request_timeout = config
            .get("request_timeout")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| (1..=MAX_TIMEOUT.as_secs()).contains(secs))
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        let theme = config.get("theme").and_then(|s| match s.parse::<ThemePreference>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring theme setting");
                None
            }
        });

        Self {
            api_url,
            request_timeout,
            theme,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// The gallery starts empty; items arrive with the first completed fetch.
///
/// # Example
///
/// ```rust
/// use galeria::{initialize, Config, ThemePreference};
///
/// let config = Config {
///     theme: Some(ThemePreference::Light),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.settings.theme, ThemePreference::Light);
/// assert!(state.items.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, "initializing galeria plugin");

    let settings = Settings {
        theme: config.theme.unwrap_or_default(),
    };

    let mut state = AppState::new(vec![], settings);
    state.api_url.clone_from(&config.api_url);
    state.requests = RequestTracker::new(config.request_timeout);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("api_url", "   "),
            ("request_timeout", "0"),
            ("theme", "sepia"),
        ]));

        assert_eq!(config.api_url, app::DEFAULT_API_URL);
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.theme, None);
    }

    #[test]
    fn oversized_timeout_falls_back_and_fetch_still_starts() {
        let config = Config::from_zellij(&map(&[("request_timeout", "18446744073709551615")]));
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
        assert_eq!(
            Config::from_zellij(&map(&[("request_timeout", "3601")])).request_timeout,
            DEFAULT_TIMEOUT
        );

        let mut state = initialize(&config);
        let (_, actions) = handle_event(&mut state, &Event::Reload { now: std::time::Instant::now() }).unwrap();
        assert!(matches!(actions[..], [Action::FetchGallery { timeout, .. }] if timeout == DEFAULT_TIMEOUT));
    }

    #[test]
    fn initialize_applies_endpoint_and_timeout() {
        let config = Config::from_zellij(&map(&[
            ("api_url", " http://gallery.test/api/gallery "),
            ("request_timeout", "3"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.api_url, "http://gallery.test/api/gallery");
        assert_eq!(state.requests.timeout(), Duration::from_secs(3));
        assert_eq!(state.settings.theme, ThemePreference::Dark);
    }
}
