//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Galeria library and the Zellij plugin
//! system: Zellij events become library [`Event`]s, and the returned
//! [`Action`]s become host calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, web requests
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  GaleriaWorker   │   │  ← settings.json reads and writes
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, `WebRequestResult`, `Timer`, `CustomMessage`,
//!    `PermissionRequestResult`
//! 3. **Permissions Granted**: load stored settings and fetch the gallery
//! 4. **Fetch**: `web_request` tagged with the request id, plus a timer for the
//!    deadline
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `WebRequestResult(status, _, body, context)` → `Event::GalleryResponse`
//! - `Timer` → `Event::DeadlineElapsed`
//! - `CustomMessage("galeria", payload)` → `Event::WorkerResponse`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Gallery:
//! - `j`/`Down`/`l`/`Right`, `Ctrl+n`: Next tile
//! - `k`/`Up`/`h`/`Left`, `Ctrl+p`: Previous tile
//! - `Enter`: Open lightbox
//! - `Tab`/`]`: Next folder, `[`: Previous folder, `a`: All folders
//! - `1`/`2`/`3`: Grid, miniature, list, `v`: Cycle view
//! - `t`: Toggle theme, `r`: Reload, `q`: Close plugin
//!
//! Lightbox:
//! - `Esc`/`q`: Close
//! - `h`/`Left`: Previous image, `l`/`Right`: Next image
//! - `t`: Toggle theme

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Instant;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use galeria::service::{RequestId, REQUEST_ID_CONTEXT_KEY};
use galeria::worker::{GaleriaWorker, WorkerMessage, WorkerResponse, WORKER_NAME};
use galeria::{handle_event, Action, Config, Event, ViewMode};

register_plugin!(State);
register_worker!(GaleriaWorker, galeria_worker, GALERIA_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: galeria::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: galeria::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the state, requests permissions and
    /// subscribes to events. The first fetch waits for the permission result.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        galeria::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = galeria::initialize(&config);
        tracing::debug!(api_url = %config.api_url, timeout = ?config.request_timeout, "app state initialized");

        request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates the Zellij event, runs the library handler and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::DeadlineElapsed { now: Instant::now() },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => Event::PermissionsResult {
                granted: matches!(permissions, PermissionStatus::Granted),
                now: Instant::now(),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        galeria::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::CursorNext),
                BareKey::Char('p') => Some(Event::CursorPrev),
                _ => None,
            };
        }

        if self.app.is_lightbox_open() {
            return Some(match key.bare_key {
                BareKey::Esc | BareKey::Char('q') => Event::CloseLightbox,
                BareKey::Left | BareKey::Char('h') => Event::PrevImage,
                BareKey::Right | BareKey::Char('l') => Event::NextImage,
                BareKey::Char('t') => Event::ToggleTheme,
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Right | BareKey::Char('j' | 'l') => Event::CursorNext,
            BareKey::Up | BareKey::Left | BareKey::Char('k' | 'h') => Event::CursorPrev,
            BareKey::Enter => Event::OpenLightbox,
            BareKey::Tab | BareKey::Char(']') => Event::NextFolder,
            BareKey::Char('[') => Event::PrevFolder,
            BareKey::Char('a') => Event::SelectFolder(None),
            BareKey::Char('1') => Event::SetViewMode(ViewMode::Grid),
            BareKey::Char('2') => Event::SetViewMode(ViewMode::Miniature),
            BareKey::Char('3') => Event::SetViewMode(ViewMode::List),
            BareKey::Char('v') => Event::CycleViewMode,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('r') => Event::Reload { now: Instant::now() },
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a web request result to a gallery response, if it carries a request id.
    fn map_web_request_event(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let request_id = match context.get(REQUEST_ID_CONTEXT_KEY).map(|raw| raw.parse::<RequestId>()) {
            Some(Ok(request_id)) => request_id,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "web request result with malformed request id");
                return None;
            }
            None => {
                tracing::debug!("ignoring web request result without request id");
                return None;
            }
        };

        tracing::debug!(request_id = %request_id, status, body_len = body.len(), "web request result");
        Some(Event::GalleryResponse { request_id, status, body })
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes the message as JSON and sends it to the worker thread.
    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchGallery { request_id, url, timeout } => {
                let context = BTreeMap::from([(REQUEST_ID_CONTEXT_KEY.to_string(), request_id.to_string())]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
                set_timeout(timeout.as_secs_f64());
            }
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
