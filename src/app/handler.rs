//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, host
//! results and worker responses, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Gallery**: `CursorNext`, `CursorPrev`, `OpenLightbox`
//! - **Lightbox**: `CloseLightbox`, `NextImage`, `PrevImage`
//! - **Filter and layout**: `SelectFolder`, `NextFolder`, `PrevFolder`,
//!   `SetViewMode`, `CycleViewMode`, `ToggleTheme`
//! - **Loading**: `Reload`, `GalleryResponse`, `DeadlineElapsed`, `PermissionsResult`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use galeria::app::{handle_event, AppState, Event};
//! use galeria::domain::Settings;
//!
//! let mut state = AppState::new(vec![], Settings::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::CycleViewMode)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), galeria::GalleryError>(())
//! ```

use crate::app::{Action, AppState, ViewMode};
use crate::domain::error::Result;
use crate::service::{parse_response, LoadFailure, LoadOutcome, RequestId};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::time::Instant;

/// Events triggered by user input, host results or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the gallery cursor forward (wraps to the first tile).
    CursorNext,
    /// Moves the gallery cursor backward (wraps to the last tile).
    CursorPrev,
    /// Opens the lightbox on the tile under the cursor.
    OpenLightbox,
    /// Closes the lightbox.
    CloseLightbox,
    /// Shows the next image in the lightbox.
    NextImage,
    /// Shows the previous image in the lightbox.
    PrevImage,

    /// Sets the folder filter, `None` for every folder.
    SelectFolder(Option<String>),
    /// Cycles the folder filter forward.
    NextFolder,
    /// Cycles the folder filter backward.
    PrevFolder,

    /// Switches to a specific view density.
    SetViewMode(ViewMode),
    /// Switches to the next view density.
    CycleViewMode,

    /// Flips the color scheme and persists it.
    ToggleTheme,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Starts a gallery load at `now`, superseding any pending one.
    Reload {
        /// Instant the request starts; its deadline is measured from here.
        now: Instant,
    },

    /// Delivers the host's answer to a gallery request.
    GalleryResponse {
        /// Request the answer belongs to.
        request_id: RequestId,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// A deadline timer fired.
    DeadlineElapsed {
        /// Instant the timer was observed.
        now: Instant,
    },

    /// Reports whether the host granted the requested permissions.
    PermissionsResult {
        /// Whether the permissions were granted.
        granted: bool,
        /// Instant the result arrived.
        now: Instant,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Short event name used as a span field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CursorNext => "CursorNext",
            Self::CursorPrev => "CursorPrev",
            Self::OpenLightbox => "OpenLightbox",
            Self::CloseLightbox => "CloseLightbox",
            Self::NextImage => "NextImage",
            Self::PrevImage => "PrevImage",
            Self::SelectFolder(_) => "SelectFolder",
            Self::NextFolder => "NextFolder",
            Self::PrevFolder => "PrevFolder",
            Self::SetViewMode(_) => "SetViewMode",
            Self::CycleViewMode => "CycleViewMode",
            Self::ToggleTheme => "ToggleTheme",
            Self::CloseFocus => "CloseFocus",
            Self::Reload { .. } => "Reload",
            Self::GalleryResponse { .. } => "GalleryResponse",
            Self::DeadlineElapsed { .. } => "DeadlineElapsed",
            Self::PermissionsResult { .. } => "PermissionsResult",
            Self::WorkerResponse(_) => "WorkerResponse",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A flag telling the runtime whether to re-render, and the actions to execute
/// in order.
///
/// # Errors
///
/// Reserved for state transitions that can fail; the current transitions
/// record failures in state instead of returning them.
///
/// # Example
///
/// ```rust
/// use galeria::app::{handle_event, Action, AppState, Event};
/// use galeria::domain::Settings;
/// use std::time::Instant;
///
/// let mut state = AppState::new(vec![], Settings::default());
/// let (_, actions) = handle_event(&mut state, &Event::Reload { now: Instant::now() })?;
/// assert!(matches!(actions[0], Action::FetchGallery { .. }));
/// # Ok::<(), galeria::GalleryError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::CursorNext => {
            state.move_cursor_next();
            Ok((true, vec![]))
        }
        Event::CursorPrev => {
            state.move_cursor_prev();
            Ok((true, vec![]))
        }
        Event::OpenLightbox => {
            let opened = state.open_lightbox(state.cursor);
            if opened {
                tracing::debug!(index = state.cursor, "lightbox opened");
            }
            Ok((opened, vec![]))
        }
        Event::CloseLightbox => {
            let was_open = state.is_lightbox_open();
            state.close_lightbox();
            Ok((was_open, vec![]))
        }
        Event::NextImage => {
            state.next_image();
            Ok((state.is_lightbox_open(), vec![]))
        }
        Event::PrevImage => {
            state.prev_image();
            Ok((state.is_lightbox_open(), vec![]))
        }
        Event::SelectFolder(folder) => Ok((state.select_folder(folder.clone()), vec![])),
        Event::NextFolder => {
            state.next_folder();
            Ok((true, vec![]))
        }
        Event::PrevFolder => {
            state.prev_folder();
            Ok((true, vec![]))
        }
        Event::SetViewMode(mode) => {
            let changed = state.view_mode != *mode;
            state.set_view_mode(*mode);
            Ok((changed, vec![]))
        }
        Event::CycleViewMode => {
            state.set_view_mode(state.view_mode.next());
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            let theme = state.toggle_theme();
            tracing::debug!(theme = %theme, "theme toggled");
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_theme(theme))]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Reload { now } => Ok((true, vec![start_fetch(state, *now)])),
        Event::GalleryResponse { request_id, status, body } => {
            if !state.requests.complete(*request_id) {
                return Ok((false, vec![]));
            }

            let outcome = parse_response(*status, body);
            tracing::debug!(request_id = %request_id, status, failed = outcome.failure().is_some(), "gallery load finished");
            state.finish_load(outcome);
            Ok((true, vec![]))
        }
        Event::DeadlineElapsed { now } => match state.requests.expire(*now) {
            Some(request_id) => {
                tracing::warn!(request_id = %request_id, timeout = ?state.requests.timeout(), "gallery request abandoned");
                state.finish_load(LoadOutcome::Failed {
                    reason: LoadFailure::Timeout,
                });
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
        Event::PermissionsResult { granted, now } => {
            if *granted {
                tracing::debug!("permissions granted, loading settings and gallery");
                Ok((
                    true,
                    vec![
                        Action::PostToWorker(WorkerMessage::load_settings()),
                        start_fetch(state, *now),
                    ],
                ))
            } else {
                tracing::warn!("permissions denied, gallery cannot be fetched");
                state.loading = false;
                Ok((true, vec![]))
            }
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::SettingsLoaded { theme } if state.theme_overridden => {
                tracing::debug!(stored = ?theme, current = %state.settings.theme, "keeping theme chosen during startup");
                Ok((false, vec![]))
            }
            WorkerResponse::SettingsLoaded { theme: Some(theme) } if *theme != state.settings.theme => {
                tracing::debug!(theme = %theme, "applying stored theme");
                state.apply_theme(*theme);
                Ok((true, vec![]))
            }
            WorkerResponse::SettingsLoaded { .. } => Ok((false, vec![])),
            WorkerResponse::ThemeSaved { theme } => {
                tracing::debug!(theme = %theme, "theme persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

fn start_fetch(state: &mut AppState, now: Instant) -> Action {
    let request_id = state.begin_load(now);
    tracing::debug!(request_id = %request_id, url = %state.api_url, "starting gallery load");
    Action::FetchGallery {
        request_id,
        url: state.api_url.clone(),
        timeout: state.requests.timeout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GalleryItem, Settings, ThemePreference};
    use std::time::Duration;

    fn loaded_state() -> AppState {
        AppState::new(
            vec![
                GalleryItem::new(1, "A", "https://img/1.jpg"),
                GalleryItem::new(2, "B", "https://img/2.jpg"),
            ],
            Settings::default(),
        )
    }

    fn fetch_id(actions: &[Action]) -> RequestId {
        actions
            .iter()
            .find_map(|action| match action {
                Action::FetchGallery { request_id, .. } => Some(*request_id),
                _ => None,
            })
            .expect("fetch action")
    }

    #[test]
    fn reload_emits_fetch_with_configured_url_and_timeout() {
        let mut state = loaded_state();
        state.api_url = "http://gallery.test/api/gallery".to_string();
        let (render, actions) = handle_event(&mut state, &Event::Reload { now: Instant::now() }).unwrap();

        assert!(render);
        assert!(state.loading);
        match &actions[..] {
            [Action::FetchGallery { url, timeout, .. }] => {
                assert_eq!(url, "http://gallery.test/api/gallery");
                assert_eq!(*timeout, Duration::from_secs(10));
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = loaded_state();
        let now = Instant::now();
        let (_, first) = handle_event(&mut state, &Event::Reload { now }).unwrap();
        let (_, _second) = handle_event(&mut state, &Event::Reload { now }).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::GalleryResponse { request_id: fetch_id(&first), status: 200, body: b"[]".to_vec() },
        )
        .unwrap();

        assert!(!render);
        assert!(state.loading);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn early_timer_does_not_expire_request() {
        let mut state = loaded_state();
        let now = Instant::now();
        handle_event(&mut state, &Event::Reload { now }).unwrap();

        let (render, _) =
            handle_event(&mut state, &Event::DeadlineElapsed { now: now + Duration::from_secs(3) }).unwrap();
        assert!(!render);
        assert!(state.loading);
    }

    #[test]
    fn open_lightbox_uses_cursor() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::CursorNext).unwrap();
        handle_event(&mut state, &Event::OpenLightbox).unwrap();
        assert_eq!(state.selected_index, Some(1));
    }

    #[test]
    fn open_lightbox_on_empty_gallery_does_nothing() {
        let mut state = AppState::new(vec![], Settings::default());
        let (render, _) = handle_event(&mut state, &Event::OpenLightbox).unwrap();
        assert!(!render);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn view_mode_events() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::CycleViewMode).unwrap();
        assert_eq!(state.view_mode, ViewMode::Miniature);

        let (render, _) = handle_event(&mut state, &Event::SetViewMode(ViewMode::Miniature)).unwrap();
        assert!(!render);
        handle_event(&mut state, &Event::SetViewMode(ViewMode::List)).unwrap();
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn stored_theme_is_applied_once() {
        let mut state = loaded_state();
        let response = Event::WorkerResponse(WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Light) });

        let (render, _) = handle_event(&mut state, &response).unwrap();
        assert!(render);
        assert_eq!(state.settings.theme, ThemePreference::Light);

        let (render, _) = handle_event(&mut state, &response).unwrap();
        assert!(!render);
    }

    #[test]
    fn stored_theme_does_not_undo_a_toggle() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::ToggleTheme).unwrap();

        let stale = Event::WorkerResponse(WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Dark) });
        let (render, _) = handle_event(&mut state, &stale).unwrap();

        assert!(!render);
        assert_eq!(state.settings.theme, ThemePreference::Light);
    }

    #[test]
    fn missing_stored_theme_keeps_configured_one() {
        let mut state = loaded_state();
        let (render, _) =
            handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::SettingsLoaded { theme: None })).unwrap();
        assert!(!render);
        assert_eq!(state.settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn granted_permissions_load_settings_and_gallery() {
        let mut state = loaded_state();
        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true, now: Instant::now() }).unwrap();

        assert!(matches!(actions[0], Action::PostToWorker(WorkerMessage::LoadSettings { .. })));
        assert!(matches!(actions[1], Action::FetchGallery { .. }));
    }

    #[test]
    fn denied_permissions_do_not_fetch() {
        let mut state = loaded_state();
        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: false, now: Instant::now() }).unwrap();
        assert!(actions.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn close_focus_only_emits_action() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
