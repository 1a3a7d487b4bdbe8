//! End-to-end flows through the public event handler.

use galeria::service::LoadFailure;
use galeria::storage::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
use galeria::worker::{GaleriaWorker, WorkerMessage, WorkerResponse};
use galeria::{handle_event, initialize, Action, Config, Event, ThemePreference};
use std::time::{Duration, Instant};

const BODY: &str = r#"[
    {"id": 1, "carpeta": "A", "url": "https://img/1.jpg"},
    {"id": 2, "carpeta": "B", "url": "https://img/2.jpg"},
    {"id": 3, "carpeta": "A", "url": "https://img/3.jpg"}
]"#;

fn fetch(state: &mut galeria::AppState, now: Instant) -> galeria::service::RequestId {
    let (_, actions) = handle_event(state, &Event::Reload { now }).unwrap();
    match &actions[..] {
        [Action::FetchGallery { request_id, .. }] => *request_id,
        other => panic!("unexpected actions: {other:?}"),
    }
}

fn respond(state: &mut galeria::AppState, request_id: galeria::service::RequestId, status: u16, body: &str) -> bool {
    let (render, _) = handle_event(
        state,
        &Event::GalleryResponse {
            request_id,
            status,
            body: body.as_bytes().to_vec(),
        },
    )
    .unwrap();
    render
}

#[test]
fn filter_then_browse_lightbox_wraps() {
    let mut state = initialize(&Config::default());
    let id = fetch(&mut state, Instant::now());
    assert!(state.loading);
    assert!(respond(&mut state, id, 200, BODY));

    assert!(!state.loading);
    assert_eq!(state.folders, vec!["A", "B"]);

    handle_event(&mut state, &Event::SelectFolder(Some("A".to_string()))).unwrap();
    let ids: Vec<i64> = state.filtered_items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 3]);

    handle_event(&mut state, &Event::OpenLightbox).unwrap();
    assert_eq!(state.selected_index, Some(0));
    handle_event(&mut state, &Event::NextImage).unwrap();
    assert_eq!(state.selected_index, Some(1));
    handle_event(&mut state, &Event::NextImage).unwrap();
    assert_eq!(state.selected_index, Some(0));
    handle_event(&mut state, &Event::PrevImage).unwrap();
    assert_eq!(state.current_image().map(|item| item.id), Some(3));

    handle_event(&mut state, &Event::CloseLightbox).unwrap();
    assert_eq!(state.selected_index, None);
}

#[test]
fn server_error_shows_empty_state_with_reason() {
    let mut state = initialize(&Config::default());
    let id = fetch(&mut state, Instant::now());
    respond(&mut state, id, 500, r#"{"error":"Database error"}"#);

    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.last_failure, Some(LoadFailure::Status(500)));

    let vm = state.compute_viewmodel(24, 80);
    let empty = vm.empty_state.expect("empty state");
    assert_eq!(empty.message, "No images found");
    assert!(empty.subtitle.contains("500"));
}

#[test]
fn late_response_after_deadline_is_ignored() {
    let config = Config {
        request_timeout: Duration::from_secs(2),
        ..Config::default()
    };
    let mut state = initialize(&config);
    let start = Instant::now();
    let id = fetch(&mut state, start);

    let (render, _) = handle_event(&mut state, &Event::DeadlineElapsed { now: start + Duration::from_secs(2) }).unwrap();
    assert!(render);
    assert_eq!(state.last_failure, Some(LoadFailure::Timeout));
    assert!(!state.loading);

    assert!(!respond(&mut state, id, 200, BODY));
    assert!(state.items.is_empty());
}

#[test]
fn reload_supersedes_the_pending_request() {
    let mut state = initialize(&Config::default());
    let now = Instant::now();
    let first = fetch(&mut state, now);
    let second = fetch(&mut state, now);

    assert!(!respond(&mut state, first, 200, BODY));
    assert!(state.loading);
    assert!(respond(&mut state, second, 200, "[]"));
    assert!(!state.loading);
}

#[test]
fn theme_toggle_is_persisted_through_the_worker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
    assert_eq!(state.settings.theme, ThemePreference::Light);

    let message = match &actions[..] {
        [Action::PostToWorker(message @ WorkerMessage::SaveTheme { .. })] => message.clone(),
        other => panic!("unexpected actions: {other:?}"),
    };

    {
        let store = JsonSettingsStore::new(path.clone()).unwrap();
        let mut worker = GaleriaWorker::with_store(Box::new(store));
        assert_eq!(
            worker.handle_message(message),
            WorkerResponse::ThemeSaved { theme: ThemePreference::Light }
        );
    }

    let reopened = JsonSettingsStore::new(path).unwrap();
    assert_eq!(reopened.load().unwrap().theme, Some(ThemePreference::Light));

    let mut fresh = initialize(&Config::default());
    handle_event(
        &mut fresh,
        &Event::WorkerResponse(WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Light) }),
    )
    .unwrap();
    assert_eq!(fresh.settings.theme, ThemePreference::Light);
    assert_eq!(fresh.theme.name, "galeria-light");
}

#[test]
fn toggle_before_settings_arrive_survives_the_stored_value() {
    let mut worker = GaleriaWorker::with_store(Box::new(MemorySettingsStore::with_theme(ThemePreference::Dark)));
    let mut state = initialize(&Config::default());

    let (_, startup) = handle_event(&mut state, &Event::PermissionsResult { granted: true, now: Instant::now() }).unwrap();
    let (_, toggle) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
    assert_eq!(state.settings.theme, ThemePreference::Light);

    let mut responses = Vec::new();
    for action in startup.into_iter().chain(toggle) {
        if let Action::PostToWorker(message) = action {
            responses.push(worker.handle_message(message));
        }
    }
    assert_eq!(
        responses,
        vec![
            WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Dark) },
            WorkerResponse::ThemeSaved { theme: ThemePreference::Light },
        ]
    );

    for response in responses {
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    }

    assert_eq!(state.settings.theme, ThemePreference::Light);
    assert_eq!(
        worker.handle_message(WorkerMessage::load_settings()),
        WorkerResponse::SettingsLoaded { theme: Some(ThemePreference::Light) }
    );
}

#[test]
fn denied_permissions_never_fetch() {
    let mut state = initialize(&Config::default());
    let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: false, now: Instant::now() }).unwrap();

    assert!(actions.is_empty());
    assert!(!state.loading);
}
