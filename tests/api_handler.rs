//! Gallery API handler against in-memory repositories.

use futures_util::FutureExt;
use galeria::api::{handle_gallery_request, ApiResponse, DatabaseConfig, GalleryRepository};
use galeria::{GalleryError, GalleryItem};
use std::sync::Mutex;

/// Returns fixed rows and records the connection strings it was given.
#[derive(Default)]
struct FakeRepository {
    rows: Vec<GalleryItem>,
    fail_with: Option<String>,
    seen_urls: Mutex<Vec<String>>,
}

impl GalleryRepository for FakeRepository {
    async fn fetch_all(&self, database_url: &str) -> Result<Vec<GalleryItem>, GalleryError> {
        if let Ok(mut seen) = self.seen_urls.lock() {
            seen.push(database_url.to_string());
        }
        match &self.fail_with {
            Some(details) => Err(GalleryError::Database(details.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}

fn run(repository: &FakeRepository, config: Result<DatabaseConfig, GalleryError>) -> ApiResponse {
    handle_gallery_request(repository, config)
        .now_or_never()
        .expect("fake repository resolves immediately")
}

fn json(response: &ApiResponse) -> serde_json::Value {
    serde_json::from_str(&response.body).unwrap()
}

#[test]
fn rows_are_returned_with_wire_names_and_headers() {
    let repository = FakeRepository {
        rows: vec![
            GalleryItem::new(1, "Naturaleza", "https://img/1.jpg"),
            GalleryItem::new(2, "Ciudad", "https://img/2.jpg"),
        ],
        ..FakeRepository::default()
    };
    let config = DatabaseConfig::from_lookup(|name| {
        (name == "DATABASE_URL").then(|| "\"postgres://neon/gallery\"".to_string())
    });

    let response = run(&repository, config);
    let body = json(&response);

    assert_eq!(response.status, 200);
    assert_eq!(body[0]["carpeta"], "Naturaleza");
    assert_eq!(body[1]["id"], 2);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(response.header("cache-control"), Some("no-store, max-age=0"));
    assert_eq!(
        *repository.seen_urls.lock().unwrap(),
        vec!["postgres://neon/gallery".to_string()]
    );
}

#[test]
fn missing_connection_string_is_incomplete_configuration() {
    let repository = FakeRepository::default();
    let response = run(&repository, DatabaseConfig::from_lookup(|_| None));
    let body = json(&response);

    assert_eq!(response.status, 500);
    assert_eq!(body["error"], "Incomplete configuration");
    assert!(body["message"].as_str().unwrap().contains("DATABASE_URL"));
    assert!(repository.seen_urls.lock().unwrap().is_empty());
}

#[test]
fn query_failure_reports_details() {
    let repository = FakeRepository {
        fail_with: Some("relation \"gallery\" does not exist".to_string()),
        ..FakeRepository::default()
    };
    let config = Ok(DatabaseConfig {
        url: "postgres://db".to_string(),
    });

    let response = run(&repository, config);
    let body = json(&response);

    assert_eq!(response.status, 500);
    assert_eq!(body["error"], "Database error");
    assert_eq!(body["details"], "relation \"gallery\" does not exist");
}

#[test]
fn empty_table_is_an_empty_array() {
    let response = run(
        &FakeRepository::default(),
        Ok(DatabaseConfig {
            url: "postgres://db".to_string(),
        }),
    );

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "[]");
}
