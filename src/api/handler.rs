//! The gallery request handler.

use super::config::DatabaseConfig;
use super::response::ApiResponse;
use crate::domain::error::{GalleryError, Result};
use crate::domain::GalleryItem;
use std::future::Future;

/// The one query the API runs.
pub const GALLERY_QUERY: &str = "SELECT id, carpeta, url FROM gallery ORDER BY id ASC";

/// Source of gallery rows.
///
/// Implementations run [`GALLERY_QUERY`] against the database at
/// `database_url` and return the rows in query order.
pub trait GalleryRepository {
    /// Fetches every row.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Database`] when connecting or querying fails.
    fn fetch_all(&self, database_url: &str) -> impl Future<Output = Result<Vec<GalleryItem>>> + Send;
}

/// Serves one `GET /api/gallery` request.
///
/// `config` is resolved per request. A configuration error becomes a `500`
/// with a `message`; a repository error becomes a `500` with `details`.
///
/// # Example
///
/// ```rust
/// use futures_util::FutureExt;
/// use galeria::api::{handle_gallery_request, DatabaseConfig, GalleryRepository};
/// use galeria::{GalleryError, GalleryItem};
///
/// struct Fixed;
///
/// impl GalleryRepository for Fixed {
///     async fn fetch_all(&self, _url: &str) -> Result<Vec<GalleryItem>, GalleryError> {
///         Ok(vec![GalleryItem::new(1, "A", "https://img/1.jpg")])
///     }
/// }
///
/// let config = DatabaseConfig { url: "postgres://db".to_string() };
/// let response = handle_gallery_request(&Fixed, Ok(config)).now_or_never().unwrap();
/// assert_eq!(response.status, 200);
/// ```
pub async fn handle_gallery_request<R>(repository: &R, config: Result<DatabaseConfig>) -> ApiResponse
where
    R: GalleryRepository + Sync,
{
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "gallery request rejected");
            let message = match e {
                GalleryError::Config(message) => message,
                other => other.to_string(),
            };
            return ApiResponse::incomplete_configuration(&message);
        }
    };

    match repository.fetch_all(&config.url).await {
        Ok(items) => {
            tracing::debug!(row_count = items.len(), "gallery rows fetched");
            ApiResponse::gallery(&items)
        }
        Err(e) => {
            tracing::error!(error = %e, "gallery query failed");
            let details = match e {
                GalleryError::Database(details) => details,
                other => other.to_string(),
            };
            ApiResponse::database_error(&details)
        }
    }
}
