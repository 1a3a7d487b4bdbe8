//! Postgres-backed [`GalleryRepository`].

use super::handler::{GalleryRepository, GALLERY_QUERY};
use crate::domain::error::{GalleryError, Result};
use crate::domain::GalleryItem;
use tokio_postgres::{NoTls, Row};
use tracing::Instrument;

/// Opens a fresh connection for every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresRepository;

impl GalleryRepository for PostgresRepository {
    async fn fetch_all(&self, database_url: &str) -> Result<Vec<GalleryItem>> {
        query_gallery(database_url)
            .instrument(tracing::debug_span!("postgres_fetch_all"))
            .await
    }
}

async fn query_gallery(database_url: &str) -> Result<Vec<GalleryItem>> {
    let (client, connection) = tokio_postgres::connect(database_url, NoTls)
        .await
        .map_err(database_error)?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::warn!(error = %e, "postgres connection closed with error");
        }
    });

    let rows = client.query(GALLERY_QUERY, &[]).await.map_err(database_error)?;
    rows.iter().map(row_to_item).collect()
}

/// Accepts `integer` and `bigint` ids.
fn row_to_item(row: &Row) -> Result<GalleryItem> {
    let id = row
        .try_get::<_, i64>("id")
        .or_else(|_| row.try_get::<_, i32>("id").map(i64::from))
        .map_err(database_error)?;
    let folder: String = row.try_get("carpeta").map_err(database_error)?;
    let url: String = row.try_get("url").map_err(database_error)?;

    Ok(GalleryItem::new(id, folder, url))
}

fn database_error(e: tokio_postgres::Error) -> GalleryError {
    GalleryError::Database(e.to_string())
}
