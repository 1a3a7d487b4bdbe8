//! HTTP server for the gallery API.

use super::config::DatabaseConfig;
use super::handler::handle_gallery_request;
use super::postgres::PostgresRepository;
use super::response::ApiResponse;
use crate::domain::error::Result;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();
        for (name, value) in self.headers {
            response.headers_mut().insert(name, HeaderValue::from_static(value));
        }
        response
    }
}

async fn gallery() -> ApiResponse {
    handle_gallery_request(&PostgresRepository, DatabaseConfig::from_env()).await
}

async fn health() -> ApiResponse {
    ApiResponse::health()
}

/// Builds the router with request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/gallery", get(gallery))
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until the process exits.
///
/// # Errors
///
/// Returns [`GalleryError::Io`](crate::GalleryError::Io) if binding or serving fails.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gallery API listening");

    axum::serve(listener, create_router()).await?;
    Ok(())
}
