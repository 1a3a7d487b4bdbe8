//! Read-only gallery API.
//!
//! One endpoint, `GET /api/gallery`, returns every row of the `gallery` table
//! as a JSON array of `{id, carpeta, url}` objects ordered by `id`. Each request
//! reads its configuration from the environment and opens its own database
//! connection, sharing nothing with other requests.
//!
//! # Modules
//!
//! - [`config`]: Connection string and listen address from the environment
//! - [`response`]: Transport-neutral response values with the wire headers
//! - [`handler`]: The request handler over a [`GalleryRepository`]
//! - `postgres`: `tokio-postgres` repository (feature `api`)
//! - `server`: axum router and listener (feature `api`)
//!
//! The handler is generic over the repository, so everything except the
//! Postgres adapter and the HTTP server builds and tests without the `api`
//! feature.

pub mod config;
pub mod handler;
pub mod response;

#[cfg(feature = "api")]
pub mod postgres;
#[cfg(feature = "api")]
pub mod server;

pub use config::{clean_connection_string, listen_addr, DatabaseConfig, DEFAULT_LISTEN_ADDR};
pub use handler::{handle_gallery_request, GalleryRepository, GALLERY_QUERY};
pub use response::ApiResponse;
