//! Gallery API service.
//!
//! Reads `DATABASE_URL` (or `VITE_DATABASE_URL`) on every request and listens
//! on `GALLERY_API_ADDR`, default `0.0.0.0:3000`. Logs go to stderr, filtered by
//! `RUST_LOG`.

use galeria::api::{config, server};
use galeria::observability::init_api_logging;

#[tokio::main]
async fn main() -> galeria::Result<()> {
    init_api_logging();

    let addr = config::listen_addr(|name| std::env::var(name).ok()).map_err(|e| {
        tracing::error!(error = %e, "cannot start gallery API");
        e
    })?;

    server::serve(addr).await
}
