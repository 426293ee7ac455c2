//! HTTP surface: axum router, handlers, and the server entry point.

mod labels;
mod response;
mod router;
mod state;
mod tickets;

pub use router::build_router;
pub use state::AppState;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::storage::FileStorage;

/// Binds the configured address and serves the API until the process exits.
pub async fn serve(config: &Config, storage: FileStorage) -> anyhow::Result<()> {
    let static_dir = config
        .data
        .static_dir
        .as_deref()
        .filter(|dir| dir.is_dir());
    if let Some(dir) = static_dir {
        info!(dir = %dir.display(), "serving static assets");
    }

    let router = build_router(AppState::new(storage), static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind http listener on {addr}"))?;
    info!(%addr, "ticket-label listening");

    axum::serve(listener, router)
        .await
        .context("http server exited unexpectedly")?;
    Ok(())
}
