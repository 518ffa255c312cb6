use anyhow::{Context, Result};
use tracing::info;

use crate::builds::BuildStore;
use crate::s3::Storage;

pub mod error;
pub mod routes;

pub use routes::{router, AppState};

/// Serve the artifact routes on `listen_addr` until Ctrl-C
pub async fn serve<B: BuildStore, S: Storage>(
    listen_addr: &str,
    state: AppState<B, S>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", listen_addr))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}
