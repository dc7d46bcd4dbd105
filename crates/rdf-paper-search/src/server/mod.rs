//! HTTP server.
//!
//! Serves the JSON API (`/api/search`, `/api/paper`), the single-page UI
//! and a health endpoint.

pub mod routes;
pub mod ui;

use std::net::SocketAddr;

use crate::service::SearchContext;

/// HTTP server for paper search.
pub struct PaperSearchServer {
    /// Shared request context.
    ctx: SearchContext,
}

impl PaperSearchServer {
    /// Create a new server.
    #[must_use]
    pub fn new(ctx: SearchContext) -> Self {
        Self { ctx }
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        let router = routes::create_router(self.ctx);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for PaperSearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperSearchServer").field("ctx", &self.ctx).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
