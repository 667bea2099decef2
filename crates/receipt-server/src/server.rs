use std::sync::Arc;

use tokio::net::TcpListener;

use receipt_store::{InMemoryReceiptStore, ReceiptStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Receipt processing server.
///
/// Owns the store for its whole lifetime; the store is created with the
/// server and dropped when `serve` returns.
pub struct ReceiptServer {
    config: ServerConfig,
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptServer {
    /// Server backed by a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryReceiptStore::new()))
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn ReceiptStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn ReceiptStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(Arc::clone(&self.store)), &self.config)
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("receipt server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
