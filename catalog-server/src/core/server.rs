//! Server Implementation
//!
//! HTTP 服务器启动和管理

use crate::api::build_router;
use crate::core::{Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    state: ServerState,
}

impl Server {
    pub fn new(state: ServerState) -> Self {
        Self { state }
    }

    /// Listen address, from the configured HTTP port
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.state.config.http_port)
    }

    /// Serve until ctrl-c
    pub async fn run(&self) -> Result<()> {
        let addr = self.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(
            "Catalog server listening on {addr} (env: {})",
            self.state.config.environment
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, build_router(self.state.clone()))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.into()))?;

        self.state.pool.close().await;
        Ok(())
    }
}
