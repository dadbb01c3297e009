//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo handler
//! - Wire up middleware (tracing, timeout, interceptor chain)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use axum::{
    http::{Method, Uri},
    middleware,
    routing::any,
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, ServerConfig};
use crate::http::middleware::intercept;
use crate::interceptor::SharedChain;

/// HTTP server with the interceptor chain mounted in front of every route.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    chain: SharedChain,
}

impl HttpServer {
    pub fn new(config: AppConfig, chain: SharedChain) -> Self {
        let router = Self::build_router(&config.server, chain.clone());
        Self {
            router,
            config,
            chain,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServerConfig, chain: SharedChain) -> Router {
        Router::new()
            .route("/", any(echo_handler))
            .route("/{*path}", any(echo_handler))
            .layer(middleware::from_fn_with_state(chain, intercept))
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            interceptors = self.chain.load().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle for swapping the interceptor chain at runtime.
    pub fn chain(&self) -> &SharedChain {
        &self.chain
    }
}

/// Reports what reached the handler.
async fn echo_handler(method: Method, uri: Uri) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
    }))
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
