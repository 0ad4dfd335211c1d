//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay and health handlers
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{ProcessEnv, RelayConfig, SecretSource};
use crate::http::relay::run_story;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::observability::tracing::request_span;
use crate::upstream::{UpstreamError, WorkflowClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: WorkflowClient,
    pub secrets: Arc<dyn SecretSource>,
}

/// HTTP server for the story relay.
pub struct RelayServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl RelayServer {
    /// Create a server that reads credentials from the process environment.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        Self::with_secrets(config, Arc::new(ProcessEnv))
    }

    /// Create a server with an explicit credential source.
    pub fn with_secrets(
        config: RelayConfig,
        secrets: Arc<dyn SecretSource>,
    ) -> Result<Self, UpstreamError> {
        let upstream = WorkflowClient::new(&config.upstream.base_url)?;
        let config = Arc::new(config);

        let state = AppState {
            config: config.clone(),
            upstream,
            secrets,
        };

        Ok(Self {
            router: Self::build_router(state),
            config,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/run", post(run_story))
            .route("/health", get(health))
            .with_state(state)
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` completes, then drain in-flight
    /// requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
