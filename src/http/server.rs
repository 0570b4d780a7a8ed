//! HTTP server for the query API

use super::handler::{get_query_handler, status_handler, submit_handler, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// HTTP server exposing submit/poll/status
pub struct HttpServer {
    state: Arc<AppState>,
    port: u16,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(state: Arc<AppState>, port: u16) -> Self {
        Self { state, port }
    }

    /// Build the router; separated out so tests can drive it in-process
    pub fn router(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/queries", post(submit_handler))
            .route("/api/queries/:id", get(get_query_handler))
            .route("/api/status", get(status_handler))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start serving
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = Self::router(Arc::clone(&self.state));

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("query API listening on http://localhost:{}", self.port);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
