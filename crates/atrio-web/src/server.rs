// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state.

use axum::{
    routing::{get, post},
    Router,
};
use atrio_assistant::AssistantEngine;
use atrio_core::AtrioError;
use atrio_storage::Database;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::toast::ToastStore;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct SiteState {
    /// Handle to the SQLite store.
    pub db: Database,
    /// Assistant reply pipeline.
    pub engine: AssistantEngine,
    /// Session-scoped toast queues.
    pub toasts: ToastStore,
    /// Display name used in rendered pages.
    pub site_name: String,
}

/// Builds the site router.
///
/// Routes:
/// - GET  /                      home page (drains toasts)
/// - POST /contact               inquiry submission
/// - POST /api/assistant         assistant query
/// - GET  /case-studies/{slug}   case-study detail
/// - GET  /health                liveness probe
pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(handlers::get_home))
        .route("/contact", post(handlers::post_contact))
        .route("/api/assistant", post(handlers::post_assistant))
        .route("/case-studies/{slug}", get(handlers::get_case_study))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Starts the HTTP server and serves until the token is cancelled.
pub async fn start_server(
    host: &str,
    port: u16,
    state: SiteState,
    shutdown: CancellationToken,
) -> Result<(), AtrioError> {
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AtrioError::Internal(format!("failed to bind server to {addr}: {e}")))?;

    tracing::info!("Atrio server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| AtrioError::Internal(format!("server error: {e}")))?;

    Ok(())
}
