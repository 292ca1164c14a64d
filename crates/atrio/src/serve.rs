// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `atrio serve` command implementation.
//!
//! Starts the full site backend: SQLite storage with migrations applied,
//! the assistant engine (degrading to fallback-only mode when no Gemini
//! credential resolves), the session toast store, and the axum router.
//! Supports graceful shutdown via signal handlers.

use atrio_assistant::AssistantEngine;
use atrio_config::AtrioConfig;
use atrio_core::AtrioError;
use atrio_storage::Database;
use atrio_web::{start_server, SiteState, ToastStore};
use tracing::info;

use crate::shutdown;

/// Runs the `atrio serve` command.
///
/// Opens storage, builds the shared site state, and serves until SIGINT
/// or SIGTERM.
pub async fn run_serve(config: AtrioConfig) -> Result<(), AtrioError> {
    // Initialize tracing subscriber.
    init_tracing(&config.site.log_level);

    info!("starting atrio serve");

    // Open storage and apply migrations.
    let db = Database::open(&config.storage.database_path).await?;
    info!(
        path = config.storage.database_path.as_str(),
        "database ready"
    );

    // A missing API key is not fatal; the engine answers with the
    // fallback reply until a credential is configured.
    let engine = AssistantEngine::from_config(db.clone(), &config);
    if engine.is_configured() {
        info!(model = config.gemini.model.as_str(), "assistant engine ready");
    }

    let state = SiteState {
        db,
        engine,
        toasts: ToastStore::default(),
        site_name: config.site.name.clone(),
    };

    // Install signal handler.
    let cancel = shutdown::install_signal_handler();

    start_server(&config.server.host, config.server.port, state, cancel).await?;

    info!("atrio serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("atrio={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
