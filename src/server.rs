//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend selection, service construction and the Axum server
//! lifecycle.

use crate::application::services::{ShortenerService, UrlStore};
use crate::config::Config;
use crate::domain::repositories::KeyValueStore;
use crate::infrastructure::persistence::{NullStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the shared application state from configuration and a backend.
pub fn build_state(config: &Config, backend: Arc<dyn KeyValueStore>) -> AppState {
    let store = UrlStore::new(CodeGenerator::new(config.code_length), backend)
        .with_max_probes(config.max_probes)
        .with_key_prefix(config.redis_key_prefix.clone());

    AppState::new(
        Arc::new(ShortenerService::new(store)),
        config.base_url.clone(),
        config.default_top_n,
    )
}

/// Connects the configured storage backend.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable.
pub async fn connect_backend(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match &config.redis_url {
        Some(redis_url) => {
            let redis = RedisStore::connect(redis_url)
                .await
                .context("Failed to connect to Redis")?;
            info!("Persistence enabled (Redis)");
            Ok(Arc::new(redis))
        }
        None => {
            info!("Persistence disabled (in-memory only)");
            Ok(Arc::new(NullStore::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (Redis or in-memory only)
/// - Shortener service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let backend = connect_backend(&config).await?;
    let state = build_state(&config, backend);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
