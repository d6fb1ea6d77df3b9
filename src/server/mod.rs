//! ArkInput Shell Host
//!
//! Serves the compiled dashboard and answers deep links with the index
//! document so browser-history routing survives reloads.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /<file>` - Files under the dist directory (wasm, js, css, assets)
//! - `GET /<anything else>` - The index document, status 200
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use arkinput::config::ServerConfig;
//! use arkinput::server::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router: health probes plus the dashboard with index fallback
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Unknown paths belong to the client-side router
    let spa = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_path()));

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(Arc::new(state))
}

/// Verify the dist directory and its index document exist
pub fn check_dist(config: &ServerConfig) -> ServerResult<()> {
    if !config.dist_dir.is_dir() {
        return Err(ServerError::MissingDist(config.dist_dir.clone()));
    }
    let index = config.index_path();
    if !index.is_file() {
        return Err(ServerError::MissingIndex(index));
    }
    Ok(())
}

/// Start the shell host and run until a shutdown signal arrives
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    check_dist(&config)?;

    let addr = config.addr();
    let dist_dir = config.dist_dir.clone();
    let router = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(dist_dir = %dist_dir.display(), "ArkInput listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("ArkInput shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
