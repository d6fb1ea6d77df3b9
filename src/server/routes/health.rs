//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (index document is servable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 while the index document exists. A rebuild that wipes the
/// dist directory turns this into 503 until the document is back.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ServerResult<StatusCode> {
    if state.index_available() {
        Ok(StatusCode::OK)
    } else {
        Err(ServerError::MissingIndex(state.index_path()))
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let index_ok = state.index_available();

    Json(HealthResponse {
        status: if index_ok { "healthy" } else { "unhealthy" }.to_string(),
        index: if index_ok { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
