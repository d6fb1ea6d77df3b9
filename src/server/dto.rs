//! Data Transfer Objects
//!
//! Response types for the health endpoints.

use serde::Serialize;

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Index document status: ok, missing
    pub index: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
