//! Application State
//!
//! Shared state accessible by all handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn index_path(&self) -> PathBuf {
        self.config.index_path()
    }

    /// Whether the index document can currently be served
    pub fn index_available(&self) -> bool {
        self.index_path().is_file()
    }
}
