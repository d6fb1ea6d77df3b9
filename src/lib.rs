//! # ArkInput
//!
//! Shell host for the ArkInput dashboard. The dashboard itself is the
//! `arkinput-ui` crate, a Leptos single-page application compiled to WASM;
//! this crate serves its build output so that browser-history routes such
//! as `/records` load the application on reload or direct entry.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`server`]: Axum router, health probes and graceful shutdown
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod logging;
pub mod server;

pub use config::{generate_default_config, Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};
pub use server::{build_router, check_dist, serve, AppState, ServerError, ServerResult};
