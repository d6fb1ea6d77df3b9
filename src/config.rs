//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shell host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled dashboard
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Document served for every client-side route
    #[serde(default = "default_index_file")]
    pub index_file: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("arkinput-ui/dist")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            index_file: default_index_file(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(&self.index_file)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Candidate config file locations, in priority order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("arkinput").join("config.toml")),
            Some(PathBuf::from("./arkinput.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first existing default config file, or fall back to
    /// defaults plus environment. Returns the file used, if any.
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        match Self::default_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Ok((Self::load_with_env(&path)?, Some(path))),
            None => Ok((Self::from_env(), None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`; unparsable values are ignored
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("ARKINPUT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ARKINPUT_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dist_dir) = lookup("ARKINPUT_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        // Logging overrides
        if let Some(level) = lookup("ARKINPUT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ARKINPUT_LOG_FORMAT").and_then(|f| LogFormat::parse(&f)) {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# ArkInput Configuration
#
# Environment variables override these settings:
# - ARKINPUT_HOST
# - ARKINPUT_PORT
# - ARKINPUT_DIST_DIR
# - ARKINPUT_LOG_LEVEL
# - ARKINPUT_LOG_FORMAT

[server]
# Address to bind
host = "127.0.0.1"

# Port to listen on
port = 8084

# Directory holding the compiled dashboard (index.html, .wasm, .js, .css)
dist_dir = "arkinput-ui/dist"

# Document returned for client-side routes such as /records
index_file = "index.html"

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert_eq!(
            config.server.index_path(),
            PathBuf::from("arkinput-ui/dist/index.html")
        );
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
            [server]
            port = 9000
            dist_dir = "/srv/arkinput"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.dist_dir, PathBuf::from("/srv/arkinput"));
        assert_eq!(config.server.index_file, "index.html");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.server.dist_dir, defaults.server.dist_dir);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ARKINPUT_HOST", "0.0.0.0"),
            ("ARKINPUT_PORT", "8100"),
            ("ARKINPUT_DIST_DIR", "dist"),
            ("ARKINPUT_LOG_FORMAT", "JSON"),
        ]);
        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "0.0.0.0:8100");
        assert_eq!(config.server.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let env: HashMap<&str, &str> =
            HashMap::from([("ARKINPUT_PORT", "http"), ("ARKINPUT_LOG_FORMAT", "xml")]);
        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8084);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
