//! Application Configuration
//!
//! Resolved once at start-up from build-time environment variables and
//! passed down explicitly.

use log::LevelFilter;
use thiserror::Error;

pub const DEFAULT_BACKEND: &str = "http://localhost:8080";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("backend url must start with http:// or https://, got '{0}'")]
    InvalidBackend(String),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash
    pub backend_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read configuration baked in at build time
    ///
    /// # Environment Variables
    /// - `MOVIES_BACKEND`: backend base URL (default: "http://localhost:8080")
    /// - `MOVIES_LOG`: log level filter (default: "info")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("MOVIES_BACKEND"), option_env!("MOVIES_LOG"))
    }

    pub fn from_values(backend: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let backend = backend.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BACKEND);
        if !(backend.starts_with("http://") || backend.starts_with("https://")) {
            return Err(ConfigError::InvalidBackend(backend.to_string()));
        }

        let log_level = match log_level.map(str::trim).filter(|s| !s.is_empty()) {
            Some(level) => level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            backend_url: backend.trim_end_matches('/').to_string(),
            log_level,
        })
    }
}
