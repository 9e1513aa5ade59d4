//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Studiobook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `STUDIOS_DATA_PATH`: Studio dataset file (default: "data/studios.json")
//! - `BOOKINGS_STORAGE_KEY`: Key the booking ledger is stored under (default: "bookings")
//! - `DATABASE_URL`: Postgres connection string; selects Postgres storage when set
//! - `STORAGE_DIR`: Directory for file storage when no database is configured
//!   (default: "./data/storage")

use eyre::{Result, WrapErr};
use std::{env, path::PathBuf};
use studiobook_core::ledger::DEFAULT_BOOKINGS_KEY;
use studiobook_db::StorageBackend;
use tracing::Level;

/// Configuration for the Studiobook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use studiobook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Path of the studio dataset loaded at startup
    pub studios_data_path: PathBuf,

    /// Storage key of the booking ledger
    pub bookings_key: String,

    /// Backend the booking ledger persists to
    pub storage: StorageBackend,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if the API_PORT value cannot be
    /// parsed as a u16.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Data settings
        let studios_data_path = env::var("STUDIOS_DATA_PATH")
            .unwrap_or_else(|_| "data/studios.json".to_string())
            .into();
        let bookings_key =
            env::var("BOOKINGS_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_BOOKINGS_KEY.to_string());

        // Storage settings
        let storage = match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => StorageBackend::Postgres { url },
            _ => StorageBackend::File {
                dir: env::var("STORAGE_DIR")
                    .unwrap_or_else(|_| "./data/storage".to_string())
                    .into(),
            },
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            studios_data_path,
            bookings_key,
            storage,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_names_are_case_insensitive() {
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level(" warn "), Level::WARN);
        assert_eq!(parse_log_level("verbose"), Level::INFO);
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            studios_data_path: "data/studios.json".into(),
            bookings_key: DEFAULT_BOOKINGS_KEY.to_string(),
            storage: StorageBackend::File {
                dir: "./data/storage".into(),
            },
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
