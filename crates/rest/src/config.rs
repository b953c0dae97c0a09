//! Server configuration for the public API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NRDB_SERVER_PORT` | 8080 | Server port |
//! | `NRDB_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `NRDB_LOG_LEVEL` | info | Log level |
//! | `NRDB_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `NRDB_ENABLE_CORS` | true | Enable the CORS layer |
//! | `NRDB_CORS_ORIGINS` | * | Allowed origins |
//! | `NRDB_DATABASE_URL` | nrdb.db | SQLite database path, or `:memory:` |
//! | `NRDB_IMPORT` | | JSON dataset to import at startup |
//!
//! # Example
//!
//! ```rust
//! use nrdb_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Database used when `NRDB_DATABASE_URL` is not set.
pub const DEFAULT_DATABASE: &str = "nrdb.db";

/// Server configuration for the public API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "nrdb-api")]
#[command(about = "NetrunnerDB public API 2.0 server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "NRDB_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "NRDB_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "NRDB_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "NRDB_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable the CORS layer for preflight requests.
    #[arg(long, env = "NRDB_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "NRDB_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// SQLite database path, or `:memory:`.
    #[arg(long, env = "NRDB_DATABASE_URL")]
    pub database_url: Option<String>,

    /// JSON dataset to import before serving.
    #[arg(long, env = "NRDB_IMPORT")]
    pub import: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            database_url: None,
            import: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the database path, falling back to [`DEFAULT_DATABASE`].
    pub fn database(&self) -> &str {
        self.database_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_DATABASE)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.enable_cors && self.cors_origins.trim().is_empty() {
            errors.push("CORS origins cannot be empty when CORS is enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and an in-memory database.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            database_url: Some(":memory:".to_string()),
            import: None,
        }
    }
}
