//! Server configuration for the rotkehlchen REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROTKI_API_PORT` | 4242 | Server port |
//! | `ROTKI_API_HOST` | 127.0.0.1 | Host to bind |
//! | `ROTKI_API_LOG_LEVEL` | info | Log level |
//! | `ROTKI_API_PREFIX` | /api/1 | Path prefix of every resource |
//! | `ROTKI_API_MAX_BODY_SIZE` | 10485760 | Max request body (bytes) |
//! | `ROTKI_API_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ROTKI_API_ENABLE_CORS` | true | Enable CORS |
//! | `ROTKI_API_CORS_ORIGINS` | * | Allowed origins |
//! | `ROTKI_API_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `ROTKI_API_CORS_HEADERS` | Content-Type,Authorization,If-Match,If-None-Match | Allowed headers |
//! | `ROTKI_API_ENABLE_REQUEST_ID` | true | Generate and propagate `x-request-id` |
//! | `ROTKI_API_UPLOAD_DIR` | system temp dir | Where uploads are staged |
//!
//! # Example
//!
//! ```rust
//! use rotkehlchen_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 5042,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Server configuration for the rotkehlchen REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "rotkehlchen-rest")]
#[command(about = "rotkehlchen REST API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ROTKI_API_PORT", default_value = "4242")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ROTKI_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ROTKI_API_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Path prefix every resource is mounted under.
    #[arg(long, env = "ROTKI_API_PREFIX", default_value = "/api/1")]
    pub prefix: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "ROTKI_API_MAX_BODY_SIZE", default_value = "10485760")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "ROTKI_API_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ROTKI_API_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ROTKI_API_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "ROTKI_API_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "ROTKI_API_CORS_HEADERS",
        default_value = "Content-Type,Authorization,If-Match,If-None-Match"
    )]
    pub cors_headers: String,

    /// Enable request ID tracking.
    #[arg(long, env = "ROTKI_API_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,

    /// Parent directory for the temporary directories uploads are saved in.
    #[arg(long, env = "ROTKI_API_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4242,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            prefix: "/api/1".to_string(),
            max_body_size: 10 * 1024 * 1024, // 10MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,If-Match,If-None-Match".to_string(),
            enable_request_id: true,
            upload_dir: None,
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

    /// Returns the prefix to nest routes under, or `None` to mount at root.
    pub fn route_prefix(&self) -> Option<&str> {
        match self.prefix.as_str() {
            "" | "/" => None,
            prefix => Some(prefix),
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !self.prefix.starts_with('/') {
            errors.push(format!("Prefix '{}' must start with '/'", self.prefix));
        } else if self.prefix.len() > 1 && self.prefix.ends_with('/') {
            errors.push(format!("Prefix '{}' must not end with '/'", self.prefix));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            enable_request_id: false,
            ..Self::default()
        }
    }
}
