//! # rotkehlchen-rest - REST resource layer of rotkehlchen
//!
//! This crate provides the HTTP API of the rotkehlchen portfolio tracker. Each
//! resource validates its request arguments and forwards them to one method
//! of a [`RestApi`] implementation; the engine behind that trait is external.
//!
//! ## Argument resolution
//!
//! Endpoints do not all read their arguments from the same place. Each one
//! declares a resolution mode through the [`Args`](extractors::Args)
//! extractor, and the [`args`] module captures, loads and merges the request
//! sources accordingly:
//!
//! | Mode | Sources |
//! |------|---------|
//! | `json` | JSON body |
//! | `querystring` | query string |
//! | `view_args` | path segments |
//! | `form` | form fields |
//! | `files` | uploaded files |
//! | `json_and_view_args` | body with path overlaid, absent without a body |
//! | `json_and_query` | body if present, else query string |
//! | `json_and_query_and_view_args` | `json_and_query` with path overlaid |
//! | `form_and_file` | form with files overlaid |
//! | `view_args_and_file` | path with files overlaid |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rotkehlchen_rest::{ServerConfig, create_app_with_config, init_logging};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig::from_env();
//!     init_logging(&config.log_level);
//!
//!     let app = create_app_with_config(engine, config.clone());
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await
//! }
//! ```
//!
//! ## Responses
//!
//! Every JSON response uses the same envelope:
//!
//! ```json
//! {"result": {"have_premium": false}, "message": ""}
//! ```
//!
//! Errors carry a `null` result and the error text as the message:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Malformed body, missing or invalid arguments |
//! | 401 | Wrong credentials |
//! | 404 | Unknown entity |
//! | 409 | No logged in user, or conflicting state |
//! | 500 | Internal error |
//! | 501 | Unsupported operation |
//! | 502 | A remote service failed |
//! | 503 | Engine unavailable |
//!
//! ## Configuration
//!
//! See [`config`] for the `ROTKI_API_*` environment variables.
//!
//! ## Architecture
//!
//! - [`args`] - Argument sources, resolution modes and merging
//! - [`schemas`] - Validated request shapes
//! - [`extractors`] - Axum extractors for arguments and conditional headers
//! - [`api`] - The [`RestApi`] collaborator trait
//! - [`handlers`] - One handler per resource method
//! - [`routing`] - Route table
//! - [`responses`] - Envelope and icon responses
//! - [`error`] - Error types and status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (collaborator, configuration)
//! - [`upload`] - Temporary storage of uploaded files

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod schemas;
pub mod state;
pub mod upload;

// Re-export commonly used types
pub use api::{ApiError, ApiResult, AssetIcon, RestApi};
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, StatusCode},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<A>(api: A) -> Router
where
    A: RestApi + 'static,
{
    create_app_with_config(api, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up every resource route under the configured prefix,
/// along with tracing, timeout, CORS, request id and body limit layers.
///
/// # Example
///
/// ```rust,ignore
/// use rotkehlchen_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     prefix: "/api/1".to_string(),
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(engine, config);
/// ```
pub fn create_app_with_config<A>(api: A, config: ServerConfig) -> Router
where
    A: RestApi + 'static,
{
    info!(
        prefix = %config.prefix,
        cors = config.enable_cors,
        request_id = config.enable_request_id,
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(api), config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    // Set is the outer layer so the id exists before it is propagated
    let router = if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<Method> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("rotkehlchen_rest={},tower_http=debug", level))
    });

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
