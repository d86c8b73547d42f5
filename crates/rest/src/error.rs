//! Error types for the REST API.
//!
//! Every failure is rendered in the same envelope as a successful response,
//! with a `null` result and the error text as the message:
//!
//! ```json
//! {"result": null, "message": "No user is currently logged in"}
//! ```
//!
//! # Error Mapping
//!
//! | Source | HTTP Status |
//! |--------|-------------|
//! | Malformed body ([`ArgumentError`]) | 400 |
//! | Schema validation ([`SchemaError`]) | 400 |
//! | `ApiError::BadRequest` | 400 |
//! | `ApiError::Unauthorized` | 401 |
//! | `ApiError::NotFound` | 404 |
//! | `ApiError::Conflict` | 409 |
//! | `ApiError::Unsupported` | 501 |
//! | `ApiError::ExternalService` | 502 |
//! | `ApiError::Unavailable` | 503 |
//! | `ApiError::Internal` | 500 |

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::ApiError;
use crate::args::{ArgumentError, SchemaError};
use crate::responses::envelope;

/// The error type returned by every handler.
#[derive(Debug)]
pub enum RestError {
    /// Invalid arguments (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Wrong credentials (HTTP 401).
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Named entity not found (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Conflict with the current state (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// Not implemented (HTTP 501).
    NotImplemented {
        /// Description of what's not implemented.
        feature: String,
    },

    /// A remote service failed (HTTP 502).
    BadGateway {
        /// Error message.
        message: String,
    },

    /// The engine cannot take requests right now (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            RestError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the text placed in the envelope's `message`.
    pub fn message(&self) -> String {
        match self {
            RestError::BadRequest { message }
            | RestError::Unauthorized { message }
            | RestError::NotFound { message }
            | RestError::Conflict { message }
            | RestError::BadGateway { message }
            | RestError::ServiceUnavailable { message }
            | RestError::InternalError { message } => message.clone(),
            RestError::NotImplemented { feature } => format!("{} is not supported", feature),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            RestError::NotFound { message } => write!(f, "Not found: {}", message),
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::NotImplemented { feature } => write!(f, "Not implemented: {}", feature),
            RestError::BadGateway { message } => write!(f, "Bad gateway: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        }
        (status, envelope::error(self.message())).into_response()
    }
}

impl From<ApiError> for RestError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Conflict(message) => RestError::Conflict { message },
            ApiError::BadRequest(message) => RestError::BadRequest { message },
            ApiError::NotFound(message) => RestError::NotFound { message },
            ApiError::Unauthorized(message) => RestError::Unauthorized { message },
            ApiError::ExternalService(message) => RestError::BadGateway { message },
            ApiError::Unavailable(message) => RestError::ServiceUnavailable { message },
            ApiError::Unsupported(feature) => RestError::NotImplemented { feature },
            ApiError::Internal(message) => RestError::InternalError { message },
        }
    }
}

impl From<ArgumentError> for RestError {
    fn from(err: ArgumentError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<SchemaError> for RestError {
    fn from(err: SchemaError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RestError {
    fn from(err: std::io::Error) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;
