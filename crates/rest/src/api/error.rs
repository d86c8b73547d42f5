//! Errors reported by the [`RestApi`](super::RestApi) collaborator.

// Variant payloads are the user-facing message
#![allow(missing_docs)]

use thiserror::Error;

/// Result type for collaborator calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a collaborator call, by category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request conflicts with current state, e.g. no user is logged in.
    #[error("{0}")]
    Conflict(String),

    /// The arguments passed validation but are unusable.
    #[error("{0}")]
    BadRequest(String),

    /// A named entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Wrong credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// A remote service the engine depends on failed.
    #[error("{0}")]
    ExternalService(String),

    /// The engine cannot take requests right now.
    #[error("{0}")]
    Unavailable(String),

    /// The operation is not supported by this engine.
    #[error("{0} is not supported")]
    Unsupported(String),

    /// Anything else.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The message for a call that needs a logged in user.
    pub fn no_user() -> Self {
        ApiError::Conflict("No user is currently logged in".to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
