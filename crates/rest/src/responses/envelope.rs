//! The `{"result", "message"}` envelope shared by every JSON response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Body of every JSON response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// The call's result, `null` on errors.
    pub result: Value,
    /// Empty on success, the error text otherwise.
    pub message: String,
}

/// Wraps a successful result.
pub fn ok(result: Value) -> Response {
    (
        StatusCode::OK,
        Json(Envelope {
            result,
            message: String::new(),
        }),
    )
        .into_response()
}

/// Builds the body of an error response.
pub fn error(message: impl Into<String>) -> Json<Envelope> {
    Json(Envelope {
        result: Value::Null,
        message: message.into(),
    })
}
