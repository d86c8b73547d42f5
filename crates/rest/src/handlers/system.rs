//! Version check and ping.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::error::RestResult;
use crate::responses::envelope;
use crate::state::AppState;

/// Returns the running version and the latest released one.
///
/// # HTTP Request
///
/// `GET [base]/version`
pub async fn version_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing version check");
    let result = state.api().version_check().await?;
    Ok(envelope::ok(result))
}

/// Liveness check for monitoring and the frontend.
///
/// # HTTP Request
///
/// `GET [base]/ping`
///
/// # Response
///
/// - `200 OK` - `{"result": true, "message": ""}`
pub async fn ping_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    let result = state.api().ping().await?;
    Ok(envelope::ok(result))
}
