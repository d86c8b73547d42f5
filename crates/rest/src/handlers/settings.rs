//! Settings resource: `GET` and `PUT [base]/settings`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::EditSettings;
use crate::state::AppState;

/// Returns the settings of the logged in user.
///
/// # HTTP Request
///
/// `GET [base]/settings`
///
/// # Response
///
/// - `200 OK` - The full settings
/// - `409 Conflict` - No user is logged in
pub async fn get_settings_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing settings query");
    let result = state.api().get_settings().await?;
    Ok(envelope::ok(result))
}

/// Changes some settings and returns all of them.
///
/// # HTTP Request
///
/// `PUT [base]/settings` with a JSON body `{"settings": {...}}`
///
/// Setting names that are not modifiable are rejected with `400 Bad Request`
/// naming the field.
///
/// # Example
///
/// ```http
/// PUT /api/1/settings HTTP/1.1
/// Content-Type: application/json
///
/// {"settings": {"ui_floating_precision": 4, "main_currency": "EUR"}}
/// ```
pub async fn set_settings_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<EditSettings, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let EditSettings { settings } = args.into_inner();
    debug!(settings = ?settings, "Processing settings change");
    let result = state.api().set_settings(settings).await?;
    Ok(envelope::ok(result))
}
