//! User resources: `[base]/users`, `[base]/users/{name}` and
//! `[base]/users/{name}/password`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::{RestError, RestResult};
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{NewUser, UserAction, UserActionKind, UserPasswordChange};
use crate::state::AppState;

/// Lists known users and whether each is logged in.
///
/// # HTTP Request
///
/// `GET [base]/users`
pub async fn get_users_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing users query");
    let result = state.api().get_users().await?;
    Ok(envelope::ok(result))
}

/// Creates a user and logs them in.
///
/// # HTTP Request
///
/// `PUT [base]/users` with `name`, `password` and optional
/// `initial_settings`
pub async fn create_user_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<NewUser, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let user = args.into_inner();
    debug!(user = %user.name, "Processing user creation");
    let result = state.api().create_new_user(user).await?;
    Ok(envelope::ok(result))
}

/// Logs the user in or out.
///
/// # HTTP Request
///
/// `PATCH [base]/users/{name}` with `{"action": "login", "password": ...}` or
/// `{"action": "logout"}`
///
/// # Response
///
/// - `200 OK` - Action performed
/// - `400 Bad Request` - Unknown action, or login without a password
/// - `401 Unauthorized` - Wrong password
/// - `409 Conflict` - Sync approval needed, or the user is not logged in
pub async fn user_action_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<UserAction, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let UserAction {
        name,
        action,
        password,
        sync_approval,
    } = args.into_inner();
    debug!(user = %name, action = ?action, "Processing user action");

    let result = match action {
        UserActionKind::Login => {
            let password = password.ok_or_else(|| RestError::BadRequest {
                message: "Missing password field for login".to_string(),
            })?;
            state.api().user_login(name, password, sync_approval).await?
        }
        UserActionKind::Logout => state.api().user_logout(name).await?,
    };
    Ok(envelope::ok(result))
}

/// Changes a user's password.
///
/// # HTTP Request
///
/// `PATCH [base]/users/{name}/password` with `name`, `current_password` and
/// `new_password`
///
/// The arguments come from the body only; the `{name}` segment is not read.
pub async fn change_password_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<UserPasswordChange, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let change = args.into_inner();
    debug!(user = %change.name, "Processing password change");
    let result = state.api().user_change_password(change).await?;
    Ok(envelope::ok(result))
}
