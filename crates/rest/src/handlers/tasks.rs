//! Async task outcomes: `GET [base]/tasks` and `GET [base]/tasks/{task_id}`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::AsyncTasksQuery;
use crate::state::AppState;

/// Lists task ids, or returns the outcome of the task named in the path.
///
/// # HTTP Request
///
/// `GET [base]/tasks` or `GET [base]/tasks/{task_id}`
pub async fn query_tasks_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<AsyncTasksQuery, location::ViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!(task_id = ?args.task_id, "Processing task query");
    let result = state.api().query_tasks_outcome(args.task_id).await?;
    Ok(envelope::ok(result))
}
