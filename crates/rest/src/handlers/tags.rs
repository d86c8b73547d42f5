//! Tags resource: `[base]/tags`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{Tag, TagDelete, TagEdit};
use crate::state::AppState;

/// Returns every tag.
///
/// # HTTP Request
///
/// `GET [base]/tags`
pub async fn get_tags_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing tags query");
    let result = state.api().get_tags().await?;
    Ok(envelope::ok(result))
}

/// Adds a tag.
///
/// # HTTP Request
///
/// `PUT [base]/tags`
pub async fn add_tag_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<Tag, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let tag = args.into_inner();
    debug!(tag = %tag.name, "Processing tag addition");
    let result = state.api().add_tag(tag).await?;
    Ok(envelope::ok(result))
}

/// Edits a tag. Omitted fields are left unchanged.
///
/// # HTTP Request
///
/// `PATCH [base]/tags`
pub async fn edit_tag_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TagEdit, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let edit = args.into_inner();
    debug!(tag = %edit.name, "Processing tag edit");
    let result = state.api().edit_tag(edit).await?;
    Ok(envelope::ok(result))
}

/// Deletes a tag.
///
/// # HTTP Request
///
/// `DELETE [base]/tags`
pub async fn delete_tag_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TagDelete, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let TagDelete { name } = args.into_inner();
    debug!(tag = %name, "Processing tag deletion");
    let result = state.api().delete_tag(name).await?;
    Ok(envelope::ok(result))
}
