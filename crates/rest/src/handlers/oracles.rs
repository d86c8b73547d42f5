//! Price oracle resources: `[base]/oracles` and `[base]/oracles/{oracle}/cache`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{OracleCacheCreate, OracleCachePair, OracleCacheQuery};
use crate::state::AppState;

/// Lists the supported oracles.
///
/// # HTTP Request
///
/// `GET [base]/oracles`
pub async fn get_oracles_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing supported oracles query");
    let result = state.api().get_supported_oracles().await?;
    Ok(envelope::ok(result))
}

/// Lists the cached pairs of an oracle.
///
/// # HTTP Request
///
/// `GET [base]/oracles/{oracle}/cache`
pub async fn get_oracle_cache_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<OracleCacheQuery, location::JsonAndQueryAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let OracleCacheQuery {
        oracle,
        async_query,
    } = args.into_inner();
    debug!(oracle = ?oracle, "Processing oracle cache query");
    let result = state.api().get_oracle_cache(oracle, async_query).await?;
    Ok(envelope::ok(result))
}

/// Populates an oracle's cache for a pair.
///
/// # HTTP Request
///
/// `POST [base]/oracles/{oracle}/cache` with `from_asset`, `to_asset` and
/// optional `purge_old`
pub async fn create_oracle_cache_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<OracleCacheCreate, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let request = args.into_inner();
    debug!(
        oracle = ?request.oracle,
        from_asset = %request.from_asset,
        to_asset = %request.to_asset,
        purge_old = request.purge_old,
        "Processing oracle cache creation"
    );
    let result = state.api().create_oracle_cache(request).await?;
    Ok(envelope::ok(result))
}

/// Drops an oracle's cache for a pair.
///
/// # HTTP Request
///
/// `DELETE [base]/oracles/{oracle}/cache` with `from_asset` and `to_asset`
pub async fn delete_oracle_cache_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<OracleCachePair, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let pair = args.into_inner();
    debug!(
        oracle = ?pair.oracle,
        from_asset = %pair.from_asset,
        to_asset = %pair.to_asset,
        "Processing oracle cache deletion"
    );
    let result = state.api().delete_oracle_cache(pair).await?;
    Ok(envelope::ok(result))
}
