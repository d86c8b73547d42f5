//! Balance resources: `/balances`, `/balances/blockchains[/{blockchain}]` and
//! `/balances/manual`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{
    AllBalancesQuery, AsyncQuery, BlockchainBalanceQuery, ManuallyTrackedBalances,
    ManuallyTrackedBalancesDelete,
};
use crate::state::AppState;

/// Queries the balances of every location.
///
/// # HTTP Request
///
/// `GET [base]/balances`
///
/// Arguments come from the JSON body when one is sent, else from the query
/// string.
pub async fn all_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<AllBalancesQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        save_data = query.save_data,
        async_query = query.async_query,
        ignore_cache = query.ignore_cache,
        "Processing all balances query"
    );
    let result = state.api().query_all_balances(query).await?;
    Ok(envelope::ok(result))
}

/// Queries the balances of one blockchain, or of all.
///
/// # HTTP Request
///
/// `GET [base]/balances/blockchains[/{blockchain}]`
pub async fn blockchain_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<BlockchainBalanceQuery, location::JsonAndQueryAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        blockchain = ?query.blockchain,
        async_query = query.async_query,
        "Processing blockchain balances query"
    );
    let result = state.api().query_blockchain_balances(query).await?;
    Ok(envelope::ok(result))
}

/// Returns the manually tracked balances.
///
/// # HTTP Request
///
/// `GET [base]/balances/manual`
pub async fn get_manual_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<AsyncQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!(async_query = args.async_query, "Processing manual balances query");
    let result = state
        .api()
        .get_manually_tracked_balances(args.async_query)
        .await?;
    Ok(envelope::ok(result))
}

/// Adds manually tracked balances.
///
/// # HTTP Request
///
/// `PUT [base]/balances/manual` with `{"balances": [...]}`
pub async fn add_manual_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ManuallyTrackedBalances, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ManuallyTrackedBalances {
        async_query,
        balances,
    } = args.into_inner();
    debug!(count = balances.len(), "Processing manual balances addition");
    let result = state
        .api()
        .add_manually_tracked_balances(async_query, balances)
        .await?;
    Ok(envelope::ok(result))
}

/// Edits manually tracked balances, matched by label.
///
/// # HTTP Request
///
/// `PATCH [base]/balances/manual` with `{"balances": [...]}`
pub async fn edit_manual_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ManuallyTrackedBalances, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ManuallyTrackedBalances {
        async_query,
        balances,
    } = args.into_inner();
    debug!(count = balances.len(), "Processing manual balances edit");
    let result = state
        .api()
        .edit_manually_tracked_balances(async_query, balances)
        .await?;
    Ok(envelope::ok(result))
}

/// Removes manually tracked balances by label.
///
/// # HTTP Request
///
/// `DELETE [base]/balances/manual` with `{"labels": [...]}`
pub async fn remove_manual_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ManuallyTrackedBalancesDelete, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ManuallyTrackedBalancesDelete {
        async_query,
        labels,
    } = args.into_inner();
    debug!(labels = ?labels, "Processing manual balances removal");
    let result = state
        .api()
        .remove_manually_tracked_balances(async_query, labels)
        .await?;
    Ok(envelope::ok(result))
}
