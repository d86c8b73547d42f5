//! History entry resources: `/trades`, `/asset_movements`, `/ledgeractions`
//! and `/actions/ignored`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{
    IgnoredActionsModify, IgnoredActionsQuery, LedgerAction, LedgerActionEdit,
    LedgerActionIdentifier, TimerangeLocationCacheQuery, TimerangeLocationQuery, Trade,
    TradeDelete, TradePatch,
};
use crate::state::AppState;

/// Returns trades in a time range.
///
/// # HTTP Request
///
/// `GET [base]/trades?from_timestamp=...&to_timestamp=...&location=kraken`
///
/// Arguments come from the JSON body when one is sent, else from the query
/// string.
pub async fn get_trades_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TimerangeLocationCacheQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        from = query.from_timestamp,
        to = query.to_timestamp,
        location = ?query.location,
        only_cache = query.only_cache,
        "Processing trades query"
    );
    let result = state.api().get_trades(query).await?;
    Ok(envelope::ok(result))
}

/// Adds a trade.
///
/// # HTTP Request
///
/// `PUT [base]/trades`
pub async fn add_trade_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<Trade, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let trade = args.into_inner();
    debug!(pair = %trade.pair, location = %trade.location, "Processing trade addition");
    let result = state.api().add_trade(trade).await?;
    Ok(envelope::ok(result))
}

/// Replaces a trade.
///
/// # HTTP Request
///
/// `PATCH [base]/trades` with the full trade and its `trade_id`
pub async fn edit_trade_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TradePatch, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let TradePatch { trade_id, trade } = args.into_inner();
    debug!(trade_id = %trade_id, "Processing trade edit");
    let result = state.api().edit_trade(trade_id, trade).await?;
    Ok(envelope::ok(result))
}

/// Deletes a trade.
///
/// # HTTP Request
///
/// `DELETE [base]/trades` with `{"trade_id": ...}`
pub async fn delete_trade_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TradeDelete, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let TradeDelete { trade_id } = args.into_inner();
    debug!(trade_id = %trade_id, "Processing trade deletion");
    let result = state.api().delete_trade(trade_id).await?;
    Ok(envelope::ok(result))
}

/// Returns deposits and withdrawals in a time range.
///
/// # HTTP Request
///
/// `GET [base]/asset_movements`
pub async fn get_asset_movements_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TimerangeLocationCacheQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        from = query.from_timestamp,
        to = query.to_timestamp,
        location = ?query.location,
        "Processing asset movements query"
    );
    let result = state.api().get_asset_movements(query).await?;
    Ok(envelope::ok(result))
}

/// Returns ledger actions in a time range.
///
/// # HTTP Request
///
/// `GET [base]/ledgeractions`
pub async fn get_ledger_actions_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<TimerangeLocationQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        from = query.from_timestamp,
        to = query.to_timestamp,
        location = ?query.location,
        "Processing ledger actions query"
    );
    let result = state.api().get_ledger_actions(query).await?;
    Ok(envelope::ok(result))
}

/// Adds a ledger action.
///
/// # HTTP Request
///
/// `PUT [base]/ledgeractions`
pub async fn add_ledger_action_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<LedgerAction, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let action = args.into_inner();
    debug!(action_type = ?action.action_type, "Processing ledger action addition");
    let result = state.api().add_ledger_action(action).await?;
    Ok(envelope::ok(result))
}

/// Replaces a ledger action.
///
/// # HTTP Request
///
/// `PATCH [base]/ledgeractions` with the full action and its `identifier`
pub async fn edit_ledger_action_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<LedgerActionEdit, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let LedgerActionEdit { identifier, action } = args.into_inner();
    debug!(identifier, "Processing ledger action edit");
    let result = state.api().edit_ledger_action(identifier, action).await?;
    Ok(envelope::ok(result))
}

/// Deletes a ledger action.
///
/// # HTTP Request
///
/// `DELETE [base]/ledgeractions` with `{"identifier": ...}`
pub async fn delete_ledger_action_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<LedgerActionIdentifier, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let identifier = args.identifier;
    debug!(identifier, "Processing ledger action deletion");
    let result = state.api().delete_ledger_action(identifier).await?;
    Ok(envelope::ok(result))
}

/// Returns ignored action ids.
///
/// # HTTP Request
///
/// `GET [base]/actions/ignored[?action_type=trade]`
pub async fn get_ignored_actions_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<IgnoredActionsQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let action_type = args.action_type;
    debug!(action_type = ?action_type, "Processing ignored actions query");
    let result = state.api().get_ignored_action_ids(action_type).await?;
    Ok(envelope::ok(result))
}

/// Ignores actions in accounting.
///
/// # HTTP Request
///
/// `PUT [base]/actions/ignored` with `action_type` and `action_ids`
pub async fn add_ignored_actions_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<IgnoredActionsModify, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let IgnoredActionsModify {
        action_type,
        action_ids,
    } = args.into_inner();
    debug!(
        action_type = ?action_type,
        count = action_ids.len(),
        "Processing ignored actions addition"
    );
    let result = state
        .api()
        .add_ignored_action_ids(action_type, action_ids)
        .await?;
    Ok(envelope::ok(result))
}

/// Stops ignoring actions.
///
/// # HTTP Request
///
/// `DELETE [base]/actions/ignored` with `action_type` and `action_ids`
pub async fn remove_ignored_actions_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<IgnoredActionsModify, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let IgnoredActionsModify {
        action_type,
        action_ids,
    } = args.into_inner();
    debug!(
        action_type = ?action_type,
        count = action_ids.len(),
        "Processing ignored actions removal"
    );
    let result = state
        .api()
        .remove_ignored_action_ids(action_type, action_ids)
        .await?;
    Ok(envelope::ok(result))
}
