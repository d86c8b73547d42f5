//! Exchange resources.
//!
//! | Path | Methods |
//! |------|---------|
//! | `/exchange_rates` | GET |
//! | `/exchanges` | GET, PUT, DELETE |
//! | `/exchanges/data[/{name}]` | DELETE |
//! | `/exchanges/balances[/{name}]` | GET |

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{
    ExchangeBalanceQuery, ExchangeName, ExchangeRatesQuery, ExchangeSetup, ExchangesDataQuery,
};
use crate::state::AppState;

/// Returns USD rates of the given currencies.
///
/// # HTTP Request
///
/// `GET [base]/exchange_rates?currencies=EUR,GBP`
///
/// The currencies may also be sent as a JSON list in the body.
pub async fn exchange_rates_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExchangeRatesQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ExchangeRatesQuery { currencies } = args.into_inner();
    debug!(currencies = ?currencies, "Processing exchange rates query");
    let result = state.api().get_exchange_rates(currencies).await?;
    Ok(envelope::ok(result))
}

/// Lists connected exchanges.
///
/// # HTTP Request
///
/// `GET [base]/exchanges`
pub async fn get_exchanges_handler<A>(State(state): State<AppState<A>>) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing exchanges query");
    let result = state.api().get_exchanges().await?;
    Ok(envelope::ok(result))
}

/// Connects an exchange.
///
/// # HTTP Request
///
/// `PUT [base]/exchanges` with `name`, `api_key`, `api_secret` and an
/// optional `passphrase`
pub async fn setup_exchange_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExchangeSetup, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let setup = args.into_inner();
    // Never log credentials
    debug!(exchange = %setup.name, "Processing exchange setup");
    let result = state.api().setup_exchange(setup).await?;
    Ok(envelope::ok(result))
}

/// Disconnects an exchange.
///
/// # HTTP Request
///
/// `DELETE [base]/exchanges` with `{"name": ...}`
pub async fn remove_exchange_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExchangeName, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ExchangeName { name } = args.into_inner();
    debug!(exchange = %name, "Processing exchange removal");
    let result = state.api().remove_exchange(name).await?;
    Ok(envelope::ok(result))
}

/// Purges stored data of one exchange, or of all when no name is given.
///
/// # HTTP Request
///
/// `DELETE [base]/exchanges/data` or `DELETE [base]/exchanges/data/{name}`
pub async fn purge_exchange_data_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExchangesDataQuery, location::ViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ExchangesDataQuery { name } = args.into_inner();
    debug!(exchange = ?name, "Processing exchange data purge");
    let result = state.api().purge_exchange_data(name).await?;
    Ok(envelope::ok(result))
}

/// Returns balances of one exchange, or of all.
///
/// # HTTP Request
///
/// `GET [base]/exchanges/balances[/{name}]?async_query=..&ignore_cache=..`
pub async fn exchange_balances_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExchangeBalanceQuery, location::JsonAndQueryAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        exchange = ?query.name,
        async_query = query.async_query,
        ignore_cache = query.ignore_cache,
        "Processing exchange balances query"
    );
    let result = state.api().query_exchange_balances(query).await?;
    Ok(envelope::ok(result))
}
