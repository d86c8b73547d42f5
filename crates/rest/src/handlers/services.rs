//! External service credentials and per-module queried addresses:
//! `/external_services` and `/queried_addresses`.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{ExternalServicesAdd, ExternalServicesDelete, QueriedAddress};
use crate::state::AppState;

/// Returns the external service credentials.
///
/// # HTTP Request
///
/// `GET [base]/external_services`
pub async fn get_external_services_handler<A>(
    State(state): State<AppState<A>>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing external services query");
    let result = state.api().get_external_services().await?;
    Ok(envelope::ok(result))
}

/// Adds or replaces external service API keys.
///
/// # HTTP Request
///
/// `PUT [base]/external_services` with
/// `{"services": [{"name": "etherscan", "api_key": "..."}]}`
pub async fn add_external_services_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExternalServicesAdd, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ExternalServicesAdd { services } = args.into_inner();
    // Never log the keys
    debug!(
        services = ?services.iter().map(|service| service.name).collect::<Vec<_>>(),
        "Processing external services addition"
    );
    let result = state.api().add_external_services(services).await?;
    Ok(envelope::ok(result))
}

/// Removes external service API keys.
///
/// # HTTP Request
///
/// `DELETE [base]/external_services` with `{"services": ["etherscan"]}`
pub async fn delete_external_services_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ExternalServicesDelete, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let ExternalServicesDelete { services } = args.into_inner();
    debug!(services = ?services, "Processing external services removal");
    let result = state.api().delete_external_services(services).await?;
    Ok(envelope::ok(result))
}

/// Returns the queried addresses per module.
///
/// # HTTP Request
///
/// `GET [base]/queried_addresses`
pub async fn get_queried_addresses_handler<A>(
    State(state): State<AppState<A>>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing queried addresses query");
    let result = state.api().get_queried_addresses_per_module().await?;
    Ok(envelope::ok(result))
}

/// Adds an address to a module's queried addresses.
///
/// # HTTP Request
///
/// `PUT [base]/queried_addresses` with `{"module": "aave", "address": "0x..."}`
///
/// # Response
///
/// - `200 OK` - The queried addresses of every module
/// - `409 Conflict` - The address is already queried for the module
pub async fn add_queried_address_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<QueriedAddress, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let QueriedAddress { module, address } = args.into_inner();
    debug!(module = %module, address = %address, "Processing queried address addition");
    let result = state
        .api()
        .add_queried_address_per_module(module, address)
        .await?;
    Ok(envelope::ok(result))
}

/// Removes an address from a module's queried addresses.
///
/// # HTTP Request
///
/// `DELETE [base]/queried_addresses` with `{"module": "aave", "address": "0x..."}`
///
/// # Response
///
/// - `200 OK` - The queried addresses of every module
/// - `409 Conflict` - The address is not queried for the module
pub async fn remove_queried_address_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<QueriedAddress, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let QueriedAddress { module, address } = args.into_inner();
    debug!(module = %module, address = %address, "Processing queried address removal");
    let result = state
        .api()
        .remove_queried_address_per_module(module, address)
        .await?;
    Ok(envelope::ok(result))
}
