//! Blockchain account and Ethereum transaction resources.

use axum::{extract::State, response::Response};
use tracing::debug;

use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{
    BlockchainAccountsDelete, BlockchainAccountsEdit, BlockchainAccountsGet,
    EthereumTransactionQuery,
};
use crate::state::AppState;

/// Returns Ethereum transactions, optionally of one address.
///
/// # HTTP Request
///
/// `GET [base]/blockchains/ETH/transactions[/{address}]`
///
/// `from_timestamp` defaults to 0 and `to_timestamp` to now.
pub async fn get_transactions_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<EthereumTransactionQuery, location::JsonAndQueryAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        address = ?query.address,
        from_timestamp = query.from_timestamp,
        to_timestamp = query.to_timestamp,
        only_cache = query.only_cache,
        "Processing ethereum transactions query"
    );
    let result = state.api().get_ethereum_transactions(query).await?;
    Ok(envelope::ok(result))
}

/// Deletes every stored Ethereum transaction.
///
/// # HTTP Request
///
/// `DELETE [base]/blockchains/ETH/transactions`
pub async fn purge_transactions_handler<A>(
    State(state): State<AppState<A>>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing ethereum transactions purge");
    let result = state.api().purge_ethereum_transaction_data().await?;
    Ok(envelope::ok(result))
}

/// Lists the tracked accounts of a blockchain.
///
/// # HTTP Request
///
/// `GET [base]/blockchains/{blockchain}`
pub async fn get_accounts_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<BlockchainAccountsGet, location::ViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!(blockchain = %args.blockchain, "Processing blockchain accounts query");
    let result = state.api().get_blockchain_accounts(args.blockchain).await?;
    Ok(envelope::ok(result))
}

/// Starts tracking accounts.
///
/// # HTTP Request
///
/// `PUT [base]/blockchains/{blockchain}` with `{"accounts": [...]}`
pub async fn add_accounts_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<BlockchainAccountsEdit, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let BlockchainAccountsEdit {
        blockchain,
        accounts,
        async_query,
    } = args.into_inner();
    debug!(
        blockchain = %blockchain,
        count = accounts.len(),
        "Processing blockchain accounts addition"
    );
    let result = state
        .api()
        .add_blockchain_accounts(blockchain, accounts, async_query)
        .await?;
    Ok(envelope::ok(result))
}

/// Edits the label and tags of tracked accounts.
///
/// # HTTP Request
///
/// `PATCH [base]/blockchains/{blockchain}` with `{"accounts": [...]}`
pub async fn edit_accounts_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<BlockchainAccountsEdit, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let BlockchainAccountsEdit {
        blockchain,
        accounts,
        ..
    } = args.into_inner();
    debug!(
        blockchain = %blockchain,
        count = accounts.len(),
        "Processing blockchain accounts edit"
    );
    let result = state
        .api()
        .edit_blockchain_accounts(blockchain, accounts)
        .await?;
    Ok(envelope::ok(result))
}

/// Stops tracking accounts.
///
/// # HTTP Request
///
/// `DELETE [base]/blockchains/{blockchain}` with `{"accounts": ["0x..."]}`
pub async fn remove_accounts_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<BlockchainAccountsDelete, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let BlockchainAccountsDelete {
        blockchain,
        accounts,
        async_query,
    } = args.into_inner();
    debug!(
        blockchain = %blockchain,
        accounts = ?accounts,
        "Processing blockchain accounts removal"
    );
    let result = state
        .api()
        .remove_blockchain_accounts(blockchain, accounts, async_query)
        .await?;
    Ok(envelope::ok(result))
}
