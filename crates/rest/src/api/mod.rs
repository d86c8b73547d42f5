//! The collaborator behind every resource.
//!
//! Handlers validate their arguments and make exactly one call on a
//! [`RestApi`]. Whatever the call returns is wrapped in the response
//! envelope; errors are mapped to status codes by
//! [`RestError`](crate::error::RestError).

mod error;

use std::path::Path;

use async_trait::async_trait;
use axum::body::Bytes;
use serde_json::Value;

use crate::schemas::{
    ActionType, AllBalancesQuery, AssetIconSize, BlockchainAccountData, BlockchainBalanceQuery,
    CurrentAssetsPriceQuery, DataImportSource, DistributionBy, EthereumModule,
    EthereumTransactionQuery, ExchangeBalanceQuery, ExchangeSetup, ExternalService,
    ExternalServiceCredentials, HistoricalAssetsPrice, HistoricalPriceOracle, HistoryProcessing,
    LedgerAction, ManuallyTrackedBalance, ModifiableSettings, NewUser, OracleCacheCreate,
    OracleCachePair, SupportedBlockchain, SyncApproval, Tag, TagEdit, TimerangeLocationCacheQuery,
    TimerangeLocationQuery, Trade, UserPasswordChange,
};

pub use error::{ApiError, ApiResult};

/// Outcome of an asset icon lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetIcon {
    /// The icon, with the ETag that identifies this version of it.
    Image {
        /// Raw image bytes.
        data: Bytes,
        /// Content type of `data`, e.g. `image/png`.
        content_type: String,
        /// Unquoted entity tag.
        etag: String,
    },
    /// The client's cached copy matches.
    NotModified,
}

/// The application engine as seen by the REST layer.
///
/// One method per resource operation. Methods return the JSON `result` of the
/// response envelope; the engine is responsible for any business validation
/// beyond the shape checks done by the schemas.
///
/// # Errors
///
/// Every method reports failures as [`ApiError`]. A call that requires a
/// logged in user returns [`ApiError::Conflict`] when there is none.
#[async_trait]
pub trait RestApi: Send + Sync {
    // Settings and tasks

    /// Returns the settings of the logged in user.
    async fn get_settings(&self) -> ApiResult<Value>;

    /// Applies the given settings and returns the full, updated settings.
    async fn set_settings(&self, settings: ModifiableSettings) -> ApiResult<Value>;

    /// Returns the outcome of an async task, or every pending and completed
    /// task id when `task_id` is `None`.
    async fn query_tasks_outcome(&self, task_id: Option<u64>) -> ApiResult<Value>;

    // Exchanges

    /// Returns the rates of the given currencies against USD.
    async fn get_exchange_rates(&self, currencies: Vec<String>) -> ApiResult<Value>;

    /// Returns the connected exchanges.
    async fn get_exchanges(&self) -> ApiResult<Value>;

    /// Connects an exchange.
    async fn setup_exchange(&self, setup: ExchangeSetup) -> ApiResult<Value>;

    /// Disconnects an exchange.
    async fn remove_exchange(&self, name: String) -> ApiResult<Value>;

    /// Deletes stored trades and movements of one exchange, or of all.
    async fn purge_exchange_data(&self, name: Option<String>) -> ApiResult<Value>;

    // External services and queried addresses

    /// Returns the configured external service credentials.
    async fn get_external_services(&self) -> ApiResult<Value>;

    /// Adds or replaces API keys of external services.
    async fn add_external_services(
        &self,
        services: Vec<ExternalServiceCredentials>,
    ) -> ApiResult<Value>;

    /// Removes the API keys of external services.
    async fn delete_external_services(&self, services: Vec<ExternalService>) -> ApiResult<Value>;

    /// Returns the addresses each module is limited to.
    async fn get_queried_addresses_per_module(&self) -> ApiResult<Value>;

    /// Limits a module's queries to an address, in addition to any already set.
    ///
    /// Returns the addresses per module after the change; adding an address
    /// twice is a [`ApiError::Conflict`].
    async fn add_queried_address_per_module(
        &self,
        module: EthereumModule,
        address: String,
    ) -> ApiResult<Value>;

    /// Removes an address from a module's queried addresses.
    async fn remove_queried_address_per_module(
        &self,
        module: EthereumModule,
        address: String,
    ) -> ApiResult<Value>;

    // Ethereum transactions

    /// Returns Ethereum transactions in a time range.
    async fn get_ethereum_transactions(&self, query: EthereumTransactionQuery) -> ApiResult<Value>;

    /// Deletes every stored Ethereum transaction.
    async fn purge_ethereum_transaction_data(&self) -> ApiResult<Value>;

    // Balances

    /// Returns the balances of every location.
    async fn query_all_balances(&self, query: AllBalancesQuery) -> ApiResult<Value>;

    /// Returns the balances of one exchange, or of all.
    async fn query_exchange_balances(&self, query: ExchangeBalanceQuery) -> ApiResult<Value>;

    /// Returns the balances of one blockchain, or of all.
    async fn query_blockchain_balances(&self, query: BlockchainBalanceQuery) -> ApiResult<Value>;

    /// Returns the manually tracked balances.
    async fn get_manually_tracked_balances(&self, async_query: bool) -> ApiResult<Value>;

    /// Adds manually tracked balances.
    async fn add_manually_tracked_balances(
        &self,
        async_query: bool,
        balances: Vec<ManuallyTrackedBalance>,
    ) -> ApiResult<Value>;

    /// Edits manually tracked balances, matched by label.
    async fn edit_manually_tracked_balances(
        &self,
        async_query: bool,
        balances: Vec<ManuallyTrackedBalance>,
    ) -> ApiResult<Value>;

    /// Removes manually tracked balances by label.
    async fn remove_manually_tracked_balances(
        &self,
        async_query: bool,
        labels: Vec<String>,
    ) -> ApiResult<Value>;

    // Tags

    /// Returns every tag.
    async fn get_tags(&self) -> ApiResult<Value>;

    /// Adds a tag.
    async fn add_tag(&self, tag: Tag) -> ApiResult<Value>;

    /// Edits a tag.
    async fn edit_tag(&self, edit: TagEdit) -> ApiResult<Value>;

    /// Deletes a tag.
    async fn delete_tag(&self, name: String) -> ApiResult<Value>;

    // Trades, asset movements and ledger actions

    /// Returns trades in a time range, optionally of one location.
    async fn get_trades(&self, query: TimerangeLocationCacheQuery) -> ApiResult<Value>;

    /// Adds an externally made trade.
    async fn add_trade(&self, trade: Trade) -> ApiResult<Value>;

    /// Replaces the trade with the given id.
    async fn edit_trade(&self, trade_id: String, trade: Trade) -> ApiResult<Value>;

    /// Deletes a trade.
    async fn delete_trade(&self, trade_id: String) -> ApiResult<Value>;

    /// Returns deposits and withdrawals in a time range.
    async fn get_asset_movements(&self, query: TimerangeLocationCacheQuery) -> ApiResult<Value>;

    /// Returns ledger actions in a time range.
    async fn get_ledger_actions(&self, query: TimerangeLocationQuery) -> ApiResult<Value>;

    /// Adds a ledger action and returns its identifier.
    async fn add_ledger_action(&self, action: LedgerAction) -> ApiResult<Value>;

    /// Replaces the ledger action with the given identifier.
    async fn edit_ledger_action(&self, identifier: u64, action: LedgerAction) -> ApiResult<Value>;

    /// Deletes a ledger action.
    async fn delete_ledger_action(&self, identifier: u64) -> ApiResult<Value>;

    /// Returns ignored action ids, of one type or of all.
    async fn get_ignored_action_ids(&self, action_type: Option<ActionType>) -> ApiResult<Value>;

    /// Excludes actions from accounting.
    async fn add_ignored_action_ids(
        &self,
        action_type: ActionType,
        action_ids: Vec<String>,
    ) -> ApiResult<Value>;

    /// Includes previously ignored actions again.
    async fn remove_ignored_action_ids(
        &self,
        action_type: ActionType,
        action_ids: Vec<String>,
    ) -> ApiResult<Value>;

    // Users

    /// Returns every known user and whether they are logged in.
    async fn get_users(&self) -> ApiResult<Value>;

    /// Creates a user and logs them in.
    async fn create_new_user(&self, user: NewUser) -> ApiResult<Value>;

    /// Logs a user in.
    async fn user_login(
        &self,
        name: String,
        password: String,
        sync_approval: SyncApproval,
    ) -> ApiResult<Value>;

    /// Logs a user out.
    async fn user_logout(&self, name: String) -> ApiResult<Value>;

    /// Changes a user's password.
    async fn user_change_password(&self, change: UserPasswordChange) -> ApiResult<Value>;

    // Blockchain accounts

    /// Returns the tracked accounts of a blockchain.
    async fn get_blockchain_accounts(&self, blockchain: SupportedBlockchain) -> ApiResult<Value>;

    /// Starts tracking accounts.
    async fn add_blockchain_accounts(
        &self,
        blockchain: SupportedBlockchain,
        accounts: Vec<BlockchainAccountData>,
        async_query: bool,
    ) -> ApiResult<Value>;

    /// Edits the label and tags of tracked accounts.
    async fn edit_blockchain_accounts(
        &self,
        blockchain: SupportedBlockchain,
        accounts: Vec<BlockchainAccountData>,
    ) -> ApiResult<Value>;

    /// Stops tracking accounts.
    async fn remove_blockchain_accounts(
        &self,
        blockchain: SupportedBlockchain,
        accounts: Vec<String>,
        async_query: bool,
    ) -> ApiResult<Value>;

    // Assets

    /// Returns the ignored assets.
    async fn get_ignored_assets(&self) -> ApiResult<Value>;

    /// Adds ignored assets.
    async fn add_ignored_assets(&self, assets: Vec<String>) -> ApiResult<Value>;

    /// Removes ignored assets.
    async fn remove_ignored_assets(&self, assets: Vec<String>) -> ApiResult<Value>;

    /// Returns an asset icon, or [`AssetIcon::NotModified`] when
    /// `match_header` equals the current ETag.
    async fn get_asset_icon(
        &self,
        asset: String,
        size: AssetIconSize,
        match_header: Option<String>,
    ) -> ApiResult<AssetIcon>;

    /// Stores a custom icon read from `filepath`.
    ///
    /// The file may be removed as soon as the call returns.
    async fn upload_asset_icon(&self, asset: String, filepath: &Path) -> ApiResult<Value>;

    /// Returns current prices of assets in the target asset.
    async fn get_current_assets_price(&self, query: CurrentAssetsPriceQuery) -> ApiResult<Value>;

    /// Returns the price of each asset at its timestamp, in the target asset.
    async fn get_historical_assets_price(&self, query: HistoricalAssetsPrice) -> ApiResult<Value>;

    // Statistics and history

    /// Returns the net value distribution.
    async fn query_value_distribution_data(
        &self,
        distribution_by: DistributionBy,
    ) -> ApiResult<Value>;

    /// Processes trade history in a time range and returns the PnL report.
    async fn process_history(&self, query: HistoryProcessing) -> ApiResult<Value>;

    /// Writes the last processed history as CSV files into a directory.
    async fn export_processed_history_csv(&self, directory_path: &Path) -> ApiResult<Value>;

    /// Imports data from an exported file.
    ///
    /// The file may be removed as soon as the call returns.
    async fn import_data(&self, source: DataImportSource, filepath: &Path) -> ApiResult<Value>;

    // Oracles

    /// Returns the supported price oracles.
    async fn get_supported_oracles(&self) -> ApiResult<Value>;

    /// Returns the cached pairs of an oracle.
    async fn get_oracle_cache(
        &self,
        oracle: HistoricalPriceOracle,
        async_query: bool,
    ) -> ApiResult<Value>;

    /// Populates an oracle's cache for a pair.
    async fn create_oracle_cache(&self, request: OracleCacheCreate) -> ApiResult<Value>;

    /// Drops an oracle's cache for a pair.
    async fn delete_oracle_cache(&self, pair: OracleCachePair) -> ApiResult<Value>;

    // System

    /// Returns the running version and the latest release.
    async fn version_check(&self) -> ApiResult<Value>;

    /// Liveness check.
    async fn ping(&self) -> ApiResult<Value> {
        Ok(Value::Bool(true))
    }
}
