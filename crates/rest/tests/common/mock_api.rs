//! Recording in-memory [`RestApi`] for integration tests.
//!
//! Every call is recorded with its arguments as JSON. Calls that need a
//! logged in user fail with the engine's conflict until one logs in, and any
//! method can be made to fail with [`MockApi::fail`].

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::body::Bytes;
use serde::Serialize;
use serde_json::{Map, Value, json};

use rotkehlchen_rest::schemas::*;
use rotkehlchen_rest::{ApiError, ApiResult, AssetIcon, RestApi};

/// ETag of the icon served by [`MockApi::get_asset_icon`].
pub const ICON_ETAG: &str = "0a1b2c3d";

/// Bytes of the icon served by [`MockApi::get_asset_icon`].
pub const ICON_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nicon";

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// Method name.
    pub method: &'static str,
    /// Arguments, serialized.
    pub args: Value,
}

/// A file handed to the engine by path, as it was during the call.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenFile {
    /// Path passed to the engine.
    pub path: PathBuf,
    /// File contents at call time.
    pub contents: Vec<u8>,
}

#[derive(Debug)]
struct MockState {
    user: Option<String>,
    settings: Map<String, Value>,
    calls: Vec<Call>,
    failures: HashMap<&'static str, ApiError>,
    files: Vec<SeenFile>,
    queried_addresses: BTreeMap<EthereumModule, Vec<String>>,
}

/// Shared handle to the recording engine.
#[derive(Debug, Clone)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

fn default_settings() -> Map<String, Value> {
    let value = json!({
        "have_premium": false,
        "version": 26,
        "last_write_ts": 0,
        "premium_should_sync": false,
        "include_crypto2crypto": true,
        "anonymized_logs": false,
        "last_data_upload_ts": 0,
        "ui_floating_precision": 2,
        "taxfree_after_period": 31_536_000,
        "balance_save_frequency": 24,
        "include_gas_costs": true,
        "eth_rpc_endpoint": "http://localhost:8545",
        "ksm_rpc_endpoint": "http://localhost:9933",
        "main_currency": "USD",
        "date_display_format": "%d/%m/%Y %H:%M:%S %Z",
        "last_balance_save": 0,
        "submit_usage_analytics": true,
        "kraken_account_type": "starter",
        "active_modules": ["makerdao_dsr", "makerdao_vaults", "aave"],
        "frontend_settings": "",
        "account_for_assets_movements": true,
        "btc_derivation_gap_limit": 20,
        "calculate_past_cost_basis": true,
        "display_date_in_localtime": true,
        "current_price_oracles": ["cryptocompare", "coingecko"],
        "historical_price_oracles": ["cryptocompare", "coingecko"],
        "taxable_ledger_actions": ["income", "airdrop"]
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    /// Creates an engine with no logged in user.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                user: None,
                settings: default_settings(),
                calls: Vec::new(),
                failures: HashMap::new(),
                files: Vec::new(),
                queried_addresses: BTreeMap::new(),
            })),
        }
    }

    /// Creates an engine with `name` logged in.
    pub fn logged_in(name: &str) -> Self {
        let api = Self::new();
        api.lock().user = Some(name.to_string());
        api
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Makes every later call of `method` fail with `error`.
    pub fn fail(&self, method: &'static str, error: ApiError) {
        self.lock().failures.insert(method, error);
    }

    /// Returns every recorded call.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Returns the last recorded call.
    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no call was recorded")
    }

    /// Returns the arguments of the last call of `method`.
    pub fn last_args(&self, method: &str) -> Value {
        self.calls()
            .into_iter()
            .rev()
            .find(|call| call.method == method)
            .map(|call| call.args)
            .unwrap_or_else(|| panic!("{method} was never called"))
    }

    /// Returns the files handed over by path.
    pub fn files(&self) -> Vec<SeenFile> {
        self.lock().files.clone()
    }

    /// Returns the current settings.
    pub fn settings(&self) -> Value {
        Value::Object(self.lock().settings.clone())
    }

    /// Returns the logged in user.
    pub fn user(&self) -> Option<String> {
        self.lock().user.clone()
    }

    fn record(&self, method: &'static str, args: impl Serialize) -> ApiResult<()> {
        let args = serde_json::to_value(args).expect("arguments serialize");
        let mut state = self.lock();
        state.calls.push(Call { method, args });
        match state.failures.get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn require_user(&self) -> ApiResult<()> {
        match self.lock().user {
            Some(_) => Ok(()),
            None => Err(ApiError::no_user()),
        }
    }

    /// Records the call, checks for a user and echoes the arguments.
    fn echo(&self, method: &'static str, args: Value) -> ApiResult<Value> {
        self.record(method, &args)?;
        self.require_user()?;
        Ok(args)
    }

    fn queried_addresses(&self) -> Value {
        let state = self.lock();
        state
            .queried_addresses
            .iter()
            .map(|(module, addresses)| (module.to_string(), json!(addresses)))
            .collect()
    }

    fn see_file(&self, path: &Path) {
        let contents = std::fs::read(path).unwrap_or_default();
        self.lock().files.push(SeenFile {
            path: path.to_path_buf(),
            contents,
        });
    }
}

#[async_trait]
impl RestApi for MockApi {
    async fn get_settings(&self) -> ApiResult<Value> {
        self.record("get_settings", Value::Null)?;
        self.require_user()?;
        Ok(self.settings())
    }

    async fn set_settings(&self, settings: ModifiableSettings) -> ApiResult<Value> {
        self.record("set_settings", &settings)?;
        self.require_user()?;
        if let Value::Object(changes) = serde_json::to_value(&settings).expect("settings serialize")
        {
            self.lock().settings.extend(changes);
        }
        Ok(self.settings())
    }

    async fn query_tasks_outcome(&self, task_id: Option<u64>) -> ApiResult<Value> {
        self.record("query_tasks_outcome", json!({ "task_id": task_id }))?;
        match task_id {
            None => Ok(json!({"pending": [], "completed": []})),
            Some(id) => Ok(json!({"status": "not-found", "outcome": null, "task_id": id})),
        }
    }

    async fn get_exchange_rates(&self, currencies: Vec<String>) -> ApiResult<Value> {
        self.record("get_exchange_rates", &currencies)?;
        Ok(currencies.into_iter().map(|c| (c, json!("1"))).collect())
    }

    async fn get_exchanges(&self) -> ApiResult<Value> {
        self.echo("get_exchanges", json!([]))
    }

    async fn setup_exchange(&self, setup: ExchangeSetup) -> ApiResult<Value> {
        self.record("setup_exchange", &setup)?;
        self.require_user()?;
        Ok(Value::Bool(true))
    }

    async fn remove_exchange(&self, name: String) -> ApiResult<Value> {
        self.record("remove_exchange", &name)?;
        self.require_user()?;
        Ok(Value::Bool(true))
    }

    async fn purge_exchange_data(&self, name: Option<String>) -> ApiResult<Value> {
        self.record("purge_exchange_data", json!({ "name": name }))?;
        self.require_user()?;
        Ok(Value::Bool(true))
    }

    async fn get_external_services(&self) -> ApiResult<Value> {
        self.echo("get_external_services", json!({}))
    }

    async fn add_external_services(
        &self,
        services: Vec<ExternalServiceCredentials>,
    ) -> ApiResult<Value> {
        self.echo("add_external_services", json!(services))
    }

    async fn delete_external_services(&self, services: Vec<ExternalService>) -> ApiResult<Value> {
        self.echo("delete_external_services", json!(services))
    }

    async fn get_queried_addresses_per_module(&self) -> ApiResult<Value> {
        self.record("get_queried_addresses_per_module", Value::Null)?;
        self.require_user()?;
        Ok(self.queried_addresses())
    }

    async fn add_queried_address_per_module(
        &self,
        module: EthereumModule,
        address: String,
    ) -> ApiResult<Value> {
        self.record(
            "add_queried_address_per_module",
            json!({ "module": module, "address": address }),
        )?;
        self.require_user()?;
        {
            let mut state = self.lock();
            let addresses = state.queried_addresses.entry(module).or_default();
            if addresses.contains(&address) {
                return Err(ApiError::Conflict(format!(
                    "{address} is already in the queried addresses for {module}"
                )));
            }
            addresses.push(address);
        }
        Ok(self.queried_addresses())
    }

    async fn remove_queried_address_per_module(
        &self,
        module: EthereumModule,
        address: String,
    ) -> ApiResult<Value> {
        self.record(
            "remove_queried_address_per_module",
            json!({ "module": module, "address": address }),
        )?;
        self.require_user()?;
        {
            let mut state = self.lock();
            let known = state.queried_addresses.get_mut(&module);
            let Some(addresses) = known.filter(|addresses| addresses.contains(&address)) else {
                return Err(ApiError::Conflict(format!(
                    "{address} is not in the queried addresses for {module}"
                )));
            };
            addresses.retain(|known| *known != address);
            if addresses.is_empty() {
                state.queried_addresses.remove(&module);
            }
        }
        Ok(self.queried_addresses())
    }

    async fn get_ethereum_transactions(&self, query: EthereumTransactionQuery) -> ApiResult<Value> {
        self.echo("get_ethereum_transactions", json!(query))
    }

    async fn purge_ethereum_transaction_data(&self) -> ApiResult<Value> {
        self.record("purge_ethereum_transaction_data", Value::Null)?;
        self.require_user()?;
        Ok(Value::Bool(true))
    }

    async fn query_all_balances(&self, query: AllBalancesQuery) -> ApiResult<Value> {
        self.echo("query_all_balances", json!(query))
    }

    async fn query_exchange_balances(&self, query: ExchangeBalanceQuery) -> ApiResult<Value> {
        self.echo("query_exchange_balances", json!(query))
    }

    async fn query_blockchain_balances(&self, query: BlockchainBalanceQuery) -> ApiResult<Value> {
        self.echo("query_blockchain_balances", json!(query))
    }

    async fn get_manually_tracked_balances(&self, async_query: bool) -> ApiResult<Value> {
        self.echo(
            "get_manually_tracked_balances",
            json!({ "async_query": async_query }),
        )
    }

    async fn add_manually_tracked_balances(
        &self,
        async_query: bool,
        balances: Vec<ManuallyTrackedBalance>,
    ) -> ApiResult<Value> {
        self.echo(
            "add_manually_tracked_balances",
            json!({ "async_query": async_query, "balances": balances }),
        )
    }

    async fn edit_manually_tracked_balances(
        &self,
        async_query: bool,
        balances: Vec<ManuallyTrackedBalance>,
    ) -> ApiResult<Value> {
        self.echo(
            "edit_manually_tracked_balances",
            json!({ "async_query": async_query, "balances": balances }),
        )
    }

    async fn remove_manually_tracked_balances(
        &self,
        async_query: bool,
        labels: Vec<String>,
    ) -> ApiResult<Value> {
        self.echo(
            "remove_manually_tracked_balances",
            json!({ "async_query": async_query, "labels": labels }),
        )
    }

    async fn get_tags(&self) -> ApiResult<Value> {
        self.echo("get_tags", json!({}))
    }

    async fn add_tag(&self, tag: Tag) -> ApiResult<Value> {
        self.echo("add_tag", json!(tag))
    }

    async fn edit_tag(&self, edit: TagEdit) -> ApiResult<Value> {
        self.echo("edit_tag", json!(edit))
    }

    async fn delete_tag(&self, name: String) -> ApiResult<Value> {
        self.echo("delete_tag", json!({ "name": name }))
    }

    async fn get_trades(&self, query: TimerangeLocationCacheQuery) -> ApiResult<Value> {
        self.echo("get_trades", json!(query))
    }

    async fn add_trade(&self, trade: Trade) -> ApiResult<Value> {
        self.echo("add_trade", json!(trade))
    }

    async fn edit_trade(&self, trade_id: String, trade: Trade) -> ApiResult<Value> {
        self.echo("edit_trade", json!({ "trade_id": trade_id, "trade": trade }))
    }

    async fn delete_trade(&self, trade_id: String) -> ApiResult<Value> {
        self.echo("delete_trade", json!({ "trade_id": trade_id }))
            .map(|_| Value::Bool(true))
    }

    async fn get_asset_movements(&self, query: TimerangeLocationCacheQuery) -> ApiResult<Value> {
        self.echo("get_asset_movements", json!(query))
    }

    async fn get_ledger_actions(&self, query: TimerangeLocationQuery) -> ApiResult<Value> {
        self.echo("get_ledger_actions", json!(query))
    }

    async fn add_ledger_action(&self, action: LedgerAction) -> ApiResult<Value> {
        self.echo("add_ledger_action", json!(action))
            .map(|_| json!({ "identifier": 1 }))
    }

    async fn edit_ledger_action(&self, identifier: u64, action: LedgerAction) -> ApiResult<Value> {
        self.echo(
            "edit_ledger_action",
            json!({ "identifier": identifier, "action": action }),
        )
    }

    async fn delete_ledger_action(&self, identifier: u64) -> ApiResult<Value> {
        self.echo("delete_ledger_action", json!({ "identifier": identifier }))
            .map(|_| Value::Bool(true))
    }

    async fn get_ignored_action_ids(&self, action_type: Option<ActionType>) -> ApiResult<Value> {
        self.echo(
            "get_ignored_action_ids",
            json!({ "action_type": action_type }),
        )
    }

    async fn add_ignored_action_ids(
        &self,
        action_type: ActionType,
        action_ids: Vec<String>,
    ) -> ApiResult<Value> {
        self.echo(
            "add_ignored_action_ids",
            json!({ "action_type": action_type, "action_ids": action_ids }),
        )
    }

    async fn remove_ignored_action_ids(
        &self,
        action_type: ActionType,
        action_ids: Vec<String>,
    ) -> ApiResult<Value> {
        self.echo(
            "remove_ignored_action_ids",
            json!({ "action_type": action_type, "action_ids": action_ids }),
        )
    }

    async fn get_users(&self) -> ApiResult<Value> {
        self.record("get_users", Value::Null)?;
        let mut users = Map::new();
        if let Some(name) = self.user() {
            users.insert(name, json!("loggedin"));
        }
        Ok(Value::Object(users))
    }

    async fn create_new_user(&self, user: NewUser) -> ApiResult<Value> {
        self.record("create_new_user", json!({ "name": user.name }))?;
        self.lock().user = Some(user.name);
        Ok(json!({"exchanges": [], "settings": self.settings()}))
    }

    async fn user_login(
        &self,
        name: String,
        password: String,
        sync_approval: SyncApproval,
    ) -> ApiResult<Value> {
        self.record(
            "user_login",
            json!({ "name": name, "password": password, "sync_approval": sync_approval }),
        )?;
        if password != "123456" {
            return Err(ApiError::Unauthorized(
                "Wrong password or invalid/corrupt database for user".to_string(),
            ));
        }
        self.lock().user = Some(name);
        Ok(json!({"exchanges": [], "settings": self.settings()}))
    }

    async fn user_logout(&self, name: String) -> ApiResult<Value> {
        self.record("user_logout", json!({ "name": name }))?;
        let mut state = self.lock();
        if state.user.as_deref() != Some(name.as_str()) {
            return Err(ApiError::Conflict(format!(
                "Provided user {} is not logged in",
                name
            )));
        }
        state.user = None;
        Ok(Value::Bool(true))
    }

    async fn user_change_password(&self, change: UserPasswordChange) -> ApiResult<Value> {
        self.echo("user_change_password", json!({ "name": change.name }))
            .map(|_| Value::Bool(true))
    }

    async fn get_blockchain_accounts(&self, blockchain: SupportedBlockchain) -> ApiResult<Value> {
        self.echo("get_blockchain_accounts", json!({ "blockchain": blockchain }))
    }

    async fn add_blockchain_accounts(
        &self,
        blockchain: SupportedBlockchain,
        accounts: Vec<BlockchainAccountData>,
        async_query: bool,
    ) -> ApiResult<Value> {
        self.echo(
            "add_blockchain_accounts",
            json!({ "blockchain": blockchain, "accounts": accounts, "async_query": async_query }),
        )
    }

    async fn edit_blockchain_accounts(
        &self,
        blockchain: SupportedBlockchain,
        accounts: Vec<BlockchainAccountData>,
    ) -> ApiResult<Value> {
        self.echo(
            "edit_blockchain_accounts",
            json!({ "blockchain": blockchain, "accounts": accounts }),
        )
    }

    async fn remove_blockchain_accounts(
        &self,
        blockchain: SupportedBlockchain,
        accounts: Vec<String>,
        async_query: bool,
    ) -> ApiResult<Value> {
        self.echo(
            "remove_blockchain_accounts",
            json!({ "blockchain": blockchain, "accounts": accounts, "async_query": async_query }),
        )
    }

    async fn get_ignored_assets(&self) -> ApiResult<Value> {
        self.echo("get_ignored_assets", json!([]))
    }

    async fn add_ignored_assets(&self, assets: Vec<String>) -> ApiResult<Value> {
        self.echo("add_ignored_assets", json!(assets))
    }

    async fn remove_ignored_assets(&self, assets: Vec<String>) -> ApiResult<Value> {
        self.echo("remove_ignored_assets", json!(assets))
    }

    async fn get_asset_icon(
        &self,
        asset: String,
        size: AssetIconSize,
        match_header: Option<String>,
    ) -> ApiResult<AssetIcon> {
        self.record(
            "get_asset_icon",
            json!({ "asset": asset, "size": size, "match_header": match_header }),
        )?;
        if match_header.as_deref() == Some(ICON_ETAG) {
            return Ok(AssetIcon::NotModified);
        }
        Ok(AssetIcon::Image {
            data: Bytes::from_static(ICON_BYTES),
            content_type: "image/png".to_string(),
            etag: ICON_ETAG.to_string(),
        })
    }

    async fn upload_asset_icon(&self, asset: String, filepath: &Path) -> ApiResult<Value> {
        self.see_file(filepath);
        self.record(
            "upload_asset_icon",
            json!({ "asset": asset, "filepath": filepath }),
        )?;
        Ok(json!({ "identifier": asset }))
    }

    async fn get_current_assets_price(&self, query: CurrentAssetsPriceQuery) -> ApiResult<Value> {
        self.echo("get_current_assets_price", json!(query))
    }

    async fn get_historical_assets_price(&self, query: HistoricalAssetsPrice) -> ApiResult<Value> {
        self.echo("get_historical_assets_price", json!(query))
    }

    async fn query_value_distribution_data(
        &self,
        distribution_by: DistributionBy,
    ) -> ApiResult<Value> {
        self.echo(
            "query_value_distribution_data",
            json!({ "distribution_by": distribution_by }),
        )
    }

    async fn process_history(&self, query: HistoryProcessing) -> ApiResult<Value> {
        self.echo("process_history", json!(query))
    }

    async fn export_processed_history_csv(&self, directory_path: &Path) -> ApiResult<Value> {
        self.echo(
            "export_processed_history_csv",
            json!({ "directory_path": directory_path }),
        )
        .map(|_| Value::Bool(true))
    }

    async fn import_data(&self, source: DataImportSource, filepath: &Path) -> ApiResult<Value> {
        self.see_file(filepath);
        self.record(
            "import_data",
            json!({ "source": source, "filepath": filepath }),
        )?;
        self.require_user()?;
        Ok(Value::Bool(true))
    }

    async fn get_supported_oracles(&self) -> ApiResult<Value> {
        self.record("get_supported_oracles", Value::Null)?;
        Ok(json!({
            "history": [{"id": "cryptocompare", "name": "Cryptocompare"}, {"id": "coingecko", "name": "Coingecko"}],
            "current": [{"id": "cryptocompare", "name": "Cryptocompare"}, {"id": "coingecko", "name": "Coingecko"}]
        }))
    }

    async fn get_oracle_cache(
        &self,
        oracle: HistoricalPriceOracle,
        async_query: bool,
    ) -> ApiResult<Value> {
        self.echo(
            "get_oracle_cache",
            json!({ "oracle": oracle, "async_query": async_query }),
        )
    }

    async fn create_oracle_cache(&self, request: OracleCacheCreate) -> ApiResult<Value> {
        self.echo("create_oracle_cache", json!(request))
    }

    async fn delete_oracle_cache(&self, pair: OracleCachePair) -> ApiResult<Value> {
        self.echo("delete_oracle_cache", json!(pair))
    }

    async fn version_check(&self) -> ApiResult<Value> {
        self.record("version_check", Value::Null)?;
        Ok(json!({"our_version": "1.14.0", "latest_version": null, "download_url": null}))
    }
}
