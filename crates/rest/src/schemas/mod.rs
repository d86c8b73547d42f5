//! Request schemas for every resource.
//!
//! Each type here is the validated shape of one endpoint's arguments. Field
//! names match the wire names; doc comments name the endpoint that uses the
//! type.

#![allow(missing_docs)]

pub mod assets;
pub mod balances;
pub mod blockchains;
pub mod exchanges;
pub mod history;
pub mod oracles;
pub mod services;
pub mod settings;
pub mod tags;
pub mod trades;
pub mod users;

pub use assets::{
    AssetIconPath, AssetIconQuery, AssetIconSize, AssetIconUpload, AssetTimestamp,
    CurrentAssetsPriceQuery, HistoricalAssetsPrice, IgnoredAssets,
};
pub use balances::{
    AllBalancesQuery, BlockchainBalanceQuery, ManuallyTrackedBalance, ManuallyTrackedBalances,
    ManuallyTrackedBalancesDelete,
};
pub use blockchains::{
    BlockchainAccountData, BlockchainAccountsDelete, BlockchainAccountsEdit,
    BlockchainAccountsGet, EthereumTransactionQuery, SupportedBlockchain,
};
pub use exchanges::{
    ExchangeBalanceQuery, ExchangeName, ExchangeRatesQuery, ExchangeSetup, ExchangesDataQuery,
};
pub use history::{
    DataImportPath, DataImportSource, DataImportUpload, DistributionBy, HistoryExporting,
    HistoryProcessing, ValueDistributionQuery,
};
pub use oracles::{HistoricalPriceOracle, OracleCacheCreate, OracleCachePair, OracleCacheQuery};
pub use services::{
    EthereumModule, ExternalService, ExternalServiceCredentials, ExternalServicesAdd,
    ExternalServicesDelete, QueriedAddress,
};
pub use settings::{
    AsyncQuery, AsyncTasksQuery, EditSettings, KrakenAccountType, ModifiableSettings,
};
pub use tags::{Tag, TagDelete, TagEdit};
pub use trades::{
    ActionType, IgnoredActionsModify, IgnoredActionsQuery, LedgerAction, LedgerActionEdit,
    LedgerActionIdentifier, LedgerActionType, TimerangeLocationCacheQuery,
    TimerangeLocationQuery, Trade, TradeDelete, TradePatch, TradeType,
};
pub use users::{NewUser, SyncApproval, UserAction, UserActionKind, UserPasswordChange};
