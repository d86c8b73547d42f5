//! Trades, asset movements, ledger actions and ignored actions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::args::{fields, json_schema};

/// `GET /trades` and `GET /asset_movements`
///
/// `location` narrows the query to one exchange or location. With
/// `only_cache` the engine answers from the database without querying the
/// exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerangeLocationCacheQuery {
    #[serde(default, deserialize_with = "fields::unsigned")]
    pub from_timestamp: u64,
    #[serde(default = "fields::now", deserialize_with = "fields::unsigned")]
    pub to_timestamp: u64,
    #[serde(default, deserialize_with = "fields::optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub only_cache: bool,
}

json_schema!(TimerangeLocationCacheQuery);

/// `GET /ledgeractions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerangeLocationQuery {
    #[serde(default, deserialize_with = "fields::unsigned")]
    pub from_timestamp: u64,
    #[serde(default = "fields::now", deserialize_with = "fields::unsigned")]
    pub to_timestamp: u64,
    #[serde(default, deserialize_with = "fields::optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(TimerangeLocationQuery);

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    #[serde(rename = "buy")]
    Buy,
    #[serde(rename = "sell")]
    Sell,
    #[serde(rename = "settlement buy")]
    SettlementBuy,
    #[serde(rename = "settlement sell")]
    SettlementSell,
}

/// `PUT /trades`
///
/// `pair` is `BASE_QUOTE`; `amount` is in the base asset and `rate` in the
/// quote asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(deserialize_with = "fields::unsigned")]
    pub timestamp: u64,
    pub location: String,
    pub pair: String,
    pub trade_type: TradeType,
    pub amount: Decimal,
    pub rate: Decimal,
    pub fee: Decimal,
    pub fee_currency: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
}

json_schema!(Trade);

/// `PATCH /trades`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePatch {
    pub trade_id: String,
    #[serde(flatten)]
    pub trade: Trade,
}

json_schema!(TradePatch);

/// `DELETE /trades`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDelete {
    pub trade_id: String,
}

json_schema!(TradeDelete);

/// Kind of a ledger action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerActionType {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "loss")]
    Loss,
    #[serde(rename = "dividends income")]
    DividendsIncome,
    #[serde(rename = "donation received")]
    DonationReceived,
    #[serde(rename = "airdrop")]
    Airdrop,
    #[serde(rename = "gift")]
    Gift,
    #[serde(rename = "grant")]
    Grant,
}

/// `PUT /ledgeractions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAction {
    #[serde(deserialize_with = "fields::unsigned")]
    pub timestamp: u64,
    pub action_type: LedgerActionType,
    pub location: String,
    pub amount: Decimal,
    pub asset: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
}

json_schema!(LedgerAction);

/// `PATCH /ledgeractions`: the full action plus the identifier it replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerActionEdit {
    #[serde(deserialize_with = "fields::unsigned")]
    pub identifier: u64,
    #[serde(flatten)]
    pub action: LedgerAction,
}

json_schema!(LedgerActionEdit);

/// `DELETE /ledgeractions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerActionIdentifier {
    #[serde(deserialize_with = "fields::unsigned")]
    pub identifier: u64,
}

json_schema!(LedgerActionIdentifier);

/// Kinds of history entries that can be ignored in accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "trade")]
    Trade,
    #[serde(rename = "asset movement")]
    AssetMovement,
    #[serde(rename = "ethereum transaction")]
    EthereumTransaction,
    #[serde(rename = "ledger action")]
    LedgerAction,
}

/// `GET /actions/ignored`; without a type every ignored id is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredActionsQuery {
    #[serde(default)]
    pub action_type: Option<ActionType>,
}

json_schema!(IgnoredActionsQuery);

/// `PUT` and `DELETE /actions/ignored`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredActionsModify {
    pub action_type: ActionType,
    pub action_ids: Vec<String>,
}

json_schema!(IgnoredActionsModify);
