//! Historical price oracle caches.

use serde::{Deserialize, Serialize};

use crate::args::{fields, json_schema};

/// Oracles that keep a historical price cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoricalPriceOracle {
    /// CoinGecko
    Coingecko,
    /// CryptoCompare
    Cryptocompare,
}

/// `GET /oracles/{oracle}/cache`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleCacheQuery {
    pub oracle: HistoricalPriceOracle,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(OracleCacheQuery);

/// `POST /oracles/{oracle}/cache`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleCacheCreate {
    pub oracle: HistoricalPriceOracle,
    pub from_asset: String,
    pub to_asset: String,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub purge_old: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(OracleCacheCreate);

/// `DELETE /oracles/{oracle}/cache`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleCachePair {
    pub oracle: HistoricalPriceOracle,
    pub from_asset: String,
    pub to_asset: String,
}

json_schema!(OracleCachePair);
