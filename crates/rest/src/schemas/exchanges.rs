//! Exchange connections and exchange rates.

use serde::{Deserialize, Serialize};

use crate::args::{fields, json_schema};

/// `GET /exchange_rates`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRatesQuery {
    #[serde(deserialize_with = "fields::delimited_list")]
    pub currencies: Vec<String>,
}

json_schema!(ExchangeRatesQuery, lists = ["currencies"]);

/// `PUT /exchanges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSetup {
    pub name: String,
    pub api_key: String,
    pub api_secret: String,
    #[serde(default)]
    pub passphrase: Option<String>,
}

json_schema!(ExchangeSetup);

/// `DELETE /exchanges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeName {
    pub name: String,
}

json_schema!(ExchangeName);

/// `DELETE /exchanges/data/{name}`; without a name every exchange is purged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangesDataQuery {
    #[serde(default)]
    pub name: Option<String>,
}

json_schema!(ExchangesDataQuery);

/// `GET /exchanges/balances/{name}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeBalanceQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub ignore_cache: bool,
}

json_schema!(ExchangeBalanceQuery);
