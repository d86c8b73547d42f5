//! Blockchain accounts and Ethereum transactions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::args::{fields, json_schema};

/// Blockchains whose accounts can be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedBlockchain {
    /// Bitcoin
    #[serde(rename = "BTC")]
    Bitcoin,
    /// Ethereum
    #[serde(rename = "ETH")]
    Ethereum,
    /// Kusama
    #[serde(rename = "KSM")]
    Kusama,
}

impl SupportedBlockchain {
    /// Returns the ticker used in paths and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedBlockchain::Bitcoin => "BTC",
            SupportedBlockchain::Ethereum => "ETH",
            SupportedBlockchain::Kusama => "KSM",
        }
    }
}

impl fmt::Display for SupportedBlockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /blockchains/{blockchain}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainAccountsGet {
    pub blockchain: SupportedBlockchain,
}

json_schema!(BlockchainAccountsGet);

/// One account and its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainAccountData {
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// `PUT` and `PATCH /blockchains/{blockchain}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainAccountsEdit {
    pub blockchain: SupportedBlockchain,
    pub accounts: Vec<BlockchainAccountData>,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(BlockchainAccountsEdit);

/// `DELETE /blockchains/{blockchain}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainAccountsDelete {
    pub blockchain: SupportedBlockchain,
    pub accounts: Vec<String>,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(BlockchainAccountsDelete);

/// `GET /blockchains/ETH/transactions/{address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthereumTransactionQuery {
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "fields::unsigned")]
    pub from_timestamp: u64,
    #[serde(default = "fields::now", deserialize_with = "fields::unsigned")]
    pub to_timestamp: u64,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub only_cache: bool,
}

json_schema!(EthereumTransactionQuery);
