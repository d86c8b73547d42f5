//! Balance queries and manually tracked balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blockchains::SupportedBlockchain;
use crate::args::{fields, json_schema};

/// `GET /balances`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllBalancesQuery {
    #[serde(default, deserialize_with = "fields::boolean")]
    pub save_data: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub ignore_cache: bool,
}

json_schema!(AllBalancesQuery);

/// `GET /balances/blockchains/{blockchain}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainBalanceQuery {
    #[serde(default)]
    pub blockchain: Option<SupportedBlockchain>,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub ignore_cache: bool,
}

json_schema!(BlockchainBalanceQuery);

/// A balance the user tracks by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManuallyTrackedBalance {
    pub asset: String,
    pub label: String,
    pub amount: Decimal,
    pub location: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// `PUT` and `PATCH /balances/manual`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManuallyTrackedBalances {
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    pub balances: Vec<ManuallyTrackedBalance>,
}

json_schema!(ManuallyTrackedBalances);

/// `DELETE /balances/manual`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManuallyTrackedBalancesDelete {
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
    pub labels: Vec<String>,
}

json_schema!(ManuallyTrackedBalancesDelete);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{MergedArguments, Schema};
    use serde_json::json;

    #[test]
    fn test_query_flags_default_to_false() {
        let parsed = AllBalancesQuery::from_arguments(MergedArguments::new()).unwrap();
        assert_eq!(parsed, AllBalancesQuery::default());
    }

    #[test]
    fn test_blockchain_from_path_text() {
        let mut args = MergedArguments::new();
        args.insert("blockchain", "BTC");
        args.insert("ignore_cache", "true");
        let parsed = BlockchainBalanceQuery::from_arguments(args).unwrap();
        assert_eq!(parsed.blockchain, Some(SupportedBlockchain::Bitcoin));
        assert!(parsed.ignore_cache);
    }

    #[test]
    fn test_manual_balance_amount_is_decimal() {
        let mut args = MergedArguments::new();
        args.insert(
            "balances",
            json!([{"asset": "BTC", "label": "cold", "amount": "1.5", "location": "blockchain"}]),
        );
        let parsed = ManuallyTrackedBalances::from_arguments(args).unwrap();
        assert_eq!(parsed.balances[0].amount, Decimal::new(15, 1));
        assert!(!parsed.async_query);
    }
}
