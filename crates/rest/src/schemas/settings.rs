//! Settings and shared argument shapes.

use serde::{Deserialize, Serialize};

use crate::args::{fields, json_schema};

/// Account tier used for Kraken rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KrakenAccountType {
    /// Starter tier.
    Starter,
    /// Intermediate tier.
    Intermediate,
    /// Pro tier.
    Pro,
}

/// User settings that can be changed through the API.
///
/// Every field is optional; only the fields present are changed. Unknown
/// setting names are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModifiableSettings {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub premium_should_sync: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub include_crypto2crypto: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub anonymized_logs: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_unsigned"
    )]
    pub ui_floating_precision: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_integer"
    )]
    pub taxfree_after_period: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_unsigned"
    )]
    pub balance_save_frequency: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub include_gas_costs: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string"
    )]
    pub eth_rpc_endpoint: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string"
    )]
    pub ksm_rpc_endpoint: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string"
    )]
    pub main_currency: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string"
    )]
    pub date_display_format: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub submit_usage_analytics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kraken_account_type: Option<KrakenAccountType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string_list"
    )]
    pub active_modules: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string"
    )]
    pub frontend_settings: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub account_for_assets_movements: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_unsigned"
    )]
    pub btc_derivation_gap_limit: Option<u64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub calculate_past_cost_basis: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_boolean"
    )]
    pub display_date_in_localtime: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string_list"
    )]
    pub current_price_oracles: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string_list"
    )]
    pub historical_price_oracles: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "fields::optional_string_list"
    )]
    pub taxable_ledger_actions: Option<Vec<String>>,
}

/// `PUT /settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSettings {
    pub settings: ModifiableSettings,
}

json_schema!(EditSettings);

/// Arguments made only of the `async_query` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncQuery {
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(AsyncQuery);

/// `GET /tasks/{task_id}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncTasksQuery {
    #[serde(default, deserialize_with = "fields::optional_unsigned")]
    pub task_id: Option<u64>,
}

json_schema!(AsyncTasksQuery);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{MergedArguments, Schema};
    use serde_json::json;

    fn edit(settings: serde_json::Value) -> Result<EditSettings, crate::args::SchemaError> {
        let mut args = MergedArguments::new();
        args.insert("settings", settings);
        EditSettings::from_arguments(args)
    }

    #[test]
    fn test_partial_settings() {
        let parsed = edit(json!({"main_currency": "JPY", "ui_floating_precision": 3})).unwrap();
        assert_eq!(parsed.settings.main_currency.as_deref(), Some("JPY"));
        assert_eq!(parsed.settings.ui_floating_precision, Some(3));
        assert_eq!(parsed.settings.anonymized_logs, None);

        let echoed = serde_json::to_value(&parsed.settings).unwrap();
        assert_eq!(echoed, json!({"main_currency": "JPY", "ui_floating_precision": 3}));
    }

    #[test]
    fn test_unknown_setting_is_named() {
        let err = edit(json!({"invalid_setting": 5555})).unwrap_err();
        assert!(err.to_string().contains("invalid_setting"));
    }

    #[test]
    fn test_setting_type_errors() {
        let err = edit(json!({"include_crypto2crypto": "ffdsdasd"})).unwrap_err();
        assert!(err.to_string().contains("Not a valid boolean"));
        let err = edit(json!({"eth_rpc_endpoint": 5555})).unwrap_err();
        assert!(err.to_string().contains("Not a valid string"));
        let err = edit(json!({"balance_save_frequency": "dasdsd"})).unwrap_err();
        assert!(err.to_string().contains("Not a valid integer"));
        assert!(edit(json!({"kraken_account_type": "super hyper pro"})).is_err());
    }

    #[test]
    fn test_task_id_from_path() {
        let mut args = MergedArguments::new();
        args.insert("task_id", "12");
        assert_eq!(AsyncTasksQuery::from_arguments(args).unwrap().task_id, Some(12));
        assert_eq!(
            AsyncTasksQuery::from_arguments(MergedArguments::new()).unwrap().task_id,
            None
        );
    }
}
