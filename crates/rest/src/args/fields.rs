//! Lenient field deserializers.
//!
//! Query strings, path segments and form fields only carry text, while JSON
//! bodies carry typed values. These helpers accept both, so one schema can be
//! fed from any source.

use chrono::Utc;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const TRUTHY: &[&str] = &["true", "t", "yes", "y", "on", "1"];
const FALSY: &[&str] = &["false", "f", "no", "n", "off", "0"];

fn parse_boolean<E: Error>(value: Value) -> Result<bool, E> {
    match value {
        Value::Bool(flag) => Ok(flag),
        Value::Number(number) if number.as_i64() == Some(1) => Ok(true),
        Value::Number(number) if number.as_i64() == Some(0) => Ok(false),
        Value::String(text) => {
            let lowered = text.to_ascii_lowercase();
            if TRUTHY.contains(&lowered.as_str()) {
                Ok(true)
            } else if FALSY.contains(&lowered.as_str()) {
                Ok(false)
            } else {
                Err(E::custom("Not a valid boolean."))
            }
        }
        _ => Err(E::custom("Not a valid boolean.")),
    }
}

fn parse_unsigned<E: Error>(value: Value) -> Result<u64, E> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| E::custom("Not a valid integer.")),
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| E::custom("Not a valid integer.")),
        _ => Err(E::custom("Not a valid integer.")),
    }
}

/// Accepts `true`/`false` or their common text and 0/1 forms.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    parse_boolean(Value::deserialize(deserializer)?)
}

/// Like [`boolean`], mapping `null` to `None`.
pub fn optional_boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => parse_boolean(value).map(Some),
    }
}

/// Accepts a non-negative integer or its decimal text.
pub fn unsigned<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_unsigned(Value::deserialize(deserializer)?)
}

/// Like [`unsigned`], mapping `null` to `None`.
pub fn optional_unsigned<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => parse_unsigned(value).map(Some),
    }
}

/// Accepts an integer or its decimal text, mapping `null` to `None`.
pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("Not a valid integer.")),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom("Not a valid integer.")),
        _ => Err(D::Error::custom("Not a valid integer.")),
    }
}

/// Accepts only text, mapping `null` to `None`.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        _ => Err(D::Error::custom("Not a valid string.")),
    }
}

/// Accepts a list of strings, mapping `null` to `None`.
pub fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                _ => Err(D::Error::custom("Not a valid string.")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(D::Error::custom("Not a valid list.")),
    }
}

/// Accepts a comma-delimited string, or a list of them.
///
/// `currencies=EUR,USD`, `currencies=EUR&currencies=USD` and a JSON
/// `["EUR", "USD"]` all produce the same list.
pub fn delimited_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    fn split(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
    }

    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(split(&text).collect()),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(text) => list.extend(split(&text)),
                    _ => return Err(D::Error::custom("Not a valid string.")),
                }
            }
            Ok(list)
        }
        _ => Err(D::Error::custom("Not a valid list.")),
    }
}

/// The current unix timestamp, used as the default end of time ranges.
pub fn now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "boolean")]
        flag: bool,
        #[serde(default, deserialize_with = "optional_unsigned")]
        id: Option<u64>,
        #[serde(default, deserialize_with = "delimited_list")]
        items: Vec<String>,
    }

    fn parse(value: serde_json::Value) -> Result<Flags, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_boolean_accepts_text_and_json() {
        assert!(parse(json!({"flag": true})).unwrap().flag);
        assert!(parse(json!({"flag": "True"})).unwrap().flag);
        assert!(!parse(json!({"flag": "off"})).unwrap().flag);
        assert!(!parse(json!({"flag": 0})).unwrap().flag);
    }

    #[test]
    fn test_boolean_rejects_garbage() {
        let err = parse(json!({"flag": "dasd"})).unwrap_err();
        assert!(err.to_string().contains("Not a valid boolean"));
        assert!(parse(json!({"flag": 5})).is_err());
    }

    #[test]
    fn test_unsigned_from_text() {
        assert_eq!(parse(json!({"flag": true, "id": "42"})).unwrap().id, Some(42));
        assert_eq!(parse(json!({"flag": true, "id": 7})).unwrap().id, Some(7));
        assert_eq!(parse(json!({"flag": true})).unwrap().id, None);
        let err = parse(json!({"flag": true, "id": "x"})).unwrap_err();
        assert!(err.to_string().contains("Not a valid integer"));
    }

    #[derive(Debug, Deserialize)]
    struct Optionals {
        #[serde(default, deserialize_with = "optional_integer")]
        period: Option<i64>,
        #[serde(default, deserialize_with = "optional_string")]
        endpoint: Option<String>,
        #[serde(default, deserialize_with = "optional_string_list")]
        modules: Option<Vec<String>>,
    }

    #[test]
    fn test_optional_helpers() {
        let parsed: Optionals =
            serde_json::from_value(json!({"period": "-1", "endpoint": "", "modules": ["aave"]}))
                .unwrap();
        assert_eq!(parsed.period, Some(-1));
        assert_eq!(parsed.endpoint.as_deref(), Some(""));
        assert_eq!(parsed.modules, Some(vec!["aave".to_string()]));

        let parsed: Optionals = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.period.is_none() && parsed.endpoint.is_none() && parsed.modules.is_none());
    }

    #[test]
    fn test_optional_helpers_report_types() {
        let err = serde_json::from_value::<Optionals>(json!({"endpoint": 5555})).unwrap_err();
        assert!(err.to_string().contains("Not a valid string"));
        let err = serde_json::from_value::<Optionals>(json!({"modules": 55})).unwrap_err();
        assert!(err.to_string().contains("Not a valid list"));
        let err = serde_json::from_value::<Optionals>(json!({"period": "dsad"})).unwrap_err();
        assert!(err.to_string().contains("Not a valid integer"));
    }

    #[test]
    fn test_delimited_list_forms() {
        let expected = vec!["EUR".to_string(), "USD".to_string()];
        assert_eq!(parse(json!({"flag": 1, "items": "EUR,USD"})).unwrap().items, expected);
        assert_eq!(
            parse(json!({"flag": 1, "items": ["EUR", "USD"]})).unwrap().items,
            expected
        );
        assert_eq!(
            parse(json!({"flag": 1, "items": ["EUR,USD"]})).unwrap().items,
            expected
        );
        assert!(parse(json!({"flag": 1, "items": [1]})).is_err());
    }

    #[test]
    fn test_now_is_unix_seconds() {
        // 2020-09-13, well after any timestamp the engine stores
        assert!(now() > 1_600_000_000);
        assert!(now() < 10_000_000_000);
    }
}
