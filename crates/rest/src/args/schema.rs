//! Validating merged arguments into typed request structs.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use super::sources::SchemaDescriptor;
use super::value::{ArgValue, MergedArguments, UploadedFile};

/// Validation failures for merged arguments.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field has the wrong type or value, or an unknown field was sent.
    #[error("{0}")]
    Invalid(String),

    /// A required field is absent.
    #[error("Missing data for required field: {0}")]
    MissingField(&'static str),

    /// A field that must carry an upload carried a plain value.
    #[error("Field '{0}' must be an uploaded file")]
    ExpectedFile(&'static str),

    /// A plain field carried an upload.
    #[error("Field '{0}' does not accept an uploaded file")]
    UnexpectedFile(String),
}

/// A typed set of request arguments.
pub trait Schema: Sized {
    /// Fields that collect every occurrence of a repeated query or form key.
    const LIST_FIELDS: &'static [&'static str] = &[];

    /// Returns the descriptor the primitive loaders read.
    fn descriptor() -> SchemaDescriptor {
        SchemaDescriptor::new(Self::LIST_FIELDS)
    }

    /// Validates merged arguments. Absent arguments arrive as an empty map.
    fn from_arguments(arguments: MergedArguments) -> Result<Self, SchemaError>;
}

impl MergedArguments {
    /// Deserializes every field into `T`. Fails on uploaded files.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, SchemaError> {
        let mut object = Map::new();
        for (field, value) in self {
            match value {
                ArgValue::Json(value) => {
                    object.insert(field, value);
                }
                ArgValue::File(_) => return Err(SchemaError::UnexpectedFile(field)),
            }
        }
        serde_json::from_value(Value::Object(object))
            .map_err(|err| SchemaError::Invalid(err.to_string()))
    }

    /// Removes an uploaded file from the mapping.
    pub fn take_file(&mut self, field: &'static str) -> Result<UploadedFile, SchemaError> {
        match self.remove(field) {
            Some(ArgValue::File(file)) => Ok(file),
            Some(ArgValue::Json(_)) => Err(SchemaError::ExpectedFile(field)),
            None => Err(SchemaError::MissingField(field)),
        }
    }
}

/// Implements [`Schema`] for a `Deserialize` struct.
///
/// ```ignore
/// json_schema!(ExchangeRatesQuery, lists = ["currencies"]);
/// ```
macro_rules! json_schema {
    ($ty:ty) => {
        $crate::args::json_schema!($ty, lists = []);
    };
    ($ty:ty, lists = [$($field:literal),* $(,)?]) => {
        impl $crate::args::Schema for $ty {
            const LIST_FIELDS: &'static [&'static str] = &[$($field),*];

            fn from_arguments(
                arguments: $crate::args::MergedArguments,
            ) -> Result<Self, $crate::args::SchemaError> {
                arguments.deserialize()
            }
        }
    };
}

pub(crate) use json_schema;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default)]
        count: u32,
    }

    json_schema!(Sample);

    #[derive(Debug, Deserialize)]
    struct WithLists {
        #[allow(dead_code)]
        items: Vec<String>,
    }

    json_schema!(WithLists, lists = ["items"]);

    #[test]
    fn test_deserialize_fills_defaults() {
        let mut args = MergedArguments::new();
        args.insert("name", json!("kraken"));
        let sample = Sample::from_arguments(args).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "kraken".into(),
                count: 0
            }
        );
    }

    #[test]
    fn test_empty_mapping_reports_missing_field() {
        let err = Sample::from_arguments(MergedArguments::new()).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_file_in_plain_schema_is_rejected() {
        let mut args = MergedArguments::new();
        args.insert("name", UploadedFile::new(None, None, Bytes::new()));
        let err = Sample::from_arguments(args).unwrap_err();
        assert!(matches!(err, SchemaError::UnexpectedFile(field) if field == "name"));
    }

    #[test]
    fn test_descriptor_lists() {
        assert!(WithLists::descriptor().is_list("items"));
        assert!(!Sample::descriptor().is_list("name"));
    }

    #[test]
    fn test_take_file() {
        let mut args = MergedArguments::new();
        args.insert("file", UploadedFile::new(None, None, Bytes::from_static(b"x")));
        args.insert("plain", json!("x"));

        assert_eq!(args.take_file("file").unwrap().len(), 1);
        assert!(matches!(
            args.take_file("plain"),
            Err(SchemaError::ExpectedFile("plain"))
        ));
        assert!(matches!(
            args.take_file("file"),
            Err(SchemaError::MissingField("file"))
        ));
    }
}
