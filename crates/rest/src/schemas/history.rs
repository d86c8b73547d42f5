//! History processing, statistics and data import.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::args::{MergedArguments, Schema, SchemaError, UploadedFile, fields, json_schema};

/// `GET /history`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryProcessing {
    #[serde(default, deserialize_with = "fields::unsigned")]
    pub from_timestamp: u64,
    #[serde(default = "fields::now", deserialize_with = "fields::unsigned")]
    pub to_timestamp: u64,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(HistoryProcessing);

/// `GET /history/export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryExporting {
    pub directory_path: PathBuf,
}

json_schema!(HistoryExporting);

/// How the value distribution is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionBy {
    /// By location.
    Location,
    /// By asset.
    Asset,
}

/// `GET /statistics/value_distribution`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDistributionQuery {
    pub distribution_by: DistributionBy,
}

json_schema!(ValueDistributionQuery);

/// Supported import file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataImportSource {
    /// Cointracking.info CSV export.
    #[serde(rename = "cointracking.info")]
    Cointracking,
    /// Crypto.com app CSV export.
    #[serde(rename = "crypto.com")]
    CryptoCom,
}

impl DataImportSource {
    /// Returns the source name used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataImportSource::Cointracking => "cointracking.info",
            DataImportSource::CryptoCom => "crypto.com",
        }
    }
}

impl fmt::Display for DataImportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `PUT /import` with a path on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataImportPath {
    pub source: DataImportSource,
    pub file: PathBuf,
}

json_schema!(DataImportPath);

/// `POST /import` with an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataImportUpload {
    pub source: DataImportSource,
    pub file: UploadedFile,
}

#[derive(Deserialize)]
struct DataImportUploadFields {
    source: DataImportSource,
}

impl Schema for DataImportUpload {
    fn from_arguments(mut arguments: MergedArguments) -> Result<Self, SchemaError> {
        let file = arguments.take_file("file")?;
        let DataImportUploadFields { source } = arguments.deserialize()?;
        Ok(Self { source, file })
    }
}
