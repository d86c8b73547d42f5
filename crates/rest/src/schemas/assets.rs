//! Assets: ignored assets, icons, current and historical prices.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::args::{MergedArguments, Schema, SchemaError, UploadedFile, fields, json_schema};

/// `PUT` and `DELETE /assets/ignored`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoredAssets {
    pub assets: Vec<String>,
}

json_schema!(IgnoredAssets);

/// Rendered size of an asset icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetIconSize {
    /// Thumbnail.
    Thumb,
    /// Small.
    Small,
    /// Large.
    Large,
}

impl fmt::Display for AssetIconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetIconSize::Thumb => "thumb",
            AssetIconSize::Small => "small",
            AssetIconSize::Large => "large",
        })
    }
}

/// `GET /assets/{asset}/icons/{size}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetIconQuery {
    pub asset: String,
    pub size: AssetIconSize,
}

json_schema!(AssetIconQuery);

/// `PUT /assets/{asset}/icons/{size}` with a path on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetIconPath {
    pub asset: String,
    pub file: PathBuf,
}

json_schema!(AssetIconPath);

/// `POST /assets/{asset}/icons/{size}` with an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetIconUpload {
    pub asset: String,
    pub file: UploadedFile,
}

#[derive(Deserialize)]
struct AssetIconUploadFields {
    asset: String,
}

impl Schema for AssetIconUpload {
    fn from_arguments(mut arguments: MergedArguments) -> Result<Self, SchemaError> {
        let file = arguments.take_file("file")?;
        let AssetIconUploadFields { asset } = arguments.deserialize()?;
        Ok(Self { asset, file })
    }
}

/// `GET /assets/prices/current`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAssetsPriceQuery {
    #[serde(deserialize_with = "fields::delimited_list")]
    pub assets: Vec<String>,
    pub target_asset: String,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub ignore_cache: bool,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(CurrentAssetsPriceQuery, lists = ["assets"]);

/// An `[asset, timestamp]` pair of a historical price query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTimestamp(
    pub String,
    #[serde(deserialize_with = "fields::unsigned")] pub u64,
);

/// `POST /assets/prices/historical`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalAssetsPrice {
    pub assets_timestamp: Vec<AssetTimestamp>,
    pub target_asset: String,
    #[serde(default, deserialize_with = "fields::boolean")]
    pub async_query: bool,
}

json_schema!(HistoricalAssetsPrice);
