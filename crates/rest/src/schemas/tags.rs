//! Tags attached to accounts and balances.

use serde::{Deserialize, Serialize};

use crate::args::json_schema;

/// `PUT /tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub background_color: String,
    pub foreground_color: String,
}

json_schema!(Tag);

/// `PATCH /tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEdit {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub foreground_color: Option<String>,
}

json_schema!(TagEdit);

/// `DELETE /tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDelete {
    pub name: String,
}

json_schema!(TagDelete);
