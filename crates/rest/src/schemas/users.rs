//! User accounts and sessions.

use serde::{Deserialize, Serialize};

use super::settings::ModifiableSettings;
use crate::args::json_schema;

/// `PUT /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub initial_settings: Option<ModifiableSettings>,
}

json_schema!(NewUser);

/// What to do with the user named in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserActionKind {
    /// Unlock the user's database.
    Login,
    /// Close the user's session.
    Logout,
}

/// Whether remote data may replace local data on login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncApproval {
    /// Accept remote data.
    Yes,
    /// Keep local data.
    No,
    /// Ask when a conflict is found.
    #[default]
    Unknown,
}

/// `PATCH /users/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAction {
    pub name: String,
    pub action: UserActionKind,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub sync_approval: SyncApproval,
}

json_schema!(UserAction);

/// `PATCH /users/{name}/password`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPasswordChange {
    pub name: String,
    pub current_password: String,
    pub new_password: String,
}

json_schema!(UserPasswordChange);
