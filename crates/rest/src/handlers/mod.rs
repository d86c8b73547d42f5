//! HTTP request handlers for every resource.
//!
//! Each handler validates its arguments through an [`Args`](crate::extractors::Args)
//! extractor, makes one call on the [`RestApi`](crate::api::RestApi) and wraps
//! the result in the response envelope:
//!
//! - [`settings`] - User settings
//! - [`tasks`] - Outcome of async tasks
//! - [`exchanges`] - Exchange credentials, rates, data and balances
//! - [`balances`] - Aggregated, blockchain and manually tracked balances
//! - [`blockchains`] - Tracked accounts and Ethereum transactions
//! - [`tags`] - Tags
//! - [`trades`] - Trades, asset movements, ledger actions and ignored actions
//! - [`services`] - External service keys and queried addresses
//! - [`users`] - Users, login and logout
//! - [`assets`] - Ignored assets, icons, current and historical prices
//! - [`history`] - History processing, export, statistics and imports
//! - [`oracles`] - Price oracle caches
//! - [`system`] - Version check and ping

pub mod assets;
pub mod balances;
pub mod blockchains;
pub mod exchanges;
pub mod history;
pub mod oracles;
pub mod services;
pub mod settings;
pub mod system;
pub mod tags;
pub mod tasks;
pub mod trades;
pub mod users;

use std::path::Path;

use crate::error::{RestError, RestResult};

/// Rejects a path that is not an existing regular file.
pub(crate) async fn ensure_file(path: &Path) -> RestResult<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(RestError::BadRequest {
            message: format!("Given path {} is not a file", path.display()),
        }),
        Err(_) => Err(RestError::BadRequest {
            message: format!("Given path {} does not exist", path.display()),
        }),
    }
}

/// Rejects a path that is not an existing directory.
pub(crate) async fn ensure_directory(path: &Path) -> RestResult<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(RestError::BadRequest {
            message: format!("Given path {} is not a directory", path.display()),
        }),
        Err(_) => Err(RestError::BadRequest {
            message: format!("Given path {} does not exist", path.display()),
        }),
    }
}
