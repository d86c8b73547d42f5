//! Asset resources: ignored assets, icons, current and historical prices.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::ensure_file;
use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::{Args, ConditionalHeaders};
use crate::responses::envelope;
use crate::schemas::{
    AssetIconPath, AssetIconQuery, AssetIconUpload, CurrentAssetsPriceQuery,
    HistoricalAssetsPrice, IgnoredAssets,
};
use crate::state::AppState;
use crate::upload::TempUpload;

/// Returns the ignored assets.
///
/// # HTTP Request
///
/// `GET [base]/assets/ignored`
pub async fn get_ignored_assets_handler<A>(
    State(state): State<AppState<A>>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!("Processing ignored assets query");
    let result = state.api().get_ignored_assets().await?;
    Ok(envelope::ok(result))
}

/// Adds ignored assets.
///
/// # HTTP Request
///
/// `PUT [base]/assets/ignored` with `{"assets": [...]}`
pub async fn add_ignored_assets_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<IgnoredAssets, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let IgnoredAssets { assets } = args.into_inner();
    debug!(assets = ?assets, "Processing ignored assets addition");
    let result = state.api().add_ignored_assets(assets).await?;
    Ok(envelope::ok(result))
}

/// Removes ignored assets.
///
/// # HTTP Request
///
/// `DELETE [base]/assets/ignored` with `{"assets": [...]}`
pub async fn remove_ignored_assets_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<IgnoredAssets, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let IgnoredAssets { assets } = args.into_inner();
    debug!(assets = ?assets, "Processing ignored assets removal");
    let result = state.api().remove_ignored_assets(assets).await?;
    Ok(envelope::ok(result))
}

/// Returns an asset icon.
///
/// # HTTP Request
///
/// `GET [base]/assets/{asset}/icons/{size}`
///
/// # Headers
///
/// - `If-Match` - Return 304 Not Modified if the ETag matches
/// - `If-None-Match` - Used when `If-Match` is absent
///
/// # Response
///
/// - `200 OK` - The image, with `Content-Type` and `ETag`
/// - `304 Not Modified` - The client's copy is current
/// - `404 Not Found` - No icon for the asset
pub async fn get_asset_icon_handler<A>(
    State(state): State<AppState<A>>,
    conditional: ConditionalHeaders,
    args: Args<AssetIconQuery, location::ViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let AssetIconQuery { asset, size } = args.into_inner();
    let match_header = conditional.match_tag();
    debug!(
        asset = %asset,
        size = %size,
        etag = ?match_header,
        "Processing asset icon query"
    );
    let icon = state.api().get_asset_icon(asset, size, match_header).await?;
    Ok(icon.into_response())
}

/// Sets a custom icon from a file already on the server.
///
/// # HTTP Request
///
/// `PUT [base]/assets/{asset}/icons/{size}` with `{"file": "/path/icon.png"}`
pub async fn set_asset_icon_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<AssetIconPath, location::JsonAndViewArgs>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let AssetIconPath { asset, file } = args.into_inner();
    debug!(asset = %asset, path = %file.display(), "Processing asset icon path upload");
    ensure_file(&file).await?;
    let result = state.api().upload_asset_icon(asset, &file).await?;
    Ok(envelope::ok(result))
}

/// Sets a custom icon from an uploaded file.
///
/// # HTTP Request
///
/// `POST [base]/assets/{asset}/icons/{size}` as `multipart/form-data` with a
/// `file` part
///
/// The file is staged in a temporary directory that is removed before the
/// response is sent.
pub async fn upload_asset_icon_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<AssetIconUpload, location::ViewArgsAndFile>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let AssetIconUpload { asset, file } = args.into_inner();
    debug!(
        asset = %asset,
        filename = ?file.filename(),
        size = file.len(),
        "Processing asset icon upload"
    );

    let staged = TempUpload::save(&file, &format!("{}.png", asset), state.upload_dir()).await?;
    let result = state.api().upload_asset_icon(asset, staged.path()).await;
    drop(staged);

    Ok(envelope::ok(result?))
}

/// Returns current prices of assets.
///
/// # HTTP Request
///
/// `GET [base]/assets/prices/current?assets=BTC,ETH&target_asset=EUR`
pub async fn current_prices_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<CurrentAssetsPriceQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        assets = ?query.assets,
        target_asset = %query.target_asset,
        "Processing current prices query"
    );
    let result = state.api().get_current_assets_price(query).await?;
    Ok(envelope::ok(result))
}

/// Returns prices of assets at given timestamps.
///
/// # HTTP Request
///
/// `POST [base]/assets/prices/historical` with
/// `{"assets_timestamp": [["BTC", 1579543935]], "target_asset": "EUR"}`
pub async fn historical_prices_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<HistoricalAssetsPrice, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        count = query.assets_timestamp.len(),
        target_asset = %query.target_asset,
        async_query = query.async_query,
        "Processing historical prices query"
    );
    let result = state.api().get_historical_assets_price(query).await?;
    Ok(envelope::ok(result))
}
