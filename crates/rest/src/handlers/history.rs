//! History processing, statistics and import resources.

use axum::{extract::State, response::Response};
use tracing::debug;

use super::{ensure_directory, ensure_file};
use crate::api::RestApi;
use crate::args::location;
use crate::error::RestResult;
use crate::extractors::Args;
use crate::responses::envelope;
use crate::schemas::{
    DataImportPath, DataImportUpload, HistoryExporting, HistoryProcessing, ValueDistributionQuery,
};
use crate::state::AppState;
use crate::upload::TempUpload;

/// Returns the net value distribution by location or by asset.
///
/// # HTTP Request
///
/// `GET [base]/statistics/value_distribution?distribution_by=asset`
pub async fn value_distribution_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<ValueDistributionQuery, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    debug!(distribution_by = ?args.distribution_by, "Processing value distribution query");
    let result = state
        .api()
        .query_value_distribution_data(args.distribution_by)
        .await?;
    Ok(envelope::ok(result))
}

/// Processes trade history and returns the PnL report.
///
/// # HTTP Request
///
/// `GET [base]/history?from_timestamp=..&to_timestamp=..`
pub async fn process_history_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<HistoryProcessing, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let query = args.into_inner();
    debug!(
        from_timestamp = query.from_timestamp,
        to_timestamp = query.to_timestamp,
        async_query = query.async_query,
        "Processing history"
    );
    let result = state.api().process_history(query).await?;
    Ok(envelope::ok(result))
}

/// Exports the last processed history as CSV files.
///
/// # HTTP Request
///
/// `GET [base]/history/export?directory_path=/path/to/dir`
pub async fn export_history_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<HistoryExporting, location::JsonAndQuery>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let HistoryExporting { directory_path } = args.into_inner();
    debug!(directory = %directory_path.display(), "Processing history export");
    ensure_directory(&directory_path).await?;
    let result = state
        .api()
        .export_processed_history_csv(&directory_path)
        .await?;
    Ok(envelope::ok(result))
}

/// Imports data from a file already on the server.
///
/// # HTTP Request
///
/// `PUT [base]/import` with `{"source": "cointracking.info", "file": "/path"}`
pub async fn import_path_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<DataImportPath, location::Json>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let DataImportPath { source, file } = args.into_inner();
    debug!(source = %source, path = %file.display(), "Processing data import");
    ensure_file(&file).await?;
    let result = state.api().import_data(source, &file).await?;
    Ok(envelope::ok(result))
}

/// Imports data from an uploaded file.
///
/// # HTTP Request
///
/// `POST [base]/import` as `multipart/form-data` with a `source` field and a
/// `file` part
///
/// The file is staged in a temporary directory that is removed before the
/// response is sent, whether the import succeeded or not.
pub async fn import_upload_handler<A>(
    State(state): State<AppState<A>>,
    args: Args<DataImportUpload, location::FormAndFile>,
) -> RestResult<Response>
where
    A: RestApi,
{
    let DataImportUpload { source, file } = args.into_inner();
    debug!(
        source = %source,
        filename = ?file.filename(),
        size = file.len(),
        "Processing data import upload"
    );

    let staged = TempUpload::save(&file, &format!("{}.csv", source), state.upload_dir()).await?;
    let result = state.api().import_data(source, staged.path()).await;
    drop(staged);

    Ok(envelope::ok(result?))
}
