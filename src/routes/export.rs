//! CSV export of the sample series.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use std::sync::{Arc, OnceLock};
use tokio::sync::Semaphore;
use utoipa::IntoParams;

use super::cache;
use crate::backend::models::SampleBatch;
use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::series::Period;

/// Concurrency cap for export requests; each one may cost an upstream fetch.
static EXPORT_SEMAPHORE: OnceLock<Arc<Semaphore>> = OnceLock::new();

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// One of `24h`, `72h`, `7d`, `28d`. Defaults to the current selection.
    pub period: Option<String>,
}

/// Download the sample series for a period as CSV.
#[utoipa::path(
    get,
    path = "/api/export.csv",
    params(ExportQuery),
    responses(
        (status = 200, description = "CSV download", content_type = "text/csv"),
        (status = 400, description = "Unknown period"),
        (status = 503, description = "Too many concurrent exports"),
    ),
    tag = "export"
)]
pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<Response> {
    let period = match query.period.as_deref() {
        None => state.dashboard.current_period(),
        Some(s) => Period::parse(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown period '{s}'")))?,
    };

    let cache_key = cache::cache_key("export", &[period.as_str()]);
    let filename = format!("weather_data_{}.csv", period.as_str());

    if let Some(cached) = cache::get_cached(&state, &cache_key).await {
        return cache::csv_response((*cached).clone(), &filename, true);
    }

    let semaphore = EXPORT_SEMAPHORE
        .get_or_init(|| Arc::new(Semaphore::new(state.config.export_concurrent_limit)));
    let _permit = match semaphore.clone().try_acquire_owned() {
        Ok(permit) => permit,
        Err(_) => {
            tracing::warn!(
                status = StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                "export_request_rejected"
            );
            return Err(AppError::ServiceUnavailable(
                "Too many concurrent exports. Please try again later.".to_string(),
            ));
        }
    };

    let batch = state.backend.samples(period).await?;
    let data = build_csv(&batch)?;

    cache::store_cached(&state, cache_key, data.clone()).await;
    cache::csv_response(data, &filename, false)
}

/// Serialize the batch's parallel arrays into CSV rows; holes become empty
/// fields.
fn build_csv(batch: &SampleBatch) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let columns = batch.columns();

    let mut header = vec!["dateTime"];
    header.extend(columns.iter().map(|(name, _)| *name));
    writer
        .write_record(&header)
        .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;

    for (i, timestamp) in batch.date_time.iter().enumerate() {
        let mut record = vec![timestamp.clone()];
        for (_, column) in &columns {
            let field = SampleBatch::value_at(column, i)
                .map(|v| v.to_string())
                .unwrap_or_default();
            record.push(field);
        }
        writer
            .write_record(&record)
            .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {e}")))
}
