//! Panel read endpoints and the period selection.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::chart::{Theme, ThemePalette};
use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::poll;
use crate::render::Panel;
use crate::series::Period;

#[derive(Debug, Deserialize, IntoParams)]
pub struct PanelsQuery {
    /// Chart chrome theme; affects the palette in the response envelope,
    /// never the data.
    pub theme: Option<String>,
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct PanelsResponse {
    pub theme: Theme,
    pub palette: ThemePalette,
    pub period: Period,
    pub panels: Vec<Panel>,
}

/// All current panels.
#[utoipa::path(
    get,
    path = "/api/panels",
    params(PanelsQuery),
    responses(
        (status = 200, description = "Current panel views", body = PanelsResponse),
        (status = 400, description = "Unknown theme"),
    ),
    tag = "panels"
)]
pub async fn list_panels(
    State(state): State<AppState>,
    Query(query): Query<PanelsQuery>,
) -> AppResult<Json<PanelsResponse>> {
    let theme = match query.theme.as_deref() {
        None => Theme::default(),
        Some(s) => Theme::parse(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown theme '{s}'")))?,
    };

    Ok(Json(PanelsResponse {
        theme,
        palette: theme.palette(),
        period: state.dashboard.current_period(),
        panels: state.panels.all(),
    }))
}

/// One panel by id.
#[utoipa::path(
    get,
    path = "/api/panels/{panel_id}",
    params(
        ("panel_id" = String, Path, description = "Panel id, e.g. outside-temp"),
    ),
    responses(
        (status = 200, description = "Panel view", body = Panel),
        (status = 404, description = "Panel not found"),
    ),
    tag = "panels"
)]
pub async fn get_panel(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
) -> AppResult<Json<Panel>> {
    state
        .panels
        .get(&panel_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Panel '{panel_id}' not found")))
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct PeriodResponse {
    pub period: Period,
}

/// The current period selection.
#[utoipa::path(
    get,
    path = "/api/period",
    responses(
        (status = 200, description = "Current period", body = PeriodResponse),
    ),
    tag = "panels"
)]
pub async fn get_period(State(state): State<AppState>) -> Json<PeriodResponse> {
    Json(PeriodResponse {
        period: state.dashboard.current_period(),
    })
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetPeriodRequest {
    /// One of `24h`, `72h`, `7d`, `28d`.
    pub period: String,
}

/// Switch the period and re-fetch the period-scoped panels.
///
/// A no-op when the selection does not change, mirroring how the period
/// menu has always behaved.
#[utoipa::path(
    put,
    path = "/api/period",
    request_body = SetPeriodRequest,
    responses(
        (status = 200, description = "Period updated", body = PeriodResponse),
        (status = 400, description = "Unknown period"),
    ),
    tag = "panels"
)]
pub async fn set_period(
    State(state): State<AppState>,
    Json(request): Json<SetPeriodRequest>,
) -> AppResult<Json<PeriodResponse>> {
    let period = Period::parse(&request.period)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown period '{}'", request.period)))?;

    if period != state.dashboard.current_period() {
        let generation = state.dashboard.set_period(period);
        tracing::info!(period = period.as_str(), generation, "Period switched");
        poll::tasks::refresh_period_scoped(&state);
    }

    Ok(Json(PeriodResponse { period }))
}
