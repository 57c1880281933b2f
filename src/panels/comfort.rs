//! The comfort-levels card (backend-computed dew point, heat index, wind
//! chill and feels-like).

use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{ComfortLevelsView, PanelView, fmt_compact};

/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_comfort_levels(state: &AppState) -> AppResult<()> {
    let report = state.backend.comfort_levels().await?;

    if let Some(error) = report.error {
        state.panels.publish_error(id::COMFORT_LEVELS, error);
        return Ok(());
    }

    let view = ComfortLevelsView {
        dew_point: fmt_compact(report.dew_point, 1, "°C"),
        heat_index: fmt_compact(report.heat_index, 1, "°C"),
        wind_chill: fmt_compact(report.wind_chill, 1, "°C"),
        feels_like: fmt_compact(report.feels_like, 1, "°C"),
        rating: report.comfort_rating,
        image: report.comfort_image,
    };

    state.panels.publish(id::COMFORT_LEVELS, PanelView::ComfortLevels(view));
    Ok(())
}
