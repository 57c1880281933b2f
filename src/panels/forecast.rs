//! The AI forecast card.

use std::sync::Arc;

use crate::classify;
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{ForecastView, PanelView};

/// Fetch the forecast and refresh the predicted-conditions card.
///
/// # Errors
///
/// Returns `AppError::Backend` when the forecast fetch fails.
pub async fn refresh_forecast(state: &AppState) -> AppResult<()> {
    let forecast = state.backend.forecast().await?;
    state.dashboard.set_latest_forecast(Arc::new(forecast.clone()));

    // Training-days footer is best-effort; the card renders without it.
    let training_days = match state.backend.training_days().await {
        Ok(t) => t.days,
        Err(e) => {
            tracing::warn!(error = %e, "Training days fetch failed");
            None
        }
    };

    let summary = forecast.ai_forecast.as_ref().map(|text| {
        let wind = forecast
            .ai_wind_forecast
            .as_deref()
            .map(classify::wind_phrase)
            .unwrap_or("");
        format!("{text}{wind}")
    });
    let image = forecast.ai_forecast.as_ref().map(|text| format!("{text}.png"));

    let view = ForecastView {
        summary,
        image,
        predicted_min: match (forecast.predicted_min_temp, forecast.predicted_min_temp_confidence) {
            (Some(temp), Some(conf)) => Some(format!("{temp:.1}°C (Confidence {conf:.1}%)")),
            (Some(temp), None) => Some(format!("{temp:.1}°C")),
            _ => None,
        },
        predicted_min_range: forecast.predicted_min_temp_range.clone(),
        predicted_max: match (forecast.predicted_max_temp, forecast.predicted_max_temp_confidence) {
            (Some(temp), Some(conf)) => Some(format!("{temp:.1}°C (Confidence {conf:.1}%)")),
            (Some(temp), None) => Some(format!("{temp:.1}°C")),
            _ => None,
        },
        predicted_max_range: forecast.predicted_max_temp_range.clone(),
        chance_of_rain: match (forecast.chance_of_rain, forecast.chance_of_rain_confidence) {
            (Some(chance), Some(conf)) => Some(format!("{chance:.1}% (Confidence {conf:.1}%)")),
            (Some(chance), None) => Some(format!("{chance:.1}%")),
            _ => None,
        },
        chance_of_lightning: match (
            forecast.chance_of_lightning,
            forecast.chance_of_lightning_confidence,
        ) {
            (Some(chance), Some(conf)) => Some(format!("{chance:.1}% (Confidence {conf:.1}%)")),
            (Some(chance), None) => Some(format!("{chance:.1}%")),
            _ => None,
        },
        training_days: training_days
            .map(|days| format!("AI Weather Model has been trained on {days} days of data")),
    };

    state.panels.publish(id::FORECAST, PanelView::Forecast(view));
    Ok(())
}
