//! Bar-area cards fed by `/api/bar_metrics`: temperature/humidity, the three
//! air-quality cards, and the locally classified comfort card.

use crate::classify;
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{
    AirQualityView, BarAreaView, ComfortScaleView, PLACEHOLDER, PanelView, fmt_compact,
};

/// Refresh every bar-area card from one `/api/bar_metrics` fetch.
///
/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_bar_metrics(state: &AppState) -> AppResult<()> {
    let metrics = state.backend.bar_metrics().await?;

    // Temperature and humidity arrive pre-formatted; strip the units back
    // off before classifying comfort.
    let temp = metrics
        .bar_area_temp
        .as_deref()
        .and_then(|s| s.trim_end_matches("°C").parse::<f64>().ok());
    let humidity = metrics
        .bar_area_humidity
        .as_deref()
        .and_then(|s| s.trim_end_matches('%').parse::<f64>().ok());

    state.panels.publish(
        id::BAR_AREA,
        PanelView::BarArea(BarAreaView {
            temperature: fmt_compact(temp, 1, "°C"),
            humidity: fmt_compact(humidity, 1, "%"),
        }),
    );

    let rating = match (temp, humidity) {
        (Some(t), Some(h)) => classify::comfort_level(t, h),
        _ => None,
    };
    state.panels.publish(
        id::BAR_AREA_COMFORT,
        PanelView::ComfortScale(ComfortScaleView { rating }),
    );

    state.panels.publish(
        id::OUTSIDE_CO2,
        PanelView::AirQuality(AirQualityView {
            metric: "CO₂ Level",
            value: metrics
                .outside_co2
                .map(|v| format!("{v} ppm"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            scale: classify::co2_level(metrics.outside_co2.unwrap_or(f64::NAN)),
        }),
    );

    state.panels.publish(
        id::OUTSIDE_PM25,
        PanelView::AirQuality(AirQualityView {
            metric: "PM2.5",
            value: metrics
                .pm25
                .map(|v| format!("{v} µg/m³"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            scale: classify::particulate_level(metrics.pm25.unwrap_or(f64::NAN)),
        }),
    );

    state.panels.publish(
        id::OUTSIDE_PM10,
        PanelView::AirQuality(AirQualityView {
            metric: "PM10",
            value: metrics
                .pm10
                .map(|v| format!("{v} µg/m³"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            scale: classify::particulate_level(metrics.pm10.unwrap_or(f64::NAN)),
        }),
    );

    Ok(())
}
