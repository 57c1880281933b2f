//! The current-conditions card: headline condition plus the latest spot
//! readings.

use crate::astro;
use crate::backend::models::SampleBatch;
use crate::classify::{self, ConditionInputs};
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{ConditionsView, PLACEHOLDER, PanelView, fmt_compact, fmt_reading};
use crate::series::last_valid;

const MILES_TO_KM: f64 = 1.609_34;
const FEET_TO_M: f64 = 0.3048;

/// Refresh the conditions card from the shared sample snapshot.
///
/// During the daylight window the condition comes from the local rule chain
/// over the latest readings; at night it comes from the external condition
/// lookup, falling back to Clear with no icon when that fails.
///
/// Reads `latest_samples` written by the samples poller; the snapshot may be
/// one tick older or newer than this task's own cadence (last write wins,
/// see `DashboardState`).
pub async fn refresh_conditions(state: &AppState) -> AppResult<()> {
    let Some(batch) = state.dashboard.latest_samples() else {
        // Nothing fetched yet; the card appears after the first samples tick.
        return Ok(());
    };

    let rainfall_24h = match state.backend.rainfall_24h().await {
        Ok(r) => r.total_rainfall_24h.unwrap_or(0.0),
        Err(e) => {
            tracing::warn!(error = %e, "24h rainfall fetch failed for conditions card");
            0.0
        }
    };

    let latest = LatestReadings::from_batch(&batch);

    let now = astro::local_now(state.local_offset());
    let daylight =
        astro::is_within_daylight_window(now, state.dashboard.sun_window().as_ref());

    let (condition, icon, image) = if daylight {
        let day = classify::day_condition(&latest.condition_inputs());
        (day.label().to_string(), None, Some(day.image()))
    } else {
        match state.backend.weather_condition().await {
            Ok(report) => (
                report.text.unwrap_or_else(|| "Clear".to_string()),
                report.icon,
                None,
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Night condition lookup failed, reporting Clear");
                ("Clear".to_string(), None, None)
            }
        }
    };

    let view = ConditionsView {
        condition,
        icon,
        image,
        temperature: fmt_compact(latest.out_temp, 2, "°C"),
        pressure: fmt_reading(latest.barometer, 2, "hPa"),
        rain_24h: format!("{rainfall_24h:.2} mm"),
        uv: latest
            .uv
            .map(|v| (v.round() as i64).to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        humidity: fmt_compact(latest.out_humidity, 2, "%"),
        wind_speed: fmt_reading(latest.wind_speed_kmh(), 2, "km/h"),
        wind_direction: latest
            .wind_dir
            .and_then(classify::compass_point16)
            .unwrap_or(PLACEHOLDER)
            .to_string(),
        lightning_strikes: (latest.lightning_strike_count.unwrap_or(0.0).round() as i64)
            .to_string(),
    };

    state.panels.publish(id::CONDITIONS, PanelView::Conditions(view));
    Ok(())
}

/// Latest valid value of every column the conditions card consumes.
struct LatestReadings {
    out_temp: Option<f64>,
    out_humidity: Option<f64>,
    barometer: Option<f64>,
    rain: Option<f64>,
    wind_speed: Option<f64>,
    wind_dir: Option<f64>,
    luminosity: Option<f64>,
    uv: Option<f64>,
    lightning_strike_count: Option<f64>,
    lightning_distance: Option<f64>,
    cloudbase: Option<f64>,
}

impl LatestReadings {
    fn from_batch(batch: &SampleBatch) -> Self {
        Self {
            out_temp: last_valid(&batch.out_temp),
            out_humidity: last_valid(&batch.out_humidity),
            barometer: last_valid(&batch.barometer),
            rain: last_valid(&batch.rain),
            wind_speed: last_valid(&batch.wind_speed),
            wind_dir: last_valid(&batch.wind_dir),
            luminosity: last_valid(&batch.luminosity),
            uv: last_valid(&batch.uv),
            lightning_strike_count: last_valid(&batch.lightning_strike_count),
            lightning_distance: last_valid(&batch.lightning_distance),
            cloudbase: last_valid(&batch.cloudbase),
        }
    }

    fn wind_speed_kmh(&self) -> Option<f64> {
        self.wind_speed.map(|v| v * 3.6)
    }

    /// Rule-chain inputs with the station's wire units normalized: lightning
    /// distance miles → km, cloudbase feet → metres, wind m/s → km/h.
    /// Missing readings default to zero, matching how the card has always
    /// degraded.
    fn condition_inputs(&self) -> ConditionInputs {
        ConditionInputs {
            luminosity: self.luminosity.unwrap_or(0.0),
            rain: self.rain.unwrap_or(0.0),
            wind_speed: self.wind_speed_kmh().unwrap_or(0.0),
            lightning_strike_count: self.lightning_strike_count.unwrap_or(0.0).round(),
            lightning_distance_km: self.lightning_distance.unwrap_or(0.0) * MILES_TO_KM,
            humidity: self.out_humidity.unwrap_or(0.0),
            cloudbase_m: self.cloudbase.unwrap_or(0.0) * FEET_TO_M,
        }
    }
}
