//! The period-scoped chart cards and the UV card, refreshed together from
//! one `/api/data` fetch.

use std::sync::Arc;

use crate::backend::models::SampleBatch;
use crate::chart::{ChartSeries, ChartSpec, colors, time_ticks};
use crate::classify;
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{PLACEHOLDER, PanelView, UvView, fmt_reading};
use crate::series::{Period, last_valid, parse_timestamps};

/// Fetch the sample batch for the current period and redraw every chart
/// card plus the UV card.
///
/// The fetch is stamped with the period generation at launch; if the user
/// switches periods while it is in flight, the stale response is dropped on
/// arrival and the switch's own refresh wins.
///
/// # Errors
///
/// Returns `AppError::Backend` when the fetch or parse fails; the scheduler
/// turns that into the error state for these panels.
pub async fn refresh_samples(state: &AppState) -> AppResult<()> {
    let period = state.dashboard.current_period();
    let generation = state.dashboard.period_generation();

    let batch = state.backend.samples(period).await?;

    if generation != state.dashboard.period_generation() {
        tracing::debug!(period = period.as_str(), "Discarding samples from superseded period");
        return Ok(());
    }

    let batch = Arc::new(batch);
    state.dashboard.set_latest_samples(batch.clone());

    // 24h rainfall total for the rainfall overlay; zero when unavailable.
    let rainfall_24h = match state.backend.rainfall_24h().await {
        Ok(r) => r.total_rainfall_24h.unwrap_or(0.0),
        Err(e) => {
            tracing::warn!(error = %e, "24h rainfall fetch failed, overlay falls back to zero");
            0.0
        }
    };

    publish_chart_panels(state, &batch, period, rainfall_24h);
    publish_uv_panel(state, &batch);
    Ok(())
}

fn publish_chart_panels(state: &AppState, batch: &SampleBatch, period: Period, rainfall_24h: f64) {
    let timestamps: Vec<_> = parse_timestamps(batch, state.local_offset())
        .into_iter()
        .flatten()
        .collect();
    let ticks = time_ticks(&timestamps);

    let chart = |series: Vec<ChartSeries>| ChartSpec {
        series,
        ticks: ticks.clone(),
        period_label: period.label(),
    };
    let x = || batch.date_time.clone();

    state.panels.publish(
        id::INSIDE_TEMP,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.in_temp), 1, "°C"),
            chart: chart(vec![ChartSeries::new(
                "Inside Temp",
                colors::POWDER_BLUE,
                x(),
                batch.in_temp.clone(),
            )]),
        },
    );

    state.panels.publish(
        id::OUTSIDE_TEMP,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.out_temp), 1, "°C"),
            chart: chart(vec![ChartSeries::new(
                "Outside Temp",
                colors::GREEN_BLUE,
                x(),
                batch.out_temp.clone(),
            )]),
        },
    );

    state.panels.publish(
        id::HUMIDITY,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.out_humidity), 2, "%"),
            chart: chart(vec![
                ChartSeries::new("Inside Humidity", colors::FIELD_DRAB, x(), batch.in_humidity.clone()),
                ChartSeries::new("Outside Humidity", colors::GREEN_BLUE, x(), batch.out_humidity.clone()),
            ]),
        },
    );

    state.panels.publish(
        id::PRESSURE,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.barometer), 1, "hPa"),
            chart: chart(vec![ChartSeries::new(
                "Barometric Pressure",
                colors::FIELD_DRAB,
                x(),
                batch.barometer.clone(),
            )]),
        },
    );

    state.panels.publish(
        id::RAINFALL,
        PanelView::Chart {
            overlay: format!("{rainfall_24h:.1}mm (24h)"),
            chart: chart(vec![ChartSeries::new(
                "Rainfall",
                colors::TUFTS_BLUE,
                x(),
                batch.rain.clone(),
            )]),
        },
    );

    // Wind speed arrives in m/s and is plotted in km/h, rounded to 2 dp.
    let wind_kmh: Vec<Option<f64>> = batch
        .wind_speed
        .iter()
        .map(|v| v.map(|v| (v * 3.6 * 100.0).round() / 100.0))
        .collect();
    let wind_overlay = match (last_valid(&wind_kmh), last_valid(&batch.wind_dir).and_then(classify::compass_point)) {
        (Some(speed), Some(dir)) => format!("From {dir} at {speed:.2} km/h"),
        _ => PLACEHOLDER.to_string(),
    };
    state.panels.publish(
        id::WIND,
        PanelView::Chart {
            overlay: wind_overlay,
            chart: chart(vec![
                ChartSeries::new("Wind Speed (km/h)", colors::GREEN_BLUE, x(), wind_kmh),
                ChartSeries::new("Wind Direction (°)", colors::GOLD, x(), batch.wind_dir.clone())
                    .on_secondary_axis(),
            ]),
        },
    );

    state.panels.publish(
        id::WIND_CHILL,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.wind_chill), 1, "°C"),
            chart: chart(vec![ChartSeries::new(
                "Wind Chill",
                colors::POWDER_BLUE,
                x(),
                batch.wind_chill.clone(),
            )]),
        },
    );

    state.panels.publish(
        id::HEAT_INDEX,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.heat_index), 1, "°C"),
            chart: chart(vec![ChartSeries::new(
                "Heat Index",
                colors::GOLD,
                x(),
                batch.heat_index.clone(),
            )]),
        },
    );

    // Distance bars are suppressed for ticks with no strikes.
    let strike_distance: Vec<Option<f64>> = batch
        .lightning_distance
        .iter()
        .enumerate()
        .map(|(i, dist)| {
            match SampleBatch::value_at(&batch.lightning_strike_count, i) {
                Some(count) if count >= 1.0 => *dist,
                _ => None,
            }
        })
        .collect();
    state.panels.publish(
        id::LIGHTNING,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.lightning_strike_count), 0, "strikes"),
            chart: chart(vec![
                ChartSeries::new("Distance (km)", colors::TUFTS_BLUE, x(), strike_distance),
                ChartSeries::new("Count", colors::GOLD, x(), batch.lightning_strike_count.clone())
                    .on_secondary_axis(),
            ]),
        },
    );

    state.panels.publish(
        id::SOLAR,
        PanelView::Chart {
            overlay: fmt_reading(last_valid(&batch.luminosity), 2, "kLux"),
            chart: chart(vec![
                ChartSeries::new("Solar (kLux)", colors::POWDER_BLUE, x(), batch.luminosity.clone()),
                ChartSeries::new("UV Index", colors::GOLD, x(), batch.uv.clone()).on_secondary_axis(),
            ]),
        },
    );
}

fn publish_uv_panel(state: &AppState, batch: &SampleBatch) {
    let view = match last_valid(&batch.uv).and_then(classify::uv_level) {
        Some(info) => UvView {
            index: info.index.to_string(),
            risk: format!("{} - {}", info.risk, info.time_to_burn),
            image: info.image,
            color: info.color,
        },
        None => UvView {
            index: PLACEHOLDER.to_string(),
            risk: "Unknown".to_string(),
            image: "unknown.jpg",
            color: "#f8fafc",
        },
    };
    state.panels.publish(id::UV, PanelView::Uv(view));
}
