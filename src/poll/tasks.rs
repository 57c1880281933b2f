//! The poll-task table: which domains refresh, how often, and which panels
//! they own.

use std::time::Duration;

use crate::astro;
use crate::common::AppState;
use crate::panels::{self, id};
use crate::poll::scheduler::{self, PollTask};

/// Panels owned by the samples task (all period-scoped chart cards, the UV
/// card, and the conditions card that reads the same snapshot).
const SAMPLES_PANELS: &[&str] = &[
    id::INSIDE_TEMP,
    id::OUTSIDE_TEMP,
    id::HUMIDITY,
    id::PRESSURE,
    id::RAINFALL,
    id::WIND,
    id::WIND_CHILL,
    id::HEAT_INDEX,
    id::LIGHTNING,
    id::SOLAR,
    id::UV,
    id::CONDITIONS,
];

const FORECAST_PANELS: &[&str] = &[id::FORECAST];
const BAR_PANELS: &[&str] = &[
    id::BAR_AREA,
    id::BAR_AREA_COMFORT,
    id::OUTSIDE_CO2,
    id::OUTSIDE_PM25,
    id::OUTSIDE_PM10,
];
const CAMERA_PANELS: &[&str] = &[id::CAMERA, id::TIMELAPSE];
const COMFORT_PANELS: &[&str] = &[id::COMFORT_LEVELS];
const ALERT_PANELS: &[&str] = &[id::ALERTS];
const WARNING_PANELS: &[&str] = &[id::WARNINGS];
const TOP_STATS_PANELS: &[&str] = &[id::TOP_STATS];
const TIDES_PANELS: &[&str] = &[id::TIDES];
const DAM_PANELS: &[&str] = &[id::DAM_LEVELS];
const WEEKLY_PANELS: &[&str] = &[id::WEEKLY_STATS];
const CITIES_PANELS: &[&str] = &[id::CAPITAL_CITIES];

/// The samples tick: charts + UV, then the conditions card off the fresh
/// snapshot.
fn samples_tick(state: AppState) -> scheduler::TickFuture {
    Box::pin(async move {
        panels::charts::refresh_samples(&state).await?;
        panels::conditions::refresh_conditions(&state).await
    })
}

fn camera_tick(state: AppState) -> scheduler::TickFuture {
    Box::pin(async move {
        panels::camera::refresh_camera(&state).await?;
        panels::camera::refresh_timelapse(&state).await
    })
}

/// The full task table, with periods from configuration.
#[must_use]
pub fn task_table(state: &AppState) -> Vec<PollTask> {
    let config = &state.config;

    vec![
        PollTask {
            name: "samples",
            every: Duration::from_secs(config.poll_samples_seconds),
            panels: SAMPLES_PANELS,
            run: samples_tick,
        },
        PollTask {
            name: "forecast",
            every: Duration::from_secs(config.poll_samples_seconds),
            panels: FORECAST_PANELS,
            run: |state| Box::pin(async move { panels::forecast::refresh_forecast(&state).await }),
        },
        PollTask {
            name: "bar_metrics",
            every: Duration::from_secs(config.poll_bar_metrics_seconds),
            panels: BAR_PANELS,
            run: |state| Box::pin(async move { panels::air::refresh_bar_metrics(&state).await }),
        },
        PollTask {
            name: "camera",
            every: Duration::from_secs(config.poll_camera_seconds),
            panels: CAMERA_PANELS,
            run: camera_tick,
        },
        PollTask {
            name: "comfort_levels",
            every: Duration::from_secs(config.poll_comfort_seconds),
            panels: COMFORT_PANELS,
            run: |state| Box::pin(async move { panels::comfort::refresh_comfort_levels(&state).await }),
        },
        PollTask {
            name: "alerts",
            every: Duration::from_secs(config.poll_alerts_seconds),
            panels: ALERT_PANELS,
            run: |state| Box::pin(async move { panels::alerts::refresh_alerts(&state).await }),
        },
        PollTask {
            name: "warnings",
            every: Duration::from_secs(config.poll_warnings_seconds),
            panels: WARNING_PANELS,
            run: |state| Box::pin(async move { panels::alerts::refresh_warnings(&state).await }),
        },
        PollTask {
            name: "top_stats",
            every: Duration::from_secs(config.poll_hourly_seconds),
            panels: TOP_STATS_PANELS,
            run: |state| Box::pin(async move { panels::stats::refresh_top_stats(&state).await }),
        },
        PollTask {
            name: "tides",
            every: Duration::from_secs(config.poll_hourly_seconds),
            panels: TIDES_PANELS,
            run: |state| Box::pin(async move { panels::marine::refresh_tides(&state).await }),
        },
        PollTask {
            name: "dam_levels",
            every: Duration::from_secs(config.poll_hourly_seconds),
            panels: DAM_PANELS,
            run: |state| Box::pin(async move { panels::marine::refresh_dam_levels(&state).await }),
        },
        PollTask {
            name: "weekly_stats",
            every: Duration::from_secs(config.poll_hourly_seconds),
            panels: WEEKLY_PANELS,
            run: |state| Box::pin(async move { panels::stats::refresh_weekly_stats(&state).await }),
        },
        PollTask {
            name: "capital_cities",
            every: Duration::from_secs(config.poll_hourly_seconds),
            panels: CITIES_PANELS,
            run: |state| Box::pin(async move { panels::cities::refresh_capital_cities(&state).await }),
        },
        PollTask {
            name: "battery",
            every: Duration::from_secs(config.poll_battery_seconds),
            panels: &[id::BATTERY],
            run: |state| Box::pin(async move { panels::battery::refresh_battery(&state).await }),
        },
    ]
}

/// Spawn all interval tasks plus the daily sunrise/sunset refresh.
pub fn spawn_poll_tasks(state: &AppState) {
    // Sun window first: it gates the camera task's first tick whenever the
    // lookup wins the race, and fails open otherwise.
    {
        let state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = panels::sun::refresh_sun_window(&state).await {
                tracing::error!(error = %e, "Initial sun window refresh failed");
            }
        });
    }
    {
        let state = state.clone();
        let offset = state.local_offset();
        astro::spawn_daily_at(offset, 0, 1, move || {
            let state = state.clone();
            async move {
                if let Err(e) = panels::sun::refresh_sun_window(&state).await {
                    tracing::error!(error = %e, "Daily sun window refresh failed");
                }
            }
        });
    }

    scheduler::spawn_all(state, task_table(state));
}

/// One-off samples refresh, used when the period selection changes.
pub fn refresh_period_scoped(state: &AppState) {
    let task = PollTask {
        name: "samples-switch",
        every: Duration::from_secs(0),
        panels: SAMPLES_PANELS,
        run: samples_tick,
    };
    tokio::spawn(scheduler::run_tick(state.clone(), task));
}
