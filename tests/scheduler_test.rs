//! Poll-task isolation tests.
//!
//! Run with: cargo test --test scheduler_test

use std::time::Duration;

use pws_dash::backend::BackendClient;
use pws_dash::common::AppState;
use pws_dash::config::{Config, Deployment};
use pws_dash::error::AppError;
use pws_dash::poll::PollTask;
use pws_dash::poll::scheduler;
use pws_dash::render::{PanelView, TimelapseView};

fn offline_state() -> AppState {
    let config = Config {
        backend_base_url: "http://127.0.0.1:9".to_string(),
        backend_timeout_seconds: 1,
        station_latitude: -27.4073,
        station_longitude: 152.9199,
        station_tzid: "Australia/Brisbane".to_string(),
        station_utc_offset_hours: 10,
        sun_api_base_url: "http://127.0.0.1:9".to_string(),
        poll_samples_seconds: 300,
        poll_bar_metrics_seconds: 300,
        poll_camera_seconds: 300,
        poll_comfort_seconds: 300,
        poll_alerts_seconds: 1800,
        poll_warnings_seconds: 21_600,
        poll_hourly_seconds: 3600,
        poll_battery_seconds: 43_200,
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        disable_rate_limiting: true,
        rate_limit_panels_per_second: 10,
        rate_limit_panels_burst: 60,
        rate_limit_export_per_second: 1,
        rate_limit_export_burst: 5,
        export_concurrent_limit: 2,
        cache_ttl_seconds: 60,
        cache_max_bytes: 1_048_576,
        deployment: Deployment::Local,
    };
    let backend = BackendClient::new(&config);
    AppState::new(config, backend)
}

#[tokio::test]
async fn a_failing_tick_only_marks_its_own_panels() {
    let state = offline_state();

    // Another task's panel, already rendered.
    state
        .panels
        .publish("timelapse", PanelView::Timelapse(TimelapseView { date: None }));

    let failing = PollTask {
        name: "failing",
        every: Duration::from_secs(60),
        panels: &["alerts", "warnings"],
        run: |_| Box::pin(async { Err(AppError::Backend("connection refused".to_string())) }),
    };

    scheduler::run_tick(state.clone(), failing).await;

    assert!(matches!(
        state.panels.get("alerts").unwrap().view,
        PanelView::Error { .. }
    ));
    assert!(matches!(
        state.panels.get("warnings").unwrap().view,
        PanelView::Error { .. }
    ));
    // The unrelated panel is untouched.
    assert!(matches!(
        state.panels.get("timelapse").unwrap().view,
        PanelView::Timelapse(_)
    ));
}

#[tokio::test]
async fn a_successful_tick_publishes_no_error() {
    let state = offline_state();

    let succeeding = PollTask {
        name: "succeeding",
        every: Duration::from_secs(60),
        panels: &["alerts"],
        run: |state| {
            Box::pin(async move {
                state
                    .panels
                    .publish("alerts", PanelView::Timelapse(TimelapseView { date: None }));
                Ok(())
            })
        },
    };

    scheduler::run_tick(state.clone(), succeeding).await;

    assert!(matches!(
        state.panels.get("alerts").unwrap().view,
        PanelView::Timelapse(_)
    ));
}

#[tokio::test]
async fn the_task_table_covers_every_polled_domain() {
    let state = offline_state();
    let tasks = pws_dash::poll::tasks::task_table(&state);

    let names: Vec<&str> = tasks.iter().map(|t| t.name).collect();
    for expected in [
        "samples",
        "forecast",
        "bar_metrics",
        "camera",
        "comfort_levels",
        "alerts",
        "warnings",
        "top_stats",
        "tides",
        "dam_levels",
        "weekly_stats",
        "capital_cities",
        "battery",
    ] {
        assert!(names.contains(&expected), "missing task {expected}");
    }

    // No two tasks own the same panel.
    let mut seen = std::collections::HashSet::new();
    for task in &tasks {
        for panel in task.panels {
            assert!(seen.insert(*panel), "panel {panel} owned by two tasks");
        }
    }
}
