//! Panel updater tests that run without a live backend.
//!
//! Run with: cargo test --test panels_test

use std::sync::Arc;

use pws_dash::backend::BackendClient;
use pws_dash::backend::models::{BatteryReport, SampleBatch};
use pws_dash::common::AppState;
use pws_dash::config::{Config, Deployment};
use pws_dash::panels::battery::battery_view;
use pws_dash::panels::{conditions, id};
use pws_dash::render::PanelView;

/// Config pointed at a dead port so every fetch fails fast.
fn offline_config() -> Config {
    Config {
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
    }
}

fn offline_state() -> AppState {
    let config = offline_config();
    let backend = BackendClient::new(&config);
    AppState::new(config, backend)
}

#[test]
fn low_console_battery_renders_the_unhealthy_variant() {
    let report: BatteryReport = serde_json::from_str(
        r#"{
            "console": {"status": "low", "label": "Replace battery"},
            "outdoor": {"status": "ok", "label": "Battery OK"}
        }"#,
    )
    .unwrap();

    let view = battery_view(report);
    assert_eq!(view.components.len(), 4);

    let console = &view.components[0];
    assert_eq!(console.component, "console");
    assert!(!console.healthy);
    assert_eq!(console.label, "Replace battery");

    let outdoor = &view.components[1];
    assert!(outdoor.healthy);

    // Components missing from the report render as unhealthy with no label.
    let array = &view.components[2];
    assert!(!array.healthy);
    assert_eq!(array.label, "");
}

#[tokio::test]
async fn conditions_card_classifies_locally_when_failing_open_to_daylight() {
    let state = offline_state();

    // Bright, dry, quiet readings with trailing holes on temperature.
    let batch: SampleBatch = serde_json::from_str(
        r#"{
            "dateTime": ["2025-07-03 11:50:00", "2025-07-03 11:55:00", "2025-07-03 12:00:00"],
            "outTemp": [21.4, null, null],
            "outHumidity": [48.0, 47.5, null],
            "barometer": [1019.2, 1019.4, 1019.5],
            "rain": [0, 0, 0],
            "windSpeed": [2.0, 2.5, 3.0],
            "windDir": [45, 50, 48],
            "luminosity": [41000, 42000, 43000],
            "uv": [6.4, 6.6, null],
            "lightning_strike_count": [0, 0, 0],
            "lightning_distance": [0, 0, 0]
        }"#,
    )
    .unwrap();
    state.dashboard.set_latest_samples(Arc::new(batch));

    // No sun window is set, so daylight gating fails open and the condition
    // comes from the local rule chain; the 24h rainfall fetch fails and
    // falls back to zero.
    conditions::refresh_conditions(&state).await.unwrap();

    let panel = state.panels.get(id::CONDITIONS).unwrap();
    let PanelView::Conditions(view) = panel.view else {
        panic!("expected conditions view");
    };

    assert_eq!(view.condition, "Clear");
    assert_eq!(view.image, Some("Clear.png"));
    assert_eq!(view.temperature, "21.40°C");
    assert_eq!(view.humidity, "47.50%");
    assert_eq!(view.rain_24h, "0.00 mm");
    assert_eq!(view.uv, "7");
    assert_eq!(view.wind_direction, "NE");
    assert_eq!(view.lightning_strikes, "0");
}

#[tokio::test]
async fn camera_card_fails_open_without_a_sun_window() {
    let state = offline_state();

    pws_dash::panels::camera::refresh_camera(&state).await.unwrap();

    let panel = state.panels.get(id::CAMERA).unwrap();
    let PanelView::Camera(view) = panel.view else {
        panic!("expected camera view");
    };

    // Active with a cache-busted URL; the HEAD request failed so there is
    // no captured caption.
    assert!(view.active);
    let url = view.image_url.unwrap();
    assert!(url.starts_with("/static/images/latest.jpg?t="));
    assert!(view.captured.is_none());
}
