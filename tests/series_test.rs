//! Unit tests for sample-series access and the latest-reading scan.
//!
//! Run with: cargo test --test series_test

use chrono::FixedOffset;

use pws_dash::backend::models::SampleBatch;
use pws_dash::render::fmt_reading;
use pws_dash::series::{Period, last_valid, parse_timestamps};

#[test]
fn last_valid_skips_trailing_holes() {
    assert_eq!(last_valid(&[]), None);
    assert_eq!(last_valid(&[None, None]), None);
    assert_eq!(
        last_valid(&[Some(1.0), None, Some(2.0), Some(f64::NAN)]),
        Some(2.0)
    );
    assert_eq!(last_valid(&[Some(f64::NAN)]), None);
    assert_eq!(last_valid(&[Some(0.0)]), Some(0.0));
}

#[test]
fn overlay_shows_last_valid_temperature() {
    // Trailing null and NaN are skipped; the card shows the last real sample.
    let out_temp = vec![Some(21.4), None, Some(f64::NAN)];
    assert_eq!(fmt_reading(last_valid(&out_temp), 1, "°C"), "21.4 °C");
}

#[test]
fn periods_round_trip_their_wire_values() {
    for (s, period) in [
        ("24h", Period::Day),
        ("72h", Period::ThreeDays),
        ("7d", Period::Week),
        ("28d", Period::FourWeeks),
    ] {
        assert_eq!(Period::parse(s), Some(period));
        assert_eq!(period.as_str(), s);
    }
    assert_eq!(Period::parse("1y"), None);
    assert_eq!(Period::default(), Period::Day);
    assert_eq!(Period::Week.label(), "Last 7 days");
}

#[test]
fn timestamps_parse_with_holes_preserved() {
    let batch = SampleBatch {
        date_time: vec![
            "2025-07-03 05:00:00".to_string(),
            "not a timestamp".to_string(),
            "2025-07-03 05:10:00".to_string(),
        ],
        ..Default::default()
    };
    let offset = FixedOffset::east_opt(10 * 3600).unwrap();
    let parsed = parse_timestamps(&batch, offset);

    assert_eq!(parsed.len(), 3);
    assert!(parsed[0].is_some());
    assert!(parsed[1].is_none());
    assert!(parsed[2].is_some());
}

#[test]
fn value_at_tolerates_short_columns() {
    let column = vec![Some(1.0), None, Some(f64::NAN)];
    assert_eq!(SampleBatch::value_at(&column, 0), Some(1.0));
    assert_eq!(SampleBatch::value_at(&column, 1), None);
    assert_eq!(SampleBatch::value_at(&column, 2), None);
    assert_eq!(SampleBatch::value_at(&column, 99), None);
}

#[test]
fn batch_deserializes_backend_field_names() {
    let json = r#"{
        "dateTime": ["2025-07-03 05:00:00", "2025-07-03 05:05:00"],
        "inTemp": [18.2, null],
        "outTemp": [12.9, 13.1],
        "inHumidity": [55, 54],
        "outHumidity": [80, 81],
        "barometer": [1019.2, 1019.4],
        "rain": [0, 0],
        "windSpeed": [1.2, null],
        "windDir": [45, 90],
        "luminosity": [0.5, 0.6],
        "uv": [0, 0]
    }"#;

    let batch: SampleBatch = serde_json::from_str(json).unwrap();
    assert_eq!(batch.date_time.len(), 2);
    assert_eq!(batch.in_temp, vec![Some(18.2), None]);
    assert_eq!(batch.wind_speed, vec![Some(1.2), None]);
    // Columns absent from the payload come back empty, not as an error.
    assert!(batch.wind_chill.is_empty());
    assert!(batch.cloudbase.is_empty());
    assert_eq!(last_valid(&batch.out_temp), Some(13.1));
}

#[test]
fn columns_walk_every_metric() {
    let batch = SampleBatch::default();
    let names: Vec<&str> = batch.columns().iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), 15);
    assert!(names.contains(&"outTemp"));
    assert!(names.contains(&"lightning_strike_count"));
    assert!(!names.contains(&"dateTime"));
}
