//! Unit tests for the time-axis tick grid and theme palettes.
//!
//! Run with: cargo test --test chart_test

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

use pws_dash::chart::{Theme, time_ticks};

fn local(day: u32, hour: u32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(10 * 3600).unwrap();
    offset
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(2025, 7, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        )
        .unwrap()
}

#[test]
fn ticks_run_every_six_hours_from_the_preceding_midnight() {
    // Data from 05:00 to 11:00 the next day.
    let timestamps = vec![local(3, 5), local(3, 20), local(4, 11)];
    let ticks = time_ticks(&timestamps);

    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["03/07", "06:00", "12:00", "18:00", "04/07", "06:00"]);

    let values: Vec<&str> = ticks.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "2025-07-03 00:00:00",
            "2025-07-03 06:00:00",
            "2025-07-03 12:00:00",
            "2025-07-03 18:00:00",
            "2025-07-04 00:00:00",
            "2025-07-04 06:00:00",
        ]
    );
}

#[test]
fn a_tick_lands_on_the_last_timestamp_when_aligned() {
    let ticks = time_ticks(&[local(3, 0), local(3, 12)]);
    let values: Vec<&str> = ticks.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "2025-07-03 00:00:00",
            "2025-07-03 06:00:00",
            "2025-07-03 12:00:00",
        ]
    );
}

#[test]
fn empty_series_has_no_ticks() {
    assert!(time_ticks(&[]).is_empty());
}

#[test]
fn midnight_ticks_are_dated_and_others_are_timed() {
    let ticks = time_ticks(&[local(3, 5), local(5, 2)]);
    for tick in &ticks {
        if tick.value.ends_with("00:00:00") {
            assert!(tick.label.contains('/'), "midnight tick {} not dated", tick.value);
        } else {
            assert!(tick.label.contains(':'), "tick {} not timed", tick.value);
        }
    }
}

#[test]
fn themes_only_differ_in_chrome() {
    let light = Theme::Light.palette();
    let dark = Theme::Dark.palette();
    assert_eq!(light.paper_background, "#ffffff");
    assert_eq!(dark.paper_background, "#333333");
    assert_ne!(light.font_color, dark.font_color);
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("sepia"), None);
}
