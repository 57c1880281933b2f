//! Unit tests for clock parsing, daylight gating and the daily timer math.
//!
//! Run with: cargo test --test astro_test

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike};
use std::time::Duration;

use pws_dash::astro::{
    SunWindow, duration_until_daily, is_within_daylight_window, parse_clock_string,
};
use pws_dash::backend::models::SunResults;

fn brisbane() -> FixedOffset {
    FixedOffset::east_opt(10 * 3600).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()
}

fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    brisbane()
        .from_local_datetime(&day().and_hms_opt(hour, minute, 0).unwrap())
        .unwrap()
}

#[test]
fn parses_twelve_hour_clock_strings() {
    let sunrise = parse_clock_string("6:38:21 AM", day(), brisbane()).unwrap();
    assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (6, 38, 21));

    let sunset = parse_clock_string("5:01:09 PM", day(), brisbane()).unwrap();
    assert_eq!(sunset.hour(), 17);

    // Midnight and noon edge cases.
    assert_eq!(parse_clock_string("12:00:00 AM", day(), brisbane()).unwrap().hour(), 0);
    assert_eq!(parse_clock_string("12:00:00 PM", day(), brisbane()).unwrap().hour(), 12);
}

#[test]
fn malformed_clock_strings_fail_closed() {
    for bad in [
        "",
        "6:38 AM",
        "6:38:21",
        "25:00:00 AM",
        "6:61:00 PM",
        "0:10:00 AM",
        "6:38:21 XM",
        "six:38:21 AM",
        "6:38:21:00 AM",
    ] {
        assert!(
            parse_clock_string(bad, day(), brisbane()).is_none(),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn daylight_window_spans_fifteen_minutes_past_each_edge() {
    let window = SunWindow {
        sunrise: at(6, 0),
        sunset: at(18, 0),
    };

    assert!(is_within_daylight_window(at(5, 46), Some(&window)));
    assert!(!is_within_daylight_window(at(5, 44), Some(&window)));
    assert!(is_within_daylight_window(at(18, 14), Some(&window)));
    assert!(!is_within_daylight_window(at(18, 16), Some(&window)));
    assert!(is_within_daylight_window(at(12, 0), Some(&window)));
}

#[test]
fn missing_window_fails_open() {
    assert!(is_within_daylight_window(at(2, 0), None));
}

#[test]
fn daily_timer_rolls_to_tomorrow_when_past() {
    // 23:59 waiting for 00:01 fires in two minutes.
    assert_eq!(
        duration_until_daily(at(23, 59), 0, 1),
        Duration::from_secs(2 * 60)
    );

    // 00:02 already missed today's mark; next one is 23h58m away.
    assert_eq!(
        duration_until_daily(at(0, 2), 0, 1),
        Duration::from_secs((23 * 60 + 58) * 60)
    );
}

#[test]
fn sun_window_is_both_or_neither() {
    let good = SunResults {
        sunrise: "6:38:21 AM".to_string(),
        sunset: "5:01:09 PM".to_string(),
    };
    assert!(SunWindow::from_lookup(&good, day(), brisbane()).is_some());

    let half = SunResults {
        sunrise: "6:38:21 AM".to_string(),
        sunset: "garbage".to_string(),
    };
    assert!(SunWindow::from_lookup(&half, day(), brisbane()).is_none());
}
