//! Local-time astronomy helpers: 12-hour clock parsing, the daylight window
//! that gates the weather camera, and the self-renewing daily timer used for
//! the sunrise/sunset refresh.

use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, NaiveDate, TimeZone, Utc};
use std::future::Future;
use std::time::Duration;

use crate::backend::models::SunResults;

/// Minutes of grace on either side of the sun window during which the
/// camera is still considered active.
const DAYLIGHT_MARGIN_MINUTES: i64 = 15;

/// Today's sunrise and sunset, station-local. Always set as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunWindow {
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

impl SunWindow {
    /// Build a window from the external lookup's 12-hour clock strings,
    /// anchored to `today`. `None` unless both times parse.
    #[must_use]
    pub fn from_lookup(results: &SunResults, today: NaiveDate, offset: FixedOffset) -> Option<Self> {
        let sunrise = parse_clock_string(&results.sunrise, today, offset)?;
        let sunset = parse_clock_string(&results.sunset, today, offset)?;
        Some(Self { sunrise, sunset })
    }
}

/// Parse a `"h:mm:ss AM/PM"` clock string into a timestamp on `today`.
///
/// Fails closed: any malformed input is `None`, callers treat the time as
/// unknown rather than guessing.
#[must_use]
pub fn parse_clock_string(
    s: &str,
    today: NaiveDate,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    let (time, meridiem) = s.trim().split_once(' ')?;

    let mut parts = time.split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours == 0 || hours > 12 || minutes > 59 || seconds > 59 {
        return None;
    }

    let hour = match meridiem {
        "AM" => {
            if hours == 12 {
                0
            } else {
                hours
            }
        }
        "PM" => {
            if hours < 12 {
                hours + 12
            } else {
                hours
            }
        }
        _ => return None,
    };

    let naive = today.and_hms_opt(hour, minutes, seconds)?;
    offset.from_local_datetime(&naive).single()
}

/// Whether `now` falls inside the camera-active daylight window.
///
/// The window is sunrise − 15 min through sunset + 15 min. With no window
/// yet (startup, failed lookup) this fails open and reports active.
#[must_use]
pub fn is_within_daylight_window(now: DateTime<FixedOffset>, window: Option<&SunWindow>) -> bool {
    let Some(window) = window else {
        return true;
    };
    let margin = ChronoDuration::minutes(DAYLIGHT_MARGIN_MINUTES);
    now >= window.sunrise - margin && now <= window.sunset + margin
}

/// Time until the next occurrence of `hour:minute` local, rolling over to
/// tomorrow when the mark has already passed today.
#[must_use]
pub fn duration_until_daily(now: DateTime<FixedOffset>, hour: u32, minute: u32) -> Duration {
    let today_mark = now
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .and_then(|naive| now.offset().from_local_datetime(&naive).single());

    let next = match today_mark {
        Some(mark) if mark > now => mark,
        Some(mark) => mark + ChronoDuration::days(1),
        // Unrepresentable local time; fall back to a day from now.
        None => now + ChronoDuration::days(1),
    };

    (next - now).to_std().unwrap_or(Duration::from_secs(0))
}

/// Run `action` every day at `hour:minute` local time.
///
/// A chain of one-shot sleeps rather than a fixed interval: the delay is
/// recomputed from the wall clock after every run, so the schedule
/// self-corrects for drift.
pub fn spawn_daily_at<F, Fut>(
    offset: FixedOffset,
    hour: u32,
    minute: u32,
    action: F,
) -> tokio::task::JoinHandle<()>
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        loop {
            let now = Utc::now().with_timezone(&offset);
            let wait = duration_until_daily(now, hour, minute);
            tracing::debug!(wait_secs = wait.as_secs(), hour, minute, "Daily timer armed");
            tokio::time::sleep(wait).await;
            action().await;
        }
    })
}

/// The current station-local time.
#[must_use]
pub fn local_now(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}
