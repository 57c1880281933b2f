//! All-time records (with the scrolling ticker feed) and the weekly
//! statistics pair.

use chrono::NaiveDate;

use crate::backend::models::{TrendSet, WeeklyStats};
use crate::classify;
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{PLACEHOLDER, PanelView, StatEntry, TopStatsView, WeeklyCard, WeeklyStatsView};

/// Echo a backend number with a unit, placeholder when absent.
///
/// Records arrive already rounded, so they are printed verbatim rather than
/// re-formatted to a fixed precision.
fn fmt_raw(value: Option<f64>, unit: &str) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) => format!("{v}{unit}"),
        None => format!("{PLACEHOLDER}{unit}"),
    }
}

/// Refresh the records card and its ticker from `/api/top_stats` and
/// `/api/weather_24h`, fetched concurrently.
///
/// # Errors
///
/// Returns `AppError::Backend` when either fetch fails.
pub async fn refresh_top_stats(state: &AppState) -> AppResult<()> {
    let (stats, last_24h) =
        futures::try_join!(state.backend.top_stats(), state.backend.weather_24h())?;

    if let Some(error) = stats.error {
        state.panels.publish_error(id::TOP_STATS, error);
        return Ok(());
    }

    let records = vec![
        StatEntry::new("Hottest Day", fmt_raw(stats.max_temp, "°C"))
            .with_date(stats.max_temp_date.clone()),
        StatEntry::new("Coldest Day", fmt_raw(stats.min_temp, "°C"))
            .with_date(stats.min_temp_date.clone()),
        StatEntry::new("Most Humid Day", fmt_raw(stats.max_humidity, "%"))
            .with_qualifier(stats.max_humidity_temp.map(|t| format!("at {t}°C")))
            .with_date(stats.max_humidity_date.clone()),
        StatEntry::new("Strongest Wind Gust", fmt_raw(stats.max_wind_gust, " km/h"))
            .with_date(stats.max_wind_gust_date.clone()),
        StatEntry::new("Wettest Day", fmt_raw(stats.max_rainfall, " mm"))
            .with_date(stats.max_rainfall_date.clone()),
        StatEntry::new("Highest UV Index", fmt_raw(stats.max_uv, ""))
            .with_qualifier(Some(format!(
                "({})",
                stats.max_uv_risk.clone().unwrap_or_else(|| "Unknown".to_string())
            )))
            .with_date(stats.max_uv_date.clone()),
        StatEntry::new("Highest PM10", fmt_raw(stats.max_pm10, ""))
            .with_qualifier(Some(format!(
                "({})",
                stats.max_pm10_level.clone().unwrap_or_else(|| "Unknown".to_string())
            )))
            .with_date(stats.max_pm10_date.clone()),
        StatEntry::new("Most Lightning Strikes", fmt_raw(stats.max_lightning, ""))
            .with_date(stats.max_lightning_date.clone()),
    ];

    // The ticker repeats the records with its own coarser ratings, then the
    // rolling 24-hour extremes.
    let gust_value = match (stats.max_wind_gust, stats.max_wind_gust_direction.as_deref()) {
        (Some(gust), Some(dir)) => format!("{gust} km/h from {dir}"),
        (Some(gust), None) => format!("{gust} km/h from {PLACEHOLDER}"),
        _ => format!("{PLACEHOLDER} km/h"),
    };
    let ticker = vec![
        StatEntry::new("Max Temp", fmt_raw(stats.max_temp, "°C")).with_date(stats.max_temp_date),
        StatEntry::new("Min Temp", fmt_raw(stats.min_temp, "°C")).with_date(stats.min_temp_date),
        StatEntry::new("Max Humidity", fmt_raw(stats.max_humidity, "%"))
            .with_qualifier(stats.max_humidity_temp.map(|t| format!("at {t}°C")))
            .with_date(stats.max_humidity_date),
        StatEntry::new("Max Wind Gust", gust_value).with_date(stats.max_wind_gust_date),
        StatEntry::new("Max Rainfall", fmt_raw(stats.max_rainfall, " mm"))
            .with_date(stats.max_rainfall_date),
        StatEntry::new("Max UV", fmt_raw(stats.max_uv, ""))
            .with_qualifier(Some(format!(
                "({})",
                stats.max_uv.map(classify::uv_rating).unwrap_or("Unknown")
            )))
            .with_date(stats.max_uv_date),
        StatEntry::new("Max PM10", fmt_raw(stats.max_pm10, ""))
            .with_qualifier(Some(format!(
                "({})",
                stats.max_pm10.map(classify::pm10_rating).unwrap_or("Unknown")
            )))
            .with_date(stats.max_pm10_date),
        StatEntry::new("Max Lightning", fmt_raw(stats.max_lightning, ""))
            .with_date(stats.max_lightning_date),
        StatEntry::new("24h Max Temp", fmt_raw(last_24h.max_temp_24h, "°C")),
        StatEntry::new("24h Min Temp", fmt_raw(last_24h.min_temp_24h, "°C")),
        StatEntry::new("24h Max Wind Gust", fmt_raw(last_24h.max_wind_gust_24h, " km/h"))
            .with_qualifier(last_24h.max_wind_gust_direction_24h.map(|d| format!("from {d}"))),
        StatEntry::new("24h Total Rainfall", fmt_raw(last_24h.total_rainfall_24h, " mm")),
    ];

    let view = TopStatsView {
        since: stats.first_date.unwrap_or_else(|| "Unknown".to_string()),
        records,
        ticker,
    };
    state.panels.publish(id::TOP_STATS, PanelView::TopStats(view));
    Ok(())
}

/// Refresh both weekly cards.
///
/// Prefers the combined trends endpoint; when it errors, falls back to the
/// legacy per-week endpoints (which carry no trend cues).
///
/// # Errors
///
/// Returns `AppError::Backend` when the fallback fetches fail too.
pub async fn refresh_weekly_stats(state: &AppState) -> AppResult<()> {
    let trends = match state.backend.weekly_stats_trends().await {
        Ok(t) if t.error.is_none() => Some(t),
        Ok(t) => {
            tracing::warn!(error = ?t.error, "Weekly trends endpoint reported an error");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Weekly trends fetch failed, using legacy endpoints");
            None
        }
    };

    let view = match trends {
        Some(t) => WeeklyStatsView {
            current: t.current_week.map(|w| weekly_card(&w, t.trends_current.as_ref())),
            previous: t.previous_week.map(|w| weekly_card(&w, t.trends_previous.as_ref())),
        },
        None => {
            let (current, previous) = futures::try_join!(
                state.backend.weekly_stats_current(),
                state.backend.weekly_stats_previous()
            )?;
            WeeklyStatsView {
                current: Some(weekly_card(&current, None)),
                previous: Some(weekly_card(&previous, None)),
            }
        }
    };

    state.panels.publish(id::WEEKLY_STATS, PanelView::WeeklyStats(view));
    Ok(())
}

fn trend_for(trends: Option<&TrendSet>, metric: &str) -> Option<classify::TrendCue> {
    let trends = trends?;
    let direction = match metric {
        "avg_temp" => trends.avg_temp.as_deref(),
        "avg_humidity" => trends.avg_humidity.as_deref(),
        "avg_pressure" => trends.avg_pressure.as_deref(),
        "avg_wind_speed" => trends.avg_wind_speed.as_deref(),
        "total_rainfall" => trends.total_rainfall.as_deref(),
        "avg_uv" => trends.avg_uv.as_deref(),
        "total_lightning_strikes" => trends.total_lightning_strikes.as_deref(),
        "avg_pm10" => trends.avg_pm10.as_deref(),
        _ => None,
    }?;
    Some(classify::trend_cue(direction))
}

fn week_range(week: &WeeklyStats) -> String {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (
        week.week_start.as_deref().and_then(parse),
        week.week_end.as_deref().and_then(parse),
    ) {
        (Some(start), Some(end)) => format!(
            "{} - {}",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        ),
        _ => format!(
            "{} - {}",
            week.week_start.as_deref().unwrap_or(PLACEHOLDER),
            week.week_end.as_deref().unwrap_or(PLACEHOLDER)
        ),
    }
}

fn weekly_card(week: &WeeklyStats, trends: Option<&TrendSet>) -> WeeklyCard {
    let uv_qualifier = |uv: Option<f64>| {
        uv.and_then(classify::uv_risk).map(|risk| format!("({risk})"))
    };
    let pm10_qualifier = |pm10: Option<f64>| {
        pm10.map(|v| format!("({})", classify::particulate_level(v).label))
    };
    let gust_value = match (week.max_wind_gust, week.max_wind_gust_direction.as_deref()) {
        (Some(gust), Some(dir)) => format!("{gust} km/h from {dir}"),
        (Some(gust), None) => format!("{gust} km/h from {PLACEHOLDER}"),
        _ => PLACEHOLDER.to_string(),
    };

    let stats = vec![
        StatEntry::new("Min Temp", fmt_raw(week.min_temp, "°C")),
        StatEntry::new("Max Temp", fmt_raw(week.max_temp, "°C")),
        StatEntry::new("Avg Temp", fmt_raw(week.avg_temp, "°C"))
            .with_trend(trend_for(trends, "avg_temp")),
        StatEntry::new("Min Humidity", fmt_raw(week.min_humidity, "%")),
        StatEntry::new("Max Humidity", fmt_raw(week.max_humidity, "%")),
        StatEntry::new("Avg Humidity", fmt_raw(week.avg_humidity, "%"))
            .with_trend(trend_for(trends, "avg_humidity")),
        StatEntry::new("Min Pressure", fmt_raw(week.min_pressure, "")),
        StatEntry::new("Max Pressure", fmt_raw(week.max_pressure, "")),
        StatEntry::new("Avg Pressure", fmt_raw(week.avg_pressure, ""))
            .with_trend(trend_for(trends, "avg_pressure")),
        StatEntry::new("Max Wind Gust", gust_value),
        StatEntry::new("Avg Wind Speed", fmt_raw(week.avg_wind_speed, " km/h"))
            .with_trend(trend_for(trends, "avg_wind_speed")),
        StatEntry::new("Total Rainfall", fmt_raw(week.total_rainfall, " mm"))
            .with_trend(trend_for(trends, "total_rainfall")),
        StatEntry::new("Max UV", fmt_raw(week.max_uv, ""))
            .with_qualifier(uv_qualifier(week.max_uv)),
        StatEntry::new("Avg UV", fmt_raw(week.avg_uv, ""))
            .with_qualifier(uv_qualifier(week.avg_uv))
            .with_trend(trend_for(trends, "avg_uv")),
        StatEntry::new("Max Lightning", fmt_raw(week.max_lightning_strikes, "")),
        StatEntry::new("Total Lightning", fmt_raw(week.total_lightning_strikes, ""))
            .with_trend(trend_for(trends, "total_lightning_strikes")),
        StatEntry::new("Max PM10", fmt_raw(week.max_pm10, ""))
            .with_qualifier(pm10_qualifier(week.max_pm10)),
        StatEntry::new("Avg PM10", fmt_raw(week.avg_pm10, ""))
            .with_qualifier(pm10_qualifier(week.avg_pm10))
            .with_trend(trend_for(trends, "avg_pm10")),
    ];

    WeeklyCard {
        range: week_range(week),
        stats,
    }
}
