//! Chart view models and time-axis math.
//!
//! Pixel drawing is delegated to whatever charting library the consumer
//! embeds; this module only computes what that library needs: aligned tick
//! grids, series arrays, and the light/dark palettes.

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::series::SAMPLE_TIME_FORMAT;

/// Fixed trace palette shared by all chart cards.
pub mod colors {
    pub const GREEN_BLUE: &str = "#2A66B6";
    pub const POWDER_BLUE: &str = "#95B4D4";
    pub const TUFTS_BLUE: &str = "#4A87D1";
    pub const FIELD_DRAB: &str = "#6D6425";
    pub const GOLD: &str = "#F0CD28";
}

/// A labeled gridline position on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Tick {
    /// Axis position, in the same `YYYY-MM-DD HH:MM:SS` form as the data.
    pub value: String,
    /// `dd/mm` at local midnight, `HH:MM` elsewhere.
    pub label: String,
}

/// Tick marks on a fixed 6-hour grid aligned to local midnight.
///
/// Starts at the midnight at or before the first timestamp and runs through
/// the last, so gridlines line up across cards regardless of the sampling
/// cadence or the selected period.
#[must_use]
pub fn time_ticks(timestamps: &[DateTime<FixedOffset>]) -> Vec<Tick> {
    let (Some(first), Some(last)) = (timestamps.first(), timestamps.last()) else {
        return Vec::new();
    };

    let offset = *first.offset();
    let Some(midnight) = first
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| chrono::TimeZone::from_local_datetime(&offset, &naive).single())
    else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    let mut tick = midnight;
    while tick <= *last {
        let label = if tick.hour() == 0 {
            tick.format("%d/%m").to_string()
        } else {
            tick.format("%H:%M").to_string()
        };
        ticks.push(Tick {
            value: tick.format(SAMPLE_TIME_FORMAT).to_string(),
            label,
        });
        tick = tick + Duration::hours(6);
    }
    ticks
}

/// One trace on a chart: timestamps and values stay as parallel arrays so
/// holes keep their index alignment.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartSeries {
    pub name: String,
    #[schema(value_type = String)]
    pub color: &'static str,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    /// Secondary-axis flag for traces like rain rate on the rainfall card.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub secondary_axis: bool,
}

impl ChartSeries {
    #[must_use]
    pub fn new(name: &str, color: &'static str, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        Self {
            name: name.to_string(),
            color,
            x,
            y,
            secondary_axis: false,
        }
    }

    #[must_use]
    pub fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }
}

/// Everything the external charting capability needs to draw one card.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartSpec {
    pub series: Vec<ChartSeries>,
    pub ticks: Vec<Tick>,
    /// Period caption under the card title (e.g. "Last 24 hours").
    #[schema(value_type = String)]
    pub period_label: &'static str,
}

/// Dashboard theme. Controls chart chrome colors only, never the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Chrome colors for one theme: backgrounds, text, gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ThemePalette {
    #[schema(value_type = String)]
    pub paper_background: &'static str,
    #[schema(value_type = String)]
    pub plot_background: &'static str,
    #[schema(value_type = String)]
    pub font_color: &'static str,
    #[schema(value_type = String)]
    pub grid_color: &'static str,
    #[schema(value_type = String)]
    pub axis_color: &'static str,
}

impl Theme {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn palette(self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette {
                paper_background: "#ffffff",
                plot_background: "#ffffff",
                font_color: "#000000",
                grid_color: "#e1e5e9",
                axis_color: "#666666",
            },
            Self::Dark => ThemePalette {
                paper_background: "#333333",
                plot_background: "#333333",
                font_color: "#ffffff",
                grid_color: "#444444",
                axis_color: "#cccccc",
            },
        }
    }
}
