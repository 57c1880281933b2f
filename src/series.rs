//! Sample-series primitives: the requested period, timestamp parsing, and
//! latest-valid-reading extraction over the backend's parallel arrays.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::backend::models::SampleBatch;

/// Timestamp format used by the backend's `dateTime` column.
pub const SAMPLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The process-wide chart period selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "72h")]
    ThreeDays,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "28d")]
    FourWeeks,
}

impl Period {
    /// The query-string value the backend expects.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::ThreeDays => "72h",
            Self::Week => "7d",
            Self::FourWeeks => "28d",
        }
    }

    /// Human label shown on period-scoped chart cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Last 24 hours",
            Self::ThreeDays => "Last 72 hours",
            Self::Week => "Last 7 days",
            Self::FourWeeks => "Last 28 days",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "24h" => Some(Self::Day),
            "72h" => Some(Self::ThreeDays),
            "7d" => Some(Self::Week),
            "28d" => Some(Self::FourWeeks),
            _ => None,
        }
    }
}

/// The last valid reading in a column, scanning from the end.
///
/// Skips trailing `None` and NaN holes. `None` when the column is empty or
/// holds no finite value at all.
#[must_use]
pub fn last_valid(values: &[Option<f64>]) -> Option<f64> {
    values
        .iter()
        .rev()
        .copied()
        .find_map(|v| v.filter(|x| !x.is_nan()))
}

/// Parse the batch's `dateTime` column into station-local timestamps.
///
/// Unparseable entries become `None` holes so index alignment with the
/// metric columns is preserved.
#[must_use]
pub fn parse_timestamps(
    batch: &SampleBatch,
    offset: FixedOffset,
) -> Vec<Option<DateTime<FixedOffset>>> {
    batch
        .date_time
        .iter()
        .map(|s| {
            NaiveDateTime::parse_from_str(s, SAMPLE_TIME_FORMAT)
                .ok()
                .and_then(|naive| offset.from_local_datetime(&naive).single())
        })
        .collect()
}

impl SampleBatch {
    /// Metric columns in backend order, keyed by their wire names.
    ///
    /// Used for CSV export and anywhere the batch is walked generically.
    #[must_use]
    pub fn columns(&self) -> [(&'static str, &[Option<f64>]); 15] {
        [
            ("inTemp", self.in_temp.as_slice()),
            ("outTemp", self.out_temp.as_slice()),
            ("inHumidity", self.in_humidity.as_slice()),
            ("outHumidity", self.out_humidity.as_slice()),
            ("barometer", self.barometer.as_slice()),
            ("rain", self.rain.as_slice()),
            ("windSpeed", self.wind_speed.as_slice()),
            ("windDir", self.wind_dir.as_slice()),
            ("windChill", self.wind_chill.as_slice()),
            ("heatIndex", self.heat_index.as_slice()),
            ("luminosity", self.luminosity.as_slice()),
            ("uv", self.uv.as_slice()),
            ("lightning_distance", self.lightning_distance.as_slice()),
            ("lightning_strike_count", self.lightning_strike_count.as_slice()),
            ("cloudbase", self.cloudbase.as_slice()),
        ]
    }

    /// Value of a column at `index`, tolerating short columns and holes.
    #[must_use]
    pub fn value_at(column: &[Option<f64>], index: usize) -> Option<f64> {
        column
            .get(index)
            .copied()
            .flatten()
            .filter(|v| !v.is_nan())
    }
}
