//! Panel view models and the store they are published into.
//!
//! The store is the service's stand-in for the dashboard DOM: each updater
//! owns exactly one panel id and overwrites its view wholesale on every
//! refresh. Consumers read the whole set (or one panel) over HTTP and handle
//! the actual drawing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use utoipa::ToSchema;

use crate::chart::ChartSpec;
use crate::classify::{AlertPalette, Scale, TrendCue};

/// Placeholder shown wherever a reading is missing or invalid.
pub const PLACEHOLDER: &str = "--";

/// Format a reading with a unit suffix, or the placeholder when absent.
///
/// `fmt_reading(Some(21.43), 1, "°C")` → `"21.4 °C"`;
/// `fmt_reading(None, 1, "°C")` → `"-- °C"`.
#[must_use]
pub fn fmt_reading(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) => {
            if unit.is_empty() {
                format!("{v:.decimals$}")
            } else {
                format!("{v:.decimals$} {unit}")
            }
        }
        None => {
            if unit.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                format!("{PLACEHOLDER} {unit}")
            }
        }
    }
}

/// Like [`fmt_reading`] but with no space before the unit (`"21.4°C"`,
/// `"--%"`), matching how the compact cards have always printed.
#[must_use]
pub fn fmt_compact(value: Option<f64>, decimals: usize, unit: &str) -> String {
    match value.filter(|v| !v.is_nan()) {
        Some(v) => format!("{v:.decimals$}{unit}"),
        None => format!("{PLACEHOLDER}{unit}"),
    }
}

/// Group an integer-valued quantity with thousands separators ("1,234,567").
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 { format!("-{grouped}") } else { grouped }
}

/// One published panel: its view plus when it was last written.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Panel {
    #[schema(value_type = String)]
    pub id: &'static str,
    pub updated_at: DateTime<Utc>,
    pub view: PanelView,
}

/// The view model for a single dashboard card.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelView {
    /// A time-series chart card with its latest-reading overlay.
    Chart { overlay: String, chart: ChartSpec },
    Conditions(ConditionsView),
    Forecast(ForecastView),
    Uv(UvView),
    AirQuality(AirQualityView),
    BarArea(BarAreaView),
    ComfortScale(ComfortScaleView),
    ComfortLevels(ComfortLevelsView),
    Battery(BatteryView),
    Camera(CameraView),
    Timelapse(TimelapseView),
    Alerts(AlertsView),
    Warnings(WarningsView),
    TopStats(TopStatsView),
    Tides(TidesView),
    Dams(DamsView),
    WeeklyStats(WeeklyStatsView),
    Cities(CitiesView),
    Sun(SunView),
    /// The card's well-defined error state; replaces the content until the
    /// next successful tick.
    Error { message: String },
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConditionsView {
    pub condition: String,
    /// Icon URL from the external lookup, when it supplied one.
    pub icon: Option<String>,
    /// Local image asset, used when no external icon is available.
    #[schema(value_type = Option<String>)]
    pub image: Option<&'static str>,
    pub temperature: String,
    pub pressure: String,
    pub rain_24h: String,
    pub uv: String,
    pub humidity: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub lightning_strikes: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastView {
    /// AI forecast with the wind phrase appended ("Sunny and calm").
    pub summary: Option<String>,
    pub image: Option<String>,
    pub predicted_min: Option<String>,
    pub predicted_min_range: Option<String>,
    pub predicted_max: Option<String>,
    pub predicted_max_range: Option<String>,
    pub chance_of_rain: Option<String>,
    pub chance_of_lightning: Option<String>,
    pub training_days: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UvView {
    pub index: String,
    pub risk: String,
    #[schema(value_type = String)]
    pub image: &'static str,
    #[schema(value_type = String)]
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AirQualityView {
    #[schema(value_type = String)]
    pub metric: &'static str,
    pub value: String,
    pub scale: Scale,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BarAreaView {
    pub temperature: String,
    pub humidity: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComfortScaleView {
    pub rating: Option<Scale>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComfortLevelsView {
    pub dew_point: String,
    pub heat_index: String,
    pub wind_chill: String,
    pub feels_like: String,
    pub rating: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatteryView {
    pub components: Vec<BatteryCell>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatteryCell {
    #[schema(value_type = String)]
    pub component: &'static str,
    pub healthy: bool,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CameraView {
    /// False outside the daylight window; the card shows its offline overlay.
    pub active: bool,
    /// Cache-busted snapshot URL, only while active.
    pub image_url: Option<String>,
    /// "SE Aspect as at ..." caption from the asset's Last-Modified.
    pub captured: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimelapseView {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlertsView {
    pub alerts: Vec<AlertView>,
    pub all_clear: bool,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlertView {
    pub level: String,
    pub title: String,
    pub header: String,
    pub locality: String,
    pub area: String,
    pub status: String,
    pub published: String,
    pub palette: AlertPalette,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WarningsView {
    pub marine_count: i64,
    pub land_count: i64,
    pub marine: Vec<WarningView>,
    pub land: Vec<WarningView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WarningView {
    pub title: String,
    pub link: Option<String>,
    pub description: String,
    pub published: Option<String>,
}

/// A labeled statistic row, shared by the records card, its ticker feed and
/// the weekly cards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatEntry {
    #[schema(value_type = String)]
    pub label: &'static str,
    pub value: String,
    /// Rating/qualifier in parentheses, e.g. "(Very High)".
    pub qualifier: Option<String>,
    pub date: Option<String>,
    pub trend: Option<TrendCue>,
}

impl StatEntry {
    #[must_use]
    pub fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            qualifier: None,
            date: None,
            trend: None,
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Option<String>) -> Self {
        self.qualifier = qualifier;
        self
    }

    #[must_use]
    pub fn with_trend(mut self, trend: Option<TrendCue>) -> Self {
        self.trend = trend;
        self
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopStatsView {
    pub since: String,
    pub records: Vec<StatEntry>,
    pub ticker: Vec<StatEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TidesView {
    pub station: String,
    pub source: String,
    pub distance: String,
    pub tides: Vec<TideView>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TideView {
    pub kind: String,
    pub when: String,
    pub height: String,
    pub upcoming: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DamsView {
    pub dams: Vec<DamView>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DamView {
    pub name: String,
    pub volume: String,
    pub percent_full: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeeklyStatsView {
    pub current: Option<WeeklyCard>,
    pub previous: Option<WeeklyCard>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeeklyCard {
    pub range: String,
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CitiesView {
    pub cities: Vec<CityView>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CityView {
    pub name: String,
    pub condition: Option<String>,
    pub icon: Option<String>,
    pub current: String,
    pub max: String,
    pub min: String,
    /// "ok", "incomplete" or "error".
    #[schema(value_type = String)]
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SunView {
    pub sunrise: String,
    pub sunset: String,
}

/// The shared panel store. One writer task per panel id, any number of
/// HTTP readers.
#[derive(Debug, Default)]
pub struct PanelStore {
    panels: RwLock<HashMap<&'static str, Panel>>,
}

impl PanelStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a fresh view for a panel, replacing whatever was there.
    pub fn publish(&self, id: &'static str, view: PanelView) {
        let panel = Panel {
            id,
            updated_at: Utc::now(),
            view,
        };
        self.panels
            .write()
            .expect("panel store lock poisoned")
            .insert(id, panel);
    }

    /// Publish the panel's error state. Other panels are untouched.
    pub fn publish_error(&self, id: &'static str, message: impl Into<String>) {
        self.publish(
            id,
            PanelView::Error {
                message: message.into(),
            },
        );
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Panel> {
        self.panels
            .read()
            .expect("panel store lock poisoned")
            .get(id)
            .cloned()
    }

    /// All panels, ordered by id for a stable response shape.
    #[must_use]
    pub fn all(&self) -> Vec<Panel> {
        let mut panels: Vec<Panel> = self
            .panels
            .read()
            .expect("panel store lock poisoned")
            .values()
            .cloned()
            .collect();
        panels.sort_by_key(|p| p.id);
        panels
    }
}
