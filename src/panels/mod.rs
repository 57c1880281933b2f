//! View updaters, one per dashboard card.
//!
//! Each updater pulls the latest valid readings for its domain, runs them
//! through the decision tables, and publishes one view model to its own
//! panel id. No two updaters write the same panel.

pub mod air;
pub mod alerts;
pub mod battery;
pub mod camera;
pub mod charts;
pub mod cities;
pub mod comfort;
pub mod conditions;
pub mod forecast;
pub mod marine;
pub mod stats;
pub mod sun;

/// Panel ids, mirroring the dashboard's card layout.
pub mod id {
    pub const INSIDE_TEMP: &str = "inside-temp";
    pub const OUTSIDE_TEMP: &str = "outside-temp";
    pub const HUMIDITY: &str = "humidity";
    pub const PRESSURE: &str = "pressure";
    pub const RAINFALL: &str = "rainfall";
    pub const WIND: &str = "wind";
    pub const WIND_CHILL: &str = "wind-chill";
    pub const HEAT_INDEX: &str = "heat-index";
    pub const LIGHTNING: &str = "lightning";
    pub const SOLAR: &str = "solar";
    pub const UV: &str = "uv";
    pub const CONDITIONS: &str = "conditions";
    pub const FORECAST: &str = "forecast";
    pub const BAR_AREA: &str = "bar-area";
    pub const OUTSIDE_CO2: &str = "outside-co2";
    pub const OUTSIDE_PM25: &str = "outside-pm25";
    pub const OUTSIDE_PM10: &str = "outside-pm10";
    pub const BAR_AREA_COMFORT: &str = "bar-area-comfort";
    pub const COMFORT_LEVELS: &str = "comfort-levels";
    pub const BATTERY: &str = "battery";
    pub const CAMERA: &str = "camera";
    pub const TIMELAPSE: &str = "timelapse";
    pub const ALERTS: &str = "alerts";
    pub const WARNINGS: &str = "warnings";
    pub const TOP_STATS: &str = "top-stats";
    pub const TIDES: &str = "tides";
    pub const DAM_LEVELS: &str = "dam-levels";
    pub const WEEKLY_STATS: &str = "weekly-stats";
    pub const CAPITAL_CITIES: &str = "capital-cities";
    pub const SUN: &str = "sun";
}
