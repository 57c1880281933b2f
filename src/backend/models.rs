use serde::{Deserialize, Serialize};

/// Response from `/api/data?period=...`.
///
/// Parallel arrays: every metric column is indexed by the same position in
/// `date_time`. Columns may be shorter than `date_time` or carry `null`/NaN
/// holes; consumers go through [`crate::series`] which tolerates both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleBatch {
    #[serde(rename = "dateTime", default)]
    pub date_time: Vec<String>,
    #[serde(rename = "inTemp", default)]
    pub in_temp: Vec<Option<f64>>,
    #[serde(rename = "outTemp", default)]
    pub out_temp: Vec<Option<f64>>,
    #[serde(rename = "inHumidity", default)]
    pub in_humidity: Vec<Option<f64>>,
    #[serde(rename = "outHumidity", default)]
    pub out_humidity: Vec<Option<f64>>,
    #[serde(default)]
    pub barometer: Vec<Option<f64>>,
    #[serde(default)]
    pub rain: Vec<Option<f64>>,
    #[serde(rename = "windSpeed", default)]
    pub wind_speed: Vec<Option<f64>>,
    #[serde(rename = "windDir", default)]
    pub wind_dir: Vec<Option<f64>>,
    #[serde(rename = "windChill", default)]
    pub wind_chill: Vec<Option<f64>>,
    #[serde(rename = "heatIndex", default)]
    pub heat_index: Vec<Option<f64>>,
    #[serde(default)]
    pub luminosity: Vec<Option<f64>>,
    #[serde(default)]
    pub uv: Vec<Option<f64>>,
    #[serde(default)]
    pub lightning_distance: Vec<Option<f64>>,
    #[serde(default)]
    pub lightning_strike_count: Vec<Option<f64>>,
    #[serde(default)]
    pub cloudbase: Vec<Option<f64>>,
}

/// Response from `/api/forecast`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub ai_forecast: Option<String>,
    #[serde(default)]
    pub ai_wind_forecast: Option<String>,
    #[serde(default)]
    pub predicted_min_temp: Option<f64>,
    #[serde(default)]
    pub predicted_min_temp_confidence: Option<f64>,
    #[serde(default)]
    pub predicted_min_temp_range: Option<String>,
    #[serde(default)]
    pub predicted_max_temp: Option<f64>,
    #[serde(default)]
    pub predicted_max_temp_confidence: Option<f64>,
    #[serde(default)]
    pub predicted_max_temp_range: Option<String>,
    #[serde(default)]
    pub chance_of_rain: Option<f64>,
    #[serde(default)]
    pub chance_of_rain_confidence: Option<f64>,
    #[serde(default)]
    pub chance_of_lightning: Option<f64>,
    #[serde(default)]
    pub chance_of_lightning_confidence: Option<f64>,
}

/// Response from `/api/training_days`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingDays {
    #[serde(default)]
    pub days: Option<i64>,
}

/// Response from `/api/rainfall_24h`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rainfall24h {
    #[serde(default)]
    pub total_rainfall_24h: Option<f64>,
}

/// Response from `/api/battery`: one entry per station component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryReport {
    #[serde(default)]
    pub console: Option<BatteryStatus>,
    #[serde(default)]
    pub outdoor: Option<BatteryStatus>,
    #[serde(default)]
    pub array: Option<BatteryStatus>,
    #[serde(default)]
    pub lightning: Option<BatteryStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryStatus {
    /// `"ok"` means healthy; anything else renders the low-battery variant.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub label: String,
}

/// Response from `/api/bar_metrics`.
///
/// Temperature and humidity arrive pre-formatted (`"25.5°C"`, `"60%"`);
/// the bar-area panel re-parses them before classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarMetrics {
    #[serde(default)]
    pub bar_area_temp: Option<String>,
    #[serde(default)]
    pub bar_area_humidity: Option<String>,
    #[serde(default)]
    pub outside_co2: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
}

/// Response from `/api/weather_condition` (external condition lookup).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionReport {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Response from `/api/qfd_alerts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFeed {
    #[serde(default)]
    pub alerts: Vec<AlertRecord>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(default)]
    pub warning_level: String,
    #[serde(default)]
    pub warning_title: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub warning_area: String,
    #[serde(default)]
    pub current_status: String,
    #[serde(default)]
    pub publish_date: String,
}

/// Response from `/api/bom_warnings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarningFeed {
    #[serde(default)]
    pub marine_warnings: Vec<WarningRecord>,
    #[serde(default)]
    pub land_warnings: Vec<WarningRecord>,
    #[serde(default)]
    pub marine_count: i64,
    #[serde(default)]
    pub land_count: i64,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarningRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: Option<String>,
}

/// Response from `/api/top_stats` (all-time records).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopStats {
    #[serde(default)]
    pub first_date: Option<String>,
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[serde(default)]
    pub max_temp_date: Option<String>,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub min_temp_date: Option<String>,
    #[serde(default)]
    pub max_humidity: Option<f64>,
    #[serde(default)]
    pub max_humidity_temp: Option<f64>,
    #[serde(default)]
    pub max_humidity_date: Option<String>,
    #[serde(default)]
    pub max_wind_gust: Option<f64>,
    #[serde(default)]
    pub max_wind_gust_direction: Option<String>,
    #[serde(default)]
    pub max_wind_gust_date: Option<String>,
    #[serde(default)]
    pub max_rainfall: Option<f64>,
    #[serde(default)]
    pub max_rainfall_date: Option<String>,
    #[serde(default)]
    pub max_uv: Option<f64>,
    #[serde(default)]
    pub max_uv_risk: Option<String>,
    #[serde(default)]
    pub max_uv_date: Option<String>,
    #[serde(default)]
    pub max_pm10: Option<f64>,
    #[serde(default)]
    pub max_pm10_level: Option<String>,
    #[serde(default)]
    pub max_pm10_date: Option<String>,
    #[serde(default)]
    pub max_lightning: Option<f64>,
    #[serde(default)]
    pub max_lightning_date: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `/api/weather_24h` (rolling 24-hour extremes).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Weather24h {
    #[serde(default)]
    pub max_temp_24h: Option<f64>,
    #[serde(default)]
    pub min_temp_24h: Option<f64>,
    #[serde(default)]
    pub max_wind_gust_24h: Option<f64>,
    #[serde(default)]
    pub max_wind_gust_direction_24h: Option<String>,
    #[serde(default)]
    pub total_rainfall_24h: Option<f64>,
}

/// Response from `/api/tides`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TideTable {
    #[serde(default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub station_source: Option<String>,
    #[serde(default)]
    pub station_distance: Option<String>,
    #[serde(default)]
    pub tides: Vec<TideEvent>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TideEvent {
    /// `"high"` or `"low"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub time_full: String,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub is_future: bool,
}

/// Response from `/api/dam-levels`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamReport {
    #[serde(default)]
    pub dams: Vec<DamRecord>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub volume_ml: f64,
    #[serde(default)]
    pub percent_full: f64,
    /// Display color chosen by the backend for this fill level.
    #[serde(default)]
    pub color: String,
}

/// Response from `/api/weekly_stats_trends`, and (without the trend maps)
/// from the legacy `/api/weekly_stats_current` / `_previous` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyTrends {
    #[serde(default)]
    pub current_week: Option<WeeklyStats>,
    #[serde(default)]
    pub previous_week: Option<WeeklyStats>,
    #[serde(default)]
    pub trends_current: Option<TrendSet>,
    #[serde(default)]
    pub trends_previous: Option<TrendSet>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyStats {
    #[serde(default)]
    pub week_start: Option<String>,
    #[serde(default)]
    pub week_end: Option<String>,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub min_humidity: Option<f64>,
    #[serde(default)]
    pub max_humidity: Option<f64>,
    #[serde(default)]
    pub avg_humidity: Option<f64>,
    #[serde(default)]
    pub min_pressure: Option<f64>,
    #[serde(default)]
    pub max_pressure: Option<f64>,
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    #[serde(default)]
    pub max_wind_gust: Option<f64>,
    #[serde(default)]
    pub max_wind_gust_direction: Option<String>,
    #[serde(default)]
    pub avg_wind_speed: Option<f64>,
    #[serde(default)]
    pub total_rainfall: Option<f64>,
    #[serde(default)]
    pub max_uv: Option<f64>,
    #[serde(default)]
    pub avg_uv: Option<f64>,
    #[serde(default)]
    pub max_lightning_strikes: Option<f64>,
    #[serde(default)]
    pub total_lightning_strikes: Option<f64>,
    #[serde(default)]
    pub max_pm10: Option<f64>,
    #[serde(default)]
    pub avg_pm10: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Week-over-week direction per metric: `"up"`, `"down"` or `"flat"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendSet {
    #[serde(default)]
    pub avg_temp: Option<String>,
    #[serde(default)]
    pub avg_humidity: Option<String>,
    #[serde(default)]
    pub avg_pressure: Option<String>,
    #[serde(default)]
    pub avg_wind_speed: Option<String>,
    #[serde(default)]
    pub total_rainfall: Option<String>,
    #[serde(default)]
    pub avg_uv: Option<String>,
    #[serde(default)]
    pub total_lightning_strikes: Option<String>,
    #[serde(default)]
    pub avg_pm10: Option<String>,
}

/// Response from `/api/comfort_levels`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComfortReport {
    #[serde(default)]
    pub dew_point: Option<f64>,
    #[serde(default)]
    pub heat_index: Option<f64>,
    #[serde(default)]
    pub wind_chill: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub comfort_rating: Option<String>,
    #[serde(default)]
    pub comfort_image: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `/api/capital_cities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapitalCities {
    #[serde(default)]
    pub cities: Vec<CityWeather>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityWeather {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_hour: Option<CityHour>,
    #[serde(default)]
    pub daily_forecast: Option<CityDaily>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityHour {
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub condition: Option<CityCondition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityCondition {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityDaily {
    #[serde(default)]
    pub maxtemp_c: Option<f64>,
    #[serde(default)]
    pub mintemp_c: Option<f64>,
}

/// Response from the external sunrise/sunset lookup.
///
/// `results` times are 12-hour clock strings ("5:32:10 AM") in the timezone
/// requested via `tzid`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SunLookup {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Option<SunResults>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SunResults {
    #[serde(default)]
    pub sunrise: String,
    #[serde(default)]
    pub sunset: String,
}
