//! Decision tables mapping raw readings to display categories.
//!
//! Every function here is pure and total over `f64` (NaN, infinities and
//! out-of-range values included): bad input lands in an explicit Unknown
//! category or `None`, never a panic. Band boundaries are user-visible
//! behavior and are kept exactly as the dashboard has always drawn them.

use serde::Serialize;
use utoipa::ToSchema;

/// A classified reading: category label plus its display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Scale {
    #[schema(value_type = String)]
    pub label: &'static str,
    #[schema(value_type = String)]
    pub image: &'static str,
    #[schema(value_type = String)]
    pub color: &'static str,
}

const SCALE_GOOD: Scale = Scale { label: "Good", image: "Good.png", color: "#d4f7d4" };
const SCALE_MODERATE: Scale = Scale { label: "Moderate", image: "Moderate.png", color: "#fff9c4" };
const SCALE_POOR: Scale = Scale { label: "Poor", image: "Poor.png", color: "#ffe0b2" };
const SCALE_UNHEALTHY: Scale = Scale { label: "Unhealthy", image: "Unhealthy.png", color: "#ffcdd2" };
const SCALE_SEVERE: Scale = Scale { label: "Severe", image: "Severe.png", color: "#b3e5fc" };
const SCALE_HAZARDOUS: Scale = Scale { label: "Hazardous", image: "Hazardous.png", color: "#e1bee7" };
const SCALE_UNKNOWN: Scale = Scale { label: "Unknown", image: "unknown.jpg", color: "#f8fafc" };

/// CO₂ concentration (ppm) to air-quality scale.
///
/// Lower bounds inclusive, upper bounds exclusive.
#[must_use]
pub fn co2_level(ppm: f64) -> Scale {
    if ppm.is_nan() || ppm < 0.0 {
        SCALE_UNKNOWN
    } else if ppm < 350.0 {
        SCALE_GOOD
    } else if ppm < 1000.0 {
        SCALE_MODERATE
    } else if ppm < 2000.0 {
        SCALE_POOR
    } else if ppm < 5000.0 {
        SCALE_UNHEALTHY
    } else if ppm < 40000.0 {
        SCALE_SEVERE
    } else {
        SCALE_HAZARDOUS
    }
}

/// Particulate concentration (µg/m³) to air-quality scale.
///
/// Shared by PM2.5 and PM10. Lower bounds exclusive, upper bounds inclusive
/// (12.0 is still Good, 12.01 is Moderate).
#[must_use]
pub fn particulate_level(ug_m3: f64) -> Scale {
    if ug_m3.is_nan() || ug_m3 < 0.0 {
        SCALE_UNKNOWN
    } else if ug_m3 <= 12.0 {
        SCALE_GOOD
    } else if ug_m3 <= 35.4 {
        SCALE_MODERATE
    } else if ug_m3 <= 55.4 {
        SCALE_POOR
    } else if ug_m3 <= 150.4 {
        SCALE_UNHEALTHY
    } else if ug_m3 <= 250.4 {
        SCALE_SEVERE
    } else {
        SCALE_HAZARDOUS
    }
}

/// A UV index reading classified for the UV card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct UvInfo {
    /// The index rounded to a whole number, as displayed.
    pub index: i64,
    #[schema(value_type = String)]
    pub risk: &'static str,
    #[schema(value_type = String)]
    pub time_to_burn: &'static str,
    #[schema(value_type = String)]
    pub image: &'static str,
    #[schema(value_type = String)]
    pub color: &'static str,
}

/// UV index to risk level with its time-to-sunburn text.
///
/// The index is rounded to an integer first; `None` for NaN input.
#[must_use]
pub fn uv_level(uv: f64) -> Option<UvInfo> {
    if uv.is_nan() {
        return None;
    }
    let index = uv.round() as i64;

    let (risk, time_to_burn, image, color) = if index <= 2 {
        ("Low", "60+ minutes to sunburn", "Good.png", "#d4f7d4")
    } else if index <= 5 {
        ("Moderate", "30 to 45 minutes to sunburn", "Moderate.png", "#fff9c4")
    } else if index <= 7 {
        ("High", "15 to 25 minutes to sunburn", "Poor.png", "#ffe0b2")
    } else if index <= 10 {
        ("Very High", "10 to 15 minutes to sunburn", "Unhealthy.png", "#ffcdd2")
    } else {
        ("Extreme", "less than 10 minutes to sunburn", "Hazardous.png", "#e1bee7")
    };

    Some(UvInfo { index, risk, time_to_burn, image, color })
}

/// UV risk label alone, for suffixes like `(Moderate)` on stats rows.
#[must_use]
pub fn uv_risk(uv: f64) -> Option<&'static str> {
    uv_level(uv).map(|info| info.risk)
}

/// Ticker-feed UV rating. The ticker has always used its own coarser
/// thresholds; they differ from the UV card on purpose.
#[must_use]
pub fn uv_rating(uv: f64) -> &'static str {
    if uv.is_nan() {
        "Unknown"
    } else if uv >= 11.0 {
        "Extreme"
    } else if uv >= 8.0 {
        "Very High"
    } else if uv >= 6.0 {
        "High"
    } else if uv >= 3.0 {
        "Moderate"
    } else {
        "Low"
    }
}

/// Ticker-feed PM10 rating (label only, same boundaries as
/// [`particulate_level`]).
#[must_use]
pub fn pm10_rating(pm10: f64) -> &'static str {
    if pm10.is_nan() {
        "Unknown"
    } else if pm10 > 250.4 {
        "Hazardous"
    } else if pm10 > 150.4 {
        "Severe"
    } else if pm10 > 55.4 {
        "Unhealthy"
    } else if pm10 > 35.4 {
        "Poor"
    } else if pm10 > 12.0 {
        "Moderate"
    } else {
        "Good"
    }
}

/// Bar-area comfort from temperature (°C) and relative humidity (%).
///
/// `None` when either reading is NaN.
#[must_use]
pub fn comfort_level(temp: f64, humidity: f64) -> Option<Scale> {
    if temp.is_nan() || humidity.is_nan() {
        return None;
    }

    let scale = if temp < 21.0 {
        Scale { label: "Chilly", image: "Cold.png", color: "#e6f3ff" }
    } else if temp <= 27.0 {
        if humidity < 50.0 {
            Scale { label: "Perfect", image: "Perfect.png", color: "#d4f7d4" }
        } else {
            Scale { label: "Good", image: "Good.png", color: "#90EE90" }
        }
    } else if temp <= 30.0 {
        Scale { label: "Reasonable", image: "Moderate.png", color: "#fff9c4" }
    } else if temp <= 33.0 {
        Scale { label: "Toasty", image: "Hot.png", color: "#ffcccc" }
    } else {
        Scale { label: "Way too hot!", image: "TooHot.png", color: "#ff0000" }
    };

    Some(scale)
}

/// Wind direction (degrees) to an 8-point compass bearing.
///
/// 22.5° sectors with the wrap at 337.5/0, so 0.0, 359.9 and 360.0 are all
/// `N`. `None` outside 0–360 or for NaN.
#[must_use]
pub fn compass_point(deg: f64) -> Option<&'static str> {
    if deg.is_nan() || !(0.0..=360.0).contains(&deg) {
        return None;
    }
    if deg >= 337.5 || deg < 22.5 {
        Some("N")
    } else if deg < 67.5 {
        Some("NE")
    } else if deg < 112.5 {
        Some("E")
    } else if deg < 157.5 {
        Some("SE")
    } else if deg < 202.5 {
        Some("S")
    } else if deg < 247.5 {
        Some("SW")
    } else if deg < 292.5 {
        Some("W")
    } else {
        Some("NW")
    }
}

const COMPASS_16: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Wind direction (degrees) to a 16-point compass bearing.
///
/// `round(deg / 22.5) mod 16`, wrapping for any finite input.
#[must_use]
pub fn compass_point16(deg: f64) -> Option<&'static str> {
    if !deg.is_finite() {
        return None;
    }
    let index = ((deg / 22.5).round() as i64).rem_euclid(16) as usize;
    Some(COMPASS_16[index])
}

/// Inputs for the daytime condition rule chain. Units are what the panels
/// feed in: km for lightning distance, metres for cloudbase, km/h for wind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionInputs {
    pub luminosity: f64,
    pub rain: f64,
    pub wind_speed: f64,
    pub lightning_strike_count: f64,
    pub lightning_distance_km: f64,
    pub humidity: f64,
    pub cloudbase_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum DayCondition {
    Clear,
    ElectricalStorm,
    Storm,
    HeavyRain,
    Rain,
    Fog,
    Overcast,
    PartlyCloudy,
    Windy,
}

impl DayCondition {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::ElectricalStorm => "Electrical Storm",
            Self::Storm => "Storm",
            Self::HeavyRain => "Heavy Rain",
            Self::Rain => "Rain",
            Self::Fog => "Fog",
            Self::Overcast => "Overcast",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Windy => "Windy",
        }
    }

    /// Image asset for the condition. File names match the deployed asset
    /// set, misspellings included.
    #[must_use]
    pub fn image(self) -> &'static str {
        match self {
            Self::Clear => "Clear.png",
            Self::ElectricalStorm => "Electrical_strom.png",
            Self::Storm => "Storm.png",
            Self::HeavyRain => "Heavy_rain.png",
            Self::Rain => "Rain.png",
            Self::Fog => "Fog.png",
            Self::Overcast => "Overcast.png",
            Self::PartlyCloudy => "Partly_cloudy.png",
            Self::Windy => "Windy.png",
        }
    }
}

/// Daytime weather condition from current readings.
///
/// Evaluated top to bottom, first match wins. The ordering is load-bearing:
/// a bright rain-free sky is Clear even when wind or humidity rules would
/// also match, and heavy rain with high wind is Storm, not Heavy Rain.
#[must_use]
pub fn day_condition(inputs: &ConditionInputs) -> DayCondition {
    let ConditionInputs {
        luminosity,
        rain,
        wind_speed,
        lightning_strike_count,
        lightning_distance_km,
        humidity,
        cloudbase_m,
    } = *inputs;

    if luminosity >= 30000.0 && rain == 0.0 && lightning_strike_count == 0.0 {
        DayCondition::Clear
    } else if lightning_strike_count >= 1.0 && lightning_distance_km < 15.0 && rain > 0.0 {
        DayCondition::ElectricalStorm
    } else if rain > 2.0 && wind_speed > 25.0 {
        DayCondition::Storm
    } else if rain > 2.0 {
        DayCondition::HeavyRain
    } else if rain > 0.0 {
        DayCondition::Rain
    } else if humidity > 95.0 && cloudbase_m < 100.0 {
        DayCondition::Fog
    } else if luminosity < 8.0 && cloudbase_m < 1000.0 {
        DayCondition::Overcast
    } else if (8.0..30.0).contains(&luminosity) && cloudbase_m < 3000.0 {
        DayCondition::PartlyCloudy
    } else if wind_speed > 20.0 {
        DayCondition::Windy
    } else {
        DayCondition::Clear
    }
}

/// Background and badge colors for an emergency-alert warning level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AlertPalette {
    #[schema(value_type = String)]
    pub background: &'static str,
    #[schema(value_type = String)]
    pub badge: &'static str,
}

/// Warning level (case-insensitive) to its alert styling.
#[must_use]
pub fn alert_palette(warning_level: &str) -> AlertPalette {
    match warning_level.to_lowercase().as_str() {
        "emergency warning" => AlertPalette { background: "#f8d7da", badge: "#dc3545" },
        "watch and act" => AlertPalette { background: "#fff3cd", badge: "#ffc107" },
        "advice" => AlertPalette { background: "#d1ecf1", badge: "#17a2b8" },
        "information" => AlertPalette { background: "#e2e3e5", badge: "#6c757d" },
        _ => AlertPalette { background: "#f8f9fa", badge: "#6c757d" },
    }
}

/// Week-over-week trend direction rendered as icon/color/text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrendCue {
    #[schema(value_type = Option<String>)]
    pub icon: Option<&'static str>,
    #[schema(value_type = String)]
    pub color: &'static str,
    #[schema(value_type = String)]
    pub text: &'static str,
}

/// `"up"` / `"down"` / anything else (treated as flat) to a trend cue.
#[must_use]
pub fn trend_cue(trend: &str) -> TrendCue {
    match trend {
        "up" => TrendCue { icon: Some("fa-arrow-up"), color: "#28a745", text: "(increasing)" },
        "down" => TrendCue { icon: Some("fa-arrow-down"), color: "#dc3545", text: "(decreasing)" },
        _ => TrendCue { icon: None, color: "#6c757d", text: "(stable)" },
    }
}

/// Phrase appended to the AI forecast text for the wind outlook.
#[must_use]
pub fn wind_phrase(ai_wind_forecast: &str) -> &'static str {
    match ai_wind_forecast {
        "Calm" => " and calm",
        "Light Breeze" => " with a light breeze",
        "Stiff Breeze" => " with a stiff breeze",
        "Windy" => " with windy conditions",
        "High Winds" => ". Caution: High Winds Possible!",
        _ => "",
    }
}
