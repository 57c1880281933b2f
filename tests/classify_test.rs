//! Unit tests for the classification tables.
//!
//! Run with: cargo test --test classify_test

use pws_dash::classify::{
    self, ConditionInputs, DayCondition, alert_palette, co2_level, comfort_level, compass_point,
    compass_point16, day_condition, particulate_level, pm10_rating, trend_cue, uv_level, uv_rating,
};

#[test]
fn co2_bands_have_exact_boundaries() {
    assert_eq!(co2_level(0.0).label, "Good");
    assert_eq!(co2_level(349.999).label, "Good");
    assert_eq!(co2_level(350.0).label, "Moderate");
    assert_eq!(co2_level(999.9).label, "Moderate");
    assert_eq!(co2_level(1000.0).label, "Poor");
    assert_eq!(co2_level(2000.0).label, "Unhealthy");
    assert_eq!(co2_level(5000.0).label, "Severe");
    assert_eq!(co2_level(39_999.9).label, "Severe");
    assert_eq!(co2_level(40_000.0).label, "Hazardous");
    assert_eq!(co2_level(1e12).label, "Hazardous");
}

#[test]
fn co2_is_total_over_bad_input() {
    assert_eq!(co2_level(-1.0).label, "Unknown");
    assert_eq!(co2_level(f64::NAN).label, "Unknown");
    assert_eq!(co2_level(f64::INFINITY).label, "Hazardous");
}

#[test]
fn particulate_bands_are_lower_exclusive() {
    // 12.0 is still Good; anything past it is Moderate.
    assert_eq!(particulate_level(12.0).label, "Good");
    assert_eq!(particulate_level(12.01).label, "Moderate");
    assert_eq!(particulate_level(35.4).label, "Moderate");
    assert_eq!(particulate_level(35.41).label, "Poor");
    assert_eq!(particulate_level(55.4).label, "Poor");
    assert_eq!(particulate_level(150.4).label, "Unhealthy");
    assert_eq!(particulate_level(250.4).label, "Severe");
    assert_eq!(particulate_level(250.5).label, "Hazardous");
    assert_eq!(particulate_level(-0.1).label, "Unknown");
    assert_eq!(particulate_level(f64::NAN).label, "Unknown");
}

#[test]
fn every_finite_reading_gets_exactly_one_band() {
    let labels = ["Good", "Moderate", "Poor", "Unhealthy", "Severe", "Hazardous", "Unknown"];
    let mut v = -500.0;
    while v < 60_000.0 {
        assert!(labels.contains(&co2_level(v).label), "no band for CO2 {v}");
        assert!(labels.contains(&particulate_level(v).label), "no band for PM {v}");
        v += 7.3;
    }
}

#[test]
fn uv_levels_round_first() {
    let low = uv_level(2.4).unwrap();
    assert_eq!(low.risk, "Low");
    assert_eq!(low.index, 2);
    assert_eq!(low.time_to_burn, "60+ minutes to sunburn");

    // 2.6 rounds to 3, which is Moderate.
    assert_eq!(uv_level(2.6).unwrap().risk, "Moderate");
    assert_eq!(uv_level(5.0).unwrap().risk, "Moderate");
    assert_eq!(uv_level(7.0).unwrap().risk, "High");
    assert_eq!(uv_level(10.0).unwrap().risk, "Very High");
    assert_eq!(uv_level(10.5).unwrap().risk, "Extreme");
    assert_eq!(uv_level(11.0).unwrap().time_to_burn, "less than 10 minutes to sunburn");
    assert!(uv_level(f64::NAN).is_none());
}

#[test]
fn ticker_ratings_use_their_own_thresholds() {
    assert_eq!(uv_rating(5.9), "Moderate");
    assert_eq!(uv_rating(6.0), "High");
    assert_eq!(uv_rating(8.0), "Very High");
    assert_eq!(uv_rating(11.0), "Extreme");
    assert_eq!(uv_rating(f64::NAN), "Unknown");

    assert_eq!(pm10_rating(12.0), "Good");
    assert_eq!(pm10_rating(12.1), "Moderate");
    assert_eq!(pm10_rating(250.5), "Hazardous");
    assert_eq!(pm10_rating(f64::NAN), "Unknown");
}

#[test]
fn comfort_bands_split_on_humidity_in_the_pleasant_range() {
    assert_eq!(comfort_level(20.9, 40.0).unwrap().label, "Chilly");
    assert_eq!(comfort_level(21.0, 49.9).unwrap().label, "Perfect");
    assert_eq!(comfort_level(27.0, 50.0).unwrap().label, "Good");
    assert_eq!(comfort_level(27.1, 10.0).unwrap().label, "Reasonable");
    assert_eq!(comfort_level(30.1, 10.0).unwrap().label, "Toasty");
    assert_eq!(comfort_level(33.1, 10.0).unwrap().label, "Way too hot!");
    assert!(comfort_level(f64::NAN, 50.0).is_none());
    assert!(comfort_level(25.0, f64::NAN).is_none());
}

#[test]
fn compass_wraps_at_north() {
    assert_eq!(compass_point(0.0), Some("N"));
    assert_eq!(compass_point(359.9), Some("N"));
    assert_eq!(compass_point(360.0), Some("N"));
    assert_eq!(compass_point(337.5), Some("N"));
    assert_eq!(compass_point(337.4), Some("NW"));
    assert_eq!(compass_point(22.5), Some("NE"));
    assert_eq!(compass_point(90.0), Some("E"));
    assert_eq!(compass_point(180.0), Some("S"));
    assert_eq!(compass_point(270.0), Some("W"));
    assert_eq!(compass_point(-1.0), None);
    assert_eq!(compass_point(360.1), None);
    assert_eq!(compass_point(f64::NAN), None);
}

#[test]
fn compass_has_no_gaps() {
    let mut deg = 0.0;
    while deg <= 360.0 {
        assert!(compass_point(deg).is_some(), "gap at {deg}");
        assert!(compass_point16(deg).is_some(), "16-point gap at {deg}");
        deg += 0.1;
    }
}

#[test]
fn sixteen_point_compass_indexes_by_rounding() {
    assert_eq!(compass_point16(0.0), Some("N"));
    assert_eq!(compass_point16(11.24), Some("N"));
    assert_eq!(compass_point16(11.3), Some("NNE"));
    assert_eq!(compass_point16(22.5), Some("NNE"));
    assert_eq!(compass_point16(180.0), Some("S"));
    assert_eq!(compass_point16(360.0), Some("N"));
    assert_eq!(compass_point16(f64::NAN), None);
}

#[test]
fn bright_dry_sky_is_clear_before_anything_else() {
    // Wind and humidity rules would also match, but rule one wins.
    let inputs = ConditionInputs {
        luminosity: 35_000.0,
        rain: 0.0,
        wind_speed: 40.0,
        humidity: 99.0,
        cloudbase_m: 50.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&inputs), DayCondition::Clear);
}

#[test]
fn storm_outranks_heavy_rain() {
    let inputs = ConditionInputs {
        rain: 3.0,
        wind_speed: 30.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&inputs), DayCondition::Storm);

    let calmer = ConditionInputs {
        rain: 3.0,
        wind_speed: 10.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&calmer), DayCondition::HeavyRain);
}

#[test]
fn electrical_storm_needs_close_strikes_and_rain() {
    let inputs = ConditionInputs {
        lightning_strike_count: 2.0,
        lightning_distance_km: 10.0,
        rain: 1.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&inputs), DayCondition::ElectricalStorm);

    // Distant lightning with rain is just rain.
    let distant = ConditionInputs {
        lightning_strike_count: 2.0,
        lightning_distance_km: 20.0,
        rain: 1.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&distant), DayCondition::Rain);
}

#[test]
fn cloud_rules_fire_in_priority_order() {
    let fog = ConditionInputs {
        humidity: 96.0,
        cloudbase_m: 50.0,
        luminosity: 5.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&fog), DayCondition::Fog);

    let overcast = ConditionInputs {
        luminosity: 5.0,
        cloudbase_m: 500.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&overcast), DayCondition::Overcast);

    let partly = ConditionInputs {
        luminosity: 15.0,
        cloudbase_m: 2000.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&partly), DayCondition::PartlyCloudy);

    let windy = ConditionInputs {
        luminosity: 50.0,
        cloudbase_m: 5000.0,
        wind_speed: 25.0,
        ..Default::default()
    };
    assert_eq!(day_condition(&windy), DayCondition::Windy);

    assert_eq!(day_condition(&ConditionInputs::default()), DayCondition::Overcast);
}

#[test]
fn alert_palette_is_case_insensitive_with_a_neutral_default() {
    assert_eq!(alert_palette("Emergency Warning").badge, "#dc3545");
    assert_eq!(alert_palette("WATCH AND ACT").badge, "#ffc107");
    assert_eq!(alert_palette("advice").badge, "#17a2b8");
    assert_eq!(alert_palette("Information").badge, "#6c757d");
    assert_eq!(alert_palette("Something Else").background, "#f8f9fa");
}

#[test]
fn trend_cues_cover_all_directions() {
    assert_eq!(trend_cue("up").text, "(increasing)");
    assert_eq!(trend_cue("down").text, "(decreasing)");
    assert_eq!(trend_cue("flat").text, "(stable)");
    assert_eq!(trend_cue("garbage").text, "(stable)");
    assert!(trend_cue("flat").icon.is_none());
}

#[test]
fn wind_phrases_match_the_forecast_vocabulary() {
    assert_eq!(classify::wind_phrase("Calm"), " and calm");
    assert_eq!(classify::wind_phrase("High Winds"), ". Caution: High Winds Possible!");
    assert_eq!(classify::wind_phrase("unknown"), "");
}
