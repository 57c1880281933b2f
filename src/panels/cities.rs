//! Capital-cities weather card.

use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{CitiesView, CityView, PLACEHOLDER, PanelView, fmt_compact};

/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_capital_cities(state: &AppState) -> AppResult<()> {
    let report = state.backend.capital_cities().await?;

    if let Some(error) = report.error {
        state.panels.publish_error(id::CAPITAL_CITIES, error);
        return Ok(());
    }

    let cities: Vec<CityView> = report
        .cities
        .into_iter()
        .map(|city| {
            if city.error.is_some() {
                return CityView {
                    name: city.name,
                    condition: None,
                    icon: None,
                    current: PLACEHOLDER.to_string(),
                    max: PLACEHOLDER.to_string(),
                    min: PLACEHOLDER.to_string(),
                    status: "error",
                };
            }

            match (city.current_hour, city.daily_forecast) {
                (Some(hour), Some(daily)) => CityView {
                    name: city.name,
                    condition: hour.condition.as_ref().and_then(|c| c.text.clone()),
                    icon: hour.condition.as_ref().and_then(|c| c.icon.clone()),
                    current: fmt_compact(hour.temp_c, 1, "°C"),
                    max: fmt_compact(daily.maxtemp_c, 1, "°C"),
                    min: fmt_compact(daily.mintemp_c, 1, "°C"),
                    status: "ok",
                },
                _ => CityView {
                    name: city.name,
                    condition: None,
                    icon: None,
                    current: PLACEHOLDER.to_string(),
                    max: PLACEHOLDER.to_string(),
                    min: PLACEHOLDER.to_string(),
                    status: "incomplete",
                },
            }
        })
        .collect();

    let view = CitiesView {
        cities,
        last_updated: report.last_updated,
    };
    state.panels.publish(id::CAPITAL_CITIES, PanelView::Cities(view));
    Ok(())
}
