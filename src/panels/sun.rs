//! Daily sunrise/sunset refresh: updates the shared sun window that gates
//! the camera, and the sunrise/sunset info line.

use crate::astro::{self, SunWindow};
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{PanelView, SunView};

/// Fetch today's sun times and swap in the new window.
///
/// On any failure the window is cleared (never half-updated), which makes
/// daylight gating fail open until the next successful refresh.
pub async fn refresh_sun_window(state: &AppState) -> AppResult<()> {
    let offset = state.local_offset();
    let today = astro::local_now(offset).date_naive();

    let window = match state.backend.sun_lookup().await {
        Ok(lookup) if lookup.status == "OK" => lookup
            .results
            .as_ref()
            .and_then(|results| SunWindow::from_lookup(results, today, offset)),
        Ok(lookup) => {
            tracing::warn!(status = %lookup.status, "Sun lookup returned a non-OK status");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Sun lookup failed");
            None
        }
    };

    state.dashboard.set_sun_window(window);

    match window {
        Some(window) => {
            state.panels.publish(
                id::SUN,
                PanelView::Sun(SunView {
                    sunrise: window.sunrise.format("%-I:%M:%S %p").to_string(),
                    sunset: window.sunset.format("%-I:%M:%S %p").to_string(),
                }),
            );
        }
        None => {
            state
                .panels
                .publish_error(id::SUN, "Sunrise/Sunset info unavailable.");
        }
    }

    Ok(())
}
