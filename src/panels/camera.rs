//! Weather-camera snapshot and timelapse cards.
//!
//! The camera card is gated on the daylight window: outside it the card
//! shows its offline overlay and no fetches are made for the snapshot.

use chrono::Utc;

use crate::astro;
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{CameraView, PanelView, TimelapseView};

const SNAPSHOT_PATH: &str = "/static/images/latest.jpg";
const TIMELAPSE_PATH: &str = "/static/videos/latest_tl.mp4";

/// Refresh the camera card, cache-busting the snapshot URL while active.
pub async fn refresh_camera(state: &AppState) -> AppResult<()> {
    let now = astro::local_now(state.local_offset());
    let active = astro::is_within_daylight_window(now, state.dashboard.sun_window().as_ref());

    if !active {
        state.panels.publish(
            id::CAMERA,
            PanelView::Camera(CameraView {
                active: false,
                image_url: None,
                captured: None,
            }),
        );
        return Ok(());
    }

    // "As of" caption from the asset's Last-Modified; absent when the HEAD
    // request fails or the header is missing.
    let captured = match state.backend.head_last_modified(SNAPSHOT_PATH).await {
        Ok(Some(modified)) => Some(format!(
            "SE Aspect as at {}",
            modified
                .with_timezone(&state.local_offset())
                .format("%d %b %Y, %H:%M")
        )),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Snapshot HEAD request failed");
            None
        }
    };

    let view = CameraView {
        active: true,
        image_url: Some(format!("{SNAPSHOT_PATH}?t={}", Utc::now().timestamp_millis())),
        captured,
    };
    state.panels.publish(id::CAMERA, PanelView::Camera(view));
    Ok(())
}

/// Refresh the timelapse card's date caption.
pub async fn refresh_timelapse(state: &AppState) -> AppResult<()> {
    let date = match state.backend.head_last_modified(TIMELAPSE_PATH).await {
        Ok(Some(modified)) => Some(
            modified
                .with_timezone(&state.local_offset())
                .format("%d %b %Y")
                .to_string(),
        ),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Timelapse HEAD request failed");
            None
        }
    };

    state
        .panels
        .publish(id::TIMELAPSE, PanelView::Timelapse(TimelapseView { date }));
    Ok(())
}
