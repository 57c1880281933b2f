//! Tides and dam-levels cards.

use chrono::NaiveDateTime;

use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{DamView, DamsView, PanelView, TideView, TidesView, group_thousands};

/// Refresh the tides card.
///
/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_tides(state: &AppState) -> AppResult<()> {
    let table = state.backend.tides().await?;

    if let Some(error) = table.error {
        state.panels.publish_error(id::TIDES, error);
        return Ok(());
    }

    let tides: Vec<TideView> = table
        .tides
        .into_iter()
        .map(|tide| {
            let kind = if tide.kind == "high" { "High Tide" } else { "Low Tide" };
            // "Thu, Aug 7 at 14:32" when the timestamp parses, raw otherwise.
            let when = NaiveDateTime::parse_from_str(&tide.time_full, "%Y-%m-%dT%H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(&tide.time_full, "%Y-%m-%d %H:%M:%S"))
                .map(|t| format!("{} at {}", t.format("%a, %b %-d"), t.format("%H:%M")))
                .unwrap_or_else(|_| tide.time_full.clone());
            TideView {
                kind: kind.to_string(),
                when,
                height: format!("{:.1}m", tide.height),
                upcoming: tide.is_future,
            }
        })
        .collect();

    let view = TidesView {
        station: table.station_name.unwrap_or_default(),
        source: table.station_source.unwrap_or_default(),
        distance: table.station_distance.unwrap_or_default(),
        tides,
    };
    state.panels.publish(id::TIDES, PanelView::Tides(view));
    Ok(())
}

/// Refresh the dam-levels card.
///
/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_dam_levels(state: &AppState) -> AppResult<()> {
    let report = state.backend.dam_levels().await?;

    if let Some(error) = report.error {
        state.panels.publish_error(id::DAM_LEVELS, error);
        return Ok(());
    }

    let dams: Vec<DamView> = report
        .dams
        .into_iter()
        .map(|dam| DamView {
            name: dam.name,
            volume: format!("{} ML", group_thousands(dam.volume_ml)),
            percent_full: format!("{:.1}%", dam.percent_full),
            color: dam.color,
        })
        .collect();

    let view = DamsView {
        dams,
        last_updated: report.last_updated,
    };
    state.panels.publish(id::DAM_LEVELS, PanelView::Dams(view));
    Ok(())
}
