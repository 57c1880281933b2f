//! Emergency alerts and weather warnings cards.

use crate::classify;
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{AlertView, AlertsView, PanelView, WarningView, WarningsView};

/// Refresh the fire-department alerts card.
///
/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_alerts(state: &AppState) -> AppResult<()> {
    let feed = state.backend.qfd_alerts().await?;

    if let Some(error) = feed.error {
        state.panels.publish_error(id::ALERTS, error);
        return Ok(());
    }

    let alerts: Vec<AlertView> = feed
        .alerts
        .into_iter()
        .map(|alert| AlertView {
            palette: classify::alert_palette(&alert.warning_level),
            level: alert.warning_level,
            title: alert.warning_title,
            header: alert.header,
            locality: alert.locality,
            area: alert.warning_area,
            status: alert.current_status,
            published: alert.publish_date,
        })
        .collect();

    let view = AlertsView {
        all_clear: alerts.is_empty(),
        alerts,
        last_updated: feed.last_updated,
    };
    state.panels.publish(id::ALERTS, PanelView::Alerts(view));
    Ok(())
}

/// Refresh the marine/land warnings card.
///
/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_warnings(state: &AppState) -> AppResult<()> {
    let feed = state.backend.bom_warnings().await?;

    if let Some(error) = feed.error {
        state.panels.publish_error(id::WARNINGS, error);
        return Ok(());
    }

    let to_view = |records: Vec<crate::backend::models::WarningRecord>| -> Vec<WarningView> {
        records
            .into_iter()
            .map(|w| WarningView {
                title: w.title,
                link: w.link,
                description: w.description,
                published: w.pub_date,
            })
            .collect()
    };

    let view = WarningsView {
        marine_count: feed.marine_count,
        land_count: feed.land_count,
        marine: to_view(feed.marine_warnings),
        land: to_view(feed.land_warnings),
    };
    state.panels.publish(id::WARNINGS, PanelView::Warnings(view));
    Ok(())
}
