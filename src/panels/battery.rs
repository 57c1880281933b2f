//! Battery status for the four station components.

use crate::backend::models::{BatteryReport, BatteryStatus};
use crate::common::AppState;
use crate::error::AppResult;
use crate::panels::id;
use crate::render::{BatteryCell, BatteryView, PanelView};

/// Map a battery report to its card view. Anything other than `"ok"`
/// renders the low-battery variant with the backend's label.
#[must_use]
pub fn battery_view(report: BatteryReport) -> BatteryView {
    let cell = |component: &'static str, status: Option<BatteryStatus>| {
        let status = status.unwrap_or_default();
        BatteryCell {
            component,
            healthy: status.status == "ok",
            label: status.label,
        }
    };

    BatteryView {
        components: vec![
            cell("console", report.console),
            cell("outdoor", report.outdoor),
            cell("array", report.array),
            cell("lightning", report.lightning),
        ],
    }
}

/// # Errors
///
/// Returns `AppError::Backend` when the fetch fails.
pub async fn refresh_battery(state: &AppState) -> AppResult<()> {
    let report = state.backend.battery().await?;
    state
        .panels
        .publish(id::BATTERY, PanelView::Battery(battery_view(report)));
    Ok(())
}
