//! The generic poll-task runner.
//!
//! Every data domain registers one [`PollTask`]: a name, a fixed period, the
//! panels it owns, and the refresh function. Each task ticks on its own
//! timer with an immediate first run; ticks are spawned fire-and-forget so a
//! slow fetch never delays the next tick of this or any other task, and a
//! failed tick publishes the error state for this task's panels only.
//!
//! There is deliberately no retry or backoff: the next scheduled tick is the
//! retry. Concurrent ticks of one task are possible when fetch latency
//! exceeds the period; last write wins at the panel store.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::interval;

use crate::common::AppState;
use crate::error::AppResult;

pub type TickFuture = Pin<Box<dyn Future<Output = AppResult<()>> + Send>>;
pub type TickFn = fn(AppState) -> TickFuture;

/// One named periodic refresh job.
#[derive(Clone, Copy)]
pub struct PollTask {
    pub name: &'static str,
    pub every: Duration,
    /// Panels this task writes; they get the error state when a tick fails.
    pub panels: &'static [&'static str],
    pub run: TickFn,
}

/// Spawn every task on its own timer.
pub fn spawn_all(state: &AppState, tasks: Vec<PollTask>) {
    for task in tasks {
        tokio::spawn(run_task(state.clone(), task));
    }
}

async fn run_task(state: AppState, task: PollTask) {
    tracing::info!(
        task = task.name,
        interval_secs = task.every.as_secs(),
        "Starting poll task"
    );

    let mut ticker = interval(task.every);

    loop {
        // First tick completes immediately.
        ticker.tick().await;
        tokio::spawn(run_tick(state.clone(), task));
    }
}

/// Run a single tick, containing any failure to this task's panels.
pub async fn run_tick(state: AppState, task: PollTask) {
    if let Err(e) = (task.run)(state.clone()).await {
        tracing::error!(task = task.name, error = %e, "Poll tick failed");
        for id in task.panels {
            state
                .panels
                .publish_error(id, format!("Failed to refresh: {e}"));
        }
    } else {
        tracing::debug!(task = task.name, "Poll tick completed");
    }
}
