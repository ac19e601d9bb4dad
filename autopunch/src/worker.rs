use async_trait::async_trait;
use chrono::NaiveTime;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::errors::AutomationError;

/// Anything that can record one clock-in/out entry at a time-of-day.
#[async_trait]
pub trait TimeClock: Send + Sync {
    async fn record_entry(&self, at: NaiveTime) -> Result<(), AutomationError>;
}

/// Instruction to record one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunchCommand {
    pub at: NaiveTime,
}

/// Single-owner worker for the browser session.
///
/// All scheduled entries funnel through this one loop, so the session is
/// never touched by two callers at once even when target times coincide.
/// A failed entry is dropped with a warning; later entries still run.
/// Returns the clock once the command channel closes.
pub async fn run_worker<C>(clock: C, mut commands: mpsc::Receiver<PunchCommand>) -> C
where
    C: TimeClock,
{
    while let Some(PunchCommand { at }) = commands.recv().await {
        debug!("worker picked up entry for {}", at.format("%H:%M"));
        if let Err(e) = clock.record_entry(at).await {
            warn!("entry at {} abandoned: {e}", at.format("%H:%M"));
        }
    }
    clock
}
