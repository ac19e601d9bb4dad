use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use chrono::{Local, NaiveTime};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::Schedule;
use crate::worker::PunchCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    due: Instant,
    at: NaiveTime,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.due.cmp(&other.due).then(self.at.cmp(&other.at))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// One-shot wall-clock scheduler.
///
/// Entries sit in a min-heap keyed by due instant; a single loop sleeps
/// until the earliest entry and dispatches it to the worker. Target times
/// already in the past fire immediately.
#[derive(Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Entry>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm one entry for the wall-clock time `at`.
    pub fn schedule(&mut self, at: NaiveTime) {
        let now = Local::now().time();
        // Negative delays clamp to zero: an elapsed target fires right away.
        let delay = (at - now).to_std().unwrap_or(Duration::ZERO);
        debug!("armed entry for {} (fires in {delay:?})", at.format("%H:%M"));
        self.queue.push(Reverse(Entry {
            due: Instant::now() + delay,
            at,
        }));
    }

    /// Arm every target the schedule still needs once the work start has
    /// been recorded: each break boundary and the work end.
    pub fn schedule_remaining(&mut self, schedule: &Schedule) {
        for at in schedule.remaining_targets() {
            self.schedule(at);
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drain the heap in due order, sending one command per entry.
    /// Ends when the heap is empty or the worker has gone away.
    pub async fn run(mut self, commands: mpsc::Sender<PunchCommand>) {
        info!("scheduler running with {} pending entries", self.queue.len());
        while let Some(Reverse(entry)) = self.queue.pop() {
            tokio::time::sleep_until(entry.due).await;
            if commands.send(PunchCommand { at: entry.at }).await.is_err() {
                debug!("worker dropped, abandoning remaining entries");
                break;
            }
        }
        info!("scheduler drained");
    }
}
