//! Cancellable repeating tick task.
//!
//! A [`Ticker`] owns one spawned tokio task that sends its generation number
//! down a channel once per period. It never touches timer state itself; the
//! owner applies each tick. Dropping or cancelling the ticker aborts the task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn onto the current tokio runtime. The first tick fires one full
    /// `period` after the call. A period too large to schedule never ticks.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(period: Duration, generation: u64, tx: UnboundedSender<u64>) -> Self {
        let handle = tokio::spawn(async move {
            let Some(first) = Instant::now().checked_add(period) else {
                tracing::warn!(?period, "tick period out of range, ticker idle");
                return;
            };
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(generation).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(generation, ?period, "ticker spawned");
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Abort the task. Equivalent to dropping the ticker.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.generation, "ticker cancelled");
    }
}
