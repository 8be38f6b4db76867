//! Screen-owned study timer.
//!
//! Pairs a [`TimerController`] with at most one live [`Ticker`]. The ticker
//! only produces messages; state changes happen in [`StudyTimer::next_tick`]
//! on the owner's task, so no locking is needed. Every ticker gets a fresh
//! generation number and ticks carrying an older one are discarded, so a
//! tick already queued by a cancelled ticker can never decrement.
//!
//! Dropping the `StudyTimer` drops its ticker, which aborts the task.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use super::controller::{TimerController, TimerSnapshot, DEFAULT_SESSION_SECS};
use super::ticker::Ticker;
use crate::events::Event;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct StudyTimer {
    controller: TimerController,
    tick_period: Duration,
    ticker: Option<Ticker>,
    generation: u64,
    tick_tx: mpsc::UnboundedSender<u64>,
    tick_rx: mpsc::UnboundedReceiver<u64>,
    snapshots: watch::Sender<TimerSnapshot>,
}

impl Default for StudyTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECS, DEFAULT_TICK_PERIOD)
    }
}

impl StudyTimer {
    pub fn new(session_length_secs: u64, tick_period: Duration) -> Self {
        let controller = TimerController::new(session_length_secs);
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (snapshots, _) = watch::channel(controller.snapshot());
        Self {
            controller,
            tick_period,
            ticker: None,
            generation: 0,
            tick_tx,
            tick_rx,
            snapshots,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn controller(&self) -> &TimerController {
        &self.controller
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.controller.snapshot()
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.subscribe()
    }

    /// Whether a countdown task is currently live.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Generation of the live ticker, if any. Bumps on every spawn.
    pub fn ticker_generation(&self) -> Option<u64> {
        self.ticker.as_ref().map(Ticker::generation)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start counting down. Must be called inside a tokio runtime.
    pub fn start(&mut self) -> Option<Event> {
        let event = self.controller.start()?;
        self.spawn_ticker();
        self.publish();
        Some(event)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.cancel_ticker();
        let event = self.controller.pause();
        self.publish();
        event
    }

    pub fn reset(&mut self) -> Event {
        self.cancel_ticker();
        let event = self.controller.reset();
        self.publish();
        event
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.controller.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Wait for the next tick of the live ticker and apply it.
    ///
    /// Returns `None` immediately when no countdown is live. The ticker is
    /// torn down on the tick that completes the session.
    pub async fn next_tick(&mut self) -> Option<Event> {
        let live = self.ticker_generation()?;
        loop {
            let generation = self.tick_rx.recv().await?;
            if generation != live {
                tracing::trace!(generation, live, "discarding stale tick");
                continue;
            }
            let event = self.controller.tick();
            if !self.controller.is_running() {
                self.cancel_ticker();
            }
            self.publish();
            return event;
        }
    }

    /// Drive the countdown until it stops, passing every event to `on_event`.
    pub async fn run_until_stopped<F>(&mut self, mut on_event: F)
    where
        F: FnMut(&Event),
    {
        while let Some(event) = self.next_tick().await {
            on_event(&event);
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn spawn_ticker(&mut self) {
        self.cancel_ticker();
        self.generation += 1;
        self.ticker = Some(Ticker::spawn(
            self.tick_period,
            self.generation,
            self.tick_tx.clone(),
        ));
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.controller.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_decrement_and_accumulate() {
        let mut timer = StudyTimer::default();
        timer.start();
        for _ in 0..3 {
            assert!(timer.next_tick().await.is_some());
        }
        let snap = timer.snapshot();
        assert_eq!(snap.remaining_seconds, DEFAULT_SESSION_SECS - 3);
        assert_eq!(snap.total_elapsed_seconds, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn next_tick_without_ticker_returns_none() {
        let mut timer = StudyTimer::default();
        assert!(timer.next_tick().await.is_none());
        timer.start();
        timer.pause();
        assert!(timer.next_tick().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_toggling_keeps_one_ticker() {
        let mut timer = StudyTimer::default();
        for _ in 0..10 {
            timer.toggle();
        }
        // Even number of toggles: stopped, nothing live.
        assert!(!timer.is_ticking());

        timer.start();
        timer.start();
        assert_eq!(timer.ticker_generation(), Some(6));

        tokio::time::sleep(Duration::from_secs(4)).await;
        for _ in 0..4 {
            timer.next_tick().await;
        }
        assert_eq!(timer.snapshot().total_elapsed_seconds, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_are_discarded() {
        let mut timer = StudyTimer::default();
        timer.start();
        // Let the first ticker queue two ticks, then restart it.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        timer.pause();
        timer.start();

        timer.next_tick().await;
        assert_eq!(timer.snapshot().total_elapsed_seconds, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_latest_snapshot() {
        let mut timer = StudyTimer::new(5, Duration::from_secs(1));
        let rx = timer.subscribe();
        timer.start();
        timer.next_tick().await;
        assert_eq!(rx.borrow().remaining_seconds, 4);
        assert!(rx.borrow().running);

        timer.reset();
        assert_eq!(rx.borrow().remaining_seconds, 5);
        assert!(!rx.borrow().running);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_while_running_stops_ticker() {
        let mut timer = StudyTimer::new(10, Duration::from_secs(1));
        timer.start();
        timer.next_tick().await;
        timer.reset();
        assert!(!timer.is_ticking());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(timer.next_tick().await.is_none());
        let snap = timer.snapshot();
        assert_eq!(snap.remaining_seconds, 10);
        assert_eq!(snap.total_elapsed_seconds, 1);
        assert!(!snap.running);
    }

    #[tokio::test(start_paused = true)]
    async fn completes_and_releases_ticker() {
        let mut timer = StudyTimer::new(2, Duration::from_secs(1));
        timer.start();
        let mut events = Vec::new();
        timer.run_until_stopped(|e| events.push(e.clone())).await;

        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], Event::TimerCompleted { total_elapsed_seconds: 2, .. }));
        assert!(!timer.is_ticking());
        assert_eq!(timer.snapshot().remaining_seconds, 0);
    }
}
