//! Countdown state machine.
//!
//! The controller has no clock of its own. Whoever owns it calls `tick()`
//! once per elapsed second while it is running; see [`super::StudyTimer`]
//! for the owner that wires it to a tokio interval.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped --start--> Running --pause--> Stopped
//!                    Running --tick(remaining hits 0)--> Stopped
//! any     --reset--> Stopped (remaining = session length)
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// 25 minutes.
pub const DEFAULT_SESSION_SECS: u64 = 25 * 60;

/// Immutable view of the timer handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub running: bool,
    pub remaining_seconds: u64,
    pub total_elapsed_seconds: u64,
    pub session_length_secs: u64,
    /// `MM:SS` of the remaining time.
    pub clock: String,
    /// Whole minutes studied so far, e.g. `"3m"`.
    pub total_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerController {
    session_length_secs: u64,
    remaining_seconds: u64,
    running: bool,
    total_elapsed_seconds: u64,
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECS)
    }
}

impl TimerController {
    /// Create a stopped controller with a full session remaining.
    pub fn new(session_length_secs: u64) -> Self {
        Self {
            session_length_secs,
            remaining_seconds: session_length_secs,
            running: false,
            total_elapsed_seconds: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn total_elapsed_seconds(&self) -> u64 {
        self.total_elapsed_seconds
    }

    pub fn session_length_secs(&self) -> u64 {
        self.session_length_secs
    }

    /// 0.0 .. 1.0 of the current session already counted down.
    pub fn session_progress(&self) -> f64 {
        if self.session_length_secs == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_seconds as f64 / self.session_length_secs as f64)
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            running: self.running,
            remaining_seconds: self.remaining_seconds,
            total_elapsed_seconds: self.total_elapsed_seconds,
            session_length_secs: self.session_length_secs,
            clock: self.clock(),
            total_time: format!("{}m", self.total_elapsed_seconds / 60),
        }
    }

    pub fn snapshot_event(&self) -> Event {
        Event::StateSnapshot {
            snapshot: self.snapshot(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Returns `None` when already running or when nothing is left to count.
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.remaining_seconds == 0 {
            return None;
        }
        self.running = true;
        tracing::info!(remaining = self.remaining_seconds, "timer started");
        Some(Event::TimerStarted {
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Stops counting; remaining time is kept.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        tracing::info!(remaining = self.remaining_seconds, "timer paused");
        Some(Event::TimerPaused {
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Stops counting and refills the session. The elapsed total is kept.
    pub fn reset(&mut self) -> Event {
        self.running = false;
        self.remaining_seconds = self.session_length_secs;
        tracing::info!(session_length = self.session_length_secs, "timer reset");
        Event::TimerReset {
            session_length_secs: self.session_length_secs,
            at: Utc::now(),
        }
    }

    /// Count one elapsed second.
    ///
    /// Returns `TimerCompleted` on the tick that reaches zero, `TimerTicked`
    /// otherwise, and `None` when stopped.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_seconds == 0 {
            self.running = false;
            return None;
        }
        self.remaining_seconds -= 1;
        self.total_elapsed_seconds += 1;
        tracing::debug!(remaining = self.remaining_seconds, "tick");

        if self.remaining_seconds == 0 {
            self.running = false;
            tracing::info!(total_elapsed = self.total_elapsed_seconds, "timer completed");
            return Some(Event::TimerCompleted {
                total_elapsed_seconds: self.total_elapsed_seconds,
                at: Utc::now(),
            });
        }
        Some(Event::TimerTicked {
            remaining_seconds: self.remaining_seconds,
            total_elapsed_seconds: self.total_elapsed_seconds,
            at: Utc::now(),
        })
    }
}

/// `MM:SS`; minutes are not wrapped into hours.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
