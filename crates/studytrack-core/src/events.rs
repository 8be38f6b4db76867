use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::items::{ItemStatus, ItemType};
use crate::nav::Tab;
use crate::timer::TimerSnapshot;

/// Every state change in the system produces an Event.
/// Renderers either consume these or re-read the owner's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        session_length_secs: u64,
        at: DateTime<Utc>,
    },
    /// One second of focus time was counted.
    TimerTicked {
        remaining_seconds: u64,
        total_elapsed_seconds: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero and stopped.
    TimerCompleted {
        total_elapsed_seconds: u64,
        at: DateTime<Utc>,
    },
    ItemAdded {
        item_type: ItemType,
        title: String,
        at: DateTime<Utc>,
    },
    ItemStatusChanged {
        item_type: ItemType,
        title: String,
        from: ItemStatus,
        to: ItemStatus,
        at: DateTime<Utc>,
    },
    TabChanged {
        from: Tab,
        to: Tab,
        at: DateTime<Utc>,
    },
    /// An option was picked in the "New Item" dialog.
    NewItemChosen {
        item_type: ItemType,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        #[serde(flatten)]
        snapshot: TimerSnapshot,
        at: DateTime<Utc>,
    },
}
