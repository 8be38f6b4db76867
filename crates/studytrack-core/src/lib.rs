//! # Studytrack Core Library
//!
//! State behind the Studytrack study-habit tracker. Every screen's state is
//! held in memory by an explicit owner and resets when the owner is
//! recreated; nothing is persisted.
//!
//! ## Architecture
//!
//! - **Timer**: a countdown state machine driven by a cancellable tokio
//!   ticker. The ticker only sends messages; the owning screen applies them.
//! - **Items**: an ordered in-memory store of study items whose status is the
//!   only mutable field.
//! - **Stats**: empty-safe completion rates and the weekly report.
//! - **Screens**: study, home, progress and profile state plus view models.
//!
//! ## Key Components
//!
//! - [`StudyTimer`]: screen-owned countdown with at most one live ticker
//! - [`ItemStore`]: item collection with status updates and grouping
//! - [`StudyScreen`]: study screen state owner
//! - [`Config`]: TOML configuration

pub mod config;
pub mod error;
pub mod events;
pub mod items;
pub mod nav;
pub mod screens;
pub mod stats;
pub mod timer;

pub use config::{Config, ProfileConfig, TimerConfig};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use items::{ItemStatus, ItemStore, ItemType, StudyItem};
pub use nav::{Navigator, Tab};
pub use screens::{ProfileScreen, StudyScreen};
pub use stats::{average_rate, completion_rate, WeeklyReport};
pub use timer::{StudyTimer, TimerController, TimerSnapshot};
