//! State owners and view models for each screen.
//!
//! Screens with user-driven state (study, profile) are structs whose methods
//! are the only mutation path; their `view()` returns an immutable snapshot
//! for rendering. Read-only screens are plain functions.

mod home;
mod profile;
mod progress;
mod study;

pub use home::{
    home_view, BentoCard, GaugeCard, GaugeGeometry, HomeView, ModuleCard, Point,
    SemiCircularGauge,
};
pub use profile::{ProfileScreen, ProfileView};
pub use progress::{progress_view, progress_view_for, progress_view_from, ProgressView};
pub use study::{
    GroupCard, GroupDialog, ItemRow, QuickStats, StatusDialog, StudyScreen, StudyView, TimerCard,
};
