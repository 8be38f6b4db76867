use serde::{Deserialize, Serialize};

use crate::items::{weekly_seed, ItemStore, StudyItem};
use crate::stats::WeeklyReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressView {
    pub title: String,
    #[serde(flatten)]
    pub report: WeeklyReport,
}

/// Progress screen for an arbitrary item list.
pub fn progress_view_for(items: &[StudyItem]) -> ProgressView {
    ProgressView {
        title: "Weekly Study Report".into(),
        report: WeeklyReport::from_items(items),
    }
}

/// Progress screen over a live item store, e.g. the study screen's.
pub fn progress_view_from(store: &ItemStore) -> ProgressView {
    ProgressView {
        title: "Weekly Study Report".into(),
        report: WeeklyReport::from_store(store),
    }
}

/// Progress screen as it opens, from the weekly placeholder items.
pub fn progress_view() -> ProgressView {
    progress_view_for(&weekly_seed())
}
