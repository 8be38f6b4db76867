//! Statistics module for Studytrack
//!
//! Completion rates over groups of study items and the weekly report the
//! progress screen renders.

mod weekly;

pub use weekly::{Achievement, DailyHours, RateLabels, TypeRates, WeeklyReport};

use crate::items::{ItemType, StudyItem};

/// Fraction of `items` whose status is Completed; 0.0 for an empty slice.
pub fn completion_rate(items: &[StudyItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let completed = items.iter().filter(|item| item.is_completed()).count();
    completed as f64 / items.len() as f64
}

/// Completion rate restricted to one item type.
pub fn completion_rate_for(items: &[StudyItem], item_type: ItemType) -> f64 {
    let subset: Vec<StudyItem> = items
        .iter()
        .filter(|item| item.item_type() == item_type)
        .cloned()
        .collect();
    completion_rate(&subset)
}

/// Arithmetic mean of the task, assignment and goal rates.
pub fn average_rate(task: f64, assignment: f64, goal: f64) -> f64 {
    (task + assignment + goal) / 3.0
}

/// Slack for rates that are whole percentages on paper but land just below
/// one in binary, e.g. the mean of three 0.7 rates.
const PERCENT_EPSILON: f64 = 1e-9;

/// Whole percent, truncated toward zero ("66%" for two thirds).
pub fn percent_label(rate: f64) -> String {
    format!("{}%", (rate * 100.0 + PERCENT_EPSILON).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemStatus;

    fn item(item_type: ItemType, status: ItemStatus) -> StudyItem {
        StudyItem::new(item_type, "x").with_status(status)
    }

    #[test]
    fn empty_rate_is_zero() {
        assert_eq!(completion_rate(&[]), 0.0);
        assert_eq!(completion_rate_for(&[item(ItemType::Goal, ItemStatus::Completed)], ItemType::Task), 0.0);
    }

    #[test]
    fn two_of_three_completed() {
        let items = [
            item(ItemType::Task, ItemStatus::Completed),
            item(ItemType::Task, ItemStatus::Completed),
            item(ItemType::Task, ItemStatus::Failed),
        ];
        assert!((completion_rate(&items) - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(percent_label(completion_rate(&items)), "66%");
    }

    #[test]
    fn average_of_three_rates() {
        assert_eq!(average_rate(0.0, 0.0, 0.0), 0.0);
        assert!((average_rate(1.0, 0.5, 0.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_label_bounds() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(1.0), "100%");
        assert_eq!(percent_label(0.999), "99%");
    }

    #[test]
    fn percent_label_survives_float_error() {
        assert_eq!(percent_label(average_rate(0.7, 0.7, 0.7)), "70%");
        assert_eq!(percent_label(29.0 / 50.0), "58%");
        assert_eq!(percent_label(0.57), "57%");
    }
}
