//! Weekly study report.
//!
//! Built from a slice of items plus the fixed daily-hours chart the progress
//! screen shows.

use serde::{Deserialize, Serialize};

use super::{average_rate, completion_rate, completion_rate_for, percent_label};
use crate::items::{ItemStore, ItemType, StudyItem};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const DAILY_HOURS: [f64; 7] = [2.0, 4.0, 3.0, 5.0, 6.0, 4.0, 7.0];
const WEEKLY_TOTAL_LABEL: &str = "45h";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHours {
    pub day: String,
    pub hours: f64,
}

/// Per-type completion rates shown in the "Weekly Completion Rate" card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeRates {
    pub task: f64,
    pub assignment: f64,
    pub goal: f64,
    pub average: f64,
}

impl TypeRates {
    pub fn from_items(items: &[StudyItem]) -> Self {
        let task = completion_rate_for(items, ItemType::Task);
        let assignment = completion_rate_for(items, ItemType::Assignment);
        let goal = completion_rate_for(items, ItemType::Goal);
        Self {
            task,
            assignment,
            goal,
            average: average_rate(task, assignment, goal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub item_type: ItemType,
    pub title: String,
    pub message: String,
}

impl Achievement {
    fn from_item(item: &StudyItem) -> Self {
        Self {
            item_type: item.item_type(),
            title: item.title().to_string(),
            message: format!("{}: {} - Completed!", item.item_type(), item.title()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub daily_hours: Vec<DailyHours>,
    pub total_time_label: String,
    pub total_items: usize,
    pub goals_achieved: usize,
    pub completion_rate: f64,
    pub rates: TypeRates,
    pub rate_labels: RateLabels,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLabels {
    pub task: String,
    pub assignment: String,
    pub goal: String,
    pub average: String,
}

impl WeeklyReport {
    pub fn from_items(items: &[StudyItem]) -> Self {
        Self::from_store(&ItemStore::from_items(items.to_vec()))
    }

    pub fn from_store(store: &ItemStore) -> Self {
        let items = store.items();
        let rates = TypeRates::from_items(items);
        let achievements: Vec<Achievement> = store.completed().map(Achievement::from_item).collect();

        Self {
            daily_hours: DAYS
                .iter()
                .zip(DAILY_HOURS)
                .map(|(day, hours)| DailyHours {
                    day: (*day).to_string(),
                    hours,
                })
                .collect(),
            total_time_label: WEEKLY_TOTAL_LABEL.to_string(),
            total_items: items.len(),
            goals_achieved: achievements.len(),
            completion_rate: completion_rate(items),
            rate_labels: RateLabels {
                task: percent_label(rates.task),
                assignment: percent_label(rates.assignment),
                goal: percent_label(rates.goal),
                average: percent_label(rates.average),
            },
            rates,
            achievements,
        }
    }

    /// Tallest bar in the daily chart, used to scale the others.
    pub fn peak_hours(&self) -> f64 {
        self.daily_hours
            .iter()
            .map(|d| d.hours)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{weekly_seed, ItemStatus};

    #[test]
    fn weekly_seed_report() {
        let report = WeeklyReport::from_items(&weekly_seed());
        assert_eq!(report.total_items, 10);
        assert_eq!(report.goals_achieved, 5);
        assert_eq!(report.completion_rate, 0.5);
        assert_eq!(report.rates.task, 0.5);
        assert_eq!(report.rates.assignment, 0.5);
        assert_eq!(report.rates.goal, 0.5);
        assert_eq!(report.rate_labels.average, "50%");
        assert_eq!(report.daily_hours.len(), 7);
        assert_eq!(report.daily_hours[6].day, "Sun");
        assert_eq!(report.peak_hours(), 7.0);
        assert_eq!(
            report.achievements[0].message,
            "Task: Complete Math Homework - Completed!"
        );
    }

    #[test]
    fn empty_report_has_zero_rates() {
        let report = WeeklyReport::from_items(&[]);
        assert_eq!(report.completion_rate, 0.0);
        assert_eq!(report.rates.average, 0.0);
        assert!(report.achievements.is_empty());
    }

    #[test]
    fn seven_of_ten_per_type_labels_seventy_percent() {
        let items: Vec<StudyItem> = [ItemType::Task, ItemType::Assignment, ItemType::Goal]
            .into_iter()
            .flat_map(|item_type| {
                (0..10).map(move |i| {
                    let status = if i < 7 { ItemStatus::Completed } else { ItemStatus::Failed };
                    StudyItem::new(item_type, format!("{item_type} {i}")).with_status(status)
                })
            })
            .collect();
        let report = WeeklyReport::from_items(&items);
        assert_eq!(report.rate_labels.task, "70%");
        assert_eq!(report.rate_labels.average, "70%");
        assert_eq!(report.goals_achieved, 21);
    }

    #[test]
    fn rates_ignore_reminders_and_sessions() {
        let items = vec![
            StudyItem::new(ItemType::Reminder, "r").with_status(ItemStatus::Completed),
            StudyItem::new(ItemType::StudySession, "s").with_status(ItemStatus::Completed),
        ];
        let rates = TypeRates::from_items(&items);
        assert_eq!(rates.average, 0.0);
        assert_eq!(completion_rate(&items), 1.0);
    }
}
