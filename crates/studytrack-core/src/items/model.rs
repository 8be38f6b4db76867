use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of trackable record. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Task,
    Assignment,
    StudySession,
    Reminder,
    Goal,
}

impl ItemType {
    /// All types in display order.
    pub const ALL: [ItemType; 5] = [
        ItemType::Task,
        ItemType::Assignment,
        ItemType::StudySession,
        ItemType::Reminder,
        ItemType::Goal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemType::Task => "Task",
            ItemType::Assignment => "Assignment",
            ItemType::StudySession => "Study Session",
            ItemType::Reminder => "Reminder",
            ItemType::Goal => "Goal",
        }
    }

    /// Plural heading used on group cards.
    pub fn group_title(self) -> &'static str {
        match self {
            ItemType::Task => "Tasks",
            ItemType::Assignment => "Assignments",
            ItemType::StudySession => "Study Sessions",
            ItemType::Reminder => "Reminders",
            ItemType::Goal => "Goals",
        }
    }

    fn snake_name(self) -> &'static str {
        match self {
            ItemType::Task => "task",
            ItemType::Assignment => "assignment",
            ItemType::StudySession => "study_session",
            ItemType::Reminder => "reminder",
            ItemType::Goal => "goal",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    /// Accepts the snake_case name, the display label or the plural group title.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ItemType::ALL
            .into_iter()
            .find(|t| {
                wanted.eq_ignore_ascii_case(t.snake_name())
                    || wanted.eq_ignore_ascii_case(t.label())
                    || wanted.eq_ignore_ascii_case(t.group_title())
            })
            .ok_or_else(|| ValidationError::UnknownItemType(s.to_string()))
    }
}

/// Status of an item. Any value may transition to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Completed,
    #[default]
    InProgress,
    Failed,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [
        ItemStatus::Completed,
        ItemStatus::InProgress,
        ItemStatus::Failed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Completed => "Completed",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Failed => "Failed",
        }
    }

    /// Short badge shown next to an item title.
    pub fn badge(self) -> &'static str {
        match self {
            ItemStatus::Completed => "✓ Completed",
            ItemStatus::InProgress => "In Progress",
            ItemStatus::Failed => "✗ Failed",
        }
    }

    fn snake_name(self) -> &'static str {
        match self {
            ItemStatus::Completed => "completed",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ItemStatus::ALL
            .into_iter()
            .find(|st| {
                wanted.eq_ignore_ascii_case(st.snake_name())
                    || wanted.eq_ignore_ascii_case(st.label())
            })
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_string()))
    }
}

/// A single trackable record.
///
/// Fields are private so that `status` stays the only thing that can change
/// after construction, and only through [`StudyItem::with_status`] or the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyItem {
    item_type: ItemType,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<String>,
    #[serde(default)]
    status: ItemStatus,
}

impl StudyItem {
    pub fn new(item_type: ItemType, title: impl Into<String>) -> Self {
        Self {
            item_type,
            title: title.into(),
            subject: None,
            duration: None,
            status: ItemStatus::default(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Returns a copy carrying `status`; every other field is kept.
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subject_name(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn duration_text(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == ItemStatus::Completed
    }

    pub(crate) fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }

    /// Secondary line shown under the title in item lists.
    pub fn subtitle(&self) -> String {
        let subject = self.subject.as_deref().unwrap_or("No Subject");
        match self.item_type {
            ItemType::Task => "General Task".to_string(),
            ItemType::Assignment | ItemType::Goal => subject.to_string(),
            ItemType::StudySession => {
                let duration = self.duration.as_deref().unwrap_or("No Duration");
                format!("{subject} • {duration}")
            }
            ItemType::Reminder => "Reminder".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_item_type_from_any_spelling() {
        assert_eq!("study_session".parse::<ItemType>(), Ok(ItemType::StudySession));
        assert_eq!("Study Session".parse::<ItemType>(), Ok(ItemType::StudySession));
        assert_eq!("goals".parse::<ItemType>(), Ok(ItemType::Goal));
        assert_eq!(
            "homework".parse::<ItemType>(),
            Err(ValidationError::UnknownItemType("homework".into()))
        );
    }

    #[test]
    fn parse_status_from_label() {
        assert_eq!("in progress".parse::<ItemStatus>(), Ok(ItemStatus::InProgress));
        assert_eq!("IN_PROGRESS".parse::<ItemStatus>(), Ok(ItemStatus::InProgress));
        assert_eq!("Failed".parse::<ItemStatus>(), Ok(ItemStatus::Failed));
        assert!("done".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn default_status_is_in_progress() {
        let item = StudyItem::new(ItemType::Reminder, "Call Study Group");
        assert_eq!(item.status(), ItemStatus::InProgress);
    }

    #[test]
    fn subtitle_follows_item_type() {
        assert_eq!(StudyItem::new(ItemType::Task, "x").subtitle(), "General Task");
        assert_eq!(StudyItem::new(ItemType::Goal, "x").subtitle(), "No Subject");
        assert_eq!(
            StudyItem::new(ItemType::Assignment, "x").subject("Physics").subtitle(),
            "Physics"
        );
        assert_eq!(
            StudyItem::new(ItemType::StudySession, "x")
                .subject("Science")
                .duration("25 min")
                .subtitle(),
            "Science • 25 min"
        );
        assert_eq!(
            StudyItem::new(ItemType::StudySession, "x").subtitle(),
            "No Subject • No Duration"
        );
        assert_eq!(StudyItem::new(ItemType::Reminder, "x").subtitle(), "Reminder");
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ItemStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let item: StudyItem =
            serde_json::from_str(r#"{"item_type":"goal","title":"Read"}"#).unwrap();
        assert_eq!(item.status(), ItemStatus::InProgress);
    }
}
