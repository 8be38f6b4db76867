//! Study screen state.
//!
//! Owns the focus timer, the screen's item collection and the two dialogs
//! (items of one group, status picker for one item). Everything resets to the
//! placeholder seed when a new screen is created. Dropping the screen stops
//! the countdown.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ValidationError;
use crate::events::Event;
use crate::items::{study_seed, ItemStatus, ItemStore, ItemType, StudyItem};
use crate::timer::{StudyTimer, TimerSnapshot};

/// Shown in the quick stats card; there is no session history to count.
const TODAYS_SESSIONS_PLACEHOLDER: u32 = 3;

/// Group cards in layout order: the wide study-session card first.
const GROUP_ORDER: [ItemType; 5] = [
    ItemType::StudySession,
    ItemType::Task,
    ItemType::Assignment,
    ItemType::Reminder,
    ItemType::Goal,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStats {
    pub todays_sessions: u32,
    pub total_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerCard {
    pub title: String,
    #[serde(flatten)]
    pub snapshot: TimerSnapshot,
    /// "Start" or "Pause".
    pub primary_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCard {
    pub item_type: ItemType,
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub title: String,
    pub subtitle: String,
    pub status: ItemStatus,
    pub badge: String,
}

impl From<&StudyItem> for ItemRow {
    fn from(item: &StudyItem) -> Self {
        Self {
            title: item.title().to_string(),
            subtitle: item.subtitle(),
            status: item.status(),
            badge: item.status().badge().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDialog {
    pub item_type: ItemType,
    pub title: String,
    pub items: Vec<ItemRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDialog {
    pub prompt: String,
    pub options: Vec<ItemStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyView {
    pub title: String,
    pub quick_stats: QuickStats,
    pub timer: TimerCard,
    pub groups: Vec<GroupCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_dialog: Option<GroupDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_dialog: Option<StatusDialog>,
}

#[derive(Debug)]
pub struct StudyScreen {
    timer: StudyTimer,
    store: ItemStore,
    open_group: Option<ItemType>,
    selected_item: Option<StudyItem>,
}

impl Default for StudyScreen {
    fn default() -> Self {
        Self::with_parts(StudyTimer::default(), ItemStore::from_items(study_seed()))
    }
}

impl StudyScreen {
    pub fn new(config: &Config) -> Self {
        let timer = StudyTimer::new(config.timer.session_length_secs, config.timer.tick_period());
        Self::with_parts(timer, ItemStore::from_items(study_seed()))
    }

    pub fn with_parts(timer: StudyTimer, store: ItemStore) -> Self {
        Self {
            timer,
            store,
            open_group: None,
            selected_item: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn timer(&self) -> &StudyTimer {
        &self.timer
    }

    pub fn items(&self) -> &ItemStore {
        &self.store
    }

    pub fn open_group(&self) -> Option<ItemType> {
        self.open_group
    }

    pub fn selected_item(&self) -> Option<&StudyItem> {
        self.selected_item.as_ref()
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn start_timer(&mut self) -> Option<Event> {
        self.timer.start()
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        self.timer.pause()
    }

    pub fn reset_timer(&mut self) -> Event {
        self.timer.reset()
    }

    /// The Start/Pause button.
    pub fn toggle_timer(&mut self) -> Option<Event> {
        self.timer.toggle()
    }

    pub async fn next_tick(&mut self) -> Option<Event> {
        self.timer.next_tick().await
    }

    // ── Items ────────────────────────────────────────────────────────

    pub fn show_group(&mut self, item_type: ItemType) {
        self.open_group = Some(item_type);
    }

    pub fn close_group(&mut self) {
        self.open_group = None;
    }

    /// Open the status picker for the `index`-th item of the open group.
    pub fn select_item(&mut self, index: usize) -> Result<&StudyItem, ValidationError> {
        let group = self.open_group.ok_or(ValidationError::NoGroupOpen)?;
        let items = self.store.of_type(group);
        let len = items.len();
        let item = items
            .into_iter()
            .nth(index)
            .ok_or_else(|| ValidationError::OutOfBounds {
                collection: format!("{} items", group.label()),
                index,
                len,
            })?;
        Ok(&*self.selected_item.insert(item))
    }

    pub fn dismiss_status_dialog(&mut self) {
        self.selected_item = None;
    }

    /// Apply a status from the picker and close it.
    ///
    /// Returns an event only when some record actually changed.
    pub fn choose_status(&mut self, status: ItemStatus) -> Option<Event> {
        let item = self.selected_item.take()?;
        if self.store.update_status(&item, status) == 0 {
            return None;
        }
        Some(Event::ItemStatusChanged {
            item_type: item.item_type(),
            title: item.title().to_string(),
            from: item.status(),
            to: status,
            at: Utc::now(),
        })
    }

    pub fn add_item(&mut self, item: StudyItem) -> Event {
        let event = Event::ItemAdded {
            item_type: item.item_type(),
            title: item.title().to_string(),
            at: Utc::now(),
        };
        self.store.push(item);
        event
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn view(&self) -> StudyView {
        let snapshot = self.timer.snapshot();
        let counts = self.store.count_by_type();

        StudyView {
            title: "Study Sessions".into(),
            quick_stats: QuickStats {
                todays_sessions: TODAYS_SESSIONS_PLACEHOLDER,
                total_time: snapshot.total_time.clone(),
            },
            timer: TimerCard {
                title: "Focus Timer".into(),
                primary_action: if snapshot.running { "Pause" } else { "Start" }.into(),
                snapshot,
            },
            groups: GROUP_ORDER
                .into_iter()
                .map(|item_type| GroupCard {
                    item_type,
                    title: match item_type {
                        ItemType::StudySession => item_type.label().to_string(),
                        other => other.group_title().to_string(),
                    },
                    count: counts.get(&item_type).copied().unwrap_or(0),
                })
                .collect(),
            group_dialog: self.open_group.map(|group| {
                let items: Vec<ItemRow> =
                    self.store.of_type(group).iter().map(ItemRow::from).collect();
                GroupDialog {
                    item_type: group,
                    title: format!("{} Items", group.label()),
                    empty_message: items
                        .is_empty()
                        .then(|| format!("No {} items yet.", group.label())),
                    items,
                }
            }),
            status_dialog: self.selected_item.as_ref().map(|item| StatusDialog {
                prompt: format!("Update Status for: {}", item.title()),
                options: ItemStatus::ALL.to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn initial_view_counts_seed() {
        let screen = StudyScreen::default();
        let view = screen.view();
        assert_eq!(view.quick_stats.todays_sessions, 3);
        assert_eq!(view.quick_stats.total_time, "0m");
        assert_eq!(view.timer.snapshot.clock, "25:00");
        assert_eq!(view.timer.primary_action, "Start");
        assert_eq!(view.groups[0].title, "Study Session");
        assert!(view.groups.iter().all(|g| g.count == 2));
        assert!(view.group_dialog.is_none());
        assert!(view.status_dialog.is_none());
    }

    #[test]
    fn select_requires_open_group() {
        let mut screen = StudyScreen::default();
        assert_eq!(screen.select_item(0).unwrap_err(), ValidationError::NoGroupOpen);
    }

    #[test]
    fn select_out_of_range() {
        let mut screen = StudyScreen::default();
        screen.show_group(ItemType::Task);
        let err = screen.select_item(2).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfBounds { index: 2, len: 2, .. }));
    }

    #[test]
    fn status_dialog_updates_item() {
        let mut screen = StudyScreen::default();
        screen.show_group(ItemType::Goal);
        let title = screen.select_item(1).unwrap().title().to_string();
        assert_eq!(title, "Achieve 90% in Math Test");
        assert_eq!(
            screen.view().status_dialog.map(|d| d.prompt),
            Some("Update Status for: Achieve 90% in Math Test".to_string())
        );

        let event = screen.choose_status(ItemStatus::InProgress);
        assert!(matches!(
            event,
            Some(Event::ItemStatusChanged { from: ItemStatus::Failed, to: ItemStatus::InProgress, .. })
        ));
        assert!(screen.selected_item().is_none());

        let dialog = screen.view().group_dialog.unwrap();
        assert_eq!(dialog.items[1].badge, "In Progress");
        assert_eq!(dialog.title, "Goal Items");
    }

    #[test]
    fn choosing_same_status_emits_nothing() {
        let mut screen = StudyScreen::default();
        screen.show_group(ItemType::Assignment);
        screen.select_item(0).unwrap();
        assert!(screen.choose_status(ItemStatus::Completed).is_none());
        assert!(screen.selected_item().is_none());
    }

    #[test]
    fn dismissing_status_dialog_keeps_store() {
        let mut screen = StudyScreen::default();
        let before = screen.items().clone();
        screen.show_group(ItemType::Task);
        screen.select_item(1).unwrap();
        screen.dismiss_status_dialog();

        assert!(screen.selected_item().is_none());
        assert!(screen.view().status_dialog.is_none());
        assert_eq!(screen.open_group(), Some(ItemType::Task));
        assert!(screen.choose_status(ItemStatus::Completed).is_none());
        assert_eq!(screen.items(), &before);
    }

    #[test]
    fn empty_group_message() {
        let mut screen = StudyScreen::with_parts(StudyTimer::default(), ItemStore::new());
        screen.show_group(ItemType::Reminder);
        let dialog = screen.view().group_dialog.unwrap();
        assert!(dialog.items.is_empty());
        assert_eq!(dialog.empty_message.as_deref(), Some("No Reminder items yet."));
    }

    #[test]
    fn added_item_shows_in_counts() {
        let mut screen = StudyScreen::default();
        screen.add_item(StudyItem::new(ItemType::Task, "Flashcards"));
        let tasks = screen.view().groups.into_iter().find(|g| g.item_type == ItemType::Task);
        assert_eq!(tasks.map(|g| g.count), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_relabels_button() {
        let mut screen = StudyScreen::default();
        screen.toggle_timer();
        assert_eq!(screen.view().timer.primary_action, "Pause");
        screen.next_tick().await;
        screen.toggle_timer();
        let view = screen.view();
        assert_eq!(view.timer.primary_action, "Start");
        assert_eq!(view.timer.snapshot.clock, "24:59");
    }

    #[tokio::test(start_paused = true)]
    async fn reset_button_refills_clock() {
        let mut screen = StudyScreen::default();
        screen.start_timer();
        screen.next_tick().await;
        screen.next_tick().await;

        let event = screen.reset_timer();
        assert!(matches!(event, Event::TimerReset { session_length_secs: 1500, .. }));
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(screen.next_tick().await.is_none());

        let view = screen.view();
        assert_eq!(view.timer.snapshot.clock, "25:00");
        assert_eq!(view.timer.primary_action, "Start");
        assert_eq!(view.timer.snapshot.total_elapsed_seconds, 2);
    }
}
