//! Bottom tab navigation and the "New Item" picker.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::items::ItemType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Study,
    Progress,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Study, Tab::Progress, Tab::Profile];

    pub fn route(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Study => "study",
            Tab::Progress => "progress",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Study => "Study",
            Tab::Progress => "Progress",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Study => "📚",
            Tab::Progress => "📈",
            Tab::Profile => "👤",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| wanted.eq_ignore_ascii_case(tab.route()))
            .ok_or_else(|| ValidationError::UnknownRoute(s.to_string()))
    }
}

/// Icon shown for each option in the "New Item" picker.
pub fn new_item_icon(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Task => "🗒️",
        ItemType::Assignment => "📝",
        ItemType::StudySession => "📚",
        ItemType::Reminder => "⏰",
        ItemType::Goal => "🎯",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabButton {
    pub tab: Tab,
    pub label: String,
    pub icon: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItemOption {
    pub item_type: ItemType,
    pub label: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavView {
    pub current: Tab,
    pub tabs: Vec<TabButton>,
    /// Present while the "New Item" dialog is open.
    pub new_item_options: Option<Vec<NewItemOption>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub route: String,
}

/// Subjects offered on the subjects screen.
pub fn subjects() -> Vec<Subject> {
    vec![Subject {
        name: "Science".into(),
        icon: "🧪".into(),
        description: "Explore and understand the world around you.".into(),
        route: "science_study".into(),
    }]
}

/// Which tab is showing and whether the "New Item" dialog is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Tab,
    new_item_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tab {
        self.current
    }

    pub fn is_new_item_open(&self) -> bool {
        self.new_item_open
    }

    /// Switch tabs. Selecting the tab already shown does nothing.
    pub fn navigate(&mut self, to: Tab) -> Option<Event> {
        if to == self.current {
            return None;
        }
        let from = self.current;
        self.current = to;
        tracing::debug!(%from, %to, "tab changed");
        Some(Event::TabChanged {
            from,
            to,
            at: Utc::now(),
        })
    }

    pub fn open_new_item(&mut self) {
        self.new_item_open = true;
    }

    pub fn dismiss_new_item(&mut self) {
        self.new_item_open = false;
    }

    /// Pick an option from the "New Item" dialog, closing it.
    /// Returns `None` when the dialog isn't open.
    pub fn choose_new_item(&mut self, item_type: ItemType) -> Option<Event> {
        if !self.new_item_open {
            return None;
        }
        self.new_item_open = false;
        tracing::info!(%item_type, "new item option selected");
        Some(Event::NewItemChosen {
            item_type,
            at: Utc::now(),
        })
    }

    pub fn view(&self) -> NavView {
        NavView {
            current: self.current,
            tabs: Tab::ALL
                .into_iter()
                .map(|tab| TabButton {
                    tab,
                    label: tab.label().to_string(),
                    icon: tab.icon().to_string(),
                    selected: tab == self.current,
                })
                .collect(),
            new_item_options: self.new_item_open.then(|| {
                ItemType::ALL
                    .into_iter()
                    .map(|item_type| NewItemOption {
                        item_type,
                        label: item_type.label().to_string(),
                        icon: new_item_icon(item_type).to_string(),
                    })
                    .collect()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Tab::Home);
        assert!(nav.view().tabs[0].selected);
    }

    #[test]
    fn reselecting_current_tab_is_ignored() {
        let mut nav = Navigator::new();
        assert!(nav.navigate(Tab::Home).is_none());
        assert!(nav.navigate(Tab::Progress).is_some());
        assert!(nav.navigate(Tab::Progress).is_none());
        assert_eq!(nav.current(), Tab::Progress);
    }

    #[test]
    fn new_item_dialog_flow() {
        let mut nav = Navigator::new();
        assert!(nav.choose_new_item(ItemType::Goal).is_none());

        nav.open_new_item();
        assert_eq!(nav.view().new_item_options.map(|o| o.len()), Some(5));

        let event = nav.choose_new_item(ItemType::Goal);
        assert!(matches!(event, Some(Event::NewItemChosen { item_type: ItemType::Goal, .. })));
        assert!(!nav.is_new_item_open());
        assert!(nav.view().new_item_options.is_none());
    }

    #[test]
    fn dismissing_new_item_picker_emits_nothing() {
        let mut nav = Navigator::new();
        nav.open_new_item();
        assert!(nav.is_new_item_open());

        nav.dismiss_new_item();
        assert!(!nav.is_new_item_open());
        assert!(nav.view().new_item_options.is_none());
        assert!(nav.choose_new_item(ItemType::Task).is_none());
        assert_eq!(nav.current(), Tab::Home);
    }

    #[test]
    fn routes_parse() {
        assert_eq!("Study".parse::<Tab>(), Ok(Tab::Study));
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn single_science_subject() {
        let subjects = subjects();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].route, "science_study");
    }
}
