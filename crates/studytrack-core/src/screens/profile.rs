//! Profile and settings state.
//!
//! Name edits go to a draft; `save` commits it and `cancel` discards it.
//! Toggles apply immediately. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::config::ProfileConfig;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub display_name: String,
    pub editing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_uri: Option<String>,
    pub dark_mode: bool,
    pub notifications: bool,
    pub language: String,
    pub account_actions: Vec<String>,
    pub version_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileScreen {
    user_name: String,
    draft: Option<String>,
    dark_mode: bool,
    notifications: bool,
    language: String,
    profile_image_uri: Option<String>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new(&ProfileConfig::default())
    }
}

impl ProfileScreen {
    pub fn new(config: &ProfileConfig) -> Self {
        Self {
            user_name: config.user_name.clone(),
            draft: None,
            dark_mode: config.dark_mode,
            notifications: config.notifications,
            language: config.language.clone(),
            profile_image_uri: None,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            "No name set"
        } else {
            &self.user_name
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn notifications(&self) -> bool {
        self.notifications
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.user_name.clone());
        }
    }

    /// Replace the draft text. Ignored when not editing.
    pub fn edit_name(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            *draft = text.into();
        }
    }

    pub fn save_name(&mut self) {
        if let Some(draft) = self.draft.take() {
            tracing::info!(name = %draft, "profile name saved");
            self.user_name = draft;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
    }

    pub fn set_notifications(&mut self, on: bool) {
        self.notifications = on;
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn set_profile_image(&mut self, uri: Option<String>) {
        self.profile_image_uri = uri;
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            display_name: self.display_name().to_string(),
            editing: self.is_editing(),
            draft_name: self.draft.clone(),
            profile_image_uri: self.profile_image_uri.clone(),
            dark_mode: self.dark_mode,
            notifications: self.notifications,
            language: self.language.clone(),
            account_actions: ["Privacy Policy", "About App", "Log Out"]
                .into_iter()
                .map(String::from)
                .collect(),
            version_label: format!("App Version {APP_VERSION}"),
        }
    }
}
