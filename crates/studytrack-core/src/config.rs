//! TOML-based application configuration.
//!
//! Holds the knobs the screens start from:
//! - Focus session length and tick period
//! - Profile defaults (name, language, toggles)
//!
//! Configuration is read from `$STUDYTRACK_CONFIG` when set, otherwise from
//! `<config dir>/studytrack/config.toml`. A missing file means defaults.
//! Nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::timer::DEFAULT_SESSION_SECS;

pub const CONFIG_ENV: &str = "STUDYTRACK_CONFIG";

/// Upper bound for `timer.tick_millis`: one hour.
pub const MAX_TICK_MILLIS: u64 = 60 * 60 * 1000;

/// Timer-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_session_length")]
    pub session_length_secs: u64,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

/// Initial profile settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

// Default functions
fn default_session_length() -> u64 {
    DEFAULT_SESSION_SECS
}
fn default_tick_millis() -> u64 {
    1000
}
fn default_user_name() -> String {
    "John Doe".into()
}
fn default_language() -> String {
    "English".into()
}
fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            session_length_secs: default_session_length(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            language: default_language(),
            dark_mode: false,
            notifications: default_true(),
        }
    }
}

impl TimerConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Config {
    /// Where the config is looked up: `$STUDYTRACK_CONFIG`, else the platform
    /// config directory.
    pub fn path() -> PathBuf {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(explicit);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studytrack")
            .join("config.toml")
    }

    /// Load from [`Config::path`], falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the timer cannot run with. Callers that override
    /// fields after loading must validate again.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.session_length_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timer.session_length_secs".into(),
                message: "must be greater than zero".into(),
            });
        }
        if self.timer.tick_millis == 0 || self.timer.tick_millis > MAX_TICK_MILLIS {
            return Err(ConfigError::InvalidValue {
                key: "timer.tick_millis".into(),
                message: format!("must be between 1 and {MAX_TICK_MILLIS}"),
            });
        }
        Ok(())
    }

    /// Look up a value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "timer.session_length_secs" => Some(self.timer.session_length_secs.to_string()),
            "timer.tick_millis" => Some(self.timer.tick_millis.to_string()),
            "profile.user_name" => Some(self.profile.user_name.clone()),
            "profile.language" => Some(self.profile.language.clone()),
            "profile.dark_mode" => Some(self.profile.dark_mode.to_string()),
            "profile.notifications" => Some(self.profile.notifications.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_observed_values() {
        let config = Config::default();
        assert_eq!(config.timer.session_length_secs, 1500);
        assert_eq!(config.timer.tick_period(), Duration::from_secs(1));
        assert_eq!(config.profile.user_name, "John Doe");
        assert!(config.profile.notifications);
        assert!(!config.profile.dark_mode);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = Config::from_toml_str("[timer]\nsession_length_secs = 600\n").unwrap();
        assert_eq!(config.timer.session_length_secs, 600);
        assert_eq!(config.timer.tick_millis, 1000);
        assert_eq!(config.profile.language, "English");
    }

    #[test]
    fn zero_session_rejected() {
        let err = Config::from_toml_str("[timer]\nsession_length_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn tick_period_must_be_bounded() {
        for millis in [0, MAX_TICK_MILLIS + 1, i64::MAX as u64] {
            let err = Config::from_toml_str(&format!("[timer]\ntick_millis = {millis}\n"));
            assert!(
                matches!(err, Err(ConfigError::InvalidValue { ref key, .. }) if key == "timer.tick_millis"),
                "{millis} accepted"
            );
        }
        let config = Config::from_toml_str(&format!("[timer]\ntick_millis = {MAX_TICK_MILLIS}\n")).unwrap();
        assert_eq!(config.timer.tick_period(), Duration::from_secs(3600));
    }

    #[test]
    fn overrides_are_revalidated() {
        let mut config = Config::default();
        config.timer.tick_millis = u64::MAX;
        assert!(config.validate().is_err());
        config.timer.tick_millis = 10;
        config.timer.session_length_secs = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::from_toml_str("[timer\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nuser_name = \"Ada\"\ndark_mode = true").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.profile.user_name, "Ada");
        assert!(config.profile.dark_mode);
        assert_eq!(config.get("profile.dark_mode").as_deref(), Some("true"));
        assert_eq!(config.get("nope"), None);
    }
}
