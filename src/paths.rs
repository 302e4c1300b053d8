//! Centralized path definitions for trello-sprint
//!
//! This module provides a single source of truth for all filesystem paths.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.trello-sprint/          # or $TRELLO_SPRINT_HOME
//! ├── config.toml            # API credentials, default board
//! └── settings.json          # Sprint settings (dates, done columns, cards)
//! ```

use std::path::PathBuf;

/// Environment variable that relocates the whole storage directory
pub const HOME_ENV: &str = "TRELLO_SPRINT_HOME";

/// Directory name under the user's home
const APP_DIR: &str = ".trello-sprint";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Settings filename
const SETTINGS_FILE: &str = "settings.json";

/// Get the storage directory.
///
/// Returns `$TRELLO_SPRINT_HOME` when set, otherwise `~/.trello-sprint/`.
#[must_use]
pub fn app_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(APP_DIR),
    }
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

/// Get the settings file path.
///
/// Holds the persisted sprint settings as a flat JSON object.
#[must_use]
pub fn settings_file() -> PathBuf {
    app_dir().join(SETTINGS_FILE)
}
