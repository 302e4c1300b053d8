//! Global configuration management
//!
//! Holds the Trello API credentials and the default board.
//! Config is stored at `~/.trello-sprint/config.toml`; the environment
//! variables `TRELLO_API_KEY`, `TRELLO_TOKEN` and `TRELLO_BOARD` take
//! precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Default REST API root
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Global trello-sprint configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Board used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_board: Option<String>,
    /// API access
    #[serde(default)]
    pub trello: TrelloConfig,
}

/// API access settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// Application key
    #[serde(default)]
    pub api_key: String,
    /// User token granted to the application
    #[serde(default)]
    pub token: String,
    /// REST API root
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            token: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl TrelloConfig {
    /// Whether both key and token are present
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.token.is_empty()
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk with environment overrides applied
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load config from a file, or the default if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))
    }

    /// Save config to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides through `lookup`
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(key) = lookup("TRELLO_API_KEY") {
            self.trello.api_key = key;
        }
        if let Some(token) = lookup("TRELLO_TOKEN") {
            self.trello.token = token;
        }
        if let Some(board) = lookup("TRELLO_BOARD") {
            self.default_board = Some(board);
        }
    }
}
