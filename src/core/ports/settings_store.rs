//! Settings store port
//!
//! Defines the key/value persistence used to remember sprint settings
//! across invocations.

/// Key/value store for user settings
///
/// Values are opaque strings; the settings layer decides their encoding.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
