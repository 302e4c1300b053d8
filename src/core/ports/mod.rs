//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (the Trello API, the settings file).
//!
//! Implementations live in the `adapters` module.

mod board_source;
mod settings_store;

pub use board_source::{BoardInfo, BoardSource};
pub use settings_store::SettingsStore;
#[cfg(test)]
pub use settings_store::MockSettingsStore;
