//! Board source port
//!
//! Defines the interface for reading a board snapshot.

use serde::{Deserialize, Serialize};

use super::super::models::{BoardList, Card};

/// Board metadata shown in reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    /// Board identifier
    pub id: String,
    /// Board name
    pub name: String,
    /// Board URL
    #[serde(default)]
    pub url: String,
}

/// Read-only access to a project board
///
/// The core treats whatever this returns as an opaque snapshot taken once
/// per invocation.
pub trait BoardSource {
    /// Board metadata
    fn board(&self, board_id: &str) -> anyhow::Result<BoardInfo>;

    /// Open lists on the board, in board order
    fn lists(&self, board_id: &str) -> anyhow::Result<Vec<BoardList>>;

    /// All open cards on the board
    fn cards(&self, board_id: &str) -> anyhow::Result<Vec<Card>>;
}
