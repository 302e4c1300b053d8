//! Board list model

use serde::{Deserialize, Serialize};

/// A list (column) on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    /// List identifier
    pub id: String,
    /// Display name, which is what users configure as "done"
    pub name: String,
    /// Whether the list is archived
    #[serde(default)]
    pub closed: bool,
    /// Sort position on the board
    #[serde(default)]
    pub position: f64,
}

impl BoardList {
    /// Create an open list at position 0
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            closed: false,
            position: 0.0,
        }
    }
}
