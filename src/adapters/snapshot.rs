//! Snapshot board source
//!
//! Serves a board from a JSON file in the REST wire format, as written by
//! `trello-sprint fetch`. Lets reports run offline and against fixtures.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::{BoardList, Card};
use crate::core::ports::{BoardInfo, BoardSource};

use super::trello::BoardSnapshot;
use super::trello::types::{open_cards, open_lists};

/// Board source backed by a saved snapshot
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: BoardSnapshot,
}

impl SnapshotSource {
    /// Wrap an in-memory snapshot
    #[must_use]
    pub const fn new(snapshot: BoardSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let snapshot: BoardSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;
        log::debug!(
            "loaded snapshot of '{}' ({} lists, {} cards)",
            snapshot.board.name,
            snapshot.lists.len(),
            snapshot.cards.len()
        );
        Ok(Self::new(snapshot))
    }

    /// Save a snapshot file, creating its directory
    pub fn save(snapshot: &BoardSnapshot, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(snapshot)?)
            .with_context(|| format!("failed to write snapshot {}", path.display()))
    }

    /// The id of the snapshotted board
    #[must_use]
    pub fn board_id(&self) -> &str {
        &self.snapshot.board.id
    }

    fn check_board(&self, board_id: &str) {
        let board = &self.snapshot.board;
        let matches = board.id == board_id
            || board.short_url.ends_with(board_id)
            || board.url.contains(&format!("/b/{board_id}"));
        if !matches {
            log::warn!(
                "snapshot holds board '{}' ({}), not {board_id}; using it anyway",
                board.name,
                board.id
            );
        }
    }
}

impl BoardSource for SnapshotSource {
    fn board(&self, board_id: &str) -> anyhow::Result<BoardInfo> {
        self.check_board(board_id);
        Ok(self.snapshot.board.clone().into())
    }

    fn lists(&self, board_id: &str) -> anyhow::Result<Vec<BoardList>> {
        self.check_board(board_id);
        Ok(open_lists(self.snapshot.lists.clone()))
    }

    fn cards(&self, board_id: &str) -> anyhow::Result<Vec<Card>> {
        self.check_board(board_id);
        Ok(open_cards(self.snapshot.cards.clone()))
    }
}
