//! Board access shared by the report commands

use trello_sprint::adapters::{JsonFileStore, SnapshotSource};
use trello_sprint::config::GlobalConfig;
use trello_sprint::core::models::{BoardList, Card};
use trello_sprint::core::ports::{BoardInfo, BoardSource};
use trello_sprint::links::extract_board_id;
use trello_sprint::settings::SprintSettings;

use crate::cli::app::Session;

/// Everything a report needs from one board
#[derive(Debug)]
pub struct LoadedBoard {
    /// Board metadata
    pub info: BoardInfo,
    /// Open lists in board order
    pub lists: Vec<BoardList>,
    /// Open cards
    pub cards: Vec<Card>,
}

/// Open the settings store at its default location
pub fn settings_store() -> JsonFileStore {
    JsonFileStore::default_location()
}

/// Load the persisted sprint settings
pub fn load_settings() -> anyhow::Result<(JsonFileStore, SprintSettings)> {
    let store = settings_store();
    let settings = SprintSettings::load(&store)?;
    Ok((store, settings))
}

/// Read board, lists and cards from the snapshot or the live API
pub fn load_board(session: &Session) -> anyhow::Result<LoadedBoard> {
    let config = GlobalConfig::load()?;

    let (source, snapshot_board): (Box<dyn BoardSource>, Option<String>) =
        if let Some(path) = &session.snapshot {
            let source = SnapshotSource::load(path)?;
            let id = source.board_id().to_string();
            (Box::new(source), Some(id))
        } else {
            (live_source(&config)?, None)
        };

    let board_id = resolve_board_id(session, &config, snapshot_board)?;
    log::debug!("reading board {board_id}");

    Ok(LoadedBoard {
        info: source.board(&board_id)?,
        lists: source.lists(&board_id)?,
        cards: source.cards(&board_id)?,
    })
}

/// Board id from `--board`, the config, or the snapshot, in that order
pub fn resolve_board_id(
    session: &Session,
    config: &GlobalConfig,
    fallback: Option<String>,
) -> anyhow::Result<String> {
    if let Some(arg) = &session.board {
        return extract_board_id(arg)
            .ok_or_else(|| anyhow::anyhow!("not a board URL or id: {arg}"));
    }
    if let Some(board) = &config.default_board {
        return extract_board_id(board)
            .ok_or_else(|| anyhow::anyhow!("default_board is not a board URL or id: {board}"));
    }
    fallback.ok_or_else(|| {
        anyhow::anyhow!("no board given: pass --board <url> or set default_board in the config")
    })
}

#[cfg(feature = "trello")]
fn live_source(config: &GlobalConfig) -> anyhow::Result<Box<dyn BoardSource>> {
    Ok(Box::new(trello_sprint::adapters::trello::TrelloSource::new(&config.trello)?))
}

#[cfg(not(feature = "trello"))]
fn live_source(_config: &GlobalConfig) -> anyhow::Result<Box<dyn BoardSource>> {
    anyhow::bail!(
        "this build cannot reach the Trello API; pass --snapshot <file> \
         or rebuild with --features trello"
    )
}
