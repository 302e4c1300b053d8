//! Init command - write a default config

use trello_sprint::config::GlobalConfig;
use trello_sprint::core::ports::SettingsStore;
use trello_sprint::links::extract_board_id;
use trello_sprint::output::OperationResult;
use trello_sprint::settings::{DONE_COLUMNS_KEY, SprintSettings, store_key};

use super::board::settings_store;
use crate::cli::app::Session;

/// Write the config file, and default settings if none exist yet
pub fn init(force: bool, session: &Session) -> anyhow::Result<()> {
    let path = GlobalConfig::config_path();
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let mut config = GlobalConfig::default();
    if let Some(board) = &session.board {
        let id = extract_board_id(board)
            .ok_or_else(|| anyhow::anyhow!("not a board URL or id: {board}"))?;
        config.default_board = Some(id);
    }
    config.save_to(&path)?;

    let store = settings_store();
    if store.get(&store_key(DONE_COLUMNS_KEY))?.is_none() {
        SprintSettings::default().save(&store)?;
        log::debug!("wrote default settings to {}", store.path().display());
    }

    OperationResult::ok(format!("Created {}", path.display())).render(session.output_mode);
    Ok(())
}
