//! Fetch command - save a board snapshot from the Trello API

use std::path::PathBuf;

use crate::cli::app::Session;

/// Fetch the board and write it to a snapshot file
#[cfg(feature = "trello")]
pub fn fetch(output: Option<PathBuf>, session: &Session) -> anyhow::Result<()> {
    use trello_sprint::adapters::SnapshotSource;
    use trello_sprint::adapters::trello::TrelloSource;
    use trello_sprint::config::GlobalConfig;
    use trello_sprint::output::OperationResult;

    let config = GlobalConfig::load()?;
    let board_id = super::board::resolve_board_id(session, &config, None)?;

    let source = TrelloSource::new(&config.trello)?;
    let snapshot = source.snapshot(&board_id)?;

    let path = output.unwrap_or_else(|| PathBuf::from(format!("{board_id}.json")));
    SnapshotSource::save(&snapshot, &path)?;

    OperationResult::ok(format!(
        "Saved '{}' ({} lists, {} cards) to {}",
        snapshot.board.name,
        snapshot.lists.len(),
        snapshot.cards.len(),
        path.display()
    ))
    .render(session.output_mode);
    Ok(())
}

/// Fetch the board and write it to a snapshot file
#[cfg(not(feature = "trello"))]
pub fn fetch(_output: Option<PathBuf>, _session: &Session) -> anyhow::Result<()> {
    anyhow::bail!("this build cannot reach the Trello API; rebuild with --features trello")
}
