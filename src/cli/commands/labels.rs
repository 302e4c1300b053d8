//! Labels command - manage the labels that mark cards as in-sprint

use trello_sprint::core::services::board_label_names;
use trello_sprint::output::{ListResult, OperationResult};

use super::board::{load_board, load_settings};
use crate::cli::app::{LabelsAction, Session};

/// Handle sprint label subcommands
pub fn labels(action: LabelsAction, session: &Session) -> anyhow::Result<()> {
    let (store, mut settings) = load_settings()?;

    let message = match action {
        LabelsAction::Add { names } => {
            let added = settings.add_sprint_labels(names);
            settings.save_sprint_labels(&store)?;
            format!("Added {added} sprint label(s)")
        },
        LabelsAction::Remove { names } => {
            let removed = settings.remove_sprint_labels(&names);
            settings.save_sprint_labels(&store)?;
            format!("Removed {removed} sprint label(s)")
        },
        LabelsAction::List { available } => {
            let result = if available {
                let board = load_board(session)?;
                ListResult {
                    title: format!("Labels on {}", board.info.name),
                    items: board_label_names(&board.cards),
                }
            } else {
                ListResult {
                    title: "Sprint labels".to_string(),
                    items: settings.sprint_labels,
                }
            };
            result.render(session.output_mode);
            return Ok(());
        },
    };

    OperationResult::ok(message).render(session.output_mode);
    Ok(())
}
