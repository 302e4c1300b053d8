//! Burndown command - weekly expected vs actual remaining cards

use trello_sprint::core::models::IdealCurve;
use trello_sprint::core::services::{build_burndown_with, select_sprint_cards};
use trello_sprint::output::BurndownReport;

use super::board::{load_board, load_settings};
use crate::cli::app::Session;

/// Compute and print the sprint burndown
pub fn burndown(curve: IdealCurve, session: &Session) -> anyhow::Result<()> {
    let (_, settings) = load_settings()?;
    let board = load_board(session)?;

    let Some(sprint) = settings.configuration(&board.lists) else {
        anyhow::bail!("sprint dates not set; run `trello-sprint dates set <start> <end>`");
    };

    if sprint.done_list_ids.is_empty() {
        log::warn!("none of the done columns exist on this board; nothing will count as done");
    }

    let cards = select_sprint_cards(
        &board.cards,
        &sprint.explicit_card_ids,
        &sprint.sprint_label_names,
    );
    log::debug!("{} of {} cards are in the sprint", cards.len(), board.cards.len());

    let burndown = build_burndown_with(
        cards.iter().copied(),
        &sprint.done_list_ids,
        sprint.window.start,
        sprint.window.end,
        curve,
    );

    BurndownReport::new(
        board.info.name,
        curve,
        sprint.window.start,
        sprint.window.end,
        sprint.explicit_card_ids.len(),
        burndown,
    )
    .render(session.output_mode);
    Ok(())
}
