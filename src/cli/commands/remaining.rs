//! Remaining command - outstanding sprint cards grouped by list

use std::collections::HashSet;

use trello_sprint::core::services::{group_remaining, resolve_done_list_ids, select_sprint_cards};
use trello_sprint::output::RemainingReport;

use super::board::{load_board, load_settings};
use crate::cli::app::Session;

/// Print the sprint cards that are not done yet
pub fn remaining(session: &Session) -> anyhow::Result<()> {
    let (_, settings) = load_settings()?;
    let board = load_board(session)?;

    let explicit: HashSet<String> = settings.card_ids.iter().cloned().collect();
    let labels: HashSet<String> = settings.sprint_labels.iter().cloned().collect();
    let done = resolve_done_list_ids(&board.lists, &settings.done_columns);

    let cards = select_sprint_cards(&board.cards, &explicit, &labels);
    let groups = group_remaining(&board.lists, &cards, &done);

    RemainingReport::new(board.info.name.clone(), &groups).render(session.output_mode);
    Ok(())
}
