//! Status command - summary of the stored sprint configuration

use std::collections::HashSet;

use trello_sprint::core::services::{known_done_columns, select_sprint_cards};
use trello_sprint::output::StatusReport;

use super::board::{load_board, load_settings};
use crate::cli::app::Session;

/// Show the sprint settings, enriched with board data when reachable
pub fn status(session: &Session) -> anyhow::Result<()> {
    let (_, settings) = load_settings()?;

    let board = match load_board(session) {
        Ok(board) => Some(board),
        Err(err) => {
            log::debug!("board unavailable: {err:#}");
            None
        },
    };

    let window = settings.window();
    let mut report = StatusReport {
        board: None,
        sprint_start: settings.sprint_start,
        sprint_end: settings.sprint_end,
        weeks: window.map(|w| w.week_count()),
        total_cards: None,
        sprint_card_ids: settings.card_ids.len(),
        done_columns: settings.done_columns.clone(),
        done_columns_on_board: Vec::new(),
        sprint_labels: settings.sprint_labels.clone(),
    };

    if let Some(board) = &board {
        let explicit: HashSet<String> = settings.card_ids.iter().cloned().collect();
        let labels: HashSet<String> = settings.sprint_labels.iter().cloned().collect();
        report.board = Some(board.info.name.clone());
        report.total_cards = Some(select_sprint_cards(&board.cards, &explicit, &labels).len());
        report.done_columns_on_board = known_done_columns(&board.lists, &settings.done_columns);
    }

    report.render(session.output_mode);
    Ok(())
}
