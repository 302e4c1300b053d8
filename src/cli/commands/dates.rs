//! Dates command - set, show, clear the sprint dates

use trello_sprint::core::models::{SprintWindow, parse_sprint_date};
use trello_sprint::output::OperationResult;

use super::board::load_settings;
use crate::cli::app::{DatesAction, Session};

/// Handle sprint date subcommands
pub fn dates(action: DatesAction, session: &Session) -> anyhow::Result<()> {
    let (store, mut settings) = load_settings()?;

    let message = match action {
        DatesAction::Set { start, end } => {
            let start = parse_sprint_date(&start)?;
            let end = parse_sprint_date(&end)?;
            if end < start {
                log::warn!("sprint ends before it starts; reports will be empty");
            }
            settings.sprint_start = Some(start);
            settings.sprint_end = Some(end);
            settings.save_sprint_dates(&store)?;
            format!("Sprint set: {}", describe(SprintWindow::new(start, end)))
        },
        DatesAction::Show => match settings.window() {
            Some(window) => format!("Sprint: {}", describe(window)),
            None => "Sprint dates not set".to_string(),
        },
        DatesAction::Clear => {
            settings.sprint_start = None;
            settings.sprint_end = None;
            settings.save_sprint_dates(&store)?;
            "Sprint dates cleared".to_string()
        },
    };

    OperationResult::ok(message).render(session.output_mode);
    Ok(())
}

fn describe(window: SprintWindow) -> String {
    format!(
        "{} to {} ({} weeks)",
        window.start.format("%Y-%m-%d"),
        window.end.format("%Y-%m-%d"),
        window.week_count()
    )
}
