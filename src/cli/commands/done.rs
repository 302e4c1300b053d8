//! Done command - manage the columns that count as done

use trello_sprint::output::{ListResult, OperationResult};
use trello_sprint::settings::SprintSettings;

use super::board::load_settings;
use crate::cli::app::{DoneAction, Session};

/// Handle done column subcommands
pub fn done(action: DoneAction, session: &Session) -> anyhow::Result<()> {
    let (store, mut settings) = load_settings()?;

    let message = match action {
        DoneAction::Add { names } => {
            let added = settings.add_done_columns(names);
            settings.save_done_columns(&store)?;
            format!("Added {added} done column(s)")
        },
        DoneAction::Remove { names } => {
            let removed = settings.remove_done_columns(&names);
            settings.save_done_columns(&store)?;
            format!("Removed {removed} done column(s)")
        },
        DoneAction::List => {
            ListResult {
                title: "Done columns".to_string(),
                items: settings.done_columns,
            }
            .render(session.output_mode);
            return Ok(());
        },
        DoneAction::Reset => {
            settings.done_columns = SprintSettings::default().done_columns;
            settings.save_done_columns(&store)?;
            "Done columns reset to defaults".to_string()
        },
    };

    OperationResult::ok(message).render(session.output_mode);
    Ok(())
}
