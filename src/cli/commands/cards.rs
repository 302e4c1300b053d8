//! Cards command - pin cards to the sprint from pasted links

use trello_sprint::links::extract_card_ids;
use trello_sprint::output::{ListResult, OperationResult};

use super::board::load_settings;
use crate::cli::app::{CardsAction, Session};

/// Handle pinned card subcommands
pub fn cards(action: CardsAction, session: &Session) -> anyhow::Result<()> {
    let (store, mut settings) = load_settings()?;

    let message = match action {
        CardsAction::Add { text } => {
            let ids = extract_card_ids(&text.join(" "));
            if ids.is_empty() {
                log::warn!("no card links found in the given text");
            }
            let found = ids.len();
            let added = settings.add_card_ids(ids);
            settings.save_card_ids(&store)?;
            format!("Pinned {added} card(s) ({found} link(s) found)")
        },
        CardsAction::Remove { ids } => {
            let ids: Vec<String> = ids
                .into_iter()
                .flat_map(|arg| {
                    let from_links = extract_card_ids(&arg);
                    if from_links.is_empty() { vec![arg] } else { from_links }
                })
                .collect();
            let removed = settings.remove_card_ids(&ids);
            settings.save_card_ids(&store)?;
            format!("Unpinned {removed} card(s)")
        },
        CardsAction::List => {
            ListResult {
                title: "Sprint cards".to_string(),
                items: settings.card_ids,
            }
            .render(session.output_mode);
            return Ok(());
        },
        CardsAction::Clear => {
            let removed = settings.card_ids.len();
            settings.card_ids.clear();
            settings.save_card_ids(&store)?;
            format!("Unpinned {removed} card(s)")
        },
    };

    OperationResult::ok(message).render(session.output_mode);
    Ok(())
}
