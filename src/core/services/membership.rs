//! Sprint membership filter
//!
//! A card is in the sprint when it is pinned explicitly or carries one of
//! the sprint labels. With neither criterion configured the sprint is empty,
//! never "every card on the board".

use std::collections::HashSet;

use crate::core::models::Card;

/// Select the cards that belong to the sprint
///
/// Keeps the input order. A card matches when its id or short link is in
/// `explicit_card_ids`, or when any of its labels is in `sprint_label_names`.
#[must_use]
pub fn select_sprint_cards<'a>(
    all_cards: &'a [Card],
    explicit_card_ids: &HashSet<String>,
    sprint_label_names: &HashSet<String>,
) -> Vec<&'a Card> {
    if explicit_card_ids.is_empty() && sprint_label_names.is_empty() {
        return Vec::new();
    }

    all_cards
        .iter()
        .filter(|card| {
            explicit_card_ids.iter().any(|id| card.is_identified_by(id))
                || sprint_label_names.iter().any(|label| card.has_label(label))
        })
        .collect()
}
