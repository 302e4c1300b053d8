//! Remaining-work grouping
//!
//! Groups the sprint cards that are not yet done by the list they sit in,
//! following the board's list order.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::models::{BoardList, Card};

/// Sprint cards sitting in one list
#[derive(Debug, Clone, Serialize)]
pub struct ListGroup<'a> {
    /// The list
    pub list: &'a BoardList,
    /// Sprint cards in the list, in input order
    pub cards: Vec<&'a Card>,
}

impl ListGroup<'_> {
    /// Number of cards in the group
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Group outstanding sprint cards by list
///
/// Done lists and lists without sprint cards are left out. Cards whose list
/// is not on the board are dropped.
#[must_use]
pub fn group_remaining<'a>(
    lists: &'a [BoardList],
    sprint_cards: &[&'a Card],
    done_list_ids: &HashSet<String>,
) -> Vec<ListGroup<'a>> {
    lists
        .iter()
        .filter(|list| !done_list_ids.contains(&list.id))
        .filter_map(|list| {
            let cards: Vec<&Card> =
                sprint_cards.iter().copied().filter(|c| c.list_id == list.id).collect();
            (!cards.is_empty()).then_some(ListGroup { list, cards })
        })
        .collect()
}
