//! Resolution of configured names onto the board
//!
//! Users configure done columns by name; the burndown works with list ids.

use std::collections::HashSet;

use crate::core::models::{BoardList, Card};

/// Ids of the lists whose name is configured as done
#[must_use]
pub fn resolve_done_list_ids(lists: &[BoardList], done_column_names: &[String]) -> HashSet<String> {
    lists
        .iter()
        .filter(|list| done_column_names.contains(&list.name))
        .map(|list| list.id.clone())
        .collect()
}

/// Configured done column names that exist on the board, in board order
#[must_use]
pub fn known_done_columns(lists: &[BoardList], done_column_names: &[String]) -> Vec<String> {
    let mut known: Vec<String> = Vec::new();
    for list in lists {
        if done_column_names.contains(&list.name) && !known.contains(&list.name) {
            known.push(list.name.clone());
        }
    }
    known
}

/// Distinct label names used on the board, in order of first appearance
#[must_use]
pub fn board_label_names(cards: &[Card]) -> Vec<String> {
    let mut seen = HashSet::new();
    cards
        .iter()
        .flat_map(|card| card.label_names.iter())
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
