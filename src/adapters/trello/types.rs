//! Trello wire types
//!
//! Only the fields the reports use are kept; everything else in the API
//! payload is ignored on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{BoardList, Card};
use crate::core::ports::BoardInfo;

/// Board payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloBoard {
    /// Board id
    pub id: String,
    /// Board name
    pub name: String,
    /// Full URL
    #[serde(default)]
    pub url: String,
    /// Short URL
    #[serde(default)]
    pub short_url: String,
}

/// List payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    /// List id
    pub id: String,
    /// List name
    pub name: String,
    /// Archived flag
    #[serde(default)]
    pub closed: bool,
    /// Sort position
    #[serde(default)]
    pub pos: f64,
}

/// Label attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloLabel {
    /// Label id
    #[serde(default)]
    pub id: String,
    /// Label name, possibly empty
    #[serde(default)]
    pub name: String,
    /// Label color, if any
    #[serde(default)]
    pub color: Option<String>,
}

/// Card payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloCard {
    /// Card id
    pub id: String,
    /// Card title
    #[serde(default)]
    pub name: String,
    /// Containing list
    pub id_list: String,
    /// Short id used in card URLs
    #[serde(default)]
    pub short_link: String,
    /// Short URL
    #[serde(default)]
    pub short_url: String,
    /// Last activity timestamp
    pub date_last_activity: DateTime<Utc>,
    /// Attached labels
    #[serde(default)]
    pub labels: Vec<TrelloLabel>,
    /// Archived flag
    #[serde(default)]
    pub closed: bool,
}

/// Everything the reports need from one board, as saved by `fetch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board metadata
    pub board: TrelloBoard,
    /// Lists on the board
    #[serde(default)]
    pub lists: Vec<TrelloList>,
    /// Cards on the board
    #[serde(default)]
    pub cards: Vec<TrelloCard>,
}

impl From<TrelloBoard> for BoardInfo {
    fn from(board: TrelloBoard) -> Self {
        let url = if board.short_url.is_empty() { board.url } else { board.short_url };
        Self {
            id: board.id,
            name: board.name,
            url,
        }
    }
}

impl From<TrelloList> for BoardList {
    fn from(list: TrelloList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            closed: list.closed,
            position: list.pos,
        }
    }
}

impl From<TrelloCard> for Card {
    fn from(card: TrelloCard) -> Self {
        let short_link = if card.short_link.is_empty() { card.id.clone() } else { card.short_link };
        Self {
            id: card.id,
            short_link,
            name: card.name,
            url: card.short_url,
            list_id: card.id_list,
            label_names: card
                .labels
                .into_iter()
                .map(|l| l.name)
                .filter(|name| !name.is_empty())
                .collect(),
            last_activity: card.date_last_activity,
        }
    }
}

/// Open lists in board order
#[must_use]
pub fn open_lists(lists: Vec<TrelloList>) -> Vec<BoardList> {
    let mut open: Vec<BoardList> =
        lists.into_iter().filter(|l| !l.closed).map(BoardList::from).collect();
    open.sort_by(|a, b| a.position.total_cmp(&b.position));
    open
}

/// Open cards as domain cards
#[must_use]
pub fn open_cards(cards: Vec<TrelloCard>) -> Vec<Card> {
    cards.into_iter().filter(|c| !c.closed).map(Card::from).collect()
}
