//! Card model
//!
//! A card is read-only to the core: it is built once from the board source
//! and only inspected afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Opaque, stable identifier
    pub id: String,

    /// Short identifier used in card URLs (`/c/<short_link>`)
    pub short_link: String,

    /// Card title
    pub name: String,

    /// Short URL of the card
    pub url: String,

    /// List the card currently belongs to
    pub list_id: String,

    /// Names of the labels attached to the card
    pub label_names: Vec<String>,

    /// Last recorded change to the card
    pub last_activity: DateTime<Utc>,
}

impl Card {
    /// Create a card with only the fields the burndown needs
    ///
    /// The short link defaults to the id; name and URL are empty.
    pub fn new(
        id: impl Into<String>,
        list_id: impl Into<String>,
        last_activity: DateTime<Utc>,
    ) -> Self {
        let id = id.into();
        Self {
            short_link: id.clone(),
            id,
            name: String::new(),
            url: String::new(),
            list_id: list_id.into(),
            label_names: Vec::new(),
            last_activity,
        }
    }

    /// Set the card title
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the short link and the URL derived from it
    #[must_use]
    pub fn with_short_link(mut self, short_link: impl Into<String>) -> Self {
        self.short_link = short_link.into();
        self.url = format!("https://trello.com/c/{}", self.short_link);
        self
    }

    /// Attach labels by name
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Whether a pinned identifier refers to this card
    ///
    /// Pasted card URLs carry the short link, API payloads carry the full id;
    /// either one identifies the card.
    #[must_use]
    pub fn is_identified_by(&self, id: &str) -> bool {
        self.id == id || self.short_link == id
    }

    /// Whether the card carries a label with the given name
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.label_names.iter().any(|l| l == name)
    }
}
