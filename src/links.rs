//! Card and board identifier extraction from pasted text
//!
//! Users pin cards to the sprint by pasting card links. Anything that does
//! not look like a card link is silently ignored.

use std::sync::LazyLock;

use regex::Regex;

static CARD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?trello\.com/c/([A-Za-z0-9]{8,})").expect("valid card regex")
});

static BOARD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?trello\.com/b/([A-Za-z0-9]{8,})").expect("valid board regex")
});

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{8,}$").expect("valid id regex"));

/// Extract card short links from pasted text
///
/// Duplicates are removed, first occurrence wins.
#[must_use]
pub fn extract_card_ids(text: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for caps in CARD_URL.captures_iter(text) {
        let id = &caps[1];
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Extract a board id from a board URL or a bare id
#[must_use]
pub fn extract_board_id(text: &str) -> Option<String> {
    let text = text.trim();
    if let Some(caps) = BOARD_URL.captures(text) {
        return Some(caps[1].to_string());
    }
    BARE_ID.is_match(text).then(|| text.to_string())
}
