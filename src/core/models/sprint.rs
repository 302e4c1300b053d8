//! Sprint window and configuration
//!
//! The sprint is a calendar window; everything the burndown does with time is
//! expressed as a whole-week offset from the window start.
//!
//! # Examples
//!
//! ```
//! use trello_sprint::core::models::{SprintWindow, parse_sprint_date};
//!
//! let window = SprintWindow::new(
//!     parse_sprint_date("2024-01-01").unwrap(),
//!     parse_sprint_date("2024-01-15").unwrap(),
//! );
//! assert_eq!(window.week_count(), 2);
//! ```

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Errors that can occur when parsing a sprint date
#[derive(Debug, Error)]
pub enum DateParseError {
    /// Date string was empty
    #[error("empty date")]
    Empty,

    /// Neither an RFC 3339 timestamp nor a `YYYY-MM-DD` date
    #[error("invalid date '{0}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    Invalid(String),
}

/// Parse a sprint boundary
///
/// Accepts RFC 3339 timestamps (as stored in settings) or plain calendar
/// dates, which are taken as midnight UTC.
pub fn parse_sprint_date(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateParseError::Empty);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| DateParseError::Invalid(input.to_string()))
}

/// Inclusive calendar bounds of a sprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintWindow {
    /// First moment of the sprint
    pub start: DateTime<Utc>,
    /// Last moment of the sprint
    pub end: DateTime<Utc>,
}

impl SprintWindow {
    /// Create a window; `end` before `start` is allowed and yields a negative week count
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whole weeks between start and end, truncated toward zero
    #[must_use]
    pub fn week_count(&self) -> i64 {
        (self.end - self.start).num_weeks()
    }

    /// Whole weeks from the sprint start to `ts`, truncated toward zero
    ///
    /// Not clamped to the window: activity before the start yields zero or a
    /// negative offset, activity after the end yields an offset past
    /// [`week_count`](Self::week_count).
    #[must_use]
    pub fn week_offset(&self, ts: DateTime<Utc>) -> i64 {
        (ts - self.start).num_weeks()
    }
}

/// Resolved sprint settings the core works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintConfiguration {
    /// Lists whose cards count as finished work
    pub done_list_ids: HashSet<String>,
    /// Cards pinned to the sprint by id or short link
    pub explicit_card_ids: HashSet<String>,
    /// Labels whose presence also marks a card as in-sprint
    pub sprint_label_names: HashSet<String>,
    /// Sprint bounds
    pub window: SprintWindow,
}
