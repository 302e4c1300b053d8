//! Persisted sprint settings
//!
//! Typed view over a [`SettingsStore`]. Every setting is stored under its
//! own namespaced key as a JSON document, so a damaged value only loses
//! that one setting: it falls back to its default with a warning.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::{BoardList, SprintConfiguration, SprintWindow, parse_sprint_date};
use crate::core::ports::SettingsStore;
use crate::core::services::resolve_done_list_ids;

/// Prefix applied to every key written to the store
pub const KEY_PREFIX: &str = "trellosprint_";

/// Done column names (JSON array of strings)
pub const DONE_COLUMNS_KEY: &str = "doneColumns";

/// Sprint bounds (JSON `[start, end]`, RFC 3339 strings or null)
pub const SPRINT_DATES_KEY: &str = "sprintDates";

/// Pinned card ids (JSON array of strings)
pub const SPRINT_CARDS_KEY: &str = "sprintCards";

/// Sprint label names (JSON array of strings)
pub const SPRINT_LABELS_KEY: &str = "sprintLabels";

/// Done columns used until the user picks their own
pub const DEFAULT_DONE_COLUMNS: [&str; 5] = [
    "QA Dev",
    "Ready for Master",
    "Ready for release",
    "Released in Sprint",
    "Notify Customer Team",
];

/// Sprint labels used until the user picks their own
pub const DEFAULT_SPRINT_LABELS: [&str; 1] = ["Sprint"];

/// The namespaced store key for a setting
#[must_use]
pub fn store_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// Sprint settings as remembered between invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintSettings {
    /// List names whose cards count as done
    pub done_columns: Vec<String>,
    /// Sprint start, if chosen
    pub sprint_start: Option<DateTime<Utc>>,
    /// Sprint end, if chosen
    pub sprint_end: Option<DateTime<Utc>>,
    /// Cards pinned to the sprint
    pub card_ids: Vec<String>,
    /// Labels that mark cards as in-sprint
    pub sprint_labels: Vec<String>,
}

impl Default for SprintSettings {
    fn default() -> Self {
        Self {
            done_columns: DEFAULT_DONE_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
            sprint_start: None,
            sprint_end: None,
            card_ids: Vec::new(),
            sprint_labels: DEFAULT_SPRINT_LABELS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl SprintSettings {
    /// Load all settings, using defaults for anything missing or unreadable
    pub fn load<S>(store: &S) -> anyhow::Result<Self>
    where
        S: SettingsStore + ?Sized,
    {
        let mut settings = Self::default();

        if let Some(done) = read_json::<Vec<String>, _>(store, DONE_COLUMNS_KEY)? {
            settings.done_columns = done;
        }
        if let Some(dates) = read_json::<Vec<Option<String>>, _>(store, SPRINT_DATES_KEY)? {
            let mut dates = dates.into_iter().map(|d| d.as_deref().and_then(parse_stored_date));
            settings.sprint_start = dates.next().flatten();
            settings.sprint_end = dates.next().flatten();
        }
        if let Some(cards) = read_json::<Vec<String>, _>(store, SPRINT_CARDS_KEY)? {
            settings.card_ids = cards;
        }
        if let Some(labels) = read_json::<Vec<String>, _>(store, SPRINT_LABELS_KEY)? {
            settings.sprint_labels = labels;
        }

        Ok(settings)
    }

    /// Persist every setting
    pub fn save<S>(&self, store: &S) -> anyhow::Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        self.save_done_columns(store)?;
        self.save_sprint_dates(store)?;
        self.save_card_ids(store)?;
        self.save_sprint_labels(store)
    }

    /// Persist the done column names
    pub fn save_done_columns<S>(&self, store: &S) -> anyhow::Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        write_json(store, DONE_COLUMNS_KEY, &self.done_columns)
    }

    /// Persist the sprint dates
    pub fn save_sprint_dates<S>(&self, store: &S) -> anyhow::Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        let dates = [self.sprint_start.map(format_date), self.sprint_end.map(format_date)];
        write_json(store, SPRINT_DATES_KEY, &dates)
    }

    /// Persist the pinned card ids
    pub fn save_card_ids<S>(&self, store: &S) -> anyhow::Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        write_json(store, SPRINT_CARDS_KEY, &self.card_ids)
    }

    /// Persist the sprint labels
    pub fn save_sprint_labels<S>(&self, store: &S) -> anyhow::Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        write_json(store, SPRINT_LABELS_KEY, &self.sprint_labels)
    }

    /// Sprint bounds, once both dates are chosen
    #[must_use]
    pub fn window(&self) -> Option<SprintWindow> {
        Some(SprintWindow::new(self.sprint_start?, self.sprint_end?))
    }

    /// Resolve the settings against the board's lists
    ///
    /// `None` until both sprint dates are chosen.
    #[must_use]
    pub fn configuration(&self, lists: &[BoardList]) -> Option<SprintConfiguration> {
        Some(SprintConfiguration {
            done_list_ids: resolve_done_list_ids(lists, &self.done_columns),
            explicit_card_ids: self.card_ids.iter().cloned().collect(),
            sprint_label_names: self.sprint_labels.iter().cloned().collect(),
            window: self.window()?,
        })
    }

    /// Pin cards; returns how many were not pinned already
    pub fn add_card_ids<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        add_unique(&mut self.card_ids, ids)
    }

    /// Unpin cards; returns how many were removed
    pub fn remove_card_ids(&mut self, ids: &[String]) -> usize {
        remove_all(&mut self.card_ids, ids)
    }

    /// Mark columns as done; returns how many were new
    pub fn add_done_columns<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        add_unique(&mut self.done_columns, names)
    }

    /// Unmark done columns; returns how many were removed
    pub fn remove_done_columns(&mut self, names: &[String]) -> usize {
        remove_all(&mut self.done_columns, names)
    }

    /// Add sprint labels; returns how many were new
    pub fn add_sprint_labels<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        add_unique(&mut self.sprint_labels, names)
    }

    /// Remove sprint labels; returns how many were removed
    pub fn remove_sprint_labels(&mut self, names: &[String]) -> usize {
        remove_all(&mut self.sprint_labels, names)
    }
}

fn add_unique<I>(target: &mut Vec<String>, items: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    let before = target.len();
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
    target.len() - before
}

fn remove_all(target: &mut Vec<String>, items: &[String]) -> usize {
    let before = target.len();
    target.retain(|t| !items.contains(t));
    before - target.len()
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_stored_date(raw: &str) -> Option<DateTime<Utc>> {
    parse_sprint_date(raw)
        .map_err(|e| log::warn!("ignoring stored sprint date: {e}"))
        .ok()
}

fn read_json<T, S>(store: &S, key: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
    S: SettingsStore + ?Sized,
{
    let Some(raw) = store.get(&store_key(key))? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("setting '{key}' is unreadable, using default: {e}");
            Ok(None)
        },
    }
}

fn write_json<T, S>(store: &S, key: &str, value: &T) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    S: SettingsStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    log::debug!("saving setting '{key}'");
    store.set(&store_key(key), &raw)
}
