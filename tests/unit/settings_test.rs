//! Tests for sprint settings persisted through the JSON file store

use std::fs;

use tempfile::TempDir;
use trello_sprint::adapters::JsonFileStore;
use trello_sprint::core::ports::SettingsStore;
use trello_sprint::settings::{SprintSettings, store_key};

use crate::common::{board_lists, day, set};

fn store_in(temp: &TempDir) -> JsonFileStore {
    JsonFileStore::new(temp.path().join("settings.json"))
}

#[test]
fn test_settings_survive_a_new_store_instance() {
    let temp = TempDir::new().unwrap();

    let mut settings = SprintSettings::default();
    settings.sprint_start = Some(day(2024, 1, 1));
    settings.sprint_end = Some(day(2024, 1, 15));
    settings.add_card_ids(["AbCd1234".to_string()]);
    settings.save(&store_in(&temp)).unwrap();

    let loaded = SprintSettings::load(&store_in(&temp)).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_file_uses_prefixed_keys_and_json_values() {
    let temp = TempDir::new().unwrap();
    let mut settings = SprintSettings::default();
    settings.sprint_start = Some(day(2024, 1, 1));
    settings.save_sprint_dates(&store_in(&temp)).unwrap();

    let raw = fs::read_to_string(temp.path().join("settings.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let dates = doc["trellosprint_sprintDates"].as_str().unwrap();
    assert_eq!(dates, r#"["2024-01-01T00:00:00.000Z",null]"#);
}

#[test]
fn test_values_written_by_hand_are_read() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.set(&store_key("doneColumns"), r#"["Shipped"]"#).unwrap();
    store.set(&store_key("sprintLabels"), "[]").unwrap();
    store
        .set(&store_key("sprintDates"), r#"["2024-01-01T00:00:00.000Z","2024-01-15T00:00:00.000Z"]"#)
        .unwrap();

    let settings = SprintSettings::load(&store).unwrap();
    assert_eq!(settings.done_columns, vec!["Shipped"]);
    assert!(settings.sprint_labels.is_empty());
    assert_eq!(settings.window().unwrap().week_count(), 2);
}

#[test]
fn test_configuration_requires_both_dates() {
    let mut settings = SprintSettings::default();
    settings.sprint_start = Some(day(2024, 1, 1));
    assert!(settings.configuration(&board_lists()).is_none());

    settings.sprint_end = Some(day(2024, 1, 15));
    let config = settings.configuration(&board_lists()).unwrap();
    assert_eq!(config.done_list_ids, set(&["done"]));
    assert_eq!(config.sprint_label_names, set(&["Sprint"]));
}

#[test]
fn test_remove_accepts_unknown_names() {
    let mut settings = SprintSettings::default();
    let before = settings.done_columns.len();
    assert_eq!(settings.remove_done_columns(&["Nope".to_string()]), 0);
    assert_eq!(settings.remove_done_columns(&["Released in Sprint".to_string()]), 1);
    assert_eq!(settings.done_columns.len(), before - 1);
}
