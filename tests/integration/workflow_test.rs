//! End-to-end sprint workflows against the board snapshot

use predicates::prelude::*;
use tempfile::TempDir;

use super::{fixture, json_output, pin_card, set_dates, trello_sprint};

/// Sprint of 2024-01-01 to 2024-01-15 over the fixture board:
/// three labelled cards plus one pinned card, one finished in week 0 and one
/// in week 1
#[test]
fn test_burndown_json() {
    let home = TempDir::new().unwrap();
    set_dates(home.path());
    pin_card(home.path());
    let snapshot = fixture();

    let report = json_output(trello_sprint(home.path()).args([
        "--json",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "burndown",
    ]));

    assert_eq!(report["board"], "Team Board");
    assert_eq!(report["weeks"], 2);
    assert_eq!(report["total_cards"], 4);
    assert_eq!(report["sprint_card_ids"], 1);
    assert_eq!(report["curve"], "refinement");

    let series = |name: &str| -> Vec<f64> {
        report[name]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["remaining_count"].as_f64().unwrap())
            .collect()
    };
    assert_eq!(series("expected"), vec![4.0, 4.0 - 4.0 / 3.0, 0.0]);
    assert_eq!(series("actual"), vec![4.0, 2.0, 2.0]);
}

#[test]
fn test_burndown_linear_curve() {
    let home = TempDir::new().unwrap();
    set_dates(home.path());
    pin_card(home.path());
    let snapshot = fixture();

    let report = json_output(trello_sprint(home.path()).args([
        "--json",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "burndown",
        "--curve",
        "linear",
    ]));
    assert_eq!(report["curve"], "linear");
    assert_eq!(report["expected"][1]["remaining_count"].as_f64(), Some(2.0));
}

#[test]
fn test_burndown_human_table() {
    let home = TempDir::new().unwrap();
    set_dates(home.path());
    let snapshot = fixture();

    trello_sprint(home.path())
        .args(["--snapshot", snapshot.to_str().unwrap(), "burndown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weeks: 2"))
        .stdout(predicate::str::contains("Total cards: 3"))
        .stdout(predicate::str::contains("Expected"));
}

#[test]
fn test_no_criteria_means_empty_sprint() {
    let home = TempDir::new().unwrap();
    set_dates(home.path());
    trello_sprint(home.path()).args(["labels", "remove", "Sprint"]).assert().success();
    let snapshot = fixture();

    let report = json_output(trello_sprint(home.path()).args([
        "--json",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "burndown",
    ]));
    assert_eq!(report["total_cards"], 0);
}

#[test]
fn test_remaining_groups_open_cards() {
    let home = TempDir::new().unwrap();
    pin_card(home.path());
    let snapshot = fixture();

    let report = json_output(trello_sprint(home.path()).args([
        "--json",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "remaining",
    ]));

    let groups = report["groups"].as_array().unwrap();
    let lists: Vec<&str> = groups.iter().map(|g| g["list"].as_str().unwrap()).collect();
    assert_eq!(lists, vec!["Backlog", "In Progress"]);
    assert_eq!(groups[0]["cards"][0]["name"], "Audit log");
    assert_eq!(groups[1]["cards"][0]["url"], "https://trello.com/c/Card0003");
}

#[test]
fn test_status_with_and_without_board() {
    let home = TempDir::new().unwrap();
    set_dates(home.path());
    pin_card(home.path());

    let offline = json_output(trello_sprint(home.path()).args(["--json", "status"]));
    assert_eq!(offline["board"], serde_json::Value::Null);
    assert_eq!(offline["weeks"], 2);
    assert_eq!(offline["sprint_card_ids"], 1);

    let snapshot = fixture();
    let online = json_output(trello_sprint(home.path()).args([
        "--json",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "status",
    ]));
    assert_eq!(online["board"], "Team Board");
    assert_eq!(online["total_cards"], 4);
    assert_eq!(online["done_columns_on_board"], serde_json::json!(["Released in Sprint"]));
}
