//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use trello_sprint::core::models::{IdealCurve, SprintWindow, parse_sprint_date};
use trello_sprint::links::{extract_board_id, extract_card_ids};
use test_case::test_case;

use crate::common::{after_start, day, sprint_start};

// =============================================================================
// Sprint Window Tests
// =============================================================================

#[test_case(0, 0 ; "same day")]
#[test_case(6, 0 ; "under a week")]
#[test_case(7, 1 ; "exactly one week")]
#[test_case(13, 1 ; "partial second week")]
#[test_case(14, 2 ; "two weeks")]
#[test_case(-7, -1 ; "one week backwards")]
#[test_case(-3, 0 ; "partial week backwards truncates to zero")]
fn test_week_count(days: i64, expected: i64) {
    let window = SprintWindow::new(sprint_start(), after_start(days));
    assert_eq!(window.week_count(), expected);
}

#[test_case(-10, -1 ; "before start")]
#[test_case(0, 0 ; "at start")]
#[test_case(9, 1 ; "second week")]
#[test_case(40, 5 ; "after end")]
fn test_week_offset(days: i64, expected: i64) {
    let window = SprintWindow::new(sprint_start(), day(2024, 1, 15));
    assert_eq!(window.week_offset(after_start(days)), expected);
}

// =============================================================================
// Date Parsing Tests
// =============================================================================

#[test_case("2024-01-01" ; "calendar date")]
#[test_case("2024-01-01T00:00:00Z" ; "rfc3339 utc")]
#[test_case("2024-01-01T00:00:00.000Z" ; "rfc3339 with millis")]
#[test_case("2024-01-01T01:00:00+01:00" ; "rfc3339 with offset")]
#[test_case("  2024-01-01  " ; "surrounding whitespace")]
fn test_parse_sprint_date_accepts(input: &str) {
    assert_eq!(parse_sprint_date(input).unwrap(), sprint_start());
}

#[test_case("" ; "empty")]
#[test_case("yesterday" ; "word")]
#[test_case("2024-13-01" ; "bad month")]
#[test_case("01/02/2024" ; "slashes")]
fn test_parse_sprint_date_rejects(input: &str) {
    assert!(parse_sprint_date(input).is_err());
}

// =============================================================================
// Link Extraction Tests
// =============================================================================

#[test_case("https://trello.com/c/AbCd1234", &["AbCd1234"] ; "bare card url")]
#[test_case("https://trello.com/c/AbCd1234/42-fix-login", &["AbCd1234"] ; "card url with slug")]
#[test_case("http://www.trello.com/c/AbCd1234", &["AbCd1234"] ; "www and http")]
#[test_case("https://trello.com/b/AbCd1234/board", &[] ; "board url is not a card")]
#[test_case("no links here", &[] ; "plain text")]
#[test_case("https://trello.com/c/abc", &[] ; "id too short")]
fn test_extract_card_ids(text: &str, expected: &[&str]) {
    assert_eq!(extract_card_ids(text), expected);
}

#[test_case("https://trello.com/b/AbCd1234/team-board", Some("AbCd1234") ; "board url")]
#[test_case("AbCd1234", Some("AbCd1234") ; "bare id")]
#[test_case("  AbCd1234  ", Some("AbCd1234") ; "trimmed id")]
#[test_case("not a board", None ; "words")]
#[test_case("short", None ; "too short")]
fn test_extract_board_id(text: &str, expected: Option<&str>) {
    assert_eq!(extract_board_id(text).as_deref(), expected);
}

// =============================================================================
// Curve Parsing Tests
// =============================================================================

#[test_case("linear", Some(IdealCurve::Linear) ; "linear")]
#[test_case("Refinement", Some(IdealCurve::Refinement) ; "refinement any case")]
#[test_case("steep", None ; "unknown")]
fn test_curve_from_str(input: &str, expected: Option<IdealCurve>) {
    assert_eq!(input.parse::<IdealCurve>().ok(), expected);
}
