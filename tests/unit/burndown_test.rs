//! Tests for the burndown series builder

use trello_sprint::core::models::{BurndownPoint, Card, IdealCurve};
use trello_sprint::core::services::{build_burndown, build_burndown_with};

use crate::common::{CardBuilder, day, set, sprint_start};

fn remaining(points: &[BurndownPoint]) -> Vec<f64> {
    points.iter().map(|p| p.remaining_count).collect()
}

/// Ten cards over a two-week sprint: two finished in week 0, two in week 1,
/// three on the last day, three still open
fn ten_card_sprint() -> Vec<Card> {
    let mut cards = Vec::new();
    for (i, days) in [2, 3, 8, 10, 14, 14, 14].into_iter().enumerate() {
        cards.push(CardBuilder::new(&format!("done{i}")).done_after(days).build());
    }
    for i in 0..3 {
        cards.push(CardBuilder::new(&format!("open{i}")).build());
    }
    cards
}

// =============================================================================
// SERIES SHAPE
// =============================================================================

#[test]
fn test_two_week_sprint_series() {
    let cards = ten_card_sprint();
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 15));

    assert_eq!(burndown.week_count, 2);
    assert_eq!(burndown.total_count, 10);
    assert_eq!(remaining(&burndown.actual), vec![10.0, 6.0, 3.0]);
    assert_eq!(burndown.remaining(), Some(3.0));
}

#[test]
fn test_two_week_sprint_linear_expected() {
    let cards = ten_card_sprint();
    let burndown = build_burndown_with(
        &cards,
        &set(&["done"]),
        sprint_start(),
        day(2024, 1, 15),
        IdealCurve::Linear,
    );
    assert_eq!(remaining(&burndown.expected), vec![10.0, 5.0, 0.0]);
}

#[test]
fn test_week_indices_are_sequential() {
    let cards = ten_card_sprint();
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 29));

    let expected: Vec<i64> = burndown.expected.iter().map(|p| p.week_index).collect();
    let actual: Vec<i64> = burndown.actual.iter().map(|p| p.week_index).collect();
    assert_eq!(expected, vec![0, 1, 2, 3, 4]);
    assert_eq!(actual, expected);
}

#[test]
fn test_partial_week_is_truncated() {
    let cards = ten_card_sprint();
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 20));
    assert_eq!(burndown.week_count, 2);
    assert_eq!(burndown.expected.len(), 3);
}

#[test]
fn test_zero_length_sprint_has_one_point() {
    let cards = ten_card_sprint();
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), sprint_start());

    assert_eq!(burndown.week_count, 0);
    assert_eq!(remaining(&burndown.expected), vec![10.0]);
    assert_eq!(remaining(&burndown.actual), vec![10.0]);
}

#[test]
fn test_end_before_start_is_empty() {
    let cards = ten_card_sprint();
    let burndown = build_burndown(&cards, &set(&["done"]), day(2024, 1, 15), sprint_start());

    assert!(burndown.expected.is_empty());
    assert!(burndown.actual.is_empty());
    assert_eq!(burndown.remaining(), None);
}

#[test]
fn test_no_cards() {
    let cards: Vec<Card> = Vec::new();
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 15));
    assert_eq!(remaining(&burndown.expected), vec![0.0, 0.0, 0.0]);
    assert_eq!(remaining(&burndown.actual), vec![0.0, 0.0, 0.0]);
}

// =============================================================================
// COMPLETION WEEKS
// =============================================================================

#[test]
fn test_done_before_start_counts_from_week_one() {
    let cards = vec![
        CardBuilder::new("early").done_after(-10).build(),
        CardBuilder::new("open").build(),
    ];
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 15));
    assert_eq!(remaining(&burndown.actual), vec![2.0, 1.0, 1.0]);
}

#[test]
fn test_done_after_end_never_counts() {
    let cards = vec![CardBuilder::new("late").done_after(30).build()];
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 15));
    assert_eq!(remaining(&burndown.actual), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_cards_outside_done_lists_stay_open() {
    let cards = vec![CardBuilder::new("a").done_after(3).in_list("doing").build()];
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 15));
    assert_eq!(remaining(&burndown.actual), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_empty_done_set_means_nothing_done() {
    let cards = ten_card_sprint();
    let burndown = build_burndown(&cards, &set(&[]), sprint_start(), day(2024, 1, 15));
    assert_eq!(remaining(&burndown.actual), vec![10.0, 10.0, 10.0]);
}

// =============================================================================
// IDEAL CURVES
// =============================================================================

#[test]
fn test_default_curve_spreads_over_extra_week() {
    let cards: Vec<Card> = (0..12).map(|i| CardBuilder::new(&format!("c{i}")).build()).collect();
    let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), day(2024, 1, 22));

    assert_eq!(burndown.week_count, 3);
    assert_eq!(remaining(&burndown.expected), vec![12.0, 9.0, 6.0, 0.0]);
}

#[test]
fn test_curve_choice_leaves_actual_alone() {
    let cards = ten_card_sprint();
    let end = day(2024, 1, 22);
    let linear = build_burndown_with(&cards, &set(&["done"]), sprint_start(), end, IdealCurve::Linear);
    let refinement =
        build_burndown_with(&cards, &set(&["done"]), sprint_start(), end, IdealCurve::Refinement);

    assert_eq!(remaining(&linear.expected), vec![10.0, 10.0 - 10.0 / 3.0, 10.0 - 10.0 / 3.0 * 2.0, 0.0]);
    assert_eq!(remaining(&refinement.expected), vec![10.0, 7.5, 5.0, 0.0]);
    assert_eq!(linear.actual, refinement.actual);
}

#[test]
fn test_refinement_is_the_default_curve() {
    assert_eq!(IdealCurve::default(), IdealCurve::Refinement);
}
