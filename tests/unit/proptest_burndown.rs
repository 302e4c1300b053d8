//! Property-based tests for the burndown builder and membership filter
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chrono::Duration;
use proptest::prelude::*;
use trello_sprint::core::models::{Card, IdealCurve};
use trello_sprint::core::services::{build_burndown, build_burndown_with, select_sprint_cards};

use crate::common::{CardBuilder, after_start, set, sprint_start};

/// Cards described by (done?, days after the sprint start)
fn cards_from(plan: &[(bool, i64)]) -> Vec<Card> {
    plan.iter()
        .enumerate()
        .map(|(i, &(done, days))| {
            let builder = CardBuilder::new(&format!("card{i}"));
            if done { builder.done_after(days).build() } else { builder.build() }
        })
        .collect()
}

proptest! {
    /// Both series always have one point per week plus the start
    #[test]
    fn series_length_is_weeks_plus_one(
        plan in prop::collection::vec((any::<bool>(), -30i64..90), 0..30),
        days in 0i64..120
    ) {
        let cards = cards_from(&plan);
        let end = sprint_start() + Duration::days(days);
        let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), end);

        let expected_len = usize::try_from(days / 7 + 1).unwrap();
        prop_assert_eq!(burndown.expected.len(), expected_len);
        prop_assert_eq!(burndown.actual.len(), expected_len);
    }

    /// Endpoints: everything remains at week 0, the ideal reaches zero at the end
    #[test]
    fn endpoints_hold(
        plan in prop::collection::vec((any::<bool>(), -30i64..90), 1..30),
        weeks in 1i64..16
    ) {
        let cards = cards_from(&plan);
        let end = sprint_start() + Duration::weeks(weeks);
        for curve in [IdealCurve::Linear, IdealCurve::Refinement] {
            let burndown = build_burndown_with(&cards, &set(&["done"]), sprint_start(), end, curve);
            let total = cards.len() as f64;
            prop_assert_eq!(burndown.expected[0].remaining_count, total);
            prop_assert_eq!(burndown.actual[0].remaining_count, total);
            prop_assert_eq!(burndown.expected.last().unwrap().remaining_count, 0.0);
        }
    }

    /// Actual remaining work never goes up and never drops below zero
    #[test]
    fn actual_is_non_increasing(
        plan in prop::collection::vec((any::<bool>(), -30i64..90), 0..30),
        weeks in 0i64..16
    ) {
        let cards = cards_from(&plan);
        let end = sprint_start() + Duration::weeks(weeks);
        let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), end);

        for pair in burndown.actual.windows(2) {
            prop_assert!(pair[1].remaining_count <= pair[0].remaining_count);
        }
        for point in &burndown.actual {
            prop_assert!(point.remaining_count >= 0.0);
        }
    }

    /// Building twice from the same input gives the same result
    #[test]
    fn build_is_deterministic(
        plan in prop::collection::vec((any::<bool>(), -30i64..90), 0..30),
        weeks in 0i64..16
    ) {
        let cards = cards_from(&plan);
        let end = sprint_start() + Duration::weeks(weeks);
        let first = build_burndown(&cards, &set(&["done"]), sprint_start(), end);
        let second = build_burndown(&cards, &set(&["done"]), sprint_start(), end);
        prop_assert_eq!(first, second);
    }

    /// Cards finished after the sprint end never reduce the actual series
    #[test]
    fn late_cards_never_count(count in 1usize..20, weeks in 0i64..8, extra in 1i64..60) {
        let cards: Vec<Card> = (0..count)
            .map(|i| CardBuilder::new(&format!("late{i}")).done_after(weeks * 7 + 7 + extra).build())
            .collect();
        let end = after_start(weeks * 7);
        let burndown = build_burndown(&cards, &set(&["done"]), sprint_start(), end);

        for point in &burndown.actual {
            prop_assert_eq!(point.remaining_count, count as f64);
        }
    }

    /// Every pinned card present on the board is selected, in input order
    #[test]
    fn pinned_cards_are_all_selected(
        ids in prop::collection::hash_set("[a-z]{4,8}", 1..20),
        pick in prop::collection::vec(any::<bool>(), 20)
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let cards: Vec<Card> = ids.iter().map(|id| CardBuilder::new(id).build()).collect();
        let pinned: std::collections::HashSet<String> = ids
            .iter()
            .zip(&pick)
            .filter(|(_, keep)| **keep)
            .map(|(id, _)| id.clone())
            .collect();

        let selected = select_sprint_cards(&cards, &pinned, &set(&[]));
        prop_assert_eq!(selected.len(), pinned.len());
        let order: Vec<&String> = selected.iter().map(|c| &c.id).collect();
        let expected: Vec<&String> = ids.iter().filter(|id| pinned.contains(*id)).collect();
        prop_assert_eq!(order, expected);
    }
}
