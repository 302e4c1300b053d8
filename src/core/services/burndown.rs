//! Burndown series builder
//!
//! Turns the sprint cards into two aligned weekly series: the idealized
//! burndown and the observed remaining work. Both span `week_count + 1`
//! points so the sprint end is always an explicit endpoint.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::core::models::{Burndown, BurndownPoint, Card, IdealCurve, SprintWindow};

/// Build the burndown with the default refinement expected series
///
/// See [`build_burndown_with`].
#[must_use]
pub fn build_burndown<'a, I>(
    sprint_cards: I,
    done_list_ids: &HashSet<String>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Burndown
where
    I: IntoIterator<Item = &'a Card>,
{
    build_burndown_with(sprint_cards, done_list_ids, start, end, IdealCurve::Refinement)
}

/// Build the burndown for the given sprint cards
///
/// A card is done when its list is in `done_list_ids`; its completion week
/// is the week offset of its last activity, unclamped. A negative range
/// produces empty series.
#[must_use]
pub fn build_burndown_with<'a, I>(
    sprint_cards: I,
    done_list_ids: &HashSet<String>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    curve: IdealCurve,
) -> Burndown
where
    I: IntoIterator<Item = &'a Card>,
{
    let window = SprintWindow::new(start, end);
    let week_count = window.week_count();

    let mut total_count = 0usize;
    let mut completion_weeks = Vec::new();
    for card in sprint_cards {
        total_count += 1;
        if done_list_ids.contains(&card.list_id) {
            completion_weeks.push(window.week_offset(card.last_activity));
        }
    }

    Burndown {
        expected: expected_series(total_count, week_count, curve),
        actual: actual_series(total_count, week_count, &completion_weeks),
        total_count,
        week_count,
    }
}

#[allow(clippy::cast_precision_loss)]
fn expected_series(total: usize, week_count: i64, curve: IdealCurve) -> Vec<BurndownPoint> {
    let total = total as f64;
    let divisor = match curve {
        IdealCurve::Linear => week_count as f64,
        IdealCurve::Refinement => (week_count + 1) as f64,
    };

    (0..=week_count)
        .map(|i| {
            let remaining = if i == 0 {
                total
            } else if i == week_count {
                0.0
            } else {
                total - (total / divisor) * i as f64
            };
            BurndownPoint::new(i, remaining)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn actual_series(total: usize, week_count: i64, completion_weeks: &[i64]) -> Vec<BurndownPoint> {
    (0..=week_count)
        .map(|i| {
            let done = if i == 0 {
                0
            } else {
                completion_weeks.iter().filter(|&&week| week <= i).count()
            };
            BurndownPoint::new(i, total.saturating_sub(done) as f64)
        })
        .collect()
}
