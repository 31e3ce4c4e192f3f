// ABOUTME: Reduces every set of one exercise to its best set per calendar day
// ABOUTME: Best means heaviest, ties broken by more reps, then first logged

use chrono::NaiveDate;
use liftlog_core::models::{DaySummary, WorkoutRow};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Compare two sets by weight, then reps
#[must_use]
pub fn compare_sets(a: &WorkoutRow, b: &WorkoutRow) -> Ordering {
    a.weight
        .total_cmp(&b.weight)
        .then_with(|| a.reps.cmp(&b.reps))
}

/// One best set per date, ascending by date
///
/// Callers pass the rows of a single exercise. When two sets tie on both
/// weight and reps the one appearing first is kept.
pub fn best_set_per_day<'a, I>(rows: I) -> Vec<DaySummary>
where
    I: IntoIterator<Item = &'a WorkoutRow>,
{
    let mut best: BTreeMap<NaiveDate, &WorkoutRow> = BTreeMap::new();

    for row in rows {
        best.entry(row.date)
            .and_modify(|current| {
                if compare_sets(row, *current) == Ordering::Greater {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    best.into_values().map(DaySummary::from).collect()
}
