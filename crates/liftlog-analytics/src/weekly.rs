// ABOUTME: Weekly training summary grouped by ISO year and week
// ABOUTME: Counts valid sets per ISO week across all exercises

use chrono::Datelike;
use liftlog_core::models::{WeeklyBucket, WeeklySummary, WorkoutRow};
use std::collections::BTreeMap;

/// Label shown for a week, e.g. "Week 7, 2024"
#[must_use]
pub fn week_label(year: i32, week: u32) -> String {
    format!("Week {week}, {year}")
}

/// Count valid rows per ISO (year, week), ordered by (year, week)
///
/// Dates near New Year land in the ISO year their week belongs to, so
/// 2024-12-30 counts toward week 1 of 2025.
#[must_use]
pub fn weekly_summary(rows: &[WorkoutRow]) -> WeeklySummary {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();

    for row in rows.iter().filter(|row| row.is_valid()) {
        let iso = row.date.iso_week();
        *counts.entry((iso.year(), iso.week())).or_default() += 1;
    }

    WeeklySummary {
        weekly_data: counts
            .into_iter()
            .map(|((year, week), workout_count)| WeeklyBucket {
                year,
                week,
                workout_count,
                label: week_label(year, week),
            })
            .collect(),
    }
}
