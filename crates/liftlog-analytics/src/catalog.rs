// ABOUTME: Exercise catalog of an upload for exercise pickers
// ABOUTME: Sorted distinct exercise names with workout and set totals

use crate::resolver::distinct_exercises;
use liftlog_core::models::{ExerciseCatalog, WorkoutRow};
use std::collections::BTreeSet;

/// Sorted distinct exercise names
#[must_use]
pub fn list_exercises(rows: &[WorkoutRow]) -> Vec<String> {
    distinct_exercises(rows)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Exercises plus distinct workout days and total valid sets
#[must_use]
pub fn catalog(rows: &[WorkoutRow]) -> ExerciseCatalog {
    let total_workouts = rows
        .iter()
        .map(|row| row.date)
        .collect::<BTreeSet<_>>()
        .len();

    ExerciseCatalog {
        exercises: list_exercises(rows),
        total_workouts,
        total_sets: rows.len(),
    }
}
