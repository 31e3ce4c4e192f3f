// ABOUTME: End-to-end exercise analysis over cleaned workout rows
// ABOUTME: Resolve, filter, aggregate per day, compute records, and present

use crate::aggregate::best_set_per_day;
use crate::chart::ChartRenderer;
use crate::metrics::personal_records;
use crate::presenter::present;
use crate::resolver::resolve_exercise;
use liftlog_core::errors::{AnalysisError, AppResult};
use liftlog_core::models::{AnalysisMode, AnalysisReport, WorkoutRow};
use tracing::info;

/// Rows belonging to exactly `exercise_name`
#[must_use]
pub fn rows_for_exercise(rows: &[WorkoutRow], exercise_name: &str) -> Vec<WorkoutRow> {
    rows.iter()
        .filter(|row| row.exercise_name == exercise_name && row.is_valid())
        .cloned()
        .collect()
}

/// Analyze the exercise `query` resolves to
///
/// # Errors
///
/// - `EmptyExerciseSelection`, `AmbiguousMatch`, `NoMatch` from resolution
/// - `NoValidRows` if the resolved exercise has no valid sets
/// - render errors when a renderer is supplied and fails
pub fn analyze_exercise(
    rows: &[WorkoutRow],
    query: &str,
    mode: AnalysisMode,
    renderer: Option<&dyn ChartRenderer>,
) -> AppResult<AnalysisReport> {
    let exercise_name = resolve_exercise(rows, query)?;
    let sets = rows_for_exercise(rows, &exercise_name);

    let prs = personal_records(&sets).ok_or(AnalysisError::NoValidRows {
        rows_read: sets.len(),
    })?;
    let days = best_set_per_day(&sets);

    info!(
        exercise = %exercise_name,
        mode = %mode,
        sets = sets.len(),
        sessions = days.len(),
        "analyzed exercise"
    );

    present(&exercise_name, &days, prs, mode, renderer)
}
