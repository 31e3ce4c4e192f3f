// ABOUTME: Workout set models produced by the CSV loader and day aggregator
// ABOUTME: WorkoutRow is one cleaned set, DaySummary the best set of a calendar day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One valid set from a workout log
///
/// Rows reaching this type have already passed cleaning: the date parsed,
/// the exercise name is non-empty, and both `weight` and `reps` are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRow {
    /// Calendar date the set was performed
    pub date: NaiveDate,
    /// Exercise name as logged (trimmed)
    pub exercise_name: String,
    /// Load lifted
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl WorkoutRow {
    /// Create a workout row
    pub fn new(date: NaiveDate, exercise_name: impl Into<String>, weight: f64, reps: u32) -> Self {
        Self {
            date,
            exercise_name: exercise_name.into(),
            weight,
            reps,
        }
    }

    /// True when the set may take part in any computation
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weight.is_finite()
            && self.weight > 0.0
            && self.reps > 0
            && !self.exercise_name.trim().is_empty()
    }
}

/// Best set of one exercise on one calendar day (max weight, then max reps)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Load of the best set
    pub weight: f64,
    /// Repetitions of the best set
    pub reps: u32,
}

impl From<&WorkoutRow> for DaySummary {
    fn from(row: &WorkoutRow) -> Self {
        Self {
            date: row.date,
            weight: row.weight,
            reps: row.reps,
        }
    }
}
