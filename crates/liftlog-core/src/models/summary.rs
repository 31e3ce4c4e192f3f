// ABOUTME: Dataset-wide summary models independent of any single exercise
// ABOUTME: ISO-week set counts and the exercise catalog

use serde::{Deserialize, Serialize};

/// Number of logged sets in one ISO week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// ISO week-numbering year
    pub year: i32,
    /// ISO week number (1-53)
    pub week: u32,
    /// Valid rows logged in the week
    pub workout_count: usize,
    /// "Week {week}, {year}"
    pub label: String,
}

/// Weekly summary response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Buckets ordered by (year, week)
    pub weekly_data: Vec<WeeklyBucket>,
}

/// Exercises present in an upload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    /// Distinct exercise names, sorted
    pub exercises: Vec<String>,
    /// Distinct workout dates
    pub total_workouts: usize,
    /// Valid sets
    pub total_sets: usize,
}
