// ABOUTME: Core data models for strength-training workout analysis
// ABOUTME: Re-exports workout rows, personal records, series, reports and summaries

//! # Data Models
//!
//! Every model here is derived fresh from an uploaded CSV file for a single
//! request and is never mutated afterwards. All of them serialize to the JSON
//! shapes returned by the HTTP API and the CLI.
//!
//! - `WorkoutRow`: one cleaned set from the CSV export
//! - `DaySummary`: the best set of one exercise on one calendar day
//! - `PersonalRecords`: one-rep-max, max-weight and max-volume records
//! - `AnalysisMode` / `SeriesPoint`: the charted per-session metric
//! - `AnalysisReport`: presenter output for one exercise
//! - `WeeklyBucket` / `ExerciseCatalog`: dataset-wide views

mod records;
mod report;
mod series;
mod summary;
mod workout;

pub use records::{MaxVolumeRecord, MaxWeightRecord, OneRepMaxRecord, PersonalRecords};
pub use report::{AnalysisReport, ChartData, ChartImage, ChartLabels};
pub use series::{AnalysisMode, SeriesPoint};
pub use summary::{ExerciseCatalog, WeeklyBucket, WeeklySummary};
pub use workout::{DaySummary, WorkoutRow};
