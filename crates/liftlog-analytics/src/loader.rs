// ABOUTME: CSV loader and validator for workout log exports
// ABOUTME: Checks required columns, coerces dates and numbers, and drops invalid sets

//! Workout CSV loading
//!
//! The loader never fails on a bad row; it drops it and counts it. It fails
//! only when the header lacks a required column, when the bytes are not
//! readable CSV, or when nothing survives cleaning.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use liftlog_core::constants::{columns, date_formats, defaults};
use liftlog_core::errors::AnalysisError;
use liftlog_core::models::WorkoutRow;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options controlling how an upload is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: defaults::CSV_DELIMITER,
        }
    }
}

impl LoadOptions {
    /// Use a different field delimiter
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Cleaned rows plus bookkeeping about what was discarded
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedWorkouts {
    /// Valid sets in file order
    pub rows: Vec<WorkoutRow>,
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows dropped by cleaning
    pub rows_dropped: usize,
}

/// Header positions of the required columns
struct ColumnPositions {
    date: usize,
    exercise_name: usize,
    weight: usize,
    reps: usize,
}

impl ColumnPositions {
    fn locate(headers: &StringRecord) -> Result<Self, AnalysisError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        match (
            find(columns::DATE),
            find(columns::EXERCISE_NAME),
            find(columns::WEIGHT),
            find(columns::REPS),
        ) {
            (Some(date), Some(exercise_name), Some(weight), Some(reps)) => Ok(Self {
                date,
                exercise_name,
                weight,
                reps,
            }),
            _ => Err(AnalysisError::MissingColumns {
                missing: columns::REQUIRED
                    .iter()
                    .filter(|&&name| find(name).is_none())
                    .map(|&name| name.to_owned())
                    .collect(),
            }),
        }
    }
}

/// Parse and clean a workout CSV export
///
/// # Errors
///
/// - `MissingColumns` if any of `Date`, `Exercise Name`, `Weight`, `Reps` is absent
/// - `MalformedCsv` if the bytes cannot be read as CSV (for example invalid UTF-8)
/// - `NoValidRows` if every data row is dropped
pub fn load_workouts(bytes: &[u8], options: &LoadOptions) -> Result<LoadedWorkouts, AnalysisError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers().map_err(malformed)?.clone();
    let positions = ColumnPositions::locate(&headers)?;

    let mut rows = Vec::new();
    let mut rows_read = 0_usize;
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        rows_read += 1;
        if let Some(row) = parse_row(&record, &positions) {
            rows.push(row);
        }
    }

    let rows_dropped = rows_read - rows.len();
    debug!(rows_read, rows_dropped, "loaded workout csv");

    if rows.is_empty() {
        return Err(AnalysisError::NoValidRows { rows_read });
    }

    Ok(LoadedWorkouts {
        rows,
        rows_read,
        rows_dropped,
    })
}

fn malformed(error: csv::Error) -> AnalysisError {
    AnalysisError::MalformedCsv {
        line: error.position().map(csv::Position::line),
        reason: error.to_string(),
    }
}

fn parse_row(record: &StringRecord, positions: &ColumnPositions) -> Option<WorkoutRow> {
    let date = parse_date(record.get(positions.date)?)?;
    let exercise_name = record.get(positions.exercise_name)?.trim();
    if exercise_name.is_empty() {
        return None;
    }
    let weight = parse_weight(record.get(positions.weight)?)?;
    let reps = parse_reps(record.get(positions.reps)?)?;

    Some(WorkoutRow::new(date, exercise_name, weight, reps))
}

/// Parse a date cell, discarding any time of day
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    date_formats::DATETIME
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            date_formats::DATE
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Parse a weight cell; only finite positive values are kept
#[must_use]
pub fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

/// Parse a reps cell; integral decimals such as `8.0` are accepted
#[must_use]
pub fn parse_reps(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(reps) = raw.parse::<u32>() {
        return (reps > 0).then_some(reps);
    }

    let reps = raw.parse::<f64>().ok()?;
    // Safe: checked integral and within u32 range before casting
    (reps.is_finite() && reps >= 1.0 && reps.fract() == 0.0 && reps <= f64::from(u32::MAX))
        .then(|| reps as u32)
}
