// ABOUTME: Strength metrics engine for personal records and progress series
// ABOUTME: Epley one-rep-max, set volume, record selection, and running-best prefix maxima

//! Strength metrics
//!
//! Records are computed over every valid set of an exercise, not just the
//! per-day bests. Ties always resolve to the set that appears first, so the
//! same upload always produces the same records.

use crate::aggregate::compare_sets;
use liftlog_core::constants::strength::{EPLEY_REPS_DIVISOR, ONE_REP_MAX_DECIMALS};
use liftlog_core::models::{
    AnalysisMode, DaySummary, MaxVolumeRecord, MaxWeightRecord, OneRepMaxRecord, PersonalRecords,
    SeriesPoint, WorkoutRow,
};
use std::cmp::Ordering;

/// Epley one-rep-max estimate: `weight * (1 + reps / 30)`
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + f64::from(reps) / EPLEY_REPS_DIVISOR)
}

/// Volume of a set: `weight * reps`
#[must_use]
pub fn set_volume(weight: f64, reps: u32) -> f64 {
    weight * f64::from(reps)
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Session value of a day's best set under `mode`
#[must_use]
pub fn session_value(day: &DaySummary, mode: AnalysisMode) -> f64 {
    match mode {
        AnalysisMode::Weight => day.weight,
        AnalysisMode::OneRepMax => estimate_one_rep_max(day.weight, day.reps),
        AnalysisMode::Volume => set_volume(day.weight, day.reps),
    }
}

/// Prefix maximum of `values`, seeded at negative infinity
///
/// The output has the same length as the input and never decreases.
#[must_use]
pub fn running_best(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(f64::NEG_INFINITY, |best, &value| {
            *best = best.max(value);
            Some(*best)
        })
        .collect()
}

/// Charted series for per-day bests under `mode`
#[must_use]
pub fn progress_series(days: &[DaySummary], mode: AnalysisMode) -> Vec<SeriesPoint> {
    let values: Vec<f64> = days.iter().map(|day| session_value(day, mode)).collect();
    let bests = running_best(&values);

    days.iter()
        .zip(values)
        .zip(bests)
        .map(|((day, value), running_best)| SeriesPoint {
            date: day.date,
            value,
            running_best,
        })
        .collect()
}

/// Greatest row under `compare`; a later row wins only when strictly greater
fn first_max_by<'a, I, F>(rows: I, mut compare: F) -> Option<&'a WorkoutRow>
where
    I: IntoIterator<Item = &'a WorkoutRow>,
    F: FnMut(&WorkoutRow, &WorkoutRow) -> Ordering,
{
    rows.into_iter().fold(None, |best, row| match best {
        Some(current) if compare(row, current) != Ordering::Greater => Some(current),
        _ => Some(row),
    })
}

/// Set with the highest estimated one-rep-max
#[must_use]
pub fn one_rep_max_record(rows: &[WorkoutRow]) -> Option<OneRepMaxRecord> {
    first_max_by(rows, |a, b| {
        estimate_one_rep_max(a.weight, a.reps).total_cmp(&estimate_one_rep_max(b.weight, b.reps))
    })
    .map(|row| OneRepMaxRecord {
        estimated_value: round_to(
            estimate_one_rep_max(row.weight, row.reps),
            ONE_REP_MAX_DECIMALS,
        ),
        weight: row.weight,
        reps: row.reps,
        date: row.date,
    })
}

/// Heaviest set, ties broken by more reps
#[must_use]
pub fn max_weight_record(rows: &[WorkoutRow]) -> Option<MaxWeightRecord> {
    first_max_by(rows, compare_sets).map(|row| MaxWeightRecord {
        weight: row.weight,
        reps: row.reps,
        date: row.date,
    })
}

/// Set with the largest `weight * reps`
#[must_use]
pub fn max_volume_record(rows: &[WorkoutRow]) -> Option<MaxVolumeRecord> {
    first_max_by(rows, |a, b| {
        set_volume(a.weight, a.reps).total_cmp(&set_volume(b.weight, b.reps))
    })
    .map(|row| MaxVolumeRecord {
        volume: set_volume(row.weight, row.reps),
        weight: row.weight,
        reps: row.reps,
        date: row.date,
    })
}

/// All personal records of one exercise
///
/// Invalid rows (non-positive weight or reps) are ignored. Returns `None`
/// when no valid row remains.
#[must_use]
pub fn personal_records(rows: &[WorkoutRow]) -> Option<PersonalRecords> {
    let valid: Vec<WorkoutRow> = rows.iter().filter(|row| row.is_valid()).cloned().collect();

    Some(PersonalRecords {
        one_rep_max: one_rep_max_record(&valid)?,
        max_weight: max_weight_record(&valid)?,
        max_volume: max_volume_record(&valid)?,
    })
}
