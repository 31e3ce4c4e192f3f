// ABOUTME: Integration tests for the analytics pipeline properties
// ABOUTME: Covers aggregation, running bests, resolution, records, weekly grouping, and cleaning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{date, row, SAMPLE_LOG};
use liftlog::analytics::aggregate::best_set_per_day;
use liftlog::analytics::loader::{load_workouts, LoadOptions};
use liftlog::analytics::metrics::{
    estimate_one_rep_max, max_volume_record, one_rep_max_record, personal_records,
    progress_series, running_best,
};
use liftlog::analytics::resolver::{match_exercise, resolve_exercise, ExerciseMatch};
use liftlog::analytics::weekly::weekly_summary;
use liftlog::analytics::{analyze_exercise, catalog};
use liftlog::errors::{AnalysisError, ErrorCode};
use liftlog::models::AnalysisMode;

#[test]
fn test_identical_day_rows_collapse_to_heaviest() {
    let day = date(2024, 2, 1);
    let rows = vec![
        row("Deadlift", day, 180.0, 3),
        row("Deadlift", day, 200.0, 1),
        row("Deadlift", day, 190.0, 2),
        row("Deadlift", date(2024, 2, 2), 170.0, 5),
    ];

    let days = best_set_per_day(&rows);

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, day);
    assert!(rows
        .iter()
        .filter(|r| r.date == day)
        .all(|r| days[0].weight >= r.weight));
    assert_eq!(days[0].weight, 200.0);
}

#[test]
fn test_day_ties_break_on_reps() {
    let day = date(2024, 2, 1);
    let rows = vec![row("Row", day, 80.0, 8), row("Row", day, 80.0, 10)];

    let days = best_set_per_day(&rows);

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].reps, 10);
}

#[test]
fn test_running_best_is_monotone_and_ends_at_max() {
    let values = [60.0, 72.5, 70.0, 80.0, 75.0, 80.0, 65.0];
    let best = running_best(&values);

    assert_eq!(best.len(), values.len());
    assert!(best.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(*best.last().unwrap(), 80.0);
    assert_eq!(best[0], 60.0);
}

#[test]
fn test_exact_match_beats_substring_matches() {
    let names = ["Bench Press", "Bench Press (Barbell)", "Incline Bench Press"];

    assert_eq!(
        match_exercise(names, "bench press"),
        ExerciseMatch::Resolved("Bench Press".to_owned())
    );
}

#[test]
fn test_substring_resolution_outcomes() {
    let rows = vec![
        row("Squat (Barbell)", date(2024, 1, 1), 100.0, 5),
        row("Bench Press (Barbell)", date(2024, 1, 1), 80.0, 5),
        row("Incline Bench Press (Dumbbell)", date(2024, 1, 1), 30.0, 10),
    ];

    assert_eq!(resolve_exercise(&rows, "squat").unwrap(), "Squat (Barbell)");

    match resolve_exercise(&rows, "bench").unwrap_err() {
        AnalysisError::AmbiguousMatch { candidates, .. } => assert_eq!(
            candidates,
            vec![
                "Bench Press (Barbell)".to_owned(),
                "Incline Bench Press (Dumbbell)".to_owned()
            ]
        ),
        other => panic!("expected ambiguous match, got {other:?}"),
    }

    assert!(matches!(
        resolve_exercise(&rows, "deadlift").unwrap_err(),
        AnalysisError::NoMatch { .. }
    ));
}

#[test]
fn test_one_rep_max_of_100_for_10() {
    let record = one_rep_max_record(&[row("Bench", date(2024, 1, 1), 100.0, 10)]).unwrap();

    assert_eq!(record.estimated_value, 133.3);
    assert!((estimate_one_rep_max(100.0, 10) - 133.333).abs() < 0.001);
}

#[test]
fn test_volume_record_prefers_larger_product() {
    let rows = vec![
        row("Bench", date(2024, 1, 1), 100.0, 5),
        row("Bench", date(2024, 1, 2), 90.0, 8),
    ];

    let record = max_volume_record(&rows).unwrap();

    assert_eq!(record.date, date(2024, 1, 2));
    assert_eq!(record.volume, 720.0);
}

#[test]
fn test_two_workouts_in_one_iso_week() {
    // 2024-01-01 is a Monday, 2024-01-03 the Wednesday of ISO week 1
    let rows = vec![
        row("Bench", date(2024, 1, 1), 100.0, 5),
        row("Squat", date(2024, 1, 3), 140.0, 5),
    ];

    let summary = weekly_summary(&rows);

    assert_eq!(summary.weekly_data.len(), 1);
    let bucket = &summary.weekly_data[0];
    assert_eq!((bucket.year, bucket.week), (2024, 1));
    assert_eq!(bucket.workout_count, 2);
    assert_eq!(bucket.label, "Week 1, 2024");
}

#[test]
fn test_iso_week_year_differs_from_calendar_year() {
    // 2024-12-30 belongs to ISO week 1 of 2025
    let summary = weekly_summary(&[row("Bench", date(2024, 12, 30), 100.0, 5)]);

    assert_eq!(summary.weekly_data[0].label, "Week 1, 2025");
}

#[test]
fn test_zero_weight_and_reps_excluded_everywhere() {
    let loaded = load_workouts(SAMPLE_LOG.as_bytes(), &LoadOptions::default()).unwrap();

    assert!(loaded.rows.iter().all(|r| r.weight > 0.0 && r.reps > 0));
    // zero weight, zero reps, and an unparseable date
    assert_eq!(loaded.rows_dropped, 3);

    let squat = personal_records(
        &loaded
            .rows
            .iter()
            .filter(|r| r.exercise_name == "Squat (Barbell)")
            .cloned()
            .collect::<Vec<_>>(),
    )
    .unwrap();
    assert_eq!(squat.max_weight.weight, 140.0);

    let weekly = weekly_summary(&loaded.rows);
    let total: usize = weekly.weekly_data.iter().map(|b| b.workout_count).sum();
    assert_eq!(total, loaded.rows.len());
}

#[test]
fn test_full_analysis_of_sample_log() {
    let loaded = load_workouts(SAMPLE_LOG.as_bytes(), &LoadOptions::default()).unwrap();

    let report =
        analyze_exercise(&loaded.rows, "bench press (barbell)", AnalysisMode::OneRepMax, None)
            .unwrap();

    assert_eq!(report.data.exercise_name, "Bench Press (Barbell)");
    assert_eq!(
        report.data.dates,
        vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
    );
    // day bests: 100x6, 105x3, 102.5x4
    assert_eq!(report.data.values.len(), 3);
    assert!((report.data.values[0] - 120.0).abs() < 1e-9);
    assert_eq!(report.data.running_best_values[2], report.data.running_best_values[1]);
    assert_eq!(report.labels.title, "Best Bench Press (Barbell) per Session (1RM est.)");

    // 95x8 gives the best estimate across all sets, not only day bests
    assert_eq!(report.prs.one_rep_max.weight, 95.0);
    assert_eq!(report.prs.one_rep_max.estimated_value, 120.3);
    assert_eq!(report.prs.max_weight.weight, 105.0);
    assert_eq!(report.prs.max_volume.volume, 760.0);
    assert!(report.graph_image.is_none());
}

#[test]
fn test_weight_series_follows_day_bests() {
    let rows = vec![
        row("Press", date(2024, 3, 1), 50.0, 5),
        row("Press", date(2024, 3, 4), 47.5, 8),
        row("Press", date(2024, 3, 8), 52.5, 3),
    ];

    let series = progress_series(&best_set_per_day(&rows), AnalysisMode::Weight);
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let best: Vec<f64> = series.iter().map(|p| p.running_best).collect();

    assert_eq!(values, vec![50.0, 47.5, 52.5]);
    assert_eq!(best, vec![50.0, 50.0, 52.5]);
}

#[test]
fn test_catalog_counts_sets_and_days() {
    let loaded = load_workouts(SAMPLE_LOG.as_bytes(), &LoadOptions::default()).unwrap();
    let summary = catalog::catalog(&loaded.rows);

    assert_eq!(
        summary.exercises,
        vec![
            "Bench Press (Barbell)".to_owned(),
            "Incline Bench Press (Dumbbell)".to_owned(),
            "Squat (Barbell)".to_owned()
        ]
    );
    assert_eq!(summary.total_workouts, 4);
    assert_eq!(summary.total_sets, 7);
}

#[test]
fn test_missing_columns_are_listed() {
    let err = load_workouts(b"Date,Exercise Name,Reps\n2024-01-01,Bench,5\n", &LoadOptions::default())
        .unwrap_err();

    assert_eq!(
        err,
        AnalysisError::MissingColumns {
            missing: vec!["Weight".to_owned()]
        }
    );
    assert_eq!(err.code(), ErrorCode::MissingColumns);
}
