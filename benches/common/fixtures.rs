// ABOUTME: Benchmark fixtures generating realistic workout log exports
// ABOUTME: Deterministic set data so measurements are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for workout log exports.

use chrono::{Duration, NaiveDate};
use std::fmt::Write;

const EXERCISES: &[&str] = &[
    "Bench Press (Barbell)",
    "Squat (Barbell)",
    "Deadlift (Barbell)",
    "Overhead Press (Barbell)",
    "Incline Bench Press (Dumbbell)",
    "Pull Up",
    "Bent Over Row (Barbell)",
    "Romanian Deadlift (Barbell)",
];

/// Predefined export sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LogSize {
    /// A few months of training
    Small,
    /// Several years of training
    Large,
}

impl LogSize {
    #[must_use]
    pub const fn sets(self) -> usize {
        match self {
            Self::Small => 500,
            Self::Large => 20_000,
        }
    }
}

/// Generate a Strong-style CSV export with `sets` rows
///
/// Sessions rotate through the exercise list, five sets each, every other day.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_log(sets: usize) -> String {
    let start = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap_or_default();
    let mut csv = String::from("Date,Workout Name,Exercise Name,Set Order,Weight,Reps,Notes\n");

    for index in 0..sets {
        let session = index / 5;
        let set_order = index % 5 + 1;
        let date = start + Duration::days((session * 2) as i64);
        let exercise = EXERCISES[session % EXERCISES.len()];
        let weight = 40.0 + (session % 97) as f64 * 1.25 + (set_order as f64 * 2.5);
        let reps = 3 + (index * 7) % 8;

        let _ = writeln!(
            csv,
            "{date} 18:00:00,Session {session},{exercise},{set_order},{weight},{reps},"
        );
    }

    csv
}
