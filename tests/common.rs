// ABOUTME: Shared test fixtures for LiftLog integration tests
// ABOUTME: Provides sample workout logs, row builders, and headless service setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `liftlog`

use chrono::NaiveDate;
use liftlog::config::{AnalysisConfig, ServerConfig};
use liftlog::models::WorkoutRow;
use liftlog::service::AnalysisService;

/// A small Strong-style export: two bench variants, squat, and junk rows
pub const SAMPLE_LOG: &str = "\
Date,Workout Name,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes
2024-01-01 07:30:00,Push,Bench Press (Barbell),1,100,5,0,0,
2024-01-01 07:30:00,Push,Bench Press (Barbell),2,100,6,0,0,
2024-01-01 07:30:00,Push,Incline Bench Press (Dumbbell),1,30,10,0,0,
2024-01-03 07:30:00,Legs,Squat (Barbell),1,140,5,0,0,
2024-01-03 07:30:00,Legs,Squat (Barbell),2,0,5,0,0,
2024-01-08 07:30:00,Push,Bench Press (Barbell),1,105,3,0,0,
2024-01-08 07:30:00,Push,Bench Press (Barbell),2,95,8,0,0,
2024-01-10 07:30:00,Legs,Squat (Barbell),1,145,0,0,0,
not a date,Legs,Squat (Barbell),1,150,5,0,0,
2024-01-15 07:30:00,Push,Bench Press (Barbell),1,102.5,4,0,0,
";

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// One set of `name`
pub fn row(name: &str, on: NaiveDate, weight: f64, reps: u32) -> WorkoutRow {
    WorkoutRow::new(on, name, weight, reps)
}

/// Service that never renders charts
pub fn headless_service() -> AnalysisService {
    AnalysisService::new(AnalysisConfig {
        render_charts: false,
        ..AnalysisConfig::default()
    })
}

/// Server configuration suitable for in-process router tests
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        ..ServerConfig::default()
    }
}

/// Build a CSV export from `(date, exercise, weight, reps)` tuples
pub fn csv_from(sets: &[(&str, &str, &str, &str)]) -> String {
    let mut csv = String::from("Date,Exercise Name,Weight,Reps\n");
    for (on, name, weight, reps) in sets {
        csv.push_str(&format!("{on},{name},{weight},{reps}\n"));
    }
    csv
}
