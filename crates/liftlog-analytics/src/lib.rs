// ABOUTME: Strength-training analytics engine turning workout CSV exports into progress metrics
// ABOUTME: Loader, resolver, day aggregator, metrics engine, presenter, and dataset summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Analytics
//!
//! A single synchronous pipeline, invoked once per request:
//!
//! 1. [`loader`] parses CSV bytes into cleaned [`WorkoutRow`]s
//! 2. [`resolver`] maps a free-text query onto exactly one exercise name
//! 3. [`aggregate`] keeps the best set per calendar day
//! 4. [`metrics`] computes personal records and the running-best series
//! 5. [`presenter`] assembles chart data, labels and an optional [`chart`] image
//!
//! [`weekly`] and [`catalog`] provide dataset-wide views that skip steps 2-5.
//! Nothing here holds state between calls.
//!
//! ```rust,no_run
//! use liftlog_analytics::{analyze_exercise, loader::{load_workouts, LoadOptions}};
//! use liftlog_core::models::AnalysisMode;
//!
//! # fn run(csv: &[u8]) -> liftlog_core::errors::AppResult<()> {
//! let loaded = load_workouts(csv, &LoadOptions::default())?;
//! let report = analyze_exercise(&loaded.rows, "bench", AnalysisMode::OneRepMax, None)?;
//! println!("{}", report.prs.one_rep_max.estimated_value);
//! # Ok(())
//! # }
//! ```
//!
//! [`WorkoutRow`]: liftlog_core::models::WorkoutRow

/// Best-set-per-day aggregation
pub mod aggregate;
/// Exercise catalog
pub mod catalog;
/// Chart rendering seam and SVG renderer
pub mod chart;
/// CSV loading and row cleaning
pub mod loader;
/// Personal records, strength formulas, and running-best series
pub mod metrics;
/// Chart data and label assembly
pub mod presenter;
/// Exercise name resolution
pub mod resolver;
/// ISO-week set counts
pub mod weekly;

mod pipeline;

pub use pipeline::{analyze_exercise, rows_for_exercise};
