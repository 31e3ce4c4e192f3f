// ABOUTME: Core types and constants for LiftLog strength-training analytics
// ABOUTME: Foundation crate with error handling, workout data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Core
//!
//! Foundation crate providing shared types and constants for the LiftLog
//! analytics workspace. The analytics engine, HTTP server and CLI all depend
//! on this crate and nothing in it performs I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AnalysisError`
//! - **constants**: CSV column names, formula constants, chart labels
//! - **models**: Workout rows, day summaries, personal records, series, weekly buckets

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutRow`, `PersonalRecords`, `AnalysisMode`, etc.)
pub mod models;
