// ABOUTME: Main library entry point for the LiftLog strength analytics server
// ABOUTME: Wires configuration, logging, HTTP routes, and the analysis service together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog
//!
//! Strength-training progress analytics over workout log CSV exports
//! (Strong-app style: one row per set). Upload a log and get back per-exercise
//! progress series, running bests, personal records, an optional SVG chart,
//! and weekly workout counts.
//!
//! The HTTP server and the CLI share [`service::AnalysisService`]; the pure
//! analytics live in the `liftlog-analytics` crate and the shared types and
//! errors in `liftlog-core`.
//!
//! ## Quick start
//!
//! ```bash
//! cargo run --bin liftlog-server
//! curl --data-binary @strong.csv 'http://localhost:8080/api/analyze?exercise=bench&analysis_mode=1rm'
//! ```

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// CORS and request tracing middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Upload analysis service
pub mod service;

pub use liftlog_analytics as analytics;
pub use liftlog_core::{constants, errors, models};
