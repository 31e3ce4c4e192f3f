// ABOUTME: LiftLog CLI - analyze workout log CSV exports from the command line
// ABOUTME: Lists exercises, analyzes progress for one exercise, and summarizes weekly volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List exercises in an export
//! liftlog-cli exercises strong.csv
//!
//! # Estimated 1RM progress for the bench press, with a chart
//! liftlog-cli analyze strong.csv --exercise bench --mode 1rm --chart bench.svg
//!
//! # Workouts per ISO week, one JSON line
//! liftlog-cli --compact weekly strong.csv
//!
//! # Semicolon-separated export
//! liftlog-cli --delimiter ';' exercises export.csv
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use liftlog::{
    config::{environment::parse_delimiter, AnalysisConfig},
    logging::LoggingConfig,
    service::AnalysisService,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "liftlog-cli",
    about = "LiftLog strength progress analytics",
    long_about = "Analyze Strong-style workout log CSV exports: exercise listing, progress series, personal records, and weekly workout counts."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Field delimiter (single character, or `tab`)
    #[arg(long, global = true, default_value = ",")]
    delimiter: String,

    /// Print JSON on one line
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List the exercises in a log
    Exercises {
        /// Workout log CSV
        file: PathBuf,
    },

    /// Analyze progress for one exercise
    Analyze {
        /// Workout log CSV
        file: PathBuf,

        /// Exercise name or fragment (case-insensitive)
        #[arg(long, short = 'e')]
        exercise: String,

        /// Analysis mode: weight, 1rm, or volume
        #[arg(long, short = 'm', default_value = "weight")]
        mode: String,

        /// Write an SVG progress chart to this path
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Count workouts per ISO week
    Weekly {
        /// Workout log CSV
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = AnalysisConfig {
        csv_delimiter: parse_delimiter(&cli.delimiter).context("Invalid --delimiter value")?,
        render_charts: false,
        ..AnalysisConfig::default()
    };
    let service = AnalysisService::new(config);
    debug!(?config, "LiftLog CLI configured");

    match cli.command {
        Command::Exercises { file } => commands::analysis::exercises(&service, &file, cli.compact),
        Command::Analyze {
            file,
            exercise,
            mode,
            chart,
        } => commands::analysis::analyze(
            &service,
            &file,
            &exercise,
            &mode,
            chart.as_deref(),
            cli.compact,
        ),
        Command::Weekly { file } => commands::analysis::weekly(&service, &file, cli.compact),
    }
}
