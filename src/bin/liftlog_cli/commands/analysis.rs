// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Analysis subcommands for liftlog-cli
// ABOUTME: Reads a log file, runs the analysis service, and prints JSON results

use crate::helpers::display::{display_chart_written, print_json};
use anyhow::{Context, Result};
use liftlog::analytics::chart::{ChartRenderer, SvgChartRenderer};
use liftlog::service::AnalysisService;
use std::fs;
use std::path::Path;

fn read_log(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// List exercises in a log
pub fn exercises(service: &AnalysisService, file: &Path, compact: bool) -> Result<()> {
    let upload = read_log(file)?;
    let catalog = service.exercises(&upload)?;
    print_json(&catalog, compact)
}

/// Analyze one exercise, optionally writing an SVG chart
pub fn analyze(
    service: &AnalysisService,
    file: &Path,
    exercise: &str,
    mode: &str,
    chart: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let upload = read_log(file)?;
    let report = service.analyze(&upload, Some(exercise), Some(mode))?;

    if let Some(path) = chart {
        let config = service.config();
        let svg = SvgChartRenderer::new(config.chart_width, config.chart_height)
            .render(&report.data, &report.labels)?;
        fs::write(path, &svg)
            .with_context(|| format!("Failed to write chart to {}", path.display()))?;
        display_chart_written(path, svg.len());
    }

    print_json(&report, compact)
}

/// Count workouts per ISO week
pub fn weekly(service: &AnalysisService, file: &Path, compact: bool) -> Result<()> {
    let upload = read_log(file)?;
    let summary = service.weekly_summary(&upload)?;
    print_json(&summary, compact)
}
