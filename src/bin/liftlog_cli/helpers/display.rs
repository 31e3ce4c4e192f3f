// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for liftlog-cli
// ABOUTME: JSON results go to stdout; status messages go to stderr

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Print a result as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Report a written chart file
pub fn display_chart_written(path: &Path, bytes: usize) {
    eprintln!("Chart written to {} ({bytes} bytes)", path.display());
}
