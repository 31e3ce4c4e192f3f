// ABOUTME: Presenter output models for a single exercise analysis
// ABOUTME: Chart-ready series, axis labels, personal records, and optional image

use super::{AnalysisMode, PersonalRecords};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numeric series consumed by any chart renderer
///
/// `dates`, `values` and `running_best_values` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Session dates, ascending
    pub dates: Vec<NaiveDate>,
    /// Session metric per date
    pub values: Vec<f64>,
    /// Prefix maximum of `values`
    pub running_best_values: Vec<f64>,
    /// Resolved exercise name
    pub exercise_name: String,
    /// Metric plotted
    pub analysis_mode: AnalysisMode,
}

impl ChartData {
    /// Number of sessions in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when the series has no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Human-readable labels for the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    /// e.g. "Best Bench Press per Session (1RM est.)"
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Legend entry of the session curve
    pub line_label: String,
    /// Legend entry of the running-best curve
    pub running_best_label: String,
}

/// Rendered chart, base64-encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartImage {
    /// MIME type of the decoded bytes
    pub media_type: String,
    /// Base64 (standard alphabet) image bytes
    pub data: String,
}

/// Everything the presenter returns for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Chart series
    pub data: ChartData,
    /// Chart labels for the selected mode
    pub labels: ChartLabels,
    /// Personal records over all valid sets
    pub prs: PersonalRecords,
    /// Rendered chart, absent when rendering is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_image: Option<ChartImage>,
}
