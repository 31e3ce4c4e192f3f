// ABOUTME: Presenter assembling chart-ready payloads for one exercise
// ABOUTME: Builds series, mode-specific labels, and the optional encoded chart image

use crate::chart::ChartRenderer;
use crate::metrics::progress_series;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use liftlog_core::constants::chart::{
    ONE_REP_MAX_LINE_LABEL, ONE_REP_MAX_TITLE_SUFFIX, ONE_REP_MAX_Y_LABEL, RUNNING_BEST_LABEL,
    VOLUME_LINE_LABEL, VOLUME_TITLE_SUFFIX, VOLUME_Y_LABEL, WEIGHT_LINE_LABEL, WEIGHT_Y_LABEL,
    X_AXIS_LABEL,
};
use liftlog_core::errors::AppResult;
use liftlog_core::models::{
    AnalysisMode, AnalysisReport, ChartData, ChartImage, ChartLabels, DaySummary, PersonalRecords,
};

/// Labels for an exercise charted under `mode`
#[must_use]
pub fn chart_labels(exercise_name: &str, mode: AnalysisMode) -> ChartLabels {
    let (y_label, line_label, suffix) = match mode {
        AnalysisMode::Weight => (WEIGHT_Y_LABEL, WEIGHT_LINE_LABEL, ""),
        AnalysisMode::OneRepMax => (
            ONE_REP_MAX_Y_LABEL,
            ONE_REP_MAX_LINE_LABEL,
            ONE_REP_MAX_TITLE_SUFFIX,
        ),
        AnalysisMode::Volume => (VOLUME_Y_LABEL, VOLUME_LINE_LABEL, VOLUME_TITLE_SUFFIX),
    };

    ChartLabels {
        title: format!("Best {exercise_name} per Session{suffix}"),
        x_label: X_AXIS_LABEL.to_owned(),
        y_label: y_label.to_owned(),
        line_label: line_label.to_owned(),
        running_best_label: RUNNING_BEST_LABEL.to_owned(),
    }
}

/// Column-oriented chart series from per-day bests
#[must_use]
pub fn chart_data(exercise_name: &str, days: &[DaySummary], mode: AnalysisMode) -> ChartData {
    let series = progress_series(days, mode);

    ChartData {
        dates: series.iter().map(|p| p.date).collect(),
        values: series.iter().map(|p| p.value).collect(),
        running_best_values: series.iter().map(|p| p.running_best).collect(),
        exercise_name: exercise_name.to_owned(),
        analysis_mode: mode,
    }
}

/// Render and base64-encode a chart
///
/// # Errors
///
/// Propagates renderer failures
pub fn encode_chart(
    renderer: &dyn ChartRenderer,
    data: &ChartData,
    labels: &ChartLabels,
) -> AppResult<ChartImage> {
    let bytes = renderer.render(data, labels)?;
    Ok(ChartImage {
        media_type: renderer.media_type().to_owned(),
        data: STANDARD.encode(bytes),
    })
}

/// Assemble the full report for one exercise
///
/// # Errors
///
/// Propagates renderer failures; without a renderer this cannot fail
pub fn present(
    exercise_name: &str,
    days: &[DaySummary],
    prs: PersonalRecords,
    mode: AnalysisMode,
    renderer: Option<&dyn ChartRenderer>,
) -> AppResult<AnalysisReport> {
    let data = chart_data(exercise_name, days, mode);
    let labels = chart_labels(exercise_name, mode);
    let graph_image = renderer
        .map(|r| encode_chart(r, &data, &labels))
        .transpose()?;

    Ok(AnalysisReport {
        data,
        labels,
        prs,
        graph_image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_mode() {
        let weight = chart_labels("Squat", AnalysisMode::Weight);
        assert_eq!(weight.title, "Best Squat per Session");
        assert_eq!(weight.y_label, "Weight (kg)");

        let one_rm = chart_labels("Squat", AnalysisMode::OneRepMax);
        assert_eq!(one_rm.title, "Best Squat per Session (1RM est.)");
        assert_eq!(one_rm.line_label, "Session 1RM (est.)");

        let volume = chart_labels("Squat", AnalysisMode::Volume);
        assert_eq!(volume.title, "Best Squat per Session (Volume)");
        assert_eq!(volume.running_best_label, "All-time best so far");
    }
}
