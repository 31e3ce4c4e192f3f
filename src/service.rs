// ABOUTME: Analysis service shared by the HTTP routes and the CLI
// ABOUTME: Validates request parameters, loads uploads, and runs the analytics pipeline

//! Upload analysis service
//!
//! Every operation takes the raw bytes of a workout log export. Request
//! parameters are validated before the upload is parsed so a bad mode or an
//! empty exercise selection never costs a CSV read.

use crate::config::AnalysisConfig;
use liftlog_analytics::chart::{ChartRenderer, SvgChartRenderer};
use liftlog_analytics::loader::{load_workouts, LoadedWorkouts};
use liftlog_analytics::{analyze_exercise, catalog, weekly};
use liftlog_core::errors::{AnalysisError, AppResult};
use liftlog_core::models::{AnalysisMode, AnalysisReport, ExerciseCatalog, WeeklySummary};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Stateless analysis over uploaded workout logs
#[derive(Clone)]
pub struct AnalysisService {
    config: AnalysisConfig,
    renderer: Option<Arc<dyn ChartRenderer>>,
}

impl fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisService")
            .field("config", &self.config)
            .field("renders_charts", &self.renderer.is_some())
            .finish()
    }
}

impl AnalysisService {
    /// Build a service; charts are rendered as SVG when enabled
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        let renderer = config.render_charts.then(|| {
            Arc::new(SvgChartRenderer::new(config.chart_width, config.chart_height))
                as Arc<dyn ChartRenderer>
        });
        Self { config, renderer }
    }

    /// Replace the chart renderer, or disable rendering with `None`
    #[must_use]
    pub fn with_renderer(mut self, renderer: Option<Arc<dyn ChartRenderer>>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Configuration this service was built with
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Parse and clean an upload
    ///
    /// # Errors
    ///
    /// Returns `MissingColumns`, `MalformedCsv`, or `NoValidRows`
    pub fn load(&self, upload: &[u8]) -> AppResult<LoadedWorkouts> {
        let loaded = load_workouts(upload, &self.config.load_options())?;
        debug!(
            bytes = upload.len(),
            rows = loaded.rows.len(),
            dropped = loaded.rows_dropped,
            "loaded upload"
        );
        Ok(loaded)
    }

    /// Distinct exercises in an upload
    ///
    /// # Errors
    ///
    /// Returns loader errors
    #[instrument(skip_all, fields(bytes = upload.len()))]
    pub fn exercises(&self, upload: &[u8]) -> AppResult<ExerciseCatalog> {
        let loaded = self.load(upload)?;
        Ok(catalog::catalog(&loaded.rows))
    }

    /// Progress report for one exercise
    ///
    /// A missing mode means `weight`.
    ///
    /// # Errors
    ///
    /// - `EmptyExerciseSelection` when `exercise` is absent or blank
    /// - `InvalidAnalysisMode` for an unknown mode
    /// - loader, resolution, and render errors
    #[instrument(skip(self, upload), fields(bytes = upload.len()))]
    pub fn analyze(
        &self,
        upload: &[u8],
        exercise: Option<&str>,
        mode: Option<&str>,
    ) -> AppResult<AnalysisReport> {
        let query = validate_exercise(exercise)?;
        let mode = parse_mode(mode)?;

        let loaded = self.load(upload)?;
        analyze_exercise(&loaded.rows, query, mode, self.renderer.as_deref())
    }

    /// Workout counts per ISO week
    ///
    /// # Errors
    ///
    /// Returns loader errors
    #[instrument(skip_all, fields(bytes = upload.len()))]
    pub fn weekly_summary(&self, upload: &[u8]) -> AppResult<WeeklySummary> {
        let loaded = self.load(upload)?;
        Ok(weekly::weekly_summary(&loaded.rows))
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

fn validate_exercise(exercise: Option<&str>) -> Result<&str, AnalysisError> {
    exercise
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .ok_or(AnalysisError::EmptyExerciseSelection)
}

fn parse_mode(mode: Option<&str>) -> Result<AnalysisMode, AnalysisError> {
    mode.map_or(Ok(AnalysisMode::default()), str::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftlog_core::errors::ErrorCode;

    const LOG: &[u8] = b"Date,Exercise Name,Weight,Reps\n\
        2024-01-01,Bench Press (Barbell),100,5\n\
        2024-01-03,Bench Press (Barbell),105,3\n\
        2024-01-03,Squat (Barbell),140,5\n";

    fn headless() -> AnalysisService {
        AnalysisService::default().with_renderer(None)
    }

    #[test]
    fn test_mode_validated_before_parsing() {
        let err = headless()
            .analyze(b"not,a,csv", Some("bench"), Some("speed"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAnalysisMode);
    }

    #[test]
    fn test_blank_exercise_rejected() {
        let err = headless().analyze(LOG, Some("   "), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyExerciseSelection);

        let err = headless().analyze(LOG, None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyExerciseSelection);
    }

    #[test]
    fn test_default_mode_is_weight() {
        let report = headless().analyze(LOG, Some("bench"), None).unwrap();
        assert_eq!(report.data.analysis_mode, AnalysisMode::Weight);
        assert_eq!(report.data.values, vec![100.0, 105.0]);
        assert!(report.graph_image.is_none());
    }

    #[test]
    fn test_renders_chart_when_enabled() {
        let report = AnalysisService::default()
            .analyze(LOG, Some("squat"), Some("volume"))
            .unwrap();
        let image = report.graph_image.unwrap();
        assert_eq!(image.media_type, "image/svg+xml");
        assert!(!image.data.is_empty());
    }
}
