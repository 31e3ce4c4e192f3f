// ABOUTME: Chart rendering seam and the built-in SVG progress chart renderer
// ABOUTME: Draws the session curve, dashed running-best curve, and shaded area beneath it

//! Chart rendering
//!
//! The analytics pipeline produces plain numeric series; turning them into an
//! image goes through [`ChartRenderer`] so a deployment can swap renderers or
//! skip rendering entirely (headless JSON).

use liftlog_core::constants::chart::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{ChartData, ChartLabels};
use plotters::prelude::*;
use std::error::Error;

/// Renders chart data into an image
pub trait ChartRenderer: Send + Sync {
    /// MIME type of the bytes returned by [`render`](Self::render)
    fn media_type(&self) -> &'static str;

    /// Render the series and labels
    ///
    /// # Errors
    ///
    /// Returns a render error if the series cannot be drawn
    fn render(&self, data: &ChartData, labels: &ChartLabels) -> AppResult<Vec<u8>>;
}

const MAX_X_LABELS: usize = 12;
const SESSION_COLOR: RGBColor = RGBColor(31, 119, 180);
const BEST_COLOR: RGBColor = RGBColor(255, 127, 14);
const FONT: &str = "sans-serif";

/// SVG renderer for progress charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgChartRenderer {
    width: u32,
    height: u32,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl SvgChartRenderer {
    /// Create a renderer producing images of the given pixel size
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw(&self, data: &ChartData, labels: &ChartLabels) -> Result<String, Box<dyn Error>> {
        let sessions: Vec<(f64, f64)> = indexed(&data.values);
        let bests: Vec<(f64, f64)> = indexed(&data.running_best_values);

        let peak = data
            .values
            .iter()
            .chain(&data.running_best_values)
            .copied()
            .fold(0.0_f64, f64::max);
        let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };
        // one session still gets a visible x range centred on it
        let x_range = if data.len() > 1 {
            0.0..(data.len() - 1) as f64
        } else {
            -1.0..1.0
        };

        let date_label = |x: &f64| {
            let index = x.round();
            if (x - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            data.dates
                .get(index as usize)
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&labels.title, (FONT, 22))
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(70)
                .build_cartesian_2d(x_range, 0.0..y_max)?;

            chart
                .configure_mesh()
                .x_desc(labels.x_label.as_str())
                .y_desc(labels.y_label.as_str())
                .x_labels(data.len().clamp(3, MAX_X_LABELS))
                .x_label_formatter(&date_label)
                .y_label_formatter(&|y| format!("{y:.0}"))
                .light_line_style(WHITE.mix(0.0))
                .label_style((FONT, 13))
                .draw()?;

            chart.draw_series(AreaSeries::new(
                bests.iter().copied(),
                0.0,
                BEST_COLOR.mix(0.15),
            ))?;

            chart
                .draw_series(LineSeries::new(
                    sessions.iter().copied(),
                    SESSION_COLOR.stroke_width(2),
                ))?
                .label(labels.line_label.as_str())
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], SESSION_COLOR.stroke_width(2))
                });
            chart.draw_series(
                sessions
                    .iter()
                    .map(|&point| Circle::new(point, 3, SESSION_COLOR.filled())),
            )?;

            chart
                .draw_series(DashedLineSeries::new(
                    bests.iter().copied(),
                    6,
                    4,
                    BEST_COLOR.stroke_width(2),
                ))?
                .label(labels.running_best_label.as_str())
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 24, y)], BEST_COLOR.stroke_width(2))
                });

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK.mix(0.4))
                .label_font((FONT, 12))
                .draw()?;

            root.present()?;
        }

        Ok(svg)
    }
}

/// Pair each value with its session index
fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| (i as f64, value))
        .collect()
}

impl ChartRenderer for SvgChartRenderer {
    fn media_type(&self) -> &'static str {
        "image/svg+xml"
    }

    fn render(&self, data: &ChartData, labels: &ChartLabels) -> AppResult<Vec<u8>> {
        if data.is_empty() {
            return Err(AppError::render("cannot render an empty series"));
        }
        if data.values.len() != data.len() || data.running_best_values.len() != data.len() {
            return Err(AppError::render("series lengths do not match"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AppError::render("chart dimensions must be positive"));
        }

        self.draw(data, labels)
            .map(String::into_bytes)
            .map_err(|e| AppError::render(format!("SVG generation failed: {e}")))
    }
}
