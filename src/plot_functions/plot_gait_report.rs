// src/plot_functions/plot_gait_report.rs

use ndarray::Array1;
use plotters::style::RGBColor;
use std::path::PathBuf;

use crate::constants::{
    COLOR_PEAK_MARKER, COLOR_STEP_HEIGHT, COLOR_STEP_WIDTH, LABEL_DISTANCE_CM, LABEL_TIME_MS,
    LINE_WIDTH_PLOT, TITLE_STEP_HEIGHT, TITLE_STEP_WIDTH,
};
use crate::error::{GaitError, Result};
use crate::pipeline::GaitAnalysis;
use crate::plot_framework::{draw_stacked_panels, padded_range, PlotConfig, PlotMarkers, PlotSeries};

/// Final stage of a run: turns a finished analysis into some visual artifact.
pub trait ReportRenderer {
    fn render(&self, analysis: &GaitAnalysis) -> Result<()>;
}

/// Writes the two-panel step height / step width chart as a PNG.
#[derive(Debug, Clone)]
pub struct PngReportRenderer {
    pub output_path: PathBuf,
}

impl PngReportRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl ReportRenderer for PngReportRenderer {
    fn render(&self, analysis: &GaitAnalysis) -> Result<()> {
        let output_file = self.output_path.to_string_lossy().into_owned();
        let panels = gait_report_panels(analysis);
        draw_stacked_panels(&output_file, &analysis.root_name, &panels)
            .map_err(|e| GaitError::Render(e.to_string()))
    }
}

/// Average annotation text, rounded to two decimals.
pub fn format_average(prefix: &str, value: f64) -> String {
    format!("{prefix} = {value:.2} cm")
}

fn metric_panel(
    analysis: &GaitAnalysis,
    title: &str,
    metric: &Array1<f64>,
    color: RGBColor,
    annotation: String,
) -> Option<PlotConfig> {
    let x_range = *analysis.time.iter().next()?..*analysis.time.iter().next_back()?;
    let y_range = padded_range(metric)?;
    let data: Vec<(f64, f64)> = analysis.time.iter().copied().zip(metric.iter().copied()).collect();

    Some(PlotConfig {
        title: title.to_string(),
        x_range,
        y_range,
        series: vec![PlotSeries {
            data,
            label: title.to_string(),
            color,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: LABEL_TIME_MS.to_string(),
        y_label: LABEL_DISTANCE_CM.to_string(),
        peaks: Some(PlotMarkers {
            points: analysis.peak_points(metric),
            label: "Step height peaks".to_string(),
            color: *COLOR_PEAK_MARKER,
        }),
        annotation: Some(annotation),
    })
}

/// Builds the step height panel (top) and step width panel (bottom).
///
/// Both panels mark the step height peak times; the width panel plots the
/// width values at those times.
pub fn gait_report_panels(analysis: &GaitAnalysis) -> Vec<(String, Option<PlotConfig>)> {
    vec![
        (
            TITLE_STEP_HEIGHT.to_string(),
            metric_panel(
                analysis,
                TITLE_STEP_HEIGHT,
                &analysis.step_height,
                *COLOR_STEP_HEIGHT,
                format_average("Avg Peak", analysis.peaks.mean_height),
            ),
        ),
        (
            TITLE_STEP_WIDTH.to_string(),
            metric_panel(
                analysis,
                TITLE_STEP_WIDTH,
                &analysis.step_width,
                *COLOR_STEP_WIDTH,
                format_average("Avg", analysis.peaks.mean_width),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::peak_summary::PeakSummary;

    fn analysis() -> GaitAnalysis {
        GaitAnalysis {
            root_name: "HelloVR".to_string(),
            time: Array1::from(vec![0.0, 30.0, 60.0, 90.0, 120.0]),
            step_height: Array1::from(vec![0.0, 45.0, 0.0, 52.0, 0.0]),
            step_width: Array1::from(vec![10.0, 12.0, 10.0, 14.0, 10.0]),
            planar_distance: Array1::from(vec![10.0, 12.0, 10.0, 14.0, 10.0]),
            peaks: PeakSummary {
                indices: vec![1, 3],
                mean_height: 48.5,
                mean_width: 13.0,
            },
        }
    }

    #[test]
    fn test_format_average_rounds_to_two_decimals() {
        assert_eq!(format_average("Avg Peak", 58.666_666), "Avg Peak = 58.67 cm");
        assert_eq!(format_average("Avg", 25.0), "Avg = 25.00 cm");
    }

    #[test]
    fn test_panels_mark_height_peaks_on_both_metrics() {
        let panels = gait_report_panels(&analysis());
        assert_eq!(panels.len(), 2);

        let height = panels[0].1.as_ref().unwrap();
        assert_eq!(height.title, "Step Height");
        assert_eq!(height.x_label, "Time (ms)");
        assert_eq!(height.y_label, "Distance (cm)");
        assert_eq!(height.peaks.as_ref().unwrap().points, vec![(30.0, 45.0), (90.0, 52.0)]);
        assert_eq!(height.annotation.as_deref(), Some("Avg Peak = 48.50 cm"));
        assert_eq!(height.x_range, 0.0..120.0);

        let width = panels[1].1.as_ref().unwrap();
        assert_eq!(width.title, "Horizontal Distance between Feet");
        assert_eq!(width.peaks.as_ref().unwrap().points, vec![(30.0, 12.0), (90.0, 14.0)]);
        assert_eq!(width.annotation.as_deref(), Some("Avg = 13.00 cm"));
    }

    #[test]
    fn test_empty_analysis_yields_placeholder_panels() {
        let mut empty = analysis();
        empty.time = Array1::from(Vec::new());
        empty.step_height = Array1::from(Vec::new());
        empty.step_width = Array1::from(Vec::new());
        assert!(gait_report_panels(&empty).iter().all(|(_, config)| config.is_none()));
    }
}
