// src/pipeline.rs

use ndarray::Array1;
use std::io::BufRead;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::data_analysis::gait_metrics::{planar_distance, step_height, step_width};
use crate::data_analysis::peak_detection::PeakFinder;
use crate::data_analysis::peak_summary::{analyze_peaks, PeakSummary};
use crate::data_analysis::time_axis::build_time_axis;
use crate::data_analysis::trim::trim_outliers;
use crate::data_input::log_data::FootPositions;
use crate::data_input::log_parser::{parse_log_file, read_foot_positions};
use crate::error::Result;

/// Everything derived from one session log.
#[derive(Debug, Clone, PartialEq)]
pub struct GaitAnalysis {
    /// Stem of the source log, used for chart titles.
    pub root_name: String,
    pub time: Array1<f64>,
    pub step_height: Array1<f64>,
    pub step_width: Array1<f64>,
    /// Full x/y inter-foot distance. Carried for callers; not charted.
    pub planar_distance: Array1<f64>,
    pub peaks: PeakSummary,
}

impl GaitAnalysis {
    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    /// (time, value) pairs for each peak index, taken from `metric`.
    pub fn peak_points(&self, metric: &Array1<f64>) -> Vec<(f64, f64)> {
        self.peaks
            .indices
            .iter()
            .filter_map(|&i| Some((*self.time.get(i)?, *metric.get(i)?)))
            .collect()
    }
}

/// Runs the pipeline on the configured log file.
pub fn run_pipeline<P: PeakFinder + ?Sized>(config: &PipelineConfig, peak_finder: &P) -> Result<GaitAnalysis> {
    config.validate()?;
    let positions = parse_log_file(&config.input_path)?;
    let root_name = config
        .input_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    analyze_positions(positions, root_name, config, peak_finder)
}

/// Runs the pipeline on any line source, e.g. an in-memory log.
pub fn analyze_log<R: BufRead, P: PeakFinder + ?Sized>(
    reader: R,
    root_name: &str,
    config: &PipelineConfig,
    peak_finder: &P,
) -> Result<GaitAnalysis> {
    config.validate()?;
    let positions = read_foot_positions(reader)?;
    analyze_positions(positions, root_name.to_string(), config, peak_finder)
}

fn analyze_positions<P: PeakFinder + ?Sized>(
    positions: FootPositions,
    root_name: String,
    config: &PipelineConfig,
    peak_finder: &P,
) -> Result<GaitAnalysis> {
    positions.ensure_aligned()?;

    let window = config.trim_window();
    let trimmed = trim_outliers(&positions, window);
    info!(
        total = positions.len(),
        kept = trimmed.len(),
        start = window.start,
        end = window.end,
        "Trimmed outlier samples"
    );

    let height = step_height(&trimmed.right, &trimmed.left);
    let width = step_width(&trimmed.right, &trimmed.left);
    let distance = planar_distance(&trimmed.right, &trimmed.left);
    let time = build_time_axis(trimmed.len(), config.sample_interval);
    debug!(?time, "Time axis (ms)");

    let peaks = analyze_peaks(&height, &width, &config.peak_window(), peak_finder)?;
    info!(
        peaks = peaks.indices.len(),
        mean_height = peaks.mean_height,
        mean_width = peaks.mean_width,
        "Step height peaks analyzed"
    );

    Ok(GaitAnalysis {
        root_name,
        time,
        step_height: height,
        step_width: width,
        planar_distance: distance,
        peaks,
    })
}
