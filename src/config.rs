// src/config.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_PEAK_MAX_CM, DEFAULT_PEAK_MIN_CM, DEFAULT_SAMPLE_INTERVAL_MS,
    DEFAULT_TRIM_END, DEFAULT_TRIM_START, REPORT_FILE_SUFFIX,
};
use crate::data_analysis::peak_detection::PeakWindow;
use crate::data_analysis::trim::TrimWindow;
use crate::error::{GaitError, Result};

/// Run parameters for the gait pipeline.
///
/// Every field has a default matching the stock session setup, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    /// Chart destination. `None` derives it from the input file stem.
    pub output_path: Option<PathBuf>,
    pub trim_start: usize,
    pub trim_end: usize,
    pub peak_min: f64,
    pub peak_max: f64,
    pub sample_interval: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: None,
            trim_start: DEFAULT_TRIM_START,
            trim_end: DEFAULT_TRIM_END,
            peak_min: DEFAULT_PEAK_MIN_CM,
            peak_max: DEFAULT_PEAK_MAX_CM,
            sample_interval: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| GaitError::ConfigFile {
            path: config_path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            GaitError::InvalidConfig(message) => GaitError::ConfigFile {
                path: config_path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GaitError::InvalidConfig(e.to_string()))
    }

    pub fn trim_window(&self) -> TrimWindow {
        TrimWindow::new(self.trim_start, self.trim_end)
    }

    pub fn peak_window(&self) -> PeakWindow {
        PeakWindow::new(self.peak_min, self.peak_max)
    }

    /// Chart output path: the configured one, or `<input stem>_gait_report.png`.
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let root_name = self.input_path.file_stem().unwrap_or_default().to_string_lossy();
                PathBuf::from(format!("{root_name}{REPORT_FILE_SUFFIX}"))
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trim_start > self.trim_end {
            return Err(GaitError::InvalidConfig(format!(
                "trim_start ({}) must not exceed trim_end ({})",
                self.trim_start, self.trim_end
            )));
        }
        if !self.peak_min.is_finite() || !self.peak_max.is_finite() {
            return Err(GaitError::InvalidConfig("peak bounds must be finite".to_string()));
        }
        if self.peak_min > self.peak_max {
            return Err(GaitError::InvalidConfig(format!(
                "peak_min ({}) must not exceed peak_max ({})",
                self.peak_min, self.peak_max
            )));
        }
        if !self.sample_interval.is_finite() || self.sample_interval <= 0.0 {
            return Err(GaitError::InvalidConfig(format!(
                "sample_interval must be a positive number, got {}",
                self.sample_interval
            )));
        }
        Ok(())
    }
}
