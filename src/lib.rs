// src/lib.rs - Library interface for internal module access

pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;

pub use config::PipelineConfig;
pub use error::{GaitError, LineParseError, Result};
pub use pipeline::{analyze_log, run_pipeline, GaitAnalysis};

/// Package version shown by `--version`.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
