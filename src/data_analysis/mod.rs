// src/data_analysis/mod.rs

pub mod gait_metrics;
pub mod peak_detection;
pub mod peak_summary;
pub mod time_axis;
pub mod trim;

// src/data_analysis/mod.rs
