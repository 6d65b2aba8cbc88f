// src/plot_functions/mod.rs

pub mod plot_gait_report;

// src/plot_functions/mod.rs
