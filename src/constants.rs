// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, ORANGE, RED};
use plotters::style::RGBColor;

// Default input log, as written by the VR session.
pub const DEFAULT_INPUT_PATH: &str = "HelloVR.log";

// Foot label markers. Lines carrying neither are ignored.
pub const RIGHT_FOOT_MARKER: &str = "Right:";
pub const LEFT_FOOT_MARKER: &str = "Left:";

// Outlier trim window [start, end) over sample indices.
// Drops session start-up settling and trailing noise.
pub const DEFAULT_TRIM_START: usize = 50;
pub const DEFAULT_TRIM_END: usize = 350;

// Inclusive value window (cm) for accepting a step height peak.
pub const DEFAULT_PEAK_MIN_CM: f64 = 40.0;
pub const DEFAULT_PEAK_MAX_CM: f64 = 70.0;

// Fixed interval between logged samples, in ms.
pub const DEFAULT_SAMPLE_INTERVAL_MS: f64 = 30.0;

// Output file suffix appended to the log file stem.
pub const REPORT_FILE_SUFFIX: &str = "_gait_report.png";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_ANNOTATION: i32 = 18;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Annotation anchor, as a fraction of the chart's x and y spans.
pub const ANNOTATION_X_FRACTION: f64 = 0.78;
pub const ANNOTATION_Y_FRACTION: f64 = 0.92;

// Panel titles and axis labels
pub const TITLE_STEP_HEIGHT: &str = "Step Height";
pub const TITLE_STEP_WIDTH: &str = "Horizontal Distance between Feet";
pub const LABEL_TIME_MS: &str = "Time (ms)";
pub const LABEL_DISTANCE_CM: &str = "Distance (cm)";

// --- Plot Color Assignments ---
pub const COLOR_STEP_HEIGHT: &RGBColor = &BLUE;
pub const COLOR_STEP_WIDTH: &RGBColor = &ORANGE;
pub const COLOR_PEAK_MARKER: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_MARKER: u32 = 2;

// Peak marker cross size in pixels.
pub const PEAK_MARKER_SIZE: i32 = 6;

// src/constants.rs
