// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failure while extracting a coordinate from a single log line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LineParseError {
    #[error("missing field '{field}='")]
    MissingField { field: char },

    #[error("malformed number '{token}' for field '{field}='")]
    MalformedNumber { field: char, token: String },
}

/// Errors surfaced by the gait pipeline.
#[derive(Debug, Error)]
pub enum GaitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: LineParseError,
    },

    #[error("right/left sequences differ in length: {right} right vs {left} left entries")]
    LengthMismatch { right: usize, left: usize },

    #[error("no step height peaks found within [{min}, {max}]")]
    EmptyPeakSet { min: f64, max: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load config file '{}': {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, GaitError>;
