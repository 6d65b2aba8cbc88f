// src/data_analysis/trim.rs

use crate::constants::{DEFAULT_TRIM_END, DEFAULT_TRIM_START};
use crate::data_input::log_data::{Coordinate, FootPositions};

/// Index window `[start, end)` kept after discarding settling and trailing samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimWindow {
    pub start: usize,
    pub end: usize,
}

impl Default for TrimWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_TRIM_START,
            end: DEFAULT_TRIM_END,
        }
    }
}

impl TrimWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `samples` to the window, clamped to the available length.
    ///
    /// A sequence shorter than `end` keeps everything from `start` onward;
    /// one shorter than `start` yields an empty slice.
    pub fn apply<'a>(&self, samples: &'a [Coordinate]) -> &'a [Coordinate] {
        let end = self.end.min(samples.len());
        let start = self.start.min(end);
        &samples[start..end]
    }
}

/// Applies the same trim window to both feet.
pub fn trim_outliers(positions: &FootPositions, window: TrimWindow) -> FootPositions {
    FootPositions {
        right: window.apply(&positions.right).to_vec(),
        left: window.apply(&positions.left).to_vec(),
    }
}
