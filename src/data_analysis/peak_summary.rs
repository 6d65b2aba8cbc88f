// src/data_analysis/peak_summary.rs

use std::borrow::Cow;

use ndarray::{Array1, Axis};
use tracing::debug;

use crate::data_analysis::peak_detection::{PeakFinder, PeakWindow};
use crate::error::{GaitError, Result};

/// Step height peaks and the averages sampled at them.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSummary {
    pub indices: Vec<usize>,
    pub mean_height: f64,
    pub mean_width: f64,
}

/// Finds peaks in `step_height` and averages both metrics at those indices.
///
/// Width is sampled at the height peaks, not at peaks of its own.
/// No peaks in `window` is reported as [`GaitError::EmptyPeakSet`].
pub fn analyze_peaks<P: PeakFinder + ?Sized>(
    step_height: &Array1<f64>,
    step_width: &Array1<f64>,
    window: &PeakWindow,
    peak_finder: &P,
) -> Result<PeakSummary> {
    // Owned arrays are contiguous; the copy only happens for a strided view.
    let heights: Cow<[f64]> = step_height
        .as_slice()
        .map_or_else(|| Cow::Owned(step_height.to_vec()), Cow::Borrowed);
    let indices = peak_finder.find_peaks(&heights, window);
    debug!(count = indices.len(), ?indices, "Step height peaks");

    let empty = || GaitError::EmptyPeakSet {
        min: window.min,
        max: window.max,
    };
    if indices.is_empty() {
        return Err(empty());
    }
    if let Some(&bad) = indices.iter().find(|&&i| i >= step_height.len() || i >= step_width.len()) {
        return Err(GaitError::InvalidConfig(format!(
            "peak finder returned index {bad} outside {} samples",
            step_height.len()
        )));
    }

    let mean_height = step_height.select(Axis(0), &indices).mean().ok_or_else(empty)?;
    let mean_width = step_width.select(Axis(0), &indices).mean().ok_or_else(empty)?;

    Ok(PeakSummary {
        indices,
        mean_height,
        mean_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::peak_detection::LocalMaximaPeakFinder;

    #[test]
    fn test_means_sampled_at_height_peaks() {
        let height = Array1::from(vec![0.0, 50.0, 0.0, 60.0, 0.0]);
        let width = Array1::from(vec![9.0, 10.0, 9.0, 20.0, 9.0]);
        let summary = analyze_peaks(&height, &width, &PeakWindow::default(), &LocalMaximaPeakFinder).unwrap();
        assert_eq!(summary.indices, vec![1, 3]);
        assert_eq!(summary.mean_height, 55.0);
        assert_eq!(summary.mean_width, 15.0);
    }

    #[test]
    fn test_no_peaks_in_window() {
        let height = Array1::from(vec![0.0, 10.0, 0.0, 90.0, 0.0]);
        let width = Array1::zeros(5);
        let err = analyze_peaks(&height, &width, &PeakWindow::default(), &LocalMaximaPeakFinder).unwrap_err();
        assert!(matches!(err, GaitError::EmptyPeakSet { min, max } if min == 40.0 && max == 70.0));
    }

    #[test]
    fn test_out_of_range_index_from_custom_finder() {
        let height = Array1::from(vec![50.0, 50.0]);
        let width = Array1::zeros(2);
        let finder = |_: &[f64], _: &PeakWindow| vec![7usize];
        assert!(analyze_peaks(&height, &width, &PeakWindow::default(), &finder).is_err());
    }

    #[test]
    fn test_finder_sees_step_height_values() {
        let height = Array1::from(vec![0.0, 45.0, 0.0]);
        let width = Array1::from(vec![1.0, 2.0, 3.0]);
        let finder = |data: &[f64], _: &PeakWindow| {
            assert_eq!(data, &[0.0, 45.0, 0.0]);
            vec![1usize]
        };
        let summary = analyze_peaks(&height, &width, &PeakWindow::default(), &finder).unwrap();
        assert_eq!((summary.mean_height, summary.mean_width), (45.0, 2.0));
    }
}
