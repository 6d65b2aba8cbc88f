// src/data_analysis/peak_detection.rs

use crate::constants::{DEFAULT_PEAK_MAX_CM, DEFAULT_PEAK_MIN_CM};

/// Inclusive value range a local maximum must fall in to count as a gait peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakWindow {
    pub min: f64,
    pub max: f64,
}

impl Default for PeakWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_PEAK_MIN_CM,
            max: DEFAULT_PEAK_MAX_CM,
        }
    }
}

impl PeakWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Strategy for locating peaks in a metric sequence.
///
/// Implementations return ascending indices into `data` whose values lie in `window`.
pub trait PeakFinder {
    fn find_peaks(&self, data: &[f64], window: &PeakWindow) -> Vec<usize>;
}

impl<F> PeakFinder for F
where
    F: Fn(&[f64], &PeakWindow) -> Vec<usize>,
{
    fn find_peaks(&self, data: &[f64], window: &PeakWindow) -> Vec<usize> {
        self(data, window)
    }
}

/// Default peak finder: local maxima with height bounds.
///
/// Boundary samples are never peaks. A flat plateau is a single peak, reported at
/// its middle sample (the lower middle for an even-length plateau), provided the
/// values drop on both sides.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalMaximaPeakFinder;

impl PeakFinder for LocalMaximaPeakFinder {
    fn find_peaks(&self, data: &[f64], window: &PeakWindow) -> Vec<usize> {
        local_maxima(data)
            .into_iter()
            .filter(|&idx| window.contains(data[idx]))
            .collect()
    }
}

/// Indices of all local maxima in `data`, ascending, boundaries excluded.
pub fn local_maxima(data: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if data.len() < 3 {
        return peaks;
    }

    let last = data.len() - 1;
    let mut j = 1;
    while j < last {
        if data[j - 1] < data[j] {
            // Walk across a possible plateau.
            let mut ahead = j + 1;
            while ahead < last && data[ahead] == data[j] {
                ahead += 1;
            }
            if data[ahead] < data[j] {
                let plateau_end = ahead - 1;
                peaks.push((j + plateau_end) / 2);
                j = ahead;
            }
        }
        j += 1;
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharp_peaks() {
        let data = [0.0, 1.0, 0.0, 2.0, 0.5, 3.0, 1.0];
        assert_eq!(local_maxima(&data), vec![1, 3, 5]);
    }

    #[test]
    fn test_boundaries_are_not_peaks() {
        let data = [5.0, 1.0, 2.0, 1.0, 6.0];
        assert_eq!(local_maxima(&data), vec![2]);
    }

    #[test]
    fn test_plateau_reports_middle() {
        assert_eq!(local_maxima(&[0.0, 2.0, 2.0, 2.0, 0.0]), vec![2]);
        assert_eq!(local_maxima(&[0.0, 2.0, 2.0, 0.0]), vec![1]);
    }

    #[test]
    fn test_plateau_touching_boundary_is_not_peak() {
        assert!(local_maxima(&[0.0, 2.0, 2.0, 2.0]).is_empty());
    }

    #[test]
    fn test_rising_step_is_not_peak() {
        assert!(local_maxima(&[0.0, 1.0, 1.0, 2.0, 3.0]).is_empty());
    }

    #[test]
    fn test_short_input() {
        assert!(local_maxima(&[]).is_empty());
        assert!(local_maxima(&[1.0, 2.0]).is_empty());
    }

    #[test]
    fn test_window_filters_peaks_inclusively() {
        let data = [0.0, 40.0, 0.0, 80.0, 0.0, 70.0, 0.0, 39.9, 0.0];
        let peaks = LocalMaximaPeakFinder.find_peaks(&data, &PeakWindow::default());
        assert_eq!(peaks, vec![1, 5]);
    }

    #[test]
    fn test_closure_as_peak_finder() {
        let every_other = |data: &[f64], _w: &PeakWindow| (0..data.len()).step_by(2).collect::<Vec<_>>();
        assert_eq!(every_other.find_peaks(&[1.0; 5], &PeakWindow::default()), vec![0, 2, 4]);
    }
}
