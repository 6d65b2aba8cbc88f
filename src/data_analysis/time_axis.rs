// src/data_analysis/time_axis.rs

use ndarray::Array1;

/// Builds a synthetic time axis of `len` samples: 0, step, 2*step, ...
///
/// Each element is the previous one plus `sample_interval`, so the result only
/// depends on the length, not on any sample values.
pub fn build_time_axis(len: usize, sample_interval: f64) -> Array1<f64> {
    let mut time = Vec::with_capacity(len);
    let mut current = 0.0;
    for i in 0..len {
        if i > 0 {
            current += sample_interval;
        }
        time.push(current);
    }
    Array1::from(time)
}
