// src/data_analysis/gait_metrics.rs

use ndarray::Array1;

use crate::data_input::log_data::Coordinate;

// Both sequences are index-aligned; callers check lengths beforehand.
fn pairwise<F>(right: &[Coordinate], left: &[Coordinate], metric: F) -> Array1<f64>
where
    F: Fn(&Coordinate, &Coordinate) -> f64,
{
    debug_assert_eq!(right.len(), left.len(), "foot sequences must be aligned");
    right
        .iter()
        .zip(left.iter())
        .map(|(r, l)| metric(r, l))
        .collect()
}

/// Vertical separation between the feet: |z_right - z_left| per sample.
pub fn step_height(right: &[Coordinate], left: &[Coordinate]) -> Array1<f64> {
    pairwise(right, left, |r, l| (r.z - l.z).abs())
}

/// Lateral separation between the feet: |y_right - y_left| per sample.
pub fn step_width(right: &[Coordinate], left: &[Coordinate]) -> Array1<f64> {
    pairwise(right, left, |r, l| (r.y - l.y).abs())
}

/// Euclidean distance between the feet in the x/y plane.
///
/// Not the same as [`step_width`], which only looks at the lateral axis.
pub fn planar_distance(right: &[Coordinate], left: &[Coordinate]) -> Array1<f64> {
    pairwise(right, left, |r, l| ((r.x - l.x).powi(2) + (r.y - l.y).powi(2)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_height_single_sample() {
        let h = step_height(&[Coordinate::new(0.0, 0.0, 0.0)], &[Coordinate::new(0.0, 0.0, 5.0)]);
        assert_eq!(h.to_vec(), vec![5.0]);
    }

    #[test]
    fn test_step_width_single_sample() {
        let w = step_width(&[Coordinate::new(0.0, 0.0, 0.0)], &[Coordinate::new(0.0, 3.0, 0.0)]);
        assert_eq!(w.to_vec(), vec![3.0]);
    }

    #[test]
    fn test_planar_distance_single_sample() {
        let d = planar_distance(&[Coordinate::new(0.0, 0.0, 0.0)], &[Coordinate::new(3.0, 4.0, 0.0)]);
        assert_eq!(d.to_vec(), vec![5.0]);
    }

    #[test]
    fn test_metrics_are_non_negative_and_length_preserving() {
        let right: Vec<Coordinate> = (0..25)
            .map(|i| Coordinate::new(i as f64 * 0.3, -(i as f64), (i as f64 * 0.7).sin() * 10.0))
            .collect();
        let left: Vec<Coordinate> = (0..25)
            .map(|i| Coordinate::new(-(i as f64), i as f64 * 1.5, (i as f64 * 0.2).cos() * 12.0))
            .collect();

        for metric in [
            step_height(&right, &left),
            step_width(&right, &left),
            planar_distance(&right, &left),
        ] {
            assert_eq!(metric.len(), right.len());
            assert!(metric.iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn test_planar_distance_differs_from_step_width() {
        let right = [Coordinate::new(6.0, 1.0, 0.0)];
        let left = [Coordinate::new(0.0, 9.0, 0.0)];
        assert_eq!(step_width(&right, &left)[0], 8.0);
        assert_eq!(planar_distance(&right, &left)[0], 10.0);
    }

    #[test]
    fn test_empty_sequences() {
        assert!(step_height(&[], &[]).is_empty());
    }
}
