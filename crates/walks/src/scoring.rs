//! Distance accumulation over accepted path points.

use crate::{geodesy::distance, models::GeoPoint};

/// A metric folded over a path one accepted point at a time.
pub trait TrackMetric {
    type Score;
    fn next_point(&mut self, point: GeoPoint);
    fn finish(&self) -> Self::Score;
}

/// Sum of consecutive great-circle steps along `path`.
///
/// Zero for paths of fewer than two points. Gives the same value as feeding
/// the points one by one into a [`DistanceMetric`].
pub fn total_distance(path: &[GeoPoint]) -> f64 {
    path.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Running distance total, advanced as fixes are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceMetric {
    total_distance: f64,
    last_point: Option<GeoPoint>,
}

impl DistanceMetric {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackMetric for DistanceMetric {
    type Score = f64;

    fn next_point(&mut self, point: GeoPoint) {
        if let Some(prev) = self.last_point {
            self.total_distance += distance(prev, point);
        }
        self.last_point = Some(point);
    }

    fn finish(&self) -> f64 {
        self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(51.5000, -0.1200),
            GeoPoint::new(51.5003, -0.1195),
            GeoPoint::new(51.5001, -0.1190),
            GeoPoint::new(51.5006, -0.1186),
            GeoPoint::new(51.5010, -0.1190),
        ]
    }

    #[test]
    fn test_short_paths_have_no_distance() {
        assert_eq!(total_distance(&[]), 0.0);
        assert_eq!(total_distance(&[GeoPoint::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_incremental_matches_one_pass() {
        let points = zigzag();
        let mut metric = DistanceMetric::new();
        for p in &points {
            metric.next_point(*p);
        }
        let one_pass = total_distance(&points);
        assert!((metric.finish() - one_pass).abs() <= one_pass * 1e-6);
    }

    #[test]
    fn test_appending_never_decreases_total() {
        let points = zigzag();
        let mut previous = 0.0;
        for end in 1..=points.len() {
            let total = total_distance(&points[..end]);
            assert!(total >= previous);
            previous = total;
        }
    }
}
