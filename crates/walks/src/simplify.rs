//! Douglas-Peucker simplification of walk paths for rendering.
//!
//! The result is presentation-only. Distance totals are always computed on
//! the unsimplified path.

use crate::{
    geodesy::distance,
    models::{GeoPoint, Path},
};

/// Default deviation allowed when drawing a walk doodle, in meters.
pub const DEFAULT_TOLERANCE_M: f64 = 5.0;

/// Reduces `path` to the points needed to stay within `tolerance_meters` of
/// the original shape.
///
/// The output is an order-preserving subsequence of `path` that always keeps
/// the first and last points. Paths of two or fewer points come back
/// unchanged.
///
/// Ranges still to be examined are kept on an explicit stack, so long paths
/// do not grow the call stack. Splits happen at the same indices the
/// recursive formulation would pick.
pub fn simplify(path: &[GeoPoint], tolerance_meters: f64) -> Path {
    let n = path.len();
    if n <= 2 {
        return Path::from(path.to_vec());
    }

    let mut kept = vec![false; n];
    kept[0] = true;
    kept[n - 1] = true;

    let mut ranges = vec![(0, n - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end < start + 2 {
            continue;
        }

        let (index, max_dist) = farthest_point(path, start, end);
        if max_dist > tolerance_meters {
            kept[index] = true;
            ranges.push((index, end));
            ranges.push((start, index));
        }
    }

    path.iter()
        .zip(&kept)
        .filter(|&(_, k)| *k)
        .map(|(&p, _)| p)
        .collect()
}

/// Interior point of `points[start..=end]` farthest from the chord between
/// the range's endpoints, with its distance in meters.
///
/// Ties go to the lowest index. Requires `end >= start + 2`.
fn farthest_point(points: &[GeoPoint], start: usize, end: usize) -> (usize, f64) {
    let a = points[start];
    let b = points[end];

    let mut max_index = start + 1;
    let mut max_dist = perpendicular_distance(points[max_index], a, b);

    for (i, &p) in points.iter().enumerate().take(end).skip(start + 2) {
        let d = perpendicular_distance(p, a, b);
        if d > max_dist {
            max_dist = d;
            max_index = i;
        }
    }

    (max_index, max_dist)
}

/// Distance in meters from `p` to the segment `a`-`b`.
///
/// The projection is done in planar (longitude, latitude) space with the
/// segment parameter clamped to `[0, 1]`; the final length is great-circle.
/// When `a` and `b` coincide this is the distance from `p` to `a`.
fn perpendicular_distance(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = b.longitude - a.longitude;
    let dy = b.latitude - a.latitude;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return distance(p, a);
    }

    let t = (((p.longitude - a.longitude) * dx + (p.latitude - a.latitude) * dy) / length_sq)
        .clamp(0.0, 1.0);
    let projection = GeoPoint::new(a.latitude + t * dy, a.longitude + t * dx);

    distance(p, projection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<GeoPoint> {
        coords
            .iter()
            .map(|&(lat, lon)| GeoPoint::new(lat, lon))
            .collect()
    }

    fn is_subsequence(sub: &[GeoPoint], full: &[GeoPoint]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    #[test]
    fn test_short_paths_unchanged() {
        assert!(simplify(&[], 1.0).is_empty());

        let one = pts(&[(1.0, 2.0)]);
        assert_eq!(simplify(&one, 1.0).points(), one.as_slice());

        let two = pts(&[(0.0, 0.0), (0.0, 1.0)]);
        assert_eq!(simplify(&two, 1_000_000.0).points(), two.as_slice());
    }

    #[test]
    fn test_collinear_points_collapse() {
        let line = pts(&[(0.0, 0.0), (0.001, 0.0), (0.002, 0.0), (0.003, 0.0)]);
        let result = simplify(&line, 1.0);
        assert_eq!(result.points(), &[line[0], line[3]]);
    }

    #[test]
    fn test_corner_is_kept() {
        // An L-shaped walk: ~111 m east then ~111 m north.
        let l_shape = pts(&[
            (0.0, 0.0),
            (0.0, 0.0005),
            (0.0, 0.001),
            (0.0005, 0.001),
            (0.001, 0.001),
        ]);
        let result = simplify(&l_shape, 1.0);
        assert_eq!(result.points(), &[l_shape[0], l_shape[2], l_shape[4]]);
    }

    #[test]
    fn test_small_wiggle_within_tolerance_dropped() {
        // Middle point is ~1.1 m off the chord.
        let wiggle = pts(&[(0.0, 0.0), (0.00001, 0.0005), (0.0, 0.001)]);
        assert_eq!(simplify(&wiggle, 2.0).len(), 2);
        assert_eq!(simplify(&wiggle, 0.5).len(), 3);
    }

    #[test]
    fn test_loop_with_identical_endpoints() {
        // A round trip returning to the start: the chord is a single point,
        // so deviation is measured from the start.
        let round_trip = pts(&[
            (0.0, 0.0),
            (0.0, 0.001),
            (0.001, 0.001),
            (0.001, 0.0),
            (0.0, 0.0),
        ]);
        let result = simplify(&round_trip, 10.0);

        assert_eq!(result.first(), round_trip.first());
        assert_eq!(result.last(), round_trip.last());
        // (0.001, 0.001) is farthest from the start and must survive.
        assert!(result.contains(&round_trip[2]));
        assert!(is_subsequence(&result, &round_trip));
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        // Both interior points sit exactly 0.001 degrees of latitude off
        // a chord along the equator.
        let path = pts(&[(0.0, 0.0), (0.001, 0.001), (0.001, 0.002), (0.0, 0.003)]);
        let (index, dist) = farthest_point(&path, 0, 3);
        assert_eq!(index, 1);
        assert!((dist - distance(path[1], GeoPoint::new(0.0, 0.001))).abs() < 1e-9);
    }

    #[test]
    fn test_projection_clamped_to_segment() {
        // Point beyond the end of the chord measures to the endpoint.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.001);
        let beyond = GeoPoint::new(0.0, 0.002);
        assert!((perpendicular_distance(beyond, a, b) - distance(beyond, b)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_tolerance_keeps_every_deviating_point() {
        let path = pts(&[(0.0, 0.0), (0.0001, 0.0001), (0.0, 0.0002), (0.0001, 0.0003)]);
        assert_eq!(simplify(&path, 0.0).len(), 4);
    }

    /// Plain recursive Douglas-Peucker, split at the farthest point.
    fn recursive(points: &[GeoPoint], tolerance: f64) -> Vec<GeoPoint> {
        let n = points.len();
        if n <= 2 {
            return points.to_vec();
        }
        let (index, max_dist) = farthest_point(points, 0, n - 1);
        if max_dist > tolerance {
            let mut left = recursive(&points[..=index], tolerance);
            left.pop();
            left.extend(recursive(&points[index..], tolerance));
            left
        } else {
            vec![points[0], points[n - 1]]
        }
    }

    #[test]
    fn test_matches_recursive_formulation() {
        use rand::{Rng, SeedableRng, rngs::StdRng};

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let len = rng.gen_range(3..60);
            // Coarse grid, so equal deviations and repeated points occur.
            let path: Vec<GeoPoint> = (0..len)
                .map(|_| {
                    let lat = f64::from(rng.gen_range(0..8u8)) * 0.0001;
                    let lon = f64::from(rng.gen_range(0..8u8)) * 0.0001;
                    GeoPoint::new(lat, lon)
                })
                .collect();

            for tolerance in [0.0, 1.0, 5.0, 15.0, 40.0] {
                assert_eq!(
                    simplify(&path, tolerance).points(),
                    recursive(&path, tolerance).as_slice(),
                    "seed {seed}, tolerance {tolerance}"
                );
            }
        }
    }

    #[test]
    fn test_negative_tolerance_terminates() {
        let line = pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(simplify(&line, -1.0).len(), 4);
    }
}
