//! Great-circle distance between two positions.
//!
//! Every point-to-point length in this crate goes through [`distance`]. A
//! flat-plane "degrees times meters-per-degree" shortcut drifts badly past a
//! few hundred meters and must not be used anywhere.

use crate::models::GeoPoint;

/// Mean Earth radius used for all distance math, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between `a` and `b` in meters.
///
/// Symmetric, zero for identical coordinates and non-negative for finite
/// input, including antipodal and polar points. NaN or infinite coordinates
/// propagate into the result.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `h` a hair past 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}
