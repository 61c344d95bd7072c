//! Configuration types for simulated walks.

use serde::{Deserialize, Serialize};

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lon: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Returns a random point within the bounding box.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> (f64, f64) {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lon = rng.gen_range(self.min_lon..self.max_lon);
        (lat, lon)
    }
}

/// Pre-defined areas to walk in.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Central park area in Bengaluru - flat, dense paths.
    pub const CUBBON_PARK: BoundingBox = BoundingBox::new(12.970, 77.588, 12.982, 77.600);
}

/// Configuration for a simulated walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Target walked distance in meters.
    pub distance_meters: f64,
    /// Starting point (lat, lon). If None, random within `region`.
    pub start_point: Option<(f64, f64)>,
    /// Area the walk stays inside.
    pub region: BoundingBox,
    /// Seconds between sensor callbacks.
    pub sample_interval_s: f64,
    /// Median reported accuracy of a good fix in meters.
    pub typical_accuracy_m: f64,
    /// Probability (0.0-1.0) that a fix is a poor one (accuracy >= 20 m).
    pub poor_fix_probability: f64,
    /// Probability (0.0-1.0) of stopping at a given sample.
    pub pause_probability: f64,
    /// Duration range for pauses (min, max) in seconds.
    pub pause_duration_range: (f64, f64),
    /// RNG seed for reproducible walks.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            distance_meters: 2_000.0,
            start_point: None,
            region: Region::CUBBON_PARK,
            sample_interval_s: 1.0,
            typical_accuracy_m: 6.0,
            poor_fix_probability: 0.05,
            pause_probability: 0.01,
            pause_duration_range: (10.0, 60.0),
            seed: 12345,
        }
    }
}
