//! Procedural fix stream generation.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, LogNormal, Normal};
use time::{Duration, OffsetDateTime};
use walks::{
    geodesy::EARTH_RADIUS_M,
    models::{GeoPoint, RawFix},
};

use crate::config::{BoundingBox, SimConfig};
use crate::profiles::{self, AthleteProfile};

/// A fix as delivered by the sensor callback, with its arrival time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedFix {
    pub fix: RawFix,
    pub timestamp: OffsetDateTime,
}

/// Generates noisy sensor fix streams along a random walk.
///
/// Good fixes scatter around the true position with a spread matching
/// their reported accuracy. Poor fixes report 20-60 m accuracy and scatter
/// accordingly. Pauses produce bursts of fixes around a stationary point.
pub struct FixGenerator {
    config: SimConfig,
}

impl FixGenerator {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Sets the target distance.
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.config.distance_meters = meters;
        self
    }

    /// Sets the starting point.
    pub fn with_start(mut self, lat: f64, lon: f64) -> Self {
        self.config.start_point = Some((lat, lon));
        self
    }

    /// Sets the share of poor-accuracy fixes.
    pub fn with_poor_fix_probability(mut self, probability: f64) -> Self {
        self.config.poor_fix_probability = probability;
        self
    }

    /// Sets pause parameters.
    pub fn with_pauses(mut self, probability: f64, min_sec: f64, max_sec: f64) -> Self {
        self.config.pause_probability = probability;
        self.config.pause_duration_range = (min_sec, max_sec);
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generates a fix stream from the configured seed.
    pub fn generate(
        &self,
        profile: &dyn AthleteProfile,
        started_at: OffsetDateTime,
    ) -> Vec<TimedFix> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.generate_with(profile, started_at, &mut rng)
    }

    /// Generates a fix stream, walking at the speed `profile` samples.
    pub fn generate_with(
        &self,
        profile: &dyn AthleteProfile,
        started_at: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<TimedFix> {
        let cfg = &self.config;
        let interval = cfg.sample_interval_s.max(0.1);
        let mut current = cfg
            .start_point
            .unwrap_or_else(|| cfg.region.random_point(rng));
        let mut heading = rng.gen_range(0.0..std::f64::consts::TAU);
        let mut timestamp = started_at;
        let mut walked = 0.0;
        let mut fixes = Vec::new();

        fixes.push(self.sample_fix(current, timestamp, rng));

        while walked < cfg.distance_meters {
            if cfg.pause_probability > 0.0 && rng.r#gen::<f64>() < cfg.pause_probability {
                let (min, max) = cfg.pause_duration_range;
                let pause = if max > min { rng.gen_range(min..max) } else { min };
                let mut paused = 0.0;
                while paused < pause {
                    paused += interval;
                    timestamp += Duration::seconds_f64(interval);
                    fixes.push(self.sample_fix(current, timestamp, rng));
                }
            }

            heading += rng.gen_range(-0.3..0.3);
            let step = profiles::sample_speed(profile, rng) * interval;
            let (lat, lon) = offset(current, step * heading.cos(), step * heading.sin());
            let (lat, lon, bounced) = apply_bounds(&cfg.region, lat, lon, heading);
            heading = bounced;
            current = (lat, lon);
            walked += step;
            timestamp += Duration::seconds_f64(interval);

            fixes.push(self.sample_fix(current, timestamp, rng));
        }

        fixes
    }

    fn sample_fix(
        &self,
        (lat, lon): (f64, f64),
        timestamp: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> TimedFix {
        let accuracy = self.sample_accuracy(rng);
        // Roughly two thirds of fixes land inside the reported radius.
        let north = gaussian(rng, accuracy / 2.0);
        let east = gaussian(rng, accuracy / 2.0);
        let (lat, lon) = offset((lat, lon), north, east);

        TimedFix {
            fix: RawFix::new(GeoPoint::new(lat, lon), accuracy),
            timestamp,
        }
    }

    fn sample_accuracy(&self, rng: &mut impl Rng) -> f64 {
        let cfg = &self.config;
        if rng.r#gen::<f64>() < cfg.poor_fix_probability {
            return rng.gen_range(20.0..60.0);
        }
        let median = cfg.typical_accuracy_m.max(0.5);
        match LogNormal::new(median.ln(), 0.35) {
            Ok(dist) => dist.sample(rng).clamp(1.0, 19.5),
            Err(_) => median.min(19.5),
        }
    }
}

fn gaussian(rng: &mut impl Rng, std_dev: f64) -> f64 {
    Normal::new(0.0, std_dev)
        .map(|n| n.sample(rng))
        .unwrap_or(0.0)
}

/// Moves `(lat, lon)` by the given meters north and east.
fn offset((lat, lon): (f64, f64), north_m: f64, east_m: f64) -> (f64, f64) {
    let d_lat = (north_m / EARTH_RADIUS_M).to_degrees();
    let d_lon = (east_m / (EARTH_RADIUS_M * lat.to_radians().cos())).to_degrees();
    (lat + d_lat, lon + d_lon)
}

/// Applies bounds checking with heading reversal.
fn apply_bounds(b: &BoundingBox, lat: f64, lon: f64, heading: f64) -> (f64, f64, f64) {
    let mut new_heading = heading;

    let lat = if lat < b.min_lat {
        new_heading = std::f64::consts::PI - heading;
        b.min_lat + (b.min_lat - lat).min(0.001)
    } else if lat > b.max_lat {
        new_heading = std::f64::consts::PI - heading;
        b.max_lat - (lat - b.max_lat).min(0.001)
    } else {
        lat
    };

    let lon = if lon < b.min_lon {
        new_heading = -heading;
        b.min_lon + (b.min_lon - lon).min(0.001)
    } else if lon > b.max_lon {
        new_heading = -heading;
        b.max_lon - (lon - b.max_lon).min(0.001)
    } else {
        lon
    };

    (lat, lon, new_heading)
}
