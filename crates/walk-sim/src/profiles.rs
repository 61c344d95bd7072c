//! Walking speed profiles.
//!
//! A profile sets how fast the simulated walker covers ground between
//! sensor callbacks.

use rand_distr::{Distribution, Normal};

/// Trait for walker performance profiles.
pub trait AthleteProfile: Send + Sync {
    /// Base speed on flat ground in meters per second.
    fn base_speed_mps(&self) -> f64;

    /// Step-to-step speed variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;
}

/// Samples a speed around the profile's base speed.
///
/// Never returns less than 0.3 m/s so a moving walker keeps moving.
pub fn sample_speed(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    let base = profile.base_speed_mps();
    let std_dev = profile.variance();
    let factor = match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng).clamp(0.6, 1.4),
        _ => 1.0,
    };
    (base * factor).max(0.3)
}

/// Recreational walker.
///
/// Typical pace ~5 km/h (1.4 m/s) on flat ground.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 1.4, // ~5 km/h
            variance: 0.1,
        }
    }
}

impl WalkerProfile {
    /// Creates a walker profile with the given base speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh / 3.6,
            ..Default::default()
        }
    }

    /// A brisk walker (~6.5 km/h).
    pub fn brisk() -> Self {
        Self::with_speed(6.5)
    }

    /// A stroll (~3.5 km/h), with more stop-and-go variance.
    pub fn stroll() -> Self {
        Self {
            base_speed: 3.5 / 3.6,
            variance: 0.2,
        }
    }
}

impl AthleteProfile for WalkerProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_profile() {
        let profile = WalkerProfile::default();
        assert!((profile.base_speed_mps() - 1.4).abs() < 0.01);
    }

    #[test]
    fn test_with_speed_converts_kmh() {
        let profile = WalkerProfile::with_speed(3.6);
        assert!((profile.base_speed_mps() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sampled_speed_stays_in_band() {
        let profile = WalkerProfile::stroll();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let speed = sample_speed(&profile, &mut rng);
            let base = profile.base_speed_mps();
            assert!(speed >= 0.3);
            assert!(speed >= base * 0.6 - 1e-9 && speed <= base * 1.4 + 1e-9);
        }
    }
}
