//! Display-oriented values derived from a walk's distance and duration.
//!
//! Anything that cannot be computed (no distance, no time) is `None`; a zero
//! or negative number is never returned in its place.

use serde::Serialize;

use crate::models::Track;

/// Walking pace in minutes per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pace {
    seconds_per_km: f64,
}

impl Pace {
    pub fn seconds_per_km(&self) -> f64 {
        self.seconds_per_km
    }

    pub fn minutes_per_km(&self) -> f64 {
        self.seconds_per_km / 60.0
    }

    /// Whole minutes of the per-kilometer time.
    pub fn minutes(&self) -> u64 {
        self.total_seconds() / 60
    }

    /// Remaining whole seconds of the per-kilometer time, `0..60`.
    pub fn seconds(&self) -> u64 {
        self.total_seconds() % 60
    }

    fn total_seconds(&self) -> u64 {
        // Truncates, like the duration formatting.
        self.seconds_per_km.trunc() as u64
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Pace for covering `distance_meters` in `duration_seconds`.
pub fn pace(distance_meters: f64, duration_seconds: f64) -> Option<Pace> {
    if !is_positive(distance_meters) || !is_positive(duration_seconds) {
        return None;
    }
    // A single division, so whole-second paces stay exact.
    let seconds_per_km = duration_seconds * 1000.0 / distance_meters;
    Some(Pace { seconds_per_km })
}

/// `"MM:SS /km"`.
pub fn formatted_pace(distance_meters: f64, duration_seconds: f64) -> Option<String> {
    pace(distance_meters, duration_seconds)
        .map(|p| format!("{:02}:{:02} /km", p.minutes(), p.seconds()))
}

/// `"HH:MM:SS"` from the whole-second part of `duration_seconds`.
pub fn formatted_duration(duration_seconds: f64) -> Option<String> {
    if !is_positive(duration_seconds) {
        return None;
    }
    let total = duration_seconds.trunc() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    Some(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}

/// `"1.23 km"`.
pub fn formatted_distance(distance_meters: f64) -> Option<String> {
    if !is_positive(distance_meters) {
        return None;
    }
    Some(format!("{:.2} km", distance_meters / 1000.0))
}

/// Labels shown next to a walk's doodle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkSummary {
    pub pace: Option<String>,
    pub duration: Option<String>,
    pub distance: Option<String>,
}

impl WalkSummary {
    pub fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            pace: formatted_pace(distance_meters, duration_seconds),
            duration: formatted_duration(duration_seconds),
            distance: formatted_distance(distance_meters),
        }
    }

    pub fn from_track(track: &Track) -> Self {
        Self::new(track.total_distance_meters(), track.duration_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_undefined_without_distance_or_time() {
        assert_eq!(pace(0.0, 100.0), None);
        assert_eq!(pace(100.0, 0.0), None);
        assert_eq!(pace(-5.0, 100.0), None);
        assert_eq!(pace(f64::NAN, 100.0), None);
    }

    #[test]
    fn test_ten_minute_kilometer() {
        let p = pace(1000.0, 600.0).unwrap();
        assert_eq!(p.minutes_per_km(), 10.0);
        assert_eq!(p.minutes(), 10);
        assert_eq!(p.seconds(), 0);
    }

    #[test]
    fn test_pace_decomposition_truncates() {
        // 2.5 km in 31:40 -> 12.6666 min/km -> 12:40
        let p = pace(2500.0, 1900.0).unwrap();
        assert_eq!((p.minutes(), p.seconds()), (12, 40));
        assert_eq!(formatted_pace(2500.0, 1900.0).as_deref(), Some("12:40 /km"));
    }

    #[test]
    fn test_whole_second_paces_not_truncated_low() {
        assert_eq!(formatted_pace(1100.0, 396.0).as_deref(), Some("06:00 /km"));
        assert_eq!(formatted_pace(4900.0, 3528.0).as_deref(), Some("12:00 /km"));
        assert_eq!(formatted_pace(2100.0, 1134.0).as_deref(), Some("09:00 /km"));

        for distance in [700u32, 1100, 1300, 2100, 3300, 4900] {
            for seconds_per_km in [240u32, 300, 360, 420, 600, 720] {
                let duration = seconds_per_km * distance / 1000;
                let p = pace(f64::from(distance), f64::from(duration)).unwrap();
                assert_eq!(
                    p.minutes() * 60 + p.seconds(),
                    u64::from(seconds_per_km),
                    "{distance} m in {duration} s"
                );
            }
        }
    }

    #[test]
    fn test_formatted_duration() {
        assert_eq!(formatted_duration(3725.0).as_deref(), Some("01:02:05"));
        assert_eq!(formatted_duration(59.999).as_deref(), Some("00:00:59"));
        assert_eq!(formatted_duration(0.0), None);
        assert_eq!(formatted_duration(-1.0), None);
    }

    #[test]
    fn test_formatted_duration_past_a_day() {
        assert_eq!(formatted_duration(100.0 * 3600.0).as_deref(), Some("100:00:00"));
    }

    #[test]
    fn test_formatted_distance() {
        assert_eq!(formatted_distance(1234.0).as_deref(), Some("1.23 km"));
        assert_eq!(formatted_distance(0.0), None);
    }

    #[test]
    fn test_summary_for_empty_walk() {
        let summary = WalkSummary::new(0.0, 0.0);
        assert_eq!(summary.pace, None);
        assert_eq!(summary.duration, None);
        assert_eq!(summary.distance, None);
    }
}
