use std::ops::Deref;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A geographic position in decimal degrees.
///
/// No range validation happens here; out-of-range values flow through the
/// distance math unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(p: geo::Point<f64>) -> Self {
        Self::new(p.y(), p.x())
    }
}

/// One position sample reported by the location sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawFix {
    pub point: GeoPoint,
    /// Radius of the sensor's confidence circle in meters.
    pub horizontal_accuracy_meters: f64,
}

impl RawFix {
    pub const fn new(point: GeoPoint, horizontal_accuracy_meters: f64) -> Self {
        Self {
            point,
            horizontal_accuracy_meters,
        }
    }
}

/// Ordered sequence of accepted points, oldest first.
///
/// Spacing between neighbours is maintained by [`crate::ingest::ingest`];
/// a `Path` built any other way (e.g. a simplified render path) carries no
/// spacing guarantee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<GeoPoint>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub(crate) fn push(&mut self, point: GeoPoint) {
        self.0.push(point);
    }

    pub fn into_inner(self) -> Vec<GeoPoint> {
        self.0
    }
}

impl Deref for Path {
    type Target = [GeoPoint];

    fn deref(&self) -> &[GeoPoint] {
        &self.0
    }
}

impl From<Vec<GeoPoint>> for Path {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

impl FromIterator<GeoPoint> for Path {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A finished walk, handed to persistence once and never mutated again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    id: Uuid,
    started_at: OffsetDateTime,
    ended_at: OffsetDateTime,
    path: Path,
    total_distance_meters: f64,
    duration_seconds: f64,
}

impl Track {
    /// Builds a track from a finished path. Distance is always derived from
    /// `path`, never supplied by the caller.
    pub fn new(path: Path, started_at: OffsetDateTime, ended_at: OffsetDateTime) -> Self {
        let total_distance_meters = crate::scoring::total_distance(&path);
        let duration_seconds = (ended_at - started_at).as_seconds_f64().max(0.0);
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at,
            path,
            total_distance_meters,
            duration_seconds,
        }
    }

    /// Used by the session, which already carries a running total for `path`.
    pub(crate) fn from_session(
        path: Path,
        total_distance_meters: f64,
        started_at: OffsetDateTime,
        ended_at: OffsetDateTime,
        duration_seconds: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at,
            path,
            total_distance_meters,
            duration_seconds,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn ended_at(&self) -> OffsetDateTime {
        self.ended_at
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.total_distance_meters
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }
}

/// Orders a gallery of tracks newest first by end time.
pub fn sort_most_recent_first(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn test_geo_point_conversion_swaps_axes() {
        let p = GeoPoint::new(40.015, -105.27);
        let g: geo::Point<f64> = p.into();
        assert_eq!(g.x(), -105.27);
        assert_eq!(g.y(), 40.015);
        assert_eq!(GeoPoint::from(g), p);
    }

    #[test]
    fn test_track_derives_distance_and_duration() {
        let start = OffsetDateTime::UNIX_EPOCH;
        let path = Path::from(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)]);
        let track = Track::new(path, start, start + Duration::seconds(90));

        assert!((track.total_distance_meters() - 111_194.9).abs() < 1.0);
        assert_eq!(track.duration_seconds(), 90.0);
    }

    #[test]
    fn test_track_duration_never_negative() {
        let start = OffsetDateTime::UNIX_EPOCH;
        let track = Track::new(Path::new(), start, start - Duration::seconds(5));
        assert_eq!(track.duration_seconds(), 0.0);
        assert_eq!(track.total_distance_meters(), 0.0);
    }

    #[test]
    fn test_path_serializes_as_coordinate_objects() {
        let path = Path::from(vec![GeoPoint::new(1.5, 2.5)]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"latitude":1.5,"longitude":2.5}]"#);
    }

    #[test]
    fn test_sort_most_recent_first() {
        let t0 = OffsetDateTime::UNIX_EPOCH;
        let mut tracks = vec![
            Track::new(Path::new(), t0, t0 + Duration::minutes(10)),
            Track::new(Path::new(), t0, t0 + Duration::minutes(30)),
            Track::new(Path::new(), t0, t0 + Duration::minutes(20)),
        ];
        sort_most_recent_first(&mut tracks);

        let ends: Vec<i64> = tracks
            .iter()
            .map(|t| (t.ended_at() - t0).whole_minutes())
            .collect();
        assert_eq!(ends, vec![30, 20, 10]);
    }
}
