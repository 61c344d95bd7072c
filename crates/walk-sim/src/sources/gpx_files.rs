//! GPX import of recorded fix streams and export of finished tracks.

use std::path::Path;

use gpx::{Gpx, GpxVersion, Metadata, Track as GpxTrack, TrackSegment, Waypoint, read};
use thiserror::Error;
use time::OffsetDateTime;
use walks::models::{GeoPoint, RawFix, Track};

use super::TimedFix;

/// Meters of horizontal error per unit of HDOP.
pub const HDOP_TO_METERS: f64 = 5.0;

/// Accuracy assumed for waypoints that carry no HDOP.
pub const DEFAULT_ACCURACY_M: f64 = 5.0;

#[derive(Debug, Error)]
pub enum GpxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("GPX parse error: {0}")]
    Parse(#[from] gpx::errors::GpxError),
    #[error("No tracks found in GPX file")]
    NoTracks,
    #[error("No track points found")]
    NoPoints,
    #[error("Track point {index} has no timestamp")]
    MissingTimestamp { index: usize },
}

/// Reads and writes walks as GPX.
pub struct GpxLoader;

impl GpxLoader {
    /// Loads a recorded fix stream from a GPX file.
    ///
    /// All tracks and segments are flattened in file order.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<TimedFix>, GpxError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let gpx: Gpx = read(reader)?;

        Self::extract_fixes(&gpx)
    }

    /// Loads a recorded fix stream from GPX data in memory.
    pub fn load_bytes(data: &[u8]) -> Result<Vec<TimedFix>, GpxError> {
        let reader = std::io::Cursor::new(data);
        let gpx: Gpx = read(reader)?;

        Self::extract_fixes(&gpx)
    }

    fn extract_fixes(gpx: &Gpx) -> Result<Vec<TimedFix>, GpxError> {
        if gpx.tracks.is_empty() {
            return Err(GpxError::NoTracks);
        }

        let mut fixes = Vec::new();

        for track in &gpx.tracks {
            for segment in &track.segments {
                for waypoint in &segment.points {
                    let timestamp = waypoint
                        .time
                        .map(OffsetDateTime::from)
                        .ok_or(GpxError::MissingTimestamp { index: fixes.len() })?;
                    let accuracy = waypoint
                        .hdop
                        .map_or(DEFAULT_ACCURACY_M, |hdop| hdop * HDOP_TO_METERS);

                    fixes.push(TimedFix {
                        fix: RawFix::new(GeoPoint::from(waypoint.point()), accuracy),
                        timestamp,
                    });
                }
            }
        }

        if fixes.is_empty() {
            return Err(GpxError::NoPoints);
        }

        Ok(fixes)
    }

    /// Builds the GPX document for a finished track.
    ///
    /// Track points carry positions only; the walk's start time goes into the
    /// metadata.
    pub fn track_to_gpx(track: &Track, name: Option<&str>) -> Gpx {
        let waypoints: Vec<Waypoint> = track
            .path()
            .iter()
            .map(|p| Waypoint::new((*p).into()))
            .collect();

        let mut gpx_track = GpxTrack::new();
        gpx_track.name = name.map(String::from);
        gpx_track.segments = vec![TrackSegment { points: waypoints }];

        Gpx {
            version: GpxVersion::Gpx11,
            creator: Some("walk-sim".to_string()),
            metadata: Some(Metadata {
                time: Some(track.started_at().into()),
                ..Default::default()
            }),
            tracks: vec![gpx_track],
            ..Default::default()
        }
    }

    /// Writes a finished track to a GPX file.
    pub fn write_track(
        path: impl AsRef<Path>,
        track: &Track,
        name: Option<&str>,
    ) -> Result<(), GpxError> {
        let gpx = Self::track_to_gpx(track, name);
        let file = std::fs::File::create(path)?;
        gpx::write(&gpx, file)?;

        Ok(())
    }
}
