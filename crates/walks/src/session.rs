//! State of a walk that is being recorded.
//!
//! A session is a plain value owned by whoever receives sensor callbacks.
//! Each operation consumes the current state and returns the next one, so
//! fixes are applied strictly in the order the owner feeds them. Renders
//! work from [`WalkSession::snapshot`], never from a path being appended to.

use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::{
    config::WalkConfig,
    doodle::Doodle,
    ingest::{Decision, ingest_with_decision},
    metrics::WalkSummary,
    models::{Path, RawFix, Track},
    scoring::{DistanceMetric, TrackMetric},
};

#[derive(Debug, Clone)]
pub struct WalkSession {
    config: WalkConfig,
    started_at: OffsetDateTime,
    elapsed: Duration,
    path: Path,
    distance: DistanceMetric,
}

impl WalkSession {
    pub fn start(started_at: OffsetDateTime, config: WalkConfig) -> Self {
        Self {
            config,
            started_at,
            elapsed: Duration::ZERO,
            path: Path::new(),
            distance: DistanceMetric::new(),
        }
    }

    /// Offers one fix to the path, advancing the running distance when the
    /// fix is accepted.
    pub fn ingest_fix(mut self, fix: RawFix) -> Self {
        let (path, decision) = ingest_with_decision(
            std::mem::take(&mut self.path),
            fix,
            self.config.min_spacing_meters,
            self.config.max_accuracy_meters,
        );
        self.path = path;

        match decision {
            Decision::Anchored | Decision::Appended { .. } => {
                self.distance.next_point(fix.point);
            }
            Decision::LowAccuracy => {
                debug!(
                    accuracy = fix.horizontal_accuracy_meters,
                    threshold = self.config.max_accuracy_meters,
                    "Discarding low-accuracy fix"
                );
            }
            Decision::TooClose { gap_meters } => {
                debug!(
                    gap = gap_meters,
                    min_spacing = self.config.min_spacing_meters,
                    "Discarding fix too close to previous point"
                );
            }
        }

        self
    }

    /// Advances the elapsed time to `now`. Elapsed time never decreases, so
    /// a late or out-of-order tick is ignored.
    pub fn tick(mut self, now: OffsetDateTime) -> Self {
        let elapsed = now - self.started_at;
        if elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
        self
    }

    /// Takes a final tick at `ended_at` and freezes the walk.
    pub fn finish(self, ended_at: OffsetDateTime) -> Track {
        let session = self.tick(ended_at);
        let distance = session.distance.finish();
        let duration = session.elapsed.as_seconds_f64();

        info!(
            points = session.path.len(),
            distance_m = distance,
            duration_s = duration,
            "Walk finished"
        );

        Track::from_session(
            session.path,
            distance,
            session.started_at,
            ended_at,
            duration,
        )
    }

    /// Point-in-time copy of the path for rendering.
    pub fn snapshot(&self) -> Path {
        self.path.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance.finish()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_seconds_f64()
    }

    pub fn live_metrics(&self) -> WalkSummary {
        WalkSummary::new(self.distance_meters(), self.elapsed_seconds())
    }

    pub fn doodle(&self, size: f64) -> Doodle {
        Doodle::from_path(&self.snapshot(), self.config.simplify_tolerance_meters, size)
    }
}
