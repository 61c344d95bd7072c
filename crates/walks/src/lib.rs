//! Trajectory core for recorded walks.
//!
//! Raw sensor fixes are filtered into a clean [`Path`](models::Path), the
//! path's great-circle length is accumulated, and a simplified copy is laid
//! out as a doodle for display. Pace and duration labels are derived from
//! the finished [`Track`](models::Track).
//!
//! ```rust,ignore
//! use walks::prelude::*;
//!
//! let session = fixes
//!     .into_iter()
//!     .fold(WalkSession::start(started_at, WalkConfig::from_env()?), |s, fix| {
//!         s.ingest_fix(fix)
//!     });
//! let track = session.finish(ended_at);
//! let labels = WalkSummary::from_track(&track);
//! let doodle = Doodle::from_track(&track, 5.0, 120.0);
//! ```

pub mod config;
pub mod doodle;
pub mod errors;
pub mod geodesy;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod scoring;
pub mod session;
pub mod simplify;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::WalkConfig;
    pub use crate::doodle::{CanvasPoint, Doodle};
    pub use crate::errors::ConfigError;
    pub use crate::geodesy::distance;
    pub use crate::ingest::{Decision, filter_fixes, ingest};
    pub use crate::metrics::{
        Pace, WalkSummary, formatted_distance, formatted_duration, formatted_pace, pace,
    };
    pub use crate::models::{GeoPoint, Path, RawFix, Track, sort_most_recent_first};
    pub use crate::scoring::{DistanceMetric, TrackMetric, total_distance};
    pub use crate::session::WalkSession;
    pub use crate::simplify::simplify;
}
