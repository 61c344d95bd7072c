//! Simulated and recorded fix streams for the walks core.
//!
//! This crate produces realistic noisy sensor input (jittered positions,
//! varying accuracy, pauses) and replays it through a
//! [`WalkSession`](walks::session::WalkSession), so filtering,
//! distance accounting and doodle layout can be exercised end to end.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use walk_sim::prelude::*;
//!
//! let fixes = FixGenerator::new(SimConfig::default())
//!     .with_distance(3_000.0)
//!     .generate(&WalkerProfile::brisk(), OffsetDateTime::now_utc());
//! let track = replay(&fixes, WalkConfig::default());
//! ```

pub mod config;
pub mod profiles;
pub mod replay;
pub mod sources;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region, SimConfig};
    pub use crate::profiles::{AthleteProfile, WalkerProfile, sample_speed};
    pub use crate::replay::replay;
    pub use crate::sources::{FixGenerator, GpxError, GpxLoader, TimedFix};
    pub use walks::config::WalkConfig;
}
