//! Fix stream sources for driving a walk session.
//!
//! - [`FixGenerator`]: synthesize noisy fixes along a random walk
//! - [`GpxLoader`]: replay a recorded GPX file, and export finished tracks

mod gpx_files;
mod procedural;

pub use gpx_files::{GpxError, GpxLoader};
pub use procedural::{FixGenerator, TimedFix};
