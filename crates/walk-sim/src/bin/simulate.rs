//! Replays a walk through the trajectory core and logs the result.
//!
//! Run with:
//! ```
//! cargo run -p walk-sim --bin simulate
//! ```
//!
//! Set `WALK_SIM_GPX` to replay a recorded GPX file instead of a generated
//! walk, and `WALK_SIM_OUT` to write the finished track as GPX.

use anyhow::Context as _;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;
use walk_sim::prelude::*;
use walks::{doodle::Doodle, metrics::WalkSummary};

const DOODLE_SIZE: f64 = 220.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = WalkConfig::from_env()?;
    tracing::info!(?config, "Loaded walk config");

    let fixes = match std::env::var("WALK_SIM_GPX") {
        Ok(path) => {
            tracing::info!("Replaying {}", path);
            GpxLoader::load_file(&path).with_context(|| format!("loading {path}"))?
        }
        Err(_) => {
            let sim = SimConfig::default();
            tracing::info!(
                distance_m = sim.distance_meters,
                seed = sim.seed,
                "Generating walk"
            );
            FixGenerator::new(sim).generate(&WalkerProfile::default(), OffsetDateTime::now_utc())
        }
    };

    let track = replay(&fixes, config).context("fix stream was empty")?;
    let summary = WalkSummary::from_track(&track);
    let doodle = Doodle::from_track(&track, config.simplify_tolerance_meters, DOODLE_SIZE);

    tracing::info!("Walk {} finished", track.id());
    tracing::info!("  Fixes: {}", fixes.len());
    tracing::info!("  Accepted points: {}", track.path().len());
    tracing::info!("  Doodle points: {}", doodle.points().len());
    tracing::info!("  Distance: {}", summary.distance.as_deref().unwrap_or("--"));
    tracing::info!("  Duration: {}", summary.duration.as_deref().unwrap_or("--:--:--"));
    tracing::info!("  Pace: {}", summary.pace.as_deref().unwrap_or("--:-- /km"));

    if let Ok(out) = std::env::var("WALK_SIM_OUT") {
        GpxLoader::write_track(&out, &track, Some("Simulated walk"))
            .with_context(|| format!("writing {out}"))?;
        tracing::info!("Wrote {}", out);
    }

    Ok(())
}
