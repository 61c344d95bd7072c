//! Drives a walk session from a timed fix stream.

use tracing::debug;
use walks::{config::WalkConfig, models::Track, session::WalkSession};

use crate::sources::TimedFix;

/// Feeds `fixes` into a fresh session in arrival order, ticking the clock
/// to each fix's timestamp, and finishes at the last one.
///
/// The session starts at the first fix's timestamp. An empty stream yields
/// no track.
pub fn replay(fixes: &[TimedFix], config: WalkConfig) -> Option<Track> {
    let first = fixes.first()?;
    let last = fixes.last()?;

    let session = fixes
        .iter()
        .fold(WalkSession::start(first.timestamp, config), |session, timed| {
            session.tick(timed.timestamp).ingest_fix(timed.fix)
        });

    debug!(
        fixes = fixes.len(),
        accepted = session.path().len(),
        "Replayed fix stream"
    );

    Some(session.finish(last.timestamp))
}
