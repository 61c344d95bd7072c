//! Filtering of raw sensor fixes into a clean path.

use crate::{
    geodesy::distance,
    models::{Path, RawFix},
};

/// Fixes whose accuracy radius is at or above this are dropped.
pub const DEFAULT_MAX_ACCURACY_M: f64 = 20.0;

/// Consecutive accepted points are at least this far apart.
pub const DEFAULT_MIN_SPACING_M: f64 = 3.0;

/// Outcome of offering one fix to a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// The fix became the first point of an empty path.
    Anchored,
    /// The fix was appended; carries the distance from the previous point.
    Appended { step_meters: f64 },
    /// Accuracy radius too large.
    LowAccuracy,
    /// Too close to the last accepted point; carries the measured gap.
    TooClose { gap_meters: f64 },
}

impl Decision {
    pub fn accepted(&self) -> bool {
        matches!(self, Decision::Anchored | Decision::Appended { .. })
    }
}

/// Decides what to do with `fix` given the current path, without touching it.
pub fn classify(
    current: &Path,
    fix: &RawFix,
    min_spacing_meters: f64,
    max_accuracy_meters: f64,
) -> Decision {
    let accuracy = fix.horizontal_accuracy_meters;
    if accuracy.is_nan() || accuracy >= max_accuracy_meters {
        return Decision::LowAccuracy;
    }

    match current.last() {
        None => Decision::Anchored,
        Some(&last) => {
            let gap = distance(last, fix.point);
            if gap >= min_spacing_meters {
                Decision::Appended { step_meters: gap }
            } else {
                Decision::TooClose { gap_meters: gap }
            }
        }
    }
}

/// Offers `fix` to `current` and returns the resulting path.
///
/// Low-accuracy fixes and fixes closer than `min_spacing_meters` to the last
/// accepted point are dropped. The first usable fix is always kept.
pub fn ingest(
    current: Path,
    fix: RawFix,
    min_spacing_meters: f64,
    max_accuracy_meters: f64,
) -> Path {
    ingest_with_decision(current, fix, min_spacing_meters, max_accuracy_meters).0
}

/// Like [`ingest`], also reporting why the fix was kept or dropped.
pub fn ingest_with_decision(
    mut current: Path,
    fix: RawFix,
    min_spacing_meters: f64,
    max_accuracy_meters: f64,
) -> (Path, Decision) {
    let decision = classify(&current, &fix, min_spacing_meters, max_accuracy_meters);
    if decision.accepted() {
        current.push(fix.point);
    }
    (current, decision)
}

/// Runs a whole fix stream through [`ingest`] in arrival order.
pub fn filter_fixes<I>(fixes: I, min_spacing_meters: f64, max_accuracy_meters: f64) -> Path
where
    I: IntoIterator<Item = RawFix>,
{
    fixes.into_iter().fold(Path::new(), |path, fix| {
        ingest(path, fix, min_spacing_meters, max_accuracy_meters)
    })
}
