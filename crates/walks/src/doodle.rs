//! Layout of a simplified walk inside a square canvas.
//!
//! Coordinates are scaled in raw degrees without correcting longitude for
//! latitude; the doodle is a sketch, not a map.

use geo::{BoundingRect, Coord, LineString};
use serde::Serialize;

use crate::{
    models::{GeoPoint, Track},
    simplify::simplify,
};

/// A position on the canvas, origin at the top-left, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doodle {
    size: f64,
    points: Vec<CanvasPoint>,
}

impl Doodle {
    /// Simplifies `path` with `tolerance_meters` and fits it, centered and
    /// aspect-preserving, into a `size` x `size` canvas with north up.
    pub fn from_path(path: &[GeoPoint], tolerance_meters: f64, size: f64) -> Self {
        let simplified = simplify(path, tolerance_meters);
        let line: LineString<f64> = simplified
            .iter()
            .map(|p| Coord {
                x: p.longitude,
                y: p.latitude,
            })
            .collect();

        let Some(rect) = line.bounding_rect() else {
            return Self {
                size,
                points: Vec::new(),
            };
        };

        let extent = rect.width().max(rect.height());
        let center = size / 2.0;
        let points = if extent > 0.0 {
            let scale = size / extent;
            let pad_x = (size - rect.width() * scale) / 2.0;
            let pad_y = (size - rect.height() * scale) / 2.0;
            line.coords()
                .map(|c| CanvasPoint {
                    x: (c.x - rect.min().x) * scale + pad_x,
                    y: size - ((c.y - rect.min().y) * scale + pad_y),
                })
                .collect()
        } else {
            line.coords()
                .map(|_| CanvasPoint {
                    x: center,
                    y: center,
                })
                .collect()
        };

        Self { size, points }
    }

    pub fn from_track(track: &Track, tolerance_meters: f64, size: f64) -> Self {
        Self::from_path(track.path(), tolerance_meters, size)
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn points(&self) -> &[CanvasPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start_marker(&self) -> Option<CanvasPoint> {
        self.points.first().copied()
    }

    pub fn end_marker(&self) -> Option<CanvasPoint> {
        self.points.last().copied()
    }
}
