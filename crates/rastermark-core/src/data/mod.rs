//! Annotation data model.
//!
//! Defines the geometry and feature types shared across the workspace:
//! raster-space points, the draft vertex buffer, closed polygon rings,
//! named polygon features, and their opaque notes payload.

use serde::{Deserialize, Serialize};

mod feature;
mod notes;

pub use feature::{ClosedRing, DraftVertices, PolygonFeature};
pub use notes::Notes;

/// A point in raster coordinate space.
///
/// Raster coordinates are the continuous coordinate system of the
/// underlying grid; the rendering surface converts screen pixels to
/// raster coordinates before events reach this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both coordinates are finite (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
