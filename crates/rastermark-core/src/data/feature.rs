//! Draft vertices, closed rings, and polygon features.
//!
//! The draft buffer and a committed ring are distinct types: a
//! `DraftVertices` is open and mutable, a `ClosedRing` can only be
//! constructed through validation that appends the closing point, so
//! `first == last` holds for every ring that exists.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Notes, Point};
use crate::error::CaptureError;

/// In-progress vertex sequence accumulated from clicks.
///
/// Owned solely by the click-capture state machine; cleared explicitly
/// or replaced by a fresh buffer after a successful commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftVertices {
    points: Vec<Point>,
}

impl DraftVertices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clicked vertex. Always succeeds.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Close the draft into a ring without consuming the buffer.
    ///
    /// Fails with [`CaptureError::TooFewVertices`] when fewer than
    /// three vertices have been collected.
    pub fn close(&self) -> Result<ClosedRing, CaptureError> {
        ClosedRing::from_vertices(self.points.clone())
    }
}

/// Closed polygon ring.
///
/// The first and last points coincide by construction. Zero-area and
/// self-intersecting rings are accepted; three distinct clicks are the
/// only geometric requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClosedRing {
    points: Vec<Point>,
}

// A ring holds at least four points, so there is no empty state for
// `is_empty` to report.
#[allow(clippy::len_without_is_empty)]
impl ClosedRing {
    /// Build a ring from an open vertex sequence.
    ///
    /// Appends a copy of the first vertex as the closing point, so the
    /// resulting ring is one longer than the input.
    pub fn from_vertices(mut vertices: Vec<Point>) -> Result<Self, CaptureError> {
        if vertices.len() < 3 {
            return Err(CaptureError::TooFewVertices {
                count: vertices.len(),
            });
        }
        let first = vertices[0];
        vertices.push(first);
        Ok(Self { points: vertices })
    }

    /// All ring points, closing point included
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of ring points, closing point included
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'de> Deserialize<'de> for ClosedRing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let points = Vec::<Point>::deserialize(deserializer)?;
        if points.len() < 4 {
            return Err(D::Error::custom(format!(
                "closed ring requires at least 4 points, got {}",
                points.len()
            )));
        }
        if points[0] != points[points.len() - 1] {
            return Err(D::Error::custom("ring is not closed (first != last)"));
        }
        Ok(Self { points })
    }
}

impl<'a> IntoIterator for &'a ClosedRing {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A named, annotated polygon.
///
/// Created only by a successful commit. The label and ring are fixed
/// for the lifetime of the feature; only the notes may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonFeature {
    label: String,
    ring: ClosedRing,
    notes: Notes,
}

impl PolygonFeature {
    pub fn new(label: impl Into<String>, ring: ClosedRing, notes: Notes) -> Self {
        Self {
            label: label.into(),
            ring,
            notes,
        }
    }

    /// Identity key within the owning collection
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ring(&self) -> &ClosedRing {
        &self.ring
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    /// Replace the notes payload. The only permitted mutation.
    pub fn set_notes(&mut self, notes: Notes) {
        self.notes = notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_close_appends_first_point() {
        let ring = ClosedRing::from_vertices(triangle()).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.points()[0], ring.points()[3]);
    }

    #[test]
    fn test_too_few_vertices() {
        let err = ClosedRing::from_vertices(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .unwrap_err();
        assert_eq!(err, CaptureError::TooFewVertices { count: 2 });
    }

    #[test]
    fn test_draft_close_keeps_buffer() {
        let mut draft = DraftVertices::new();
        for p in triangle() {
            draft.push(p);
        }
        let ring = draft.close().unwrap();
        assert_eq!(ring.len(), 4);
        // Closing is non-destructive; the draft still holds the clicks.
        assert_eq!(draft.len(), 3);
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = DraftVertices::new();
        draft.push(Point::new(1.0, 2.0));
        draft.clear();
        assert!(draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_ring_deserialize_validates_closure() {
        let open = "[{\"x\":0.0,\"y\":0.0},{\"x\":1.0,\"y\":0.0},{\"x\":1.0,\"y\":1.0},{\"x\":2.0,\"y\":2.0}]";
        assert!(serde_json::from_str::<ClosedRing>(open).is_err());

        let closed = "[{\"x\":0.0,\"y\":0.0},{\"x\":1.0,\"y\":0.0},{\"x\":1.0,\"y\":1.0},{\"x\":0.0,\"y\":0.0}]";
        let ring: ClosedRing = serde_json::from_str(closed).unwrap();
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn test_feature_notes_mutation() {
        let ring = ClosedRing::from_vertices(triangle()).unwrap();
        let mut feature = PolygonFeature::new("A", ring, Notes::default());
        assert!(feature.notes().is_empty());
        feature.set_notes(Notes::new("wheat field"));
        assert_eq!(feature.notes().as_markdown(), "wheat field");
        assert_eq!(feature.label(), "A");
    }
}
