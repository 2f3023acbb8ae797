//! Click-capture state machine for interactive polygon drawing.
//!
//! Pointer events arrive in raster coordinates from the rendering
//! surface. Clicks accumulate in a draft vertex buffer; a commit
//! validates the buffer and the label, closes the ring, and inserts
//! the finished feature into the collection store. Every transition
//! completes synchronously; a failed commit leaves the buffer and the
//! store exactly as they were so the user can correct and retry.

use std::sync::Arc;

use rastermark_core::event_bus::{AnnotateEvent, CaptureEvent, EventBus, StatusEvent};
use rastermark_core::{
    CaptureError, DraftVertices, Error, Notes, Point, PolygonFeature, StatusMessage, StoreError,
};

use crate::store::FeatureStore;

/// Capture state, derived from the draft buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Buffer empty, no polygon in progress.
    Idle,
    /// At least one vertex buffered.
    Drawing,
}

/// Interactive polygon capture.
#[derive(Debug, Default)]
pub struct ClickCapture {
    draft: DraftVertices,
    cursor: Option<Point>,
    status: Option<StatusMessage>,
    bus: Option<Arc<EventBus>>,
}

impl ClickCapture {
    /// Creates a capture machine with no attached event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a capture machine publishing events on `bus`.
    pub fn with_bus(bus: Arc<EventBus>) -> Self {
        Self {
            bus: Some(bus),
            ..Self::default()
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> CaptureState {
        if self.draft.is_empty() {
            CaptureState::Idle
        } else {
            CaptureState::Drawing
        }
    }

    /// Last observed pointer position, if any.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// The in-progress vertex buffer.
    pub fn draft(&self) -> &DraftVertices {
        &self.draft
    }

    /// Number of buffered vertices.
    pub fn vertex_count(&self) -> usize {
        self.draft.len()
    }

    /// Most recent status message, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Records the pointer position. Never fails, never touches the
    /// buffer.
    pub fn hover(&mut self, point: Point) {
        self.cursor = Some(point);
        self.publish(AnnotateEvent::Capture(CaptureEvent::CursorMoved {
            x: point.x,
            y: point.y,
        }));
    }

    /// Appends a vertex to the draft buffer. Always succeeds.
    pub fn click(&mut self, point: Point) {
        self.draft.push(point);
        tracing::debug!(
            x = point.x,
            y = point.y,
            count = self.draft.len(),
            "vertex added"
        );
        self.publish(AnnotateEvent::Capture(CaptureEvent::VertexAdded {
            point,
            count: self.draft.len(),
        }));
    }

    /// Empties the draft buffer and the status line. Idempotent.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.status = None;
        self.publish(AnnotateEvent::Capture(CaptureEvent::BufferCleared));
        self.publish(AnnotateEvent::Status(StatusEvent::Cleared));
    }

    /// Commits the draft buffer as a named polygon feature.
    ///
    /// Preconditions: a non-empty label (after trimming), no stored
    /// feature under that label, and more than two buffered vertices.
    /// The label is validated first: a duplicate label fails with
    /// [`StoreError::DuplicateLabel`] no matter how many vertices are
    /// buffered. On success the ring is closed, the feature inserted,
    /// the buffer replaced with a fresh one, and the committed label
    /// returned. On any failure nothing is mutated: the buffer keeps
    /// its vertices and the store keeps its entries.
    pub fn commit(
        &mut self,
        label: &str,
        notes: Notes,
        store: &mut FeatureStore,
    ) -> Result<String, Error> {
        let label = label.trim();
        if label.is_empty() {
            self.set_status(StatusMessage::warning("Feature label must not be empty"));
            return Err(CaptureError::EmptyLabel.into());
        }

        // Duplicate entry is normally rejected by label-input validation
        // upstream; refuse here as well rather than overwrite.
        if store.contains(label) {
            self.set_status(StatusMessage::error(format!(
                "Feature '{}' already exists",
                label
            )));
            return Err(StoreError::DuplicateLabel {
                label: label.to_string(),
            }
            .into());
        }

        let count = self.draft.len();
        if count <= 2 {
            self.set_status(StatusMessage::warning(format!(
                "Polygon requires at least 3 vertices, buffer has {}",
                count
            )));
            return Err(CaptureError::TooFewVertices { count }.into());
        }

        let ring = self.draft.close()?;
        store.insert(PolygonFeature::new(label, ring, notes))?;

        self.draft = DraftVertices::new();
        self.set_status(StatusMessage::info(format!(
            "Committed polygon '{}' ({} vertices)",
            label, count
        )));
        tracing::info!(label, vertices = count, "polygon committed");
        Ok(label.to_string())
    }

    fn set_status(&mut self, message: StatusMessage) {
        self.publish(AnnotateEvent::Status(StatusEvent::Updated {
            message: message.clone(),
        }));
        self.status = Some(message);
    }

    fn publish(&self, event: AnnotateEvent) {
        if let Some(bus) = &self.bus {
            bus.publish(event).ok();
        }
    }
}
