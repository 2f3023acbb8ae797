//! Annotation session facade.
//!
//! `AnnotatorState` binds the capture machine, the feature store, and
//! the export functions behind the interface a rendering surface
//! consumes: pointer events in, control requests in, label lists and
//! preview rings out.

use std::sync::Arc;

use rastermark_core::event_bus::{AnnotateEvent, EventBus, EventFilter, SubscriptionId};
use rastermark_core::{Notes, Point, PolygonFeature, Result, StatusMessage};

use crate::capture::{CaptureState, ClickCapture};
use crate::geojson;
use crate::store::FeatureStore;

/// Top-level state for one annotation session.
///
/// The rendering surface feeds pointer events in raster coordinates
/// (already converted from screen pixels), binds its buttons to the
/// `request_*` methods, and populates its "view polygon" selector from
/// `labels()` — directly or by subscribing to collection events.
pub struct AnnotatorState {
    bus: Arc<EventBus>,
    /// Click-capture state machine, sole owner of the draft buffer.
    pub capture: ClickCapture,
    /// Committed feature collection.
    pub store: FeatureStore,
}

impl AnnotatorState {
    /// Creates a session with its own event bus.
    pub fn new() -> Self {
        Self::with_bus(Arc::new(EventBus::new()))
    }

    /// Creates a session publishing on a caller-provided bus.
    pub fn with_bus(bus: Arc<EventBus>) -> Self {
        Self {
            capture: ClickCapture::with_bus(bus.clone()),
            store: FeatureStore::with_bus(bus.clone()),
            bus,
        }
    }

    /// The session event bus, for receivers and external publishers.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Subscribe to session events with a synchronous handler.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AnnotateEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(filter, handler)
    }

    /// Pointer moved over the raster.
    pub fn on_hover(&mut self, x: f64, y: f64) {
        self.capture.hover(Point::new(x, y));
    }

    /// Left click at raster coordinates: buffer one vertex.
    pub fn on_left_click(&mut self, x: f64, y: f64) {
        self.capture.click(Point::new(x, y));
    }

    /// Discard the in-progress polygon.
    pub fn request_clear(&mut self) {
        self.capture.clear();
    }

    /// Commit the in-progress polygon under `label`.
    pub fn request_commit(&mut self, label: &str, notes: Notes) -> Result<String> {
        self.capture.commit(label, notes, &mut self.store)
    }

    /// Stored labels, in insertion order.
    pub fn labels(&self) -> Vec<String> {
        self.store.labels()
    }

    /// Look up a stored feature.
    pub fn feature(&self, label: &str) -> Result<&PolygonFeature> {
        Ok(self.store.get(label)?)
    }

    /// Ring of a stored feature, for preview overlays.
    pub fn feature_ring(&self, label: &str) -> Result<&[Point]> {
        Ok(self.store.get(label)?.ring().points())
    }

    /// Replace the notes of a stored feature.
    pub fn set_notes(&mut self, label: &str, notes: Notes) -> Result<()> {
        Ok(self.store.update_notes(label, notes)?)
    }

    /// Most recent status message, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.capture.status()
    }

    /// Last observed pointer position.
    pub fn cursor(&self) -> Option<Point> {
        self.capture.cursor()
    }

    /// Current capture state.
    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    /// Export the whole collection as FeatureCollection text.
    pub fn serialize_all(&self) -> Result<String> {
        geojson::serialize_collection(&self.store)
    }

    /// Export one stored feature as Feature text.
    pub fn serialize_one(&self, label: &str) -> Result<String> {
        geojson::serialize_feature(self.store.get(label)?)
    }
}

impl Default for AnnotatorState {
    fn default() -> Self {
        Self::new()
    }
}
