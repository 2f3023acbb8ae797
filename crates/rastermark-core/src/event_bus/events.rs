//! Event type definitions for the annotation event bus.
//!
//! Events are organized by category and designed to be cloneable and
//! serializable for logging/replay. Collection events carry the full
//! updated snapshot, not a delta, so a subscriber never has to replay
//! history to know the current state.

use serde::{Deserialize, Serialize};

use crate::data::{Point, PolygonFeature};
use crate::status::StatusMessage;

/// Root event enum for all annotation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnnotateEvent {
    /// Pointer and draft-buffer activity
    Capture(CaptureEvent),
    /// Feature collection mutations
    Collection(CollectionEvent),
    /// Status message changes
    Status(StatusEvent),
}

impl AnnotateEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AnnotateEvent::Capture(_) => EventCategory::Capture,
            AnnotateEvent::Collection(_) => EventCategory::Collection,
            AnnotateEvent::Status(_) => EventCategory::Status,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AnnotateEvent::Capture(e) => e.description(),
            AnnotateEvent::Collection(e) => e.description(),
            AnnotateEvent::Status(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Pointer and draft-buffer events.
    Capture,
    /// Feature collection events.
    Collection,
    /// Status message events.
    Status,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Capture => write!(f, "Capture"),
            EventCategory::Collection => write!(f, "Collection"),
            EventCategory::Status => write!(f, "Status"),
        }
    }
}

/// Pointer and draft-buffer events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CaptureEvent {
    /// Pointer moved over the raster.
    CursorMoved {
        /// Raster-space x coordinate.
        x: f64,
        /// Raster-space y coordinate.
        y: f64,
    },
    /// A vertex was appended to the draft buffer.
    VertexAdded {
        /// The clicked point.
        point: Point,
        /// Buffer length after the click.
        count: usize,
    },
    /// The draft buffer was emptied.
    BufferCleared,
}

impl CaptureEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CaptureEvent::CursorMoved { x, y } => format!("Cursor at ({:.3}, {:.3})", x, y),
            CaptureEvent::VertexAdded { count, .. } => {
                format!("Vertex added, buffer has {}", count)
            }
            CaptureEvent::BufferCleared => "Draft buffer cleared".to_string(),
        }
    }
}

/// Feature collection events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CollectionEvent {
    /// A polygon feature was committed to the collection.
    FeatureCommitted {
        /// Label of the new feature.
        label: String,
        /// Updated full collection, in insertion order.
        snapshot: Vec<PolygonFeature>,
    },
    /// A feature was removed from the collection.
    FeatureRemoved {
        /// Label of the removed feature.
        label: String,
        /// Updated full collection, in insertion order.
        snapshot: Vec<PolygonFeature>,
    },
    /// A feature's notes payload was replaced.
    NotesUpdated {
        /// Label of the edited feature.
        label: String,
    },
}

impl CollectionEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CollectionEvent::FeatureCommitted { label, snapshot } => {
                format!("Feature '{}' committed ({} total)", label, snapshot.len())
            }
            CollectionEvent::FeatureRemoved { label, snapshot } => {
                format!("Feature '{}' removed ({} remain)", label, snapshot.len())
            }
            CollectionEvent::NotesUpdated { label } => {
                format!("Notes updated for '{}'", label)
            }
        }
    }
}

/// Status message events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StatusEvent {
    /// The status line changed.
    Updated {
        /// The new status message.
        message: StatusMessage,
    },
    /// The status line was cleared.
    Cleared,
}

impl StatusEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            StatusEvent::Updated { message } => format!("Status: {}", message),
            StatusEvent::Cleared => "Status cleared".to_string(),
        }
    }
}
