//! # RasterMark Core
//!
//! Core types and utilities for RasterMark.
//! Provides the annotation data model (points, rings, polygon features),
//! error types, the annotation event bus, and the raster value remap
//! library used for heatmap display scaling.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod remap;
pub mod status;

pub use data::{ClosedRing, DraftVertices, Notes, Point, PolygonFeature};

pub use error::{CaptureError, Error, ExportError, Result, StoreError};

// Re-export event bus for convenience
pub use event_bus::{
    AnnotateEvent, CaptureEvent, CollectionEvent, EventBus, EventBusConfig, EventBusError,
    EventCategory, EventFilter, StatusEvent, SubscriptionId,
};

pub use remap::{pseudolog10, symlog10, RemapFunction};

pub use status::{MessageLevel, StatusMessage};
