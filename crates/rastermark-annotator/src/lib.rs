//! # RasterMark Annotator
//!
//! Interactive polygon annotation for raster heatmaps. This crate turns
//! a stream of pointer events into validated, named, closed polygons
//! and exports the resulting collection as GeoJSON.
//!
//! ## Core Components
//!
//! - **ClickCapture**: state machine accumulating clicked vertices and
//!   validating commits
//! - **FeatureStore**: insertion-ordered, observable label-to-feature
//!   collection
//! - **GeoJSON export**: Feature / FeatureCollection text with a single
//!   ring per polygon
//! - **AnnotatorState**: session facade consumed by a rendering surface
//!
//! ## Architecture
//!
//! ```text
//! Render/Widget Surface (external)
//!   ├── pointer events ──▶ ClickCapture ──commit──▶ FeatureStore
//!   ├── selector/preview ◀── queries ──────────────────┘
//!   └── export button ──▶ geojson::serialize_* ──▶ text
//!
//! EventBus (rastermark-core)
//!   └── capture / collection / status events to observers
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rastermark_annotator::AnnotatorState;
//! use rastermark_core::Notes;
//!
//! let mut state = AnnotatorState::new();
//! state.on_left_click(0.0, 0.0);
//! state.on_left_click(10.0, 0.0);
//! state.on_left_click(10.0, 10.0);
//! state.request_commit("field-1", Notes::new("winter wheat"))?;
//!
//! let geojson = state.serialize_all()?;
//! ```

pub mod annotator;
pub mod capture;
pub mod geojson;
pub mod store;

pub use annotator::AnnotatorState;
pub use capture::{CaptureState, ClickCapture};
pub use geojson::{
    serialize_collection, serialize_feature, GeoJsonFeature, GeoJsonFeatureCollection,
    GeoJsonGeometry, GeoJsonProperties,
};
pub use store::FeatureStore;

// Re-export the core model so downstream callers need one import path.
pub use rastermark_core::{ClosedRing, DraftVertices, Notes, Point, PolygonFeature};
