//! Error handling for RasterMark
//!
//! Provides error types for all layers of the annotation engine:
//! - Capture errors (commit validation)
//! - Store errors (label uniqueness and lookup)
//! - Export errors (GeoJSON encoding)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! error is recoverable: a failed operation leaves the draft buffer and
//! the feature collection exactly as they were.

use thiserror::Error;

/// Capture error type
///
/// Represents validation failures when committing the in-progress
/// vertex buffer into a polygon feature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Commit attempted with fewer than three buffered vertices
    #[error("Polygon requires at least 3 vertices, buffer has {count}")]
    TooFewVertices {
        /// Number of vertices currently in the buffer.
        count: usize,
    },

    /// Commit attempted with an empty (or whitespace-only) label
    #[error("Feature label must not be empty")]
    EmptyLabel,
}

/// Store error type
///
/// Represents failures of the feature collection store, which maps
/// unique labels to committed polygon features.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A feature with this label is already stored
    #[error("Feature '{label}' already exists")]
    DuplicateLabel {
        /// The label that collided with an existing entry.
        label: String,
    },

    /// No feature is stored under this label
    #[error("Feature '{label}' not found")]
    LabelNotFound {
        /// The label that was looked up.
        label: String,
    },
}

/// Export error type
///
/// Represents failures while serializing features to GeoJSON text.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A ring coordinate is NaN or infinite
    #[error("Non-finite coordinate in feature '{label}' at ring index {index}")]
    NonFiniteCoordinate {
        /// Label of the feature containing the bad coordinate.
        label: String,
        /// Position of the bad coordinate within the ring.
        index: usize,
    },

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for RasterMark
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Capture validation error
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Feature store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// GeoJSON export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a commit validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Capture(_))
    }

    /// Check if this is a duplicate-label error
    pub fn is_duplicate_label(&self) -> bool {
        matches!(self, Error::Store(StoreError::DuplicateLabel { .. }))
    }

    /// Check if this is an unknown-label error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::LabelNotFound { .. }))
    }

    /// Check if this is an export error
    pub fn is_export_error(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
