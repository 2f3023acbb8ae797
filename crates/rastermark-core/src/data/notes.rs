//! Opaque rich-text notes payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text notes attached to a polygon feature.
///
/// The payload is carried verbatim; this crate never parses or
/// interprets its markdown structure. Rendering and editing belong to
/// the text-editor collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes(String);

impl Notes {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw markdown source
    pub fn as_markdown(&self) -> &str {
        &self.0
    }

    /// Display form used in GeoJSON properties.
    ///
    /// Lossy by contract: the result is presentation text and is not
    /// required to be reparsable as markdown.
    pub fn to_plain_text(&self) -> String {
        self.0.clone()
    }
}

impl From<&str> for Notes {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Notes {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Notes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
