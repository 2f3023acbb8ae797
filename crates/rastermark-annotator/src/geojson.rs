//! GeoJSON export for committed polygon features.
//!
//! Produces Feature / FeatureCollection text with exactly one polygon
//! ring per feature and `label` / `notes` properties. DTO field order
//! fixes the emitted key order: `type`, `geometry`, `properties`.
//! Export fails if any ring coordinate is NaN or infinite.

use serde::{Deserialize, Serialize};

use rastermark_core::{Error, ExportError, PolygonFeature};

use crate::store::FeatureStore;

/// One exported feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: GeoJsonGeometry,
    pub properties: GeoJsonProperties,
}

/// Polygon geometry with a single ring (no holes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Feature properties payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonProperties {
    pub label: String,
    pub notes: String,
}

/// Top-level export unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoJsonFeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<GeoJsonFeature>,
}

/// Convert a stored feature to its GeoJSON object form
fn feature_dto(feature: &PolygonFeature) -> Result<GeoJsonFeature, ExportError> {
    let mut ring = Vec::with_capacity(feature.ring().len());
    for (index, point) in feature.ring().iter().enumerate() {
        if !point.is_finite() {
            return Err(ExportError::NonFiniteCoordinate {
                label: feature.label().to_string(),
                index,
            });
        }
        ring.push([point.x, point.y]);
    }

    Ok(GeoJsonFeature {
        feature_type: "Feature".to_string(),
        geometry: GeoJsonGeometry {
            geometry_type: "Polygon".to_string(),
            coordinates: vec![ring],
        },
        properties: GeoJsonProperties {
            label: feature.label().to_string(),
            notes: feature.notes().to_plain_text(),
        },
    })
}

/// Serialize a single feature to GeoJSON text
pub fn serialize_feature(feature: &PolygonFeature) -> Result<String, Error> {
    let dto = feature_dto(feature)?;
    let text = serde_json::to_string_pretty(&dto).map_err(ExportError::from)?;
    Ok(text)
}

/// Serialize the whole collection to FeatureCollection text, in store
/// order
pub fn serialize_collection(store: &FeatureStore) -> Result<String, Error> {
    let features = store
        .iter()
        .map(|(_, f)| feature_dto(f))
        .collect::<Result<Vec<_>, _>>()?;
    let dto = GeoJsonFeatureCollection {
        collection_type: "FeatureCollection".to_string(),
        features,
    };
    let text = serde_json::to_string_pretty(&dto).map_err(ExportError::from)?;
    Ok(text)
}
