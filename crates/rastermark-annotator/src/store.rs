//! Insertion-ordered feature collection store.

use std::collections::HashMap;
use std::sync::Arc;

use rastermark_core::event_bus::{AnnotateEvent, CollectionEvent, EventBus};
use rastermark_core::{Notes, PolygonFeature, StoreError};

/// Ordered mapping from label to committed polygon feature.
///
/// Labels are unique; insertion order is preserved and is meaningful:
/// it drives both the "view polygon" selector in the collaborator UI
/// and the feature order in GeoJSON export. Every successful mutation
/// publishes the updated full collection on the attached bus.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: HashMap<String, PolygonFeature>,
    order: Vec<String>,
    bus: Option<Arc<EventBus>>,
}

impl FeatureStore {
    /// Creates an empty store with no attached event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store publishing collection events on `bus`.
    pub fn with_bus(bus: Arc<EventBus>) -> Self {
        Self {
            features: HashMap::new(),
            order: Vec::new(),
            bus: Some(bus),
        }
    }

    /// Inserts a feature under its label, appending at the end.
    ///
    /// Refuses to overwrite: an existing label fails with
    /// [`StoreError::DuplicateLabel`] and leaves the stored entry
    /// untouched.
    pub fn insert(&mut self, feature: PolygonFeature) -> Result<(), StoreError> {
        let label = feature.label().to_string();
        if self.features.contains_key(&label) {
            return Err(StoreError::DuplicateLabel { label });
        }
        self.features.insert(label.clone(), feature);
        self.order.push(label.clone());
        tracing::debug!(label = %label, count = self.order.len(), "feature inserted");
        self.publish(CollectionEvent::FeatureCommitted {
            label,
            snapshot: self.snapshot(),
        });
        Ok(())
    }

    /// Looks up a feature by label.
    pub fn get(&self, label: &str) -> Result<&PolygonFeature, StoreError> {
        self.features.get(label).ok_or_else(|| StoreError::LabelNotFound {
            label: label.to_string(),
        })
    }

    /// Removes a feature, returning it.
    pub fn remove(&mut self, label: &str) -> Result<PolygonFeature, StoreError> {
        let feature = self
            .features
            .remove(label)
            .ok_or_else(|| StoreError::LabelNotFound {
                label: label.to_string(),
            })?;
        self.order.retain(|l| l != label);
        tracing::debug!(label, count = self.order.len(), "feature removed");
        self.publish(CollectionEvent::FeatureRemoved {
            label: label.to_string(),
            snapshot: self.snapshot(),
        });
        Ok(feature)
    }

    /// Replaces the notes payload of a stored feature.
    pub fn update_notes(&mut self, label: &str, notes: Notes) -> Result<(), StoreError> {
        let feature = self
            .features
            .get_mut(label)
            .ok_or_else(|| StoreError::LabelNotFound {
                label: label.to_string(),
            })?;
        feature.set_notes(notes);
        self.publish(CollectionEvent::NotesUpdated {
            label: label.to_string(),
        });
        Ok(())
    }

    /// Iterates (label, feature) pairs in insertion order.
    ///
    /// The iterator borrows live state: iterating again after a
    /// mutation reflects the current collection, not a snapshot.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PolygonFeature)> + '_ {
        self.order
            .iter()
            .filter_map(|l| self.features.get(l).map(|f| (l.as_str(), f)))
    }

    /// Current label list, in insertion order.
    pub fn labels(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.features.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clones the full collection in insertion order.
    pub fn snapshot(&self) -> Vec<PolygonFeature> {
        self.iter().map(|(_, f)| f.clone()).collect()
    }

    fn publish(&self, event: CollectionEvent) {
        if let Some(bus) = &self.bus {
            bus.publish(AnnotateEvent::Collection(event)).ok();
        }
    }
}
