//! GeoJSON export integration tests

use rastermark_annotator::AnnotatorState;
use rastermark_core::Notes;

fn triangle(state: &mut AnnotatorState, label: &str, notes: &str) {
    state.on_left_click(0.0, 0.0);
    state.on_left_click(10.0, 0.0);
    state.on_left_click(10.0, 10.0);
    state.request_commit(label, Notes::new(notes)).unwrap();
}

fn square(state: &mut AnnotatorState, label: &str) {
    state.on_left_click(20.0, 20.0);
    state.on_left_click(30.0, 20.0);
    state.on_left_click(30.0, 30.0);
    state.on_left_click(20.0, 30.0);
    state.request_commit(label, Notes::default()).unwrap();
}

#[test]
fn test_serialize_all_in_insertion_order() {
    let mut state = AnnotatorState::new();
    triangle(&mut state, "A", "");
    square(&mut state, "B");

    let text = state.serialize_all().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["properties"]["label"], "A");
    assert_eq!(features[1]["properties"]["label"], "B");

    // Square ring: 4 clicks + closing point
    let ring = features[1]["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.len(), 5);
    assert_eq!(ring[0], ring[4]);
}

#[test]
fn test_serialize_one_round_trip() {
    let mut state = AnnotatorState::new();
    triangle(&mut state, "A", "crop: wheat");

    let text = state.serialize_one("A").unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["type"], "Feature");
    assert_eq!(value["geometry"]["type"], "Polygon");
    assert_eq!(value["properties"]["notes"], "crop: wheat");

    // Ring round-trips element-wise against the stored coordinates
    let stored = state.feature_ring("A").unwrap();
    let ring = value["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.len(), stored.len());
    for (pair, point) in ring.iter().zip(stored) {
        assert!((pair[0].as_f64().unwrap() - point.x).abs() < 1e-9);
        assert!((pair[1].as_f64().unwrap() - point.y).abs() < 1e-9);
    }

    assert!(state.serialize_one("missing").is_err());
}

#[test]
fn test_export_rejects_non_finite_coordinates() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(f64::INFINITY, 0.0);
    state.on_left_click(1.0, 1.0);
    state.request_commit("broken", Notes::default()).unwrap();

    let err = state.serialize_all().unwrap_err();
    assert!(err.is_export_error());
    let err = state.serialize_one("broken").unwrap_err();
    assert!(err.is_export_error());
}
