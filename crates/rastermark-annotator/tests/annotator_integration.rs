//! Annotation session integration tests

use std::sync::{Arc, Mutex};

use rastermark_annotator::{AnnotatorState, CaptureState};
use rastermark_core::event_bus::{AnnotateEvent, CollectionEvent, EventCategory, EventFilter};
use rastermark_core::{MessageLevel, Notes, Point};

#[test]
fn test_complete_annotation_workflow() {
    let mut state = AnnotatorState::new();

    // Hover around, then outline a triangle
    state.on_hover(1.0, 1.0);
    state.on_left_click(0.0, 0.0);
    state.on_left_click(10.0, 0.0);
    state.on_left_click(10.0, 10.0);
    assert_eq!(state.capture_state(), CaptureState::Drawing);

    let label = state
        .request_commit("A", Notes::default())
        .expect("commit should succeed");
    assert_eq!(label, "A");
    assert_eq!(state.capture_state(), CaptureState::Idle);

    // Stored ring is closed: clicks + 1, last == first
    let ring = state.feature_ring("A").unwrap();
    assert_eq!(
        ring,
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
        ]
    );

    // Selector population sees the new label
    assert_eq!(state.labels(), vec!["A"]);
    assert_eq!(
        state.status().map(|s| s.level),
        Some(MessageLevel::Info)
    );
}

#[test]
fn test_commit_with_two_clicks_fails_and_recovers() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(1.0, 1.0);

    let err = state.request_commit("B", Notes::default()).unwrap_err();
    assert!(err.is_validation_error());

    // Store unchanged, buffer intact
    assert!(state.labels().is_empty());
    assert_eq!(
        state.capture.draft().points(),
        &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]
    );

    // Further clicks work as if the failure never happened
    state.on_left_click(0.0, 1.0);
    assert!(state.request_commit("B", Notes::default()).is_ok());
    assert_eq!(state.labels(), vec!["B"]);
}

#[test]
fn test_duplicate_label_commit_leaves_original() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(10.0, 0.0);
    state.on_left_click(10.0, 10.0);
    state.request_commit("A", Notes::default()).unwrap();
    let original: Vec<Point> = state.feature_ring("A").unwrap().to_vec();

    state.on_left_click(5.0, 5.0);
    state.on_left_click(6.0, 5.0);
    state.on_left_click(6.0, 6.0);
    let err = state.request_commit("A", Notes::default()).unwrap_err();
    assert!(err.is_duplicate_label());

    assert_eq!(state.feature_ring("A").unwrap(), original.as_slice());
    assert_eq!(state.labels(), vec!["A"]);
    assert_eq!(state.capture.vertex_count(), 3);
}

#[test]
fn test_duplicate_label_fails_even_with_short_buffer() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(10.0, 0.0);
    state.on_left_click(10.0, 10.0);
    state.request_commit("A", Notes::default()).unwrap();
    let original: Vec<Point> = state.feature_ring("A").unwrap().to_vec();

    // One click would normally fail vertex validation; the duplicate
    // label must be reported instead.
    state.on_left_click(5.0, 5.0);
    let err = state.request_commit("A", Notes::default()).unwrap_err();
    assert!(err.is_duplicate_label());
    assert!(!err.is_validation_error());

    assert_eq!(state.feature_ring("A").unwrap(), original.as_slice());
    assert_eq!(state.labels(), vec!["A"]);
    assert_eq!(state.capture.vertex_count(), 1);
}

#[test]
fn test_clear_discards_draft_and_status() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(1.0, 0.0);
    state.request_commit("x", Notes::default()).unwrap_err();
    assert!(state.status().is_some());

    state.request_clear();
    assert_eq!(state.capture_state(), CaptureState::Idle);
    assert!(state.status().is_none());

    // Idempotent
    state.request_clear();
    assert_eq!(state.capture_state(), CaptureState::Idle);
}

#[test]
fn test_notes_editing_round_trip() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(2.0, 0.0);
    state.on_left_click(2.0, 2.0);
    state
        .request_commit("plot", Notes::new("initial"))
        .unwrap();

    state.set_notes("plot", Notes::new("**revised**")).unwrap();
    assert_eq!(
        state.feature("plot").unwrap().notes().as_markdown(),
        "**revised**"
    );

    assert!(state.set_notes("unknown", Notes::default()).is_err());
}

#[test]
fn test_observers_see_every_commit() {
    let mut state = AnnotatorState::new();
    let committed: Arc<Mutex<Vec<(String, usize)>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = committed.clone();
    state.subscribe(
        EventFilter::Categories(vec![EventCategory::Collection]),
        move |event| {
            if let AnnotateEvent::Collection(CollectionEvent::FeatureCommitted {
                label,
                snapshot,
            }) = event
            {
                sink.lock().unwrap().push((label, snapshot.len()));
            }
        },
    );

    for (label, dx) in [("first", 0.0), ("second", 20.0)] {
        state.on_left_click(dx, 0.0);
        state.on_left_click(dx + 5.0, 0.0);
        state.on_left_click(dx + 5.0, 5.0);
        state.request_commit(label, Notes::default()).unwrap();
    }

    let committed = committed.lock().unwrap();
    assert_eq!(
        committed.as_slice(),
        &[("first".to_string(), 1), ("second".to_string(), 2)]
    );
}

#[test]
fn test_preview_ring_is_distinct_from_draft() {
    let mut state = AnnotatorState::new();
    state.on_left_click(0.0, 0.0);
    state.on_left_click(3.0, 0.0);
    state.on_left_click(3.0, 3.0);
    state.request_commit("done", Notes::default()).unwrap();

    // Start a new draft; the stored preview ring must not change
    state.on_left_click(100.0, 100.0);
    assert_eq!(state.capture.vertex_count(), 1);
    assert_eq!(state.feature_ring("done").unwrap().len(), 4);
}
