use super::*;

// =============================================================
// Geometry and load tracking
// =============================================================

#[test]
fn default_geometry_is_invalid_and_unloaded() {
    let state = EditorState::default();
    assert!(!state.geometry.is_valid());
    assert!(!state.loaded);
}

#[test]
fn first_valid_geometry_requests_a_fetch() {
    let mut state = EditorState::default();
    assert!(state.set_geometry(640.0, 480.0));
}

#[test]
fn invalid_geometry_never_requests_a_fetch() {
    let mut state = EditorState::default();
    assert!(!state.set_geometry(0.0, 480.0));
    assert!(!state.set_geometry(640.0, 0.0));
}

#[test]
fn resize_after_load_does_not_refetch() {
    let mut state = EditorState::default();
    assert!(state.set_geometry(640.0, 480.0));
    state.loaded = true;
    assert!(!state.set_geometry(800.0, 600.0));
}

#[test]
fn remeasure_after_resize_refreshes_conversion_without_refetching() {
    let mut state = EditorState::default();
    assert!(state.set_geometry(640.0, 480.0));
    state.loaded = true;

    // The viewport shrank and the preview rendered at half size. The
    // remeasure must not re-arm the fetch, but clicks must convert
    // against the new size, not the stale one.
    assert!(!state.set_geometry(320.0, 240.0));
    let p = state.capture_point(Point::new(160.0, 120.0)).unwrap();
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 50.0).abs() < 1e-9);
}

#[test]
fn source_change_rearms_the_fetch() {
    let mut state = EditorState::default();
    state.set_geometry(640.0, 480.0);
    state.loaded = true;
    state.mark_source_changed();
    assert!(state.set_geometry(640.0, 480.0));
}

// =============================================================
// Guarded point capture
// =============================================================

#[test]
fn capture_point_is_ignored_before_first_image_load() {
    let state = EditorState::default();
    assert_eq!(state.capture_point(Point::new(10.0, 10.0)), None);
}

#[test]
fn capture_point_converts_once_geometry_is_valid() {
    let mut state = EditorState::default();
    state.set_geometry(200.0, 100.0);
    let p = state.capture_point(Point::new(100.0, 50.0)).unwrap();
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 50.0).abs() < 1e-9);
}
