use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn triangle(store: &mut MaskStore) -> RegionId {
    store.add_point(pt(10.0, 10.0));
    store.add_point(pt(20.0, 10.0));
    store.add_point(pt(15.0, 20.0));
    store.complete().expect("triangle should commit")
}

// =============================================================
// Draft construction
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = MaskStore::new();
    assert!(store.regions().is_empty());
    assert!(store.draft().is_empty());
    assert!(!store.has_draft());
}

#[test]
fn add_point_appends_in_order() {
    let mut store = MaskStore::new();
    store.add_point(pt(1.0, 2.0));
    store.add_point(pt(3.0, 4.0));
    assert_eq!(store.draft(), &[pt(1.0, 2.0), pt(3.0, 4.0)]);
    assert!(store.has_draft());
}

#[test]
fn cancel_clears_draft_without_committing() {
    let mut store = MaskStore::new();
    store.add_point(pt(1.0, 1.0));
    store.add_point(pt(2.0, 2.0));
    store.add_point(pt(3.0, 3.0));
    store.cancel();
    assert!(store.draft().is_empty());
    assert!(store.regions().is_empty());
}

// =============================================================
// Completion
// =============================================================

#[test]
fn complete_with_two_points_discards_draft() {
    let mut store = MaskStore::new();
    store.add_point(pt(1.0, 1.0));
    store.add_point(pt(2.0, 2.0));
    assert_eq!(store.complete(), None);
    assert!(store.draft().is_empty());
    assert!(store.regions().is_empty());
}

#[test]
fn complete_with_two_points_leaves_prior_regions_unchanged() {
    let mut store = MaskStore::new();
    let id = triangle(&mut store);
    let before = store.regions().to_vec();

    store.add_point(pt(0.0, 0.0));
    store.add_point(pt(5.0, 5.0));
    assert_eq!(store.complete(), None);

    assert_eq!(store.regions(), &before[..]);
    assert_eq!(store.regions()[0].id, id);
}

#[test]
fn complete_empty_draft_is_a_no_op() {
    let mut store = MaskStore::new();
    assert_eq!(store.complete(), None);
    assert!(store.regions().is_empty());
}

#[test]
fn complete_with_three_points_commits() {
    let mut store = MaskStore::new();
    let id = triangle(&mut store);
    assert_eq!(store.regions().len(), 1);
    assert_eq!(store.regions()[0].id, id);
    assert_eq!(store.regions()[0].points.len(), 3);
    assert!(store.draft().is_empty());
}

#[test]
fn committed_regions_always_have_at_least_three_vertices() {
    let mut store = MaskStore::new();
    for n in 0..6 {
        for i in 0..n {
            #[allow(clippy::cast_precision_loss)]
            store.add_point(pt(i as f64, i as f64));
        }
        let _ = store.complete();
    }
    for region in store.regions() {
        assert!(region.points.len() >= 3);
    }
}

#[test]
fn ids_are_monotonic() {
    let mut store = MaskStore::new();
    let a = triangle(&mut store);
    let b = triangle(&mut store);
    let c = triangle(&mut store);
    assert!(a < b && b < c);
}

// =============================================================
// Deletion
// =============================================================

#[test]
fn delete_removes_matching_region() {
    let mut store = MaskStore::new();
    let a = triangle(&mut store);
    let b = triangle(&mut store);
    assert!(store.delete(a));
    assert_eq!(store.regions().len(), 1);
    assert_eq!(store.regions()[0].id, b);
}

#[test]
fn delete_absent_id_is_idempotent() {
    let mut store = MaskStore::new();
    let a = triangle(&mut store);
    assert!(store.delete(a));
    assert!(!store.delete(a));
    assert!(!store.delete(999));
    assert!(store.regions().is_empty());
}

#[test]
fn deleted_id_is_not_reused() {
    let mut store = MaskStore::new();
    let a = triangle(&mut store);
    store.delete(a);
    let b = triangle(&mut store);
    assert!(b > a);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn replace_all_installs_loaded_regions() {
    let mut store = MaskStore::new();
    let loaded = vec![
        Region { id: 3, points: vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0)] },
        Region { id: 7, points: vec![pt(50.0, 50.0), pt(60.0, 50.0), pt(55.0, 60.0)] },
    ];
    store.replace_all(loaded.clone());
    assert_eq!(store.regions(), &loaded[..]);
}

#[test]
fn replace_all_seeds_ids_past_loaded_maximum() {
    let mut store = MaskStore::new();
    store.replace_all(vec![Region {
        id: 41,
        points: vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)],
    }]);
    let next = triangle(&mut store);
    assert_eq!(next, 42);
}

#[test]
fn replace_all_preserves_draft() {
    let mut store = MaskStore::new();
    store.add_point(pt(5.0, 5.0));
    store.replace_all(vec![]);
    assert_eq!(store.draft(), &[pt(5.0, 5.0)]);
}

#[test]
fn replace_all_with_empty_set_keeps_id_counter() {
    let mut store = MaskStore::new();
    let a = triangle(&mut store);
    store.replace_all(vec![]);
    let b = triangle(&mut store);
    assert!(b > a);
}

// =============================================================
// Wire shape and center
// =============================================================

#[test]
fn region_wire_shape_matches_device() {
    let region = Region {
        id: 2,
        points: vec![pt(10.0, 20.0), pt(30.0, 20.0), pt(20.0, 40.0)],
    };
    let json = serde_json::to_value(&region).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 2,
            "points": [
                { "x": 10.0, "y": 20.0 },
                { "x": 30.0, "y": 20.0 },
                { "x": 20.0, "y": 40.0 },
            ],
        })
    );
}

#[test]
fn region_round_trips_through_json() {
    let region = Region {
        id: 9,
        points: vec![pt(1.5, 2.5), pt(3.5, 4.5), pt(5.5, 6.5)],
    };
    let json = serde_json::to_string(&region).unwrap();
    let back: Region = serde_json::from_str(&json).unwrap();
    assert_eq!(back, region);
}

#[test]
fn center_is_vertex_mean() {
    let region = Region {
        id: 0,
        points: vec![pt(0.0, 0.0), pt(60.0, 0.0), pt(0.0, 60.0)],
    };
    let c = region.center().unwrap();
    assert!((c.x - 20.0).abs() < 1e-9);
    assert!((c.y - 20.0).abs() < 1e-9);
}
