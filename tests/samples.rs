use kinelab::{SampleStore, Vec2};

#[test]
fn fresh_store_has_demo_layout() {
    let store = SampleStore::new();
    assert_eq!(store.position(0), Some(Vec2::new(1.0, 0.0)));
    assert_eq!(store.position(1), Some(Vec2::new(1.0, 1.0)));
    assert_eq!(store.position(2), Some(Vec2::new(2.0, 2.0)));
    assert_eq!(store.position(3), Some(Vec2::new(3.0, 1.0)));
    assert_eq!(store.times(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(store.selected(), 0);
}

#[test]
fn set_position_overwrites_unconditionally() {
    let mut store = SampleStore::new();
    store.set_position(2, Vec2::new(-4.0, 7.0));
    store.set_position(2, Vec2::new(0.0, 0.0));
    assert_eq!(store.position(2), Some(Vec2::ZERO));
}

#[test]
fn set_time_resorts_the_whole_series() {
    let mut store = SampleStore::new();
    // Editing slot 0 to 5 reorders the series; position slots keep their
    // pairing by array position, not by the edited field.
    store.set_time(0, 5.0);
    assert_eq!(store.times(), &[2.0, 3.0, 4.0, 5.0]);
    assert_eq!(store.time(0), 2.0);
    assert_eq!(store.time(3), 5.0);
}

#[test]
fn set_time_keeps_series_non_decreasing_after_every_edit() {
    let mut store = SampleStore::new();
    for &(slot, value) in &[(3usize, 0.5), (1, 10.0), (0, 10.0), (2, 0.0)] {
        store.set_time(slot, value);
        let times = store.times();
        assert!(
            times.windows(2).all(|w| w[0] <= w[1]),
            "series must stay sorted, got {times:?}"
        );
    }
}

#[test]
fn select_is_idempotent() {
    let mut store = SampleStore::new();
    store.select(3);
    store.select(3);
    assert_eq!(store.selected(), 3);
}
